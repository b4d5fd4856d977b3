// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Numeric rounding and validation helpers.

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::error::SectorError;

/// Number of decimal places kept in emitted path tokens unless configured otherwise.
pub const DEFAULT_PRECISION: u8 = 5;

/// Precisions above this are clamped; `f64` carries no more significant decimals.
const MAX_PRECISION: u8 = 15;

/// Rounds `value` to `precision` decimal places, halves rounding up.
///
/// Negative zero is folded into `0.0` so formatted output never shows `-0`.
/// Non-finite values are returned unchanged, as are values too large to scale (those carry
/// no fractional digits at any precision).
pub fn round_to(value: f64, precision: u8) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let factor = 10.0_f64.powi(i32::from(precision.min(MAX_PRECISION)));
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    let rounded = (scaled + 0.5).floor() / factor;
    rounded + 0.0
}

pub(crate) fn finite_coordinate(name: &'static str, value: f64) -> Result<f64, SectorError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SectorError::InvalidCoordinate { name, value })
    }
}

/// Accepts any finite, non-zero radius.
pub(crate) fn nonzero_radius(name: &'static str, value: f64) -> Result<f64, SectorError> {
    if value.is_finite() && value != 0.0 {
        Ok(value)
    } else {
        Err(SectorError::InvalidRadius { name, value })
    }
}
