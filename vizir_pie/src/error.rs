// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types shared by arc geometry, normalization and layout.

use core::fmt;

use thiserror::Error;

/// The numeric field of a data item that failed validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ItemField {
    /// The item's `value`.
    Value,
    /// The item's per-item `offset`.
    Offset,
}

impl fmt::Display for ItemField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Value => "value",
            Self::Offset => "offset",
        })
    }
}

/// Errors returned by sector geometry and layout.
///
/// Every variant is a precondition violation detected at the call that raised it.
/// Layout never skips a failing item: one bad datum fails the whole call.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum SectorError {
    /// A record-form item has no `value` at all.
    #[error("item {index} has no value")]
    MissingValue {
        /// Position of the item in the input.
        index: usize,
    },
    /// An item's `value` or `offset` is not a finite number.
    #[error("item {index} has a non-numeric {field}")]
    InvalidValue {
        /// Position of the item in the input.
        index: usize,
        /// Which field failed.
        field: ItemField,
    },
    /// A radius is non-finite or zero, or the inner radius lies outside `[0, radius]`.
    #[error("invalid radius: {name} = {value}")]
    InvalidRadius {
        /// The parameter name (`radius` or `inner_radius`).
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// A center coordinate, angle or offset is not a finite number.
    #[error("invalid coordinate: {name} = {value}")]
    InvalidCoordinate {
        /// The parameter name.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
}
