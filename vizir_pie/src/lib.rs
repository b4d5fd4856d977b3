// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pie and donut chart geometry.
//!
//! This crate turns a list of values into drawable sectors:
//! - [`normalize`] resolves loosely shaped input (bare numbers or records) into [`DataItem`]s,
//! - [`layout`] partitions the full circle by value and resolves each [`Sector`] (radii,
//!   angles, explode offset, palette color, category),
//! - [`sector_path`] and [`compute_arc`] emit compact SVG path data for sectors and arcs.
//!
//! Output is plain data: path strings, `kurbo` points and `peniko` colors. Mounting paths into
//! a scene, animation and hit testing are left to the caller. All operations are pure; identical
//! inputs produce byte-identical paths.
//!
//! ```
//! use vizir_pie::{ChartConfig, DataItem, layout};
//!
//! let items = [DataItem::new(1.0), DataItem::new(3.0)];
//! let sectors = layout(&items, &ChartConfig::new(150.0)).unwrap();
//! assert_eq!(sectors.len(), 2);
//! assert_eq!(sectors[0].arc, 90.0);
//! assert_eq!(sectors[1].start, 90.0);
//! ```

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod arc;
mod data;
mod error;
#[cfg(not(feature = "std"))]
mod float;
mod layout;
mod number;
mod palette;
mod path;
mod sector;

pub use arc::{ArcResult, compute_arc, compute_arc_with_precision};
pub use data::{DataItem, Label, RawItem, RawNumber, RawRecord, normalize};
pub use error::{ItemField, SectorError};
pub use layout::{ChartConfig, layout};
pub use number::{DEFAULT_PRECISION, round_to};
pub use palette::next_color;
pub use sector::{Sector, sector_path, sector_path_with_precision};
