// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sector descriptors and their path data.
//!
//! A sector is drawn as one closed path:
//! - a pie wedge is the outer arc plus a line back to the (offset) center,
//! - a donut wedge is the outer arc, a bridge to the inner circle, the inner arc reversed and
//!   a bridge back,
//! - a full circle is split into two half arcs (plus two reversed half arcs for the hole), since
//!   a single arc command cannot close on itself.

extern crate alloc;

use alloc::string::String;

use kurbo::{BezPath, Circle, Point, Rect, Shape};
use peniko::Color;

use crate::arc::{compute_arc_with_precision, offset_center};
use crate::data::Label;
use crate::error::SectorError;
use crate::number::{DEFAULT_PRECISION, finite_coordinate};
use crate::path::PathWriter;

/// A fully resolved pie/donut sector.
///
/// Angles are in degrees; see [`compute_arc`](crate::compute_arc) for the convention.
#[derive(Clone, Debug, PartialEq)]
pub struct Sector {
    /// Chart center, shared by all sectors of a layout.
    pub center: Point,
    /// Outer radius.
    pub r: f64,
    /// Inner radius (0 for a pie wedge).
    pub ir: f64,
    /// Cumulative degrees before this sector.
    pub start: f64,
    /// Sweep in degrees.
    pub arc: f64,
    /// Explode distance along the sector's bisector.
    pub offset: f64,
    /// Fill color from the palette, if any.
    pub color: Option<Color>,
    /// Category label.
    pub category: Label,
    /// Identity passed through from the data item.
    pub id: Option<Label>,
    /// The datum this sector was sized from.
    pub value: f64,
    /// Position of the datum in the layout input.
    pub index: usize,
    /// SVG path data, filled in by layout.
    pub path: String,
}

impl Sector {
    /// Whether this sector covers the whole circle.
    ///
    /// Layout only produces a full turn for a lone drawn sector, so a dominant sector next to
    /// tiny ones stays a wedge.
    pub fn is_full_circle(&self) -> bool {
        self.arc >= 360.0
    }

    /// The center this sector is actually drawn around, after the offset shift.
    pub fn drawn_center(&self) -> Point {
        if self.offset == 0.0 {
            self.center
        } else {
            offset_center(self.center, self.start, self.arc, self.offset)
        }
    }

    /// Converts this sector into a `BezPath`, flattening arcs with `tolerance`.
    pub fn to_bez_path(&self, tolerance: f64) -> BezPath {
        // Scene angles grow clockwise; ours grow counter-clockwise.
        let start = -(self.start + self.arc).to_radians();
        let sweep = self.arc.min(360.0).to_radians();
        Circle::new(self.drawn_center(), self.r)
            .segment(self.ir, start, sweep)
            .path_elements(tolerance)
            .collect()
    }

    /// Bounding box of the drawn sector.
    pub fn bounds(&self) -> Rect {
        self.to_bez_path(0.1).bounding_box()
    }
}

/// Builds the path data for `sector` with [`DEFAULT_PRECISION`].
pub fn sector_path(sector: &Sector) -> Result<String, SectorError> {
    sector_path_with_precision(sector, DEFAULT_PRECISION)
}

/// Builds the path data for `sector`, rounding every token to `precision` decimals.
///
/// The inner radius must be finite and lie in `[0, |r|]`.
pub fn sector_path_with_precision(sector: &Sector, precision: u8) -> Result<String, SectorError> {
    let ir = sector.ir;
    if !ir.is_finite() || ir < 0.0 || ir > sector.r.abs() {
        return Err(SectorError::InvalidRadius {
            name: "inner_radius",
            value: ir,
        });
    }
    finite_coordinate("offset", sector.offset)?;
    if sector.is_full_circle() {
        return full_circle_path(sector, precision);
    }

    let offset = (sector.offset != 0.0).then_some(sector.offset);
    let arc = |radius, clockwise| {
        compute_arc_with_precision(
            sector.center,
            radius,
            sector.start,
            sector.arc,
            offset,
            clockwise,
            precision,
        )
    };

    let outer = arc(sector.r, true)?;
    let mut w = PathWriter::new(precision);
    w.move_to(outer.origin());
    w.fragment(&outer.fragment);
    if sector.ir > 0.0 {
        let inner = arc(sector.ir, false)?;
        w.line_by(inner.origin() - outer.terminus());
        w.fragment(&inner.fragment);
        w.line_by(outer.origin() - inner.terminus());
    } else {
        w.line_by(outer.center - outer.terminus());
    }
    w.close();
    Ok(w.finish())
}

fn full_circle_path(sector: &Sector, precision: u8) -> Result<String, SectorError> {
    // Both halves share one center, shifted along the bisector of the whole turn.
    let center = sector.drawn_center();
    let half = |radius, from: f64, clockwise| {
        compute_arc_with_precision(center, radius, from, 180.0, None, clockwise, precision)
    };

    let first = half(sector.r, sector.start, true)?;
    let second = half(sector.r, sector.start + 180.0, true)?;
    let mut w = PathWriter::new(precision);
    w.move_to(first.origin());
    w.fragment(&first.fragment);
    w.fragment(&second.fragment);
    w.close();

    if sector.ir > 0.0 {
        let first_inner = half(sector.ir, sector.start, false)?;
        let second_inner = half(sector.ir, sector.start + 180.0, false)?;
        // After `z` the pen is back at the outer ring's origin.
        w.move_by(first_inner.origin() - first.origin());
        w.fragment(&first_inner.fragment);
        w.fragment(&second_inner.fragment);
        w.close();
    }
    Ok(w.finish())
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    fn sector(start: f64, arc: f64, r: f64, ir: f64) -> Sector {
        Sector {
            center: Point::new(10.0, 10.0),
            r,
            ir,
            start,
            arc,
            offset: 0.0,
            color: None,
            category: Label::Number(1),
            id: None,
            value: 1.0,
            index: 0,
            path: String::new(),
        }
    }

    #[test]
    fn wedge_returns_to_center() {
        let path = sector_path(&sector(0.0, 90.0, 10.0, 0.0)).unwrap();
        // Starts at 90° (top), sweeps clockwise on screen to 0° (right), then back to center.
        assert_eq!(path, "m10 0 a10 10 0 0 1 10 10 l-10 0 z");
    }

    #[test]
    fn donut_wedge_bridges_both_rings() {
        let path = sector_path(&sector(0.0, 90.0, 10.0, 5.0)).unwrap();
        assert_eq!(
            path,
            "m10 0 a10 10 0 0 1 10 10 l-5 0 a5 5 0 0 0 -5 -5 l0 -5 z"
        );
    }

    #[test]
    fn full_circle_is_split_in_halves() {
        let path = sector_path(&sector(0.0, 360.0, 10.0, 0.0)).unwrap();
        assert_eq!(path, "m0 10 a10 10 0 0 1 20 0 a10 10 0 0 1 -20 0 z");
        assert!(!path.contains(" 1 1 "), "no large arc: {path}");
    }

    #[test]
    fn full_donut_has_a_second_subpath() {
        let path = sector_path(&sector(0.0, 360.0, 10.0, 4.0)).unwrap();
        assert_eq!(
            path,
            "m0 10 a10 10 0 0 1 20 0 a10 10 0 0 1 -20 0 z \
             m14 0 a4 4 0 0 0 -8 0 a4 4 0 0 0 8 0 z"
        );
    }

    #[test]
    fn offset_shifts_the_wedge_but_keeps_its_shape() {
        let plain = sector(0.0, 90.0, 10.0, 0.0);
        let mut exploded = plain.clone();
        exploded.offset = 2.0;
        let a = sector_path(&plain).unwrap();
        let b = sector_path(&exploded).unwrap();
        assert_ne!(a, b);
        // Only the absolute move differs; the relative commands are identical.
        let tail = |s: &str| s.split_once(" a").map(|(_, t)| String::from(t));
        assert_eq!(tail(&a), tail(&b));
    }

    #[test]
    fn bez_path_bounds_cover_the_sector() {
        let b = sector(0.0, 90.0, 10.0, 0.0).bounds();
        // Upper-right quadrant on screen.
        assert!(b.x0 >= 10.0 - 1e-6 && b.x1 <= 20.0 + 1e-6, "{b:?}");
        assert!(b.y0 >= -1e-6 && b.y1 <= 10.0 + 1e-6, "{b:?}");
        assert!(b.width() > 9.0 && b.height() > 9.0, "{b:?}");

        let full = sector(0.0, 360.0, 10.0, 4.0).bounds();
        assert!((full.width() - 20.0).abs() < 0.5, "{full:?}");
    }

    #[test]
    fn invalid_offset_is_rejected() {
        let mut s = sector(0.0, 90.0, 10.0, 0.0);
        s.offset = f64::NAN;
        assert!(
            matches!(
                sector_path(&s),
                Err(SectorError::InvalidCoordinate { name: "offset", .. })
            ),
            "NaN offset"
        );
    }

    #[test]
    fn invalid_inner_radius_is_rejected() {
        for (arc, ir) in [(90.0, f64::NAN), (360.0, f64::NAN), (90.0, f64::INFINITY)] {
            assert!(
                matches!(
                    sector_path(&sector(0.0, arc, 10.0, ir)),
                    Err(SectorError::InvalidRadius {
                        name: "inner_radius",
                        ..
                    })
                ),
                "inner radius {ir} on a {arc} degree sector"
            );
        }
        assert_eq!(
            sector_path(&sector(0.0, 90.0, 10.0, 50.0)),
            Err(SectorError::InvalidRadius {
                name: "inner_radius",
                value: 50.0
            })
        );
        assert_eq!(
            sector_path(&sector(0.0, 90.0, 10.0, -1.0)),
            Err(SectorError::InvalidRadius {
                name: "inner_radius",
                value: -1.0
            })
        );
        // An inner radius equal to the outer one is a degenerate but valid ring.
        assert!(sector_path(&sector(0.0, 90.0, 10.0, 10.0)).is_ok(), "ir == r");
    }

    #[test]
    fn near_full_sweep_stays_a_wedge() {
        let path = sector_path(&sector(0.0, 360.0 - 1e-12, 10.0, 0.0)).unwrap();
        assert!(path.contains(" l"), "expected a line back to the center: {path}");
        assert!(!sector(0.0, 360.0 - 1e-12, 10.0, 0.0).is_full_circle());
    }

    #[test]
    fn huge_center_keeps_tokens_finite() {
        let mut s = sector(0.0, 90.0, 10.0, 0.0);
        s.center = Point::new(1e304, 1e304);
        let path = sector_path(&s).unwrap();
        assert!(!path.contains("inf"), "{path}");
    }
}
