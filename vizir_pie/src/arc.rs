// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Circular arc geometry in SVG path terms.
//!
//! Angles are in degrees. 0° points along +X and positive angles turn counter-clockwise in
//! math convention. Scene coordinates grow downward, so a point at angle `θ` sits at
//! `center + r * (cos θ, -sin θ)`: a counter-clockwise turn in degrees is a clockwise turn on
//! screen.

extern crate alloc;

use alloc::string::String;

use kurbo::{Point, Vec2};

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::error::SectorError;
use crate::number::{DEFAULT_PRECISION, finite_coordinate, nonzero_radius, round_to};
use crate::path::arc_fragment;

/// One computed circular arc, ready to be spliced into a path.
///
/// All coordinates are already rounded to the requested precision.
#[derive(Clone, Debug, PartialEq)]
pub struct ArcResult {
    /// Arc center, after any offset shift.
    pub center: Point,
    /// Point on the circle at the start angle.
    pub start: Point,
    /// Point on the circle at `start + arc`.
    pub end: Point,
    /// Relative move from [`origin`](Self::origin) to [`terminus`](Self::terminus).
    pub delta: Vec2,
    /// Radius as written into the fragment.
    pub radius: f64,
    /// SVG large-arc flag: the sweep spans more than 180°.
    pub large: bool,
    /// SVG sweep flag: the arc is traversed clockwise on screen.
    pub sweep: bool,
    /// `a<r> <r> 0 <large> <sweep> <dx> <dy>`
    pub fragment: String,
}

impl ArcResult {
    /// Where a path drawing this arc has to begin.
    ///
    /// Clockwise arcs run from [`end`](Self::end) back to [`start`](Self::start);
    /// counter-clockwise arcs run the other way.
    pub fn origin(&self) -> Point {
        if self.sweep { self.end } else { self.start }
    }

    /// Where the arc leaves the pen.
    pub fn terminus(&self) -> Point {
        if self.sweep { self.start } else { self.end }
    }
}

/// Computes an arc with [`DEFAULT_PRECISION`].
///
/// See [`compute_arc_with_precision`].
pub fn compute_arc(
    center: Point,
    radius: f64,
    start_deg: f64,
    arc_deg: f64,
    offset: Option<f64>,
    clockwise: bool,
) -> Result<ArcResult, SectorError> {
    compute_arc_with_precision(
        center,
        radius,
        start_deg,
        arc_deg,
        offset,
        clockwise,
        DEFAULT_PRECISION,
    )
}

/// Computes the path fragment for one circular arc.
///
/// `offset`, when given, moves the arc's center that far along the bisector of the swept
/// range; this is how an exploded sector is pushed away from the chart center.
///
/// Fails with [`SectorError::InvalidRadius`] for a zero or non-finite radius, and with
/// [`SectorError::InvalidCoordinate`] for a non-finite center, angle or offset.
pub fn compute_arc_with_precision(
    center: Point,
    radius: f64,
    start_deg: f64,
    arc_deg: f64,
    offset: Option<f64>,
    clockwise: bool,
    precision: u8,
) -> Result<ArcResult, SectorError> {
    finite_coordinate("x", center.x)?;
    finite_coordinate("y", center.y)?;
    nonzero_radius("radius", radius)?;
    finite_coordinate("start", start_deg)?;
    finite_coordinate("arc", arc_deg)?;
    let center = match offset {
        Some(offset) => offset_center(
            center,
            start_deg,
            arc_deg,
            finite_coordinate("offset", offset)?,
        ),
        None => center,
    };

    let start = point_at(center, radius, start_deg);
    let end = point_at(center, radius, start_deg + arc_deg);
    let delta = if clockwise { start - end } else { end - start };
    let large = arc_deg > 180.0;

    let round_point = |p: Point| Point::new(round_to(p.x, precision), round_to(p.y, precision));
    let delta = Vec2::new(round_to(delta.x, precision), round_to(delta.y, precision));
    Ok(ArcResult {
        center: round_point(center),
        start: round_point(start),
        end: round_point(end),
        delta,
        radius: round_to(radius, precision),
        large,
        sweep: clockwise,
        fragment: arc_fragment(radius, large, clockwise, delta, precision),
    })
}

/// Shifts `center` by `offset` along the bisector of `[start_deg, start_deg + arc_deg]`.
pub(crate) fn offset_center(center: Point, start_deg: f64, arc_deg: f64, offset: f64) -> Point {
    let bisector = -(start_deg + arc_deg * 0.5).to_radians();
    center + Vec2::new(offset * bisector.cos(), offset * bisector.sin())
}

fn point_at(center: Point, radius: f64, angle_deg: f64) -> Point {
    let a = angle_deg.to_radians();
    center + Vec2::new(radius * a.cos(), -radius * a.sin())
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    fn assert_point_close(a: Point, b: Point) {
        let eps = 1e-9;
        assert!((a.x - b.x).abs() <= eps, "x {a:?} != {b:?}");
        assert!((a.y - b.y).abs() <= eps, "y {a:?} != {b:?}");
    }

    #[test]
    fn half_turn_from_zero() {
        let arc = compute_arc(Point::ORIGIN, 10.0, 0.0, 180.0, Some(0.0), true).unwrap();
        assert_point_close(arc.start, Point::new(10.0, 0.0));
        assert_point_close(arc.end, Point::new(-10.0, 0.0));
        assert!(!arc.large, "180° is not a large arc");
        assert!(arc.sweep, "clockwise sets the sweep flag");
        assert_eq!(arc.fragment, "a10 10 0 0 1 20 0");
        assert_point_close(arc.origin(), Point::new(-10.0, 0.0));
    }

    #[test]
    fn positive_angles_point_up_on_screen() {
        let arc = compute_arc(Point::new(5.0, 5.0), 2.0, 90.0, 90.0, None, true).unwrap();
        assert_point_close(arc.start, Point::new(5.0, 3.0));
        assert_point_close(arc.end, Point::new(3.0, 5.0));
        assert_eq!(arc.delta, Vec2::new(2.0, -2.0));
    }

    #[test]
    fn counter_clockwise_reverses_delta_and_endpoints() {
        let cw = compute_arc(Point::ORIGIN, 4.0, 30.0, 200.0, None, true).unwrap();
        let ccw = compute_arc(Point::ORIGIN, 4.0, 30.0, 200.0, None, false).unwrap();
        assert!(cw.large && ccw.large, "200° is a large arc");
        assert_eq!(cw.delta, -ccw.delta);
        assert_eq!(cw.origin(), ccw.terminus());
        assert!(ccw.fragment.starts_with("a4 4 0 1 0 "), "{}", ccw.fragment);
    }

    #[test]
    fn offset_moves_center_along_bisector() {
        let arc = compute_arc(Point::new(10.0, 10.0), 5.0, 0.0, 90.0, Some(2.0), true).unwrap();
        let s = core::f64::consts::SQRT_2;
        assert_point_close(arc.center, Point::new(round_to(10.0 + s, 5), round_to(10.0 - s, 5)));
        // Offsetting translates both endpoints equally, so the delta is unchanged.
        let plain = compute_arc(Point::new(10.0, 10.0), 5.0, 0.0, 90.0, None, true).unwrap();
        assert_eq!(arc.delta, plain.delta);
    }

    #[test]
    fn rejects_invalid_inputs() {
        assert_eq!(
            compute_arc(Point::ORIGIN, 0.0, 0.0, 90.0, None, true),
            Err(SectorError::InvalidRadius {
                name: "radius",
                value: 0.0
            })
        );
        assert!(
            matches!(
                compute_arc(Point::new(f64::NAN, 0.0), 1.0, 0.0, 90.0, None, true),
                Err(SectorError::InvalidCoordinate { name: "x", .. })
            ),
            "NaN x should be rejected"
        );
        assert!(
            matches!(
                compute_arc(Point::ORIGIN, 1.0, 0.0, 90.0, Some(f64::NAN), true),
                Err(SectorError::InvalidCoordinate { name: "offset", .. })
            ),
            "NaN offset should be rejected"
        );
        assert!(
            compute_arc(Point::ORIGIN, f64::NAN, 0.0, 90.0, None, true).is_err(),
            "NaN radius should be rejected"
        );
    }

    #[test]
    fn precision_controls_fragment_tokens() {
        let arc =
            compute_arc_with_precision(Point::ORIGIN, 10.0, 0.0, 60.0, None, true, 2).unwrap();
        // start (10, 0), end (5, -8.660254...)
        assert_eq!(arc.fragment, "a10 10 0 0 1 5 8.66");
        assert_eq!(arc.end, Point::new(5.0, -8.66));
    }
}
