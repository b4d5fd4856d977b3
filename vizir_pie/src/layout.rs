// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pie/donut layout: partition the circle by value and resolve each sector.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Point;
use log::{debug, trace};
use peniko::Color;

use crate::data::{DataItem, Label};
use crate::error::SectorError;
use crate::number::{DEFAULT_PRECISION, finite_coordinate};
use crate::palette::next_index;
use crate::sector::{Sector, sector_path_with_precision};

/// Chart-wide layout parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartConfig {
    /// Outer radius; must be finite and positive.
    pub radius: f64,
    /// Inner radius; must lie in `[0, radius]`. Non-zero gives a donut.
    pub inner_radius: f64,
    /// Explode distance applied to every sector.
    pub offset: f64,
    /// Ordered palette, cycled over the drawn sectors. May be empty.
    ///
    /// Entries are taken by position, so a palette with repeated colors still reaches every
    /// entry.
    pub colors: Vec<Color>,
    /// Chart center. Defaults to `(radius + offset, radius + offset)`.
    pub center: Option<Point>,
    /// Decimal places kept in path data.
    pub precision: u8,
}

impl ChartConfig {
    /// Creates a pie config with the given outer radius.
    pub fn new(radius: f64) -> Self {
        Self {
            radius,
            inner_radius: 0.0,
            offset: 0.0,
            colors: Vec::new(),
            center: None,
            precision: DEFAULT_PRECISION,
        }
    }

    /// Sets the inner radius.
    pub fn with_inner_radius(mut self, inner_radius: f64) -> Self {
        self.inner_radius = inner_radius;
        self
    }

    /// Sets the chart-wide explode distance.
    pub fn with_offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    /// Sets the palette.
    pub fn with_colors(mut self, colors: impl IntoIterator<Item = Color>) -> Self {
        self.colors = colors.into_iter().collect();
        self
    }

    /// Sets the chart center.
    pub fn with_center(mut self, center: Point) -> Self {
        self.center = Some(center);
        self
    }

    /// Sets the number of decimals kept in path data.
    pub fn with_precision(mut self, precision: u8) -> Self {
        self.precision = precision;
        self
    }

    /// The center all sectors share.
    pub fn resolved_center(&self) -> Point {
        self.center.unwrap_or_else(|| {
            let c = self.radius + self.offset;
            Point::new(c, c)
        })
    }

    /// Checks radii, offset and center.
    pub fn validate(&self) -> Result<(), SectorError> {
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(SectorError::InvalidRadius {
                name: "radius",
                value: self.radius,
            });
        }
        let ir = self.inner_radius;
        if !ir.is_finite() || ir < 0.0 || ir > self.radius {
            return Err(SectorError::InvalidRadius {
                name: "inner_radius",
                value: ir,
            });
        }
        finite_coordinate("offset", self.offset)?;
        let center = self.resolved_center();
        finite_coordinate("x", center.x)?;
        finite_coordinate("y", center.y)?;
        Ok(())
    }
}

/// Lays out `items` as pie/donut sectors.
///
/// Items with a value `<= 0` are not drawn. If the values sum to `<= 0` the result is empty.
/// Drawn sectors are ordered by ascending value (ties keep input order), so larger sectors
/// come later and paint on top where exploded sectors overlap. Their sweeps sum to 360°.
///
/// Any invalid item or parameter fails the whole call.
pub fn layout(items: &[DataItem], config: &ChartConfig) -> Result<Vec<Sector>, SectorError> {
    config.validate()?;
    for (index, item) in items.iter().enumerate() {
        item.validate(index)?;
    }

    // Values are divided by the largest magnitude before summing so that large finite
    // inputs can't overflow the totals.
    let scale = items
        .iter()
        .map(|item| item.value.abs())
        .fold(0.0, f64::max);
    let total = scaled_sum(items.iter().map(|item| item.value), scale);
    if total <= 0.0 {
        debug!("values sum to {total} (scaled by {scale}); no sectors to lay out");
        return Ok(Vec::new());
    }

    let mut drawn: Vec<(usize, &DataItem)> = items
        .iter()
        .enumerate()
        .filter(|(_, item)| item.value > 0.0)
        .collect();
    if drawn.len() < items.len() {
        debug!(
            "omitting {} non-positive item(s)",
            items.len() - drawn.len()
        );
    }
    // Non-positive items are excluded from the partition so the sweeps sum to a full turn.
    let max = drawn
        .iter()
        .map(|(_, item)| item.value)
        .fold(0.0, f64::max);
    let positive_total = scaled_sum(drawn.iter().map(|(_, item)| item.value), max);
    drawn.sort_by(|(ia, a), (ib, b)| a.value.total_cmp(&b.value).then(ia.cmp(ib)));

    let center = config.resolved_center();
    let (_, _, sectors) = drawn.into_iter().try_fold(
        (0.0, None, Vec::with_capacity(items.len())),
        |(start, previous, mut sectors): (f64, Option<usize>, Vec<Sector>), (index, item)| {
            let arc = item.value / max / positive_total * 360.0;
            let slot = next_index(config.colors.len(), previous);
            let mut sector = Sector {
                center,
                r: config.radius,
                ir: config.inner_radius,
                start,
                arc,
                offset: config.offset + item.offset.unwrap_or(0.0),
                color: slot.and_then(|i| config.colors.get(i).copied()),
                category: item
                    .category
                    .clone()
                    .unwrap_or_else(|| default_category(index)),
                id: item.id.clone(),
                value: item.value,
                index,
                path: String::new(),
            };
            sector.path = sector_path_with_precision(&sector, config.precision)?;
            trace!(
                "sector {}: start {start} arc {arc} path {}",
                sector.category, sector.path
            );
            sectors.push(sector);
            Ok::<_, SectorError>((start + arc, slot, sectors))
        },
    )?;
    Ok(sectors)
}

/// Sums `values / scale`, or 0 when `scale` is 0.
fn scaled_sum(values: impl Iterator<Item = f64>, scale: f64) -> f64 {
    if scale > 0.0 {
        values.map(|v| v / scale).sum()
    } else {
        0.0
    }
}

fn default_category(index: usize) -> Label {
    Label::Number(i64::try_from(index).map_or(i64::MAX, |i| i.saturating_add(1)))
}
