// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input data for sector layout.
//!
//! Callers hand over loosely shaped items (a bare number, or a record with a `value` and
//! optional extras). [`normalize`] resolves that shape once into [`DataItem`]s, which layout
//! consumes without re-checking the shape.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::error::{ItemField, SectorError};

/// A category or identity label.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Label {
    /// A numeric label. Default categories are 1-based input positions.
    Number(i64),
    /// A textual label.
    Text(String),
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Label {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for Label {
    fn from(value: &str) -> Self {
        Self::Text(value.into())
    }
}

impl From<String> for Label {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// A number as supplied by the caller, possibly still in text form.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum RawNumber {
    /// Already numeric.
    Number(f64),
    /// Text to be parsed as `f64` (surrounding whitespace is ignored).
    Text(String),
}

impl RawNumber {
    /// Parses to a finite `f64`, or `None`.
    pub fn parse(&self) -> Option<f64> {
        let v = match self {
            Self::Number(v) => *v,
            Self::Text(s) => s.trim().parse::<f64>().ok()?,
        };
        v.is_finite().then_some(v)
    }
}

impl From<f64> for RawNumber {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for RawNumber {
    fn from(value: &str) -> Self {
        Self::Text(value.into())
    }
}

/// The record form of a raw item.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RawRecord {
    /// Required; a record without it is rejected.
    pub value: Option<RawNumber>,
    /// Per-item explode distance.
    pub offset: Option<RawNumber>,
    /// Category label.
    pub category: Option<Label>,
    /// Opaque identity, passed through to the sector.
    pub id: Option<Label>,
}

/// One raw input datum: a bare number or a record.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum RawItem {
    /// A bare number, taken as the item's value.
    Value(RawNumber),
    /// A record with a value and optional extras.
    Record(RawRecord),
}

impl From<f64> for RawItem {
    fn from(value: f64) -> Self {
        Self::Value(RawNumber::Number(value))
    }
}

impl From<RawRecord> for RawItem {
    fn from(value: RawRecord) -> Self {
        Self::Record(value)
    }
}

/// A validated datum.
#[derive(Clone, Debug, PartialEq)]
pub struct DataItem {
    /// The datum's magnitude. Non-positive values are kept but never drawn.
    pub value: f64,
    /// Per-item explode distance, added to the chart-wide offset.
    pub offset: Option<f64>,
    /// Category label; defaults to the 1-based input position.
    pub category: Option<Label>,
    /// Opaque identity.
    pub id: Option<Label>,
}

impl DataItem {
    /// Creates an item with only a value.
    pub fn new(value: f64) -> Self {
        Self {
            value,
            offset: None,
            category: None,
            id: None,
        }
    }

    /// Sets the per-item offset.
    pub fn with_offset(mut self, offset: f64) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Sets the category label.
    pub fn with_category(mut self, category: impl Into<Label>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Sets the identity label.
    pub fn with_id(mut self, id: impl Into<Label>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Checks that `value` and `offset` are finite; `index` is used for error reporting.
    pub fn validate(&self, index: usize) -> Result<(), SectorError> {
        if !self.value.is_finite() {
            return Err(SectorError::InvalidValue {
                index,
                field: ItemField::Value,
            });
        }
        if self.offset.is_some_and(|o| !o.is_finite()) {
            return Err(SectorError::InvalidValue {
                index,
                field: ItemField::Offset,
            });
        }
        Ok(())
    }
}

impl From<f64> for DataItem {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

/// Resolves raw items into [`DataItem`]s.
///
/// The first failing item aborts the call.
pub fn normalize(items: &[RawItem]) -> Result<Vec<DataItem>, SectorError> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| normalize_one(index, item))
        .collect()
}

fn normalize_one(index: usize, item: &RawItem) -> Result<DataItem, SectorError> {
    let invalid = |field| SectorError::InvalidValue { index, field };
    match item {
        RawItem::Value(raw) => raw
            .parse()
            .map(DataItem::new)
            .ok_or_else(|| invalid(ItemField::Value)),
        RawItem::Record(record) => {
            let raw = record
                .value
                .as_ref()
                .ok_or(SectorError::MissingValue { index })?;
            let value = raw.parse().ok_or_else(|| invalid(ItemField::Value))?;
            let offset = match &record.offset {
                Some(raw) => Some(raw.parse().ok_or_else(|| invalid(ItemField::Offset))?),
                None => None,
            };
            Ok(DataItem {
                value,
                offset,
                category: record.category.clone(),
                id: record.id.clone(),
            })
        }
    }
}
