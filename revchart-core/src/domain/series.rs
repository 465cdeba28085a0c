//! Per-company yearly series and the plotted year range.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Raw amounts are divided by this before they enter a series (billions).
pub const REVENUE_SCALE: f64 = 1e9;

/// Longest range a chart config may ask for, in years.
pub const MAX_YEAR_SPAN: usize = 100;

/// Inclusive range of calendar years drawn on the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearRange {
    pub first: i32,
    pub last: i32,
}

impl Default for YearRange {
    fn default() -> Self {
        Self {
            first: 2020,
            last: 2024,
        }
    }
}

impl YearRange {
    pub fn new(first: i32, last: i32) -> Self {
        Self { first, last }
    }

    pub fn is_valid(&self) -> bool {
        self.first <= self.last
    }

    pub fn contains(&self, year: i32) -> bool {
        (self.first..=self.last).contains(&year)
    }

    /// Years in ascending order. Empty when the range is inverted.
    pub fn years(&self) -> impl Iterator<Item = i32> {
        self.first..=self.last
    }

    pub fn len(&self) -> usize {
        if self.is_valid() {
            self.last.abs_diff(self.first) as usize + 1
        } else {
            0
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One chart row: a company and its revenue per calendar year, in billions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanySeries {
    pub company: String,
    values: BTreeMap<i32, f64>,
}

impl CompanySeries {
    pub fn new(company: impl Into<String>) -> Self {
        Self {
            company: company.into(),
            values: BTreeMap::new(),
        }
    }

    /// Build a series from `(year, value)` pairs; later pairs win.
    pub fn from_values(
        company: impl Into<String>,
        values: impl IntoIterator<Item = (i32, f64)>,
    ) -> Self {
        let mut series = Self::new(company);
        for (year, value) in values {
            series.insert(year, value);
        }
        series
    }

    /// Set the value for `year`, returning the value it replaced.
    pub fn insert(&mut self, year: i32, value: f64) -> Option<f64> {
        self.values.insert(year, value)
    }

    /// Value for `year`, if the company reported one.
    pub fn value(&self, year: i32) -> Option<f64> {
        self.values.get(&year).copied()
    }

    /// `(year, value)` pairs in ascending year order.
    pub fn values(&self) -> impl Iterator<Item = (i32, f64)> + '_ {
        self.values.iter().map(|(&y, &v)| (y, v))
    }

    pub fn years(&self) -> impl Iterator<Item = i32> + '_ {
        self.values.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
