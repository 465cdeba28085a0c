//! Label policy: which bars carry a value label.
//!
//! Only two points per company are labeled: the first plotted year with a
//! strictly positive value, and the last year of the plotted range. The
//! first-non-zero map is built from the full, unfiltered series set so
//! changing the selection never moves a visible company's labels.

use std::collections::HashMap;

use crate::domain::{CompanySeries, YearRange};

/// Company → first plotted year with a value strictly above zero.
///
/// Companies without any positive value in range are absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FirstNonZeroYears {
    years: HashMap<String, i32>,
}

impl FirstNonZeroYears {
    pub fn get(&self, company: &str) -> Option<i32> {
        self.years.get(company).copied()
    }

    pub fn len(&self) -> usize {
        self.years.len()
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }
}

/// Scan each series over `range` in ascending order.
pub fn first_non_zero_years(series: &[CompanySeries], range: YearRange) -> FirstNonZeroYears {
    let years = series
        .iter()
        .filter_map(|s| {
            range
                .years()
                .find(|&year| s.value(year).is_some_and(|v| v > 0.0))
                .map(|year| (s.company.clone(), year))
        })
        .collect();
    FirstNonZeroYears { years }
}

/// True iff `value > 0` and `year` is the company's first non-zero year or
/// the last plotted year.
pub fn should_label(
    company: &str,
    year: i32,
    value: f64,
    first_non_zero: &FirstNonZeroYears,
    last_year: i32,
) -> bool {
    value > 0.0 && (year == last_year || first_non_zero.get(company) == Some(year))
}
