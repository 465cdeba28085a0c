//! Aggregation: flat revenue records into one series per company.
//!
//! Groups keep the order in which companies first appear. Within a group
//! each record sets `values[year]`; a later record for the same year
//! replaces the earlier one. Malformed records are skipped and reported,
//! never fatal.

use std::collections::HashMap;

use tracing::warn;

use crate::domain::{CompanySeries, RecordError, RevenueRecord, REVENUE_SCALE};

/// A record left out of aggregation.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRecord {
    /// Position in the input sequence.
    pub position: usize,
    pub error: RecordError,
}

/// Aggregated series plus the records that could not be used.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Aggregation {
    pub series: Vec<CompanySeries>,
    pub skipped: Vec<SkippedRecord>,
}

/// Group records into per-company yearly series (billions).
pub fn aggregate(records: &[RevenueRecord]) -> Vec<CompanySeries> {
    aggregate_with_report(records).series
}

/// Like [`aggregate`], also returning what was skipped and why.
pub fn aggregate_with_report(records: &[RevenueRecord]) -> Aggregation {
    let mut series: Vec<CompanySeries> = Vec::new();
    let mut slots: HashMap<&str, usize> = HashMap::new();
    let mut skipped = Vec::new();

    for (position, record) in records.iter().enumerate() {
        let valid = match record.validate() {
            Ok(valid) => valid,
            Err(error) => {
                warn!(position, %error, "skipping malformed revenue record");
                skipped.push(SkippedRecord { position, error });
                continue;
            }
        };

        let slot = *slots.entry(valid.company).or_insert_with(|| {
            series.push(CompanySeries::new(valid.company));
            series.len() - 1
        });
        series[slot].insert(valid.year, valid.amount / REVENUE_SCALE);
    }

    Aggregation { series, skipped }
}

/// Distinct company identifiers in series order.
pub fn companies(series: &[CompanySeries]) -> Vec<&str> {
    series.iter().map(|s| s.company.as_str()).collect()
}
