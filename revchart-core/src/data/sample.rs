//! Built-in sample record set: fiscal-year total revenue of the M7.
//!
//! Used when no source is configured so the chart has something to show
//! offline. Dates are fiscal year ends, so NVIDIA's years run one ahead of
//! the calendar and its last fiscal year falls outside the default range.

use super::provider::{RecordSource, SourceError, SourceKind};
use crate::domain::RevenueRecord;

/// The seven companies in the sample set, in record order.
pub const M7_TICKERS: [&str; 7] = ["AAPL", "MSFT", "GOOGL", "AMZN", "NVDA", "META", "TSLA"];

// (ticker, fiscal year end, total revenue in USD)
const SAMPLE_ROWS: &[(&str, &str, f64)] = &[
    ("AAPL", "2020-09-26", 274_515_000_000.0),
    ("AAPL", "2021-09-25", 365_817_000_000.0),
    ("AAPL", "2022-09-24", 394_328_000_000.0),
    ("AAPL", "2023-09-30", 383_285_000_000.0),
    ("AAPL", "2024-09-28", 391_035_000_000.0),
    ("MSFT", "2020-06-30", 143_015_000_000.0),
    ("MSFT", "2021-06-30", 168_088_000_000.0),
    ("MSFT", "2022-06-30", 198_270_000_000.0),
    ("MSFT", "2023-06-30", 211_915_000_000.0),
    ("MSFT", "2024-06-30", 245_122_000_000.0),
    ("GOOGL", "2020-12-31", 182_527_000_000.0),
    ("GOOGL", "2021-12-31", 257_637_000_000.0),
    ("GOOGL", "2022-12-31", 282_836_000_000.0),
    ("GOOGL", "2023-12-31", 307_394_000_000.0),
    ("GOOGL", "2024-12-31", 350_018_000_000.0),
    ("AMZN", "2020-12-31", 386_064_000_000.0),
    ("AMZN", "2021-12-31", 469_822_000_000.0),
    ("AMZN", "2022-12-31", 513_983_000_000.0),
    ("AMZN", "2023-12-31", 574_785_000_000.0),
    ("AMZN", "2024-12-31", 637_959_000_000.0),
    ("NVDA", "2021-01-31", 16_675_000_000.0),
    ("NVDA", "2022-01-30", 26_914_000_000.0),
    ("NVDA", "2023-01-29", 26_974_000_000.0),
    ("NVDA", "2024-01-28", 60_922_000_000.0),
    ("NVDA", "2025-01-26", 130_497_000_000.0),
    ("META", "2020-12-31", 85_965_000_000.0),
    ("META", "2021-12-31", 117_929_000_000.0),
    ("META", "2022-12-31", 116_609_000_000.0),
    ("META", "2023-12-31", 134_902_000_000.0),
    ("META", "2024-12-31", 164_501_000_000.0),
    ("TSLA", "2020-12-31", 31_536_000_000.0),
    ("TSLA", "2021-12-31", 53_823_000_000.0),
    ("TSLA", "2022-12-31", 81_462_000_000.0),
    ("TSLA", "2023-12-31", 96_773_000_000.0),
    ("TSLA", "2024-12-31", 97_690_000_000.0),
];

/// All sample records, in upstream order.
pub fn sample_records() -> Vec<RevenueRecord> {
    SAMPLE_ROWS
        .iter()
        .map(|&(ticker, date, revenue)| RevenueRecord::new(ticker, date, revenue))
        .collect()
}

/// Record source serving [`sample_records`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleSource;

impl RecordSource for SampleSource {
    fn name(&self) -> &str {
        "built-in M7 sample"
    }

    fn kind(&self) -> SourceKind {
        SourceKind::Sample
    }

    fn fetch_all(&self) -> Result<Vec<RevenueRecord>, SourceError> {
        Ok(sample_records())
    }
}
