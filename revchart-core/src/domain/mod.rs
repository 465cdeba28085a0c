//! Domain types for RevChart

pub mod record;
pub mod series;

pub use record::{parse_timestamp, RecordError, RevenueRecord, ValidRecord};
pub use series::{CompanySeries, YearRange, MAX_YEAR_SPAN, REVENUE_SCALE};

/// Ticker symbol type alias
pub type Ticker = String;
