//! Records → chart series: aggregation, formatting, selection, labels.

pub mod aggregate;
pub mod format;
pub mod label;
pub mod selection;

pub use aggregate::{aggregate, aggregate_with_report, companies, Aggregation, SkippedRecord};
pub use format::{
    format_value, format_value_with, plotted_value, plotted_value_with, unit_caption,
    ConversionPolicy, ConvertedUnit, CurrencyMode, BASE_DECIMALS, CANONICAL_CONVERSION,
    JPY_HUNDRED_MILLIONS, JPY_TRILLIONS, USD_TO_JPY,
};
pub use label::{first_non_zero_years, should_label, FirstNonZeroYears};
pub use selection::{filter_series, toggle, SelectionSet, INITIAL_SELECTION_COUNT};
