//! Record sources

pub mod file;
pub mod http;
pub mod provider;
pub mod sample;

pub use file::{write_json_records, CsvFileSource, JsonFileSource};
pub use http::HttpSource;
pub use provider::{decode_json_records, fetch_logged, RecordSource, SourceError, SourceKind};
pub use sample::{sample_records, SampleSource, M7_TICKERS};
