//! Record source trait and structured error types.
//!
//! The RecordSource trait abstracts over where revenue records come from
//! (HTTP endpoint, JSON/CSV export, built-in sample set) so the pipeline
//! never knows and tests can hand in fixed data.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use tracing::{info, warn};

use crate::domain::RevenueRecord;

/// Structured error types for record retrieval.
///
/// Every variant is a "source unavailable" condition: the session recovers
/// by carrying on with an empty record set.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SourceError {
    #[error("network unreachable: {0}")]
    NetworkUnreachable(String),

    #[error("record source answered HTTP {status}")]
    HttpStatus { status: u16 },

    #[error("malformed record payload: {0}")]
    MalformedPayload(String),

    #[error("record file error: {0}")]
    Io(String),
}

/// Where the records came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceKind {
    Http,
    JsonFile,
    CsvFile,
    Sample,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SourceKind::Http => "http",
            SourceKind::JsonFile => "json",
            SourceKind::CsvFile => "csv",
            SourceKind::Sample => "sample",
        };
        f.write_str(label)
    }
}

/// Trait for record sources.
///
/// A source is read-only and stateless between calls: any connection it
/// needs is acquired inside `fetch_all` and released before it returns.
pub trait RecordSource: Send + Sync {
    /// Human-readable name of this source (URL, path, ...).
    fn name(&self) -> &str;

    fn kind(&self) -> SourceKind;

    /// Fetch every record the source holds.
    fn fetch_all(&self) -> Result<Vec<RevenueRecord>, SourceError>;
}

impl<S: RecordSource + ?Sized> RecordSource for Box<S> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn kind(&self) -> SourceKind {
        (**self).kind()
    }

    fn fetch_all(&self) -> Result<Vec<RevenueRecord>, SourceError> {
        (**self).fetch_all()
    }
}

/// Fetch with logging; errors are returned for the caller to fold into state.
pub fn fetch_logged(source: &dyn RecordSource) -> Result<Vec<RevenueRecord>, SourceError> {
    info!(source = source.name(), kind = %source.kind(), "fetching revenue records");
    match source.fetch_all() {
        Ok(records) => {
            info!(source = source.name(), count = records.len(), "revenue records fetched");
            Ok(records)
        }
        Err(err) => {
            warn!(source = source.name(), error = %err, "record source unavailable");
            Err(err)
        }
    }
}

/// Decode a JSON array of records.
///
/// Only a body that is not a JSON array is a malformed payload. Each element
/// is decoded on its own; one that is not a record object becomes an empty
/// record in its position, so aggregation skips and reports it like any
/// other malformed record.
pub fn decode_json_records(body: &str) -> Result<Vec<RevenueRecord>, SourceError> {
    let elements: Vec<serde_json::Value> =
        serde_json::from_str(body).map_err(|e| SourceError::MalformedPayload(e.to_string()))?;

    Ok(elements
        .into_iter()
        .enumerate()
        .map(|(position, element)| {
            serde_json::from_value(element).unwrap_or_else(|e| {
                warn!(position, error = %e, "undecodable revenue record");
                RevenueRecord::default()
            })
        })
        .collect())
}
