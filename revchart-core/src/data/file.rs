//! File-backed record sources: JSON exports and CSV.
//!
//! The JSON layout is the same array the HTTP endpoint serves. CSV files
//! use the header `ticker,index,Total Revenue` (the `company`, `date` and
//! `revenue` aliases are accepted too).

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::warn;

use super::provider::{decode_json_records, RecordSource, SourceError, SourceKind};
use crate::domain::RevenueRecord;

/// Records stored as a JSON array on disk.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
    name: String,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path.display().to_string();
        Self { path, name }
    }
}

impl RecordSource for JsonFileSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> SourceKind {
        SourceKind::JsonFile
    }

    fn fetch_all(&self) -> Result<Vec<RevenueRecord>, SourceError> {
        let body = std::fs::read_to_string(&self.path)
            .map_err(|e| SourceError::Io(format!("read {}: {e}", self.name)))?;
        decode_json_records(&body)
    }
}

/// Records stored as CSV with a header row.
#[derive(Debug, Clone)]
pub struct CsvFileSource {
    path: PathBuf,
    name: String,
}

impl CsvFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path.display().to_string();
        Self { path, name }
    }
}

impl RecordSource for CsvFileSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> SourceKind {
        SourceKind::CsvFile
    }

    fn fetch_all(&self) -> Result<Vec<RevenueRecord>, SourceError> {
        let file = File::open(&self.path)
            .map_err(|e| SourceError::Io(format!("open {}: {e}", self.name)))?;
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(BufReader::new(file));

        // A row that cannot be decoded keeps its slot as an empty record so
        // aggregation reports it; only read failures end the fetch.
        let mut records = Vec::new();
        for (position, row) in reader.deserialize::<RevenueRecord>().enumerate() {
            match row {
                Ok(record) => records.push(record),
                Err(e) if e.is_io_error() => {
                    return Err(SourceError::Io(format!("read {}: {e}", self.name)));
                }
                Err(e) => {
                    warn!(position, error = %e, "undecodable CSV row");
                    records.push(RevenueRecord::default());
                }
            }
        }
        Ok(records)
    }
}

/// Write records as a pretty JSON array, readable by [`JsonFileSource`].
pub fn write_json_records(path: &Path, records: &[RevenueRecord]) -> Result<(), SourceError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|e| SourceError::Io(format!("create {}: {e}", parent.display())))?;
    }

    let file = File::create(path)
        .map_err(|e| SourceError::Io(format!("create {}: {e}", path.display())))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, records)
        .map_err(|e| SourceError::Io(format!("write {}: {e}", path.display())))?;
    writer
        .flush()
        .map_err(|e| SourceError::Io(format!("flush {}: {e}", path.display())))
}
