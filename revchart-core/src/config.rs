//! Chart configuration: record source, plotted years, session defaults.
//!
//! Stored as TOML:
//!
//! ```toml
//! initial_selection = 3
//! currency = "base"
//! language = "primary"
//!
//! [years]
//! first = 2020
//! last = 2024
//!
//! [source]
//! kind = "http"
//! url = "http://localhost:3000/api/income"
//! timeout_secs = 30
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

use crate::data::http::DEFAULT_TIMEOUT_SECS;
use crate::data::{CsvFileSource, HttpSource, JsonFileSource, RecordSource, SampleSource};
use crate::domain::{YearRange, MAX_YEAR_SPAN};
use crate::i18n::LanguageMode;
use crate::pipeline::format::CurrencyMode;
use crate::pipeline::selection::INITIAL_SELECTION_COUNT;
use crate::session::SessionSettings;

/// Environment variable that points the chart at an HTTP endpoint.
pub const SOURCE_URL_ENV: &str = "REVCHART_SOURCE_URL";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("invalid year range {first}..={last}")]
    InvalidYearRange { first: i32, last: i32 },

    #[error("year range {first}..={last} spans more than {max} years")]
    YearRangeTooLong { first: i32, last: i32, max: usize },
}

/// Where records are read from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SourceConfig {
    Http {
        url: String,
        #[serde(default = "default_timeout_secs")]
        timeout_secs: u64,
    },
    Json {
        path: PathBuf,
    },
    Csv {
        path: PathBuf,
    },
    #[default]
    Sample,
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl SourceConfig {
    pub fn http(url: impl Into<String>) -> Self {
        SourceConfig::Http {
            url: url.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Instantiate the configured record source.
    pub fn build(&self) -> Box<dyn RecordSource> {
        match self {
            SourceConfig::Http { url, timeout_secs } => Box::new(
                HttpSource::new(url.clone()).with_timeout(Duration::from_secs(*timeout_secs)),
            ),
            SourceConfig::Json { path } => Box::new(JsonFileSource::new(path.clone())),
            SourceConfig::Csv { path } => Box::new(CsvFileSource::new(path.clone())),
            SourceConfig::Sample => Box::new(SampleSource),
        }
    }
}

/// Complete chart configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub initial_selection: usize,
    pub currency: CurrencyMode,
    pub language: LanguageMode,
    pub years: YearRange,
    pub source: SourceConfig,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            initial_selection: INITIAL_SELECTION_COUNT,
            currency: CurrencyMode::default(),
            language: LanguageMode::default(),
            years: YearRange::default(),
            source: SourceConfig::default(),
        }
    }
}

impl ChartConfig {
    /// Load a config from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Parse and validate a config from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the config to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// File at `path` if given, defaults otherwise; then environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        Ok(config.with_env_overrides(std::env::var(SOURCE_URL_ENV).ok()))
    }

    /// Apply a `REVCHART_SOURCE_URL` value, if one is set and non-blank.
    pub fn with_env_overrides(mut self, source_url: Option<String>) -> Self {
        if let Some(url) = source_url.filter(|u| !u.trim().is_empty()) {
            self.source = SourceConfig::http(url.trim());
        }
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.years.is_valid() {
            return Err(ConfigError::InvalidYearRange {
                first: self.years.first,
                last: self.years.last,
            });
        }
        if self.years.len() > MAX_YEAR_SPAN {
            return Err(ConfigError::YearRangeTooLong {
                first: self.years.first,
                last: self.years.last,
                max: MAX_YEAR_SPAN,
            });
        }
        Ok(())
    }

    pub fn session_settings(&self) -> SessionSettings {
        SessionSettings {
            years: self.years,
            initial_selection: self.initial_selection,
            currency: self.currency,
            language: self.language,
        }
    }
}
