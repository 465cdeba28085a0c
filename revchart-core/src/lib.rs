//! RevChart Core: revenue records in, chart-ready views out.
//!
//! This crate contains everything a front end needs to draw the
//! multi-company revenue chart:
//! - Domain types (revenue records, per-company yearly series, year ranges)
//! - Record sources (HTTP endpoint, JSON/CSV files, built-in sample data)
//! - Aggregation of flat records into one series per company
//! - Currency conversion and value formatting
//! - Company selection and the bar label policy
//! - Localization tables for the two display languages
//! - Session state and the chart view derived from it
//!
//! Front ends (TUI, CLI) only fetch, feed events into a
//! [`session::SessionState`], and render the resulting [`view::ChartView`].

pub mod config;
pub mod data;
pub mod domain;
pub mod i18n;
pub mod pipeline;
pub mod session;
pub mod view;

pub use config::{ChartConfig, ConfigError, SourceConfig};
pub use data::{RecordSource, SourceError};
pub use domain::{CompanySeries, RevenueRecord, YearRange};
pub use i18n::{LanguageMode, LocalizationTable};
pub use pipeline::{CurrencyMode, SelectionSet};
pub use session::{SessionEvent, SessionSettings, SessionState, SourceStatus};
pub use view::{ChartView, Notice};
