//! Session state: the inputs every chart view is derived from.
//!
//! A session holds the aggregated series plus the user's selection,
//! currency and language. Each event consumes the current state and
//! returns the next one; views are recomputed from the state on demand.

use tracing::{debug, info, warn};

use crate::data::{RecordSource, SourceError};
use crate::domain::{CompanySeries, RevenueRecord, YearRange};
use crate::i18n::LanguageMode;
use crate::pipeline::aggregate::aggregate_with_report;
use crate::pipeline::aggregate::companies;
use crate::pipeline::format::CurrencyMode;
use crate::pipeline::label::{first_non_zero_years, FirstNonZeroYears};
use crate::pipeline::selection::{SelectionSet, INITIAL_SELECTION_COUNT};
use crate::view::{build_view, ChartView, Notice};

/// Fixed settings a session starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSettings {
    pub years: YearRange,
    pub initial_selection: usize,
    pub currency: CurrencyMode,
    pub language: LanguageMode,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            years: YearRange::default(),
            initial_selection: INITIAL_SELECTION_COUNT,
            currency: CurrencyMode::default(),
            language: LanguageMode::default(),
        }
    }
}

/// Outcome of the one-time record fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceStatus {
    Pending,
    Loaded { records: usize, skipped: usize },
    Unavailable { reason: String },
}

/// Discrete things that change a session.
#[derive(Debug, Clone)]
pub enum SessionEvent {
    RecordsLoaded(Result<Vec<RevenueRecord>, SourceError>),
    ToggleCompany(String),
    ToggleCurrency,
    ToggleLanguage,
}

/// Immutable snapshot of (series, selection, currency, language).
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    settings: SessionSettings,
    series: Vec<CompanySeries>,
    first_non_zero: FirstNonZeroYears,
    selection: SelectionSet,
    currency: CurrencyMode,
    language: LanguageMode,
    status: SourceStatus,
    seeded: bool,
}

impl SessionState {
    pub fn new(settings: SessionSettings) -> Self {
        Self {
            settings,
            series: Vec::new(),
            first_non_zero: FirstNonZeroYears::default(),
            selection: SelectionSet::new(),
            currency: settings.currency,
            language: settings.language,
            status: SourceStatus::Pending,
            seeded: false,
        }
    }

    /// Fetch from `source` and fold the result in, in one step.
    pub fn load_from(settings: SessionSettings, source: &dyn RecordSource) -> Self {
        let fetched = crate::data::fetch_logged(source);
        Self::new(settings).apply(SessionEvent::RecordsLoaded(fetched))
    }

    /// Consume this state and return the one after `event`.
    #[must_use]
    pub fn apply(self, event: SessionEvent) -> Self {
        match event {
            SessionEvent::RecordsLoaded(result) => self.with_records(result),
            SessionEvent::ToggleCompany(id) => {
                debug!(company = %id, "toggle company");
                Self {
                    selection: self.selection.toggle(&id),
                    ..self
                }
            }
            SessionEvent::ToggleCurrency => Self {
                currency: self.currency.toggle(),
                ..self
            },
            SessionEvent::ToggleLanguage => Self {
                language: self.language.toggle(),
                ..self
            },
        }
    }

    fn with_records(self, result: Result<Vec<RevenueRecord>, SourceError>) -> Self {
        let (records, failure) = match result {
            Ok(records) => (records, None),
            Err(err) => {
                warn!(error = %err, "continuing with an empty record set");
                (
                    Vec::new(),
                    Some(SourceStatus::Unavailable {
                        reason: err.to_string(),
                    }),
                )
            }
        };

        let aggregation = aggregate_with_report(&records);
        let first_non_zero = first_non_zero_years(&aggregation.series, self.settings.years);

        let mut selection = self.selection;
        let mut seeded = self.seeded;
        if !seeded && !aggregation.series.is_empty() {
            selection = SelectionSet::seeded(
                companies(&aggregation.series),
                self.settings.initial_selection,
            );
            seeded = true;
        }

        let status = failure.unwrap_or(SourceStatus::Loaded {
            records: records.len(),
            skipped: aggregation.skipped.len(),
        });
        info!(
            companies = aggregation.series.len(),
            selected = selection.len(),
            ?status,
            "session records updated"
        );

        Self {
            series: aggregation.series,
            first_non_zero,
            selection,
            status,
            seeded,
            ..self
        }
    }

    /// Chart view for the current state.
    pub fn view(&self) -> ChartView {
        let mut view = build_view(
            &self.series,
            &self.first_non_zero,
            &self.selection,
            self.currency,
            self.language,
            self.settings.years,
        );
        match &self.status {
            SourceStatus::Pending => view.notice = Some(Notice::Loading),
            SourceStatus::Unavailable { .. } => view.notice = Some(Notice::SourceUnavailable),
            SourceStatus::Loaded { skipped, .. } => view.skipped_records = *skipped,
        }
        view
    }

    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    pub fn series(&self) -> &[CompanySeries] {
        &self.series
    }

    pub fn first_non_zero(&self) -> &FirstNonZeroYears {
        &self.first_non_zero
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn currency(&self) -> CurrencyMode {
        self.currency
    }

    pub fn language(&self) -> LanguageMode {
        self.language
    }

    pub fn status(&self) -> &SourceStatus {
        &self.status
    }

    /// Distinct companies in series order, for selection controls.
    pub fn companies(&self) -> Vec<&str> {
        companies(&self.series)
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(SessionSettings::default())
    }
}
