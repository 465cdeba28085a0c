//! Chart view: the structure handed to a renderer on every redraw.
//!
//! Everything a renderer needs is precomputed here: the selected series in
//! order, a display string and label flag per (company, year) cell, the
//! company list for selection controls, and the active strings. Renderers
//! draw; they make no decisions.

use serde::Serialize;

use crate::domain::{CompanySeries, Ticker, YearRange};
use crate::i18n::{resolve, LanguageMode, LocalizationTable};
use crate::pipeline::format::{format_value, plotted_value, unit_caption, CurrencyMode};
use crate::pipeline::label::{should_label, FirstNonZeroYears};
use crate::pipeline::selection::{filter_series, SelectionSet};

/// One bar position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CellView {
    pub year: i32,
    /// Series value in billions of base currency; `None` if not reported.
    pub value: Option<f64>,
    /// Bar height in the active currency's display unit (0 when missing).
    pub plotted: f64,
    /// Formatted value for labels and tooltips; `None` if not reported.
    pub display: Option<String>,
    pub show_label: bool,
}

/// One drawn company.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesView {
    pub company: Ticker,
    pub cells: Vec<CellView>,
}

/// Entry for the company selection controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompanyOption {
    pub company: Ticker,
    pub selected: bool,
}

/// Message shown in place of (or beside) the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Notice {
    Loading,
    SourceUnavailable,
    NoData,
    EmptySelection,
}

impl Notice {
    pub fn text(self, table: &LocalizationTable) -> &'static str {
        match self {
            Notice::Loading => table.loading,
            Notice::SourceUnavailable => table.source_unavailable,
            Notice::NoData => table.no_data,
            Notice::EmptySelection => table.empty_selection_prompt,
        }
    }
}

/// Chart-ready snapshot of one session state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartView {
    pub years: Vec<i32>,
    pub currency: CurrencyMode,
    pub language: LanguageMode,
    pub strings: LocalizationTable,
    /// Unit caption for the value axis ("$B", "兆円", ...).
    pub unit: String,
    pub series: Vec<SeriesView>,
    pub companies: Vec<CompanyOption>,
    pub notice: Option<Notice>,
    pub skipped_records: usize,
}

impl ChartView {
    pub fn notice_text(&self) -> Option<&'static str> {
        self.notice.map(|n| n.text(&self.strings))
    }

    /// Largest bar height across drawn cells (0 when nothing is drawn).
    pub fn max_plotted(&self) -> f64 {
        self.series
            .iter()
            .flat_map(|s| s.cells.iter())
            .map(|c| c.plotted)
            .fold(0.0, f64::max)
    }

    /// Value-axis title, e.g. "売上高 (兆円)".
    pub fn value_axis_title(&self) -> String {
        format!("{} ({})", self.strings.revenue_axis, self.unit)
    }
}

/// Build the view for the selected companies.
///
/// `first_non_zero` must come from the full series set, not the filtered one.
pub fn build_view(
    series: &[CompanySeries],
    first_non_zero: &FirstNonZeroYears,
    selection: &SelectionSet,
    currency: CurrencyMode,
    language: LanguageMode,
    years: YearRange,
) -> ChartView {
    let table = resolve(language);

    let drawn: Vec<SeriesView> = filter_series(series, selection)
        .into_iter()
        .map(|s| SeriesView {
            company: s.company.clone(),
            cells: years
                .years()
                .map(|year| build_cell(s, year, first_non_zero, currency, table, years.last))
                .collect(),
        })
        .collect();

    let companies = series
        .iter()
        .map(|s| CompanyOption {
            company: s.company.clone(),
            selected: selection.contains(&s.company),
        })
        .collect();

    let notice = if series.is_empty() {
        Some(Notice::NoData)
    } else if drawn.is_empty() {
        Some(Notice::EmptySelection)
    } else {
        None
    };

    ChartView {
        years: years.years().collect(),
        currency,
        language,
        strings: *table,
        unit: unit_caption(currency, table),
        series: drawn,
        companies,
        notice,
        skipped_records: 0,
    }
}

fn build_cell(
    series: &CompanySeries,
    year: i32,
    first_non_zero: &FirstNonZeroYears,
    currency: CurrencyMode,
    table: &LocalizationTable,
    last_year: i32,
) -> CellView {
    match series.value(year) {
        Some(value) => CellView {
            year,
            value: Some(value),
            plotted: plotted_value(value, currency),
            display: Some(format_value(value, currency, table)),
            show_label: should_label(&series.company, year, value, first_non_zero, last_year),
        },
        None => CellView {
            year,
            value: None,
            plotted: 0.0,
            display: None,
            show_label: false,
        },
    }
}
