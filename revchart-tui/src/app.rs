//! Application state: single-owner, main-thread only.
//!
//! The chart itself is a pure function of the wrapped [`SessionState`];
//! this struct only adds what the terminal needs on top (cursor, status
//! line, worker channels).

use std::sync::mpsc::{Receiver, Sender};

use revchart_core::config::SourceConfig;
use revchart_core::session::{SessionEvent, SessionSettings, SessionState, SourceStatus};
use revchart_core::view::ChartView;

use crate::worker::{WorkerCommand, WorkerResponse};

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

pub struct AppState {
    pub running: bool,
    pub session: SessionState,
    /// Row in the company list.
    pub cursor: usize,
    pub status_message: Option<(String, StatusLevel)>,
    /// Where (re)fetches read from.
    pub source: SourceConfig,

    pub worker_tx: Sender<WorkerCommand>,
    pub worker_rx: Receiver<WorkerResponse>,
}

impl AppState {
    pub fn new(
        settings: SessionSettings,
        source: SourceConfig,
        worker_tx: Sender<WorkerCommand>,
        worker_rx: Receiver<WorkerResponse>,
    ) -> Self {
        Self {
            running: true,
            session: SessionState::new(settings),
            cursor: 0,
            status_message: None,
            source,
            worker_tx,
            worker_rx,
        }
    }

    /// Fold one event into the session.
    pub fn apply(&mut self, event: SessionEvent) {
        let session = std::mem::take(&mut self.session);
        self.session = session.apply(event);
        self.clamp_cursor();
    }

    /// View for the current session; recomputed on every redraw.
    pub fn view(&self) -> ChartView {
        self.session.view()
    }

    pub fn company_count(&self) -> usize {
        self.session.series().len()
    }

    pub fn cursor_company(&self) -> Option<&str> {
        self.session
            .series()
            .get(self.cursor)
            .map(|s| s.company.as_str())
    }

    pub fn move_cursor_down(&mut self) {
        if self.cursor + 1 < self.company_count() {
            self.cursor += 1;
        }
    }

    pub fn move_cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn toggle_cursor_company(&mut self) {
        if let Some(company) = self.cursor_company().map(str::to_string) {
            self.apply(SessionEvent::ToggleCompany(company));
        }
    }

    /// Fold a worker response into state and report it on the status line.
    pub fn handle_worker_response(&mut self, resp: WorkerResponse) {
        match resp {
            WorkerResponse::RecordsLoaded { source, result } => {
                self.apply(SessionEvent::RecordsLoaded(result));
                let loaded_at = chrono::Local::now().format("%H:%M:%S");
                match self.session.status().clone() {
                    SourceStatus::Loaded { records, skipped: 0 } => {
                        self.set_status(format!("{records} records from {source} ({loaded_at})"));
                    }
                    SourceStatus::Loaded { records, skipped } => {
                        self.set_warning(format!(
                            "{records} records from {source}, {skipped} skipped ({loaded_at})"
                        ));
                    }
                    SourceStatus::Unavailable { reason } => {
                        self.set_error(format!("{source}: {reason}"));
                    }
                    SourceStatus::Pending => {}
                }
            }
        }
    }

    fn clamp_cursor(&mut self) {
        self.cursor = self.cursor.min(self.company_count().saturating_sub(1));
    }

    /// Set an info status message.
    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    /// Set a warning status message.
    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Error));
    }
}
