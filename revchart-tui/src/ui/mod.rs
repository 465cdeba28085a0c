//! Top-level UI layout: header, company list beside the chart, status bar.

pub mod chart_panel;
pub mod company_panel;
pub mod status_bar;

use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::AppState;
use crate::theme;

/// Width of the company list column.
const COMPANY_PANEL_WIDTH: u16 = 24;

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState) {
    let view = app.view();

    // Split: 2-line header + main area + 1-line status bar.
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .split(f.area());

    let header = vec![
        Line::from(Span::styled(view.strings.title, theme::title())),
        Line::from(Span::styled(view.strings.instructions, theme::muted())),
    ];
    f.render_widget(Paragraph::new(header), rows[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(COMPANY_PANEL_WIDTH), Constraint::Min(10)])
        .split(rows[1]);

    company_panel::render(f, columns[0], &view, app.cursor);
    chart_panel::render(f, columns[1], &view);
    status_bar::render(f, rows[2], &view, app);
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::app::tests::{loaded_app, test_app};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use revchart_core::session::SessionEvent;

    /// Render the whole UI into a test buffer and return its text.
    pub(crate) fn render_text(app: &AppState, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn english_layout_shows_title_companies_and_axis() {
        let mut app = loaded_app();
        app.apply(SessionEvent::ToggleLanguage);
        let text = render_text(&app, 120, 30);

        assert!(text.contains("M7 Revenue Trends"));
        assert!(text.contains("Companies"));
        assert!(text.contains("[x] AAPL"));
        assert!(text.contains("[ ] NVDA"));
        assert!(text.contains("Revenue ($B)"));
        assert!(text.contains("q:quit"));
    }

    #[test]
    fn loading_notice_before_records_arrive() {
        let mut app = test_app();
        app.apply(SessionEvent::ToggleLanguage);
        let text = render_text(&app, 100, 20);
        assert!(text.contains("Loading"));
    }

    #[test]
    fn empty_selection_prompt_replaces_chart() {
        let mut app = loaded_app();
        app.apply(SessionEvent::ToggleLanguage);
        for company in ["AAPL", "MSFT", "GOOGL"] {
            app.apply(SessionEvent::ToggleCompany(company.into()));
        }
        let text = render_text(&app, 100, 24);
        assert!(text.contains("Select at least one company"));
    }

    #[test]
    fn tiny_terminal_does_not_panic() {
        let app = loaded_app();
        let _ = render_text(&app, 10, 4);
    }
}
