//! Bottom status bar: key hints, skipped-record count, last status message.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use revchart_core::view::ChartView;

use crate::app::{AppState, StatusLevel};
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, view: &ChartView, app: &AppState) {
    let strings = &view.strings;
    let mut spans: Vec<Span> = Vec::new();

    // Key hints
    spans.push(Span::styled(
        format!(
            " space:{} c:{} ({}) l:{} q:{}",
            strings.selection_toggle_hint,
            strings.currency_toggle_hint,
            strings.currency_label(view.currency),
            strings.language_toggle_hint,
            strings.quit_hint,
        ),
        theme::muted(),
    ));

    if view.skipped_records > 0 {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            format!("{} {}", view.skipped_records, strings.skipped_records),
            theme::warning(),
        ));
    }

    // Status message
    if let Some((msg, level)) = &app.status_message {
        spans.push(Span::raw(" | "));
        let style = match level {
            StatusLevel::Info => theme::accent(),
            StatusLevel::Warning => theme::warning(),
            StatusLevel::Error => theme::negative(),
        };
        spans.push(Span::styled(msg.as_str(), style));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
