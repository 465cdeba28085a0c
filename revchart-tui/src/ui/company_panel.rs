//! Company list: one checkbox row per company, in series order.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use revchart_core::view::{ChartView, CompanyOption};

use crate::theme;

pub fn render(f: &mut Frame, area: Rect, view: &ChartView, cursor: usize) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(false))
        .title(format!(" {} ", view.strings.companies_heading))
        .title_style(theme::panel_title(false));

    let lines: Vec<Line> = view
        .companies
        .iter()
        .enumerate()
        .map(|(i, option)| company_line(option, i == cursor))
        .collect();

    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn company_line(option: &CompanyOption, under_cursor: bool) -> Line<'_> {
    let mark = if option.selected { "[x]" } else { "[ ]" };
    Line::from(Span::styled(
        format!("{mark} {}", option.company),
        theme::company_row(option.selected, under_cursor),
    ))
}
