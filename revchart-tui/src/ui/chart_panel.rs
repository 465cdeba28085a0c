//! Grouped bar chart: one group per selected company, one bar per year.
//!
//! Bars carry a value label only where the view says so (first non-zero
//! year and the last plotted year); everything else is left unlabeled.
//! Labels sit on the bars when the bars are wider than the widest label,
//! otherwise they move to a row under each group.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use revchart_core::view::{ChartView, SeriesView};

use crate::theme;

/// Bar heights are integers; plotted values keep two decimals.
const BAR_SCALE: f64 = 100.0;
const GROUP_GAP: u16 = 2;
const MAX_BAR_WIDTH: u16 = 9;

pub fn render(f: &mut Frame, area: Rect, view: &ChartView) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(true))
        .title(format!(" {} ", view.value_axis_title()))
        .title_style(theme::panel_title(true));

    let inner = block.inner(area);
    f.render_widget(block, area);

    if view.series.is_empty() {
        render_notice(f, inner, view);
        return;
    }

    let widest = widest_label(view);
    let width = bar_width(inner.width, view.series.len(), view.years.len(), widest);
    let inline = widest < width;

    // Chart + value label row (when labels don't fit on the bars) + year legend.
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(u16::from(!inline)),
            Constraint::Length(1),
        ])
        .split(inner);

    render_bars(f, chunks[0], view, width, inline);
    if !inline {
        render_label_row(f, chunks[1], view, width);
    }
    f.render_widget(Paragraph::new(legend(view)), chunks[2]);
}

fn render_notice(f: &mut Frame, area: Rect, view: &ChartView) {
    let text = view.notice_text().unwrap_or(view.strings.no_data);
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(text, theme::warning())),
    ];
    f.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        area,
    );
}

fn render_bars(f: &mut Frame, area: Rect, view: &ChartView, width: u16, inline: bool) {
    let chart = view
        .series
        .iter()
        .map(|series| bar_group(series, inline))
        .fold(BarChart::default(), |chart, group| chart.data(group))
        .bar_width(width)
        .bar_gap(0)
        .group_gap(GROUP_GAP)
        .label_style(theme::accent())
        .value_style(theme::bar_value());

    f.render_widget(chart, area);
}

fn bar_group(series: &SeriesView, inline: bool) -> BarGroup<'_> {
    let bars: Vec<Bar> = series
        .cells
        .iter()
        .enumerate()
        .map(|(i, cell)| {
            let text = match (&cell.display, cell.show_label && inline) {
                (Some(display), true) => display.clone(),
                _ => String::new(),
            };
            Bar::default()
                .value(bar_height(cell.plotted))
                .text_value(text)
                .style(Style::default().fg(theme::year_color(i)))
        })
        .collect();

    BarGroup::default()
        .label(Line::from(series.company.as_str()))
        .bars(&bars)
}

/// Labeled values of each group, written under the group's bars in year colors.
fn render_label_row(f: &mut Frame, area: Rect, view: &ChartView, width: u16) {
    let span = width.saturating_mul(view.years.len() as u16);
    let mut x = area.x;

    for series in &view.series {
        if x >= area.right() {
            break;
        }
        let slot = Rect::new(x, area.y, span, 1).intersection(area);
        f.render_widget(Paragraph::new(label_line(series)), slot);
        x = x.saturating_add(span).saturating_add(GROUP_GAP);
    }
}

fn label_line(series: &SeriesView) -> Line<'_> {
    let mut spans = Vec::new();
    for (i, cell) in series.cells.iter().enumerate() {
        if let (Some(display), true) = (&cell.display, cell.show_label) {
            if !spans.is_empty() {
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(
                display.as_str(),
                theme::bar_value().fg(theme::year_color(i)),
            ));
        }
    }
    Line::from(spans)
}

/// Display width of the widest label the view asks for.
fn widest_label(view: &ChartView) -> u16 {
    view.series
        .iter()
        .flat_map(|series| &series.cells)
        .filter(|cell| cell.show_label)
        .filter_map(|cell| cell.display.as_deref())
        .map(|display| Span::raw(display).width())
        .max()
        .unwrap_or(0)
        .min(u16::MAX as usize) as u16
}

/// Colored year markers under the chart, with the year-axis title.
fn legend(view: &ChartView) -> Line<'_> {
    let mut spans = vec![Span::styled(
        format!("{}: ", view.strings.year_axis),
        theme::muted(),
    )];
    for (i, year) in view.years.iter().enumerate() {
        spans.push(Span::styled(
            format!("■ {year}  "),
            Style::default().fg(theme::year_color(i)),
        ));
    }
    Line::from(spans)
}

/// Integer bar height for a plotted value; non-positive and NaN draw nothing.
pub fn bar_height(plotted: f64) -> u64 {
    if plotted.is_finite() && plotted > 0.0 {
        (plotted * BAR_SCALE).round() as u64
    } else {
        0
    }
}

/// Widest bar that fits every group side by side, at least one column.
///
/// Bars stop growing at `MAX_BAR_WIDTH`, or one column past the widest label
/// so that a label can still sit on its bar.
pub fn bar_width(available: u16, groups: usize, bars_per_group: usize, widest_label: u16) -> u16 {
    if groups == 0 || bars_per_group == 0 {
        return 1;
    }
    let cap = MAX_BAR_WIDTH.max(widest_label.saturating_add(1));
    let gaps = GROUP_GAP as usize * groups;
    let room = (available as usize).saturating_sub(gaps);
    let width = room / (groups * bars_per_group);
    width.clamp(1, cap as usize) as u16
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::loaded_app;
    use crate::ui::tests::render_text;
    use revchart_core::session::SessionEvent;

    #[test]
    fn bar_height_scales_and_clamps() {
        assert_eq!(bar_height(58.66), 5_866);
        assert_eq!(bar_height(0.0), 0);
        assert_eq!(bar_height(-3.0), 0);
        assert_eq!(bar_height(f64::NAN), 0);
    }

    #[test]
    fn bar_width_fits_available_columns() {
        // 3 groups × 5 years in 100 columns: (100 - 6) / 15 = 6
        assert_eq!(bar_width(100, 3, 5, 7), 6);
        assert_eq!(bar_width(1_000, 1, 5, 7), MAX_BAR_WIDTH);
        assert_eq!(bar_width(5, 7, 5, 7), 1);
        assert_eq!(bar_width(80, 0, 5, 7), 1);
    }

    #[test]
    fn bar_width_grows_past_cap_for_wide_labels() {
        // "58.66兆円" is 9 columns wide; a 10-column bar can carry it.
        assert_eq!(bar_width(1_000, 1, 5, 9), 10);
        assert_eq!(bar_width(1_000, 1, 5, 0), MAX_BAR_WIDTH);
    }

    #[test]
    fn labels_show_when_bars_are_narrower_than_labels() {
        let mut app = loaded_app();
        app.apply(SessionEvent::ToggleLanguage);
        // 94 inner columns: (94 - 6) / 15 = 5-column bars, labels need 8.
        let text = render_text(&app, 120, 30);
        assert!(text.contains("$274.5B $391.0B"), "labels missing at 120x30");
    }

    #[test]
    fn labels_sit_on_bars_when_they_fit() {
        let mut app = loaded_app();
        app.apply(SessionEvent::ToggleLanguage);
        // 134 inner columns give 8-column bars, wider than "$391.0B".
        let text = render_text(&app, 160, 40);
        assert!(text.contains("$274.5B"));
        assert!(text.contains("$391.0B"));
        assert!(!text.contains("$274.5B $391.0B"));
    }

    #[test]
    fn unlabeled_cells_never_show_values() {
        let mut app = loaded_app();
        app.apply(SessionEvent::ToggleLanguage);
        let view = app.view();
        let hidden: Vec<&str> = view.series[0]
            .cells
            .iter()
            .filter(|c| !c.show_label)
            .filter_map(|c| c.display.as_deref())
            .collect();
        assert!(!hidden.is_empty());
        for width in [120, 160] {
            let text = render_text(&app, width, 40);
            for display in &hidden {
                assert!(!text.contains(display), "{display} drawn at width {width}");
            }
        }
    }

    #[test]
    fn labeled_cells_carry_text_and_others_do_not() {
        let app = loaded_app();
        let view = app.view();
        let aapl = &view.series[0];
        let labeled: Vec<bool> = aapl.cells.iter().map(|c| c.show_label).collect();
        assert_eq!(labeled, vec![true, false, false, false, true]);
    }

    #[test]
    fn legend_lists_every_plotted_year() {
        let mut app = loaded_app();
        app.apply(SessionEvent::ToggleLanguage);
        let text = render_text(&app, 120, 30);
        for year in 2020..=2024 {
            assert!(text.contains(&format!("■ {year}")), "missing {year}");
        }
        assert!(text.contains("Year:"));
    }
}
