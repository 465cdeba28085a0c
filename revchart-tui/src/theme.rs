//! Parrot/neon theme tokens for the RevChart TUI.
//!
//! Neon accents on a near-black background. Each plotted year gets its own
//! bar color so a company's group reads left to right as a timeline.

use ratatui::style::{Color, Modifier, Style};

/// Electric cyan (focus, highlights).
pub const ACCENT: Color = Color::Rgb(0, 255, 255);
/// Neon green (selected companies).
pub const POSITIVE: Color = Color::Rgb(0, 255, 128);
/// Hot pink (errors).
pub const NEGATIVE: Color = Color::Rgb(255, 20, 147);
/// Neon orange (warnings, notices).
pub const WARNING: Color = Color::Rgb(255, 140, 0);
/// Cool purple (secondary info).
pub const NEUTRAL: Color = Color::Rgb(147, 112, 219);
/// Steel blue (muted text, axes).
pub const MUTED: Color = Color::Rgb(100, 149, 237);
pub const TEXT_PRIMARY: Color = Color::White;

/// Bar colors, one per plotted year, cycled when there are more years.
pub const YEAR_PALETTE: [Color; 5] = [MUTED, NEUTRAL, POSITIVE, WARNING, ACCENT];

pub fn year_color(index: usize) -> Color {
    YEAR_PALETTE[index % YEAR_PALETTE.len()]
}

pub fn accent() -> Style {
    Style::default().fg(ACCENT)
}

pub fn positive() -> Style {
    Style::default().fg(POSITIVE)
}

pub fn negative() -> Style {
    Style::default().fg(NEGATIVE)
}

pub fn warning() -> Style {
    Style::default().fg(WARNING)
}

pub fn muted() -> Style {
    Style::default().fg(MUTED)
}

pub fn title() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

/// Value label drawn on a bar.
pub fn bar_value() -> Style {
    Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::BOLD)
}

pub fn panel_border(active: bool) -> Style {
    if active {
        Style::default().fg(ACCENT)
    } else {
        Style::default().fg(MUTED)
    }
}

pub fn panel_title(active: bool) -> Style {
    if active {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(MUTED)
    }
}

/// Row in the company list.
pub fn company_row(selected: bool, under_cursor: bool) -> Style {
    let style = if selected { positive() } else { muted() };
    if under_cursor {
        style.add_modifier(Modifier::REVERSED)
    } else {
        style
    }
}
