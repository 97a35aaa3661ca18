//! Neon-on-dark theme tokens.
//!
//! Color palette:
//! - **Accent**: electric cyan (selection, highlights)
//! - **Positive**: neon green (price gains)
//! - **Negative**: hot pink (price losses)
//! - **Warning**: neon orange (degraded feed)
//! - **Muted**: steel blue (hints, secondary chrome)

use ratatui::style::{Color, Modifier, Style};

pub const ACCENT: Color = Color::Rgb(0, 255, 255);
pub const POSITIVE: Color = Color::Rgb(0, 255, 128);
pub const NEGATIVE: Color = Color::Rgb(255, 20, 147);
pub const WARNING: Color = Color::Rgb(255, 140, 0);
pub const MUTED: Color = Color::Rgb(100, 149, 237);
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Rgb(170, 170, 170);

pub fn accent() -> Style {
    Style::default().fg(ACCENT)
}

pub fn accent_bold() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
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

pub fn text() -> Style {
    Style::default().fg(TEXT_PRIMARY)
}

pub fn secondary() -> Style {
    Style::default().fg(TEXT_SECONDARY)
}

/// Style for a signed percent move.
pub fn change_style(pct: f64) -> Style {
    if pct >= 0.0 {
        positive()
    } else {
        negative()
    }
}

/// Color for sparkline and chart strokes, matching the move direction.
pub fn trend_color(pct: f64) -> Color {
    if pct >= 0.0 {
        POSITIVE
    } else {
        NEGATIVE
    }
}

pub fn panel_border(selected: bool) -> Style {
    if selected {
        accent()
    } else {
        muted()
    }
}

pub fn panel_title(selected: bool) -> Style {
    if selected {
        accent_bold()
    } else {
        secondary()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn change_style_follows_sign() {
        assert_eq!(change_style(2.5), positive());
        assert_eq!(change_style(-0.1), negative());
        assert_eq!(change_style(0.0), positive());
    }

    #[test]
    fn selection_changes_border() {
        assert_ne!(panel_border(true), panel_border(false));
        assert_ne!(panel_title(true), panel_title(false));
    }
}
