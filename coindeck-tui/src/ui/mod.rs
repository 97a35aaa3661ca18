//! Top-level UI layout — card grid over detail panel, one-line status bar.

pub mod card;
pub mod detail;
pub mod grid;
pub mod help;
pub mod status_bar;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Frame;

use crate::app::{AppState, Overlay};
use crate::ui::detail::DetailPanel;

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState) {
    // Card grid on top, one-line status bar pinned to the bottom.
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(f.area());

    let main_area = chunks[0];
    let status_area = chunks[1];

    if app.board.is_empty() {
        grid::render_placeholder(f, main_area, app.board.is_loading());
    } else {
        let parts = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(58), Constraint::Min(9)])
            .split(main_area);

        grid::render(f, parts[0], app);

        if let Some(quote) = app.selected_quote() {
            let panel = DetailPanel::new(quote, app.selected_series(), &app.currency);
            f.render_widget(panel, parts[1]);
        }
    }

    status_bar::render(f, status_area, app);

    if app.overlay == Overlay::Help {
        help::render(f, main_area);
    }
}

/// Rect centered in `area`, sized as a percentage of it. Used by overlays.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_stays_inside() {
        let area = Rect::new(0, 0, 100, 40);
        let popup = centered_rect(50, 60, area);
        assert!(popup.x >= area.x && popup.right() <= area.right());
        assert!(popup.y >= area.y && popup.bottom() <= area.bottom());
        assert_eq!(popup.width, 50);
    }
}
