//! Card grid — two cards per row, one per watched coin.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::AppState;
use crate::theme;
use crate::ui::card::CoinCard;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let quotes = app.board.quotes();
    let slots = card_slots(area, quotes.len());

    for (i, quote) in quotes.iter().enumerate() {
        let Some(slot) = slots.get(i) else { break };
        let card = CoinCard::new(
            quote,
            app.board.series_for(&quote.id),
            &app.currency,
            i == app.selected,
        );
        f.render_widget(card, *slot);
    }
}

/// Full-screen placeholder while the board is still empty.
pub fn render_placeholder(f: &mut Frame, area: Rect, loading: bool) {
    let message = if loading {
        "Fetching market data\u{2026}"
    } else {
        "No market data yet. Waiting for the next refresh."
    };

    let lines = vec![
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(message, theme::muted())),
    ];
    f.render_widget(Paragraph::new(lines).centered(), area);
}

/// Slice the area into rows of two equal card slots.
fn card_slots(area: Rect, count: usize) -> Vec<Rect> {
    if count == 0 {
        return Vec::new();
    }

    let rows = count.div_ceil(2);
    let row_constraints = vec![Constraint::Ratio(1, rows as u32); rows];
    let row_rects = Layout::default()
        .direction(Direction::Vertical)
        .constraints(row_constraints)
        .split(area);

    let mut slots = Vec::with_capacity(count);
    for row in row_rects.iter() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(*row);
        slots.push(cols[0]);
        slots.push(cols[1]);
    }
    slots.truncate(count);
    slots
}
