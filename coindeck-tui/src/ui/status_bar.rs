//! Bottom status bar — key hints, transient messages, feed freshness.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::{AppState, StatusLevel};
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let mut spans: Vec<Span> = Vec::new();

    // Key hints
    spans.push(Span::styled(
        " q:quit r:refresh \u{2190}/\u{2192}:select ?:help",
        theme::muted(),
    ));

    // Transient status message
    if let Some((msg, level)) = &app.status_message {
        spans.push(Span::raw(" | "));
        let style = match level {
            StatusLevel::Info => theme::accent(),
            StatusLevel::Warning => theme::warning(),
        };
        spans.push(Span::styled(msg.clone(), style));
    }

    // Feed freshness
    spans.push(Span::raw(" | "));
    spans.push(Span::styled(app.provider_name.clone(), theme::muted()));
    spans.push(Span::raw(" "));
    spans.push(freshness_span(app));

    let line = Line::from(spans);
    f.render_widget(Paragraph::new(line), area);
}

fn freshness_span(app: &AppState) -> Span<'static> {
    if app.board.is_loading() {
        return Span::styled("loading\u{2026}".to_string(), theme::warning());
    }
    match app.board.last_updated() {
        Some(at) => {
            let local = at.with_timezone(&chrono::Local);
            Span::styled(
                format!("updated {}", local.format("%H:%M:%S")),
                theme::secondary(),
            )
        }
        None => Span::styled("updated never".to_string(), theme::warning()),
    }
}
