//! Help overlay — keyboard reference.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::theme;
use crate::ui::centered_rect;

pub fn render(f: &mut Frame, area: Rect) {
    let popup = centered_rect(50, 60, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(" Keys ")
        .title_style(theme::accent_bold());

    let text = vec![
        Line::from(""),
        key_line("q / Esc", "quit"),
        key_line("r", "refresh now"),
        key_line("\u{2190} \u{2192} / h l / Tab", "select coin"),
        key_line("1-9", "select coin directly"),
        key_line("?", "this overlay"),
        Line::from(""),
        Line::from(Span::styled(
            "  Quotes refresh automatically; a failed fetch keeps",
            theme::muted(),
        )),
        Line::from(Span::styled(
            "  the previous prices on screen.",
            theme::muted(),
        )),
        Line::from(""),
        Line::from(Span::styled("  Press any key to dismiss...", theme::secondary())),
    ];

    let para = Paragraph::new(text).block(block).wrap(Wrap { trim: false });
    f.render_widget(para, popup);
}

fn key_line(keys: &str, action: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {keys:<20}"), theme::accent()),
        Span::styled(action.to_string(), theme::muted()),
    ])
}
