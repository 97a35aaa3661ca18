//! Coin card — price, 24h change, and a seven-day sparkline.

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::canvas::{Canvas, Line as CanvasLine};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

use coindeck_core::format;
use coindeck_core::quote::{CoinQuote, PriceSeries};
use coindeck_core::spark::path_points;

use crate::theme;

/// One coin's card in the grid.
pub struct CoinCard<'a> {
    quote: &'a CoinQuote,
    series: Option<&'a PriceSeries>,
    currency: &'a str,
    selected: bool,
}

impl<'a> CoinCard<'a> {
    pub fn new(
        quote: &'a CoinQuote,
        series: Option<&'a PriceSeries>,
        currency: &'a str,
        selected: bool,
    ) -> Self {
        Self {
            quote,
            series,
            currency,
            selected,
        }
    }

    fn header_lines(&self) -> Vec<Line<'static>> {
        let change = self.quote.change_pct_24h;
        let arrow = if change >= 0.0 { "\u{25b2}" } else { "\u{25bc}" };

        vec![
            Line::from(Span::styled(
                format::price(self.quote.price, self.currency),
                theme::text().add_modifier(ratatui::style::Modifier::BOLD),
            )),
            Line::from(vec![
                Span::styled(
                    format!("{arrow} {}", format::pct(change)),
                    theme::change_style(change),
                ),
                Span::styled(" 24h", theme::muted()),
            ]),
            Line::from(vec![
                Span::styled("H ", theme::muted()),
                Span::styled(
                    format::price(self.quote.high_24h, self.currency),
                    theme::secondary(),
                ),
                Span::styled("  L ", theme::muted()),
                Span::styled(
                    format::price(self.quote.low_24h, self.currency),
                    theme::secondary(),
                ),
            ]),
        ]
    }
}

impl Widget for CoinCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme::panel_border(self.selected))
            .title(format!(
                " {} \u{b7} {} ",
                self.quote.ticker(),
                self.quote.name
            ))
            .title_style(theme::panel_title(self.selected));

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height < 3 || inner.width < 8 {
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(inner);

        Paragraph::new(self.header_lines()).render(chunks[0], buf);

        render_sparkline(
            chunks[1],
            buf,
            self.series,
            theme::trend_color(self.quote.change_pct_24h),
        );
    }
}

/// Draw the series as a polyline on a braille canvas. The path generator
/// speaks screen coordinates (y down); the canvas y axis grows up, so y
/// flips here.
fn render_sparkline(
    area: Rect,
    buf: &mut Buffer,
    series: Option<&PriceSeries>,
    color: ratatui::style::Color,
) {
    if area.height == 0 || area.width == 0 {
        return;
    }

    let samples = match series {
        Some(s) if !s.is_empty() => &s.samples,
        _ => {
            Paragraph::new(Line::from(Span::styled("no sparkline", theme::muted())))
                .render(area, buf);
            return;
        }
    };

    let width = f64::from(area.width);
    let height = f64::from(area.height);
    let points = path_points(samples, width, height);

    let canvas = Canvas::default()
        .x_bounds([0.0, width])
        .y_bounds([0.0, height])
        .paint(move |ctx| {
            for pair in points.windows(2) {
                ctx.draw(&CanvasLine {
                    x1: pair[0].x,
                    y1: height - pair[0].y,
                    x2: pair[1].x,
                    y2: height - pair[1].y,
                    color,
                });
            }
        });
    canvas.render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_quote() -> CoinQuote {
        CoinQuote {
            id: "bitcoin".into(),
            symbol: "btc".into(),
            name: "Bitcoin".into(),
            price: 64_250.18,
            change_pct_24h: 2.35,
            market_cap: 1.27e12,
            volume_24h: 2.84e10,
            high_24h: 65_100.0,
            low_24h: 63_400.0,
            ath: 73_738.0,
            atl: 67.81,
        }
    }

    fn sample_series() -> PriceSeries {
        let samples = (0..168)
            .map(|i| 63_000.0 + (i as f64 * 0.3).sin() * 800.0)
            .collect();
        PriceSeries::new("bitcoin", samples)
    }

    fn buffer_text(buf: &Buffer, area: Rect) -> String {
        let mut content = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                content.push_str(buf.cell((x, y)).unwrap().symbol());
            }
        }
        content
    }

    #[test]
    fn card_shows_ticker_price_and_change() {
        let quote = sample_quote();
        let series = sample_series();
        let card = CoinCard::new(&quote, Some(&series), "usd", false);

        let area = Rect::new(0, 0, 40, 10);
        let mut buf = Buffer::empty(area);
        card.render(area, &mut buf);

        let content = buffer_text(&buf, area);
        assert!(content.contains("BTC"));
        assert!(content.contains("$64,250.18"));
        assert!(content.contains("+2.35%"));
    }

    #[test]
    fn card_without_series_says_so() {
        let quote = sample_quote();
        let card = CoinCard::new(&quote, None, "usd", false);

        let area = Rect::new(0, 0, 40, 10);
        let mut buf = Buffer::empty(area);
        card.render(area, &mut buf);

        assert!(buffer_text(&buf, area).contains("no sparkline"));
    }

    #[test]
    fn losing_coin_shows_down_arrow() {
        let mut quote = sample_quote();
        quote.change_pct_24h = -1.82;
        let series = sample_series();
        let card = CoinCard::new(&quote, Some(&series), "usd", true);

        let area = Rect::new(0, 0, 40, 10);
        let mut buf = Buffer::empty(area);
        card.render(area, &mut buf);

        let content = buffer_text(&buf, area);
        assert!(content.contains('\u{25bc}'));
        assert!(content.contains("-1.82%"));
    }

    #[test]
    fn tiny_area_renders_without_panic() {
        let quote = sample_quote();
        let series = sample_series();
        let card = CoinCard::new(&quote, Some(&series), "usd", false);

        let area = Rect::new(0, 0, 6, 2);
        let mut buf = Buffer::empty(area);
        card.render(area, &mut buf);
    }

    #[test]
    fn sparkline_paints_braille_cells() {
        let quote = sample_quote();
        let series = sample_series();
        let card = CoinCard::new(&quote, Some(&series), "usd", false);

        let area = Rect::new(0, 0, 40, 12);
        let mut buf = Buffer::empty(area);
        card.render(area, &mut buf);

        // Braille patterns occupy U+2800..U+28FF.
        let has_braille = buffer_text(&buf, area)
            .chars()
            .any(|c| ('\u{2800}'..='\u{28ff}').contains(&c));
        assert!(has_braille, "sparkline should draw braille cells");
    }
}
