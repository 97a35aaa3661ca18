//! Detail panel — seven-day price chart and stats for the selected coin.

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::symbols;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph, Widget};

use coindeck_core::format;
use coindeck_core::quote::{CoinQuote, PriceSeries};

use crate::theme;

pub struct DetailPanel<'a> {
    quote: &'a CoinQuote,
    series: Option<&'a PriceSeries>,
    currency: &'a str,
}

impl<'a> DetailPanel<'a> {
    pub fn new(quote: &'a CoinQuote, series: Option<&'a PriceSeries>, currency: &'a str) -> Self {
        Self {
            quote,
            series,
            currency,
        }
    }

    fn stats_line(&self) -> Line<'static> {
        let mut spans = vec![
            Span::styled("mcap ", theme::muted()),
            Span::styled(
                format::compact(self.quote.market_cap, self.currency),
                theme::secondary(),
            ),
            Span::styled("  vol ", theme::muted()),
            Span::styled(
                format::compact(self.quote.volume_24h, self.currency),
                theme::secondary(),
            ),
            Span::styled("  ath ", theme::muted()),
            Span::styled(
                format::price(self.quote.ath, self.currency),
                theme::secondary(),
            ),
            Span::styled("  atl ", theme::muted()),
            Span::styled(
                format::price(self.quote.atl, self.currency),
                theme::secondary(),
            ),
        ];

        if let Some(trend) = self.series.and_then(|s| s.trend_pct()) {
            spans.push(Span::styled("  7d ", theme::muted()));
            spans.push(Span::styled(format::pct(trend), theme::change_style(trend)));
        }

        Line::from(spans)
    }
}

impl Widget for DetailPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme::muted())
            .title(format!(" {} \u{b7} 7d ", self.quote.name))
            .title_style(theme::secondary());

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height < 2 || inner.width < 12 {
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(0)])
            .split(inner);

        Paragraph::new(self.stats_line()).render(chunks[0], buf);

        match self.series {
            Some(series) if series.len() > 1 => {
                render_chart(chunks[1], buf, series, self.currency)
            }
            _ => {
                Paragraph::new(Line::from(Span::styled(
                    "no price history for this coin",
                    theme::muted(),
                )))
                .render(chunks[1], buf);
            }
        }
    }
}

fn render_chart(area: Rect, buf: &mut Buffer, series: &PriceSeries, currency: &str) {
    let samples = &series.samples;
    let min_y = samples.iter().copied().fold(f64::INFINITY, f64::min);
    let max_y = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let y_range = max_y - min_y;
    let y_pad = if y_range > 0.0 { y_range * 0.05 } else { 1.0 };
    let y_lower = min_y - y_pad;
    let y_upper = max_y + y_pad;
    let x_max = samples.len().saturating_sub(1) as f64;

    let data: Vec<(f64, f64)> = samples
        .iter()
        .enumerate()
        .map(|(i, &v)| (i as f64, v))
        .collect();

    let trend = series.trend_pct().unwrap_or(0.0);
    let dataset = Dataset::default()
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(theme::trend_color(trend)))
        .data(&data);

    let chart = Chart::new(vec![dataset])
        .x_axis(
            Axis::default()
                .style(theme::muted())
                .bounds([0.0, x_max.max(1.0)])
                .labels(vec![
                    Span::styled("7d ago", theme::muted()),
                    Span::styled("now", theme::muted()),
                ]),
        )
        .y_axis(
            Axis::default()
                .style(theme::muted())
                .bounds([y_lower, y_upper])
                .labels(vec![
                    Span::styled(format::price(y_lower, currency), theme::muted()),
                    Span::styled(format::price(y_upper, currency), theme::muted()),
                ]),
        );

    chart.render(area, buf);
}
