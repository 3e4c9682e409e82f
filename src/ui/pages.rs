use chrono::{DateTime, Utc};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::config::SupportConfig;
use crate::model::mining::MiningPlan;
use crate::ui::projection::{format_usd, DashboardView, MarketView};
use crate::ui::{Page, Theme};

fn change_color(gaining: bool) -> Color {
    if gaining {
        Color::Green
    } else {
        Color::Red
    }
}

fn label_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

fn panel_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
}

pub struct StatusBar {
    pub current_page: Page,
    pub theme: Theme,
    pub tick_count: u64,
    pub last_tick_at: Option<DateTime<Utc>>,
}

impl Widget for StatusBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let last_tick = self
            .last_tick_at
            .map(|t| t.format("%H:%M:%S").to_string())
            .unwrap_or_else(|| "--:--:--".to_string());

        let line = Line::from(vec![
            Span::styled(
                " SmartAirTrade ",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("| ", label_style()),
            Span::styled(self.current_page.label(), Style::default().fg(Color::Cyan)),
            Span::styled(" | theme: ", label_style()),
            Span::styled(self.theme.label(), Style::default().fg(Color::White)),
            Span::styled(" | ", label_style()),
            Span::styled(format!("ticks: {}", self.tick_count), label_style()),
            Span::styled(format!("  last: {}", last_tick), label_style()),
        ]);

        buf.set_line(area.x, area.y, &line, area.width);
    }
}

pub struct DashboardPage<'a> {
    view: &'a DashboardView,
}

impl<'a> DashboardPage<'a> {
    pub fn new(view: &'a DashboardView) -> Self {
        Self { view }
    }
}

impl Widget for DashboardPage<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines = vec![
            Line::from(Span::styled("Total Balance", label_style())),
            Line::from(Span::styled(
                self.view.balance_label.clone(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::default(),
            Line::from(Span::styled("My Portfolio", label_style())),
        ];
        for row in &self.view.portfolio {
            lines.push(Line::from(vec![
                Span::styled(format!("{:<6}", row.symbol), Style::default().fg(Color::Cyan)),
                Span::styled(format!("{:<14}", row.name), Style::default().fg(Color::White)),
                Span::styled(format!("{:>14}", row.value_label), Style::default().fg(Color::White)),
                Span::styled(
                    format!("{:>10}", row.change_label),
                    Style::default().fg(change_color(row.gaining)),
                ),
            ]));
        }
        lines.push(Line::default());
        lines.push(Line::from(Span::styled("Market Overview", label_style())));
        for row in &self.view.overview {
            lines.push(Line::from(vec![
                Span::styled(format!("{:<14}", row.name), Style::default().fg(Color::White)),
                Span::styled(format!("{:<6}", row.symbol), label_style()),
                Span::styled(format!("{:>14}", row.price_label), Style::default().fg(Color::White)),
                Span::styled(
                    format!("{:>10}", row.change_label),
                    Style::default().fg(change_color(row.gaining)),
                ),
            ]));
        }

        Paragraph::new(lines)
            .block(panel_block(" Dashboard "))
            .render(area, buf);
    }
}

pub struct MarketPage<'a> {
    view: &'a MarketView,
}

impl<'a> MarketPage<'a> {
    pub fn new(view: &'a MarketView) -> Self {
        Self { view }
    }
}

impl Widget for MarketPage<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines = vec![Line::from(vec![
            Span::styled(format!("{:<6}", "Asset"), label_style()),
            Span::styled(format!("{:<14}", "Name"), label_style()),
            Span::styled(format!("{:>14}", "Price"), label_style()),
            Span::styled(format!("{:>12}", "24h Change"), label_style()),
        ])];
        for row in &self.view.rows {
            lines.push(Line::from(vec![
                Span::styled(format!("{:<6}", row.symbol), Style::default().fg(Color::Cyan)),
                Span::styled(format!("{:<14}", row.name), Style::default().fg(Color::White)),
                Span::styled(format!("{:>14}", row.price_label), Style::default().fg(Color::White)),
                Span::styled(
                    format!("{:>12}", row.change_label),
                    Style::default().fg(change_color(row.gaining)),
                ),
            ]));
        }

        Paragraph::new(lines)
            .block(panel_block(" Market "))
            .render(area, buf);
    }
}

pub struct TradePage;

impl Widget for TradePage {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = vec![
            Line::from(Span::styled(
                "Trading Platform",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::default(),
            Line::from(Span::styled(
                "Advanced trading features coming soon with real-time order",
                label_style(),
            )),
            Line::from(Span::styled(
                "books and professional charting tools.",
                label_style(),
            )),
            Line::default(),
            Line::from(vec![
                Span::styled("Spot Trading    ", Style::default().fg(Color::White)),
                Span::styled("Coming Soon", Style::default().fg(Color::Yellow)),
            ]),
            Line::from(vec![
                Span::styled("Options Trading ", Style::default().fg(Color::White)),
                Span::styled("Coming Soon", Style::default().fg(Color::Yellow)),
            ]),
        ];

        Paragraph::new(lines)
            .block(panel_block(" Trade "))
            .render(area, buf);
    }
}

pub struct MiningPage<'a> {
    plans: &'a [MiningPlan],
}

impl<'a> MiningPage<'a> {
    pub fn new(plans: &'a [MiningPlan]) -> Self {
        Self { plans }
    }
}

impl Widget for MiningPage<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines = vec![
            Line::from(Span::styled(
                "Cloud Mining",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Earn passive income with flexible plans.",
                label_style(),
            )),
            Line::default(),
        ];
        for plan in self.plans {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{:<10}", plan.period_label()),
                    Style::default().fg(Color::Cyan),
                ),
                Span::styled(
                    format!("{:>6.0}%", plan.yield_percent),
                    Style::default().fg(Color::Green),
                ),
                Span::styled(
                    format!("   Min: {}", format_usd(plan.min_deposit_usd)),
                    label_style(),
                ),
            ]));
        }

        Paragraph::new(lines)
            .block(panel_block(" Mining "))
            .render(area, buf);
    }
}

pub struct SettingsPage<'a> {
    theme: Theme,
    support: &'a SupportConfig,
}

impl<'a> SettingsPage<'a> {
    pub fn new(theme: Theme, support: &'a SupportConfig) -> Self {
        Self { theme, support }
    }
}

impl Widget for SettingsPage<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = vec![
            Line::from(vec![
                Span::styled("Theme:    ", label_style()),
                Span::styled(self.theme.label(), Style::default().fg(Color::White)),
                Span::styled("  (press L to switch)", label_style()),
            ]),
            Line::default(),
            Line::from(Span::styled("Support", label_style())),
            Line::from(vec![
                Span::styled("Email:    ", label_style()),
                Span::styled(self.support.email.clone(), Style::default().fg(Color::White)),
            ]),
            Line::from(vec![
                Span::styled("Telegram: ", label_style()),
                Span::styled(
                    self.support.telegram_url.clone(),
                    Style::default().fg(Color::Cyan),
                ),
            ]),
        ];

        Paragraph::new(lines)
            .block(panel_block(" Settings "))
            .render(area, buf);
    }
}

pub struct KeybindBar;

impl Widget for KeybindBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = Line::from(vec![
            Span::styled(" [Q]", Style::default().fg(Color::Yellow)),
            Span::styled("uit  ", label_style()),
            Span::styled("[1-5]", Style::default().fg(Color::Yellow)),
            Span::styled(" pages  ", label_style()),
            Span::styled("[B]", Style::default().fg(Color::Yellow)),
            Span::styled("alance  ", label_style()),
            Span::styled("[L]", Style::default().fg(Color::Yellow)),
            Span::styled(" theme  ", label_style()),
        ]);

        buf.set_line(area.x, area.y, &line, area.width);
    }
}
