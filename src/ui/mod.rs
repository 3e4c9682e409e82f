pub mod pages;
pub mod projection;

use std::fmt;
use std::str::FromStr;

use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::Frame;

use crate::config::SupportConfig;
use crate::error::AppError;
use crate::feed::FeedStatus;
use crate::model::holding::Holding;
use crate::model::mining::MiningPlan;
use crate::model::quote::Quote;

use pages::{
    DashboardPage, KeybindBar, MarketPage, MiningPage, SettingsPage, StatusBar, TradePage,
};
use projection::{DashboardView, MarketView};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    Market,
    Trade,
    Mining,
    Settings,
}

impl Page {
    pub const ALL: [Page; 5] = [
        Page::Dashboard,
        Page::Market,
        Page::Trade,
        Page::Mining,
        Page::Settings,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Market => "Market",
            Page::Trade => "Trade",
            Page::Mining => "Mining",
            Page::Settings => "Settings",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Page {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dashboard" => Ok(Page::Dashboard),
            "market" => Ok(Page::Market),
            "trade" => Ok(Page::Trade),
            "mining" => Ok(Page::Mining),
            "settings" => Ok(Page::Settings),
            other => Err(AppError::InvalidEnumValue {
                kind: "page",
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn label(&self) -> &'static str {
        match self {
            Theme::Dark => "Dark",
            Theme::Light => "Light",
        }
    }

    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

impl FromStr for Theme {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            other => Err(AppError::InvalidEnumValue {
                kind: "theme",
                value: other.to_string(),
            }),
        }
    }
}

/// Session-scoped display state. Nothing here survives the process and
/// nothing outside this struct ever writes to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    pub current_page: Page,
    pub balance_hidden: bool,
    pub theme: Theme,
}

impl ViewState {
    pub fn new() -> Self {
        Self {
            current_page: Page::Dashboard,
            balance_hidden: false,
            theme: Theme::Dark,
        }
    }

    pub fn navigate_to(&mut self, page: Page) {
        self.current_page = page;
    }

    pub fn toggle_balance_visibility(&mut self) {
        self.balance_hidden = !self.balance_hidden;
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

/// Everything a frame needs, pulled together by the main loop.
pub struct RenderContext<'a> {
    pub view: &'a ViewState,
    pub quotes: &'a [Quote],
    pub holdings: &'a [Holding],
    pub plans: &'a [MiningPlan],
    pub total_balance: f64,
    pub support: &'a SupportConfig,
    pub feed_status: FeedStatus,
}

pub fn render(frame: &mut Frame, ctx: &RenderContext) {
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // status bar
            Constraint::Min(10),   // page body
            Constraint::Length(1), // keybinds
        ])
        .split(frame.area());

    frame.render_widget(
        StatusBar {
            current_page: ctx.view.current_page,
            theme: ctx.view.theme,
            tick_count: ctx.feed_status.tick_count,
            last_tick_at: ctx.feed_status.last_tick_at,
        },
        outer[0],
    );

    match ctx.view.current_page {
        Page::Dashboard => {
            let view = DashboardView::project(
                ctx.quotes,
                ctx.holdings,
                ctx.total_balance,
                ctx.view.balance_hidden,
            );
            frame.render_widget(DashboardPage::new(&view), outer[1]);
        }
        Page::Market => {
            let view = MarketView::project(ctx.quotes);
            frame.render_widget(MarketPage::new(&view), outer[1]);
        }
        Page::Trade => {
            frame.render_widget(TradePage, outer[1]);
        }
        Page::Mining => {
            frame.render_widget(MiningPage::new(ctx.plans), outer[1]);
        }
        Page::Settings => {
            frame.render_widget(SettingsPage::new(ctx.view.theme, ctx.support), outer[1]);
        }
    }

    frame.render_widget(KeybindBar, outer[2]);
}
