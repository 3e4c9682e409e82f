use ratatui::backend::TestBackend;
use ratatui::Terminal;

use smartair_trade::catalog::{mining_plans, seed_portfolio, seed_quotes};
use smartair_trade::config::SupportConfig;
use smartair_trade::feed::FeedStatus;
use smartair_trade::model::holding::portfolio_value;
use smartair_trade::ui::{self, Page, RenderContext, ViewState};

fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
    let buf = terminal.backend().buffer();
    let area = buf.area;
    let mut out = String::new();
    for y in 0..area.height {
        for x in 0..area.width {
            out.push_str(buf[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

fn render_page(view: &ViewState) -> String {
    let backend = TestBackend::new(120, 40);
    let mut terminal = Terminal::new(backend).expect("test terminal");
    let quotes = seed_quotes();
    let holdings = seed_portfolio();
    let plans = mining_plans();
    let support = SupportConfig::default();
    let ctx = RenderContext {
        view,
        quotes: &quotes,
        holdings: &holdings,
        plans: &plans,
        total_balance: portfolio_value(&holdings),
        support: &support,
        feed_status: FeedStatus::default(),
    };

    terminal
        .draw(|frame| ui::render(frame, &ctx))
        .expect("render should succeed");
    buffer_text(&terminal)
}

#[test]
fn dashboard_renders_balance_portfolio_and_overview() {
    let text = render_page(&ViewState::new());
    assert!(text.contains(" Dashboard "));
    assert!(text.contains("Total Balance"));
    assert!(text.contains("$29,499.49"));
    assert!(text.contains("My Portfolio"));
    assert!(text.contains("Tether"));
    assert!(text.contains("Market Overview"));
    assert!(text.contains("Solana"));
}

#[test]
fn dashboard_masks_balance_when_hidden() {
    let mut view = ViewState::new();
    view.toggle_balance_visibility();
    let text = render_page(&view);
    assert!(text.contains("••••••"));
    assert!(!text.contains("$29,499.49"));
}

#[test]
fn market_page_renders_the_full_quote_table() {
    let mut view = ViewState::new();
    view.navigate_to(Page::Market);
    let text = render_page(&view);
    assert!(text.contains(" Market "));
    assert!(text.contains("24h Change"));
    assert!(text.contains("$45,230.75"));
    assert!(text.contains("Binance Coin"));
    assert!(text.contains("XRP"));
    assert!(text.contains("-1.10%"));
}

#[test]
fn trade_page_renders_placeholder_copy() {
    let mut view = ViewState::new();
    view.navigate_to(Page::Trade);
    let text = render_page(&view);
    assert!(text.contains("Trading Platform"));
    assert!(text.contains("Spot Trading"));
    assert!(text.contains("Options Trading"));
    assert!(text.contains("Coming Soon"));
}

#[test]
fn mining_page_renders_all_three_plans() {
    let mut view = ViewState::new();
    view.navigate_to(Page::Mining);
    let text = render_page(&view);
    assert!(text.contains("Cloud Mining"));
    assert!(text.contains("3 Days"));
    assert!(text.contains("15 Days"));
    assert!(text.contains("30 Days"));
    assert!(text.contains("Min: $1,000.00"));
}

#[test]
fn settings_page_renders_theme_and_support_contacts() {
    let mut view = ViewState::new();
    view.navigate_to(Page::Settings);
    let text = render_page(&view);
    assert!(text.contains(" Settings "));
    assert!(text.contains("Dark"));
    assert!(text.contains("SmartAirTradeCustomerService@outlook.com"));
    assert!(text.contains("https://t.me/XdyLn25"));
}

#[test]
fn navigation_switches_the_rendered_page() {
    let mut view = ViewState::new();
    view.navigate_to(Page::Mining);
    let text = render_page(&view);
    assert!(text.contains(" Mining "));
    assert!(!text.contains("My Portfolio"));
}

#[test]
fn chrome_bars_frame_every_page() {
    for page in Page::ALL {
        let mut view = ViewState::new();
        view.navigate_to(page);
        let text = render_page(&view);
        assert!(text.contains("SmartAirTrade"), "status bar on {page:?}");
        assert!(text.contains("ticks: 0"), "tick counter on {page:?}");
        assert!(text.contains("[Q]"), "keybind bar on {page:?}");
    }
}
