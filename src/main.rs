use std::time::Duration;

use anyhow::Result;
use crossterm::event::{Event, KeyCode};

use smartair_trade::catalog;
use smartair_trade::config::Config;
use smartair_trade::feed::MarketFeed;
use smartair_trade::input::{parse_key, UiCommand};
use smartair_trade::model::holding::portfolio_value;
use smartair_trade::ui;
use smartair_trade::ui::{RenderContext, ViewState};

#[tokio::main]
async fn main() -> Result<()> {
    // Load config
    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {:#}", e);
            std::process::exit(1);
        }
    };

    // Init tracing (log to file so it doesn't interfere with TUI)
    let log_file = std::fs::File::create("smartair-trade.log")?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                config
                    .logging
                    .level
                    .parse()
                    .unwrap_or_else(|_| "info".parse().unwrap())
            }),
        )
        .with_writer(log_file)
        .with_ansi(false)
        .json()
        .init();

    tracing::info!(
        tick_interval_ms = config.feed.tick_interval_ms,
        refresh_rate_ms = config.ui.refresh_rate_ms,
        "Starting smartair-trade"
    );

    // Seed the simulated feed and start its tick task.
    let mut feed = match MarketFeed::initialize(catalog::seed_quotes(), &config.feed) {
        Ok(handle) => handle,
        Err(e) => {
            eprintln!("Failed to seed market feed: {}", e);
            std::process::exit(1);
        }
    };

    let holdings = catalog::seed_portfolio();
    let total_balance = portfolio_value(&holdings);
    let plans = catalog::mining_plans();
    let mut view = ViewState::new();

    // TUI main loop
    let mut terminal = ratatui::init();
    loop {
        let quotes = feed.snapshot();
        let ctx = RenderContext {
            view: &view,
            quotes: &quotes,
            holdings: &holdings,
            plans: &plans,
            total_balance,
            support: &config.support,
            feed_status: feed.status(),
        };
        terminal.draw(|frame| ui::render(frame, &ctx))?;

        // Handle input (non-blocking with timeout)
        if crossterm::event::poll(Duration::from_millis(config.ui.refresh_rate_ms))? {
            if let Event::Key(key) = crossterm::event::read()? {
                if key.code == KeyCode::Char('c')
                    && key
                        .modifiers
                        .contains(crossterm::event::KeyModifiers::CONTROL)
                {
                    tracing::info!("Ctrl+C received");
                    break;
                }
                match parse_key(&key.code) {
                    Some(UiCommand::Quit) => {
                        tracing::info!("User quit");
                        break;
                    }
                    Some(UiCommand::Navigate(page)) => {
                        tracing::debug!(page = %page, "navigate");
                        view.navigate_to(page);
                    }
                    Some(UiCommand::ToggleBalance) => {
                        view.toggle_balance_visibility();
                    }
                    Some(UiCommand::ToggleTheme) => {
                        let next = view.theme.toggled();
                        view.set_theme(next);
                    }
                    None => {}
                }
            }
        }
    }

    feed.shutdown().await;
    ratatui::restore();
    tracing::info!("Shutdown complete");
    println!("Goodbye! Check smartair-trade.log for details.");
    Ok(())
}
