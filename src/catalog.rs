//! Seed data for the mock session. Everything on screen derives from these
//! constants; only the quote set is mutated afterwards, by the feed task.

use crate::model::holding::Holding;
use crate::model::mining::MiningPlan;
use crate::model::quote::Quote;

/// The five assets the Market page lists, with their seed sparklines.
pub fn seed_quotes() -> Vec<Quote> {
    vec![
        Quote::new("bitcoin", "BTC", "Bitcoin", 45230.75, 2.15)
            .with_history(&[44000.0, 44500.0, 44800.0, 45000.0, 45230.0]),
        Quote::new("ethereum", "ETH", "Ethereum", 2410.90, 3.52)
            .with_history(&[2350.0, 2380.0, 2400.0, 2410.0, 2410.0]),
        Quote::new("solana", "SOL", "Solana", 98.25, -1.10)
            .with_history(&[99.0, 98.5, 98.0, 98.2, 98.25]),
        Quote::new("bnb", "BNB", "Binance Coin", 315.42, 0.85)
            .with_history(&[312.0, 314.0, 315.0, 315.5, 315.42]),
        Quote::new("ripple", "XRP", "Ripple", 0.58, -0.45)
            .with_history(&[0.57, 0.575, 0.58, 0.579, 0.58]),
    ]
}

/// Portfolio rows for the Dashboard. Frozen for the whole session; their
/// values sum to the advertised $29,499.49 total balance.
pub fn seed_portfolio() -> Vec<Holding> {
    vec![
        Holding::new("bitcoin", "BTC", "Bitcoin", 0.15, 6784.61, 45230.75, 2.15),
        Holding::new("ethereum", "ETH", "Ethereum", 3.2, 7714.88, 2410.90, 3.52),
        Holding::new("usdt", "USDT", "Tether", 15000.0, 15000.0, 1.0, 0.0),
    ]
}

/// The three cloud-mining offers on the Mining page.
pub fn mining_plans() -> Vec<MiningPlan> {
    vec![
        MiningPlan::new(3, 5.0, 100.0),
        MiningPlan::new(15, 12.0, 500.0),
        MiningPlan::new(30, 25.0, 1000.0),
    ]
}
