use std::time::Duration;

use smartair_trade::catalog::seed_quotes;
use smartair_trade::config::FeedConfig;
use smartair_trade::error::AppError;
use smartair_trade::feed::{FixedJitter, MarketFeed};

fn fast_feed(tick_interval_ms: u64) -> FeedConfig {
    FeedConfig {
        tick_interval_ms,
        ..FeedConfig::default()
    }
}

#[tokio::test]
async fn snapshot_before_first_tick_equals_seed() {
    // One-minute interval: no tick can fire during the test.
    let mut feed = MarketFeed::initialize(seed_quotes(), &fast_feed(60_000)).unwrap();
    let snapshot = feed.snapshot();
    assert_eq!(snapshot, seed_quotes());
    assert_eq!(feed.status().tick_count, 0);
    assert!(feed.status().last_tick_at.is_none());
    feed.shutdown().await;
}

#[tokio::test]
async fn consecutive_snapshots_without_tick_are_equal() {
    let mut feed = MarketFeed::initialize(seed_quotes(), &fast_feed(60_000)).unwrap();
    let a = feed.snapshot();
    let b = feed.snapshot();
    assert_eq!(a, b);
    feed.shutdown().await;
}

#[tokio::test]
async fn ticks_advance_the_working_set() {
    // FixedJitter(1.0) drifts every price upward by 0.1% per tick.
    let mut feed =
        MarketFeed::initialize_with(seed_quotes(), &fast_feed(20), FixedJitter(1.0)).unwrap();
    tokio::time::sleep(Duration::from_millis(200)).await;

    let status = feed.status();
    assert!(status.tick_count >= 1, "expected at least one tick");
    assert!(status.last_tick_at.is_some());

    let snapshot = feed.snapshot();
    let seed = seed_quotes();
    for (live, seeded) in snapshot.iter().zip(seed.iter()) {
        assert_eq!(live.id, seeded.id);
        assert!(live.price > seeded.price);
        assert!(live.change24h > seeded.change24h);
        assert!(live.history.len() > seeded.history.len());
    }
    feed.shutdown().await;
}

#[tokio::test]
async fn mutating_a_snapshot_does_not_leak_into_the_feed() {
    let mut feed = MarketFeed::initialize(seed_quotes(), &fast_feed(60_000)).unwrap();
    let mut stolen = feed.snapshot();
    stolen.clear();

    let fresh = feed.snapshot();
    assert_eq!(fresh.len(), seed_quotes().len());
    feed.shutdown().await;
}

#[tokio::test]
async fn shutdown_stops_all_further_ticks() {
    let mut feed =
        MarketFeed::initialize_with(seed_quotes(), &fast_feed(20), FixedJitter(1.0)).unwrap();
    tokio::time::sleep(Duration::from_millis(100)).await;
    feed.shutdown().await;

    let frozen = feed.snapshot();
    let frozen_count = feed.status().tick_count;
    assert!(frozen_count >= 1);

    // Wait several intervals; nothing may move.
    tokio::time::sleep(Duration::from_millis(150)).await;
    assert_eq!(feed.snapshot(), frozen);
    assert_eq!(feed.status().tick_count, frozen_count);
}

#[tokio::test]
async fn shutdown_is_idempotent() {
    let mut feed = MarketFeed::initialize(seed_quotes(), &fast_feed(60_000)).unwrap();
    feed.shutdown().await;
    feed.shutdown().await;
    feed.shutdown().await;
    assert_eq!(feed.snapshot().len(), seed_quotes().len());
}

#[test]
fn initialize_rejects_bad_seed() {
    tokio_test::block_on(async {
        let err = MarketFeed::initialize(Vec::new(), &fast_feed(60_000)).unwrap_err();
        assert!(matches!(err, AppError::InvalidSeedData(_)));
    });
}
