//! Simulated market feed. There is no exchange behind this: a single tokio
//! task owns the quote working set and nudges every price on a fixed
//! interval, publishing whole generations through a watch channel. Readers
//! only ever see copies.

use std::collections::HashSet;
use std::time::Duration;

use chrono::{DateTime, Utc};
use rand::Rng;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::config::FeedConfig;
use crate::error::AppError;
use crate::model::quote::Quote;

/// Uniform draws in `[0, 1)` feeding the per-tick perturbation. Seam for
/// tests that need a pinned draw.
pub trait JitterSource: Send {
    fn unit(&mut self) -> f64;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngJitter;

impl JitterSource for ThreadRngJitter {
    fn unit(&mut self) -> f64 {
        rand::thread_rng().gen::<f64>()
    }
}

/// Always returns the same draw. `FixedJitter(0.5)` is the zero-point: both
/// perturbations cancel and a tick leaves every quote unchanged.
#[derive(Debug, Clone, Copy)]
pub struct FixedJitter(pub f64);

impl JitterSource for FixedJitter {
    fn unit(&mut self) -> f64 {
        self.0
    }
}

/// The quote working set plus the perturbation parameters. Synchronous and
/// single-owner; the async wrapper below drives it from exactly one task.
#[derive(Debug, Clone)]
pub struct QuoteBook {
    quotes: Vec<Quote>,
    price_jitter: f64,
    change_jitter: f64,
    history_len: usize,
}

impl QuoteBook {
    /// Validate and adopt the seed set. The seed must be non-empty, ids must
    /// be unique, and every price must start positive.
    pub fn new(seed: Vec<Quote>, feed: &FeedConfig) -> Result<Self, AppError> {
        if seed.is_empty() {
            return Err(AppError::InvalidSeedData("seed quote list is empty".to_string()));
        }
        let mut seen = HashSet::new();
        for quote in &seed {
            if !seen.insert(quote.id.clone()) {
                return Err(AppError::InvalidSeedData(format!(
                    "duplicate quote id '{}'",
                    quote.id
                )));
            }
            if quote.price <= 0.0 {
                return Err(AppError::InvalidSeedData(format!(
                    "quote '{}' has non-positive seed price {}",
                    quote.id, quote.price
                )));
            }
        }
        Ok(Self {
            quotes: seed,
            price_jitter: feed.price_jitter,
            change_jitter: feed.change_jitter,
            history_len: feed.history_len,
        })
    }

    /// One full pass over the working set. Each quote is replaced atomically:
    /// price, 24h change and history move together.
    ///
    /// `price' = price * (1 + (r - 0.5) * price_jitter)` and
    /// `change' = change + (r - 0.5) * change_jitter`. With the default
    /// widths the multiplier stays positive, so prices cannot cross zero;
    /// a price update that would land non-positive under an oversized
    /// configured width is skipped for that tick.
    pub fn apply_tick(&mut self, jitter: &mut dyn JitterSource) {
        for quote in &mut self.quotes {
            let u = (jitter.unit() - 0.5) * self.price_jitter;
            let v = (jitter.unit() - 0.5) * self.change_jitter;

            let next_price = quote.price * (1.0 + u);
            if next_price > 0.0 {
                quote.price = next_price;
            }
            quote.change24h += v;
            let sample = quote.price;
            quote.record_price(sample, self.history_len);
        }
    }

    /// Independent copy of the current generation.
    pub fn snapshot(&self) -> Vec<Quote> {
        self.quotes.clone()
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FeedStatus {
    pub tick_count: u64,
    pub last_tick_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
struct Generation {
    quotes: Vec<Quote>,
    status: FeedStatus,
}

pub struct MarketFeed;

impl MarketFeed {
    /// Adopt the seed set and start the recurring tick task. Must run inside
    /// a tokio runtime.
    pub fn initialize(seed: Vec<Quote>, feed: &FeedConfig) -> Result<FeedHandle, AppError> {
        Self::initialize_with(seed, feed, ThreadRngJitter)
    }

    /// Same, with an explicit jitter source.
    pub fn initialize_with(
        seed: Vec<Quote>,
        feed: &FeedConfig,
        jitter: impl JitterSource + 'static,
    ) -> Result<FeedHandle, AppError> {
        let mut book = QuoteBook::new(seed, feed)?;
        let interval = Duration::from_millis(feed.tick_interval_ms);

        let (generation_tx, generation_rx) = watch::channel(Generation {
            quotes: book.snapshot(),
            status: FeedStatus::default(),
        });
        let (shutdown_tx, mut shutdown_rx) = watch::channel(false);

        let task = tokio::spawn(async move {
            let mut jitter = jitter;
            let mut tick_count: u64 = 0;
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // The first interval tick completes immediately; consume it so
            // the seed generation stands for a full interval.
            ticker.tick().await;

            loop {
                tokio::select! {
                    biased;
                    _ = shutdown_rx.changed() => {
                        break;
                    }
                    _ = ticker.tick() => {
                        book.apply_tick(&mut jitter);
                        tick_count += 1;
                        let generation = Generation {
                            quotes: book.snapshot(),
                            status: FeedStatus {
                                tick_count,
                                last_tick_at: Some(Utc::now()),
                            },
                        };
                        if generation_tx.send(generation).is_err() {
                            // Every handle is gone; nobody can read again.
                            break;
                        }
                        tracing::debug!(tick_count, quotes = book.len(), "market tick applied");
                    }
                }
            }
            tracing::debug!(tick_count, "market feed task stopped");
        });

        Ok(FeedHandle {
            generation_rx,
            shutdown_tx,
            task: Some(task),
        })
    }
}

/// Read handle over the running feed. Cheap to clone a snapshot from; the
/// working set itself never leaves the feed task.
#[derive(Debug)]
pub struct FeedHandle {
    generation_rx: watch::Receiver<Generation>,
    shutdown_tx: watch::Sender<bool>,
    task: Option<JoinHandle<()>>,
}

impl FeedHandle {
    /// Copy of the latest published generation, seed order preserved.
    /// Mutating the returned quotes never affects the feed.
    pub fn snapshot(&self) -> Vec<Quote> {
        self.generation_rx.borrow().quotes.clone()
    }

    pub fn status(&self) -> FeedStatus {
        self.generation_rx.borrow().status
    }

    /// Stop the tick task. Idempotent; once this returns no further ticks
    /// occur (an in-flight pass is allowed to finish first).
    pub async fn shutdown(&mut self) {
        let _ = self.shutdown_tx.send(true);
        if let Some(task) = self.task.take() {
            if let Err(e) = task.await {
                tracing::warn!(error = %e, "market feed task ended abnormally");
            }
        }
    }
}
