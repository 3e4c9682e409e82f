use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::Path;

const CONFIG_PATH: &str = "config/default.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub feed: FeedConfig,
    pub ui: UiConfig,
    pub support: SupportConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    /// Milliseconds between simulated market updates.
    pub tick_interval_ms: u64,
    /// Full width of the relative price perturbation per tick. The applied
    /// multiplier is `1 + (r - 0.5) * price_jitter`.
    pub price_jitter: f64,
    /// Full width of the additive 24h-change perturbation per tick.
    pub change_jitter: f64,
    /// Price samples retained per quote, oldest trimmed first.
    pub history_len: usize,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub refresh_rate_ms: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SupportConfig {
    /// Opaque pass-through strings rendered on the Settings page.
    pub email: String,
    pub telegram_url: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 5000,
            price_jitter: 0.002,
            change_jitter: 0.1,
            history_len: 120,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            refresh_rate_ms: 100,
        }
    }
}

impl Default for SupportConfig {
    fn default() -> Self {
        Self {
            email: "SmartAirTradeCustomerService@outlook.com".to_string(),
            telegram_url: "https://t.me/XdyLn25".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            feed: FeedConfig::default(),
            ui: UiConfig::default(),
            support: SupportConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Load `config/default.toml`, falling back to compiled defaults when
    /// the file does not exist. Everything here is mock data, so a missing
    /// config is not an error.
    pub fn load() -> Result<Self> {
        let config_path = Path::new(CONFIG_PATH);
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let config_str = std::fs::read_to_string(config_path)
            .with_context(|| format!("failed to read {}", config_path.display()))?;
        let config: Config =
            toml::from_str(&config_str).context("failed to parse config/default.toml")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.feed.tick_interval_ms == 0 {
            bail!("feed.tick_interval_ms must be > 0");
        }
        if self.feed.history_len == 0 {
            bail!("feed.history_len must be > 0");
        }
        if self.feed.price_jitter < 0.0 || self.feed.change_jitter < 0.0 {
            bail!("feed jitter widths must be >= 0");
        }
        if self.ui.refresh_rate_ms == 0 {
            bail!("ui.refresh_rate_ms must be > 0");
        }
        Ok(())
    }
}
