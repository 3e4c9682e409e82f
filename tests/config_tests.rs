use smartair_trade::config::Config;

#[test]
fn empty_toml_yields_full_defaults() {
    let config: Config = toml::from_str("").unwrap();
    assert_eq!(config.feed.tick_interval_ms, 5000);
    assert!((config.feed.price_jitter - 0.002).abs() < f64::EPSILON);
    assert!((config.feed.change_jitter - 0.1).abs() < f64::EPSILON);
    assert_eq!(config.feed.history_len, 120);
    assert_eq!(config.ui.refresh_rate_ms, 100);
    assert_eq!(config.logging.level, "info");
    assert!(config.validate().is_ok());
}

#[test]
fn partial_override_keeps_other_defaults() {
    let config: Config = toml::from_str(
        r#"
[feed]
tick_interval_ms = 1000
history_len = 10

[support]
email = "ops@example.com"
telegram_url = "https://t.me/ops"
"#,
    )
    .unwrap();
    assert_eq!(config.feed.tick_interval_ms, 1000);
    assert_eq!(config.feed.history_len, 10);
    assert!((config.feed.price_jitter - 0.002).abs() < f64::EPSILON);
    assert_eq!(config.support.email, "ops@example.com");
    assert_eq!(config.support.telegram_url, "https://t.me/ops");
}

#[test]
fn validate_rejects_degenerate_values() {
    let mut config = Config::default();
    config.feed.history_len = 0;
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.ui.refresh_rate_ms = 0;
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.feed.price_jitter = -0.5;
    assert!(config.validate().is_err());
}

#[test]
fn shipped_default_file_matches_compiled_defaults() {
    let shipped: Config = toml::from_str(include_str!("../config/default.toml")).unwrap();
    let compiled = Config::default();
    assert_eq!(shipped.feed.tick_interval_ms, compiled.feed.tick_interval_ms);
    assert_eq!(shipped.feed.history_len, compiled.feed.history_len);
    assert_eq!(shipped.ui.refresh_rate_ms, compiled.ui.refresh_rate_ms);
    assert_eq!(shipped.support.email, compiled.support.email);
    assert_eq!(shipped.support.telegram_url, compiled.support.telegram_url);
    assert_eq!(shipped.logging.level, compiled.logging.level);
}
