//! Configuration parsing from an injected environment.

use std::collections::HashMap;

use rust_shop::config::{AppConfig, LogFormat};
use rust_shop::error::AppError;

fn load(vars: &[(&str, &str)]) -> Result<AppConfig, AppError> {
    let env: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    AppConfig::from_lookup(|key| env.get(key).cloned())
}

#[test]
fn defaults_use_in_memory_store() {
    let config = load(&[]).unwrap();

    assert_eq!(config.host, "0.0.0.0");
    assert_eq!(config.port, 3000);
    assert_eq!(config.database, None);
    assert_eq!(config.log_format, LogFormat::Pretty);
    assert_eq!(config.server_address(), "0.0.0.0:3000");
}

#[test]
fn database_url_selects_postgres() {
    let config = load(&[
        ("DATABASE_URL", "postgres://shop@localhost/shop"),
        ("DB_MAX_CONNECTIONS", "12"),
        ("PORT", "8080"),
        ("LOG_FORMAT", "JSON"),
    ])
    .unwrap();

    let database = config.database.unwrap();
    assert_eq!(database.url, "postgres://shop@localhost/shop");
    assert_eq!(database.max_connections, 12);
    assert_eq!(config.port, 8080);
    assert_eq!(config.log_format, LogFormat::Json);
}

#[test]
fn empty_database_url_is_unset() {
    let config = load(&[("DATABASE_URL", "  ")]).unwrap();

    assert_eq!(config.database, None);
}

#[test]
fn invalid_numbers_are_config_errors() {
    assert!(matches!(load(&[("PORT", "http")]), Err(AppError::Config(_))));
    assert!(matches!(
        load(&[("DATABASE_URL", "postgres://x"), ("DB_MAX_CONNECTIONS", "-1")]),
        Err(AppError::Config(_))
    ));
    assert!(matches!(load(&[("LOG_FORMAT", "xml")]), Err(AppError::Config(_))));
}
