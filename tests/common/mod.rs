#![allow(dead_code)]

use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use food_delivery_store::{
    config::AppConfig,
    db::{create_orm_conn, run_migrations},
    state::AppState,
};

/// Fresh in-memory store with every table migrated.
///
/// SQLite gives each connection its own `:memory:` database, so the pool is
/// pinned to a single connection.
pub async fn setup_state() -> anyhow::Result<AppState> {
    let config = AppConfig {
        max_connections: 1,
        min_connections: 1,
        ..AppConfig::for_url("sqlite::memory:")
    };
    let orm = create_orm_conn(&config).await?;
    run_migrations(&orm).await?;
    Ok(AppState { orm })
}

/// Whole-second UTC timestamp, `minutes` after a fixed reference point.
pub fn at_minute(minutes: u32) -> DateTime<FixedOffset> {
    Utc.with_ymd_and_hms(2025, 6, 1, 12, minutes, 0)
        .unwrap()
        .into()
}
