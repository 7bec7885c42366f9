use std::env;

use anyhow::{Context, bail};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout_secs: u64,
    pub sql_logging: bool,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from any key/value source. Unparseable numbers fall back
    /// to the defaults; a zero-sized pool is rejected.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let database_url = lookup("DATABASE_URL").context("DATABASE_URL must be set")?;
        let max_connections = lookup("DB_MAX_CONNECTIONS")
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(10);
        if max_connections == 0 {
            bail!("DB_MAX_CONNECTIONS must be greater than 0");
        }
        let min_connections = lookup("DB_MIN_CONNECTIONS")
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(1)
            .min(max_connections);
        let connect_timeout_secs = lookup("DB_CONNECT_TIMEOUT_SECS")
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(8);
        let sql_logging = lookup("DB_SQL_LOGGING")
            .map(|v| matches!(v.as_str(), "1" | "true" | "TRUE" | "yes"))
            .unwrap_or(false);
        Ok(Self {
            database_url,
            max_connections,
            min_connections,
            connect_timeout_secs,
            sql_logging,
        })
    }

    /// Config for a given URL with the pool defaults, used by tools and tests.
    pub fn for_url(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_connections: 10,
            min_connections: 1,
            connect_timeout_secs: 8,
            sql_logging: false,
        }
    }
}
