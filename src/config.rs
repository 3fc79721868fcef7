use std::env;

use crate::pagination::{DEFAULT_LOGS_PER_PAGE, MAX_ITEMS_PER_PAGE};

const DEFAULT_DATABASE_URL: &str = "app.db";
const DEFAULT_ADDRESS: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

/// Runtime settings read from the environment at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub database_url: String,
    pub address: String,
    pub port: u16,
    /// Page size of the activity log when the client does not choose one.
    pub logs_per_page: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            address: DEFAULT_ADDRESS.to_string(),
            port: DEFAULT_PORT,
            logs_per_page: DEFAULT_LOGS_PER_PAGE,
        }
    }
}

impl ServerConfig {
    /// Read `DATABASE_URL`, `ADDRESS`, `PORT` and `LOGS_PER_PAGE`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from any key lookup. Unparsable numbers fall back to
    /// their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = lookup("PORT")
            .and_then(|port| port.trim().parse::<u16>().ok())
            .unwrap_or(defaults.port);
        let logs_per_page = lookup("LOGS_PER_PAGE")
            .and_then(|value| value.trim().parse::<usize>().ok())
            .map(|value| value.clamp(1, MAX_ITEMS_PER_PAGE))
            .unwrap_or(defaults.logs_per_page);

        Self {
            database_url: lookup("DATABASE_URL").unwrap_or(defaults.database_url),
            address: lookup("ADDRESS").unwrap_or(defaults.address),
            port,
            logs_per_page,
        }
    }
}
