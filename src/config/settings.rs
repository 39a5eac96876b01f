//! Service settings loading from config.toml
//!
//! Both binaries read the same settings file. Every section and key is optional,
//! so a missing file or a partial one falls back to the defaults below. The
//! `DATABASE_URL` environment variable always wins over the file.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::{net::SocketAddr, path::Path, time::Duration};

/// Default settings file, overridable through `CONFIG_PATH`
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Fallback database when neither the file nor the environment names one
pub const DEFAULT_DATABASE_URL: &str = "sqlite://field_reservation.sqlite?mode=rwc";

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Settings {
    /// Connection and pool settings
    pub database: DatabaseSettings,
    /// Listen addresses for the two services
    pub server: ServerSettings,
}

/// `[database]` section
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct DatabaseSettings {
    /// SeaORM connection URL (`sqlite://...` or `mysql://...`)
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    /// Maximum lifetime of a pooled connection, in seconds
    pub max_lifetime_secs: u64,
    /// How long an idle connection is kept, in seconds
    pub idle_timeout_secs: u64,
    /// Log every SQL statement through `tracing`
    pub sqlx_logging: bool,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            url: DEFAULT_DATABASE_URL.to_string(),
            max_connections: 20,
            min_connections: 5,
            max_lifetime_secs: 60 * 60,
            idle_timeout_secs: 60 * 60,
            sqlx_logging: true,
        }
    }
}

impl DatabaseSettings {
    #[must_use]
    pub const fn max_lifetime(&self) -> Duration {
        Duration::from_secs(self.max_lifetime_secs)
    }

    #[must_use]
    pub const fn idle_timeout(&self) -> Duration {
        Duration::from_secs(self.idle_timeout_secs)
    }
}

/// `[server]` section
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerSettings {
    /// Where the field service listens
    pub field_addr: SocketAddr,
    /// Where the user service listens
    pub user_addr: SocketAddr,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            field_addr: SocketAddr::from(([0, 0, 0, 0], 50051)),
            user_addr: SocketAddr::from(([0, 0, 0, 0], 50052)),
        }
    }
}

/// Loads settings from a TOML file
///
/// # Errors
/// Returns `Error::Config` if the file cannot be read or the TOML is invalid.
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<Settings> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read config file {:?}: {e}", path.as_ref()),
    })?;

    parse_settings(&contents)
}

/// Parses settings from TOML text
pub fn parse_settings(contents: &str) -> Result<Settings> {
    toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}

/// Loads settings the way the binaries do.
///
/// Reads the file named by `CONFIG_PATH` (or `./config.toml`). A missing file
/// is not an error; the defaults are used instead. `DATABASE_URL` is applied on top.
pub fn load_default_settings() -> Result<Settings> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

    let mut settings = if Path::new(&path).exists() {
        tracing::debug!("Loading settings from {path}");
        load_settings(&path)?
    } else {
        tracing::info!("No settings file at {path}, using defaults");
        Settings::default()
    };

    if let Ok(url) = std::env::var("DATABASE_URL") {
        settings.database.url = url;
    }

    Ok(settings)
}
