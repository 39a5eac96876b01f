/// Database connection, pool options and table creation
pub mod database;

/// Service settings loaded from config.toml and the environment
pub mod settings;

pub use settings::{DatabaseSettings, ServerSettings, Settings};
