//! Application configuration.
//!
//! The database URL is the only knob this crate needs; everything else
//! (transport, auth) is configured by the embedding application.

use crate::error::{AppError, AppResult};
use log::info;
use std::env;

pub const DEFAULT_DATABASE_URL: &str = "sqlite:calendar.db?mode=rwc";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
}

impl AppConfig {
    /// Reads `DATABASE_URL` from the environment, falling back to a local
    /// SQLite file next to the process.
    pub fn from_env() -> Self {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());
        Self { database_url }
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.database_url.trim().is_empty() {
            return Err(AppError::validation("database URL must not be empty"));
        }
        if !self.database_url.starts_with("sqlite:") {
            return Err(AppError::validation(
                "database URL must use the sqlite: scheme",
            ));
        }
        info!("Configuration validated (database: {})", self.database_url);
        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_validates() {
        assert!(AppConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_non_sqlite_url() {
        let config = AppConfig {
            database_url: "postgres://localhost/calendar".to_string(),
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_empty_url() {
        let config = AppConfig {
            database_url: "  ".to_string(),
        };
        assert!(config.validate().is_err());
    }
}
