//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Database configuration.
    pub database: DatabaseConfig,
    /// Accounting feature configuration.
    #[serde(default)]
    pub accounting: AccountingConfig,
}

/// Database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Database connection URL.
    pub url: String,
    /// Maximum number of connections in the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Minimum number of connections in the pool.
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

/// Accounting feature configuration.
///
/// When `enabled` is false, payment events are captured but no journal
/// entries are produced. The flag is an explicit value injected into the
/// entry builder, never read from ambient process state.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct AccountingConfig {
    /// Whether journal entries are produced from payment events.
    #[serde(default)]
    pub enabled: bool,
}

impl AccountingConfig {
    /// Configuration with accounting enabled.
    #[must_use]
    pub const fn on() -> Self {
        Self { enabled: true }
    }

    /// Configuration with accounting disabled.
    #[must_use]
    pub const fn off() -> Self {
        Self { enabled: false }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("STRATA").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accounting_defaults_to_disabled() {
        assert!(!AccountingConfig::default().enabled);
    }

    #[test]
    fn test_accounting_constructors() {
        assert!(AccountingConfig::on().enabled);
        assert!(!AccountingConfig::off().enabled);
    }
}
