//! Dashboard configuration

use infra_csv::{AmountPolicy, DatasetConfig};
use serde::Deserialize;
use thiserror::Error;
use validator::Validate;

/// Environment variable prefix, e.g. `DASHBOARD_PORT`
pub const ENV_PREFIX: &str = "DASHBOARD";

/// Dashboard configuration
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct DashboardConfig {
    /// Server host
    #[validate(length(min = 1))]
    pub host: String,
    /// Server port
    #[validate(range(min = 1))]
    pub port: u16,
    /// Path of the claims CSV
    #[validate(length(min = 1))]
    pub dataset_path: String,
    /// Handling of malformed claim amounts
    pub amount_policy: AmountPolicy,
    /// Log level
    pub log_level: String,
}

/// Errors raised while building the configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read configuration: {0}")]
    Load(#[from] ::config::ConfigError),

    #[error("Invalid configuration: {0}")]
    Invalid(#[from] validator::ValidationErrors),
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8050,
            dataset_path: "datasets/claims_dashboard_data.csv".to_string(),
            amount_policy: AmountPolicy::Reject,
            log_level: "info".to_string(),
        }
    }
}

impl DashboardConfig {
    /// Loads configuration from `DASHBOARD_*` environment variables,
    /// falling back to the defaults for anything unset
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let config: Self = ::config::Config::builder()
            .set_default("host", defaults.host)?
            .set_default("port", i64::from(defaults.port))?
            .set_default("dataset_path", defaults.dataset_path)?
            .set_default("amount_policy", "reject")?
            .set_default("log_level", defaults.log_level)?
            .add_source(::config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Returns the loader settings for the dataset
    pub fn dataset(&self) -> DatasetConfig {
        DatasetConfig::new(&self.dataset_path).amount_policy(self.amount_policy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = DashboardConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.server_addr(), "127.0.0.1:8050");
    }

    #[test]
    fn test_empty_dataset_path_is_invalid() {
        let config = DashboardConfig {
            dataset_path: String::new(),
            ..DashboardConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_port_is_invalid() {
        let config = DashboardConfig {
            port: 0,
            ..DashboardConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_env_reads_prefixed_variables() {
        std::env::remove_var("DASHBOARD_HOST");
        std::env::remove_var("DASHBOARD_LOG_LEVEL");
        std::env::set_var("DASHBOARD_PORT", "9100");
        std::env::set_var("DASHBOARD_DATASET_PATH", "data/q3_claims.csv");
        std::env::set_var("DASHBOARD_AMOUNT_POLICY", "skip");

        let loaded = DashboardConfig::from_env();

        std::env::set_var("DASHBOARD_PORT", "0");
        let zero_port = DashboardConfig::from_env();

        for key in ["DASHBOARD_PORT", "DASHBOARD_DATASET_PATH", "DASHBOARD_AMOUNT_POLICY"] {
            std::env::remove_var(key);
        }

        let config = loaded.expect("prefixed variables should load");
        assert_eq!(config.port, 9100);
        assert_eq!(config.dataset_path, "data/q3_claims.csv");
        assert_eq!(config.amount_policy, AmountPolicy::Skip);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.log_level, "info");

        assert!(matches!(zero_port, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_dataset_config_carries_policy() {
        let config = DashboardConfig {
            amount_policy: AmountPolicy::Skip,
            ..DashboardConfig::default()
        };
        let dataset = config.dataset();

        assert_eq!(dataset.amount_policy, AmountPolicy::Skip);
        assert_eq!(dataset.path.to_str(), Some("datasets/claims_dashboard_data.csv"));
    }
}
