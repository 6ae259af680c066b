//! Configuration model loaded from external sources.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared by the server and the seeding binary.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub database_url: String,
    #[serde(default)]
    pub seed: SeedConfig,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
/// Controls generation of synthetic clients at startup.
pub struct SeedConfig {
    #[serde(default)]
    pub enabled: bool,
    /// Number of clients to generate; zero or negative generates none.
    #[serde(default = "default_seed_count")]
    pub count: i64,
}

fn default_seed_count() -> i64 {
    1000
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            count: default_seed_count(),
        }
    }
}

/// Loads [`ServerConfig`] from `config/default.yaml`, the optional
/// `config/{APP_ENV}.yaml` profile and `APP_*` environment variables.
///
/// Nested keys use `__` in the environment, e.g. `APP_SEED__ENABLED=true`.
#[cfg(feature = "server")]
pub fn load_server_config() -> Result<ServerConfig, config::ConfigError> {
    use config::{Config, Environment, File};

    // Select config profile (defaults to `local`).
    let app_env = std::env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    Config::builder()
        // Add `./config/default.yaml`
        .add_source(File::with_name("config/default"))
        // Add environment-specific overrides
        .add_source(File::with_name(&format!("config/{app_env}")).required(false))
        // Add settings from the environment (with a prefix of APP)
        .add_source(
            Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?
        .try_deserialize::<ServerConfig>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_defaults_to_disabled_thousand() {
        let seed = SeedConfig::default();
        assert!(!seed.enabled);
        assert_eq!(seed.count, 1000);
    }

    #[test]
    fn missing_seed_section_uses_defaults() {
        let config: ServerConfig = serde_json::from_str(
            r#"{"address": "0.0.0.0", "port": 8080, "database_url": "app.db"}"#,
        )
        .unwrap();
        assert_eq!(config.seed, SeedConfig::default());
    }

    #[test]
    fn partial_seed_section_keeps_default_count() {
        let config: ServerConfig = serde_json::from_str(
            r#"{"address": "0.0.0.0", "port": 8080, "database_url": "app.db",
                "seed": {"enabled": true}}"#,
        )
        .unwrap();
        assert!(config.seed.enabled);
        assert_eq!(config.seed.count, 1000);
    }
}
