use std::path::Path;

use figment::providers::{Format, Yaml};
use figment::Figment;
use schemars::{schema_for, JsonSchema};
use serde::{Deserialize, Serialize};

use super::logging::LoggingConfig;
use super::store::StoreConfig;

/// Path of the optional YAML configuration file.
const CONFIG_FILE: &str = "./config.yaml";

/// A top-level enum for versioned configurations.
#[derive(Deserialize, Serialize, JsonSchema)]
#[serde(tag = "version")]
pub enum Config {
    #[serde(rename = "1.0.0")]
    ConfigV1(ConfigV1),
}

/// Main config for v1.0.0: store backend, auth secrets, bind address,
/// optional deployment prefix, and logging. Every field has a default,
/// so the service also runs with no config file at all.
#[derive(Deserialize, Serialize, Debug, JsonSchema)]
pub struct ConfigV1 {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    /// Deployment prefix the API is additionally served under, e.g. when
    /// sitting behind a path-rewriting front end.
    #[serde(default = "default_route_prefix")]
    pub route_prefix: Option<String>,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for ConfigV1 {
    fn default() -> Self {
        ConfigV1 {
            store: StoreConfig::default(),
            auth: AuthConfig::default(),
            bind_address: default_bind_address(),
            route_prefix: default_route_prefix(),
            logging: LoggingConfig::default(),
        }
    }
}

/// The two static secrets requests are authenticated against.
#[derive(Deserialize, Serialize, Debug, Clone, JsonSchema)]
pub struct AuthConfig {
    /// Shared secret accepted in the `x-api-key` request header.
    #[serde(default = "default_api_key")]
    pub api_key: String,
    /// Signing secret for issued bearer tokens.
    #[serde(default = "default_token_secret")]
    pub token_secret: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        AuthConfig {
            api_key: default_api_key(),
            token_secret: default_token_secret(),
        }
    }
}

fn default_bind_address() -> String {
    "0.0.0.0:3000".to_string()
}

fn default_route_prefix() -> Option<String> {
    Some("/midterm/api".to_string())
}

fn default_api_key() -> String {
    "bytebride-secret-key-2024".to_string()
}

fn default_token_secret() -> String {
    "bytebride-jwt-secret-2024".to_string()
}

/// Load config from "config.yaml" in the current directory, falling back
/// to the compiled-in defaults when the file does not exist.
pub fn load_config() -> ConfigV1 {
    if !Path::new(CONFIG_FILE).exists() {
        return ConfigV1::default();
    }

    let figment = Figment::new().merge(Yaml::file(CONFIG_FILE));
    let config = match figment.extract::<Config>() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            std::process::exit(1);
        }
    };
    match config {
        Config::ConfigV1(c) => c,
    }
}

/// Print the JSON schema for the configuration to stdout.
pub fn print_schema() {
    let schema = schema_for!(Config);
    println!("{}", serde_json::to_string_pretty(&schema).unwrap());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StoreBackend;
    use figment::providers::{Format, Yaml};

    /// Test that a minimal versioned YAML fills everything from defaults.
    #[test]
    fn test_minimal_config_uses_defaults() {
        let yaml = r#"
version: "1.0.0"
"#;
        let config: Config = Figment::new()
            .merge(Yaml::string(yaml))
            .extract()
            .expect("config should parse");
        let Config::ConfigV1(config) = config;

        assert_eq!(config.bind_address, "0.0.0.0:3000");
        assert_eq!(config.route_prefix.as_deref(), Some("/midterm/api"));
        assert_eq!(config.auth.api_key, "bytebride-secret-key-2024");
        assert_eq!(config.logging.level, "info");
        assert!(matches!(config.store.backend, StoreBackend::File(_)));
    }

    /// Test that explicit fields override the defaults.
    #[test]
    fn test_explicit_fields_override_defaults() {
        let yaml = r#"
version: "1.0.0"
bind_address: "127.0.0.1:8081"
route_prefix: null
auth:
  api_key: "other-key"
store:
  type: memory
logging:
  level: "debug"
  format: "json"
"#;
        let config: Config = Figment::new()
            .merge(Yaml::string(yaml))
            .extract()
            .expect("config should parse");
        let Config::ConfigV1(config) = config;

        assert_eq!(config.bind_address, "127.0.0.1:8081");
        assert_eq!(config.route_prefix, None);
        assert_eq!(config.auth.api_key, "other-key");
        // Partial auth config keeps the default for the other secret.
        assert_eq!(config.auth.token_secret, "bytebride-jwt-secret-2024");
        assert!(matches!(config.store.backend, StoreBackend::Memory));
        assert_eq!(config.logging.format, "json");
    }
}
