use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub relay: RelayConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Settings for the outbound email relay. The three credentials are opaque
/// secrets; they are passed through to the relay client and never logged.
#[derive(Debug, Deserialize, Clone)]
pub struct RelayConfig {
    #[serde(default = "default_relay_endpoint")]
    pub endpoint: String,
    #[serde(default)]
    pub service_id: String,
    #[serde(default)]
    pub template_id: String,
    #[serde(default)]
    pub public_key: String,
    #[serde(default = "default_relay_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_recipient_name")]
    pub to_name: String,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            endpoint: default_relay_endpoint(),
            service_id: String::new(),
            template_id: String::new(),
            public_key: String::new(),
            timeout_secs: default_relay_timeout_secs(),
            to_name: default_recipient_name(),
        }
    }
}

fn default_relay_endpoint() -> String {
    "https://api.emailjs.com".to_string()
}

fn default_relay_timeout_secs() -> u64 {
    10
}

fn default_recipient_name() -> String {
    "The GOAT".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (NEONFOLIO__SERVER__PORT, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Config file is optional - ignore if not found
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("NEONFOLIO")
                .separator("__")
                .try_parsing(true),
        );

        // Also support the relay service's own variable names without prefix
        if let Ok(service_id) = env::var("EMAILJS_SERVICE_ID") {
            builder = builder.set_override("relay.service_id", service_id)?;
        }
        if let Ok(template_id) = env::var("EMAILJS_TEMPLATE_ID") {
            builder = builder.set_override("relay.template_id", template_id)?;
        }
        if let Ok(public_key) = env::var("EMAILJS_PUBLIC_KEY") {
            builder = builder.set_override("relay.public_key", public_key)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if self.relay.timeout_secs == 0 {
            return Err("Relay timeout must be at least 1 second".to_string());
        }
        if self.relay.endpoint.is_empty() {
            return Err("Relay endpoint must not be empty".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> Config {
        Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
            },
            relay: RelayConfig::default(),
            observability: ObservabilityConfig::default(),
        }
    }

    #[test]
    fn test_validation_valid_config() {
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn test_validation_zero_port() {
        let mut config = base_config();
        config.server.port = 0;

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_zero_timeout() {
        let mut config = base_config();
        config.relay.timeout_secs = 0;

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_empty_endpoint() {
        let mut config = base_config();
        config.relay.endpoint = String::new();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_relay_defaults() {
        let relay = RelayConfig::default();

        assert_eq!(relay.endpoint, "https://api.emailjs.com");
        assert_eq!(relay.timeout_secs, 10);
        assert_eq!(relay.to_name, "The GOAT");
        assert!(relay.service_id.is_empty());
    }
}
