use std::env;

use auth::TokenCodec;
use chrono::Duration;
use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
}

/// Token signing configuration.
///
/// TTLs are seconds. Negative values are accepted and make every token of
/// that type expired at issuance, which is useful in tests.
#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    pub secret: String,

    #[serde(default = "default_access_token_ttl")]
    pub access_token_ttl_seconds: i64,

    #[serde(default = "default_refresh_token_ttl")]
    pub refresh_token_ttl_seconds: i64,
}

fn default_access_token_ttl() -> i64 {
    900 // 15 minutes
}

fn default_refresh_token_ttl() -> i64 {
    2_592_000 // 30 days
}

impl AuthConfig {
    /// Build the token codec this configuration describes.
    ///
    /// All values are read-only after startup; the codec captures them once.
    pub fn token_codec(&self) -> TokenCodec {
        TokenCodec::new(
            self.secret.as_bytes(),
            Duration::seconds(self.access_token_ttl_seconds),
            Duration::seconds(self.refresh_token_ttl_seconds),
        )
    }
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (DATABASE__URL, AUTH__SECRET, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on environment-specific configuration
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Layer on environment variables (with __ as separator)
            // Example: AUTH__SECRET=... overrides auth.secret
            .add_source(Environment::with_prefix("").separator("__"))
            .build()?;

        let config: Config = configuration.try_deserialize()?;

        Ok(config)
    }
}
