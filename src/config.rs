use config::{Config, ConfigError, File};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/// Application configuration loaded from config.toml or environment variables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub paths: PathsConfig,
    pub http: HttpConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// JSON file mapping service names to API keys
    pub apikeys: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            apikeys: PathBuf::from("../etc/apikeys.json"),
        }
    }
}

/// Settings for the outbound HTTP helpers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    pub timeout_seconds: u64,
    pub user_agent: String,
    /// Certificate verification is off unless explicitly enabled; lookups
    /// routinely hit self-signed and misconfigured hosts
    pub verify_tls: bool,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: 30,
            user_agent: format!("osint-utils/{}", env!("CARGO_PKG_VERSION")),
            verify_tls: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from config.toml file and environment variables
    /// Environment variables take precedence over file configuration
    pub fn load() -> Result<Self, ConfigError> {
        let paths = PathsConfig::default();
        let http = HttpConfig::default();
        let config = Config::builder()
            .set_default("paths.apikeys", paths.apikeys.to_string_lossy().to_string())?
            .set_default("http.timeout_seconds", http.timeout_seconds)?
            .set_default("http.user_agent", http.user_agent)?
            .set_default("http.verify_tls", http.verify_tls)?
            // Load from config.toml if it exists
            .add_source(File::with_name("config").required(false))
            // OSINT_HTTP__TIMEOUT_SECONDS=10 overrides http.timeout_seconds
            .add_source(
                config::Environment::with_prefix("OSINT")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        let mut app_config: AppConfig = config.try_deserialize()?;

        if let Ok(path) = env::var("OSINT_APIKEYS_PATH") {
            app_config.paths.apikeys = PathBuf::from(path);
        }

        if app_config.http.timeout_seconds == 0 {
            return Err(ConfigError::Message(
                "http.timeout_seconds must be greater than zero".to_string(),
            ));
        }

        Ok(app_config)
    }

    /// Get default config values for CLI argument defaults
    pub fn get_defaults() -> Self {
        Self::load().unwrap_or_else(|_| Self {
            paths: PathsConfig::default(),
            http: HttpConfig::default(),
        })
    }
}
