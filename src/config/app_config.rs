use serde::Deserialize;

use crate::domain::{DomainError, Language};
use crate::infrastructure::directory::DirectoryConfig;
use crate::infrastructure::observability::ObservabilityConfig;

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub directory: DirectoryConfig,
    #[serde(default)]
    pub i18n: I18nConfig,
    #[serde(default)]
    pub userlink: UserLinkConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Localization settings
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct I18nConfig {
    /// Language used when the request does not ask for a supported one
    pub default_language: Language,
}

/// Settings for the user link pages
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UserLinkConfig {
    /// Account page the redirect points at, relative to the userlink page
    pub account_url: String,
    /// Stylesheet linked from the error page
    pub stylesheet: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for UserLinkConfig {
    fn default() -> Self {
        Self {
            account_url: "../account.php".to_string(),
            stylesheet: "../../style/layout.css".to_string(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, ::config::ConfigError> {
        Self::load_from("config")
    }

    /// Load `<dir>/default` and `<dir>/local`, then `APP__*` overrides.
    ///
    /// Missing files are skipped; files that fail to parse or deserialize are errors.
    pub fn load_from(dir: &str) -> Result<Self, ::config::ConfigError> {
        let config = ::config::Config::builder()
            .add_source(::config::File::with_name(&format!("{}/default", dir)).required(false))
            .add_source(::config::File::with_name(&format!("{}/local", dir)).required(false))
            .add_source(
                ::config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Reject settings that would only fail at request time
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.userlink.account_url.trim().is_empty() {
            return Err(DomainError::configuration(
                "userlink.account_url must not be empty",
            ));
        }

        self.directory.validate()
    }
}
