//! Application configuration

mod app_config;

pub use app_config::{
    AppConfig, I18nConfig, LogFormat, LoggingConfig, ServerConfig, UserLinkConfig,
};
