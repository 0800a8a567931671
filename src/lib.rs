//! LDAP User Link
//!
//! Resolves usernames linked from directory list pages to their LDAP entry
//! and forwards the browser to the account page of that entry:
//! - LDAP and in-memory directory backends with optional lookup caching
//! - Localized, HTML-escaped error pages
//! - Health probes and Prometheus metrics

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use crate::config::AppConfig;

use api::state::AppState;
use domain::UserLinkResolver;
use infrastructure::directory::DirectoryFactory;
use tracing::info;

/// Create the application state from configuration
pub fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    config.validate()?;

    let directory = DirectoryFactory::create(&config.directory)?;
    let resolver = UserLinkResolver::new(directory, config.userlink.account_url.clone());

    info!(
        backend = resolver.directory().backend_name(),
        account_url = %config.userlink.account_url,
        default_language = %config.i18n.default_language,
        "Application state created"
    );

    Ok(AppState::new(
        resolver,
        config.i18n.default_language,
        config.userlink.stylesheet.as_str(),
    ))
}
