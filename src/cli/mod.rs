//! CLI module for the LDAP user link service
//!
//! Provides subcommands:
//! - `serve`: run the HTTP server
//! - `lookup`: resolve one username and print the account page target

pub mod lookup;
pub mod serve;

use anyhow::Context;
use clap::{Parser, Subcommand};

use crate::config::AppConfig;

/// LDAP User Link - resolves usernames to their directory entry
#[derive(Parser)]
#[command(name = "ldap-userlink")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP server
    Serve,

    /// Resolve a username once and print the redirect target
    Lookup(lookup::LookupArgs),
}

/// Load `.env` and layered configuration
///
/// Missing config files fall back to defaults; invalid ones abort startup.
pub(crate) fn load_config() -> anyhow::Result<AppConfig> {
    dotenvy::dotenv().ok();

    AppConfig::load().context("Failed to load configuration")
}
