//! LDAP directory implementation
//!
//! Each lookup opens its own connection, binds with the configured
//! credentials (or anonymously), runs a subtree search under the user suffix
//! and unbinds again.

use std::time::Instant;

use async_trait::async_trait;
use ldap3::{
    Ldap, LdapConnAsync, LdapConnSettings, LdapResult, Scope, SearchEntry, SearchResult,
};
use tracing::{debug, instrument, warn};

use super::config::{DirectoryConfig, USERNAME_PLACEHOLDER};
use crate::domain::{DirectorySearch, DistinguishedName, DomainError, Username};
use crate::infrastructure::observability::record_directory_search;

/// Result code for a search base that does not exist
const RC_NO_SUCH_OBJECT: u32 = 32;

/// Result code for rejected credentials
const RC_INVALID_CREDENTIALS: u32 = 49;

/// Directory backed by an LDAP server
pub struct LdapDirectory {
    config: DirectoryConfig,
}

impl LdapDirectory {
    pub fn new(config: DirectoryConfig) -> Result<Self, DomainError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Search filter for a username, with LDAP filter metacharacters escaped
    pub fn build_filter(template: &str, username: &Username) -> String {
        template.replace(USERNAME_PLACEHOLDER, &ldap3::ldap_escape(username.as_str()))
    }

    async fn connect(&self) -> Result<Ldap, DomainError> {
        let settings = LdapConnSettings::new()
            .set_conn_timeout(self.config.connect_timeout())
            .set_starttls(self.config.starttls);

        debug!(url = %self.config.url, "Connecting to LDAP server");

        let (conn, mut ldap) = LdapConnAsync::with_settings(settings, &self.config.url)
            .await
            .map_err(|e| {
                DomainError::directory(format!(
                    "Failed to connect to LDAP server at {}: {}",
                    self.config.url, e
                ))
            })?;

        tokio::spawn(async move {
            if let Err(e) = conn.drive().await {
                warn!(error = %e, "LDAP connection driver error");
            }
        });

        if let Some(bind_dn) = &self.config.bind_dn {
            let password = self.config.bind_password.as_deref().unwrap_or("");

            debug!(bind_dn = %bind_dn, "Performing LDAP bind");

            let result = ldap
                .with_timeout(self.config.operation_timeout())
                .simple_bind(bind_dn, password)
                .await
                .map_err(|e| DomainError::directory(format!("LDAP bind failed: {}", e)))?;

            check_bind(&result, bind_dn)?;
        }

        Ok(ldap)
    }

    async fn disconnect(mut ldap: Ldap) {
        if let Err(e) = ldap.unbind().await {
            warn!(error = %e, "Error during LDAP unbind");
        }
    }

    async fn search(
        &self,
        ldap: &mut Ldap,
        username: &Username,
    ) -> Result<Option<DistinguishedName>, DomainError> {
        let filter = Self::build_filter(&self.config.user_filter, username);

        debug!(
            filter = %filter,
            base_dn = %self.config.user_suffix,
            "Searching LDAP"
        );

        let SearchResult(entries, result) = ldap
            .with_timeout(self.config.operation_timeout())
            .search(&self.config.user_suffix, Scope::Subtree, &filter, vec!["1.1"])
            .await
            .map_err(|e| DomainError::directory(format!("LDAP search failed: {}", e)))?;

        let dns = entries
            .into_iter()
            .map(|entry| SearchEntry::construct(entry).dn)
            .collect();

        interpret_search(&result, dns, &self.config.user_suffix)
    }
}

/// Map a bind result to success or a directory error
fn check_bind(result: &LdapResult, bind_dn: &str) -> Result<(), DomainError> {
    match result.rc {
        0 => Ok(()),
        RC_INVALID_CREDENTIALS => Err(DomainError::directory(format!(
            "LDAP bind rejected for {}: invalid credentials",
            bind_dn
        ))),
        rc => Err(DomainError::directory(format!(
            "LDAP bind failed with code {}: {}",
            rc, result.text
        ))),
    }
}

/// Map a search result and the DNs of its entries to the lookup outcome.
///
/// A missing suffix counts as no match. With several matches the first DN wins.
fn interpret_search(
    result: &LdapResult,
    dns: Vec<String>,
    base_dn: &str,
) -> Result<Option<DistinguishedName>, DomainError> {
    match result.rc {
        0 => {}
        RC_NO_SUCH_OBJECT => {
            warn!(base_dn = %base_dn, "User suffix does not exist");
            return Ok(None);
        }
        rc => {
            return Err(DomainError::directory(format!(
                "LDAP search failed with code {}: {}",
                rc, result.text
            )));
        }
    }

    if dns.len() > 1 {
        warn!(matches = dns.len(), "Multiple entries match username, using the first");
    }

    Ok(dns.into_iter().next().map(DistinguishedName::new))
}

#[async_trait]
impl DirectorySearch for LdapDirectory {
    #[instrument(skip_all, fields(username = %username))]
    async fn search_username(
        &self,
        username: &Username,
    ) -> Result<Option<DistinguishedName>, DomainError> {
        let start = Instant::now();

        let result = match self.connect().await {
            Ok(mut ldap) => {
                let found = self.search(&mut ldap, username).await;
                Self::disconnect(ldap).await;
                found
            }
            Err(e) => Err(e),
        };

        record_directory_search(self.backend_name(), result.is_ok(), start.elapsed());
        result
    }

    async fn ping(&self) -> Result<(), DomainError> {
        let ldap = self.connect().await?;
        Self::disconnect(ldap).await;
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "ldap"
    }
}

impl std::fmt::Debug for LdapDirectory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LdapDirectory")
            .field("config", &self.config)
            .finish()
    }
}
