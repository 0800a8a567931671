//! Directory backend configuration

use std::time::Duration;

use serde::Deserialize;

use crate::domain::DomainError;

/// Placeholder in the user filter replaced by the escaped username
pub const USERNAME_PLACEHOLDER: &str = "{username}";

/// Which directory implementation serves lookups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DirectoryBackend {
    #[default]
    Ldap,
    #[serde(alias = "in_memory")]
    Memory,
}

/// A user entry served by the in-memory backend
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DirectoryUserEntry {
    pub uid: String,
    pub dn: String,
}

/// Directory settings
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct DirectoryConfig {
    pub backend: DirectoryBackend,
    /// Server URL, `ldap://` or `ldaps://`
    pub url: String,
    pub starttls: bool,
    /// Anonymous bind when absent
    pub bind_dn: Option<String>,
    pub bind_password: Option<String>,
    /// Subtree searched for user entries
    pub user_suffix: String,
    /// Search filter; must contain `{username}`
    pub user_filter: String,
    pub connect_timeout_secs: u64,
    pub operation_timeout_secs: u64,
    /// Entries for the memory backend
    pub users: Vec<DirectoryUserEntry>,
    pub cache: DirectoryCacheConfig,
}

/// Lookup cache settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DirectoryCacheConfig {
    pub enabled: bool,
    pub ttl_secs: u64,
    pub max_capacity: u64,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            backend: DirectoryBackend::default(),
            url: "ldap://localhost:389".to_string(),
            starttls: false,
            bind_dn: None,
            bind_password: None,
            user_suffix: "ou=People,dc=example,dc=com".to_string(),
            user_filter: format!("(&(objectClass=posixAccount)(uid={}))", USERNAME_PLACEHOLDER),
            connect_timeout_secs: 5,
            operation_timeout_secs: 10,
            users: Vec::new(),
            cache: DirectoryCacheConfig::default(),
        }
    }
}

impl Default for DirectoryCacheConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            ttl_secs: 60,
            max_capacity: 10_000,
        }
    }
}

impl DirectoryConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn operation_timeout(&self) -> Duration {
        Duration::from_secs(self.operation_timeout_secs)
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.backend == DirectoryBackend::Ldap {
            if !(self.url.starts_with("ldap://") || self.url.starts_with("ldaps://")) {
                return Err(DomainError::configuration(format!(
                    "directory.url must start with ldap:// or ldaps://, got '{}'",
                    self.url
                )));
            }

            if self.user_suffix.trim().is_empty() {
                return Err(DomainError::configuration(
                    "directory.user_suffix must not be empty",
                ));
            }

            if !self.user_filter.contains(USERNAME_PLACEHOLDER) {
                return Err(DomainError::configuration(format!(
                    "directory.user_filter must contain {}",
                    USERNAME_PLACEHOLDER
                )));
            }

            if self.bind_password.is_some() && self.bind_dn.is_none() {
                return Err(DomainError::configuration(
                    "directory.bind_password is set without directory.bind_dn",
                ));
            }
        }

        if self.cache.enabled && self.cache.ttl_secs == 0 {
            return Err(DomainError::configuration(
                "directory.cache.ttl_secs must be greater than zero",
            ));
        }

        Ok(())
    }
}

impl std::fmt::Debug for DirectoryConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DirectoryConfig")
            .field("backend", &self.backend)
            .field("url", &self.url)
            .field("starttls", &self.starttls)
            .field("bind_dn", &self.bind_dn)
            .field(
                "bind_password",
                &self.bind_password.as_ref().map(|_| "[REDACTED]"),
            )
            .field("user_suffix", &self.user_suffix)
            .field("user_filter", &self.user_filter)
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .field("operation_timeout_secs", &self.operation_timeout_secs)
            .field("users", &self.users.len())
            .field("cache", &self.cache)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = DirectoryConfig::default();

        assert!(config.validate().is_ok());
        assert_eq!(
            config.user_filter,
            "(&(objectClass=posixAccount)(uid={username}))"
        );
        assert_eq!(config.connect_timeout(), Duration::from_secs(5));
        assert_eq!(config.operation_timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_rejects_bad_url() {
        let config = DirectoryConfig {
            url: "http://localhost".to_string(),
            ..Default::default()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_filter_without_placeholder() {
        let config = DirectoryConfig {
            user_filter: "(uid=*)".to_string(),
            ..Default::default()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_memory_backend_skips_ldap_checks() {
        let config = DirectoryConfig {
            backend: DirectoryBackend::Memory,
            url: String::new(),
            user_suffix: String::new(),
            ..Default::default()
        };

        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_password_without_dn() {
        let config = DirectoryConfig {
            bind_password: Some("secret".to_string()),
            ..Default::default()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_debug_redacts_password() {
        let config = DirectoryConfig {
            bind_dn: Some("cn=admin,dc=example,dc=com".to_string()),
            bind_password: Some("hunter2".to_string()),
            ..Default::default()
        };

        let debug = format!("{:?}", config);
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("hunter2"));
    }
}
