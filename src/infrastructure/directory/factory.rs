//! Directory factory for creating the configured backend

use std::sync::Arc;

use tracing::info;

use super::cached::CachedDirectory;
use super::config::{DirectoryBackend, DirectoryConfig};
use super::in_memory::InMemoryDirectory;
use super::ldap::LdapDirectory;
use crate::domain::{DirectorySearch, DomainError};

/// Factory for creating directory backends
#[derive(Debug)]
pub struct DirectoryFactory;

impl DirectoryFactory {
    /// Create the backend selected in configuration, wrapped in a cache if enabled
    pub fn create(config: &DirectoryConfig) -> Result<Arc<dyn DirectorySearch>, DomainError> {
        config.validate()?;

        let backend: Arc<dyn DirectorySearch> = match config.backend {
            DirectoryBackend::Ldap => {
                info!(
                    url = %config.url,
                    user_suffix = %config.user_suffix,
                    "Using LDAP directory"
                );
                Arc::new(LdapDirectory::new(config.clone())?)
            }
            DirectoryBackend::Memory => {
                info!(users = config.users.len(), "Using in-memory directory");
                Arc::new(InMemoryDirectory::with_entries(&config.users))
            }
        };

        if !config.cache.enabled {
            return Ok(backend);
        }

        info!(
            ttl_secs = config.cache.ttl_secs,
            max_capacity = config.cache.max_capacity,
            "Directory lookup cache enabled"
        );

        Ok(Arc::new(CachedDirectory::with_capacity(
            backend,
            std::time::Duration::from_secs(config.cache.ttl_secs),
            config.cache.max_capacity,
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Username;
    use crate::infrastructure::directory::DirectoryUserEntry;

    fn memory_config() -> DirectoryConfig {
        DirectoryConfig {
            backend: DirectoryBackend::Memory,
            users: vec![DirectoryUserEntry {
                uid: "jdoe".to_string(),
                dn: "uid=jdoe,ou=People,dc=example,dc=com".to_string(),
            }],
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_create_memory_backend() {
        let directory = DirectoryFactory::create(&memory_config()).unwrap();

        assert_eq!(directory.backend_name(), "memory");
        let dn = directory
            .search_username(&Username::sanitize("jdoe"))
            .await
            .unwrap();
        assert!(dn.is_some());
    }

    #[tokio::test]
    async fn test_create_cached_backend() {
        let mut config = memory_config();
        config.cache.enabled = true;

        let directory = DirectoryFactory::create(&config).unwrap();

        assert_eq!(directory.backend_name(), "memory");
        assert!(directory.ping().await.is_ok());
    }

    #[test]
    fn test_create_ldap_backend() {
        let directory = DirectoryFactory::create(&DirectoryConfig::default()).unwrap();
        assert_eq!(directory.backend_name(), "ldap");
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = DirectoryConfig {
            user_suffix: String::new(),
            ..Default::default()
        };

        assert!(matches!(
            DirectoryFactory::create(&config),
            Err(DomainError::Configuration { .. })
        ));
    }
}
