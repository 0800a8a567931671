//! In-memory directory implementation

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use super::config::DirectoryUserEntry;
use crate::domain::{DirectorySearch, DistinguishedName, DomainError, Username};

/// Thread-safe in-memory directory
///
/// Useful for testing and development. Usernames match exactly.
#[derive(Debug, Default)]
pub struct InMemoryDirectory {
    users: RwLock<HashMap<String, DistinguishedName>>,
}

impl InMemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a directory pre-populated with entries
    pub fn with_entries(entries: &[DirectoryUserEntry]) -> Self {
        let users = entries
            .iter()
            .map(|entry| (entry.uid.clone(), DistinguishedName::new(entry.dn.clone())))
            .collect();

        Self {
            users: RwLock::new(users),
        }
    }

    /// Add or replace a user entry
    pub fn insert(&self, uid: impl Into<String>, dn: impl Into<String>) -> Result<(), DomainError> {
        let mut users = self
            .users
            .write()
            .map_err(|e| DomainError::internal(format!("Lock poisoned: {}", e)))?;

        users.insert(uid.into(), DistinguishedName::new(dn));
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.users.read().map(|users| users.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl DirectorySearch for InMemoryDirectory {
    async fn search_username(
        &self,
        username: &Username,
    ) -> Result<Option<DistinguishedName>, DomainError> {
        let users = self
            .users
            .read()
            .map_err(|e| DomainError::internal(format!("Lock poisoned: {}", e)))?;

        Ok(users.get(username.as_str()).cloned())
    }

    async fn ping(&self) -> Result<(), DomainError> {
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
