//! Directory search trait

use async_trait::async_trait;

use super::entity::{DistinguishedName, Username};
use crate::domain::DomainError;

#[cfg(test)]
use mockall::automock;

/// Capability to resolve usernames against a directory
#[cfg_attr(test, automock)]
#[async_trait]
pub trait DirectorySearch: Send + Sync {
    /// Find the DN of the user entry with the given username.
    ///
    /// Returns `Ok(None)` when no entry matches. Backend failures (unreachable
    /// server, rejected bind, timeouts) are reported as `DomainError::Directory`.
    async fn search_username(
        &self,
        username: &Username,
    ) -> Result<Option<DistinguishedName>, DomainError>;

    /// Check that the backend is reachable
    async fn ping(&self) -> Result<(), DomainError>;

    /// Backend name used in logs and metric labels
    fn backend_name(&self) -> &'static str;
}
