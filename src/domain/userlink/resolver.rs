//! Username to account page resolution

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use super::target::RedirectTarget;
use crate::domain::directory::{DirectorySearch, Username};

/// Result of resolving a user link
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserLinkOutcome {
    /// The user exists; send the browser to its account page
    Redirect(RedirectTarget),
    /// No directory entry matches the sanitized username
    NotFound(Username),
    /// The directory could not answer
    DirectoryUnavailable(Username),
}

impl UserLinkOutcome {
    /// Short label for logs and metrics
    pub fn label(&self) -> &'static str {
        match self {
            Self::Redirect(_) => "redirect",
            Self::NotFound(_) => "not_found",
            Self::DirectoryUnavailable(_) => "unavailable",
        }
    }
}

/// Resolves usernames through an injected directory search
#[derive(Clone)]
pub struct UserLinkResolver {
    directory: Arc<dyn DirectorySearch>,
    account_url: String,
}

impl UserLinkResolver {
    pub fn new(directory: Arc<dyn DirectorySearch>, account_url: impl Into<String>) -> Self {
        Self {
            directory,
            account_url: account_url.into(),
        }
    }

    pub fn directory(&self) -> &Arc<dyn DirectorySearch> {
        &self.directory
    }

    pub fn account_url(&self) -> &str {
        &self.account_url
    }

    /// Sanitize the raw username and look it up
    pub async fn resolve(&self, raw_username: &str) -> UserLinkOutcome {
        let username = Username::sanitize(raw_username);

        if username.is_empty() {
            debug!("Empty username, skipping directory lookup");
            return UserLinkOutcome::NotFound(username);
        }

        match self.directory.search_username(&username).await {
            Ok(Some(dn)) => {
                info!(username = %username, dn = %dn, "User resolved");
                UserLinkOutcome::Redirect(RedirectTarget::for_user(&self.account_url, dn))
            }
            Ok(None) => {
                warn!(username = %username, "User not found in directory");
                UserLinkOutcome::NotFound(username)
            }
            Err(e) => {
                error!(
                    username = %username,
                    backend = self.directory.backend_name(),
                    error = %e,
                    "Directory lookup failed"
                );
                UserLinkOutcome::DirectoryUnavailable(username)
            }
        }
    }
}

impl std::fmt::Debug for UserLinkResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserLinkResolver")
            .field("backend", &self.directory.backend_name())
            .field("account_url", &self.account_url)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::directory::{DistinguishedName, MockDirectorySearch};
    use crate::domain::DomainError;
    use mockall::predicate::eq;

    fn resolver_with(mock: MockDirectorySearch) -> UserLinkResolver {
        UserLinkResolver::new(Arc::new(mock), "../account.php")
    }

    #[tokio::test]
    async fn test_resolved_user_redirects() {
        let mut mock = MockDirectorySearch::new();
        mock.expect_search_username()
            .with(eq(Username::sanitize("jdoe")))
            .times(1)
            .returning(|_| {
                Ok(Some(DistinguishedName::new(
                    "uid=jdoe,ou=People,dc=example,dc=com",
                )))
            });

        let outcome = resolver_with(mock).resolve("jdoe").await;

        match outcome {
            UserLinkOutcome::Redirect(target) => {
                assert_eq!(target.dn().as_str(), "uid=jdoe,ou=People,dc=example,dc=com");
                assert!(target.url().starts_with("../account.php?type=user&DN="));
            }
            other => panic!("expected redirect, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_apostrophes_stripped_before_lookup() {
        let mut mock = MockDirectorySearch::new();
        mock.expect_search_username()
            .with(eq(Username::sanitize("obrien")))
            .times(1)
            .returning(|_| Ok(None));

        let outcome = resolver_with(mock).resolve("o'brien").await;

        assert_eq!(outcome, UserLinkOutcome::NotFound(Username::sanitize("obrien")));
        assert_eq!(outcome.label(), "not_found");
    }

    #[tokio::test]
    async fn test_backend_error_is_unavailable() {
        let mut mock = MockDirectorySearch::new();
        mock.expect_search_username()
            .returning(|_| Err(DomainError::directory("connection refused")));
        mock.expect_backend_name().return_const("mock");

        let outcome = resolver_with(mock).resolve("jdoe").await;

        assert_eq!(
            outcome,
            UserLinkOutcome::DirectoryUnavailable(Username::sanitize("jdoe"))
        );
        assert_eq!(outcome.label(), "unavailable");
    }

    #[tokio::test]
    async fn test_empty_username_skips_lookup() {
        let mut mock = MockDirectorySearch::new();
        mock.expect_search_username().never();

        let outcome = resolver_with(mock).resolve("''").await;

        assert_eq!(outcome, UserLinkOutcome::NotFound(Username::sanitize("")));
    }
}
