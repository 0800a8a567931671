use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use moka::future::Cache;

use crate::domain::{DirectorySearch, DistinguishedName, DomainError, Username};

/// Directory wrapper that caches resolved usernames with a TTL
///
/// Only hits are cached, so newly created users become visible immediately.
/// Errors are never cached.
pub struct CachedDirectory {
    inner: Arc<dyn DirectorySearch>,
    cache: Cache<Username, DistinguishedName>,
}

impl CachedDirectory {
    pub fn new(inner: Arc<dyn DirectorySearch>, ttl: Duration) -> Self {
        Self::with_capacity(inner, ttl, 10_000)
    }

    pub fn with_capacity(inner: Arc<dyn DirectorySearch>, ttl: Duration, capacity: u64) -> Self {
        let cache = Cache::builder()
            .time_to_live(ttl)
            .max_capacity(capacity)
            .build();

        Self { inner, cache }
    }

    /// Invalidate a specific username
    pub async fn invalidate(&self, username: &Username) {
        self.cache.invalidate(username).await;
    }

    /// Invalidate all cached entries
    pub fn invalidate_all(&self) {
        self.cache.invalidate_all();
    }

    pub fn cache_size(&self) -> u64 {
        self.cache.entry_count()
    }
}

#[async_trait]
impl DirectorySearch for CachedDirectory {
    async fn search_username(
        &self,
        username: &Username,
    ) -> Result<Option<DistinguishedName>, DomainError> {
        if let Some(dn) = self.cache.get(username).await {
            tracing::debug!(
                backend = self.inner.backend_name(),
                username = %username,
                "Cache hit for username"
            );
            return Ok(Some(dn));
        }

        tracing::debug!(
            backend = self.inner.backend_name(),
            username = %username,
            "Cache miss, searching directory"
        );

        let dn = self.inner.search_username(username).await?;

        if let Some(dn) = &dn {
            self.cache.insert(username.clone(), dn.clone()).await;
        }

        Ok(dn)
    }

    async fn ping(&self) -> Result<(), DomainError> {
        self.inner.ping().await
    }

    fn backend_name(&self) -> &'static str {
        self.inner.backend_name()
    }
}

impl std::fmt::Debug for CachedDirectory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CachedDirectory")
            .field("backend", &self.inner.backend_name())
            .field("entries", &self.cache.entry_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::directory::MockDirectorySearch;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn jdoe_dn() -> DistinguishedName {
        DistinguishedName::new("uid=jdoe,ou=People,dc=example,dc=com")
    }

    /// Mock that resolves only `jdoe` and counts its calls
    fn counting_mock(calls: Arc<AtomicUsize>) -> MockDirectorySearch {
        let mut mock = MockDirectorySearch::new();
        mock.expect_search_username().returning(move |username| {
            calls.fetch_add(1, Ordering::SeqCst);
            if username.as_str() == "jdoe" {
                Ok(Some(jdoe_dn()))
            } else {
                Ok(None)
            }
        });
        mock.expect_backend_name().return_const("mock");
        mock
    }

    #[tokio::test]
    async fn test_hits_are_cached() {
        let calls = Arc::new(AtomicUsize::new(0));
        let cached = CachedDirectory::new(
            Arc::new(counting_mock(calls.clone())),
            Duration::from_secs(60),
        );
        let username = Username::sanitize("jdoe");

        let first = cached.search_username(&username).await.unwrap();
        let second = cached.search_username(&username).await.unwrap();

        assert_eq!(first, Some(jdoe_dn()));
        assert_eq!(second, Some(jdoe_dn()));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_misses_are_not_cached() {
        let calls = Arc::new(AtomicUsize::new(0));
        let cached = CachedDirectory::new(
            Arc::new(counting_mock(calls.clone())),
            Duration::from_secs(60),
        );
        let username = Username::sanitize("nobody");

        assert!(cached.search_username(&username).await.unwrap().is_none());
        assert!(cached.search_username(&username).await.unwrap().is_none());
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_errors_are_not_cached() {
        let mut mock = MockDirectorySearch::new();
        mock.expect_search_username()
            .times(2)
            .returning(|_| Err(DomainError::directory("timeout")));
        mock.expect_backend_name().return_const("mock");

        let cached = CachedDirectory::new(Arc::new(mock), Duration::from_secs(60));
        let username = Username::sanitize("jdoe");

        assert!(cached.search_username(&username).await.is_err());
        assert!(cached.search_username(&username).await.is_err());
    }

    #[tokio::test]
    async fn test_invalidate() {
        let calls = Arc::new(AtomicUsize::new(0));
        let cached = CachedDirectory::new(
            Arc::new(counting_mock(calls.clone())),
            Duration::from_secs(60),
        );
        let username = Username::sanitize("jdoe");

        cached.search_username(&username).await.unwrap();
        cached.invalidate(&username).await;
        cached.search_username(&username).await.unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_ping_and_name_delegate() {
        let mut mock = MockDirectorySearch::new();
        mock.expect_ping().times(1).returning(|| Ok(()));
        mock.expect_backend_name().return_const("ldap");

        let cached = CachedDirectory::new(Arc::new(mock), Duration::from_secs(60));

        assert!(cached.ping().await.is_ok());
        assert_eq!(cached.backend_name(), "ldap");
    }
}
