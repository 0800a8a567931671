//! Directory backends
//!
//! Provides the LDAP implementation of [`DirectorySearch`](crate::domain::DirectorySearch),
//! an in-memory one for development and tests, and a TTL cache that can wrap either.

mod cached;
mod config;
mod factory;
mod in_memory;
mod ldap;

pub use cached::CachedDirectory;
pub use config::{
    DirectoryBackend, DirectoryCacheConfig, DirectoryConfig, DirectoryUserEntry,
    USERNAME_PLACEHOLDER,
};
pub use factory::DirectoryFactory;
pub use in_memory::InMemoryDirectory;
pub use ldap::LdapDirectory;
