//! Directory domain
//!
//! Types for looking up user entries in an LDAP-style directory: the
//! sanitized username, the distinguished name returned by a lookup, and the
//! search capability implemented by the directory backends.

mod entity;
mod search;

pub use entity::{DistinguishedName, Username};
pub use search::DirectorySearch;

#[cfg(test)]
pub use search::MockDirectorySearch;
