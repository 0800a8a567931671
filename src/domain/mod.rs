//! Domain layer - Core business logic and entities

pub mod directory;
pub mod error;
pub mod i18n;
pub mod userlink;

pub use directory::{DirectorySearch, DistinguishedName, Username};
pub use error::DomainError;
pub use i18n::{negotiate_language, Language, MessageKey, Translator};
pub use userlink::{RedirectTarget, UserLinkOutcome, UserLinkResolver};
