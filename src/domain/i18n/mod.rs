//! Localization of user-facing messages
//!
//! The language of a response comes from the request's `Accept-Language`
//! header when it names a supported language, and from configuration otherwise.

mod catalog;
mod language;

pub use catalog::{MessageKey, Translator};
pub use language::{negotiate_language, Language, LanguageParseError};
