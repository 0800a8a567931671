//! Supported languages and Accept-Language negotiation

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Languages with a built-in message catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(try_from = "String", into = "String")]
pub enum Language {
    #[default]
    En,
    De,
    Fr,
    Es,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unsupported language tag: '{0}'")]
pub struct LanguageParseError(pub String);

impl Language {
    /// BCP 47 primary subtag, used for the `lang` attribute
    pub fn code(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::De => "de",
            Self::Fr => "fr",
            Self::Es => "es",
        }
    }
}

impl FromStr for Language {
    type Err = LanguageParseError;

    /// Accepts `de`, `de-DE`, `de_DE` and locale forms like `de_DE.UTF-8`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let primary = s
            .trim()
            .split(['-', '_', '.', '@'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        match primary.as_str() {
            "en" => Ok(Self::En),
            "de" => Ok(Self::De),
            "fr" => Ok(Self::Fr),
            "es" => Ok(Self::Es),
            _ => Err(LanguageParseError(s.to_string())),
        }
    }
}

impl TryFrom<String> for Language {
    type Error = LanguageParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Language> for String {
    fn from(language: Language) -> Self {
        language.code().to_string()
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Pick the first supported language from an `Accept-Language` header value.
///
/// Entries are ordered by q-value, highest first; equal weights keep header
/// order. Entries with `q=0`, wildcards and unsupported tags are skipped.
pub fn negotiate_language(accept_language: Option<&str>, fallback: Language) -> Language {
    let Some(header) = accept_language else {
        return fallback;
    };

    let mut candidates: Vec<(f32, usize, Language)> = header
        .split(',')
        .enumerate()
        .filter_map(|(position, entry)| {
            let mut parts = entry.split(';');
            let tag = parts.next()?.trim();

            let quality = parts
                .filter_map(|param| param.trim().strip_prefix("q="))
                .find_map(|q| q.trim().parse::<f32>().ok())
                .unwrap_or(1.0);

            if quality <= 0.0 || tag == "*" {
                return None;
            }

            let language = tag.parse::<Language>().ok()?;
            Some((quality, position, language))
        })
        .collect();

    candidates.sort_by(|a, b| b.0.total_cmp(&a.0).then(a.1.cmp(&b.1)));

    candidates
        .first()
        .map(|(_, _, language)| *language)
        .unwrap_or(fallback)
}
