//! Username and distinguished name value types

use serde::{Deserialize, Serialize};

/// Username taken from a request, with apostrophes stripped
///
/// Legacy clients submit apostrophes escaped as `\'`; the escaped sequence is
/// removed as a whole before any remaining bare `'` characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Username(String);

impl Username {
    /// Sanitize a raw username from the query string
    pub fn sanitize(raw: &str) -> Self {
        Self(raw.replace("\\'", "").replace('\'', ""))
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for Username {
    fn from(value: String) -> Self {
        Self::sanitize(&value)
    }
}

impl From<Username> for String {
    fn from(username: Username) -> Self {
        username.0
    }
}

impl std::fmt::Display for Username {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Distinguished name of a directory entry, kept opaque
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DistinguishedName(String);

impl DistinguishedName {
    pub fn new(dn: impl Into<String>) -> Self {
        Self(dn.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DistinguishedName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_strips_apostrophes() {
        assert_eq!(Username::sanitize("o'brien").as_str(), "obrien");
        assert_eq!(Username::sanitize("'''").as_str(), "");
    }

    #[test]
    fn test_sanitize_strips_escaped_apostrophes() {
        assert_eq!(Username::sanitize("o\\'brien").as_str(), "obrien");
    }

    #[test]
    fn test_sanitize_keeps_other_characters() {
        let username = Username::sanitize("j.doe-<admin>\\x");
        assert_eq!(username.as_str(), "j.doe-<admin>\\x");
    }

    #[test]
    fn test_deserialize_sanitizes() {
        let username: Username = serde_json::from_str("\"d'arcy\"").unwrap();
        assert_eq!(username.as_str(), "darcy");
    }

    #[test]
    fn test_distinguished_name_is_opaque() {
        let dn = DistinguishedName::new("uid=jdoe,ou=People,dc=example,dc=com");
        assert_eq!(dn.to_string(), "uid=jdoe,ou=People,dc=example,dc=com");
        assert_eq!(
            serde_json::to_string(&dn).unwrap(),
            "\"uid=jdoe,ou=People,dc=example,dc=com\""
        );
    }
}
