//! Account page redirect target

use crate::domain::directory::DistinguishedName;

/// URL of the account page for one user entry
///
/// The DN is percent-encoded as the `DN` query parameter. The URL is not
/// HTML-escaped here; that happens when it is placed in markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectTarget {
    url: String,
    dn: DistinguishedName,
}

impl RedirectTarget {
    pub fn for_user(account_url: &str, dn: DistinguishedName) -> Self {
        let separator = if account_url.contains('?') { '&' } else { '?' };
        let url = format!(
            "{}{}type=user&DN={}",
            account_url,
            separator,
            urlencoding::encode(dn.as_str())
        );

        Self { url, dn }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn dn(&self) -> &DistinguishedName {
        &self.dn
    }
}

impl std::fmt::Display for RedirectTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.url)
    }
}
