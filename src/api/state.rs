//! Application state for shared services

use std::sync::Arc;

use crate::domain::{DirectorySearch, Language, UserLinkResolver};

/// Application state shared by all handlers
#[derive(Clone, Debug)]
pub struct AppState {
    pub resolver: UserLinkResolver,
    pub default_language: Language,
    pub stylesheet: Arc<str>,
}

impl AppState {
    pub fn new(
        resolver: UserLinkResolver,
        default_language: Language,
        stylesheet: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            resolver,
            default_language,
            stylesheet: stylesheet.into(),
        }
    }

    pub fn directory(&self) -> &Arc<dyn DirectorySearch> {
        self.resolver.directory()
    }
}
