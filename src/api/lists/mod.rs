//! Pages linked from the account list views

pub mod userlink;

use axum::{routing::get, Router};

use super::state::AppState;

/// Create the router for list pages
///
/// Serves both the legacy `.php` path, which existing list pages link to,
/// and a clean path.
pub fn create_lists_router() -> Router<AppState> {
    Router::new()
        .route("/userlink.php", get(userlink::user_link))
        .route("/userlink", get(userlink::user_link))
}
