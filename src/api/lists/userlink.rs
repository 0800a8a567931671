//! User link endpoint
//!
//! Group lists link member uids to this page. It looks the uid up in the
//! directory and forwards the browser to the account page of the entry.

use axum::{
    extract::{Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;

use crate::api::state::AppState;
use crate::api::views::{render_error_page, render_redirect_page, StatusMessage};
use crate::domain::{negotiate_language, MessageKey, Translator, UserLinkOutcome};
use crate::infrastructure::observability::record_userlink_lookup;

/// Query parameters of the user link page
#[derive(Debug, Default, Deserialize)]
pub struct UserLinkQuery {
    /// Missing parameter behaves like an empty username
    #[serde(default)]
    pub user: String,
}

/// Resolve a user link
///
/// GET /templates/lists/userlink.php?user=<uid>
///
/// Responds with a meta-refresh page to the account page when the user
/// exists, a 404 error page when it does not and a 503 error page when the
/// directory cannot be queried.
pub async fn user_link(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<UserLinkQuery>,
) -> Response {
    let language = negotiate_language(
        headers
            .get(header::ACCEPT_LANGUAGE)
            .and_then(|v| v.to_str().ok()),
        state.default_language,
    );
    let translator = Translator::new(language);

    let outcome = state.resolver.resolve(&query.user).await;
    record_userlink_lookup(outcome.label());

    match outcome {
        UserLinkOutcome::Redirect(target) => {
            (StatusCode::OK, Html(render_redirect_page(&target))).into_response()
        }
        UserLinkOutcome::NotFound(username) => {
            let status = StatusMessage::error(translator.user_not_found(username.as_str()));
            let page = render_error_page(language, &state.stylesheet, &status);

            (StatusCode::NOT_FOUND, Html(page)).into_response()
        }
        UserLinkOutcome::DirectoryUnavailable(_) => {
            let status =
                StatusMessage::error(translator.translate(MessageKey::DirectoryUnavailable));
            let page = render_error_page(language, &state.stylesheet, &status);

            (StatusCode::SERVICE_UNAVAILABLE, Html(page)).into_response()
        }
    }
}
