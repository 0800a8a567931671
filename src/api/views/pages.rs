//! Full HTML documents returned by the user link endpoint

use super::escape::html_escape;
use super::status::StatusMessage;
use crate::domain::{Language, RedirectTarget};

/// Error page with a single status message
pub fn render_error_page(language: Language, stylesheet: &str, status: &StatusMessage) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="{lang}">
<head>
<meta charset="utf-8">
<title>userlink</title>
<link rel="stylesheet" type="text/css" href="{stylesheet}">
</head>
<body>
{status}</body>
</html>
"#,
        lang = language.code(),
        stylesheet = html_escape(stylesheet),
        status = status.render(),
    )
}

/// Page that immediately sends the browser to the account page
pub fn render_redirect_page(target: &RedirectTarget) -> String {
    let url = html_escape(target.url());

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<meta http-equiv="refresh" content="0; URL={url}">
<title>userlink</title>
</head>
<body>
<a href="{url}">{url}</a>
</body>
</html>
"#,
    )
}
