//! Status message boxes shown at the top of application pages

use super::escape::html_escape;

/// Severity of a status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Warn,
    Error,
}

impl StatusKind {
    /// CSS class used by the application stylesheet
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Info => "statusInfo",
            Self::Warn => "statusWarn",
            Self::Error => "statusError",
        }
    }
}

/// A status message with optional headline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub headline: Option<String>,
    pub text: String,
}

impl StatusMessage {
    pub fn new(kind: StatusKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            headline: None,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(StatusKind::Error, text)
    }

    pub fn with_headline(mut self, headline: impl Into<String>) -> Self {
        self.headline = Some(headline.into());
        self
    }

    pub fn render(&self) -> String {
        let headline = self
            .headline
            .as_deref()
            .filter(|h| !h.is_empty())
            .map(|h| format!("<b>{}</b><br>\n", html_escape(h)))
            .unwrap_or_default();

        format!(
            "<div class=\"statusMessage {}\">\n{}{}\n</div>\n",
            self.kind.css_class(),
            headline,
            html_escape(&self.text)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_error_without_headline() {
        let html = StatusMessage::error("This user was not found! (obrien)").render();

        assert!(html.contains("class=\"statusMessage statusError\""));
        assert!(html.contains("This user was not found! (obrien)"));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn test_render_with_headline() {
        let html = StatusMessage::new(StatusKind::Info, "Saved")
            .with_headline("Account")
            .render();

        assert!(html.contains("statusInfo"));
        assert!(html.contains("<b>Account</b><br>"));
    }

    #[test]
    fn test_render_escapes_text_and_headline() {
        let html = StatusMessage::new(StatusKind::Warn, "<img src=x>")
            .with_headline("<b>")
            .render();

        assert!(html.contains("&lt;img src=x&gt;"));
        assert!(html.contains("<b>&lt;b&gt;</b>"));
        assert!(!html.contains("<img"));
    }
}
