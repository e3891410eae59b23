//! User-facing notices (toasts) produced by application handlers.

use serde::Serialize;

/// Severity of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Error,
    Success,
    Warning,
    Info,
}

impl NoticeKind {
    /// Title used when none is given.
    pub fn default_title(&self) -> &'static str {
        match self {
            NoticeKind::Error => "Something went wrong",
            NoticeKind::Success => "Success",
            NoticeKind::Warning => "Heads up",
            NoticeKind::Info => "Notice",
        }
    }
}

/// A dismissible message for the hosting screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
    /// Whether the screen should offer to retry the failed operation.
    pub retryable: bool,
}

impl Notice {
    pub fn new(kind: NoticeKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            title: kind.default_title().to_string(),
            message: message.into(),
            retryable: false,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Error, message)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Success, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Warning, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Info, message)
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn retryable(mut self) -> Self {
        self.retryable = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_titles_follow_kind() {
        assert_eq!(Notice::error("x").title, "Something went wrong");
        assert_eq!(Notice::success("x").title, "Success");
        assert_eq!(Notice::warning("x").title, "Heads up");
        assert_eq!(Notice::info("x").title, "Notice");
    }

    #[test]
    fn explicit_title_overrides_default() {
        let notice = Notice::error("offline").with_title("Connection lost").retryable();
        assert_eq!(notice.title, "Connection lost");
        assert!(notice.retryable);
    }
}
