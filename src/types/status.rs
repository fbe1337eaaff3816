use crate::ui::theme;

/// Visual state of the status banner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

impl StatusKind {
    /// Style class applied to the banner element
    pub fn class_name(&self) -> &'static str {
        match self {
            StatusKind::Success => theme::ALERT_SUCCESS_CLASS,
            StatusKind::Error => theme::ALERT_ERROR_CLASS,
        }
    }
}

/// Last message shown in the status banner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub kind: StatusKind,
    pub text: String,
}

impl Status {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Error,
            text: text.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.kind == StatusKind::Success
    }
}

/// Handler-owned view state
///
/// `busy` is set for exactly the lifetime of one in-flight request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    pub busy: bool,
    pub last_status: Option<Status>,
}
