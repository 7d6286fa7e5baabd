// User-visible outcome of an operation.
//
// Store failures never cross this boundary as structured errors: they are
// logged where they are caught and replaced by a generic failure message.

use serde::Serialize;
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    Success,
    Failure,
    SignedOut,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    /// Logs `error` and returns the generic notice for `action`
    /// (for example "recording attendance").
    pub fn failure(action: &str, error: &impl Display) -> Self {
        tracing::error!(%error, "error while {action}");
        Self {
            kind: NoticeKind::Failure,
            message: format!("An error occurred while {action}."),
        }
    }

    pub fn signed_out() -> Self {
        Self {
            kind: NoticeKind::SignedOut,
            message: "Sign in to continue.".to_string(),
        }
    }
}

#[cfg(test)]
mod notice_tests {
    use super::*;
    use crate::shared::core::errors::ApplicationError;
    use crate::shared::infrastructure::record_store::StoreError;
    use rstest::rstest;

    #[rstest]
    fn it_should_hide_the_underlying_error_from_the_message() {
        let error = ApplicationError::Store(StoreError::Backend("connection reset".into()));
        let notice = Notice::failure("saving time entries", &error);
        assert_eq!(notice.kind, NoticeKind::Failure);
        assert_eq!(notice.message, "An error occurred while saving time entries.");
        assert!(!notice.message.contains("connection reset"));
    }

    #[rstest]
    fn it_should_serialize_the_kind_in_snake_case() {
        let json = serde_json::to_value(Notice::signed_out()).unwrap();
        assert_eq!(json["kind"], "signed_out");
    }
}
