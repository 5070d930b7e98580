//! Gateway error taxonomy: every failed HTTP exchange collapses into an
//! [`ApiError`], and every user-facing report of one goes through
//! [`report_failure`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed message shown for any transport-level failure.
pub const NETWORK_ERROR_MESSAGE: &str =
    "A network error occurred. Please check your connection.";

/// Error-response body shape used by the backend (`{"message": "..."}`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorBody {
    pub message: Option<String>,
}

/// Outcome of a failed HTTP exchange.
///
/// `Network` means no response was obtained at all; `Status` means a response
/// arrived with a non-success status, optionally carrying a server-provided
/// message extracted from its body; `Decode` means a success response whose
/// body did not parse as the expected shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    Network(String),
    Status { status: u16, message: Option<String> },
    Decode(String),
}

impl ApiError {
    /// Builds a `Status` error from a non-success response, extracting the
    /// `message` field when the body parses as JSON. A malformed body is not
    /// an error of its own; it simply yields no server message.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|body| body.message)
            .filter(|message| !message.is_empty());
        Self::Status { status, message }
    }

    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Resolves the user-facing message for this failure. Total: a transport
    /// failure maps to the fixed network message, an application failure to
    /// the server-provided message when present, and anything else to the
    /// caller-supplied fallback.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Network(_) => NETWORK_ERROR_MESSAGE.to_string(),
            Self::Status {
                message: Some(message),
                ..
            } => message.clone(),
            Self::Status { message: None, .. } | Self::Decode(_) => fallback.to_string(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network(detail) => write!(f, "network error: {detail}"),
            Self::Status {
                status,
                message: Some(message),
            } => write!(f, "HTTP {status}: {message}"),
            Self::Status {
                status,
                message: None,
            } => write!(f, "HTTP {status}"),
            Self::Decode(detail) => write!(f, "invalid response body: {detail}"),
        }
    }
}

/// Notification surface for user-facing error display. The toast context
/// implements this in the UI layer; tests substitute a recorder.
pub trait Notify {
    fn error(&self, message: &str);
}

/// Displays the resolved message for `err` through the notification surface,
/// exactly once. Never fails.
pub fn report_failure(notifier: &dyn Notify, err: &ApiError, fallback: &str) {
    notifier.error(&err.user_message(fallback));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingNotify {
        messages: RefCell<Vec<String>>,
    }

    impl Notify for RecordingNotify {
        fn error(&self, message: &str) {
            self.messages.borrow_mut().push(message.to_string());
        }
    }

    #[test]
    fn network_failure_reports_fixed_message_exactly_once() {
        let notifier = RecordingNotify::default();
        let err = ApiError::Network("connection refused".to_string());

        report_failure(&notifier, &err, "Failed to load report.");

        let messages = notifier.messages.borrow();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0], NETWORK_ERROR_MESSAGE);
    }

    #[test]
    fn server_message_is_surfaced_verbatim() {
        let err = ApiError::from_status(400, r#"{"message":"Name cannot be empty"}"#);

        assert_eq!(err.status(), Some(400));
        assert_eq!(
            err.user_message("An unexpected error occurred."),
            "Name cannot be empty"
        );
    }

    #[test]
    fn unparsable_body_degrades_to_fallback() {
        let err = ApiError::from_status(400, "<html>Bad Request</html>");

        assert_eq!(
            err.user_message("Failed to create author."),
            "Failed to create author."
        );
    }

    #[test]
    fn empty_or_missing_message_field_degrades_to_fallback() {
        for body in [r#"{}"#, r#"{"message":null}"#, r#"{"message":""}"#] {
            let err = ApiError::from_status(500, body);
            assert_eq!(err.user_message("Operation failed."), "Operation failed.");
        }
    }

    #[test]
    fn decode_failure_degrades_to_fallback() {
        let err = ApiError::Decode("expected struct UserDto".to_string());
        assert_eq!(err.user_message("Failed to load users."), "Failed to load users.");
    }

    #[test]
    fn status_failure_reports_resolved_message_once() {
        let notifier = RecordingNotify::default();
        let err = ApiError::from_status(409, r#"{"message":"Book is already borrowed"}"#);

        report_failure(&notifier, &err, "Rental failed.");

        let messages = notifier.messages.borrow();
        assert_eq!(messages.as_slice(), ["Book is already borrowed"]);
    }
}
