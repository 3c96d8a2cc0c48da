//! Failure-message selection for the global error toast.
//!
//! This is the display endpoint for the rest of the application: a failed
//! fragment request is reduced to one human-readable line, preferring
//! whatever the server sent over a synthesized fallback. Nothing here can
//! fail in a way worth reporting further.

/// Milliseconds until a toast gains its closing transition class.
pub const TOAST_CLOSING_MS: u32 = 5_000;

/// Milliseconds until a toast is removed from the document.
pub const TOAST_REMOVE_MS: u32 = 5_300;

/// Message shown when a request never completed at all.
pub const SEND_ERROR_MESSAGE: &str = "Network error: Server unreachable or request failed.";

/// Toast severity. Only errors are surfaced today; the enum keeps the CSS
/// contract in one place if that changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
}

impl Severity {
    /// CSS modifier class for a toast of this severity.
    pub fn css_class(self) -> &'static str {
        match self {
            Severity::Error => "type-error",
        }
    }
}

/// Pick the toast message for a request that completed with a non-success
/// status.
///
/// A non-empty response body (after trimming) is shown as-is; otherwise a
/// generic message carrying the numeric status is synthesized.
pub fn response_error_message(status: u16, body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        format!("Error ({status}): An unknown server error occurred.")
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty_body_used_verbatim() {
        assert_eq!(
            response_error_message(500, "Post title is required"),
            "Post title is required"
        );
    }

    #[test]
    fn test_body_is_trimmed_before_use() {
        assert_eq!(
            response_error_message(422, "  invalid slug \n"),
            "invalid slug"
        );
    }

    #[test]
    fn test_empty_body_falls_back_to_status() {
        assert_eq!(
            response_error_message(500, ""),
            "Error (500): An unknown server error occurred."
        );
    }

    #[test]
    fn test_whitespace_body_falls_back_to_status() {
        assert_eq!(
            response_error_message(404, " \t\r\n"),
            "Error (404): An unknown server error occurred."
        );
    }

    #[test]
    fn test_status_is_interpolated_exactly() {
        assert_eq!(
            response_error_message(503, ""),
            "Error (503): An unknown server error occurred."
        );
        assert_eq!(
            response_error_message(418, "   "),
            "Error (418): An unknown server error occurred."
        );
    }

    #[test]
    fn test_send_error_message_is_fixed() {
        assert_eq!(
            SEND_ERROR_MESSAGE,
            "Network error: Server unreachable or request failed."
        );
    }

    #[test]
    fn test_closing_precedes_removal() {
        assert!(TOAST_CLOSING_MS < TOAST_REMOVE_MS);
    }

    #[test]
    fn test_error_severity_class() {
        assert_eq!(Severity::Error.css_class(), "type-error");
    }
}
