//! Notification request/response value objects

use crate::domain::error::ValidationError;

use super::level::Level;

/// A single notification to display.
/// Constructed once per call, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationRequest {
    pub title: String,
    pub message: String,
    pub level: Level,
}

impl NotificationRequest {
    /// Create a new request
    pub fn new(title: impl Into<String>, message: impl Into<String>, level: Level) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            level,
        }
    }

    /// Check that title and message are non-empty after trimming
    /// surrounding whitespace.
    ///
    /// Title is checked before message, so a request with both fields
    /// empty reports the title.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        if self.message.trim().is_empty() {
            return Err(ValidationError::EmptyMessage);
        }
        Ok(())
    }
}

/// Outcome of a send-notification call.
///
/// `success` and `error_message` move together: a successful response
/// carries an empty message, a failed one always names the cause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationResponse {
    success: bool,
    error_message: String,
}

impl NotificationResponse {
    /// Successful response, empty error message
    pub fn ok() -> Self {
        Self {
            success: true,
            error_message: String::new(),
        }
    }

    /// Failed response carrying the cause
    pub fn failure(cause: impl Into<String>) -> Self {
        let cause = cause.into();
        Self {
            success: false,
            error_message: if cause.is_empty() {
                "unspecified error".to_string()
            } else {
                cause
            },
        }
    }

    /// Rebuild a response from its wire fields, preserving them as sent
    pub(crate) fn from_parts(success: bool, error_message: String) -> Self {
        Self {
            success,
            error_message,
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn error_message(&self) -> &str {
        &self.error_message
    }
}
