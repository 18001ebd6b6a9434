//! Wire protocol for the notification relay
//!
//! One call per connection: the client writes a single JSON object on one
//! line, the server answers with a single JSON line. Unknown methods and
//! malformed payloads are answered with a failure response, not dropped.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{Level, NotificationRequest, NotificationResponse};

/// The only method the relay understands
pub const METHOD_SEND_NOTIFICATION: &str = "SendNotification";

/// Errors produced while decoding a request line
#[derive(Debug, Error)]
pub enum WireError {
    #[error("invalid request: {0}")]
    Malformed(String),

    #[error("unsupported method: {0}")]
    UnsupportedMethod(String),
}

/// A single request frame.
///
/// Field payload mirrors the unary `SendNotification` contract:
/// title, message, and an integer level (0=INFO, 1=WARNING, 2=ERROR).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestFrame {
    pub method: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub level: i32,
}

impl RequestFrame {
    /// Build a `SendNotification` frame from a domain request
    pub fn send_notification(request: &NotificationRequest) -> Self {
        Self {
            method: METHOD_SEND_NOTIFICATION.to_string(),
            title: request.title.clone(),
            message: request.message.clone(),
            level: request.level.as_wire(),
        }
    }

    /// Convert into the domain request, decoding the severity level
    pub fn into_request(self) -> NotificationRequest {
        NotificationRequest::new(self.title, self.message, Level::from_wire(self.level))
    }
}

/// A single response frame
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseFrame {
    pub success: bool,
    #[serde(default)]
    pub error_message: String,
}

impl From<&NotificationResponse> for ResponseFrame {
    fn from(response: &NotificationResponse) -> Self {
        Self {
            success: response.is_success(),
            error_message: response.error_message().to_string(),
        }
    }
}

impl From<ResponseFrame> for NotificationResponse {
    fn from(frame: ResponseFrame) -> Self {
        NotificationResponse::from_parts(frame.success, frame.error_message)
    }
}

/// Decode one request line into a frame
pub fn decode_request(line: &str) -> Result<RequestFrame, WireError> {
    let frame: RequestFrame =
        serde_json::from_str(line.trim()).map_err(|e| WireError::Malformed(e.to_string()))?;

    if frame.method != METHOD_SEND_NOTIFICATION {
        return Err(WireError::UnsupportedMethod(frame.method));
    }

    Ok(frame)
}

/// Encode a response frame as a single line, newline included.
///
/// Serialization of these plain fields cannot fail in practice; should it
/// ever, the caller still gets a well-formed failure line.
pub fn encode_response(frame: &ResponseFrame) -> String {
    let mut line = serde_json::to_string(frame).unwrap_or_else(|_| {
        r#"{"success":false,"error_message":"response encoding failure"}"#.to_string()
    });
    line.push('\n');
    line
}
