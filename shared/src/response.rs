//! API error body
//!
//! The booking service answers failures with `{"error": "..."}` and
//! sometimes a `message` naming the exception type. Successful responses
//! are the bare resource, there is no envelope.

use serde::{Deserialize, Serialize};

/// Error payload returned by the services on non-2xx responses
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    /// Extract the most useful text from a raw response body
    ///
    /// Falls back to the trimmed raw text when the body is not JSON.
    pub fn text_from(raw: &str) -> Option<String> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        match serde_json::from_str::<ErrorBody>(trimmed) {
            Ok(body) => body.error.or(body.message),
            Err(_) => Some(trimmed.to_string()),
        }
    }
}
