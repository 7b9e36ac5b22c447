//! Client error types

use thiserror::Error;

/// Which authentication call failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthAction {
    Login,
    Registration,
}

impl AuthAction {
    /// Text shown when the service gives no reason
    pub fn default_reason(&self) -> &'static str {
        match self {
            Self::Login => "Invalid username or password",
            Self::Registration => "Username may already exist",
        }
    }
}

impl std::fmt::Display for AuthAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Login => f.write_str("Login"),
            Self::Registration => f.write_str("Registration"),
        }
    }
}

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// Request never got a response (connection refused, timeout, ...)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Slot or day already taken (409)
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Rejected by server-side validation (400)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Session missing or expired on the server (401)
    #[error("Authentication required: {0}")]
    Unauthorized(String),

    /// Admin-only resource (403)
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// Resource not found (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Any other non-2xx status
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// Login or registration rejected
    #[error("{action} failed: {status} - {message}")]
    AuthFailed {
        action: AuthAction,
        status: u16,
        message: String,
    },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// No session token; the call was not sent
    #[error("Not logged in")]
    NotLoggedIn,

    /// Current role may not use admin views; the call was not sent
    #[error("Access denied: admin role required")]
    AccessDenied,

    /// User selection could not be turned into a request
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl ClientError {
    /// Map a non-2xx status and the extracted error text
    pub fn from_status(status: u16, message: String) -> Self {
        match status {
            400 => Self::Validation(message),
            401 => Self::Unauthorized(message),
            403 => Self::Forbidden(message),
            404 => Self::NotFound(message),
            409 => Self::Conflict(message),
            _ => Self::Status { status, message },
        }
    }

    /// HTTP status behind this error, if the server answered
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Validation(_) => Some(400),
            Self::Unauthorized(_) => Some(401),
            Self::Forbidden(_) => Some(403),
            Self::NotFound(_) => Some(404),
            Self::Conflict(_) => Some(409),
            Self::Status { status, .. } | Self::AuthFailed { status, .. } => Some(*status),
            Self::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Error text provided by the server, if any
    pub fn server_message(&self) -> Option<&str> {
        let message = match self {
            Self::Validation(m)
            | Self::Unauthorized(m)
            | Self::Forbidden(m)
            | Self::NotFound(m)
            | Self::Conflict(m) => m,
            Self::Status { message, .. } | Self::AuthFailed { message, .. } => message,
            _ => return None,
        };
        Some(message.as_str()).filter(|m| !m.is_empty())
    }

    /// Wrap a failed login/registration into the form shown to the user
    pub(crate) fn into_auth_failure(self, action: AuthAction) -> Self {
        match self.status() {
            Some(status) if !matches!(self, Self::Network(_)) => Self::AuthFailed {
                action,
                status,
                message: self
                    .server_message()
                    .unwrap_or(action.default_reason())
                    .to_string(),
            },
            _ => self,
        }
    }

    /// Text for the resident
    pub fn user_message(&self) -> String {
        match self {
            Self::Network(e) => format!("Request failed: {e}"),
            Self::Conflict(m) if !m.is_empty() => m.clone(),
            Self::Conflict(_) => "This slot is no longer available".to_string(),
            Self::Validation(m) => format!("Invalid request: {m}"),
            Self::Forbidden(_) | Self::AccessDenied => {
                "Access denied. Admin privileges required.".to_string()
            }
            Self::Unauthorized(_) | Self::NotLoggedIn => "Please login first".to_string(),
            Self::Status { status, message } if message.is_empty() => {
                format!("Request failed (HTTP {status})")
            }
            Self::Status { message, .. } => format!("Request failed: {message}"),
            other => other.to_string(),
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
