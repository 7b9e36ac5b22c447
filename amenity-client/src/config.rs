//! Client configuration

/// Port of the amenity service on the shared host
pub const AMENITY_PORT: u16 = 8081;
/// Port of the booking service on the shared host
pub const BOOKING_PORT: u16 = 8082;
/// Port of the user service on the shared host
pub const USER_PORT: u16 = 8085;

/// Client configuration for connecting to the three back-end services
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Amenity service base URL (e.g., "http://localhost:8081")
    pub amenity_url: String,

    /// Booking service base URL
    pub booking_url: String,

    /// User service base URL
    pub user_url: String,

    /// Session token for authentication
    pub token: Option<String>,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl ClientConfig {
    /// Create a configuration with explicit service URLs
    pub fn new(
        amenity_url: impl Into<String>,
        booking_url: impl Into<String>,
        user_url: impl Into<String>,
    ) -> Self {
        Self {
            amenity_url: trim_url(amenity_url.into()),
            booking_url: trim_url(booking_url.into()),
            user_url: trim_url(user_url.into()),
            token: None,
            timeout: 30,
        }
    }

    /// Derive the three service URLs from one host (e.g., "http://localhost")
    ///
    /// Any port already present on the host is replaced.
    pub fn from_host(host: &str) -> Self {
        let host = strip_port(host.trim_end_matches('/'));
        Self::new(
            format!("{host}:{AMENITY_PORT}"),
            format!("{host}:{BOOKING_PORT}"),
            format!("{host}:{USER_PORT}"),
        )
    }

    /// Set the session token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> crate::ClientResult<crate::NetworkHttpClient> {
        crate::NetworkHttpClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_host("http://localhost")
    }
}

fn trim_url(url: String) -> String {
    url.trim_end_matches('/').to_string()
}

/// Remove a trailing ":<digits>" port, keeping the scheme separator intact
fn strip_port(host: &str) -> &str {
    match host.rsplit_once(':') {
        Some((head, port))
            if !port.is_empty()
                && port.bytes().all(|b| b.is_ascii_digit())
                && !head.ends_with('/')
                && head.contains("//") =>
        {
            head
        }
        _ => host,
    }
}
