//! Origin allow-list and the CORS headers it grants.
//!
//! Only exact matches against the configured `ALLOWED_ORIGINS` entries are
//! honoured. Requests from any other origin get a response without CORS
//! headers.

use tracing::debug;

use crate::event::{header_value, HeaderMap};
use crate::runtime_config::RuntimeConfig;

/// Spellings of the origin header that are looked up, in priority order.
pub const ORIGIN_HEADER_NAMES: [&str; 2] = ["origin", "Origin"];

pub const ALLOW_ORIGIN: &str = "Access-Control-Allow-Origin";
pub const ALLOW_CREDENTIALS: &str = "Access-Control-Allow-Credentials";
pub const VARY: &str = "Vary";

/// Origin allow-list guard
///
/// Decides which CORS headers a response carries. A request whose declared
/// `Origin` is in the allow-list gets the origin echoed back together with
/// `Access-Control-Allow-Credentials: true` and `Vary: Origin`; every other
/// request gets no CORS headers at all, which leaves the browser to block
/// script access to the response.
///
/// # Security
///
/// - Exact string matching only: no wildcard, no pattern, no case folding
/// - Credentials are always allowed, so the echoed value is always a single
///   concrete origin and never `*`
///
/// # Usage
///
/// ```rust
/// use sessiongate::cors::OriginGuard;
/// use sessiongate::event::HeaderMap;
///
/// let guard = OriginGuard::new(vec!["https://ok.example".to_string()]);
/// let mut headers = HeaderMap::new();
/// headers.insert("origin".into(), "https://ok.example".into());
///
/// let cors = guard.cors_headers(Some(&headers)).unwrap();
/// assert_eq!(cors["Access-Control-Allow-Origin"], "https://ok.example");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OriginGuard {
    allowed_origins: Vec<String>,
}

impl OriginGuard {
    pub fn new(allowed_origins: Vec<String>) -> Self {
        Self { allowed_origins }
    }

    pub fn from_config(config: &RuntimeConfig) -> Self {
        Self::new(config.allowed_origins.clone())
    }

    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }

    /// Check if an origin is allowed
    #[must_use]
    pub fn is_allowed(&self, origin: &str) -> bool {
        self.allowed_origins.iter().any(|o| o == origin)
    }

    /// Compute the CORS headers for a request.
    ///
    /// # Returns
    ///
    /// * `Some(headers)` - The declared origin is allowed
    /// * `None` - No headers, no origin, or an origin outside the allow-list
    #[must_use]
    pub fn cors_headers(&self, headers: Option<&HeaderMap>) -> Option<HeaderMap> {
        let origin = headers.and_then(|h| header_value(h, &ORIGIN_HEADER_NAMES))?;

        if !self.is_allowed(origin) {
            debug!(origin = %origin, "CORS: origin not in allow-list, omitting CORS headers");
            return None;
        }

        let mut cors = HeaderMap::with_capacity(3);
        cors.insert(ALLOW_ORIGIN.to_string(), origin.to_string());
        cors.insert(ALLOW_CREDENTIALS.to_string(), "true".to_string());
        // Response depends on the request's Origin
        cors.insert(VARY.to_string(), "Origin".to_string());
        Some(cors)
    }
}
