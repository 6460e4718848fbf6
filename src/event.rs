//! Invocation contract types.
//!
//! A [`RequestEvent`] is what the hosting runtime hands to the function and a
//! [`ResponseDescriptor`] is what it gets back. Both carry JSON forms so a
//! gateway (or the `invoke` subcommand) can pass them around verbatim:
//!
//! ```json
//! {"path": "/", "headers": {"Cookie": "user=Alice"}}
//! {"statusCode": 200, "headers": {}, "body": "Logged in as Alice"}
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Header mapping as delivered by the runtime.
///
/// Names keep the case the client or gateway used, so lookups go through
/// [`header_value`] with every accepted spelling.
pub type HeaderMap = HashMap<String, String>;

/// A single HTTP-like request event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestEvent {
    /// Request path without query string, e.g. `/login`
    pub path: String,
    /// Request headers; `None` when the runtime delivered `null` or omitted them
    #[serde(default)]
    pub headers: Option<HeaderMap>,
}

impl RequestEvent {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            headers: None,
        }
    }

    /// Add a header, creating the header mapping on first use.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .get_or_insert_with(HeaderMap::new)
            .insert(name.into(), value.into());
        self
    }
}

/// Response returned to the hosting runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseDescriptor {
    pub status_code: u16,
    #[serde(default)]
    pub headers: HeaderMap,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl ResponseDescriptor {
    pub fn ok() -> Self {
        Self {
            status_code: 200,
            headers: HeaderMap::new(),
            body: None,
        }
    }

    #[must_use]
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.insert(name.to_string(), value.to_string());
        self
    }

    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Merge optional extra headers (e.g. CORS) into this response.
    #[must_use]
    pub fn merge_headers(mut self, extra: Option<HeaderMap>) -> Self {
        if let Some(extra) = extra {
            self.headers.extend(extra);
        }
        self
    }

    /// Header lookup by exact name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }
}

/// Look up a header under the first of `names` that carries a non-empty value.
///
/// The order of `names` decides which spelling wins when a mapping carries
/// more than one. An empty value counts as absent, so lookup falls through to
/// the next spelling.
#[must_use]
pub fn header_value<'a>(headers: &'a HeaderMap, names: &[&str]) -> Option<&'a str> {
    names
        .iter()
        .find_map(|name| headers.get(*name).filter(|v| !v.is_empty()))
        .map(String::as_str)
}
