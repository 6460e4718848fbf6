//! Cookie header parsing.
//!
//! Turns a `Cookie` request header into a [`CookieJar`]. Parsing never fails:
//! the worst a malformed header can do is produce an empty jar or keys with
//! empty values.

use std::collections::HashMap;
use tracing::debug;

use crate::event::{header_value, HeaderMap};

/// Spellings of the cookie header that are looked up, in priority order.
pub const COOKIE_HEADER_NAMES: [&str; 2] = ["Cookie", "cookie"];

/// Cookie name to decoded value, built fresh per request.
pub type CookieJar = HashMap<String, String>;

/// Parse cookies from a request's header mapping.
///
/// Each `;` separated segment is split on its first `=`: the trimmed left side
/// is the name, everything after it is percent-decoded into the value. Values
/// are not trimmed. Segments with an empty name are dropped and a later
/// duplicate name overwrites an earlier one.
#[must_use]
pub fn parse_cookies(headers: Option<&HeaderMap>) -> CookieJar {
    let Some(raw) = headers.and_then(|h| header_value(h, &COOKIE_HEADER_NAMES)) else {
        return CookieJar::new();
    };

    let jar = parse_cookie_header(raw);
    debug!(
        cookie_count = jar.len(),
        cookie_names = ?jar.keys().collect::<Vec<_>>(),
        "Cookies extracted"
    );
    jar
}

/// Parse a raw `Cookie` header value.
#[must_use]
pub fn parse_cookie_header(raw: &str) -> CookieJar {
    let mut jar = CookieJar::new();
    for segment in raw.split(';') {
        let (name, value) = segment.split_once('=').unwrap_or((segment, ""));
        let name = name.trim();
        if name.is_empty() {
            continue;
        }
        jar.insert(name.to_string(), decode_value(value));
    }
    jar
}

/// Percent-decode a cookie value.
///
/// Escapes that do not form a valid `%XX` triple are kept verbatim and
/// undecodable UTF-8 is replaced, so this cannot fail.
fn decode_value(value: &str) -> String {
    let bytes = urlencoding::decode_binary(value.as_bytes());
    String::from_utf8_lossy(&bytes).into_owned()
}
