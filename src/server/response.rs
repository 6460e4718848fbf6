use http::StatusCode;
use may_minihttp::Response;
use std::collections::HashMap;
use tracing::warn;

use crate::cors::{ALLOW_CREDENTIALS, ALLOW_ORIGIN, VARY};
use crate::event::ResponseDescriptor;
use crate::router::{LOGIN_COOKIE, LOGOUT_COOKIE, SET_COOKIE};
use crate::runtime_config::RuntimeConfig;

const TEXT_PLAIN: &str = "Content-Type: text/plain; charset=utf-8";

/// Pre-rendered `Name: value` header lines.
///
/// `may_minihttp::Response::header` only accepts `&'static str`. Every header
/// the router can emit comes from a finite set (two cookies, the fixed CORS
/// values and one `Access-Control-Allow-Origin` per allowed origin), so the
/// lines are rendered and leaked once at start-up instead of per request.
#[derive(Debug, Clone, Default)]
pub struct HeaderLines {
    lines: HashMap<String, &'static str>,
}

impl HeaderLines {
    pub fn new(config: &RuntimeConfig) -> Self {
        let mut lines = Self::default();
        lines.intern(SET_COOKIE, LOGIN_COOKIE);
        lines.intern(SET_COOKIE, LOGOUT_COOKIE);
        lines.intern(ALLOW_CREDENTIALS, "true");
        lines.intern(VARY, "Origin");
        for origin in &config.allowed_origins {
            lines.intern(ALLOW_ORIGIN, origin);
        }
        lines
    }

    fn intern(&mut self, name: &str, value: &str) {
        let line = format!("{name}: {value}");
        if !self.lines.contains_key(&line) {
            let leaked: &'static str = Box::leak(line.clone().into_boxed_str());
            self.lines.insert(line, leaked);
        }
    }

    /// Pre-rendered line for a header, `None` if it was not rendered at start-up.
    #[must_use]
    pub fn line(&self, name: &str, value: &str) -> Option<&'static str> {
        self.lines.get(&format!("{name}: {value}")).copied()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Write a [`ResponseDescriptor`] to the HTTP response.
pub fn write_descriptor(res: &mut Response, descriptor: ResponseDescriptor, lines: &HeaderLines) {
    let status = descriptor.status_code;
    let reason = StatusCode::from_u16(status)
        .ok()
        .and_then(|s| s.canonical_reason())
        .unwrap_or("OK");
    res.status_code(status as usize, reason);

    let mut names: Vec<&String> = descriptor.headers.keys().collect();
    names.sort();
    for name in names {
        let value = &descriptor.headers[name];
        match lines.line(name, value) {
            Some(line) => {
                res.header(line);
            }
            None => warn!(header = %name, "Header line not pre-rendered, skipping"),
        }
    }

    if let Some(body) = descriptor.body {
        res.header(TEXT_PLAIN);
        res.body_vec(body.into_bytes());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_lines_cover_configured_origins() {
        let config = RuntimeConfig::from_allowed_origins("https://a.example https://b.example");
        let lines = HeaderLines::new(&config);
        assert_eq!(lines.len(), 6);
        let line = lines.line(ALLOW_ORIGIN, "https://a.example").unwrap();
        assert_eq!(line, "Access-Control-Allow-Origin: https://a.example");
        assert!(std::ptr::eq(
            line,
            lines.line(ALLOW_ORIGIN, "https://a.example").unwrap()
        ));
    }

    #[test]
    fn test_unknown_header_line_is_not_rendered() {
        let config = RuntimeConfig::from_allowed_origins("https://a.example");
        let lines = HeaderLines::new(&config);
        assert!(lines.line("X-Extra", "1").is_none());
        assert!(lines.line(ALLOW_ORIGIN, "https://evil.example").is_none());
        assert_eq!(lines.len(), 5);
        assert!(HeaderLines::default().is_empty());
    }
}
