use may_minihttp::Request;
use tracing::{debug, info};

use crate::event::{HeaderMap, RequestEvent};

/// Convert a `may_minihttp::Request` into a [`RequestEvent`].
///
/// The query string is stripped from the path. Header names keep the case
/// the client sent; when a name repeats, the last value wins.
pub fn to_request_event(req: &Request) -> RequestEvent {
    let method = req.method().to_string();
    let raw_path = req.path();
    let path = raw_path.split('?').next().unwrap_or("/").to_string();

    let headers: HeaderMap = req
        .headers()
        .iter()
        .map(|h| {
            (
                h.name.to_string(),
                String::from_utf8_lossy(h.value).to_string(),
            )
        })
        .collect();

    debug!(
        header_count = headers.len(),
        header_names = ?headers.keys().take(20).collect::<Vec<_>>(),
        "Headers extracted"
    );
    info!(method = %method, path = %path, "HTTP request parsed");

    RequestEvent {
        path,
        headers: Some(headers),
    }
}
