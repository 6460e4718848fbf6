use may_minihttp::{HttpService, Request, Response};
use std::io;
use std::sync::Arc;
use tracing::debug;

use super::request::to_request_event;
use super::response::{write_descriptor, HeaderLines};
use crate::router::RequestRouter;
use crate::runtime_config::RuntimeConfig;

/// `may_minihttp` service wrapping a [`RequestRouter`].
///
/// Cloned once per connection by the server; the router and rendered header
/// lines are shared read-only.
#[derive(Clone)]
pub struct AppService {
    pub router: Arc<RequestRouter>,
    pub lines: Arc<HeaderLines>,
}

impl AppService {
    pub fn new(config: &RuntimeConfig) -> Self {
        Self {
            router: Arc::new(RequestRouter::from_config(config)),
            lines: Arc::new(HeaderLines::new(config)),
        }
    }
}

impl HttpService for AppService {
    fn call(&mut self, req: Request, res: &mut Response) -> io::Result<()> {
        let event = to_request_event(&req);
        let descriptor = self.router.handle(&event);
        debug!(
            path = %event.path,
            status = descriptor.status_code,
            header_count = descriptor.headers.len(),
            "Response produced"
        );
        write_descriptor(res, descriptor, &self.lines);
        Ok(())
    }
}
