//! # Router Module
//!
//! Entry point of the function. [`RequestRouter::handle`] resolves the event's
//! path into a [`Route`] and produces a [`ResponseDescriptor`]:
//!
//! | Path        | Route            | Response                                      |
//! |-------------|------------------|-----------------------------------------------|
//! | `/login`    | [`Route::Login`]  | 200, `Set-Cookie: user=Bob`                  |
//! | `/logout`   | [`Route::Logout`] | 200, expired `user` cookie                   |
//! | anything    | [`Route::Status`] | 200, `Logged in as <user>` or `Logged out`   |
//!
//! Every branch answers 200 and carries the CORS headers the
//! [`OriginGuard`] computes for the request. The HTTP method is ignored.
//!
//! The `user` cookie is reflected into the body exactly as decoded. Bodies are
//! plain text; reusing them in an HTML context requires output encoding.

use tracing::debug;

use crate::cookies::parse_cookies;
use crate::cors::OriginGuard;
use crate::event::{RequestEvent, ResponseDescriptor};
use crate::runtime_config::RuntimeConfig;

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "user";
/// `Set-Cookie` value sent by the login route.
pub const LOGIN_COOKIE: &str = "user=Bob";
/// `Set-Cookie` value sent by the logout route; the past expiry makes the
/// client drop the cookie.
pub const LOGOUT_COOKIE: &str = "user=anonymous; expires=Thu, 01 Jan 1970 00:00:00 GMT";
pub const SET_COOKIE: &str = "Set-Cookie";
pub const LOGGED_OUT_BODY: &str = "Logged out";

/// The three routes the function knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Logout,
    Status,
}

impl Route {
    /// Resolve a path by exact match. Unknown paths are [`Route::Status`].
    #[must_use]
    pub fn from_path(path: &str) -> Self {
        match path {
            "/login" => Route::Login,
            "/logout" => Route::Logout,
            _ => Route::Status,
        }
    }
}

/// Dispatches request events to the login, logout and status branches.
#[derive(Debug, Clone, Default)]
pub struct RequestRouter {
    guard: OriginGuard,
}

impl RequestRouter {
    pub fn new(guard: OriginGuard) -> Self {
        Self { guard }
    }

    pub fn from_config(config: &RuntimeConfig) -> Self {
        Self::new(OriginGuard::from_config(config))
    }

    pub fn guard(&self) -> &OriginGuard {
        &self.guard
    }

    /// Handle one request event.
    #[must_use]
    pub fn handle(&self, event: &RequestEvent) -> ResponseDescriptor {
        let route = Route::from_path(&event.path);
        debug!(path = %event.path, route = ?route, "Route resolved");

        let headers = event.headers.as_ref();
        let response = match route {
            Route::Login => ResponseDescriptor::ok().with_header(SET_COOKIE, LOGIN_COOKIE),
            Route::Logout => ResponseDescriptor::ok().with_header(SET_COOKIE, LOGOUT_COOKIE),
            Route::Status => {
                let cookies = parse_cookies(headers);
                match cookies.get(SESSION_COOKIE).filter(|user| !user.is_empty()) {
                    Some(user) => ResponseDescriptor::ok().with_body(format!("Logged in as {user}")),
                    None => ResponseDescriptor::ok().with_body(LOGGED_OUT_BODY),
                }
            }
        };

        response.merge_headers(self.guard.cors_headers(headers))
    }
}
