//! # sessiongate
//!
//! **sessiongate** is an HTTP-triggered function implementing cookie-based
//! pseudo-authentication with an origin allow-list for cross-origin callers.
//!
//! ## Overview
//!
//! One request event goes in, one response descriptor comes out. `/login` sets
//! a plaintext `user=Bob` cookie, `/logout` expires it, and every other path
//! reports who the `user` cookie says is logged in. There is no session store
//! and no signing: the cookie is a marker the client can read and forge.
//!
//! ## Architecture
//!
//! - **[`cookies`]** - `Cookie` header parsing into a [`CookieJar`](cookies::CookieJar)
//! - **[`cors`]** - [`OriginGuard`](cors::OriginGuard), the allow-list CORS decision
//! - **[`router`]** - [`RequestRouter`](router::RequestRouter), the entry point
//! - **[`event`]** - Request event and response descriptor types
//! - **[`runtime_config`]** - `ALLOWED_ORIGINS` and runtime settings from the environment
//! - **[`server`]** - `may_minihttp` adapter serving the router over HTTP
//! - **[`cli`]** - `serve` and `invoke` subcommands
//! - **[`logging`]** - `tracing` subscriber set-up
//!
//! ### Request Handling Flow
//!
//! ```mermaid
//! sequenceDiagram
//!     participant Runtime as Runtime<br/>(HTTP server / invoke)
//!     participant Router as RequestRouter
//!     participant Cookies as parse_cookies
//!     participant Guard as OriginGuard
//!
//!     Runtime->>Router: handle(event)
//!     Router->>Router: Route::from_path(path)
//!     alt Status route
//!         Router->>Cookies: parse_cookies(headers)
//!         Cookies-->>Router: CookieJar
//!     end
//!     Router->>Guard: cors_headers(headers)
//!     Guard-->>Router: Some(CORS headers) / None
//!     Router-->>Runtime: ResponseDescriptor (always 200)
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use sessiongate::event::RequestEvent;
//! use sessiongate::router::RequestRouter;
//! use sessiongate::runtime_config::RuntimeConfig;
//!
//! let config = RuntimeConfig::from_allowed_origins("https://ok.example");
//! let router = RequestRouter::from_config(&config);
//!
//! let event = RequestEvent::new("/")
//!     .with_header("Cookie", "user=Alice")
//!     .with_header("origin", "https://ok.example");
//! let res = router.handle(&event);
//!
//! assert_eq!(res.status_code, 200);
//! assert_eq!(res.body.as_deref(), Some("Logged in as Alice"));
//! assert_eq!(res.header("Access-Control-Allow-Origin"), Some("https://ok.example"));
//! ```

pub mod cli;
pub mod cookies;
pub mod cors;
pub mod event;
pub mod logging;
pub mod router;
pub mod runtime_config;
pub mod server;

pub use cookies::{parse_cookies, CookieJar};
pub use cors::OriginGuard;
pub use event::{HeaderMap, RequestEvent, ResponseDescriptor};
pub use router::{RequestRouter, Route};
pub use runtime_config::{ConfigError, RuntimeConfig};
