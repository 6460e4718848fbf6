//! # Server Module
//!
//! HTTP adapter that plays the role of the hosting runtime: each incoming
//! `may_minihttp` request becomes a [`RequestEvent`](crate::event::RequestEvent),
//! goes through the [`RequestRouter`](crate::router::RequestRouter), and the
//! returned descriptor is written back as the HTTP response.
//!
//! ```rust,no_run
//! use sessiongate::runtime_config::RuntimeConfig;
//! use sessiongate::server::HttpServer;
//!
//! let config = RuntimeConfig::from_env()?;
//! let handle = HttpServer::new(&config).start("0.0.0.0:8080")?;
//! handle.join().ok();
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod http_server;
pub mod request;
pub mod response;
pub mod service;

pub use http_server::{HttpServer, ServerHandle};
pub use request::to_request_event;
pub use response::{write_descriptor, HeaderLines};
pub use service::AppService;
