//! # CLI Module
//!
//! Command-line front end of the `sessiongate` binary.
//!
//! ## Commands
//!
//! ### `serve`
//!
//! Serve the function over HTTP:
//!
//! ```bash
//! ALLOWED_ORIGINS="https://app.example" sessiongate serve --addr 127.0.0.1:8080
//! ```
//!
//! Options:
//! - `--addr <ADDR>` - Bind address (env `SESSIONGATE_ADDR`, default `0.0.0.0:8080`)
//!
//! ### `invoke`
//!
//! Handle one JSON request event, the way a function runtime would, and print
//! the response descriptor:
//!
//! ```bash
//! echo '{"path":"/","headers":{"Cookie":"user=Alice"}}' \
//!     | ALLOWED_ORIGINS="https://app.example" sessiongate invoke
//! {"statusCode":200,"headers":{},"body":"Logged in as Alice"}
//! ```
//!
//! Options:
//! - `--event <FILE>` - Read the event from a file instead of stdin (`-` means stdin)

mod commands;


pub use commands::{invoke_event, run_cli, Cli, Commands};
