use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use tracing::info;

use crate::event::RequestEvent;
use crate::logging::{init_logging, LogConfig};
use crate::router::RequestRouter;
use crate::runtime_config::RuntimeConfig;
use crate::server::HttpServer;

/// Command-line interface for sessiongate
#[derive(Parser, Debug)]
#[command(name = "sessiongate")]
#[command(about = "Cookie login function with an origin allow-list", long_about = None)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Serve the function over HTTP
    Serve {
        /// Address to bind to
        #[arg(long, env = "SESSIONGATE_ADDR", default_value = "0.0.0.0:8080")]
        addr: String,
    },
    /// Handle a single JSON request event and print the response descriptor
    Invoke {
        /// File holding the event JSON; `-` or absent reads stdin
        #[arg(short, long)]
        event: Option<PathBuf>,
    },
}

/// Read one event from `input`, run it through `router`, write the JSON
/// descriptor plus a trailing newline to `output`.
///
/// # Errors
///
/// Fails if the input is not a valid event or the output cannot be written.
pub fn invoke_event<R: Read, W: Write>(
    router: &RequestRouter,
    mut input: R,
    mut output: W,
) -> Result<()> {
    let mut raw = String::new();
    input
        .read_to_string(&mut raw)
        .context("Failed to read request event")?;
    let event: RequestEvent =
        serde_json::from_str(&raw).context("Request event is not valid JSON")?;
    let descriptor = router.handle(&event);
    serde_json::to_writer(&mut output, &descriptor).context("Failed to write response")?;
    writeln!(output).context("Failed to write response")?;
    Ok(())
}

/// Run a parsed command line.
///
/// # Errors
///
/// Configuration errors (missing `ALLOWED_ORIGINS`) abort before any request
/// is handled.
pub fn run_cli(cli: Cli) -> Result<()> {
    init_logging(&LogConfig::from_env())?;
    let config = RuntimeConfig::from_env()?;

    match cli.command {
        Commands::Serve { addr } => {
            may::config().set_stack_size(config.stack_size);
            info!(
                addr = %addr,
                allowed_origins = ?config.allowed_origins,
                stack_size = config.stack_size,
                "Starting sessiongate"
            );
            let handle = HttpServer::new(&config)
                .start(addr.as_str())
                .with_context(|| format!("Failed to bind {addr}"))?;
            handle
                .join()
                .map_err(|e| anyhow::anyhow!("server coroutine panicked: {e:?}"))?;
            Ok(())
        }
        Commands::Invoke { event } => {
            let router = RequestRouter::from_config(&config);
            let stdout = io::stdout();
            match event {
                Some(path) if path.as_os_str() != "-" => {
                    let file = File::open(&path)
                        .with_context(|| format!("Failed to open {}", path.display()))?;
                    invoke_event(&router, file, stdout.lock())
                }
                _ => invoke_event(&router, io::stdin().lock(), stdout.lock()),
            }
        }
    }
}
