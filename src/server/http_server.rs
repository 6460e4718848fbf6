use may::coroutine::JoinHandle;
use may_minihttp::HttpServerWithHeaders;
use std::any::Any;
use std::io;
use std::net::{SocketAddr, TcpStream, ToSocketAddrs};
use std::thread;
use std::time::{Duration, Instant};
use tracing::{info, warn};

use super::service::AppService;
use crate::runtime_config::RuntimeConfig;

/// Request headers accepted per request; room for gateway and proxy additions.
const MAX_HEADERS: usize = 32;

const READY_POLL: Duration = Duration::from_millis(5);

/// sessiongate served over `may_minihttp`.
pub struct HttpServer {
    service: AppService,
}

/// Handle to a running server coroutine.
pub struct ServerHandle {
    addr: SocketAddr,
    handle: JoinHandle<()>,
}

impl HttpServer {
    /// Server for the router and header lines built from `config`.
    pub fn new(config: &RuntimeConfig) -> Self {
        Self::with_service(AppService::new(config))
    }

    pub fn with_service(service: AppService) -> Self {
        Self { service }
    }

    /// Bind the first address `addr` resolves to and start serving.
    ///
    /// # Errors
    ///
    /// Returns an error if the address does not resolve or cannot be bound.
    pub fn start<A: ToSocketAddrs>(self, addr: A) -> io::Result<ServerHandle> {
        let addr = addr.to_socket_addrs()?.next().ok_or_else(|| {
            io::Error::new(io::ErrorKind::InvalidInput, "address resolved to nothing")
        })?;
        let allowed_origins = self.service.router.guard().allowed_origins().len();
        let header_lines = self.service.lines.len();

        let handle = HttpServerWithHeaders::<_, MAX_HEADERS>(self.service).start(addr)?;
        info!(
            addr = %addr,
            allowed_origins,
            header_lines,
            "sessiongate listening"
        );
        Ok(ServerHandle { addr, handle })
    }
}

impl ServerHandle {
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Block until the listener accepts a TCP connection or `timeout` elapses.
    ///
    /// # Errors
    ///
    /// Returns `TimedOut` if no connection succeeded in time.
    pub fn wait_ready(&self, timeout: Duration) -> io::Result<()> {
        let deadline = Instant::now() + timeout;
        loop {
            if TcpStream::connect(self.addr).is_ok() {
                return Ok(());
            }
            if Instant::now() >= deadline {
                return Err(io::Error::new(
                    io::ErrorKind::TimedOut,
                    format!("sessiongate not accepting on {} after {timeout:?}", self.addr),
                ));
            }
            thread::sleep(READY_POLL);
        }
    }

    /// Cancel the server coroutine and wait for it to wind down.
    ///
    /// Cancellation unwinds the coroutine, so a failed join is expected; a
    /// failure carrying a panic message is logged as a warning.
    pub fn stop(self) {
        let addr = self.addr;
        // SAFETY: the handle is owned here and the coroutine is not touched
        // again after cancellation.
        unsafe {
            self.handle.coroutine().cancel();
        }
        match self.handle.join() {
            Ok(()) => info!(addr = %addr, "sessiongate stopped"),
            Err(payload) => match panic_message(&*payload) {
                Some(message) => {
                    warn!(addr = %addr, panic = %message, "Server coroutine panicked while stopping");
                }
                None => info!(addr = %addr, "sessiongate stopped"),
            },
        }
    }

    /// Block until the server coroutine finishes.
    ///
    /// # Errors
    ///
    /// Returns an error if the server coroutine panicked.
    pub fn join(self) -> std::thread::Result<()> {
        self.handle.join()
    }
}

// Panics raised by code carry a string payload; may's cancellation does not.
fn panic_message(payload: &(dyn Any + Send)) -> Option<&str> {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
}
