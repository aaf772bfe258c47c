//! HTTP server configuration object and helpers.

use std::env;
use std::net::SocketAddr;

use tracing::{info, warn};

const DEFAULT_PORT: u16 = 3000;

/// Configuration for creating the HTTP server.
pub struct ServerConfig {
    bind_addr: SocketAddr,
}

impl ServerConfig {
    /// Construct a server configuration from the process environment.
    ///
    /// Reads `PORT` and falls back to 3000 when unset or unparseable.
    pub fn from_env() -> Self {
        let port = match env::var("PORT") {
            Ok(raw) => raw.parse().unwrap_or_else(|e| {
                warn!(value = %raw, error = %e, "invalid PORT value, using default");
                DEFAULT_PORT
            }),
            Err(_) => {
                info!("PORT not set, using default {DEFAULT_PORT}");
                DEFAULT_PORT
            }
        };
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], port)),
        }
    }

    /// Return the socket address the server will bind to.
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
