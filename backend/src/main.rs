//! Backend entry-point: wires REST endpoints, health probes, and OpenAPI docs.

use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

mod server;

use server::ServerConfig;

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let config = ServerConfig::from_env();
    info!(addr = %config.bind_addr(), "starting server");

    // Bind failures are fatal: a service that cannot listen must not report
    // itself as healthy.
    server::run(config)?.await
}
