//! Exercise log backend library modules.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Request-scoped tracing middleware re-exported for server wiring.
pub use middleware::trace::Trace;
