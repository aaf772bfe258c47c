//! Inbound adapters translating protocols into domain port calls.

pub mod http;
