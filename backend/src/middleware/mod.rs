//! Cross-cutting middleware for the HTTP surface.

pub mod trace;
