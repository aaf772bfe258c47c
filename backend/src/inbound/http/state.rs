//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{ExerciseCommand, ExerciseLogQuery, UserCommand, UsersQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// User registration use-case.
    pub users: Arc<dyn UserCommand>,
    /// User listing use-case.
    pub users_query: Arc<dyn UsersQuery>,
    /// Exercise recording use-case.
    pub exercises: Arc<dyn ExerciseCommand>,
    /// Log retrieval use-case.
    pub logs: Arc<dyn ExerciseLogQuery>,
}
