//! Shared helpers for HTTP handler tests.

use std::sync::Arc;

use actix_web::web;

use crate::domain::{ExerciseLogService, ExerciseService, UserService};
use crate::inbound::http::state::HttpState;
use crate::outbound::persistence::{MemoryExerciseRepository, MemoryUserRepository};

/// HTTP state wired to fresh in-memory stores.
pub(crate) fn memory_state() -> web::Data<HttpState> {
    let user_repo = Arc::new(MemoryUserRepository::new());
    let exercise_repo = Arc::new(MemoryExerciseRepository::new());
    let user_service = Arc::new(UserService::new(user_repo.clone()));
    let exercise_service = Arc::new(ExerciseService::new(
        user_repo.clone(),
        exercise_repo.clone(),
    ));
    let log_service = Arc::new(ExerciseLogService::new(user_repo, exercise_repo));
    web::Data::new(HttpState {
        users: user_service.clone(),
        users_query: user_service,
        exercises: exercise_service,
        logs: log_service,
    })
}
