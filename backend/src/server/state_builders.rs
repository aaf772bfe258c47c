//! Builders assembling port implementations into HTTP state.

use std::sync::Arc;

use backend::domain::{ExerciseLogService, ExerciseService, UserService};
use backend::inbound::http::state::HttpState;
use backend::outbound::persistence::{MemoryExerciseRepository, MemoryUserRepository};

/// Wire the in-memory stores into the domain services behind the HTTP ports.
///
/// Both services share one user store so exercise writes observe the same
/// records registration produced.
pub(crate) fn build_http_state() -> HttpState {
    let user_repo = Arc::new(MemoryUserRepository::new());
    let exercise_repo = Arc::new(MemoryExerciseRepository::new());

    let user_service = Arc::new(UserService::new(user_repo.clone()));
    let exercise_service = Arc::new(ExerciseService::new(
        user_repo.clone(),
        exercise_repo.clone(),
    ));
    let log_service = Arc::new(ExerciseLogService::new(user_repo, exercise_repo));

    HttpState {
        users: user_service.clone(),
        users_query: user_service,
        exercises: exercise_service,
        logs: log_service,
    }
}
