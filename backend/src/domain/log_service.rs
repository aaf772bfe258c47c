//! Exercise log query engine.
//!
//! Resolves the owning user, delegates filter evaluation to the exercise
//! store, and projects the retained entries into the log response shape.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{
    ExerciseLogQuery, ExerciseLogResponse, ExercisePersistenceError, ExerciseRepository,
    GetExerciseLogRequest, UserPersistenceError, UserRepository,
};
use crate::domain::{Error, ExerciseLogEntry};

fn map_user_repository_error(error: UserPersistenceError) -> Error {
    match error {
        UserPersistenceError::Connection { message } => {
            Error::service_unavailable(format!("user repository unavailable: {message}"))
        }
        UserPersistenceError::Query { message }
        | UserPersistenceError::DuplicateUsername { username: message } => {
            Error::internal(format!("user repository error: {message}"))
        }
    }
}

fn map_exercise_repository_error(error: ExercisePersistenceError) -> Error {
    match error {
        ExercisePersistenceError::Connection { message } => {
            Error::service_unavailable(format!("exercise repository unavailable: {message}"))
        }
        ExercisePersistenceError::Query { message } => {
            Error::internal(format!("exercise repository error: {message}"))
        }
    }
}

/// Log query service implementing the read driving port.
#[derive(Clone)]
pub struct ExerciseLogService<U, E> {
    user_repo: Arc<U>,
    exercise_repo: Arc<E>,
}

impl<U, E> ExerciseLogService<U, E> {
    /// Create a new service with the user and exercise repositories.
    pub fn new(user_repo: Arc<U>, exercise_repo: Arc<E>) -> Self {
        Self {
            user_repo,
            exercise_repo,
        }
    }
}

#[async_trait]
impl<U, E> ExerciseLogQuery for ExerciseLogService<U, E>
where
    U: UserRepository,
    E: ExerciseRepository,
{
    async fn get_log(
        &self,
        request: GetExerciseLogRequest,
    ) -> Result<ExerciseLogResponse, Error> {
        let user = self
            .user_repo
            .find_by_id(&request.user_id)
            .await
            .map_err(map_user_repository_error)?
            .ok_or_else(|| Error::not_found(format!("user {} not found", request.user_id)))?;

        let retained = self
            .exercise_repo
            .query_for_user(&request.user_id, &request.filter)
            .await
            .map_err(map_exercise_repository_error)?;

        let entries: Vec<ExerciseLogEntry> = retained.into_iter().map(Into::into).collect();
        Ok(ExerciseLogResponse {
            username: user.username().clone(),
            count: entries.len(),
            entries,
        })
    }
}

#[cfg(test)]
#[path = "log_service_tests.rs"]
mod tests;
