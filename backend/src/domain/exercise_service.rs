//! Exercise recording service.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::ports::{
    ExerciseCommand, ExercisePersistenceError, ExerciseRepository, RecordExerciseRequest,
    RecordExerciseResponse, UserPersistenceError, UserRepository,
};
use crate::domain::{Description, Error, ExerciseEntry, ExerciseId};

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

/// Exercise service implementing the recording driving port.
///
/// The write only proceeds once the owning user is known to exist; a
/// missing user is reported to the caller instead of producing an orphaned
/// entry.
#[derive(Clone)]
pub struct ExerciseService<U, E> {
    user_repo: Arc<U>,
    exercise_repo: Arc<E>,
}

impl<U, E> ExerciseService<U, E> {
    /// Create a new service with the user and exercise repositories.
    pub fn new(user_repo: Arc<U>, exercise_repo: Arc<E>) -> Self {
        Self {
            user_repo,
            exercise_repo,
        }
    }
}

#[async_trait]
impl<U, E> ExerciseCommand for ExerciseService<U, E>
where
    U: UserRepository,
    E: ExerciseRepository,
{
    async fn record_exercise(
        &self,
        request: RecordExerciseRequest,
    ) -> Result<RecordExerciseResponse, Error> {
        let user = self
            .user_repo
            .find_by_id(&request.user_id)
            .await
            .map_err(map_user_repository_error)?
            .ok_or_else(|| Error::not_found(format!("user {} not found", request.user_id)))?;

        let description = Description::new(request.description)
            .map_err(|err| Error::invalid_request(format!("invalid exercise payload: {err}")))?;
        let date = request.date.unwrap_or_else(|| Utc::now().date_naive());

        let entry = ExerciseEntry::new(
            ExerciseId::random(),
            request.user_id,
            description,
            request.duration,
            date,
        );
        self.exercise_repo
            .insert(&entry)
            .await
            .map_err(map_exercise_repository_error)?;

        Ok(RecordExerciseResponse { user, entry })
    }
}

#[cfg(test)]
#[path = "exercise_service_tests.rs"]
mod tests;
