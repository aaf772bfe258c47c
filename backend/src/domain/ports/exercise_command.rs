//! Driving port for recording exercise entries.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{DurationMinutes, Error, ExerciseEntry, User, UserId};

/// Request to record one exercise for a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordExerciseRequest {
    /// Owning user.
    pub user_id: UserId,
    /// Raw description as submitted; validated by the service.
    pub description: String,
    /// Duration in whole minutes, already parsed at the boundary.
    pub duration: DurationMinutes,
    /// Calendar date; defaults to today (UTC) when absent.
    pub date: Option<NaiveDate>,
}

/// Response for a recorded exercise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordExerciseResponse {
    /// The owning user's stored identity.
    pub user: User,
    /// The persisted entry.
    pub entry: ExerciseEntry,
}

/// Driving port for exercise recording.
#[async_trait]
pub trait ExerciseCommand: Send + Sync {
    /// Record one exercise entry for an existing user.
    async fn record_exercise(
        &self,
        request: RecordExerciseRequest,
    ) -> Result<RecordExerciseResponse, Error>;
}

/// Fixture command implementation for tests that do not need persistence.
///
/// Behaves as if no user exists, mirroring an empty store.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureExerciseCommand;

#[async_trait]
impl ExerciseCommand for FixtureExerciseCommand {
    async fn record_exercise(
        &self,
        request: RecordExerciseRequest,
    ) -> Result<RecordExerciseResponse, Error> {
        Err(Error::not_found(format!(
            "user {} not found",
            request.user_id
        )))
    }
}
