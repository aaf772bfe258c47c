//! Driving port for filtered exercise log reads.
//!
//! Inbound adapters use this port to read a user's activity log without
//! depending on repository details.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{Error, ExerciseLogEntry, LogFilter, UserId, Username};

/// Request to read a user's exercise log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetExerciseLogRequest {
    /// Owning user.
    pub user_id: UserId,
    /// Date range and cap constraints, already parsed at the boundary.
    pub filter: LogFilter,
}

/// Response containing the retained, projected log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseLogResponse {
    /// The owning user's username.
    pub username: Username,
    /// Number of retained entries; always equals `entries.len()`.
    pub count: usize,
    /// Retained entries, date-ascending.
    pub entries: Vec<ExerciseLogEntry>,
}

/// Driving port for exercise log reads.
#[async_trait]
pub trait ExerciseLogQuery: Send + Sync {
    /// Read the filtered log for an existing user.
    ///
    /// A missing user is an explicit [`Error::not_found`], never an empty
    /// log: callers must be able to tell "no such user" from "no entries".
    async fn get_log(&self, request: GetExerciseLogRequest)
    -> Result<ExerciseLogResponse, Error>;
}

/// Fixture query implementation for tests that do not need persistence.
///
/// Behaves as if no user exists, mirroring an empty store.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureExerciseLogQuery;

#[async_trait]
impl ExerciseLogQuery for FixtureExerciseLogQuery {
    async fn get_log(
        &self,
        request: GetExerciseLogRequest,
    ) -> Result<ExerciseLogResponse, Error> {
        Err(Error::not_found(format!(
            "user {} not found",
            request.user_id
        )))
    }
}
