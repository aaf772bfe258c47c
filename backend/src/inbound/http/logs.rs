//! Exercise log API handlers.
//!
//! ```text
//! GET /api/users/{id}/logs?from=2023-01-01&to=2023-01-31&limit=5
//! ```

use actix_web::{get, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::{ExerciseLogResponse, GetExerciseLogRequest};
use crate::domain::{ExerciseLogEntry, LogFilter};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, parse_date_filter, parse_limit, parse_user_id,
};

/// Query parameters accepted by the log endpoint.
#[derive(Debug, Deserialize)]
pub struct LogQueryParams {
    /// Inclusive lower date bound, `YYYY-MM-DD`.
    pub from: Option<String>,
    /// Inclusive upper date bound, `YYYY-MM-DD`.
    pub to: Option<String>,
    /// Maximum number of entries to return.
    pub limit: Option<String>,
}

/// One projected log line.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LogEntryBody {
    /// What was done.
    #[schema(example = "run")]
    pub description: String,
    /// Duration in whole minutes.
    #[schema(example = 30)]
    pub duration: u32,
    /// Calendar date rendered for display, e.g. `Tue Jan 10 2023`.
    #[schema(example = "Tue Jan 10 2023")]
    pub date: String,
}

impl From<ExerciseLogEntry> for LogEntryBody {
    fn from(entry: ExerciseLogEntry) -> Self {
        Self {
            description: entry.description().to_string(),
            duration: entry.duration().minutes(),
            date: entry.date_display(),
        }
    }
}

/// Response payload for a log retrieval.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ExerciseLogBody {
    /// The owning user's username.
    #[schema(example = "alice")]
    pub username: String,
    /// Number of retained entries; equals the log length.
    #[schema(example = 1)]
    pub count: usize,
    /// Retained entries, date-ascending.
    pub log: Vec<LogEntryBody>,
}

impl From<ExerciseLogResponse> for ExerciseLogBody {
    fn from(value: ExerciseLogResponse) -> Self {
        Self {
            username: value.username.to_string(),
            count: value.count,
            log: value.entries.into_iter().map(LogEntryBody::from).collect(),
        }
    }
}

/// Read a user's exercise log with optional date range and cap.
#[utoipa::path(
    get,
    path = "/api/users/{id}/logs",
    params(
        ("id" = String, Path, description = "User identifier"),
        ("from" = Option<String>, Query, description = "Inclusive lower date bound, YYYY-MM-DD"),
        ("to" = Option<String>, Query, description = "Inclusive upper date bound, YYYY-MM-DD"),
        ("limit" = Option<String>, Query, description = "Maximum number of entries")
    ),
    responses(
        (status = 200, description = "Filtered log", body = ExerciseLogBody),
        (status = 400, description = "Invalid filter", body = crate::domain::Error),
        (status = 404, description = "Unknown user", body = crate::domain::Error),
        (status = 503, description = "Store unavailable", body = crate::domain::Error)
    ),
    tags = ["logs"],
    operation_id = "getExerciseLog"
)]
#[get("/users/{id}/logs")]
pub async fn get_exercise_log(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    query: web::Query<LogQueryParams>,
) -> ApiResult<web::Json<ExerciseLogBody>> {
    let user_id = parse_user_id(&path.into_inner())?;
    let params = query.into_inner();

    let from = parse_date_filter(params.from, FieldName::new("from"))?;
    let to = parse_date_filter(params.to, FieldName::new("to"))?;
    let limit = parse_limit(params.limit, FieldName::new("limit"))?;

    let response = state
        .logs
        .get_log(GetExerciseLogRequest {
            user_id,
            filter: LogFilter::new(from, to, limit),
        })
        .await?;

    Ok(web::Json(ExerciseLogBody::from(response)))
}

#[cfg(test)]
#[path = "logs_tests.rs"]
mod tests;
