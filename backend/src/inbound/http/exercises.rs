//! Exercise API handlers.
//!
//! ```text
//! POST /api/users/{id}/exercises {"description":"run","duration":"30","date":"2023-01-10"}
//! ```

use actix_web::{Either, post, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::domain::ports::{RecordExerciseRequest, RecordExerciseResponse};
use crate::domain::{DurationMinutes, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, parse_date_input, parse_user_id, require_field,
};

/// Duration as submitted: clients send text in forms and numbers in JSON.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(untagged)]
pub enum DurationField {
    /// Numeric JSON value.
    Number(i64),
    /// Textual form value, coerced at the boundary.
    Text(String),
}

/// Request payload for recording an exercise.
///
/// Accepted as JSON or as an urlencoded form.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct RecordExerciseBody {
    /// What was done.
    #[schema(example = "run")]
    pub description: Option<String>,
    /// Duration in whole minutes, as a number or numeric text.
    #[schema(value_type = String, example = "30")]
    pub duration: Option<DurationField>,
    /// Calendar date; today (UTC) when omitted.
    #[schema(example = "2023-01-10")]
    pub date: Option<String>,
}

/// Response payload for a recorded exercise.
///
/// `_id` carries the owning user's identifier.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ExerciseBody {
    /// The owning user's identifier.
    #[serde(rename = "_id")]
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub id: String,
    /// The owning user's username.
    #[schema(example = "alice")]
    pub username: String,
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

impl From<RecordExerciseResponse> for ExerciseBody {
    fn from(value: RecordExerciseResponse) -> Self {
        Self {
            id: value.user.id().to_string(),
            username: value.user.username().to_string(),
            description: value.entry.description().to_string(),
            duration: value.entry.duration().minutes(),
            date: value.entry.date().format("%a %b %d %Y").to_string(),
        }
    }
}

fn parse_duration(value: DurationField) -> Result<DurationMinutes, Error> {
    let invalid = |raw: String| {
        Error::invalid_request("duration must be a positive number of minutes").with_details(
            json!({
                "field": "duration",
                "value": raw,
                "code": "invalid_duration",
            }),
        )
    };
    let minutes = match value {
        DurationField::Number(number) => u32::try_from(number).map_err(|_| invalid(number.to_string()))?,
        DurationField::Text(raw) => raw
            .trim()
            .parse::<u32>()
            .map_err(|_| invalid(raw.clone()))?,
    };
    DurationMinutes::new(minutes).map_err(|_| invalid(minutes.to_string()))
}

/// Record an exercise entry for an existing user.
#[utoipa::path(
    post,
    path = "/api/users/{id}/exercises",
    params(
        ("id" = String, Path, description = "User identifier")
    ),
    request_body = RecordExerciseBody,
    responses(
        (status = 200, description = "Recorded exercise", body = ExerciseBody),
        (status = 400, description = "Invalid request", body = crate::domain::Error),
        (status = 404, description = "Unknown user", body = crate::domain::Error),
        (status = 503, description = "Store unavailable", body = crate::domain::Error)
    ),
    tags = ["exercises"],
    operation_id = "recordExercise"
)]
#[post("/users/{id}/exercises")]
pub async fn record_exercise(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    body: Either<web::Json<RecordExerciseBody>, web::Form<RecordExerciseBody>>,
) -> ApiResult<web::Json<ExerciseBody>> {
    let user_id = parse_user_id(&path.into_inner())?;
    let body = body.into_inner();

    let description = require_field(body.description, FieldName::new("description"))?;
    let duration = parse_duration(require_field(body.duration, FieldName::new("duration"))?)?;
    let date = parse_date_input(body.date, FieldName::new("date"))?;

    let response = state
        .exercises
        .record_exercise(RecordExerciseRequest {
            user_id,
            description,
            duration,
            date,
        })
        .await?;

    Ok(web::Json(ExerciseBody::from(response)))
}

#[cfg(test)]
#[path = "exercises_tests.rs"]
mod tests;
