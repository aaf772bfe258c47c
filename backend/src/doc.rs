//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! specification for the REST API. It registers all HTTP endpoints from the
//! inbound layer (users, exercises, logs, health, pages) together with the
//! request and response body schemas. The generated specification backs
//! Swagger UI in debug builds.

use utoipa::OpenApi;

use crate::domain::{Error, ErrorCode};
use crate::inbound::http::exercises::{ExerciseBody, RecordExerciseBody};
use crate::inbound::http::logs::{ExerciseLogBody, LogEntryBody};
use crate::inbound::http::users::{CreateUserBody, UserBody};

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Exercise tracker API",
        description = "HTTP interface for registering users and logging timed exercises."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::pages::index,
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::list_users,
        crate::inbound::http::exercises::record_exercise,
        crate::inbound::http::logs::get_exercise_log,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        CreateUserBody,
        UserBody,
        RecordExerciseBody,
        ExerciseBody,
        ExerciseLogBody,
        LogEntryBody,
        Error,
        ErrorCode,
    )),
    tags(
        (name = "users", description = "Registration and listing"),
        (name = "exercises", description = "Recording timed exercises"),
        (name = "logs", description = "Filtered activity logs"),
        (name = "health", description = "Endpoints for health checks"),
        (name = "pages", description = "Static pages")
    )
)]
pub struct ApiDoc;
