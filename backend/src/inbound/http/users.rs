//! User API handlers.
//!
//! ```text
//! POST /api/users {"username":"alice"}
//! GET /api/users
//! ```

use actix_web::{Either, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::User;
use crate::domain::ports::RegisterUserRequest;
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, require_field};

/// Request payload for creating a user.
///
/// Accepted as JSON or as an urlencoded form.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreateUserBody {
    /// Username to register.
    #[schema(example = "alice")]
    pub username: Option<String>,
}

/// User identity as exposed over HTTP.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserBody {
    /// Registered username.
    #[schema(example = "alice")]
    pub username: String,
    /// Stable opaque identifier.
    #[serde(rename = "_id")]
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub id: String,
}

impl From<User> for UserBody {
    fn from(user: User) -> Self {
        Self {
            username: user.username().to_string(),
            id: user.id().to_string(),
        }
    }
}

/// Register a username, or return the existing record for it.
#[utoipa::path(
    post,
    path = "/api/users",
    request_body = CreateUserBody,
    responses(
        (status = 200, description = "Registered user", body = UserBody),
        (status = 400, description = "Invalid request", body = crate::domain::Error),
        (status = 503, description = "Store unavailable", body = crate::domain::Error)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    body: Either<web::Json<CreateUserBody>, web::Form<CreateUserBody>>,
) -> ApiResult<web::Json<UserBody>> {
    let body = body.into_inner();
    let username = require_field(body.username, FieldName::new("username"))?;

    let response = state
        .users
        .register_user(RegisterUserRequest { username })
        .await?;

    Ok(web::Json(UserBody::from(response.user)))
}

/// List all registered users.
#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "Users", body = [UserBody]),
        (status = 503, description = "Store unavailable", body = crate::domain::Error)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<UserBody>>> {
    let users = state.users_query.list_users().await?;
    Ok(web::Json(users.into_iter().map(UserBody::from).collect()))
}

#[cfg(test)]
#[path = "users_tests.rs"]
mod tests;
