//! Driving port for user registration.
//!
//! Inbound adapters use this port to register users without depending on
//! repository details.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{Error, User, UserId, Username};

/// Request to register a username.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserRequest {
    /// Raw username as submitted; validated by the service.
    pub username: String,
}

/// Response for a registration.
///
/// Registration is idempotent: re-registering an existing username returns
/// the stored record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserResponse {
    /// The newly created or previously stored user.
    pub user: User,
}

/// Driving port for user registration.
#[async_trait]
pub trait UserCommand: Send + Sync {
    /// Register a username, returning the stored user record.
    async fn register_user(
        &self,
        request: RegisterUserRequest,
    ) -> Result<RegisterUserResponse, Error>;
}

/// Fixture command implementation for tests that do not need persistence.
///
/// Echoes the submitted username back with a fresh identifier.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureUserCommand;

#[async_trait]
impl UserCommand for FixtureUserCommand {
    async fn register_user(
        &self,
        request: RegisterUserRequest,
    ) -> Result<RegisterUserResponse, Error> {
        let username = Username::new(request.username)
            .map_err(|err| Error::invalid_request(format!("invalid username: {err}")))?;
        Ok(RegisterUserResponse {
            user: User::new(UserId::random(), username),
        })
    }
}
