//! User registration and listing services.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use crate::domain::ports::{
    RegisterUserRequest, RegisterUserResponse, UserCommand, UserPersistenceError, UserRepository,
    UsersQuery,
};
use crate::domain::{Error, User, UserId, Username};

fn map_repository_error(error: UserPersistenceError) -> Error {
    match error {
        UserPersistenceError::Connection { message } => {
            Error::service_unavailable(format!("user repository unavailable: {message}"))
        }
        UserPersistenceError::Query { message } => {
            Error::internal(format!("user repository error: {message}"))
        }
        UserPersistenceError::DuplicateUsername { username } => {
            // Callers that can recover match on the port error before mapping.
            Error::internal(format!("unhandled duplicate username: {username}"))
        }
    }
}

/// User service implementing the registration and listing driving ports.
#[derive(Clone)]
pub struct UserService<R> {
    user_repo: Arc<R>,
}

impl<R> UserService<R> {
    /// Create a new service with the user repository.
    pub fn new(user_repo: Arc<R>) -> Self {
        Self { user_repo }
    }
}

#[async_trait]
impl<R> UserCommand for UserService<R>
where
    R: UserRepository,
{
    async fn register_user(
        &self,
        request: RegisterUserRequest,
    ) -> Result<RegisterUserResponse, Error> {
        let username = Username::new(request.username)
            .map_err(|err| Error::invalid_request(format!("invalid username: {err}")))?;

        // Advisory pre-check: registration is idempotent, so an existing
        // record is returned as-is. The store's uniqueness constraint is
        // the authority when two registrations race past this point.
        if let Some(existing) = self
            .user_repo
            .find_by_username(username.as_ref())
            .await
            .map_err(map_repository_error)?
        {
            return Ok(RegisterUserResponse { user: existing });
        }

        let user = User::new(UserId::random(), username.clone());
        match self.user_repo.insert(&user).await {
            Ok(()) => Ok(RegisterUserResponse { user }),
            Err(UserPersistenceError::DuplicateUsername { .. }) => {
                warn!(username = %username, "registration raced a concurrent insert");
                let stored = self
                    .user_repo
                    .find_by_username(username.as_ref())
                    .await
                    .map_err(map_repository_error)?
                    .ok_or_else(|| {
                        Error::internal(format!(
                            "user {username} missing after duplicate-username insert"
                        ))
                    })?;
                Ok(RegisterUserResponse { user: stored })
            }
            Err(other) => Err(map_repository_error(other)),
        }
    }
}

#[async_trait]
impl<R> UsersQuery for UserService<R>
where
    R: UserRepository,
{
    async fn list_users(&self) -> Result<Vec<User>, Error> {
        self.user_repo
            .list_all()
            .await
            .map_err(map_repository_error)
    }
}

#[cfg(test)]
#[path = "user_service_tests.rs"]
mod tests;
