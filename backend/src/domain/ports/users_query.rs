//! Driving port for user listing.

use async_trait::async_trait;

use crate::domain::{Error, User};

/// Domain use-case port for listing registered users.
#[async_trait]
pub trait UsersQuery: Send + Sync {
    /// Return all registered users, in no particular order.
    async fn list_users(&self) -> Result<Vec<User>, Error>;
}

/// Fixture users query used by tests that do not need persistence.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureUsersQuery;

#[async_trait]
impl UsersQuery for FixtureUsersQuery {
    async fn list_users(&self) -> Result<Vec<User>, Error> {
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fixture_returns_empty_list() {
        let query = FixtureUsersQuery;
        let users = query.list_users().await.expect("fixture list succeeds");
        assert!(users.is_empty());
    }
}
