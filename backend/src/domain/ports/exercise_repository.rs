//! Port for exercise entry persistence and filtered reads.

use async_trait::async_trait;

use crate::domain::{ExerciseEntry, LogFilter, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by exercise repository adapters.
    pub enum ExercisePersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "exercise repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "exercise repository query failed: {message}",
    }
}

/// Port for writing exercise entries and reading them back filtered.
///
/// Adapters evaluate the [`LogFilter`] spec themselves so callers stay
/// decoupled from whatever query mechanism backs the store.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExerciseRepository: Send + Sync {
    /// Persist one exercise entry.
    async fn insert(&self, entry: &ExerciseEntry) -> Result<(), ExercisePersistenceError>;

    /// Entries for a user satisfying the filter, date-ascending.
    async fn query_for_user(
        &self,
        user_id: &UserId,
        filter: &LogFilter,
    ) -> Result<Vec<ExerciseEntry>, ExercisePersistenceError>;
}

/// Fixture implementation for tests that do not exercise entry persistence.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureExerciseRepository;

#[async_trait]
impl ExerciseRepository for FixtureExerciseRepository {
    async fn insert(&self, _entry: &ExerciseEntry) -> Result<(), ExercisePersistenceError> {
        Ok(())
    }

    async fn query_for_user(
        &self,
        _user_id: &UserId,
        _filter: &LogFilter,
    ) -> Result<Vec<ExerciseEntry>, ExercisePersistenceError> {
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use super::*;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn fixture_query_returns_empty() {
        let repo = FixtureExerciseRepository;
        let entries = repo
            .query_for_user(&UserId::random(), &LogFilter::default())
            .await
            .expect("fixture query succeeds");
        assert!(entries.is_empty());
    }

    #[rstest]
    fn query_error_formats_message() {
        let err = ExercisePersistenceError::query("store offline");
        assert!(err.to_string().contains("store offline"));
    }
}
