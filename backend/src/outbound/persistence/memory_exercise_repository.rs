//! In-memory exercise store adapter.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::ports::{ExercisePersistenceError, ExerciseRepository};
use crate::domain::{ExerciseEntry, LogFilter, UserId};

/// Exercise store keeping entries in insertion order.
///
/// Filter evaluation happens here: the [`LogFilter`] spec is applied to the
/// user's entries so callers never see unfiltered storage.
#[derive(Debug, Default)]
pub struct MemoryExerciseRepository {
    entries: Mutex<Vec<ExerciseEntry>>,
}

impl MemoryExerciseRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(
        &self,
    ) -> Result<std::sync::MutexGuard<'_, Vec<ExerciseEntry>>, ExercisePersistenceError> {
        self.entries
            .lock()
            .map_err(|_| ExercisePersistenceError::query("exercise store lock poisoned"))
    }
}

#[async_trait]
impl ExerciseRepository for MemoryExerciseRepository {
    async fn insert(&self, entry: &ExerciseEntry) -> Result<(), ExercisePersistenceError> {
        let mut entries = self.lock()?;
        entries.push(entry.clone());
        Ok(())
    }

    async fn query_for_user(
        &self,
        user_id: &UserId,
        filter: &LogFilter,
    ) -> Result<Vec<ExerciseEntry>, ExercisePersistenceError> {
        let entries = self.lock()?;
        let for_user: Vec<ExerciseEntry> = entries
            .iter()
            .filter(|entry| entry.user_id() == *user_id)
            .cloned()
            .collect();
        Ok(filter.apply(for_user))
    }
}
