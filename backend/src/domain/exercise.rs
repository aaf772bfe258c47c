//! Exercise entry model.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::UserId;

/// Validation errors returned by exercise entry constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExerciseValidationError {
    /// Description was empty once trimmed of whitespace.
    EmptyDescription,
    /// Duration must be at least one minute.
    ZeroDuration,
}

impl fmt::Display for ExerciseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "description must not be empty"),
            Self::ZeroDuration => write!(f, "duration must be at least one minute"),
        }
    }
}

impl std::error::Error for ExerciseValidationError {}

/// Opaque exercise entry identifier backed by a UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExerciseId(Uuid);

impl ExerciseId {
    /// Generate a new random [`ExerciseId`].
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for ExerciseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What the user did, in their own words.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Description(String);

impl Description {
    /// Validate and construct a [`Description`] from owned input.
    pub fn new(description: impl Into<String>) -> Result<Self, ExerciseValidationError> {
        Self::from_owned(description.into())
    }

    fn from_owned(description: String) -> Result<Self, ExerciseValidationError> {
        let trimmed = description.trim();
        if trimmed.is_empty() {
            return Err(ExerciseValidationError::EmptyDescription);
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for Description {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<Description> for String {
    fn from(value: Description) -> Self {
        value.0
    }
}

impl TryFrom<String> for Description {
    type Error = ExerciseValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// Exercise duration in whole minutes.
///
/// ## Invariants
/// - At least one minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct DurationMinutes(u32);

impl DurationMinutes {
    /// Validate and construct a [`DurationMinutes`].
    pub fn new(minutes: u32) -> Result<Self, ExerciseValidationError> {
        if minutes == 0 {
            return Err(ExerciseValidationError::ZeroDuration);
        }
        Ok(Self(minutes))
    }

    /// Duration in whole minutes.
    pub fn minutes(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for DurationMinutes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<DurationMinutes> for u32 {
    fn from(value: DurationMinutes) -> Self {
        value.0
    }
}

impl TryFrom<u32> for DurationMinutes {
    type Error = ExerciseValidationError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// One logged exercise for a user.
///
/// ## Invariants
/// - `user_id` referenced a registered user at write time.
/// - Immutable after creation; entries are never deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseEntry {
    id: ExerciseId,
    user_id: UserId,
    description: Description,
    duration: DurationMinutes,
    date: NaiveDate,
}

impl ExerciseEntry {
    /// Build a new [`ExerciseEntry`] from validated components.
    pub fn new(
        id: ExerciseId,
        user_id: UserId,
        description: Description,
        duration: DurationMinutes,
        date: NaiveDate,
    ) -> Self {
        Self {
            id,
            user_id,
            description,
            duration,
            date,
        }
    }

    /// Stable entry identifier.
    pub fn id(&self) -> ExerciseId {
        self.id
    }

    /// Owning user.
    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    /// What was done.
    pub fn description(&self) -> &Description {
        &self.description
    }

    /// How long it took.
    pub fn duration(&self) -> DurationMinutes {
        self.duration
    }

    /// Calendar date the exercise took place.
    pub fn date(&self) -> NaiveDate {
        self.date
    }
}
