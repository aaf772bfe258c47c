//! Domain primitives, aggregates, and services.
//!
//! Purpose: define strongly typed entities for the user and exercise
//! stores, the log filtering core, and the services implementing the
//! driving ports. Types are immutable and document their invariants and
//! serde contracts in their own Rustdoc. Inbound adapters map the
//! transport-agnostic [`Error`] to protocol responses.

pub mod error;
pub mod exercise;
pub mod exercise_service;
pub mod log_service;
pub mod logs;
pub mod ports;
pub mod user;
pub mod user_service;

pub use self::error::{Error, ErrorCode};
pub use self::exercise::{
    Description, DurationMinutes, ExerciseEntry, ExerciseId, ExerciseValidationError,
};
pub use self::exercise_service::ExerciseService;
pub use self::log_service::ExerciseLogService;
pub use self::logs::{ExerciseLogEntry, LogFilter};
pub use self::user::{User, UserId, UserValidationError, Username};
pub use self::user_service::UserService;
