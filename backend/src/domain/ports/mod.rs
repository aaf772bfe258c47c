//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod exercise_command;
mod exercise_log_query;
mod exercise_repository;
mod user_command;
mod user_repository;
mod users_query;

pub use exercise_command::{
    ExerciseCommand, FixtureExerciseCommand, RecordExerciseRequest, RecordExerciseResponse,
};
pub use exercise_log_query::{
    ExerciseLogQuery, ExerciseLogResponse, FixtureExerciseLogQuery, GetExerciseLogRequest,
};
#[cfg(test)]
pub use exercise_repository::MockExerciseRepository;
pub use exercise_repository::{
    ExercisePersistenceError, ExerciseRepository, FixtureExerciseRepository,
};
pub use user_command::{FixtureUserCommand, RegisterUserRequest, RegisterUserResponse, UserCommand};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{FixtureUserRepository, UserPersistenceError, UserRepository};
pub use users_query::{FixtureUsersQuery, UsersQuery};
