//! In-process document-store adapters.
//!
//! The persistence engine is an external collaborator; these adapters keep
//! both collections in process memory behind the repository ports. The
//! user adapter owns the username uniqueness constraint: the probe and the
//! insert happen under one lock, so it stays authoritative when two
//! registrations race.

mod memory_exercise_repository;
mod memory_user_repository;

pub use memory_exercise_repository::MemoryExerciseRepository;
pub use memory_user_repository::MemoryUserRepository;
