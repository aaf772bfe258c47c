//! Tests for the log query engine.

use std::sync::Arc;

use chrono::NaiveDate;

use super::*;
use crate::domain::ports::{MockExerciseRepository, MockUserRepository};
use crate::domain::{
    Description, DurationMinutes, ErrorCode, ExerciseEntry, ExerciseId, LogFilter, User, UserId,
    Username,
};

fn stored_user(name: &str) -> User {
    User::new(
        UserId::random(),
        Username::new(name).expect("valid username"),
    )
}

fn entry(user_id: UserId, description: &str, day: &str) -> ExerciseEntry {
    ExerciseEntry::new(
        ExerciseId::random(),
        user_id,
        Description::new(description).expect("valid description"),
        DurationMinutes::new(30).expect("valid duration"),
        day.parse::<NaiveDate>().expect("valid date literal"),
    )
}

#[tokio::test]
async fn get_log_projects_retained_entries() {
    let user = stored_user("alice");
    let user_id = user.id();
    let stored = vec![entry(user_id, "run", "2023-01-10")];

    let mut user_repo = MockUserRepository::new();
    user_repo
        .expect_find_by_id()
        .times(1)
        .return_once(move |_| Ok(Some(user)));
    let mut exercise_repo = MockExerciseRepository::new();
    exercise_repo
        .expect_query_for_user()
        .times(1)
        .return_once(move |_, _| Ok(stored));

    let service = ExerciseLogService::new(Arc::new(user_repo), Arc::new(exercise_repo));
    let response = service
        .get_log(GetExerciseLogRequest {
            user_id,
            filter: LogFilter::default(),
        })
        .await
        .expect("log read succeeds");

    assert_eq!(response.username.as_ref(), "alice");
    assert_eq!(response.count, 1);
    assert_eq!(response.entries.len(), 1);
    assert_eq!(response.entries[0].description().as_ref(), "run");
    assert_eq!(response.entries[0].date_display(), "Tue Jan 10 2023");
}

#[tokio::test]
async fn get_log_count_always_matches_entry_count() {
    let user = stored_user("alice");
    let user_id = user.id();
    let stored = vec![
        entry(user_id, "run", "2023-01-10"),
        entry(user_id, "swim", "2023-01-11"),
    ];

    let mut user_repo = MockUserRepository::new();
    user_repo
        .expect_find_by_id()
        .times(1)
        .return_once(move |_| Ok(Some(user)));
    let mut exercise_repo = MockExerciseRepository::new();
    exercise_repo
        .expect_query_for_user()
        .times(1)
        .return_once(move |_, _| Ok(stored));

    let service = ExerciseLogService::new(Arc::new(user_repo), Arc::new(exercise_repo));
    let response = service
        .get_log(GetExerciseLogRequest {
            user_id,
            filter: LogFilter::default(),
        })
        .await
        .expect("log read succeeds");

    assert_eq!(response.count, response.entries.len());
}

#[tokio::test]
async fn get_log_passes_filter_through_to_the_store() {
    let user = stored_user("alice");
    let user_id = user.id();
    let from = "2023-01-01".parse::<NaiveDate>().expect("valid date");
    let expected = LogFilter::new(Some(from), None, Some(5));
    let seen = expected.clone();

    let mut user_repo = MockUserRepository::new();
    user_repo
        .expect_find_by_id()
        .times(1)
        .return_once(move |_| Ok(Some(user)));
    let mut exercise_repo = MockExerciseRepository::new();
    exercise_repo
        .expect_query_for_user()
        .times(1)
        .withf(move |_, filter| *filter == seen)
        .return_once(|_, _| Ok(Vec::new()));

    let service = ExerciseLogService::new(Arc::new(user_repo), Arc::new(exercise_repo));
    let response = service
        .get_log(GetExerciseLogRequest {
            user_id,
            filter: expected,
        })
        .await
        .expect("log read succeeds");

    assert_eq!(response.count, 0);
}

#[tokio::test]
async fn get_log_reports_missing_user_instead_of_empty_log() {
    let mut user_repo = MockUserRepository::new();
    user_repo
        .expect_find_by_id()
        .times(1)
        .return_once(|_| Ok(None));
    let mut exercise_repo = MockExerciseRepository::new();
    exercise_repo.expect_query_for_user().times(0);

    let service = ExerciseLogService::new(Arc::new(user_repo), Arc::new(exercise_repo));
    let error = service
        .get_log(GetExerciseLogRequest {
            user_id: UserId::random(),
            filter: LogFilter::default(),
        })
        .await
        .expect_err("missing user");

    assert_eq!(error.code(), ErrorCode::NotFound);
}

#[tokio::test]
async fn get_log_maps_connection_error_to_service_unavailable() {
    let user = stored_user("alice");
    let user_id = user.id();

    let mut user_repo = MockUserRepository::new();
    user_repo
        .expect_find_by_id()
        .times(1)
        .return_once(move |_| Ok(Some(user)));
    let mut exercise_repo = MockExerciseRepository::new();
    exercise_repo
        .expect_query_for_user()
        .times(1)
        .return_once(|_, _| Err(ExercisePersistenceError::connection("store offline")));

    let service = ExerciseLogService::new(Arc::new(user_repo), Arc::new(exercise_repo));
    let error = service
        .get_log(GetExerciseLogRequest {
            user_id,
            filter: LogFilter::default(),
        })
        .await
        .expect_err("service unavailable");

    assert_eq!(error.code(), ErrorCode::ServiceUnavailable);
}
