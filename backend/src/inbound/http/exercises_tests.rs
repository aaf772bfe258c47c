//! Tests for the exercise API handlers.

use actix_web::{App, http::StatusCode, test as actix_test, web};
use chrono::Utc;
use serde_json::Value;

use super::*;
use crate::inbound::http::test_utils::memory_state;
use crate::inbound::http::users::create_user;

fn test_app() -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new().app_data(memory_state()).service(
        web::scope("/api")
            .service(create_user)
            .service(record_exercise),
    )
}

async fn register(
    app: &impl actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    >,
    username: &str,
) -> String {
    let request = actix_test::TestRequest::post()
        .uri("/api/users")
        .set_json(serde_json::json!({ "username": username }))
        .to_request();
    let response = actix_test::call_service(app, request).await;
    assert!(response.status().is_success());
    let body: Value = actix_test::read_body_json(response).await;
    body.get("_id")
        .and_then(Value::as_str)
        .expect("_id present")
        .to_owned()
}

#[actix_web::test]
async fn record_exercise_echoes_user_identity_and_entry() {
    let app = actix_test::init_service(test_app()).await;
    let user_id = register(&app, "alice").await;

    let request = actix_test::TestRequest::post()
        .uri(&format!("/api/users/{user_id}/exercises"))
        .set_json(serde_json::json!({
            "description": "run",
            "duration": "30",
            "date": "2023-01-10",
        }))
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert!(response.status().is_success());

    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(
        body.get("_id").and_then(Value::as_str),
        Some(user_id.as_str())
    );
    assert_eq!(body.get("username").and_then(Value::as_str), Some("alice"));
    assert_eq!(body.get("description").and_then(Value::as_str), Some("run"));
    assert_eq!(body.get("duration").and_then(Value::as_u64), Some(30));
    assert_eq!(
        body.get("date").and_then(Value::as_str),
        Some("Tue Jan 10 2023")
    );
}

#[actix_web::test]
async fn record_exercise_accepts_numeric_duration() {
    let app = actix_test::init_service(test_app()).await;
    let user_id = register(&app, "alice").await;

    let request = actix_test::TestRequest::post()
        .uri(&format!("/api/users/{user_id}/exercises"))
        .set_json(serde_json::json!({ "description": "run", "duration": 45 }))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert!(response.status().is_success());
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body.get("duration").and_then(Value::as_u64), Some(45));
}

#[actix_web::test]
async fn record_exercise_accepts_form_encoding() {
    let app = actix_test::init_service(test_app()).await;
    let user_id = register(&app, "alice").await;

    let request = actix_test::TestRequest::post()
        .uri(&format!("/api/users/{user_id}/exercises"))
        .set_form([
            ("description", "swim"),
            ("duration", "20"),
            ("date", ""),
        ])
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert!(response.status().is_success());
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body.get("description").and_then(Value::as_str), Some("swim"));
}

#[actix_web::test]
async fn record_exercise_defaults_date_to_today() {
    let app = actix_test::init_service(test_app()).await;
    let user_id = register(&app, "alice").await;

    let request = actix_test::TestRequest::post()
        .uri(&format!("/api/users/{user_id}/exercises"))
        .set_json(serde_json::json!({ "description": "run", "duration": "30" }))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    let body: Value = actix_test::read_body_json(response).await;
    let expected = Utc::now().date_naive().format("%a %b %d %Y").to_string();
    assert_eq!(
        body.get("date").and_then(Value::as_str),
        Some(expected.as_str())
    );
}

#[actix_web::test]
async fn record_exercise_rejects_unknown_user() {
    let app = actix_test::init_service(test_app()).await;
    let missing = uuid::Uuid::new_v4();

    let request = actix_test::TestRequest::post()
        .uri(&format!("/api/users/{missing}/exercises"))
        .set_json(serde_json::json!({ "description": "run", "duration": "30" }))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn record_exercise_rejects_malformed_user_id() {
    let app = actix_test::init_service(test_app()).await;

    let request = actix_test::TestRequest::post()
        .uri("/api/users/not-an-id/exercises")
        .set_json(serde_json::json!({ "description": "run", "duration": "30" }))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(
        body.get("details").and_then(|d| d.get("code")),
        Some(&Value::String("invalid_user_id".to_owned()))
    );
}

#[actix_web::test]
async fn record_exercise_rejects_non_numeric_duration() {
    let app = actix_test::init_service(test_app()).await;
    let user_id = register(&app, "alice").await;

    let request = actix_test::TestRequest::post()
        .uri(&format!("/api/users/{user_id}/exercises"))
        .set_json(serde_json::json!({ "description": "run", "duration": "soon" }))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(
        body.get("details").and_then(|d| d.get("code")),
        Some(&Value::String("invalid_duration".to_owned()))
    );
}

#[actix_web::test]
async fn record_exercise_rejects_zero_duration() {
    let app = actix_test::init_service(test_app()).await;
    let user_id = register(&app, "alice").await;

    let request = actix_test::TestRequest::post()
        .uri(&format!("/api/users/{user_id}/exercises"))
        .set_json(serde_json::json!({ "description": "run", "duration": 0 }))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn record_exercise_requires_description_and_duration() {
    let app = actix_test::init_service(test_app()).await;
    let user_id = register(&app, "alice").await;

    let request = actix_test::TestRequest::post()
        .uri(&format!("/api/users/{user_id}/exercises"))
        .set_json(serde_json::json!({ "duration": "30" }))
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let request = actix_test::TestRequest::post()
        .uri(&format!("/api/users/{user_id}/exercises"))
        .set_json(serde_json::json!({ "description": "run" }))
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(
        body.get("details").and_then(|d| d.get("field")),
        Some(&Value::String("duration".to_owned()))
    );
}

#[actix_web::test]
async fn record_exercise_rejects_malformed_date() {
    let app = actix_test::init_service(test_app()).await;
    let user_id = register(&app, "alice").await;

    let request = actix_test::TestRequest::post()
        .uri(&format!("/api/users/{user_id}/exercises"))
        .set_json(serde_json::json!({
            "description": "run",
            "duration": "30",
            "date": "next tuesday",
        }))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(
        body.get("details").and_then(|d| d.get("code")),
        Some(&Value::String("invalid_date".to_owned()))
    );
}
