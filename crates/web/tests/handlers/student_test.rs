use axum::http::StatusCode;
use chrono::NaiveDate;
use mentorbook_web::handlers::student::{BookingHistoryItem, RegisteredStudent};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::test_utils::{TestContext, student_header};

#[tokio::test]
async fn test_register_student_trims_input() {
    let ctx = TestContext::new().await;
    Mock::given(method("POST"))
        .and(path("/api/students"))
        .and(body_json(json!({ "name": "Sam Carter", "email": "sam@example.com" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "studentData": { "_id": "stu-9", "name": "Sam Carter", "email": "sam@example.com" }
        })))
        .expect(1)
        .mount(&ctx.backend)
        .await;

    let response = ctx
        .server
        .post("/api/students")
        .json(&json!({ "name": "  Sam Carter ", "email": " sam@example.com" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let registered = response.json::<RegisteredStudent>();
    assert_eq!(registered.student.id, "stu-9");
}

#[tokio::test]
async fn test_register_student_invalid_email() {
    let ctx = TestContext::new().await;

    let response = ctx
        .server
        .post("/api/students")
        .json(&json!({ "name": "Sam", "email": "sam@example" }))
        .expect_failure()
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["fields"]["email"], "Email is invalid");
}

#[tokio::test]
async fn test_register_student_duplicate_email() {
    let ctx = TestContext::new().await;
    Mock::given(method("POST"))
        .and(path("/api/students"))
        .respond_with(ResponseTemplate::new(409))
        .mount(&ctx.backend)
        .await;

    let response = ctx
        .server
        .post("/api/students")
        .json(&json!({ "name": "Sam", "email": "sam@example.com" }))
        .expect_failure()
        .await;

    response.assert_status(StatusCode::CONFLICT);
    assert_eq!(
        response.json::<Value>()["error"],
        "Email already exists. Please use a different email."
    );
}

#[tokio::test]
async fn test_booking_history() {
    let ctx = TestContext::new().await;
    Mock::given(method("GET"))
        .and(path("/api/bookings/student/stu-1/history"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "bookings": [
                { "_id": "b1", "mentorId": { "name": "Ada Lovelace" }, "date": "2025-03-15T00:00:00.000Z", "time": "14:00" },
                { "_id": "b2", "mentorId": null, "date": "later", "time": "09:00" }
            ]
        })))
        .mount(&ctx.backend)
        .await;

    let (name, value) = student_header();
    let history = ctx
        .server
        .get("/api/students/me/bookings")
        .add_header(name, value)
        .await
        .json::<Vec<BookingHistoryItem>>();

    assert_eq!(history.len(), 2);
    assert_eq!(history[0].mentor_name, "Ada Lovelace");
    assert_eq!(history[0].mentor_initial, 'A');
    assert_eq!(history[0].date, NaiveDate::from_ymd_opt(2025, 3, 15));
    assert_eq!(history[1].mentor_name, "Mentor");
    assert_eq!(history[1].mentor_initial, 'M');
    assert_eq!(history[1].date, None);
}

#[tokio::test]
async fn test_booking_history_requires_student() {
    let ctx = TestContext::new().await;

    let response = ctx
        .server
        .get("/api/students/me/bookings")
        .expect_failure()
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_booking_history_failure_message() {
    let ctx = TestContext::new().await;
    Mock::given(method("GET"))
        .and(path("/api/bookings/student/stu-1/history"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&ctx.backend)
        .await;

    let (name, value) = student_header();
    let response = ctx
        .server
        .get("/api/students/me/bookings")
        .add_header(name, value)
        .expect_failure()
        .await;

    response.assert_status(StatusCode::BAD_GATEWAY);
    assert_eq!(response.json::<Value>()["error"], "Failed to load booking history");
}
