use axum::http::StatusCode;
use mentorbook_core::discovery::MentorCard;
use mentorbook_web::handlers::mentor::MentorProfile;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::test_utils::{TestContext, ada, grace, student_header};

async fn with_roster(ctx: TestContext) -> TestContext {
    Mock::given(method("GET"))
        .and(path("/api/mentors"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([ada(), grace()])))
        .mount(&ctx.backend)
        .await;
    ctx
}

fn registration() -> Value {
    json!({
        "name": "Katherine Johnson",
        "email": "katherine@example.com",
        "domain": "Technology, Science",
        "experience": "30",
        "bio": "Orbital mechanics",
        "skills": "Math, Fortran",
        "available_slots": [
            { "date": "2025-03-20", "time": "10:00" },
            { "date": "", "time": "11:00" }
        ]
    })
}

#[rstest]
#[case("", vec!["Ada Lovelace", "Grace Hopper"])]
#[case("?experience=senior", vec!["Ada Lovelace"])]
#[case("?experience=junior", vec!["Grace Hopper"])]
#[case("?availability=true", vec!["Ada Lovelace"])]
#[case("?search=COMPILER", vec!["Grace Hopper"])]
#[case("?domain=Design", vec!["Ada Lovelace"])]
#[case("?domain=Marketing", vec![])]
#[tokio::test]
async fn test_list_mentors_filters(#[case] query: &str, #[case] expected: Vec<&str>) {
    let ctx = with_roster(TestContext::new().await).await;

    let cards = ctx
        .server
        .get(&format!("/api/mentors{}", query))
        .await
        .json::<Vec<MentorCard>>();

    let names: Vec<&str> = cards.iter().map(|card| card.name.as_str()).collect();
    assert_eq!(names, expected);
}

#[tokio::test]
async fn test_list_mentors_card_fields() {
    let ctx = with_roster(TestContext::new().await).await;

    let cards = ctx.server.get("/api/mentors").await.json::<Vec<MentorCard>>();

    assert_eq!(cards[0].initial, Some('A'));
    assert_eq!(cards[0].slot_count, 4);
    assert_eq!(cards[1].slot_count, 0);
}

#[tokio::test]
async fn test_unknown_experience_level_is_bad_request() {
    let ctx = with_roster(TestContext::new().await).await;

    let response = ctx
        .server
        .get("/api/mentors?experience=guru")
        .expect_failure()
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_mentor_profile() {
    let ctx = TestContext::new().await.with_mentor().await;

    let profile = ctx.server.get("/api/mentors/m1").await.json::<MentorProfile>();

    assert_eq!(profile.mentor.name, "Ada Lovelace");
    assert_eq!(profile.email.as_deref(), Some("ada@example.com"));
    assert_eq!(
        profile.headline,
        "Technology & Design Mentor • 12 years of experience"
    );
    let tabs: Vec<(i32, &str)> = profile
        .month_tabs
        .iter()
        .map(|tab| (tab.offset, tab.label.as_str()))
        .collect();
    assert_eq!(tabs, vec![(0, "March 2025"), (1, "April 2025")]);
    assert_eq!(profile.calendar.label, "March 2025");
}

#[tokio::test]
async fn test_mentor_profile_shows_student_selection() {
    let ctx = TestContext::new().await.with_mentor().await;
    let (name, value) = student_header();
    ctx.server
        .put("/api/mentors/m1/selection")
        .add_header(name.clone(), value.clone())
        .json(&json!({ "month_offset": 0, "day": 15 }))
        .await;

    let profile = ctx
        .server
        .get("/api/mentors/m1")
        .add_header(name, value)
        .await
        .json::<MentorProfile>();

    assert_eq!(
        profile.calendar.selection_summary.as_deref(),
        Some("Saturday, March 15 • 14:00")
    );
}

#[tokio::test]
async fn test_missing_mentor_is_not_found() {
    let ctx = TestContext::new().await;
    Mock::given(method("GET"))
        .and(path("/api/mentors/ghost"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "message": "Mentor not found" })))
        .mount(&ctx.backend)
        .await;

    let response = ctx.server.get("/api/mentors/ghost").expect_failure().await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["error"], "Mentor not found");
}

#[tokio::test]
async fn test_register_mentor() {
    let ctx = TestContext::new().await;
    Mock::given(method("POST"))
        .and(path("/api/mentors"))
        .and(wiremock::matchers::body_partial_json(json!({
            "domain": ["Technology", "Science"],
            "experience": 30,
            "avaliableSlots": [{ "date": "2025-03-20", "time": "10:00" }]
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&ctx.backend)
        .await;

    let response = ctx.server.post("/api/mentors").json(&registration()).await;

    response.assert_status(StatusCode::CREATED);
    assert_eq!(
        response.json::<Value>()["message"],
        "Registration successful! You can now log in."
    );
}

#[tokio::test]
async fn test_register_mentor_reports_field_errors() {
    let ctx = TestContext::new().await;

    let response = ctx
        .server
        .post("/api/mentors")
        .json(&json!({ "name": "", "email": "nope", "experience": "many" }))
        .expect_failure()
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body = response.json::<Value>();
    assert_eq!(body["fields"]["name"], "Name is required");
    assert_eq!(body["fields"]["email"], "Email is invalid");
    assert_eq!(
        body["fields"]["experience"],
        "Experience must be a whole number of years"
    );
    assert_eq!(body["fields"]["skills"], "Skills are required");
}

#[rstest]
#[case(409, json!({}), StatusCode::CONFLICT, "Email already exists. Please use a different email.")]
#[case(400, json!({ "message": "Mentor limit reached" }), StatusCode::BAD_GATEWAY, "Mentor limit reached")]
#[case(503, json!({}), StatusCode::BAD_GATEWAY, "Registration failed. Please try again.")]
#[tokio::test]
async fn test_register_mentor_failures(
    #[case] backend_status: u16,
    #[case] body: Value,
    #[case] expected_status: StatusCode,
    #[case] expected_message: &str,
) {
    let ctx = TestContext::new().await;
    Mock::given(method("POST"))
        .and(path("/api/mentors"))
        .respond_with(ResponseTemplate::new(backend_status).set_body_json(body))
        .mount(&ctx.backend)
        .await;

    let response = ctx
        .server
        .post("/api/mentors")
        .json(&registration())
        .expect_failure()
        .await;

    response.assert_status(expected_status);
    assert_eq!(response.json::<Value>()["error"], expected_message);
}
