use std::time::Duration;

use axum::http::{HeaderName, HeaderValue, StatusCode};
use chrono::NaiveDate;
use mentorbook_web::handlers::calendar::{BookingConfirmation, CalendarView};
use mentorbook_web::selection_store::SelectionStore;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::test_utils::{TestContext, student_header};

fn march(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, day).unwrap()
}

async fn click(ctx: &TestContext, day: u32) -> CalendarView {
    let (name, value) = student_header();
    ctx.server
        .put("/api/mentors/m1/selection")
        .add_header(name, value)
        .json(&json!({ "month_offset": 0, "day": day }))
        .await
        .json::<CalendarView>()
}

async fn calendar(ctx: &TestContext) -> CalendarView {
    let (name, value) = student_header();
    ctx.server
        .get("/api/mentors/m1/calendar")
        .add_header(name, value)
        .await
        .json::<CalendarView>()
}

#[tokio::test]
async fn test_calendar_projects_current_month() {
    let ctx = TestContext::new().await.with_mentor().await;

    let view = ctx.server.get("/api/mentors/m1/calendar").await.json::<CalendarView>();

    assert_eq!(view.label, "March 2025");
    assert_eq!(view.headers, vec!["SU", "M", "TU", "W", "T", "F", "S"]);
    assert_eq!(view.month.first_weekday, 6);
    assert_eq!(view.month.days_in_month, 31);
    assert_eq!(view.month.cells().count(), 37);

    let free = view.month.day(15).expect("day 15");
    assert!(free.has_slot && !free.is_booked);
    assert_eq!(free.time.as_deref(), Some("14:00"));

    let booked = view.month.day(10).expect("day 10");
    assert!(booked.has_slot && booked.is_booked);

    assert!(!view.month.day(16).expect("day 16").has_slot);
    assert_eq!(view.selection, None);
}

#[tokio::test]
async fn test_calendar_skips_damaged_slots() {
    let ctx = TestContext::new().await;
    Mock::given(method("GET"))
        .and(path("/api/mentors/m9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "_id": "m9",
            "name": "Hedy Lamarr",
            "avaliableSlots": [
                { "_id": "ok", "date": "2025-03-20", "time": "15:00" },
                { "_id": "null", "date": null, "time": "09:00" },
                { "_id": "missing", "time": "10:00", "booked": null },
                { "_id": "object", "date": { "when": "soon" } }
            ]
        })))
        .mount(&ctx.backend)
        .await;

    let response = ctx.server.get("/api/mentors/m9/calendar").await;

    response.assert_status_ok();
    let view = response.json::<CalendarView>();
    let slots: Vec<u32> = view
        .month
        .cells()
        .filter(|cell| cell.has_slot)
        .filter_map(|cell| cell.day)
        .collect();
    assert_eq!(slots, vec![20]);
}

#[tokio::test]
async fn test_calendar_next_month() {
    let ctx = TestContext::new().await.with_mentor().await;

    let view = ctx
        .server
        .get("/api/mentors/m1/calendar")
        .add_query_param("month", 1)
        .await
        .json::<CalendarView>();

    assert_eq!(view.label, "April 2025");
    assert_eq!(view.month_offset, 1);
    assert_eq!(view.month.first_weekday, 2);
    assert!(view.month.day(2).expect("day 2").has_slot);
    assert!(!view.month.day(15).expect("day 15").has_slot);
}

#[test_log::test(tokio::test)]
async fn test_selection_ignores_unavailable_days() {
    let ctx = TestContext::new().await.with_mentor().await;

    let first = click(&ctx, 15).await;
    let selected = first.selection.clone().expect("day 15 selected");
    assert_eq!(selected.date, march(15));
    assert_eq!(selected.time, "14:00");
    assert_eq!(selected.slot_id.as_deref(), Some("s15"));
    assert_eq!(first.selection_summary.as_deref(), Some("Saturday, March 15 • 14:00"));

    // No slot on the 16th
    assert_eq!(click(&ctx, 16).await.selection, first.selection);
    // Booked on the 10th
    assert_eq!(click(&ctx, 10).await.selection, first.selection);
    // Past the end of the month
    assert_eq!(click(&ctx, 40).await.selection, first.selection);
    // Same day again
    assert_eq!(click(&ctx, 15).await.selection, first.selection);

    assert_eq!(calendar(&ctx).await.selection, first.selection);
}

#[tokio::test]
async fn test_selection_requires_student() {
    let ctx = TestContext::new().await.with_mentor().await;

    let response = ctx
        .server
        .put("/api/mentors/m1/selection")
        .json(&json!({ "month_offset": 0, "day": 15 }))
        .expect_failure()
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_selection_is_per_student() {
    let ctx = TestContext::new().await.with_mentor().await;
    click(&ctx, 15).await;

    let anonymous = ctx.server.get("/api/mentors/m1/calendar").await.json::<CalendarView>();
    let other = ctx
        .server
        .get("/api/mentors/m1/calendar")
        .add_header(
            HeaderName::from_static("x-student-id"),
            HeaderValue::from_static("stu-2"),
        )
        .await
        .json::<CalendarView>();

    assert_eq!(anonymous.selection, None);
    assert_eq!(other.selection, None);
}

#[test_log::test(tokio::test)]
async fn test_confirm_booking_clears_selection() {
    let ctx = TestContext::new().await.with_mentor().await;

    Mock::given(method("POST"))
        .and(path("/api/bookings"))
        .and(body_json(json!({
            "mentorId": "m1",
            "studentId": "stu-1",
            "date": "2025-03-15",
            "time": "14:00"
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&ctx.backend)
        .await;

    click(&ctx, 15).await;

    let (name, value) = student_header();
    let confirmation = ctx
        .server
        .post("/api/mentors/m1/bookings")
        .add_header(name, value)
        .await
        .json::<BookingConfirmation>();

    assert_eq!(confirmation.message, "Booking confirmed!");
    assert_eq!(confirmation.booked.date, march(15));
    assert_eq!(confirmation.calendar.selection, None);
    assert_eq!(calendar(&ctx).await.selection, None);
}

#[tokio::test]
async fn test_conflicting_booking_keeps_selection() {
    let ctx = TestContext::new().await.with_mentor().await;

    Mock::given(method("POST"))
        .and(path("/api/bookings"))
        .respond_with(
            ResponseTemplate::new(409).set_body_json(json!({ "message": "Slot already booked" })),
        )
        .mount(&ctx.backend)
        .await;

    let selected = click(&ctx, 15).await.selection;

    let (name, value) = student_header();
    let response = ctx
        .server
        .post("/api/mentors/m1/bookings")
        .add_header(name, value)
        .expect_failure()
        .await;

    response.assert_status(StatusCode::CONFLICT);
    assert_eq!(
        response.json::<Value>()["error"],
        "This slot has just been booked. Please choose another day."
    );
    assert_eq!(calendar(&ctx).await.selection, selected);
}

#[tokio::test]
async fn test_failed_booking_shows_generic_message() {
    let ctx = TestContext::new().await.with_mentor().await;

    Mock::given(method("POST"))
        .and(path("/api/bookings"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&ctx.backend)
        .await;

    let selected = click(&ctx, 15).await.selection;

    let (name, value) = student_header();
    let response = ctx
        .server
        .post("/api/mentors/m1/bookings")
        .add_header(name, value)
        .expect_failure()
        .await;

    response.assert_status(StatusCode::BAD_GATEWAY);
    assert_eq!(response.json::<Value>()["error"], "Booking failed. Please try again.");
    assert!(selected.is_some());
    assert_eq!(calendar(&ctx).await.selection, selected);
}

#[tokio::test]
async fn test_booking_without_selection_is_rejected() {
    let ctx = TestContext::new().await.with_mentor().await;

    let (name, value) = student_header();
    let response = ctx
        .server
        .post("/api/mentors/m1/bookings")
        .add_header(name, value)
        .expect_failure()
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_selection_store_stays_bounded() {
    let ctx = TestContext::with_store(SelectionStore::new(Duration::from_secs(60), 2))
        .await
        .with_mentor()
        .await;

    for student in ["stu-a", "stu-b", "stu-c", "stu-d"] {
        let view = ctx
            .server
            .put("/api/mentors/m1/selection")
            .add_header(
                HeaderName::from_static("x-student-id"),
                HeaderValue::from_str(student).unwrap(),
            )
            .json(&json!({ "month_offset": 0, "day": 15 }))
            .await
            .json::<CalendarView>();
        assert!(view.selection.is_some());
        tokio::time::sleep(Duration::from_millis(5)).await;
    }

    assert_eq!(ctx.state.selections.len().await, 2);
    assert!(ctx.state.selections.get("stu-a", "m1").await.is_empty());
    assert!(!ctx.state.selections.get("stu-d", "m1").await.is_empty());
}

#[tokio::test]
async fn test_unselectable_click_on_other_mentor_keeps_selection() {
    let ctx = TestContext::new().await.with_mentor().await;
    Mock::given(method("GET"))
        .and(path("/api/mentors/m2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(crate::test_utils::grace()))
        .mount(&ctx.backend)
        .await;
    let selected = click(&ctx, 15).await.selection;

    let (name, value) = student_header();
    ctx.server
        .put("/api/mentors/m2/selection")
        .add_header(name, value)
        .json(&json!({ "month_offset": 0, "day": 15 }))
        .await;

    assert_eq!(calendar(&ctx).await.selection, selected);
}

#[tokio::test]
async fn test_reclicking_selected_day_keeps_selection() {
    let ctx = TestContext::new().await.with_mentor().await;

    let first = click(&ctx, 15).await;
    let second = click(&ctx, 15).await;

    assert_eq!(second.selection, first.selection);
    assert_eq!(second.selection.map(|s| s.date), Some(march(15)));
    assert_eq!(ctx.state.selections.len().await, 1);
}
