use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
};
use mentorbook_backend::repositories::{booking, mentor};
use mentorbook_core::{
    calendar::{
        CalendarDay, CalendarMonth, SelectedSlot, Selection, SlotIndex, WEEKDAY_HEADERS,
        project_month,
    },
    errors::MentorError,
    models::{booking::BookingRequest, mentor::Mentor},
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::MonthQuery;
use crate::{
    WebState,
    middleware::{
        error_handling::{AppError, booking_failure},
        session::StudentSession,
    },
};

/// One month of a mentor's availability, ready to render
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarView {
    pub month_offset: i32,
    pub label: String,
    pub headers: Vec<String>,
    pub month: CalendarMonth,
    pub selection: Option<SelectedSlot>,
    /// e.g. `"Saturday, March 15 • 14:00"`
    pub selection_summary: Option<String>,
}

/// Body of a day click
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct SelectDayRequest {
    #[serde(default)]
    pub month_offset: i32,
    pub day: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingConfirmation {
    pub message: String,
    pub booked: SelectedSlot,
    pub calendar: CalendarView,
}

/// Projects `mentor`'s slots for the month `month_offset` away from today.
pub(crate) fn calendar_view(
    state: &WebState,
    mentor: &Mentor,
    month_offset: i32,
    selection: &Selection,
) -> CalendarView {
    let index = SlotIndex::build(&mentor.available_slots);
    let month = project_month(&index, month_offset, state.clock.today());
    let selected = selection.selected().cloned();

    CalendarView {
        month_offset,
        label: month.label(),
        headers: WEEKDAY_HEADERS.iter().map(|h| h.to_string()).collect(),
        month,
        selection_summary: selected.as_ref().map(SelectedSlot::describe),
        selection: selected,
    }
}

#[axum::debug_handler]
pub async fn get_calendar(
    State(state): State<Arc<WebState>>,
    Path(mentor_id): Path<String>,
    Query(query): Query<MonthQuery>,
    session: Option<StudentSession>,
) -> Result<Json<CalendarView>, AppError> {
    let mentor = mentor::get_mentor(&state.backend, &mentor_id).await?;

    let selection = match &session {
        Some(session) => state.selections.get(session.student_id(), &mentor_id).await,
        None => Selection::none(),
    };

    Ok(Json(calendar_view(&state, &mentor, query.month, &selection)))
}

/// Applies a day click to the student's selection.
///
/// Clicking a day without a free slot is not an error: the previous
/// selection is returned unchanged.
#[axum::debug_handler]
pub async fn select_day(
    State(state): State<Arc<WebState>>,
    Path(mentor_id): Path<String>,
    session: StudentSession,
    Json(payload): Json<SelectDayRequest>,
) -> Result<Json<CalendarView>, AppError> {
    let mentor = mentor::get_mentor(&state.backend, &mentor_id).await?;
    let student_id = session.student_id();

    let view = calendar_view(&state, &mentor, payload.month_offset, &Selection::none());
    if !view.month.day(payload.day).is_some_and(CalendarDay::is_selectable) {
        debug!(
            "Day {} of {} is not selectable for mentor {}",
            payload.day, view.label, mentor_id
        );
    }

    let current = state.selections.get(student_id, &mentor_id).await;
    let next = current.click(&view.month, payload.day);
    if next != current {
        state.selections.put(student_id, &mentor_id, next.clone()).await;
    }

    Ok(Json(calendar_view(&state, &mentor, payload.month_offset, &next)))
}

/// Submits the student's current selection as a booking.
///
/// On success the selection is cleared and the calendar is rebuilt from a
/// fresh copy of the mentor. On failure the selection is kept so the
/// student can retry.
#[axum::debug_handler]
pub async fn confirm_booking(
    State(state): State<Arc<WebState>>,
    Path(mentor_id): Path<String>,
    Query(query): Query<MonthQuery>,
    session: StudentSession,
) -> Result<Json<BookingConfirmation>, AppError> {
    let selection = state.selections.get(session.student_id(), &mentor_id).await;
    let selected = selection.selected().cloned().ok_or_else(|| {
        MentorError::Validation("Please select an available day first".to_string())
    })?;

    let request = BookingRequest::from_selection(&mentor_id, session.student_id(), &selected);
    booking::create_booking(&state.backend, &request)
        .await
        .map_err(booking_failure)?;

    info!(
        "Booked {} {} with mentor {} for student {}",
        selected.date,
        selected.time,
        mentor_id,
        session.student_id()
    );
    state.selections.clear(session.student_id(), &mentor_id).await;

    let mentor = mentor::get_mentor(&state.backend, &mentor_id).await?;
    let calendar = calendar_view(&state, &mentor, query.month, &Selection::none());

    Ok(Json(BookingConfirmation {
        message: "Booking confirmed!".to_string(),
        booked: selected,
        calendar,
    }))
}
