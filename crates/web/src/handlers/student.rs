use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode};
use mentorbook_backend::repositories::{booking, student};
use mentorbook_core::{
    errors::MentorError,
    models::{
        booking::BookingHistoryEntry,
        student::{Student, StudentRegistrationForm},
    },
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::{
    WebState,
    middleware::{
        error_handling::{AppError, registration_failure},
        session::StudentSession,
    },
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisteredStudent {
    pub message: String,
    pub student: Student,
}

/// A past booking as the history list shows it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingHistoryItem {
    pub id: String,
    pub mentor_name: String,
    pub mentor_initial: char,
    pub date: Option<chrono::NaiveDate>,
    pub time: String,
}

impl From<BookingHistoryEntry> for BookingHistoryItem {
    fn from(entry: BookingHistoryEntry) -> Self {
        Self {
            mentor_name: entry.mentor_name().to_string(),
            mentor_initial: entry.mentor_initial(),
            id: entry.id,
            date: entry.date,
            time: entry.time,
        }
    }
}

#[axum::debug_handler]
pub async fn register_student(
    State(state): State<Arc<WebState>>,
    Json(form): Json<StudentRegistrationForm>,
) -> Result<(StatusCode, Json<RegisteredStudent>), AppError> {
    let form = form.normalized()?;

    let created = student::create_student(&state.backend, &form)
        .await
        .map_err(registration_failure)?;
    info!("Registered student {}", created.id);

    Ok((
        StatusCode::CREATED,
        Json(RegisteredStudent {
            message: "Registration successful!".to_string(),
            student: created,
        }),
    ))
}

#[axum::debug_handler]
pub async fn booking_history(
    State(state): State<Arc<WebState>>,
    session: StudentSession,
) -> Result<Json<Vec<BookingHistoryItem>>, AppError> {
    let entries = booking::get_booking_history(&state.backend, session.student_id())
        .await
        .map_err(|err| {
            warn!("Booking history for {} unavailable: {}", session.student_id(), err);
            AppError(MentorError::Rejected("Failed to load booking history".to_string()))
        })?;

    Ok(Json(entries.into_iter().map(BookingHistoryItem::from).collect()))
}
