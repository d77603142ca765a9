//! # Error Handling Middleware
//!
//! This module maps Mentorbook's domain errors to HTTP status codes and JSON
//! error bodies, so every handler reports failures the same way.
//!
//! Backend failures (`Rejected`, `Transport`) surface as `502 Bad Gateway`:
//! the front-end is healthy but the service behind it refused or could not
//! be reached. Handlers that need a user-facing wording replace the message
//! with one of the helpers at the bottom of this module before returning.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use mentorbook_core::errors::MentorError;
use serde_json::json;

/// Application error wrapper that provides HTTP status code mapping
///
/// # Example
///
/// ```
/// use axum::Json;
/// use mentorbook_core::errors::MentorError;
/// use mentorbook_web::middleware::error_handling::AppError;
///
/// async fn handler(day: u32) -> Result<Json<u32>, AppError> {
///     if day == 0 {
///         return Err(AppError(MentorError::Validation("Day must be positive".to_string())));
///     }
///     Ok(Json(day))
/// }
/// # fn main() {}
/// ```
#[derive(Debug)]
pub struct AppError(pub MentorError);

impl AppError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            MentorError::NotFound(_) => StatusCode::NOT_FOUND,
            MentorError::Validation(_) => StatusCode::BAD_REQUEST,
            MentorError::InvalidForm(_) => StatusCode::BAD_REQUEST,
            MentorError::Authentication(_) => StatusCode::UNAUTHORIZED,
            MentorError::Conflict(_) => StatusCode::CONFLICT,
            MentorError::Rejected(_) => StatusCode::BAD_GATEWAY,
            MentorError::Transport(_) => StatusCode::BAD_GATEWAY,
            MentorError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Converts application errors to HTTP responses
///
/// The body is `{"error": message}`. Form errors also carry `fields`, a map
/// from field name to message. Messages of the variants a user can act on are
/// sent bare; the rest keep their category prefix.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let body = match self.0 {
            MentorError::InvalidForm(fields) => json!({
                "error": "Please correct the highlighted fields",
                "fields": fields,
            }),
            MentorError::NotFound(message)
            | MentorError::Validation(message)
            | MentorError::Authentication(message)
            | MentorError::Conflict(message)
            | MentorError::Rejected(message) => json!({ "error": message }),
            other => json!({ "error": other.to_string() }),
        };

        (status, Json(body)).into_response()
    }
}

/// Automatic conversion from MentorError to AppError
impl From<MentorError> for AppError {
    fn from(err: MentorError) -> Self {
        AppError(err)
    }
}

/// Automatic conversion from eyre::Report to AppError
///
/// Reports only come out of backend plumbing, so they are classed as transport failures.
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(MentorError::Transport(err))
    }
}

/// Rewords a failed booking submission for the user.
///
/// A conflict keeps its own message; everything else becomes the generic
/// retry prompt. Session and validation problems pass through untouched.
pub fn booking_failure(err: MentorError) -> AppError {
    match err {
        MentorError::Conflict(_) => AppError(MentorError::Conflict(
            "This slot has just been booked. Please choose another day.".to_string(),
        )),
        MentorError::Rejected(_) | MentorError::Transport(_) | MentorError::Internal(_) => {
            AppError(MentorError::Rejected(
                "Booking failed. Please try again.".to_string(),
            ))
        }
        other => AppError(other),
    }
}

/// Rewords a failed mentor or student registration for the user.
pub fn registration_failure(err: MentorError) -> AppError {
    match err {
        MentorError::Conflict(_) => AppError(MentorError::Conflict(
            "Email already exists. Please use a different email.".to_string(),
        )),
        MentorError::Rejected(message) => AppError(MentorError::Rejected(message)),
        MentorError::Transport(_) | MentorError::Internal(_) => AppError(MentorError::Rejected(
            "Registration failed. Please try again.".to_string(),
        )),
        other => AppError(other),
    }
}
