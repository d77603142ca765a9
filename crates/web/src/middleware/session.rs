//! # Student Session
//!
//! Students are identified by an opaque session token issued outside this
//! service. Requests carry it in the `X-Student-Id` header; handlers that act
//! on behalf of a student take a [`StudentSession`] argument, and handlers
//! that merely personalise their output take `Option<StudentSession>`.

use async_trait::async_trait;
use axum::{extract::FromRequestParts, http::request::Parts};
use mentorbook_core::errors::MentorError;

use super::error_handling::AppError;

/// Header carrying the student's session token
pub const STUDENT_HEADER: &str = "x-student-id";

/// The student on whose behalf a request is made
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentSession(pub String);

impl StudentSession {
    pub fn student_id(&self) -> &str {
        &self.0
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for StudentSession
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get(STUDENT_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(|value| StudentSession(value.to_string()))
            .ok_or_else(|| {
                AppError(MentorError::Authentication(
                    "Please log in as a student to continue".to_string(),
                ))
            })
    }
}
