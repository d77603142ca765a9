/// Availability calendar, day selection and booking submission
pub mod calendar;
/// Mentor discovery, profiles and registration
pub mod mentor;
/// Student registration and booking history
pub mod student;

use serde::{Deserialize, Serialize};

/// `?month=N` query: months ahead of the current one, defaulting to 0
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct MonthQuery {
    #[serde(default)]
    pub month: i32,
}

/// Plain confirmation returned by the registration endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}
