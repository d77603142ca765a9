use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::selection::SelectedSlot;

use super::slot::SlotDate;

/// Booking submission as the backend expects it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub mentor_id: String,
    pub student_id: String,
    pub date: NaiveDate,
    pub time: String,
}

impl BookingRequest {
    /// Builds the submission from a selection without altering it.
    pub fn from_selection(mentor_id: &str, student_id: &str, selected: &SelectedSlot) -> Self {
        Self {
            mentor_id: mentor_id.to_string(),
            student_id: student_id.to_string(),
            date: selected.date,
            time: selected.time.clone(),
        }
    }
}

/// Mentor fields the backend populates on history entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MentorSummary {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub domain: Vec<String>,
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingHistoryRecord {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "mentorId", default)]
    pub mentor: Option<MentorSummary>,
    #[serde(default)]
    pub date: SlotDate,
    #[serde(default)]
    pub time: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingHistoryResponse {
    #[serde(default)]
    pub bookings: Vec<BookingHistoryRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingHistoryEntry {
    pub id: String,
    pub mentor: Option<MentorSummary>,
    pub date: Option<NaiveDate>,
    pub time: String,
}

impl From<BookingHistoryRecord> for BookingHistoryEntry {
    fn from(record: BookingHistoryRecord) -> Self {
        Self {
            id: record.id,
            date: record.date.calendar_day(),
            mentor: record.mentor,
            time: record.time,
        }
    }
}

impl BookingHistoryEntry {
    pub fn mentor_name(&self) -> &str {
        self.mentor
            .as_ref()
            .and_then(|mentor| mentor.name.as_deref())
            .filter(|name| !name.is_empty())
            .unwrap_or("Mentor")
    }

    pub fn mentor_initial(&self) -> char {
        self.mentor_name().chars().next().unwrap_or('M')
    }
}
