use serde::{Deserialize, Serialize};

use super::slot::{RawSlot, SlotDate, SlotDraft};

/// Mentor document exactly as the backend serves it.
///
/// The backend spells the slot list `avaliableSlots`. That name stays on this
/// type only; everything past ingestion works with [`Mentor`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MentorRecord {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub domain: Vec<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub experience: u32,
    #[serde(rename = "avaliableSlots", default)]
    pub avaliable_slots: Vec<RawSlot>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mentor {
    pub id: String,
    pub name: String,
    pub email: Option<String>,
    pub domains: Vec<String>,
    pub skills: Vec<String>,
    pub bio: String,
    pub experience: u32,
    pub available_slots: Vec<RawSlot>,
}

impl From<MentorRecord> for Mentor {
    fn from(record: MentorRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            email: record.email,
            domains: record.domain,
            skills: record.skills,
            bio: record.bio,
            experience: record.experience,
            available_slots: record.avaliable_slots,
        }
    }
}

impl Mentor {
    /// First letter of the name, used as the avatar placeholder.
    pub fn initial(&self) -> Option<char> {
        self.name.chars().next()
    }

    /// Profile subtitle, e.g. `"UI/UX & Design Mentor • 7 years of experience"`.
    pub fn headline(&self) -> String {
        format!(
            "{} Mentor • {} years of experience",
            self.domains.join(" & "),
            self.experience
        )
    }

    pub fn has_availability(&self) -> bool {
        !self.available_slots.is_empty()
    }
}

/// Mentor registration form as the UI collects it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MentorRegistrationForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    /// Comma-separated domains.
    #[serde(default)]
    pub domain: String,
    /// Years of experience as typed.
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub bio: String,
    /// Comma-separated skills.
    #[serde(default)]
    pub skills: String,
    #[serde(default)]
    pub available_slots: Vec<SlotDraft>,
}

/// Registration payload sent to the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMentorRecord {
    pub name: String,
    pub email: String,
    pub domain: Vec<String>,
    pub experience: u32,
    pub bio: String,
    pub skills: Vec<String>,
    #[serde(rename = "avaliableSlots")]
    pub avaliable_slots: Vec<NewSlotRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSlotRecord {
    pub date: SlotDate,
    pub time: String,
}

/// Splits a comma-separated form field into trimmed, non-empty entries.
pub fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}
