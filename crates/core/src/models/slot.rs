use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Date of a slot as the backend sent it.
///
/// Any JSON value deserializes: plain dates, date-like strings such as RFC 3339
/// timestamps, and epoch milliseconds are readable; anything else lands in
/// `Other` and is skipped when the calendar is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SlotDate {
    Date(NaiveDate),
    Millis(i64),
    Text(String),
    Other(Value),
}

impl Default for SlotDate {
    fn default() -> Self {
        SlotDate::Other(Value::Null)
    }
}

impl SlotDate {
    /// Reduces the value to the calendar day it names, as written.
    ///
    /// Time of day and UTC offset are dropped rather than converted, so
    /// `2025-03-15T23:30:00-05:00` is the 15th. Returns `None` for anything
    /// that does not start with a recognizable date.
    pub fn calendar_day(&self) -> Option<NaiveDate> {
        match self {
            SlotDate::Date(date) => Some(*date),
            SlotDate::Millis(millis) => {
                DateTime::from_timestamp_millis(*millis).map(|timestamp| timestamp.date_naive())
            }
            SlotDate::Text(text) => parse_calendar_day(text),
            SlotDate::Other(_) => None,
        }
    }
}

impl From<NaiveDate> for SlotDate {
    fn from(date: NaiveDate) -> Self {
        SlotDate::Date(date)
    }
}

impl From<&str> for SlotDate {
    fn from(text: &str) -> Self {
        SlotDate::Text(text.to_string())
    }
}

fn parse_calendar_day(text: &str) -> Option<NaiveDate> {
    let text = text.trim();

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(text) {
        return Some(timestamp.date_naive());
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(timestamp) = NaiveDateTime::parse_from_str(text, format) {
            return Some(timestamp.date());
        }
    }

    // Anything else that still leads with YYYY-MM-DD, e.g. "+0000" offsets.
    text.get(..10)
        .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
}

/// A slot as it appears on the wire inside a mentor record.
///
/// Deserialization never fails on a slot's own fields, so one damaged slot
/// cannot take the rest of the mentor record down with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawSlot {
    #[serde(
        rename = "_id",
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    #[serde(default)]
    pub date: SlotDate,
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub time: String,
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub booked: bool,
}

/// Reads `T`, treating null or a value of the wrong type as absent.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

fn lenient_or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned + Default,
{
    lenient(deserializer).map(Option::unwrap_or_default)
}

impl RawSlot {
    /// Normalizes the slot's date. Slots with unusable dates yield `None`.
    pub fn normalize(&self) -> Option<Slot> {
        let date = self.date.calendar_day()?;
        Some(Slot {
            id: self.id.clone(),
            date,
            time: self.time.clone(),
            booked: self.booked,
        })
    }
}

/// A bookable unit keyed by calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub id: Option<String>,
    pub date: NaiveDate,
    pub time: String,
    pub booked: bool,
}

/// A slot drafted on the mentor registration form, before the backend assigns it an id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotDraft {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
}

impl SlotDraft {
    pub fn is_complete(&self) -> bool {
        !self.date.trim().is_empty() && !self.time.trim().is_empty()
    }
}
