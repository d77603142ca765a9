use std::collections::HashMap;

use chrono::NaiveDate;
use tracing::warn;

use crate::models::slot::{RawSlot, Slot};

/// Per-day lookup over a mentor's slots.
///
/// When several slots fall on the same calendar day the one appearing last in
/// the input wins. Slots whose date cannot be read are left out and counted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotIndex {
    by_day: HashMap<NaiveDate, Slot>,
    skipped: usize,
}

impl SlotIndex {
    pub fn build<'a, I>(slots: I) -> Self
    where
        I: IntoIterator<Item = &'a RawSlot>,
    {
        let mut by_day = HashMap::new();
        let mut skipped = 0;

        for raw in slots {
            match raw.normalize() {
                Some(slot) => {
                    by_day.insert(slot.date, slot);
                }
                None => {
                    warn!(slot_id = ?raw.id, date = ?raw.date, "Skipping slot with unreadable date");
                    skipped += 1;
                }
            }
        }

        Self { by_day, skipped }
    }

    /// Returns the slot on the given day, if any. Impossible dates yield `None`.
    pub fn lookup(&self, year: i32, month: u32, day: u32) -> Option<&Slot> {
        NaiveDate::from_ymd_opt(year, month, day).and_then(|date| self.by_day.get(&date))
    }

    pub fn get(&self, date: NaiveDate) -> Option<&Slot> {
        self.by_day.get(&date)
    }

    /// Number of distinct days carrying a slot.
    pub fn len(&self) -> usize {
        self.by_day.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_day.is_empty()
    }

    /// Number of input slots dropped for an unreadable date.
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}
