use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::projector::CalendarMonth;

/// A day the user picked, waiting for booking confirmation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedSlot {
    pub slot_id: Option<String>,
    pub date: NaiveDate,
    pub time: String,
}

impl SelectedSlot {
    /// Summary line such as `"Saturday, March 15 • 14:00"`.
    pub fn describe(&self) -> String {
        format!("{} • {}", self.date.format("%A, %B %-d"), self.time)
    }
}

/// Single-selection state over a calendar month.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    selected: Option<SelectedSlot>,
}

impl Selection {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<&SelectedSlot> {
        self.selected.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_none()
    }

    /// State after the user clicks `day` in `month`.
    ///
    /// A selectable day replaces whatever was selected before. Clicking a day
    /// without a free slot, or a day the month does not have, leaves the
    /// selection as it was.
    pub fn click(&self, month: &CalendarMonth, day: u32) -> Selection {
        let Some(cell) = month.day(day).filter(|cell| cell.is_selectable()) else {
            return self.clone();
        };
        let Some(date) = NaiveDate::from_ymd_opt(month.year, month.month, day) else {
            return self.clone();
        };

        Selection {
            selected: Some(SelectedSlot {
                slot_id: cell.slot_id.clone(),
                date,
                time: cell.time.clone().unwrap_or_default(),
            }),
        }
    }
}
