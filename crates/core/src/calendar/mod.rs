//! Availability calendar: per-day slot lookup, month grid projection and
//! day selection. Everything here is pure; "today" is always passed in.

pub mod projector;
pub mod selection;
pub mod slot_index;

pub use projector::{
    CalendarDay, CalendarMonth, WEEKDAY_HEADERS, add_months, days_in_month, is_leap_year,
    month_label, project_month, weekday_of,
};
pub use selection::{SelectedSlot, Selection};
pub use slot_index::SlotIndex;
