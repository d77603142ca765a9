use chrono::{Datelike, Month, NaiveDate};
use serde::{Deserialize, Serialize};

use super::slot_index::SlotIndex;

/// Column headers, Sunday first. Column `n` holds weekday `n` as returned by [`weekday_of`].
pub const WEEKDAY_HEADERS: [&str; 7] = ["SU", "M", "TU", "W", "T", "F", "S"];

/// One cell of the month grid. Leading cells before the 1st have no `day`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDay {
    pub day: Option<u32>,
    pub has_slot: bool,
    pub is_booked: bool,
    pub slot_id: Option<String>,
    pub time: Option<String>,
}

impl CalendarDay {
    pub fn blank() -> Self {
        Self::default()
    }

    pub fn is_blank(&self) -> bool {
        self.day.is_none()
    }

    /// A day can be picked when it carries a slot nobody has booked yet.
    pub fn is_selectable(&self) -> bool {
        self.has_slot && !self.is_booked
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarMonth {
    pub year: i32,
    pub month: u32,
    pub first_weekday: u32,
    pub days_in_month: u32,
    pub weeks: Vec<Vec<CalendarDay>>,
}

impl CalendarMonth {
    /// The cell for day-of-month `day`, if the month has one.
    pub fn day(&self, day: u32) -> Option<&CalendarDay> {
        self.cells().find(|cell| cell.day == Some(day))
    }

    pub fn cells(&self) -> impl Iterator<Item = &CalendarDay> {
        self.weeks.iter().flatten()
    }

    pub fn label(&self) -> String {
        month_label(self.year, self.month)
    }
}

/// Projects the month `month_offset` months away from `today` into a week grid.
///
/// Never panics: offsets far outside any displayable range clamp to the
/// extreme representable year and simply produce a month without slots.
pub fn project_month(index: &SlotIndex, month_offset: i32, today: NaiveDate) -> CalendarMonth {
    let (year, month) = add_months(today.year(), today.month(), month_offset);
    let first_weekday = weekday_of(year, month, 1);
    let days_in_month = days_in_month(year, month);

    let mut cells = Vec::with_capacity((first_weekday + days_in_month) as usize);
    cells.extend(std::iter::repeat(CalendarDay::blank()).take(first_weekday as usize));

    for day in 1..=days_in_month {
        let cell = match index.lookup(year, month, day) {
            Some(slot) => CalendarDay {
                day: Some(day),
                has_slot: true,
                is_booked: slot.booked,
                slot_id: slot.id.clone(),
                time: Some(slot.time.clone()),
            },
            None => CalendarDay {
                day: Some(day),
                ..CalendarDay::default()
            },
        };
        cells.push(cell);
    }

    // Rows are not padded: the last week may hold fewer than seven cells.
    let weeks = cells.chunks(7).map(<[CalendarDay]>::to_vec).collect();

    CalendarMonth {
        year,
        month,
        first_weekday,
        days_in_month,
        weeks,
    }
}

/// Adds `offset` months to `(year, month)`, carrying into the year in both directions.
pub fn add_months(year: i32, month: u32, offset: i32) -> (i32, u32) {
    let total = i64::from(year) * 12 + i64::from(month) - 1 + i64::from(offset);
    let year = total
        .div_euclid(12)
        .clamp(i64::from(i32::MIN), i64::from(i32::MAX));
    let month = total.rem_euclid(12) + 1;
    (year as i32, month as u32)
}

/// Proleptic Gregorian leap year rule.
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Day of week with 0 = Sunday through 6 = Saturday.
pub fn weekday_of(year: i32, month: u32, day: u32) -> u32 {
    const MONTH_SHIFT: [i64; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];

    let month = month.clamp(1, 12);
    let year = if month < 3 {
        i64::from(year) - 1
    } else {
        i64::from(year)
    };
    let shift = MONTH_SHIFT[(month - 1) as usize];
    let weekday = year + year.div_euclid(4) - year.div_euclid(100)
        + year.div_euclid(400)
        + shift
        + i64::from(day);
    weekday.rem_euclid(7) as u32
}

/// Tab label such as `"March 2025"`.
pub fn month_label(year: i32, month: u32) -> String {
    let name = u8::try_from(month)
        .ok()
        .and_then(|month| Month::try_from(month).ok())
        .map(|month| month.name())
        .unwrap_or("Unknown");
    format!("{name} {year}")
}
