//! Yearly recurrence of an anchor date (birthday, memorial).
//!
//! Leap-day anchors: February 29 falls on February 28 in years without a
//! leap day and on February 29 otherwise. The rule is applied to each
//! candidate year separately.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// The next time an anchor date comes around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occurrence {
    pub occurs_on: NaiveDate,
    /// Whole days from "today" to `occurs_on`; never negative.
    pub days_until: i64,
}

/// Next occurrence of `anchor`'s month and day on or after `today`.
///
/// Returns `None` only when that occurrence lies beyond the last date chrono
/// can represent.
pub fn next_occurrence(anchor: NaiveDate, today: NaiveDate) -> Option<Occurrence> {
    let mut occurs_on = anniversary_in_year(anchor, today.year())?;

    if occurs_on < today {
        occurs_on = anniversary_in_year(anchor, today.year().checked_add(1)?)?;
    }

    Some(Occurrence {
        occurs_on,
        days_until: (occurs_on - today).num_days(),
    })
}

/// The anchor's month and day placed in `year`.
pub fn anniversary_in_year(anchor: NaiveDate, year: i32) -> Option<NaiveDate> {
    let (month, day) = (anchor.month(), anchor.day());

    if month == 2 && day == 29 && !is_leap_year(year) {
        return NaiveDate::from_ymd_opt(year, 2, 28);
    }

    NaiveDate::from_ymd_opt(year, month, day)
}

/// Whether `year` has a Feb 29 in the proleptic Gregorian calendar.
pub fn is_leap_year(year: i32) -> bool {
    NaiveDate::from_ymd_opt(year, 2, 29).is_some()
}
