//! # Watering Status
//!
//! Status is never stored. It is derived from `last_watered + frequency` and a
//! reference time, at calendar-day granularity:
//!
//! 1. Compute the next watering instant.
//! 2. Truncate it to its calendar day in the reference's time zone.
//! 3. Truncate the reference itself the same way.
//! 4. Compare the two days.
//!
//! Both sides go through [`calendar_day`]. Comparing a truncated day against a
//! raw timestamp would flip plants watered late in the evening to `Due` a day
//! early.

use crate::model::Plant;
use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// The next watering day is in the past.
    Due,
    /// The next watering day is the reference day.
    Today,
    /// The next watering day is still ahead.
    Upcoming,
}

impl Status {
    pub fn label(&self) -> &'static str {
        match self {
            Status::Due => "DUE",
            Status::Today => "TODAY",
            Status::Upcoming => "UPCOMING",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "due" => Ok(Status::Due),
            "today" => Ok(Status::Today),
            "upcoming" => Ok(Status::Upcoming),
            other => Err(format!("Unknown status: {}", other)),
        }
    }
}

/// Truncates a timestamp to its calendar day in `tz`.
pub fn calendar_day<Tz: TimeZone>(ts: &DateTime<Utc>, tz: &Tz) -> NaiveDate {
    ts.with_timezone(tz).date_naive()
}

/// The calendar day on which `plant` should next be watered, in `tz`.
pub fn next_watering_day<Tz: TimeZone>(plant: &Plant, tz: &Tz) -> NaiveDate {
    calendar_day(&plant.next_watering(), tz)
}

/// Classifies `plant` against the calendar day of `reference`.
///
/// Days are taken in the reference's own time zone, so callers pick the zone
/// by picking the reference (`Local::now()` for display, `Utc` in tests).
pub fn status_at<Tz: TimeZone>(plant: &Plant, reference: &DateTime<Tz>) -> Status {
    match days_until(plant, reference).cmp(&0) {
        Ordering::Less => Status::Due,
        Ordering::Equal => Status::Today,
        Ordering::Greater => Status::Upcoming,
    }
}

/// Signed number of calendar days from `reference` to the next watering day.
/// Negative when overdue.
pub fn days_until<Tz: TimeZone>(plant: &Plant, reference: &DateTime<Tz>) -> i64 {
    let tz = reference.timezone();
    let next = next_watering_day(plant, &tz);
    let today = calendar_day(&reference.with_timezone(&Utc), &tz);
    (next - today).num_days()
}

impl Plant {
    /// Status right now, in the local time zone.
    pub fn status(&self) -> Status {
        status_at(self, &Local::now())
    }
}
