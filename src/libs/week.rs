//! Weekly timesheet slot arithmetic.
//!
//! The service stores a week as one record with seven day-hour slots numbered
//! from Sunday: `hoursday1` is Sunday, `hoursday7` is Saturday. Entry dates
//! arrive in the common Monday-first convention, so the Sunday-first
//! conversion here decides both which slot a date lands in and which
//! `weekstart` date the request carries.

use chrono::{Datelike, Duration, NaiveDate};

/// Slot index of a date inside its service week, Sunday = 0 .. Saturday = 6.
pub fn day_slot(date: NaiveDate) -> usize {
    date.weekday().num_days_from_sunday() as usize
}

/// The Sunday beginning the service week that contains `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(day_slot(date) as i64)
}

/// Seven day-hour slots for one week, Sunday-first.
///
/// A submission always carries the entire week; the service overwrites the
/// stored week with whatever vector it receives, so two submissions for the
/// same week never accumulate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeekHours([f64; 7]);

impl WeekHours {
    /// A week vector with `hours` in the slot for `date` and zeros elsewhere.
    pub fn single(date: NaiveDate, hours: f64) -> Self {
        let mut slots = [0.0; 7];
        slots[day_slot(date)] = hours;
        Self(slots)
    }

    pub fn slot(&self, index: usize) -> f64 {
        self.0[index]
    }

    /// Wire parameters `hoursday1`..`hoursday7` (1 = Sunday).
    pub fn params(&self) -> Vec<(String, String)> {
        self.0
            .iter()
            .enumerate()
            .map(|(i, hours)| (format!("hoursday{}", i + 1), hours.to_string()))
            .collect()
    }
}
