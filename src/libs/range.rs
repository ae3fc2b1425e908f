//! Date-range resolution and work-day statistics for the activity log.
//!
//! A log request names either an integer "days back" or one of four named
//! periods. Named periods use the common Monday-first convention (unlike the
//! service's Sunday-first storage weeks, which live in [`crate::libs::week`]).

use crate::libs::errors::AceError;
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use std::str::FromStr;

/// Forward bound for the "days back" range. Deliberately far in the future so
/// the report includes forward-dated entries.
const DAYS_FORWARD: i64 = 3650;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Period {
    /// `[today - N, today + ~10 years]`.
    Days(i64),
    /// Monday through Sunday containing today.
    Week,
    /// The Monday through Sunday before that.
    LastWeek,
    /// First through last day of the current month.
    Month,
    /// First through last day of the previous month.
    LastMonth,
}

impl FromStr for Period {
    type Err = AceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "week" => Ok(Period::Week),
            "lastweek" => Ok(Period::LastWeek),
            "month" => Ok(Period::Month),
            "lastmonth" => Ok(Period::LastMonth),
            other => match other.parse::<i64>() {
                Ok(days) if days >= 0 => Ok(Period::Days(days)),
                _ => Err(AceError::InputValidation(format!(
                    "'{}' is not a number of days or one of week, lastweek, month, lastmonth",
                    s
                ))),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl Period {
    pub fn resolve(&self, today: NaiveDate) -> DateRange {
        match self {
            Period::Days(days) => DateRange {
                from: today - Duration::days(*days),
                to: today + Duration::days(DAYS_FORWARD),
            },
            Period::Week => week_of(today),
            Period::LastWeek => week_of(today - Duration::days(7)),
            Period::Month => month_of(today.year(), today.month()),
            Period::LastMonth => {
                let (year, month) = match today.month() {
                    1 => (today.year() - 1, 12),
                    m => (today.year(), m - 1),
                };
                month_of(year, month)
            }
        }
    }
}

fn week_of(date: NaiveDate) -> DateRange {
    let from = date - Duration::days(date.weekday().num_days_from_monday() as i64);
    DateRange { from, to: from + Duration::days(6) }
}

fn month_of(year: i32, month: u32) -> DateRange {
    let from = NaiveDate::from_ymd_opt(year, month, 1).unwrap();
    let (next_year, next_month) = match month {
        12 => (year + 1, 1),
        m => (year, m + 1),
    };
    let to = NaiveDate::from_ymd_opt(next_year, next_month, 1).unwrap().pred_opt().unwrap();
    DateRange { from, to }
}

/// Parses a date argument: `today`, `YYMMDD`, `YYYY-MM-DD` or `DD-MM-YYYY`.
pub fn parse_date_arg(s: &str, today: NaiveDate) -> Result<NaiveDate, AceError> {
    if s.eq_ignore_ascii_case("today") {
        return Ok(today);
    }
    if s.len() == 6 && s.bytes().all(|b| b.is_ascii_digit()) {
        return NaiveDate::parse_from_str(s, "%y%m%d")
            .map_err(|_| AceError::InputValidation(format!("'{}' is not a valid YYMMDD date", s)));
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(s, "%d-%m-%Y"))
        .map_err(|_| AceError::InputValidation(format!("'{}' is not a date (today, YYMMDD, YYYY-MM-DD or DD-MM-YYYY)", s)))
}

/// Number of Monday-Friday days between `from` and `to` inclusive.
pub fn workdays_between(from: NaiveDate, to: NaiveDate) -> u32 {
    let mut count = 0;
    let mut day = from;
    while day <= to {
        if !matches!(day.weekday(), Weekday::Sat | Weekday::Sun) {
            count += 1;
        }
        day += Duration::days(1);
    }
    count
}

/// Aggregate statistics over a queried range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeStats {
    pub total_hours: f64,
    pub workdays: u32,
    /// `None` when the effective range spans zero work days.
    pub average: Option<f64>,
}

impl RangeStats {
    /// Computes work-day statistics for a range.
    ///
    /// When the nominal range end lies in the future, the effective end is
    /// the last actually worked date (today when the report is empty), so a
    /// partial week or month is not diluted by unworked future days.
    pub fn compute(range: &DateRange, today: NaiveDate, total_hours: f64, last_entry: Option<NaiveDate>) -> Self {
        let effective_to = if range.to > today {
            last_entry.unwrap_or(today).min(range.to)
        } else {
            range.to
        };
        let workdays = workdays_between(range.from, effective_to);
        let average = match workdays {
            0 => None,
            n => Some(total_hours / n as f64),
        };
        Self { total_hours, workdays, average }
    }
}
