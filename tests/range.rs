#[cfg(test)]
mod tests {
    use acetime::libs::range::{parse_date_arg, workdays_between, DateRange, Period, RangeStats};
    use chrono::{Duration, NaiveDate};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_period_parsing() {
        assert_eq!("week".parse::<Period>().unwrap(), Period::Week);
        assert_eq!("LastWeek".parse::<Period>().unwrap(), Period::LastWeek);
        assert_eq!("month".parse::<Period>().unwrap(), Period::Month);
        assert_eq!("lastmonth".parse::<Period>().unwrap(), Period::LastMonth);
        assert_eq!("30".parse::<Period>().unwrap(), Period::Days(30));
        assert_eq!("0".parse::<Period>().unwrap(), Period::Days(0));
        assert!("-3".parse::<Period>().is_err());
        assert!("fortnight".parse::<Period>().is_err());
    }

    #[test]
    fn test_week_is_monday_through_sunday_containing_today() {
        let today = date(2025, 3, 12); // Wednesday
        let range = Period::Week.resolve(today);
        assert_eq!(range.from, date(2025, 3, 10)); // Monday
        assert_eq!(range.to, date(2025, 3, 16)); // Sunday
        assert!(range.from <= today && today <= range.to);
    }

    #[test]
    fn test_lastweek_is_exactly_seven_days_earlier() {
        let today = date(2025, 3, 12);
        let week = Period::Week.resolve(today);
        let lastweek = Period::LastWeek.resolve(today);
        assert_eq!(lastweek.from, week.from - Duration::days(7));
        assert_eq!(lastweek.to, week.to - Duration::days(7));
    }

    #[test]
    fn test_month_bounds() {
        let range = Period::Month.resolve(date(2025, 3, 12));
        assert_eq!(range.from, date(2025, 3, 1));
        assert_eq!(range.to, date(2025, 3, 31));

        let february = Period::Month.resolve(date(2024, 2, 10));
        assert_eq!(february.to, date(2024, 2, 29));
    }

    #[test]
    fn test_lastmonth_rolls_over_january() {
        let range = Period::LastMonth.resolve(date(2025, 1, 15));
        assert_eq!(range.from, date(2024, 12, 1));
        assert_eq!(range.to, date(2024, 12, 31));
    }

    #[test]
    fn test_days_range_reaches_far_forward() {
        let today = date(2025, 3, 12);
        let range = Period::Days(30).resolve(today);
        assert_eq!(range.from, today - Duration::days(30));
        assert!(range.to >= today + Duration::days(3000));
    }

    #[test]
    fn test_parse_date_arg_formats() {
        let today = date(2025, 3, 12);
        assert_eq!(parse_date_arg("today", today).unwrap(), today);
        assert_eq!(parse_date_arg("Today", today).unwrap(), today);
        assert_eq!(parse_date_arg("250310", today).unwrap(), date(2025, 3, 10));
        assert_eq!(parse_date_arg("2025-03-10", today).unwrap(), date(2025, 3, 10));
        assert_eq!(parse_date_arg("10-03-2025", today).unwrap(), date(2025, 3, 10));
        assert!(parse_date_arg("31-02-2025", today).is_err());
        assert!(parse_date_arg("yesterday", today).is_err());
        assert!(parse_date_arg("20250310", today).is_err());
    }

    #[test]
    fn test_workdays_between() {
        // Monday through Friday
        assert_eq!(workdays_between(date(2025, 3, 10), date(2025, 3, 14)), 5);
        // Monday through Sunday still counts five
        assert_eq!(workdays_between(date(2025, 3, 10), date(2025, 3, 16)), 5);
        // Weekend only
        assert_eq!(workdays_between(date(2025, 3, 15), date(2025, 3, 16)), 0);
        // Inverted range
        assert_eq!(workdays_between(date(2025, 3, 14), date(2025, 3, 10)), 0);
    }

    #[test]
    fn test_stats_average_over_full_past_range() {
        let range = DateRange {
            from: date(2025, 3, 10),
            to: date(2025, 3, 14),
        };
        let stats = RangeStats::compute(&range, date(2025, 3, 20), 20.0, Some(date(2025, 3, 14)));
        assert_eq!(stats.workdays, 5);
        assert_eq!(stats.average, Some(4.0));
    }

    #[test]
    fn test_stats_zero_workdays_has_no_average() {
        let range = DateRange {
            from: date(2025, 3, 15), // Saturday
            to: date(2025, 3, 16),   // Sunday
        };
        let stats = RangeStats::compute(&range, date(2025, 3, 20), 3.0, Some(date(2025, 3, 15)));
        assert_eq!(stats.workdays, 0);
        assert_eq!(stats.average, None);
    }

    #[test]
    fn test_stats_future_end_clamps_to_last_entry() {
        // Week range Mon-Sun, today is Wednesday, last entry Tuesday.
        let today = date(2025, 3, 12);
        let range = Period::Week.resolve(today);
        let stats = RangeStats::compute(&range, today, 8.0, Some(date(2025, 3, 11)));
        assert_eq!(stats.workdays, 2); // Monday and Tuesday
        assert_eq!(stats.average, Some(4.0));
    }

    #[test]
    fn test_stats_future_end_without_entries_clamps_to_today() {
        let today = date(2025, 3, 12);
        let range = Period::Week.resolve(today);
        let stats = RangeStats::compute(&range, today, 0.0, None);
        assert_eq!(stats.workdays, 3); // Monday through Wednesday
        assert_eq!(stats.average, Some(0.0));
    }
}
