#[cfg(test)]
mod tests {
    use acetime::api::ace::{SaveWorkItem, SessionToken};
    use acetime::libs::range::parse_date_arg;
    use chrono::{Local, NaiveDate};
    use std::collections::HashMap;

    fn token() -> SessionToken {
        SessionToken::new("0fa2-guid")
    }

    fn params_of(item: &SaveWorkItem) -> HashMap<String, String> {
        item.query(&token()).into_iter().collect()
    }

    fn item(date: NaiveDate) -> SaveWorkItem {
        SaveWorkItem {
            project_id: 5,
            task_id: None,
            line_id: None,
            date,
            hours: 4.5,
            comment: "demo".to_string(),
        }
    }

    #[test]
    fn test_add_entry_request_for_a_monday() {
        // 2025-03-10 is a Monday; its service week starts Sunday 2025-03-09.
        let date = parse_date_arg("250310", Local::now().date_naive()).unwrap();
        let params = params_of(&item(date));

        assert_eq!(params["fct"], "saveworkitem");
        assert_eq!(params["guid"], "0fa2-guid");
        assert_eq!(params["weekstart"], "2025-03-09");
        assert_eq!(params["projectid"], "5");
        assert_eq!(params["timetypeid"], "1");
        assert_eq!(params["comments"], "demo");
        assert_eq!(params["format"], "ds");
        assert!(!params.contains_key("taskid"));
        assert!(!params.contains_key("timesheetlineid"));

        // Exactly one non-zero day slot, and it is Monday's (hoursday2).
        let non_zero: Vec<_> = (1..=7)
            .map(|i| (i, params[&format!("hoursday{}", i)].clone()))
            .filter(|(_, hours)| hours != "0")
            .collect();
        assert_eq!(non_zero, vec![(2, "4.5".to_string())]);
    }

    #[test]
    fn test_task_id_present_adds_the_parameter() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        let mut work_item = item(date);
        work_item.task_id = Some(7);
        let params = params_of(&work_item);
        assert_eq!(params["taskid"], "7");
    }

    #[test]
    fn test_line_id_turns_the_call_into_an_update() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        let mut work_item = item(date);
        work_item.line_id = Some(99);
        let params = params_of(&work_item);
        assert_eq!(params["timesheetlineid"], "99");
    }

    #[test]
    fn test_same_week_submissions_carry_independent_vectors() {
        // Two submissions into the same service week: each request holds only
        // its own day's hours, so the second overwrites rather than sums.
        let monday = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        let wednesday = NaiveDate::from_ymd_opt(2025, 3, 12).unwrap();

        let first = params_of(&item(monday));
        let second = params_of(&SaveWorkItem { date: wednesday, hours: 2.0, ..item(monday) });

        assert_eq!(first["weekstart"], second["weekstart"]);
        assert_eq!(first["hoursday2"], "4.5");
        assert_eq!(first["hoursday4"], "0");
        assert_eq!(second["hoursday2"], "0");
        assert_eq!(second["hoursday4"], "2");
    }

    #[test]
    fn test_sunday_entry_lands_in_the_first_slot() {
        let sunday = NaiveDate::from_ymd_opt(2025, 3, 9).unwrap();
        let params = params_of(&item(sunday));
        assert_eq!(params["weekstart"], "2025-03-09");
        assert_eq!(params["hoursday1"], "4.5");
    }
}
