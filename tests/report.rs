#[cfg(test)]
mod tests {
    use acetime::libs::report::{last_entry_date, table_cells, total_hours, wrap_comment, ReportRow, COMMENT_WIDTH};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn row(day: u32, hours: f64, comment: &str) -> ReportRow {
        ReportRow {
            line_id: format!("{}", 1000 + day),
            date: date(2025, 3, day),
            client: "Acme".to_string(),
            project: "Website".to_string(),
            task: "Backend".to_string(),
            hours,
            comment: comment.to_string(),
        }
    }

    #[test]
    fn test_wrap_comment_short_stays_single_line() {
        assert_eq!(wrap_comment("demo", 48), vec!["demo".to_string()]);
    }

    #[test]
    fn test_wrap_comment_empty_yields_one_blank_line() {
        assert_eq!(wrap_comment("", 48), vec![String::new()]);
        assert_eq!(wrap_comment("   ", 48), vec![String::new()]);
    }

    #[test]
    fn test_wrap_comment_respects_width_and_preserves_words() {
        let comment = "implemented the login flow and reworked the weekly timesheet submission to cover edge cases around week boundaries";
        let lines = wrap_comment(comment, 20);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(line.chars().count() <= 20, "line too wide: {:?}", line);
        }
        // Rejoining the wrapped lines reconstructs the comment modulo whitespace.
        let rejoined = lines.join(" ");
        assert_eq!(
            rejoined.split_whitespace().collect::<Vec<_>>(),
            comment.split_whitespace().collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_table_cells_one_row_per_short_entry() {
        let rows = vec![row(10, 4.5, "demo"), row(11, 3.0, "review")];
        let cells = table_cells(&rows);
        assert_eq!(cells.len(), 2);
        assert_eq!(cells[0][0], "1010");
        assert_eq!(cells[0][1], "2025-03-10");
        assert_eq!(cells[0][5], "4.50");
        assert_eq!(cells[0][6], "demo");
    }

    #[test]
    fn test_table_cells_continuation_rows_are_blank() {
        let long_comment = "a ".repeat(COMMENT_WIDTH) + "end of a very long comment that must wrap";
        let rows = vec![row(10, 4.5, &long_comment)];
        let cells = table_cells(&rows);
        assert!(cells.len() > 1);

        // First row carries all the columns.
        assert_eq!(cells[0][0], "1010");
        assert!(!cells[0][6].is_empty());

        // Continuation rows are blank except for the comment column.
        for continuation in &cells[1..] {
            for column in &continuation[..6] {
                assert!(column.is_empty());
            }
            assert!(!continuation[6].is_empty());
        }

        // Order is preserved: rejoining the comment column restores the text.
        let rejoined = cells.iter().map(|c| c[6].as_str()).collect::<Vec<_>>().join(" ");
        assert_eq!(
            rejoined.split_whitespace().collect::<Vec<_>>(),
            long_comment.split_whitespace().collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_totals_and_last_entry() {
        let rows = vec![row(10, 4.5, "a"), row(12, 3.5, "b"), row(11, 2.0, "c")];
        assert_eq!(total_hours(&rows), 10.0);
        assert_eq!(last_entry_date(&rows), Some(date(2025, 3, 12)));
        assert_eq!(last_entry_date(&[]), None);
    }
}
