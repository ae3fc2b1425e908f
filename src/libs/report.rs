//! Time-report projection and table layout.
//!
//! One [`ReportRow`] per logged entry, read-only. Long comments wrap onto
//! continuation rows whose other columns stay blank, so comment text is never
//! silently truncated.

use chrono::NaiveDate;

/// Width of the comment column before wrapping kicks in.
pub const COMMENT_WIDTH: usize = 48;

/// One read-only entry of a time-entry listing.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub line_id: String,
    pub date: NaiveDate,
    pub client: String,
    pub project: String,
    pub task: String,
    pub hours: f64,
    pub comment: String,
}

/// Wraps a comment to the column width. Always yields at least one line.
pub fn wrap_comment(comment: &str, width: usize) -> Vec<String> {
    if comment.trim().is_empty() {
        return vec![String::new()];
    }
    textwrap::wrap(comment, width).into_iter().map(|line| line.into_owned()).collect()
}

/// Lays the report out as table cells:
/// `[line id, date, client, project, task, hours, comment]`.
///
/// An entry whose comment wraps to N lines occupies N cell rows; every column
/// except the comment is blank on continuation rows.
pub fn table_cells(rows: &[ReportRow]) -> Vec<[String; 7]> {
    let mut cells = Vec::new();
    for row in rows {
        for (i, line) in wrap_comment(&row.comment, COMMENT_WIDTH).into_iter().enumerate() {
            if i == 0 {
                cells.push([
                    row.line_id.clone(),
                    row.date.format("%Y-%m-%d").to_string(),
                    row.client.clone(),
                    row.project.clone(),
                    row.task.clone(),
                    format!("{:.2}", row.hours),
                    line,
                ]);
            } else {
                cells.push([
                    String::new(),
                    String::new(),
                    String::new(),
                    String::new(),
                    String::new(),
                    String::new(),
                    line,
                ]);
            }
        }
    }
    cells
}

pub fn total_hours(rows: &[ReportRow]) -> f64 {
    rows.iter().map(|row| row.hours).sum()
}

pub fn last_entry_date(rows: &[ReportRow]) -> Option<NaiveDate> {
    rows.iter().map(|row| row.date).max()
}
