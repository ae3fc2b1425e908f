use super::{parse_task_id, submit_entry, validate_comment, validate_hours};
use crate::api::ace::{Ace, SaveWorkItem, SessionToken};
use crate::libs::range::parse_date_arg;
use anyhow::Result;
use chrono::Local;
use clap::Args;

#[derive(Debug, Args)]
pub struct EditArgs {
    #[arg(help = "Line id of the entry to update")]
    line_id: u64,

    #[arg(help = "Project id the hours belong to")]
    project_id: u32,

    #[arg(help = "Task id, or NA for no task")]
    task_id: String,

    #[arg(help = "Entry date: today, YYMMDD, YYYY-MM-DD or DD-MM-YYYY")]
    date: String,

    #[arg(help = "Hours to log, decimal")]
    hours: f64,

    #[arg(help = "Comment line")]
    comment: String,
}

pub async fn cmd(ace: &Ace, token: &SessionToken, edit_args: EditArgs, dry_run: bool) -> Result<()> {
    let task_id = parse_task_id(&edit_args.task_id)?;
    let date = parse_date_arg(&edit_args.date, Local::now().date_naive())?;
    validate_hours(edit_args.hours)?;
    validate_comment(&edit_args.comment)?;

    let item = SaveWorkItem {
        project_id: edit_args.project_id,
        task_id,
        line_id: Some(edit_args.line_id),
        date,
        hours: edit_args.hours,
        comment: edit_args.comment,
    };
    submit_entry(ace, token, &item, dry_run).await
}
