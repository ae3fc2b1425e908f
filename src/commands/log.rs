use crate::api::ace::{Ace, SessionToken};
use crate::libs::messages::Message;
use crate::libs::range::{Period, RangeStats};
use crate::libs::report;
use crate::libs::view::View;
use crate::{msg_info, msg_print};
use anyhow::Result;
use chrono::Local;
use clap::Args;

#[derive(Debug, Args)]
pub struct LogArgs {
    #[arg(help = "Username whose time entries to list")]
    username: String,

    #[arg(default_value = "30", help = "Days back, or one of: week, lastweek, month, lastmonth")]
    period: String,
}

pub async fn cmd(ace: &Ace, token: &SessionToken, log_args: LogArgs) -> Result<()> {
    let period: Period = log_args.period.parse()?;
    let today = Local::now().date_naive();
    let range = period.resolve(today);

    msg_print!(Message::ResolvingUser(log_args.username.clone()));
    let user_id = ace.user_id(token, &log_args.username).await?;

    let rows = ace.time_report(token, user_id, range.from, range.to).await?;
    msg_print!(
        Message::ReportHeader {
            from: range.from.format("%Y-%m-%d").to_string(),
            to: range.to.format("%Y-%m-%d").to_string(),
        },
        true
    );
    if rows.is_empty() {
        msg_info!(Message::NoEntriesFound);
        return Ok(());
    }

    let stats = RangeStats::compute(&range, today, report::total_hours(&rows), report::last_entry_date(&rows));
    View::report(&rows, &stats)
}
