use crate::api::ace::{Ace, SessionToken};
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_info, msg_print};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct TasksArgs {
    #[arg(help = "Project id whose tasks to list")]
    project_id: u32,
}

pub async fn cmd(ace: &Ace, token: &SessionToken, tasks_args: TasksArgs) -> Result<()> {
    let tasks = ace.tasks(token, tasks_args.project_id).await?;
    if tasks.is_empty() {
        msg_info!(Message::NoTasksFound);
        return Ok(());
    }

    msg_print!(Message::TasksHeader(tasks_args.project_id));
    View::tasks(&tasks)
}
