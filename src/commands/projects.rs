use crate::api::ace::{Ace, SessionToken};
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_info, msg_print};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ProjectsArgs {
    #[arg(help = "Username whose active projects to list")]
    username: String,
}

pub async fn cmd(ace: &Ace, token: &SessionToken, projects_args: ProjectsArgs) -> Result<()> {
    msg_print!(Message::ResolvingUser(projects_args.username.clone()));
    let user_id = ace.user_id(token, &projects_args.username).await?;

    let projects = ace.projects(token, user_id).await?;
    if projects.is_empty() {
        msg_info!(Message::NoProjectsFound);
        return Ok(());
    }

    msg_print!(Message::ProjectsHeader {
        username: projects_args.username,
        user_id,
    });
    View::projects(&projects)
}
