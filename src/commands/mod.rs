pub mod add;
pub mod edit;
pub mod init;
pub mod log;
pub mod projects;
pub mod tasks;

use crate::api::ace::{Ace, SaveWorkItem, SessionToken};
use crate::libs::config::Credentials;
use crate::libs::errors::AceError;
use crate::libs::messages::Message;
use crate::{msg_print, msg_success};
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Interactive credential setup")]
    Init(init::InitArgs),
    #[command(about = "Add a time entry", arg_required_else_help = true)]
    Add(add::AddArgs),
    #[command(about = "Edit an existing time entry", arg_required_else_help = true)]
    Edit(edit::EditArgs),
    #[command(about = "List active projects for a user", arg_required_else_help = true)]
    Projects(projects::ProjectsArgs),
    #[command(about = "List tasks of a project", arg_required_else_help = true)]
    Tasks(tasks::TasksArgs),
    #[command(about = "Print a time-entry log with work-day statistics", arg_required_else_help = true)]
    Log(log::LogArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[arg(short, long, global = true, help = "Verbose diagnostics and raw response dumps")]
    verbose: bool,

    #[arg(short = 'n', long, global = true, help = "Validate and print the request without sending it")]
    dry_run: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();

        if cli.verbose {
            std::env::set_var("ACETIME_DEBUG", "1");
            tracing_subscriber::fmt()
                .with_env_filter(
                    tracing_subscriber::EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("acetime=debug")),
                )
                .init();
        }

        // Credential setup is the one command that works without a session.
        if let Commands::Init(args) = cli.command {
            return init::cmd(args);
        }

        let credentials = Credentials::read()?;
        let ace = Ace::new(cli.verbose);
        msg_print!(Message::LoggingIn {
            account: credentials.account.clone(),
            username: credentials.username.clone(),
        });
        let token = ace.login(&credentials).await?;

        match cli.command {
            Commands::Init(_) => unreachable!(),
            Commands::Add(args) => add::cmd(&ace, &token, args, cli.dry_run).await,
            Commands::Edit(args) => edit::cmd(&ace, &token, args, cli.dry_run).await,
            Commands::Projects(args) => projects::cmd(&ace, &token, args).await,
            Commands::Tasks(args) => tasks::cmd(&ace, &token, args).await,
            Commands::Log(args) => log::cmd(&ace, &token, args).await,
        }
    }
}

/// `NA` means no task; anything else must be a numeric task id.
pub(crate) fn parse_task_id(s: &str) -> Result<Option<u32>, AceError> {
    if s.eq_ignore_ascii_case("na") {
        return Ok(None);
    }
    s.parse()
        .map(Some)
        .map_err(|_| AceError::InputValidation(format!("task id '{}' is not a number or NA", s)))
}

pub(crate) fn validate_hours(hours: f64) -> Result<(), AceError> {
    if hours.is_finite() && hours > 0.0 {
        Ok(())
    } else {
        Err(AceError::InputValidation(format!("hours must be a positive number, got {}", hours)))
    }
}

pub(crate) fn validate_comment(comment: &str) -> Result<(), AceError> {
    if comment.trim().is_empty() {
        Err(AceError::InputValidation("the comment field is empty".to_string()))
    } else {
        Ok(())
    }
}

/// Prints the outgoing parameter set and submits the work item, unless the
/// dry run flag suppresses the mutating call.
pub(crate) async fn submit_entry(ace: &Ace, token: &SessionToken, item: &SaveWorkItem, dry_run: bool) -> Result<()> {
    msg_print!(Message::SavingEntry {
        date: item.date.format("%Y-%m-%d").to_string(),
        hours: item.hours,
    });
    for (name, value) in item.query(token) {
        // The token is a credential; everything else is fair to echo.
        if name == "guid" {
            continue;
        }
        msg_print!(Message::RequestParameter { name, value });
    }

    if dry_run {
        msg_print!(Message::DryRunSkipped);
        return Ok(());
    }

    ace.save_work_item(token, item).await?;
    match item.line_id {
        Some(line_id) => msg_success!(Message::EntryUpdated(line_id)),
        None => msg_success!(Message::EntrySaved {
            date: item.date.format("%Y-%m-%d").to_string(),
            hours: item.hours,
        }),
    }
    Ok(())
}
