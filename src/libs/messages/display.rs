//! Display implementation for application messages.
//!
//! All user-facing text lives in this single `Display` impl so that wording
//! stays consistent and message parameters remain type-checked at the call
//! site.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter) -> Result {
        let text = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigSetupHeader => "AceProject credentials".to_string(),
            Message::ConfigSaved(path) => format!("Credentials saved to {}", path),
            Message::ConfigFileNotFound(name) => {
                format!("Credential file '{}' not found. Run 'acetime init' to create it.", name)
            }
            Message::PromptAccount => "Enter your AceProject account id".to_string(),
            Message::PromptUsername => "Enter your AceProject username".to_string(),
            Message::PromptPassword => "Enter your AceProject password".to_string(),

            // === SESSION MESSAGES ===
            Message::LoggingIn { account, username } => {
                format!("Logging into account \"{}\" as \"{}\"", account, username)
            }

            // === ENTRY MESSAGES ===
            Message::SavingEntry { date, hours } => format!("Adding {} hours to the timesheet for {}", hours, date),
            Message::EntrySaved { date, hours } => format!("Logged {} hours on {}", hours, date),
            Message::EntryUpdated(line_id) => format!("Updated time entry {}", line_id),
            Message::DryRunSkipped => "Dry run enabled, request not sent".to_string(),
            Message::RequestParameter { name, value } => format!(" - {:<16} {}", format!("{}:", name), value),

            // === LISTING MESSAGES ===
            Message::ResolvingUser(username) => format!("Resolving user id of \"{}\"", username),
            Message::ProjectsHeader { username, user_id } => {
                format!("Active projects for \"{}\" (user id {})", username, user_id)
            }
            Message::NoProjectsFound => "No active projects found".to_string(),
            Message::TasksHeader(project_id) => format!("Tasks for project {}", project_id),
            Message::NoTasksFound => "No tasks found".to_string(),

            // === REPORT MESSAGES ===
            Message::ReportHeader { from, to } => format!("Time entries from {} to {}", from, to),
            Message::NoEntriesFound => "No time entries found for this range".to_string(),

            // === DIAGNOSTIC MESSAGES ===
            Message::DumpWritten(path) => format!("Response dump written to {}", path),
            Message::DumpWriteFailed(error) => format!("Failed to write response dump: {}", error),
        };
        write!(f, "{}", text)
    }
}
