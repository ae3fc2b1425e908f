//! # Acetime - AceProject timesheet client
//!
//! A command-line client for the AceProject timesheet web service.
//!
//! ## Features
//!
//! - **Session Login**: Authenticates against the XML-over-HTTP API once per run
//! - **Time Entries**: Add new entries or edit existing ones by line id
//! - **Listings**: Active projects for a user, tasks of a project
//! - **Activity Log**: Date-ranged time report with work-day statistics
//! - **Diagnostics**: Verbose tracing and raw response dumps, dry-run mode
//!
//! ## Usage
//!
//! ```rust,no_run
//! use acetime::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
