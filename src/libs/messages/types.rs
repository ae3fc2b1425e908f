#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigSetupHeader,
    ConfigSaved(String),        // path
    ConfigFileNotFound(String), // file name
    PromptAccount,
    PromptUsername,
    PromptPassword,

    // === SESSION MESSAGES ===
    LoggingIn { account: String, username: String },

    // === ENTRY MESSAGES ===
    SavingEntry { date: String, hours: f64 },
    EntrySaved { date: String, hours: f64 },
    EntryUpdated(u64), // line id
    DryRunSkipped,
    RequestParameter { name: String, value: String },

    // === LISTING MESSAGES ===
    ResolvingUser(String), // username
    ProjectsHeader { username: String, user_id: u32 },
    NoProjectsFound,
    TasksHeader(u32), // project id
    NoTasksFound,

    // === REPORT MESSAGES ===
    ReportHeader { from: String, to: String },
    NoEntriesFound,

    // === DIAGNOSTIC MESSAGES ===
    DumpWritten(String),     // path
    DumpWriteFailed(String), // error
}
