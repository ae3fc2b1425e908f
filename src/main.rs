use acetime::commands::Cli;
use acetime::libs::errors::AceError;
use acetime::msg_error;

/// Single top-level error handler: every component returns typed errors, and
/// only this function maps them to exit codes.
#[tokio::main]
async fn main() {
    if let Err(err) = Cli::menu().await {
        msg_error!(err);
        let code = err.downcast_ref::<AceError>().map(AceError::exit_code).unwrap_or(1);
        std::process::exit(code);
    }
}
