//! Typed error taxonomy for the client.
//!
//! Every failure the tool can hit maps to one `AceError` kind, and each kind
//! maps to a distinct process exit code. Components never exit on their own;
//! errors propagate up to `main`, which performs the mapping once.

use thiserror::Error;

/// All failure kinds of a single run.
///
/// A run performs exactly one operation, so every error is terminal: there is
/// no retry, no partial success, and no batching to reason about. Note that an
/// empty listing from `projects`/`tasks`/`log` is a successful empty result,
/// not `NotFound`; that kind is reserved for exact-match lookups that came
/// back empty where one row was required.
#[derive(Debug, Error)]
pub enum AceError {
    /// The credential file is missing or malformed.
    #[error("credential file error: {0}")]
    Config(String),

    /// The login response carried no session token.
    #[error("authentication failed: {0}")]
    Auth(String),

    /// Network or HTTP-level failure, or an unparseable response body.
    #[error("transport failure: {0}")]
    Transport(String),

    /// An exact-match lookup returned an empty result set.
    #[error("not found: {0}")]
    NotFound(String),

    /// The service answered with HTTP success but an embedded error
    /// description. The service's own message is carried verbatim.
    #[error("service rejected the request: {0}")]
    RemoteValidation(String),

    /// A command-line argument failed validation before any network call.
    #[error("invalid input: {0}")]
    InputValidation(String),
}

impl AceError {
    /// Process exit code for this error kind.
    pub fn exit_code(&self) -> i32 {
        match self {
            AceError::InputValidation(_) => 2,
            AceError::Config(_) => 3,
            AceError::Auth(_) => 4,
            AceError::Transport(_) => 5,
            AceError::NotFound(_) => 6,
            AceError::RemoteValidation(_) => 7,
        }
    }
}
