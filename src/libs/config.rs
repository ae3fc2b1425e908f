//! Credential file handling.
//!
//! The service is authenticated with three newline-separated plaintext lines:
//! account id, username, password. The file is looked up first as
//! `config.txt` in the working directory and then in the platform
//! application-data directory. A missing file, a missing line, or an empty
//! line is fatal before any network call is made.

use super::data_storage::DataStorage;
use crate::libs::errors::AceError;
use crate::libs::messages::Message;
use anyhow::Result;
use std::fs;
use std::path::PathBuf;

pub const CONFIG_FILE_NAME: &str = "config.txt";

#[derive(Debug, Clone)]
pub struct Credentials {
    pub account: String,
    pub username: String,
    pub password: String,
}

impl Credentials {
    /// Loads credentials from the working directory or the data directory.
    pub fn read() -> Result<Self> {
        let path = Self::locate()?;
        let text = fs::read_to_string(&path).map_err(|e| AceError::Config(format!("{}: {}", path.display(), e)))?;
        Self::parse(&text)
    }

    /// Parses the three-line credential format.
    pub fn parse(text: &str) -> Result<Self> {
        let mut lines = text.lines().map(|line| line.trim_end_matches('\r'));
        let mut next_line = |name: &str| -> Result<String> {
            match lines.next() {
                Some(line) if !line.trim().is_empty() => Ok(line.to_string()),
                _ => Err(AceError::Config(format!("missing {} line", name)).into()),
            }
        };
        Ok(Self {
            account: next_line("account")?,
            username: next_line("username")?,
            password: next_line("password")?,
        })
    }

    /// Writes the credentials to the data directory.
    pub fn save(&self) -> Result<PathBuf> {
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        fs::write(&path, format!("{}\n{}\n{}\n", self.account, self.username, self.password))?;
        Ok(path)
    }

    /// Working-directory `config.txt` wins over the data-directory copy.
    fn locate() -> Result<PathBuf> {
        let local = PathBuf::from(CONFIG_FILE_NAME);
        if local.exists() {
            return Ok(local);
        }
        let stored = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if stored.exists() {
            return Ok(stored);
        }
        Err(AceError::Config(Message::ConfigFileNotFound(CONFIG_FILE_NAME.to_string()).to_string()).into())
    }
}
