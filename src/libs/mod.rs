//! Core library modules for the acetime client.
//!
//! Shared infrastructure beneath the API client and the CLI commands:
//! credential handling, the typed error taxonomy, the message system, date
//! and week arithmetic, report layout, and console rendering.

pub mod config;
pub mod data_storage;
pub mod dump;
pub mod errors;
pub mod messages;
pub mod range;
pub mod report;
pub mod view;
pub mod week;
