//! Raw-response diagnostic dumps.
//!
//! When verbose diagnostics are enabled, every response body is written to a
//! timestamped file in the working directory before parsing. Dumps are purely
//! for offline inspection; a failed write is logged and never propagates.

use crate::libs::messages::Message;
use crate::msg_debug;
use chrono::Local;
use std::fs;

pub fn write(fct: &str, body: &str) {
    let file_name = format!("{}_{}.xml", fct.to_lowercase(), Local::now().format("%Y%m%d_%H%M%S"));
    match fs::write(&file_name, body) {
        Ok(()) => msg_debug!(Message::DumpWritten(file_name)),
        Err(e) => msg_debug!(Message::DumpWriteFailed(e.to_string())),
    }
}
