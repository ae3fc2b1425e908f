//! API plumbing for the AceProject service.
//!
//! The service is an RPC-style XML-over-HTTP API: every call is one GET
//! against a fixed base URL with a function selector (`fct`), the session
//! token, and per-function filters. Responses come back in two shapes
//! depending on the requested format marker:
//!
//! - `format=xml`: child elements carry the result fields as attributes,
//!   one element per row.
//! - `format=ds`: a dataset whose rows are elements carrying the result
//!   fields as leaf child elements with text.
//!
//! Both shapes collapse into the same [`Row`] attribute bag here, so the
//! client code never cares which format a function happens to speak. This
//! wire format is owned by the third-party service and is treated as a fixed
//! external contract.

use crate::libs::errors::AceError;
use roxmltree::{Document, Node};
use std::collections::HashMap;

pub mod ace;

pub use ace::Ace;

/// Field name the service uses to smuggle errors into successful responses.
const ERROR_DESCRIPTION: &str = "ERRORDESCRIPTION";

/// One result row: a flat string-to-string field bag.
#[derive(Debug, Clone, Default)]
pub struct Row(HashMap<String, String>);

impl Row {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Parses a response body into its sequence of rows.
///
/// Every element contributes one row built from its attributes plus the text
/// of its leaf children; empty rows are dropped. A body that is not
/// well-formed XML is a transport-level failure.
pub fn parse_rows(body: &str) -> Result<Vec<Row>, AceError> {
    let doc = Document::parse(body).map_err(|e| AceError::Transport(format!("malformed XML response: {}", e)))?;
    Ok(doc
        .root_element()
        .descendants()
        .filter(|node| node.is_element())
        .map(element_row)
        .filter(|row| !row.is_empty())
        .collect())
}

/// The service's embedded error description, if any row carries one.
pub fn remote_error(rows: &[Row]) -> Option<&str> {
    rows.iter().find_map(|row| row.get(ERROR_DESCRIPTION))
}

fn element_row(node: Node) -> Row {
    let mut fields = HashMap::new();
    for attr in node.attributes() {
        fields.insert(attr.name().to_string(), attr.value().to_string());
    }
    for child in node.children().filter(|child| child.is_element()) {
        if child.children().any(|grandchild| grandchild.is_element()) {
            continue;
        }
        if let Some(text) = child.text() {
            let text = text.trim();
            if !text.is_empty() {
                fields.insert(child.tag_name().name().to_string(), text.to_string());
            }
        }
    }
    Row(fields)
}
