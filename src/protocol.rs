//! Commands exchanged between the extension surface and the page

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Request sent across the extension/page boundary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum Command {
    /// Flip the overlay on or off
    Toggle,
    /// Report whether the overlay is on
    GetStatus,
    /// Every resolved property of the first element matching `selector`
    GetComputedStyle { selector: String },
}

impl Command {
    /// Wire name of the command
    pub fn action(&self) -> &'static str {
        match self {
            Command::Toggle => "toggle",
            Command::GetStatus => "getStatus",
            Command::GetComputedStyle { .. } => "getComputedStyle",
        }
    }
}

/// Reply to a [`Command`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Response {
    /// `{"enabled": bool}`
    Status { enabled: bool },
    /// Property map, or `null` when the selector matched nothing
    Style(Option<BTreeMap<String, String>>),
}

impl Response {
    /// The enabled flag, if this is a status reply
    pub fn enabled(&self) -> Option<bool> {
        match self {
            Response::Status { enabled } => Some(*enabled),
            Response::Style(_) => None,
        }
    }
}
