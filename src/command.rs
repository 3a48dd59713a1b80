//! defines the client-server wire protocol

use serde::{Deserialize, Serialize};

/// Settings Client Request
#[derive(Serialize, Deserialize, Debug)]
pub enum CommandRequest {
    Add { key: String, value: String },
    Update { key: String, value: String },
    Delete { key: String },
    View {},
}

/// Settings Server Response
#[derive(Serialize, Deserialize, Debug)]
pub enum CommandResponse {
    Message { text: String },
    Report { text: String },
    Error { reason: String },
}
