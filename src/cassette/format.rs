//! Cassette data structures for recording and replaying interactions.

use std::io;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single recorded interaction with an external port.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Interaction {
    /// Sequence number (assigned automatically by the recorder).
    pub seq: u64,
    /// Port name (`clock`, `fs` or `dialog`).
    pub port: String,
    /// Method name invoked on the port.
    pub method: String,
    /// Input data sent to the port.
    pub input: serde_json::Value,
    /// Output data returned from the port.
    pub output: serde_json::Value,
}

/// A cassette containing a sequence of recorded interactions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cassette {
    /// Human-readable name for this cassette.
    pub name: String,
    /// When this cassette was recorded.
    pub recorded_at: DateTime<Utc>,
    /// Version of promptlog that recorded the cassette.
    pub version: String,
    /// Ordered list of interactions.
    pub interactions: Vec<Interaction>,
}

/// An I/O error as stored in a cassette.
///
/// Only the kinds the facade distinguishes survive a round trip; anything
/// else replays as [`io::ErrorKind::Other`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecordedIoError {
    /// `snake_case` name of the error kind.
    pub kind: String,
    /// Display text of the original error.
    pub message: String,
}

impl From<&io::Error> for RecordedIoError {
    fn from(err: &io::Error) -> Self {
        let kind = match err.kind() {
            io::ErrorKind::NotFound => "not_found",
            io::ErrorKind::PermissionDenied => "permission_denied",
            io::ErrorKind::AlreadyExists => "already_exists",
            io::ErrorKind::InvalidData => "invalid_data",
            io::ErrorKind::InvalidInput => "invalid_input",
            _ => "other",
        };
        Self { kind: kind.to_string(), message: err.to_string() }
    }
}

impl From<RecordedIoError> for io::Error {
    fn from(recorded: RecordedIoError) -> Self {
        let kind = match recorded.kind.as_str() {
            "not_found" => io::ErrorKind::NotFound,
            "permission_denied" => io::ErrorKind::PermissionDenied,
            "already_exists" => io::ErrorKind::AlreadyExists,
            "invalid_data" => io::ErrorKind::InvalidData,
            "invalid_input" => io::ErrorKind::InvalidInput,
            _ => io::ErrorKind::Other,
        };
        io::Error::new(kind, recorded.message)
    }
}
