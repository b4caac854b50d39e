//! Records interactions into a cassette file.

use std::io;
use std::path::PathBuf;

use chrono::{DateTime, Utc};

use super::format::{Cassette, Interaction};

/// Version stamped into every cassette this build writes.
pub const RECORDER_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Collects interactions in call order and writes them as one YAML cassette.
#[derive(Debug)]
pub struct CassetteRecorder {
    path: PathBuf,
    name: String,
    started_at: DateTime<Utc>,
    interactions: Vec<Interaction>,
}

impl CassetteRecorder {
    /// Start a cassette named `name` that [`finish`](Self::finish) writes to `path`.
    pub fn new(path: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        Self { path: path.into(), name: name.into(), started_at: Utc::now(), interactions: Vec::new() }
    }

    /// Append an interaction, numbered after the ones already recorded.
    pub fn record(
        &mut self,
        port: impl Into<String>,
        method: impl Into<String>,
        input: serde_json::Value,
        output: serde_json::Value,
    ) {
        let seq = self.interactions.len() as u64;
        self.interactions.push(Interaction { seq, port: port.into(), method: method.into(), input, output });
    }

    /// Write the cassette. A port that saw no calls still gets an empty cassette,
    /// so a replay of the same session finds every file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn finish(self) -> io::Result<PathBuf> {
        let cassette = Cassette {
            name: self.name,
            recorded_at: self.started_at,
            version: RECORDER_VERSION.to_string(),
            interactions: self.interactions,
        };
        let yaml = serde_yaml::to_string(&cassette).map_err(io::Error::other)?;
        std::fs::write(&self.path, yaml)?;
        tracing::debug!(
            path = %self.path.display(),
            interactions = cassette.interactions.len(),
            "cassette written"
        );
        Ok(self.path)
    }
}
