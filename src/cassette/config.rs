//! Cassette configuration for composable per-port replay.

use std::path::{Path, PathBuf};

use super::format::Cassette;
use super::replayer::CassetteReplayer;

/// Per-port cassette file paths. Ports without a cassette path panic if
/// called during replay.
#[derive(Debug, Clone, Default)]
pub struct CassetteConfig {
    /// Path to the clock port cassette file.
    pub clock: Option<PathBuf>,
    /// Path to the filesystem port cassette file.
    pub fs: Option<PathBuf>,
    /// Path to the dialog port cassette file.
    pub dialog: Option<PathBuf>,
}

/// Per-port replayers, each with its own interaction stream.
#[derive(Debug)]
pub struct PortReplayers {
    /// Replayer for the clock port.
    pub clock: Option<CassetteReplayer>,
    /// Replayer for the filesystem port.
    pub fs: Option<CassetteReplayer>,
    /// Replayer for the dialog port.
    pub dialog: Option<CassetteReplayer>,
}

impl CassetteConfig {
    /// Picks up `<dir>/<port>.cassette.yaml` for every port whose file
    /// exists, matching the layout a recording session writes.
    #[must_use]
    pub fn from_session_dir(dir: &Path) -> Self {
        let existing = |port: &str| {
            let path = dir.join(format!("{port}.cassette.yaml"));
            path.is_file().then_some(path)
        };
        Self { clock: existing("clock"), fs: existing("fs"), dialog: existing("dialog") }
    }

    /// Load a cassette file and create a replayer over all its interactions.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<CassetteReplayer, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read cassette file {}: {e}", path.display()))?;
        let cassette: Cassette = serde_yaml::from_str(&content)
            .map_err(|e| format!("Failed to parse cassette file {}: {e}", path.display()))?;
        Ok(CassetteReplayer::new(&cassette))
    }

    /// Load all configured per-port cassette files and create replayers.
    ///
    /// # Errors
    ///
    /// Returns an error if any configured cassette file cannot be read or parsed.
    pub fn load_all(&self) -> Result<PortReplayers, String> {
        Ok(PortReplayers {
            clock: self.clock.as_deref().map(Self::load).transpose()?,
            fs: self.fs.as_deref().map(Self::load).transpose()?,
            dialog: self.dialog.as_deref().map(Self::load).transpose()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cassette::format::Interaction;
    use chrono::Utc;
    use serde_json::json;

    fn write_cassette(path: &Path, interactions: Vec<Interaction>) {
        let cassette = Cassette {
            name: "test".into(),
            recorded_at: Utc::now(),
            version: "0.1.0".into(),
            interactions,
        };
        std::fs::write(path, serde_yaml::to_string(&cassette).unwrap()).unwrap();
    }

    #[test]
    fn load_per_port_cassettes() {
        let dir = std::env::temp_dir().join("promptlog_config_ports");
        std::fs::create_dir_all(&dir).unwrap();

        let dialog_path = dir.join("dialog.cassette.yaml");
        write_cassette(
            &dialog_path,
            vec![Interaction {
                seq: 0,
                port: "dialog".into(),
                method: "open_file".into(),
                input: json!({}),
                output: json!({"ok": "/logs/a.json"}),
            }],
        );

        let config = CassetteConfig { dialog: Some(dialog_path), ..CassetteConfig::default() };
        let mut replayers = config.load_all().unwrap();

        let dialog = replayers.dialog.as_mut().unwrap();
        assert_eq!(dialog.next_interaction("dialog", "open_file").output, json!({"ok": "/logs/a.json"}));
        assert!(replayers.clock.is_none());
        assert!(replayers.fs.is_none());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn from_session_dir_only_picks_existing_files() {
        let dir = std::env::temp_dir().join("promptlog_config_session_dir");
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        write_cassette(&dir.join("clock.cassette.yaml"), vec![]);

        let config = CassetteConfig::from_session_dir(&dir);
        assert_eq!(config.clock, Some(dir.join("clock.cassette.yaml")));
        assert!(config.fs.is_none());
        assert!(config.dialog.is_none());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn load_reports_unparseable_cassette() {
        let dir = std::env::temp_dir().join("promptlog_config_garbage");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("bad.cassette.yaml");
        std::fs::write(&path, "not: [a, cassette").unwrap();

        let err = CassetteConfig::load(&path).unwrap_err();
        assert!(err.contains("Failed to parse cassette file"));

        let _ = std::fs::remove_dir_all(&dir);
    }
}
