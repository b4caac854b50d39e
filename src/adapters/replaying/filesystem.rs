//! Replaying adapter for the `FileSystem` port.

use std::io;
use std::path::Path;
use std::sync::Mutex;

use super::{next_output, replay_result};
use crate::cassette::format::RecordedIoError;
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::filesystem::FileSystem;

/// Replays recorded filesystem results. Nothing touches the real disk.
pub struct ReplayingFileSystem {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingFileSystem {
    /// Creates a new replaying filesystem from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

impl FileSystem for ReplayingFileSystem {
    fn read_to_string(&self, _path: &Path) -> io::Result<String> {
        let output = next_output(&self.replayer, "fs", "read_to_string");
        replay_result::<String, RecordedIoError>(output, "fs::read_to_string").map_err(Into::into)
    }

    fn write(&self, _path: &Path, _contents: &[u8]) -> io::Result<()> {
        let output = next_output(&self.replayer, "fs", "write");
        replay_result::<(), RecordedIoError>(output, "fs::write").map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::adapters::replaying::replayer_for;
    use crate::cassette::format::Interaction;

    fn fs_call(method: &str, output: serde_json::Value) -> Interaction {
        Interaction { seq: 0, port: "fs".into(), method: method.into(), input: json!({}), output }
    }

    #[test]
    fn replays_read_contents() {
        let fs = ReplayingFileSystem::new(replayer_for(vec![fs_call(
            "read_to_string",
            json!({"ok": "{\"promptHistory\": []}"}),
        )]));
        let contents = fs.read_to_string(Path::new("/logs/a.json")).unwrap();
        assert_eq!(contents, "{\"promptHistory\": []}");
    }

    #[test]
    fn replays_read_error_with_kind() {
        let fs = ReplayingFileSystem::new(replayer_for(vec![fs_call(
            "read_to_string",
            json!({"err": {"kind": "permission_denied", "message": "denied"}}),
        )]));
        let err = fs.read_to_string(Path::new("/root/secret.json")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::PermissionDenied);
    }

    #[test]
    fn replays_successful_write() {
        let fs = ReplayingFileSystem::new(replayer_for(vec![fs_call("write", json!({"ok": null}))]));
        assert!(fs.write(Path::new("/logs/a.json"), b"{}").is_ok());
    }
}
