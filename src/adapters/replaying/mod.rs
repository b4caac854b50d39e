//! Replaying adapters that serve recorded interactions back.

pub mod clock;
pub mod dialog;
pub mod filesystem;

pub use clock::ReplayingClock;
pub use dialog::ReplayingDialog;
pub use filesystem::ReplayingFileSystem;

use std::sync::Mutex;

use serde::de::DeserializeOwned;

use crate::cassette::replayer::CassetteReplayer;

/// Take the next recorded output for `port::method`.
pub(crate) fn next_output(
    replayer: &Mutex<CassetteReplayer>,
    port: &str,
    method: &str,
) -> serde_json::Value {
    let mut replayer = replayer.lock().expect("replayer lock poisoned");
    replayer.next_interaction(port, method).output
}

/// Decode an `{"ok": value}` / `{"err": error}` output.
///
/// # Panics
///
/// Panics if the output matches neither shape, since a malformed cassette
/// cannot be replayed meaningfully.
pub(crate) fn replay_result<T, E>(output: serde_json::Value, context: &str) -> Result<T, E>
where
    T: DeserializeOwned,
    E: DeserializeOwned,
{
    let mut map = match output {
        serde_json::Value::Object(map) => map,
        other => panic!("{context}: expected {{\"ok\": ..}} or {{\"err\": ..}}, got {other}"),
    };
    if let Some(err) = map.remove("err") {
        let err = serde_json::from_value(err)
            .unwrap_or_else(|e| panic!("{context}: failed to deserialize err: {e}"));
        return Err(err);
    }
    let ok = map
        .remove("ok")
        .unwrap_or_else(|| panic!("{context}: output has neither \"ok\" nor \"err\""));
    Ok(serde_json::from_value(ok).unwrap_or_else(|e| panic!("{context}: failed to deserialize ok: {e}")))
}

#[cfg(test)]
pub(crate) fn replayer_for(interactions: Vec<crate::cassette::format::Interaction>) -> CassetteReplayer {
    let cassette = crate::cassette::format::Cassette {
        name: "test".into(),
        recorded_at: chrono::Utc::now(),
        version: "0.1.0".into(),
        interactions,
    };
    CassetteReplayer::new(&cassette)
}
