//! Recording adapters that capture interactions to cassettes.

pub mod clock;
pub mod dialog;
pub mod filesystem;

use serde::Serialize;

use crate::cassette::session::SharedRecorder;

/// Record an interaction with a plain (non-`Result`) return value.
///
/// Mirror of `replaying::next_output`.
pub(crate) fn record_interaction<I, O>(
    recorder: &SharedRecorder,
    port: &str,
    method: &str,
    input: &I,
    output: &O,
) where
    I: Serialize + ?Sized,
    O: Serialize + ?Sized,
{
    let input_json = serde_json::to_value(input).expect("failed to serialize recording input");
    let output_json = serde_json::to_value(output).expect("failed to serialize recording output");

    let mut guard = recorder.lock().expect("recorder lock poisoned");
    guard.record(port, method, input_json, output_json);
}

/// Record a `Result` interaction as `{"ok": value}` or `{"err": error}`.
///
/// Mirror of `replaying::replay_result`.
pub(crate) fn record_result<T, E, I>(
    recorder: &SharedRecorder,
    port: &str,
    method: &str,
    input: &I,
    result: Result<&T, &E>,
) where
    T: Serialize + ?Sized,
    E: Serialize + ?Sized,
    I: Serialize + ?Sized,
{
    let output = match result {
        Ok(v) => serde_json::json!({
            "ok": serde_json::to_value(v).expect("failed to serialize Ok value")
        }),
        Err(e) => serde_json::json!({
            "err": serde_json::to_value(e).expect("failed to serialize Err value")
        }),
    };
    record_interaction(recorder, port, method, input, &output);
}
