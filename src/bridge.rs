//! JSON request/response bridge between the front end and [`App`].
//!
//! A request names one of the facade methods and passes its arguments
//! positionally:
//!
//! ```json
//! {"id": 7, "method": "ExportLogs", "args": ["/tmp/logs.json", "{\"a\":1}"]}
//! ```
//!
//! The response echoes `id` and carries either `ok` with the result or `err`
//! with a `{kind, message}` pair:
//!
//! ```json
//! {"id": 7, "ok": null}
//! {"id": 8, "err": {"kind": "cancelled", "message": "dialog cancelled by user"}}
//! ```

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::app::{path_text, App};
use crate::error::AppError;

/// Error kind for requests the bridge cannot dispatch.
pub const BAD_REQUEST: &str = "bad_request";

/// A call from the front end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
    /// Opaque correlation value echoed in the response.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    /// Facade method name, e.g. `ImportLogs`.
    pub method: String,
    /// Positional arguments.
    #[serde(default)]
    pub args: Vec<Value>,
}

/// Failure returned to the front end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeError {
    /// Stable machine-readable kind (`cancelled`, `dialog`, `malformed_json`,
    /// `io` or `bad_request`).
    pub kind: String,
    /// Human-readable description.
    pub message: String,
}

impl BridgeError {
    fn bad_request(message: impl Into<String>) -> Self {
        Self { kind: BAD_REQUEST.to_string(), message: message.into() }
    }
}

impl From<AppError> for BridgeError {
    fn from(err: AppError) -> Self {
        Self { kind: err.kind().to_string(), message: err.to_string() }
    }
}

/// Result half of a [`Response`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// The call succeeded with this value.
    Ok(Value),
    /// The call failed.
    Err(BridgeError),
}

/// Reply to one [`Request`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    /// Copied from the request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    /// Result of the call.
    #[serde(flatten)]
    pub outcome: Outcome,
}

/// Dispatch one request to the facade.
pub fn handle(app: &App, request: Request) -> Response {
    let outcome = match dispatch(app, &request.method, &request.args) {
        Ok(value) => Outcome::Ok(value),
        Err(err) => Outcome::Err(err),
    };
    Response { id: request.id, outcome }
}

fn dispatch(app: &App, method: &str, args: &[Value]) -> Result<Value, BridgeError> {
    match method {
        "SelectSaveFileUri" => {
            // The prefix may be omitted, in which case it is empty.
            let prefix = match args {
                [] => "",
                [_] => string_arg(args, 0, "prefix")?,
                _ => return Err(arity(method, "0 or 1", args.len())),
            };
            let path = app.select_save_file_uri(prefix)?;
            path_value(path)
        }
        "ExportLogs" => {
            expect_arity(method, args, 2)?;
            let path = string_arg(args, 0, "path")?;
            let data = string_arg(args, 1, "data")?;
            app.export_logs(Path::new(path), data)?;
            Ok(Value::Null)
        }
        "SelectFile" => {
            expect_arity(method, args, 0)?;
            path_value(app.select_file()?)
        }
        "ImportLogs" => {
            expect_arity(method, args, 1)?;
            let path = string_arg(args, 0, "path")?;
            Ok(Value::String(app.import_logs(Path::new(path))?))
        }
        other => Err(BridgeError::bad_request(format!("unknown method: {other}"))),
    }
}

fn arity(method: &str, expected: &str, got: usize) -> BridgeError {
    BridgeError::bad_request(format!("{method} takes {expected} argument(s), got {got}"))
}

fn expect_arity(method: &str, args: &[Value], expected: usize) -> Result<(), BridgeError> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(arity(method, &expected.to_string(), args.len()))
    }
}

fn string_arg<'a>(args: &'a [Value], index: usize, name: &str) -> Result<&'a str, BridgeError> {
    args.get(index)
        .and_then(Value::as_str)
        .ok_or_else(|| BridgeError::bad_request(format!("argument `{name}` must be a string")))
}

fn path_value(path: PathBuf) -> Result<Value, BridgeError> {
    Ok(Value::String(path_text(path)?))
}

/// Serve newline-delimited requests from `reader` until EOF, writing one
/// response line per request to `writer`.
///
/// Blank lines are skipped. Lines that are not a valid request get a
/// `bad_request` response and the loop carries on.
///
/// # Errors
///
/// Returns an error only if reading from `reader` or writing to `writer`
/// fails.
pub fn serve<R: BufRead, W: Write>(app: &App, reader: R, mut writer: W) -> io::Result<()> {
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let response = match serde_json::from_str::<Request>(&line) {
            Ok(request) => {
                tracing::debug!(method = %request.method, "bridge request");
                handle(app, request)
            }
            Err(err) => {
                tracing::warn!(error = %err, "unparseable bridge request");
                Response {
                    id: None,
                    outcome: Outcome::Err(BridgeError::bad_request(format!("invalid request: {err}"))),
                }
            }
        };
        serde_json::to_writer(&mut writer, &response)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
    }
    Ok(())
}
