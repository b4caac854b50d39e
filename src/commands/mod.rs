//! Command dispatch and handlers.

use std::env;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use crate::app::{path_text, App};
use crate::bridge;
use crate::cli::{Cli, Command};
use crate::context::ServiceContext;

/// Environment variable naming a directory to record port interactions into.
pub const RECORD_ENV: &str = "PROMPTLOG_RECORD";

/// Dispatch a parsed command to its handler.
///
/// With `--replay` every port is served from the cassette. Otherwise, when
/// `PROMPTLOG_RECORD` is set to a directory, all port interactions are
/// recorded to per-port cassette files under it.
///
/// # Errors
///
/// Returns an error string if the context cannot be built or the command fails.
pub fn dispatch(cli: &Cli) -> Result<(), String> {
    let (ctx, session) = if let Some(cassette) = &cli.replay {
        (ServiceContext::replaying(cassette)?, None)
    } else if let Ok(dir) = env::var(RECORD_ENV) {
        let (ctx, session) = ServiceContext::recording_at(PathBuf::from(dir))?;
        (ctx, Some(session))
    } else {
        (ServiceContext::live(), None)
    };

    let app = App::new(ctx);
    let result = run(&cli.command, &app);

    // Finish recording even when the command failed.
    if let Some(session) = session {
        // The adapters hold recorder handles until the app is gone.
        drop(app);
        let dir = session.finish()?;
        tracing::info!(dir = %dir.display(), "recording saved");
    }

    result
}

fn run(command: &Command, app: &App) -> Result<(), String> {
    match command {
        Command::SelectSave { prefix } => {
            let path = app.select_save_file_uri(prefix).map_err(|e| e.to_string())?;
            print_line(&path_text(path).map_err(|e| e.to_string())?)
        }
        Command::Export { path, data } => export(app, path, data.as_deref()),
        Command::SelectFile => {
            let path = app.select_file().map_err(|e| e.to_string())?;
            print_line(&path_text(path).map_err(|e| e.to_string())?)
        }
        Command::Import { path } => {
            let contents = app.import_logs(path).map_err(|e| e.to_string())?;
            io::stdout()
                .lock()
                .write_all(contents.as_bytes())
                .map_err(|e| format!("Failed to write output: {e}"))
        }
        Command::Serve => {
            tracing::info!("serving bridge requests on stdin");
            bridge::serve(app, io::stdin().lock(), io::stdout().lock())
                .map_err(|e| format!("Bridge I/O failed: {e}"))
        }
    }
}

fn export(app: &App, path: &Path, data: Option<&str>) -> Result<(), String> {
    let data = match data {
        Some(data) => data.to_string(),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| format!("Failed to read JSON from stdin: {e}"))?;
            buf
        }
    };
    app.export_logs(path, &data).map_err(|e| e.to_string())
}

fn print_line(line: &str) -> Result<(), String> {
    writeln!(io::stdout().lock(), "{line}").map_err(|e| format!("Failed to write output: {e}"))
}
