//! Application facade exposed to the front end.

use std::fmt::Display;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local, TimeZone};

use crate::context::ServiceContext;
use crate::error::AppError;
use crate::ports::dialog::{FileFilter, OpenDialogOptions, SaveDialogOptions};
use crate::pretty;

const SAVE_TITLE: &str = "Please select export file uri.";
const OPEN_TITLE: &str = "Please select a file.";

/// Timestamp layout of default export filenames: `YYYYMMDD_HHMM`.
const FILE_STAMP: &str = "%Y%m%d_%H%M";

/// Default export filename: `<prefix>_<YYYYMMDD_HHMM>.json`.
pub fn default_file_name<Tz>(prefix: &str, now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format!("{prefix}_{}.json", now.format(FILE_STAMP))
}

/// Converts a selected path into the text handed back to callers.
///
/// # Errors
///
/// [`AppError::NonUtf8Path`] if the path is not valid UTF-8, since a lossy
/// string would name a different file on the next call.
pub fn path_text(path: PathBuf) -> Result<String, AppError> {
    path.into_os_string().into_string().map_err(|raw| AppError::NonUtf8Path(PathBuf::from(raw)))
}

/// The four operations the front end calls.
///
/// Holds the runtime context it was constructed with; every call is
/// otherwise stateless.
pub struct App {
    ctx: ServiceContext,
}

impl App {
    /// Creates the facade over a runtime context.
    #[must_use]
    pub fn new(ctx: ServiceContext) -> Self {
        Self { ctx }
    }

    /// Asks the user where to save an export.
    ///
    /// The dialog is pre-filled with [`default_file_name`] stamped with the
    /// local time.
    ///
    /// # Errors
    ///
    /// [`AppError::Cancelled`] if the user dismisses the dialog,
    /// [`AppError::Dialog`] if it cannot be shown.
    pub fn select_save_file_uri(&self, prefix: &str) -> Result<PathBuf, AppError> {
        let now = self.ctx.clock.now().with_timezone(&Local);
        let options = SaveDialogOptions {
            title: SAVE_TITLE.to_string(),
            default_filename: default_file_name(prefix, &now),
            filters: vec![FileFilter::json()],
        };
        let chosen = self.ctx.dialog.save_file(&options)?;
        picked(chosen, "save")
    }

    /// Re-indents `data` and writes it to `path`, replacing any existing file.
    ///
    /// # Errors
    ///
    /// [`AppError::MalformedJson`] if `data` is not valid JSON, in which case
    /// nothing is written. [`AppError::Io`] if the write fails.
    pub fn export_logs(&self, path: &Path, data: &str) -> Result<(), AppError> {
        let pretty = pretty::indent(data).inspect_err(|err| {
            tracing::warn!(path = %path.display(), error = %err, "export rejected");
        })?;
        self.ctx.fs.write(path, pretty.as_bytes()).map_err(|source| {
            tracing::warn!(path = %path.display(), error = %source, "export failed");
            AppError::Io { path: path.to_path_buf(), source }
        })?;
        tracing::info!(path = %path.display(), bytes = pretty.len(), "logs exported");
        Ok(())
    }

    /// Asks the user for a JSON file to import.
    ///
    /// # Errors
    ///
    /// [`AppError::Cancelled`] if the user dismisses the dialog,
    /// [`AppError::Dialog`] if it cannot be shown.
    pub fn select_file(&self) -> Result<PathBuf, AppError> {
        let options =
            OpenDialogOptions { title: OPEN_TITLE.to_string(), filters: vec![FileFilter::json()] };
        let chosen = self.ctx.dialog.open_file(&options)?;
        picked(chosen, "open")
    }

    /// Returns the raw contents of `path`. The front end does the parsing.
    ///
    /// # Errors
    ///
    /// [`AppError::Io`] if the file cannot be read (missing, permission
    /// denied). Bytes that are not UTF-8 come back as U+FFFD.
    pub fn import_logs(&self, path: &Path) -> Result<String, AppError> {
        let contents = self.ctx.fs.read_to_string(path).map_err(|source| {
            tracing::warn!(path = %path.display(), error = %source, "import failed");
            AppError::Io { path: path.to_path_buf(), source }
        })?;
        tracing::info!(path = %path.display(), bytes = contents.len(), "logs imported");
        Ok(contents)
    }
}

fn picked(chosen: Option<PathBuf>, which: &str) -> Result<PathBuf, AppError> {
    match chosen {
        Some(path) => {
            tracing::debug!(dialog = which, path = %path.display(), "file selected");
            Ok(path)
        }
        None => {
            tracing::debug!(dialog = which, "dialog cancelled");
            Err(AppError::Cancelled)
        }
    }
}
