//! Error taxonomy for the facade operations.

use std::io;
use std::path::PathBuf;

use crate::ports::dialog::DialogError;

/// Failure of one facade operation.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The user dismissed the dialog without choosing a file.
    #[error("dialog cancelled by user")]
    Cancelled,
    /// The dialog toolkit failed to show the dialog.
    #[error(transparent)]
    Dialog(#[from] DialogError),
    /// Export data is not valid JSON.
    #[error("malformed JSON: {0}")]
    MalformedJson(#[from] serde_json::Error),
    /// Reading or writing the log file failed.
    #[error("{}: {source}", .path.display())]
    Io {
        /// File the operation was applied to.
        path: PathBuf,
        /// Underlying OS error.
        #[source]
        source: io::Error,
    },
    /// A selected path cannot be returned as a UTF-8 string.
    #[error("selected path is not valid UTF-8: {}", .0.display())]
    NonUtf8Path(PathBuf),
}

impl AppError {
    /// Stable machine-readable name used on the bridge.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Cancelled => "cancelled",
            Self::Dialog(_) => "dialog",
            Self::MalformedJson(_) => "malformed_json",
            Self::Io { .. } | Self::NonUtf8Path(_) => "io",
        }
    }
}
