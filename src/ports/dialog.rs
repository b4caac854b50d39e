//! Dialog port for native file pickers.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A named file-type filter shown in a dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileFilter {
    /// Label displayed to the user, e.g. `JSON Files (*.json)`.
    pub display_name: String,
    /// Glob pattern, e.g. `*.json`. Multiple patterns are separated by `;`.
    pub pattern: String,
}

impl FileFilter {
    /// The filter used by both log dialogs.
    #[must_use]
    pub fn json() -> Self {
        Self { display_name: "JSON Files (*.json)".into(), pattern: "*.json".into() }
    }

    /// Extensions named by the pattern, without the leading `*.`.
    #[must_use]
    pub fn extensions(&self) -> Vec<&str> {
        self.pattern
            .split(';')
            .map(str::trim)
            .filter_map(|p| p.strip_prefix("*."))
            .filter(|ext| !ext.is_empty() && *ext != "*")
            .collect()
    }
}

/// Options for a save-file dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveDialogOptions {
    /// Window title.
    pub title: String,
    /// Filename pre-filled in the dialog.
    pub default_filename: String,
    /// File-type filters.
    pub filters: Vec<FileFilter>,
}

/// Options for an open-file dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenDialogOptions {
    /// Window title.
    pub title: String,
    /// File-type filters.
    pub filters: Vec<FileFilter>,
}

/// Failure reported by the dialog toolkit itself (not a user cancellation).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("dialog failed: {0}")]
pub struct DialogError(pub String);

/// Opens modal file pickers.
///
/// `Ok(None)` means the user dismissed the dialog without choosing a path.
pub trait Dialog: Send + Sync {
    /// Shows a save-file dialog.
    ///
    /// # Errors
    ///
    /// Returns an error if the dialog could not be shown.
    fn save_file(&self, options: &SaveDialogOptions) -> Result<Option<PathBuf>, DialogError>;

    /// Shows an open-file dialog.
    ///
    /// # Errors
    ///
    /// Returns an error if the dialog could not be shown.
    fn open_file(&self, options: &OpenDialogOptions) -> Result<Option<PathBuf>, DialogError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_filter_extensions() {
        assert_eq!(FileFilter::json().extensions(), vec!["json"]);
    }

    #[test]
    fn multi_pattern_extensions_skip_wildcards() {
        let filter = FileFilter { display_name: "Logs".into(), pattern: "*.json; *.txt;*.*".into() };
        assert_eq!(filter.extensions(), vec!["json", "txt"]);
    }
}
