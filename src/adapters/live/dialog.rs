//! Live dialog adapter using native pickers from `rfd`.

use std::path::PathBuf;

use rfd::FileDialog;

use crate::ports::dialog::{Dialog, DialogError, FileFilter, OpenDialogOptions, SaveDialogOptions};

/// Live dialog adapter showing blocking native file pickers.
pub struct LiveDialog;

fn with_filters(mut dialog: FileDialog, filters: &[FileFilter]) -> FileDialog {
    for filter in filters {
        let extensions = filter.extensions();
        if !extensions.is_empty() {
            dialog = dialog.add_filter(filter.display_name.as_str(), &extensions);
        }
    }
    dialog
}

impl Dialog for LiveDialog {
    fn save_file(&self, options: &SaveDialogOptions) -> Result<Option<PathBuf>, DialogError> {
        let dialog = FileDialog::new()
            .set_title(options.title.as_str())
            .set_file_name(options.default_filename.as_str());
        Ok(with_filters(dialog, &options.filters).save_file())
    }

    fn open_file(&self, options: &OpenDialogOptions) -> Result<Option<PathBuf>, DialogError> {
        let dialog = FileDialog::new().set_title(options.title.as_str());
        Ok(with_filters(dialog, &options.filters).pick_file())
    }
}
