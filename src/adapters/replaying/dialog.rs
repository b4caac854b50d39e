//! Replaying adapter for the `Dialog` port.

use std::path::PathBuf;
use std::sync::Mutex;

use super::{next_output, replay_result};
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::dialog::{Dialog, DialogError, OpenDialogOptions, SaveDialogOptions};

/// Replays recorded dialog outcomes without showing any window.
pub struct ReplayingDialog {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingDialog {
    /// Creates a new replaying dialog from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

impl Dialog for ReplayingDialog {
    fn save_file(&self, _options: &SaveDialogOptions) -> Result<Option<PathBuf>, DialogError> {
        replay_result(next_output(&self.replayer, "dialog", "save_file"), "dialog::save_file")
    }

    fn open_file(&self, _options: &OpenDialogOptions) -> Result<Option<PathBuf>, DialogError> {
        replay_result(next_output(&self.replayer, "dialog", "open_file"), "dialog::open_file")
    }
}
