//! Recording adapter for the `Dialog` port.

use std::path::PathBuf;

use super::record_result;
use crate::cassette::session::SharedRecorder;
use crate::ports::dialog::{Dialog, DialogError, OpenDialogOptions, SaveDialogOptions};

/// Records dialog selections while delegating to an inner dialog.
pub struct RecordingDialog {
    inner: Box<dyn Dialog>,
    recorder: SharedRecorder,
}

impl RecordingDialog {
    /// Creates a new recording dialog wrapping the given implementation.
    pub fn new(inner: Box<dyn Dialog>, recorder: SharedRecorder) -> Self {
        Self { inner, recorder }
    }
}

impl Dialog for RecordingDialog {
    fn save_file(&self, options: &SaveDialogOptions) -> Result<Option<PathBuf>, DialogError> {
        let result = self.inner.save_file(options);
        record_result(&self.recorder, "dialog", "save_file", options, result.as_ref());
        result
    }

    fn open_file(&self, options: &OpenDialogOptions) -> Result<Option<PathBuf>, DialogError> {
        let result = self.inner.open_file(options);
        record_result(&self.recorder, "dialog", "open_file", options, result.as_ref());
        result
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use serde_json::json;

    use super::*;
    use crate::cassette::format::Cassette;
    use crate::cassette::recorder::CassetteRecorder;
    use crate::ports::dialog::FileFilter;

    /// Answers every dialog with a fixed outcome.
    struct FixedDialog(Result<Option<PathBuf>, DialogError>);

    impl Dialog for FixedDialog {
        fn save_file(&self, _: &SaveDialogOptions) -> Result<Option<PathBuf>, DialogError> {
            self.0.clone()
        }
        fn open_file(&self, _: &OpenDialogOptions) -> Result<Option<PathBuf>, DialogError> {
            self.0.clone()
        }
    }

    fn recorded(inner: FixedDialog, name: &str) -> Cassette {
        let dir = std::env::temp_dir().join(name);
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("dialog.cassette.yaml");

        let recorder = Arc::new(Mutex::new(CassetteRecorder::new(&path, "test")));
        {
            let dialog = RecordingDialog::new(Box::new(inner), Arc::clone(&recorder));
            let _ = dialog.save_file(&SaveDialogOptions {
                title: "Save".into(),
                default_filename: "logs_20240101_0000.json".into(),
                filters: vec![FileFilter::json()],
            });
            let _ = dialog.open_file(&OpenDialogOptions {
                title: "Open".into(),
                filters: vec![FileFilter::json()],
            });
        }
        Arc::try_unwrap(recorder).unwrap().into_inner().unwrap().finish().unwrap();
        let cassette = serde_yaml::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        let _ = std::fs::remove_dir_all(&dir);
        cassette
    }

    #[test]
    fn records_selected_path_and_options() {
        let cassette =
            recorded(FixedDialog(Ok(Some(PathBuf::from("/tmp/x.json")))), "promptlog_rec_dialog_ok");

        let save = &cassette.interactions[0];
        assert_eq!(save.method, "save_file");
        assert_eq!(save.input["default_filename"], json!("logs_20240101_0000.json"));
        assert_eq!(save.output, json!({"ok": "/tmp/x.json"}));
        assert_eq!(cassette.interactions[1].method, "open_file");
    }

    #[test]
    fn records_cancellation_and_failure() {
        let cancelled = recorded(FixedDialog(Ok(None)), "promptlog_rec_dialog_cancel");
        assert_eq!(cancelled.interactions[0].output, json!({"ok": null}));

        let failed =
            recorded(FixedDialog(Err(DialogError("no display".into()))), "promptlog_rec_dialog_err");
        assert_eq!(failed.interactions[1].output, json!({"err": "no display"}));
    }
}
