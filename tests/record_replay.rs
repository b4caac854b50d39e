//! Record-replay round trip through the application facade.
//!
//! 1. Drive every facade operation over recording adapters (live clock and
//!    filesystem, scripted dialog).
//! 2. Replay the per-port cassettes with the exported file deleted.
//! 3. Assert the replayed results match the recorded ones.

use std::path::PathBuf;

use promptlog::adapters::live::{clock::LiveClock, filesystem::LiveFileSystem};
use promptlog::adapters::recording::{
    clock::RecordingClock, dialog::RecordingDialog, filesystem::RecordingFileSystem,
};
use promptlog::cassette::config::CassetteConfig;
use promptlog::cassette::session::RecordingSession;
use promptlog::context::ServiceContext;
use promptlog::ports::{Dialog, DialogError, OpenDialogOptions, SaveDialogOptions};
use promptlog::{App, AppError};

/// Always picks the same file, as a user would.
struct PickSame(PathBuf);

impl Dialog for PickSame {
    fn save_file(&self, _: &SaveDialogOptions) -> Result<Option<PathBuf>, DialogError> {
        Ok(Some(self.0.clone()))
    }

    fn open_file(&self, _: &OpenDialogOptions) -> Result<Option<PathBuf>, DialogError> {
        Ok(Some(self.0.clone()))
    }
}

/// Runs the export-then-import flow the front end performs.
fn export_and_import(app: &App, data: &str) -> Result<(PathBuf, PathBuf, String), AppError> {
    let target = app.select_save_file_uri("prompt_log")?;
    app.export_logs(&target, data)?;
    let source = app.select_file()?;
    let contents = app.import_logs(&source)?;
    Ok((target, source, contents))
}

#[test]
fn recorded_session_replays_identically() {
    let base = std::env::temp_dir().join("promptlog_record_replay");
    let _ = std::fs::remove_dir_all(&base);
    std::fs::create_dir_all(&base).unwrap();
    let log_path = base.join("prompt_log.json");
    let data = r#"{"allPositiveTagList":["masterpiece"],"allNegativeTagList":["blurry"],"promptHistory":[]}"#;

    // --- Record ---
    let session = RecordingSession::new_in(&base.join("cassettes")).unwrap();
    let app = App::new(ServiceContext {
        clock: Box::new(RecordingClock::new(Box::new(LiveClock), session.clock.clone())),
        fs: Box::new(RecordingFileSystem::new(Box::new(LiveFileSystem), session.fs.clone())),
        dialog: Box::new(RecordingDialog::new(
            Box::new(PickSame(log_path.clone())),
            session.dialog.clone(),
        )),
    });
    let recorded = export_and_import(&app, data).unwrap();
    drop(app);
    let cassette_dir = session.finish().unwrap();

    assert_eq!(recorded.0, log_path);
    let reparsed: serde_json::Value = serde_json::from_str(&recorded.2).unwrap();
    assert_eq!(reparsed, serde_json::from_str::<serde_json::Value>(data).unwrap());

    // --- Replay without the file on disk ---
    std::fs::remove_file(&log_path).unwrap();
    for _ in 0..2 {
        let config = CassetteConfig::from_session_dir(&cassette_dir);
        let app = App::new(ServiceContext::replaying_from(&config).unwrap());
        let replayed = export_and_import(&app, data).unwrap();
        assert_eq!(replayed, recorded);
    }
    assert!(!log_path.exists(), "replay must not touch the disk");

    let _ = std::fs::remove_dir_all(&base);
}

#[test]
fn recorded_failure_replays_as_same_error_kind() {
    let base = std::env::temp_dir().join("promptlog_record_replay_failure");
    let _ = std::fs::remove_dir_all(&base);
    std::fs::create_dir_all(&base).unwrap();
    let missing = base.join("never_written.json");

    let session = RecordingSession::new_in(&base.join("cassettes")).unwrap();
    let app = App::new(ServiceContext {
        clock: Box::new(LiveClock),
        fs: Box::new(RecordingFileSystem::new(Box::new(LiveFileSystem), session.fs.clone())),
        dialog: Box::new(PickSame(missing.clone())),
    });
    let err = app.import_logs(&missing).unwrap_err();
    assert_eq!(err.kind(), "io");
    drop(app);
    let cassette_dir = session.finish().unwrap();

    let config = CassetteConfig::from_session_dir(&cassette_dir);
    let app = App::new(ServiceContext::replaying_from(&config).unwrap());
    match app.import_logs(&missing) {
        Err(AppError::Io { source, .. }) => {
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("expected replayed NotFound, got {other:?}"),
    }

    let _ = std::fs::remove_dir_all(&base);
}
