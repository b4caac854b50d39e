//! Runtime context bundling all port trait objects.

use std::io;
use std::path::{Path, PathBuf};

use crate::adapters::recording::{
    clock::RecordingClock, dialog::RecordingDialog, filesystem::RecordingFileSystem,
};
use crate::adapters::replaying::{ReplayingClock, ReplayingDialog, ReplayingFileSystem};
use crate::cassette::config::CassetteConfig;
use crate::cassette::session::RecordingSession;
use crate::ports::clock::Clock;
use crate::ports::dialog::{Dialog, DialogError, OpenDialogOptions, SaveDialogOptions};
use crate::ports::filesystem::FileSystem;

/// Bundles all port trait objects into the handle the facade is built with.
///
/// Constructors wire up different adapter implementations (live, recording,
/// replaying).
pub struct ServiceContext {
    /// Clock for stamping default filenames.
    pub clock: Box<dyn Clock>,
    /// Filesystem for reading and writing logs.
    pub fs: Box<dyn FileSystem>,
    /// Native file pickers.
    pub dialog: Box<dyn Dialog>,
}

impl ServiceContext {
    /// Creates a live context backed by the system clock, `std::fs` and
    /// native dialogs.
    #[must_use]
    pub fn live() -> Self {
        use crate::adapters::live::clock::LiveClock;
        use crate::adapters::live::dialog::LiveDialog;
        use crate::adapters::live::filesystem::LiveFileSystem;

        Self { clock: Box::new(LiveClock), fs: Box::new(LiveFileSystem), dialog: Box::new(LiveDialog) }
    }

    /// Creates a live context whose every port interaction is recorded into
    /// per-port cassettes under a fresh timestamped directory in `base`.
    ///
    /// The returned session must be finished after this context is dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette directory cannot be created.
    pub fn recording_at(base: PathBuf) -> Result<(Self, RecordingSession), String> {
        let session = RecordingSession::new_in(&base)?;
        let live = Self::live();
        let ctx = Self {
            clock: Box::new(RecordingClock::new(live.clock, session.clock.clone())),
            fs: Box::new(RecordingFileSystem::new(live.fs, session.fs.clone())),
            dialog: Box::new(RecordingDialog::new(live.dialog, session.dialog.clone())),
        };
        Ok((ctx, session))
    }

    /// Creates a replaying context from a single cassette holding every
    /// port's interactions.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be read or parsed.
    pub fn replaying(path: &Path) -> Result<Self, String> {
        // Each port gets its own replayer so per-port cursors are independent.
        Ok(Self {
            clock: Box::new(ReplayingClock::new(CassetteConfig::load(path)?)),
            fs: Box::new(ReplayingFileSystem::new(CassetteConfig::load(path)?)),
            dialog: Box::new(ReplayingDialog::new(CassetteConfig::load(path)?)),
        })
    }

    /// Creates a replaying context from per-port cassette files.
    ///
    /// Ports without a configured cassette panic with a clear message when
    /// called.
    ///
    /// # Errors
    ///
    /// Returns an error if any configured cassette file cannot be read or parsed.
    pub fn replaying_from(config: &CassetteConfig) -> Result<Self, String> {
        let replayers = config.load_all()?;

        Ok(Self {
            clock: match replayers.clock {
                Some(r) => Box::new(ReplayingClock::new(r)),
                None => Box::new(PanickingClock),
            },
            fs: match replayers.fs {
                Some(r) => Box::new(ReplayingFileSystem::new(r)),
                None => Box::new(PanickingFileSystem),
            },
            dialog: match replayers.dialog {
                Some(r) => Box::new(ReplayingDialog::new(r)),
                None => Box::new(PanickingDialog),
            },
        })
    }
}

// --- Panicking adapters for unconfigured ports ---

struct PanickingClock;
impl Clock for PanickingClock {
    fn now(&self) -> chrono::DateTime<chrono::Utc> {
        panic!("Clock port not configured in CassetteConfig: no cassette loaded for clock");
    }
}

struct PanickingFileSystem;
impl FileSystem for PanickingFileSystem {
    fn read_to_string(&self, _path: &Path) -> io::Result<String> {
        panic!("FileSystem port not configured in CassetteConfig: no cassette loaded for fs");
    }
    fn write(&self, _path: &Path, _contents: &[u8]) -> io::Result<()> {
        panic!("FileSystem port not configured in CassetteConfig: no cassette loaded for fs");
    }
}

struct PanickingDialog;
impl Dialog for PanickingDialog {
    fn save_file(&self, _options: &SaveDialogOptions) -> Result<Option<PathBuf>, DialogError> {
        panic!("Dialog port not configured in CassetteConfig: no cassette loaded for dialog");
    }
    fn open_file(&self, _options: &OpenDialogOptions) -> Result<Option<PathBuf>, DialogError> {
        panic!("Dialog port not configured in CassetteConfig: no cassette loaded for dialog");
    }
}
