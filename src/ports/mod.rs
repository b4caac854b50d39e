//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the application facade and an
//! external system (time, filesystem, file dialogs). Implementations live in
//! `src/adapters/`.

pub mod clock;
pub mod dialog;
pub mod filesystem;

pub use clock::Clock;
pub use dialog::{Dialog, DialogError, FileFilter, OpenDialogOptions, SaveDialogOptions};
pub use filesystem::FileSystem;
