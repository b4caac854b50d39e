//! Filesystem port for reading and writing log files.

use std::io;
use std::path::Path;

/// Provides the two filesystem calls the facade needs.
pub trait FileSystem: Send + Sync {
    /// Reads the entire contents of a file as text. Invalid UTF-8 sequences
    /// are replaced with U+FFFD.
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist or cannot be read.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Writes `contents` to `path`, creating the file or truncating an
    /// existing one. New files get mode `0o644` on Unix.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails (missing parent, permissions,
    /// disk full, etc.).
    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()>;
}
