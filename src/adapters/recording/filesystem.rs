//! Recording adapter for the `FileSystem` port.

use std::io;
use std::path::Path;

use serde::Serialize;

use super::record_result;
use crate::cassette::format::RecordedIoError;
use crate::cassette::session::SharedRecorder;
use crate::ports::FileSystem;

/// Records filesystem interactions while delegating to an inner implementation.
pub struct RecordingFileSystem {
    inner: Box<dyn FileSystem>,
    recorder: SharedRecorder,
}

impl RecordingFileSystem {
    /// Creates a new recording filesystem wrapping the given implementation.
    pub fn new(inner: Box<dyn FileSystem>, recorder: SharedRecorder) -> Self {
        Self { inner, recorder }
    }
}

#[derive(Serialize)]
struct PathInput {
    path: String,
}

#[derive(Serialize)]
struct WriteInput<'a> {
    path: String,
    contents: std::borrow::Cow<'a, str>,
}

impl FileSystem for RecordingFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        let result = self.inner.read_to_string(path);
        let input = PathInput { path: path.display().to_string() };
        let recorded = result.as_ref().map_err(RecordedIoError::from);
        record_result(&self.recorder, "fs", "read_to_string", &input, recorded.as_ref());
        result
    }

    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        let result = self.inner.write(path, contents);
        let input = WriteInput {
            path: path.display().to_string(),
            contents: String::from_utf8_lossy(contents),
        };
        let recorded = result.as_ref().map_err(RecordedIoError::from);
        record_result(&self.recorder, "fs", "write", &input, recorded.as_ref());
        result
    }
}
