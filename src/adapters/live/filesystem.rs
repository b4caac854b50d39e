//! Live filesystem adapter using `std::fs`.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

use crate::ports::filesystem::FileSystem;

/// Permission bits for newly created log files.
#[cfg(unix)]
const FILE_MODE: u32 = 0o644;

/// Live filesystem adapter backed by real disk I/O.
pub struct LiveFileSystem;

impl FileSystem for LiveFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        let bytes = std::fs::read(path)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(FILE_MODE);
        }
        let mut file = options.open(path)?;
        file.write_all(contents)?;
        file.flush()
    }
}
