//! Append-only access to the daily journal files.

use crate::error::{CaptureError, Result};
use std::borrow::Cow;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Filesystem primitives the journal needs.
pub trait FileStore {
    fn exists(&self, path: &Path) -> bool;
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;
    fn read_to_string(&self, path: &Path) -> io::Result<String>;
    /// Creates `path` holding exactly `contents`. Must not clobber an existing file.
    fn write_new(&self, path: &Path, contents: &str) -> io::Result<()>;
    /// Writes `contents` after the current end of `path`.
    fn append(&self, path: &Path, contents: &str) -> io::Result<()>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct StdFileStore;

impl FileStore for StdFileStore {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(path)
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }

    fn write_new(&self, path: &Path, contents: &str) -> io::Result<()> {
        // Stage next to the target so the final rename stays on one filesystem.
        let dir = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(contents.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist_noclobber(path).map_err(|e| e.error)?;
        Ok(())
    }

    fn append(&self, path: &Path, contents: &str) -> io::Result<()> {
        let mut f = OpenOptions::new().append(true).open(path)?;
        f.write_all(contents.as_bytes())
    }
}

/// Creates `path` (and missing parents) unless it already exists.
pub fn ensure_dir(store: &dyn FileStore, path: &Path) -> Result<()> {
    if store.exists(path) {
        return Ok(());
    }
    store
        .create_dir_all(path)
        .map_err(|e| CaptureError::io("creating directory", path, e))
}

/// Appends `line` to the file at `path`, creating it when absent.
///
/// Existing content that does not end in `\n` gets exactly one newline
/// before `line`; empty files and newline-terminated files get none.
/// Existing bytes are never rewritten.
pub fn append_line(store: &dyn FileStore, path: &Path, line: &str) -> Result<()> {
    if !store.exists(path) {
        return store
            .write_new(path, line)
            .map_err(|e| CaptureError::io("creating", path, e));
    }

    let current = store
        .read_to_string(path)
        .map_err(|e| CaptureError::io("reading", path, e))?;
    let chunk: Cow<str> = if !current.is_empty() && !current.ends_with('\n') {
        Cow::Owned(format!("\n{line}"))
    } else {
        Cow::Borrowed(line)
    };

    store
        .append(path, &chunk)
        .map_err(|e| CaptureError::io("appending to", path, e))
}
