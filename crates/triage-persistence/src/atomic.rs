//! Atomic file operations for crash-safe persistence.

use std::fs;
use std::io::{self, BufWriter, ErrorKind, Write};
use std::path::Path;

use tracing::debug;

use crate::error::{PersistenceError, Result};

/// Writes a file atomically using a caller-supplied writer callback.
///
/// The callback writes into a temporary file created next to `path`.
/// Once it returns successfully the buffer is flushed and the temp file
/// is renamed over the target. If the callback or the flush fails, the
/// temp file is dropped (and deleted) and the target is left untouched.
///
/// # Errors
/// Returns an error if the directory cannot be created, or if the write,
/// flush or rename fails.
pub fn atomic_write_with<T, F>(path: &Path, write: F) -> Result<T>
where
    F: FnOnce(&mut dyn Write) -> io::Result<T>,
{
    let write_error = |source: io::Error| PersistenceError::WriteError {
        path: path.to_path_buf(),
        source,
    };

    // `Path::parent` yields "" for a bare file name.
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|source| PersistenceError::DirectoryError {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    // Same directory keeps the rename on one filesystem
    let temp_file = tempfile::NamedTempFile::new_in(dir).map_err(write_error)?;

    let mut out = BufWriter::new(temp_file);
    let value = write(&mut out).map_err(write_error)?;
    let temp_file = out.into_inner().map_err(|e| write_error(e.into_error()))?;

    temp_file
        .persist(path)
        .map_err(|e| write_error(e.error))?;

    debug!(path = %path.display(), "Wrote file atomically");
    Ok(value)
}

/// Reads a text file and returns its lines without line terminators.
///
/// A missing file is reported as [`PersistenceError::NotFound`] so callers
/// can give it a dedicated message.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let data = fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => PersistenceError::NotFound {
            path: path.to_path_buf(),
        },
        _ => PersistenceError::ReadError {
            path: path.to_path_buf(),
            source,
        },
    })?;

    debug!(path = %path.display(), bytes = data.len(), "Read file");
    Ok(data.lines().map(String::from).collect())
}
