//! File I/O boundary.
//!
//! Synchronous and minimal: `load_file` reads a path into a `LineBuffer`,
//! `save_file` writes serialized bytes to a path, and `write_document`
//! serializes the state's buffer to its file name. OS errors are classified
//! into the load / save taxonomies; the document is never touched on
//! failure.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use core_state::EditorState;
use core_text::{LineBuffer, lines};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("{}: file not found", path.display())]
    NotFound { path: PathBuf },
    #[error("{}: permission denied", path.display())]
    PermissionDenied { path: PathBuf },
    #[error("{}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },
}

impl LoadError {
    fn classify(path: &Path, source: io::Error) -> Self {
        let path = path.to_path_buf();
        match source.kind() {
            io::ErrorKind::NotFound => LoadError::NotFound { path },
            io::ErrorKind::PermissionDenied => LoadError::PermissionDenied { path },
            _ => LoadError::Io { path, source },
        }
    }
}

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("No file name")]
    NoFileName,
    #[error("{}: permission denied", path.display())]
    PermissionDenied { path: PathBuf },
    #[error("{}: no space left on device", path.display())]
    DiskFull { path: PathBuf },
    #[error("{}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },
}

impl SaveError {
    fn classify(path: &Path, source: io::Error) -> Self {
        let path = path.to_path_buf();
        match source.kind() {
            io::ErrorKind::PermissionDenied => SaveError::PermissionDenied { path },
            io::ErrorKind::StorageFull => SaveError::DiskFull { path },
            _ => SaveError::Io { path, source },
        }
    }
}

/// Read `path` into a new buffer: one row per line, trailing whitespace
/// stripped.
pub fn load_file(path: &Path, tab_stop: usize) -> Result<LineBuffer, LoadError> {
    let content = std::fs::read(path).map_err(|e| {
        tracing::error!(target: "io", path = %path.display(), error = %e, "file_read_failed");
        LoadError::classify(path, e)
    })?;
    let buffer = LineBuffer::from_lines(tab_stop, lines::split_lines(&content));
    tracing::info!(
        target: "io",
        path = %path.display(),
        bytes = content.len(),
        rows = buffer.num_rows(),
        "file_read_ok"
    );
    Ok(buffer)
}

/// Write `bytes` to `path`, creating it (mode 0644 on Unix) if needed and
/// truncating it to exactly `bytes.len()`. Returns the byte count written.
pub fn save_file(path: &Path, bytes: &[u8]) -> Result<usize, SaveError> {
    let mut opts = OpenOptions::new();
    opts.read(true).write(true).create(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        opts.mode(0o644);
    }
    let result = opts.open(path).and_then(|mut file| {
        file.set_len(bytes.len() as u64)?;
        file.write_all(bytes)?;
        file.flush()
    });
    match result {
        Ok(()) => {
            tracing::info!(target: "io", path = %path.display(), bytes = bytes.len(), "save_ok");
            Ok(bytes.len())
        }
        Err(e) => {
            tracing::error!(target: "io", path = %path.display(), error = %e, "save_failed");
            Err(SaveError::classify(path, e))
        }
    }
}

/// Serialize the document and save it to the state's file name.
pub fn write_document(state: &EditorState) -> Result<usize, SaveError> {
    let path = state.file_name.as_deref().ok_or(SaveError::NoFileName)?;
    save_file(path, &state.buffer.rows_to_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_state::Viewport;
    use pretty_assertions::assert_eq;

    #[test]
    fn load_splits_lines_and_trims() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.txt");
        std::fs::write(&path, "one  \r\n\ttwo\n\nfour\t\n").unwrap();
        let buf = load_file(&path, 4).unwrap();
        assert_eq!(buf.num_rows(), 4);
        assert_eq!(buf.row(0).unwrap().raw(), b"one");
        assert_eq!(buf.row(1).unwrap().raw(), b"\ttwo");
        assert_eq!(buf.row(2).unwrap().raw(), b"");
        assert_eq!(buf.row(3).unwrap().raw(), b"four");
    }

    #[test]
    fn load_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_file(&dir.path().join("absent.txt"), 4).unwrap_err();
        assert!(matches!(err, LoadError::NotFound { .. }));
    }

    #[test]
    fn load_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_file(dir.path(), 4).unwrap_err();
        assert!(!matches!(err, LoadError::NotFound { .. }));
    }

    #[test]
    fn save_truncates_existing_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        std::fs::write(&path, "a much longer previous body\n").unwrap();
        let n = save_file(&path, b"short\n").unwrap();
        assert_eq!(n, 6);
        assert_eq!(std::fs::read(&path).unwrap(), b"short\n".to_vec());
    }

    #[cfg(unix)]
    #[test]
    fn save_creates_file_with_0644() {
        use std::os::unix::fs::PermissionsExt;
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("new.txt");
        save_file(&path, b"x\n").unwrap();
        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        // umask may only clear bits.
        assert_eq!(mode & 0o777 & !0o644, 0);
        assert_eq!(mode & 0o600, 0o600);
    }

    #[test]
    fn save_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("f.txt");
        let err = save_file(&path, b"x").unwrap_err();
        assert!(matches!(err, SaveError::Io { .. }));
        assert!(err.to_string().contains("f.txt"));
    }

    #[test]
    fn write_document_without_name() {
        let state = EditorState::new(LineBuffer::from_lines(4, ["x"]), Viewport::new(10, 10));
        let err = write_document(&state).unwrap_err();
        assert!(matches!(err, SaveError::NoFileName));
        assert_eq!(err.to_string(), "No file name");
    }

    #[test]
    fn write_document_serializes_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.txt");
        let state = EditorState::new(LineBuffer::from_lines(4, ["a", "", "\tb"]), Viewport::new(10, 10))
            .with_file_name(&path);
        assert_eq!(write_document(&state).unwrap(), 6);
        assert_eq!(std::fs::read(&path).unwrap(), b"a\n\n\tb\n".to_vec());
    }
}
