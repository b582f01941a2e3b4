use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors from the file and directory helpers.
#[derive(Error, Debug)]
pub enum FileError {
    #[error("not a directory: {}", .path.display())]
    NotADirectory { path: PathBuf },

    #[error("not a file: {}", .path.display())]
    NotAFile { path: PathBuf },

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl FileError {
    pub fn not_a_directory(path: impl Into<PathBuf>) -> Self {
        FileError::NotADirectory { path: path.into() }
    }

    pub fn not_a_file(path: impl Into<PathBuf>) -> Self {
        FileError::NotAFile { path: path.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_a_directory_display() {
        let err = FileError::not_a_directory("/tmp/somewhere");
        assert_eq!(err.to_string(), "not a directory: /tmp/somewhere");
    }

    #[test]
    fn test_io_error_passes_through() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let err = FileError::from(io_err);
        assert!(err.to_string().contains("denied"));
    }
}
