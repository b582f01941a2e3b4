//! Path inspection helpers: the different forms one path can take, the
//! platform separator, and component decomposition.
//!
//! Building a `PathBuf` never touches the filesystem; only `canonical`
//! requires the path to exist.

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf, MAIN_SEPARATOR};

use path_clean::PathClean;

/// PathForms: every form a single path can take.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathForms {
    /// The path exactly as it was constructed.
    pub given: PathBuf,
    /// The given path anchored to the current directory. `.` and `..`
    /// segments are kept as written.
    pub absolute: PathBuf,
    /// The absolute form with `.` and `..` resolved lexically. Works for
    /// paths that do not exist.
    pub cleaned: PathBuf,
    /// The canonical form with symlinks resolved, `None` when the path does
    /// not exist on disk.
    pub canonical: Option<PathBuf>,
}

impl PathForms {
    /// Inspects one path. Only fails when the current directory itself is
    /// unavailable.
    pub fn inspect(path: impl AsRef<Path>) -> io::Result<Self> {
        let given = path.as_ref().to_path_buf();
        let absolute = if given.is_absolute() {
            given.clone()
        } else {
            env::current_dir()?.join(&given)
        };
        let cleaned = absolute.clean();
        let canonical = fs::canonicalize(&given).ok();
        Ok(PathForms {
            given,
            absolute,
            cleaned,
            canonical,
        })
    }
}

/// The platform path separator (`/` on Unix, `\` on Windows).
pub fn separator() -> char {
    MAIN_SEPARATOR
}

/// Decomposes a path into its components, one string per segment.
pub fn components_of(path: impl AsRef<Path>) -> Vec<String> {
    path.as_ref()
        .components()
        .map(|component| component.as_os_str().to_string_lossy().into_owned())
        .collect()
}
