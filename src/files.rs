//! File and directory operations: status snapshots, creation and deletion,
//! temp files, and directory listing.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use walkdir::WalkDir;

use crate::error::FileError;

/// FileStatus: existence, kind, size, and owner permissions of one path.
///
/// A missing path yields the all-false status rather than an error, since
/// "does this exist" is the first question the snapshot answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FileStatus {
    pub exists: bool,
    pub is_file: bool,
    pub is_dir: bool,
    pub len: u64,
    pub readable: bool,
    pub writable: bool,
    pub executable: bool,
}

impl FileStatus {
    pub fn query(path: impl AsRef<Path>) -> Self {
        let meta = match path.as_ref().metadata() {
            Ok(meta) => meta,
            Err(_) => return FileStatus::default(),
        };
        let (readable, writable, executable) = permission_bits(&meta);
        FileStatus {
            exists: true,
            is_file: meta.is_file(),
            is_dir: meta.is_dir(),
            len: meta.len(),
            readable,
            writable,
            executable,
        }
    }
}

#[cfg(unix)]
fn permission_bits(meta: &fs::Metadata) -> (bool, bool, bool) {
    use std::os::unix::fs::PermissionsExt;
    // Owner bits only; group/other access is not this snapshot's concern.
    let mode = meta.permissions().mode();
    (mode & 0o400 != 0, mode & 0o200 != 0, mode & 0o100 != 0)
}

#[cfg(not(unix))]
fn permission_bits(meta: &fs::Metadata) -> (bool, bool, bool) {
    (true, !meta.permissions().readonly(), meta.is_dir())
}

/// Creates the file if absent. Returns `Ok(true)` when it was created and
/// `Ok(false)` when it already existed.
pub fn create_file(path: impl AsRef<Path>) -> Result<bool, FileError> {
    match OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path.as_ref())
    {
        Ok(_) => Ok(true),
        Err(err) if err.kind() == io::ErrorKind::AlreadyExists => Ok(false),
        Err(err) => Err(err.into()),
    }
}

/// Deletes a regular file. Directories are refused.
pub fn delete_file(path: impl AsRef<Path>) -> Result<(), FileError> {
    let path = path.as_ref();
    if path.is_dir() {
        return Err(FileError::not_a_file(path));
    }
    fs::remove_file(path)?;
    Ok(())
}

/// Creates a named temp file with the given name prefix and suffix. The file
/// is deleted when the returned handle drops.
pub fn temp_file(prefix: &str, suffix: &str) -> Result<NamedTempFile, FileError> {
    let file = tempfile::Builder::new()
        .prefix(prefix)
        .suffix(suffix)
        .tempfile()?;
    Ok(file)
}

/// Creates one directory; the parent must already exist.
pub fn make_dir(path: impl AsRef<Path>) -> Result<(), FileError> {
    fs::create_dir(path.as_ref())?;
    Ok(())
}

/// Creates a directory along with any missing parents.
pub fn make_dir_all(path: impl AsRef<Path>) -> Result<(), FileError> {
    fs::create_dir_all(path.as_ref())?;
    Ok(())
}

/// Removes a directory; fails unless it is empty.
pub fn remove_empty_dir(path: impl AsRef<Path>) -> Result<(), FileError> {
    fs::remove_dir(path.as_ref())?;
    Ok(())
}

/// Lists the immediate children of a directory, sorted by name.
pub fn list_entries(dir: impl AsRef<Path>) -> Result<Vec<PathBuf>, FileError> {
    list_matching(dir, |_| true)
}

/// Lists the immediate children whose file name passes `filter`, sorted by
/// name.
pub fn list_matching(
    dir: impl AsRef<Path>,
    filter: impl Fn(&str) -> bool,
) -> Result<Vec<PathBuf>, FileError> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(FileError::not_a_directory(dir));
    }
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if filter(&name) {
            entries.push(entry.path());
        }
    }
    entries.sort();
    Ok(entries)
}

/// Walks a directory depth-first, returning every path beneath it. The root
/// itself is excluded.
pub fn walk(dir: impl AsRef<Path>) -> Result<Vec<PathBuf>, FileError> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(FileError::not_a_directory(dir));
    }
    let mut paths = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1) {
        let entry = entry.map_err(io::Error::from)?;
        paths.push(entry.into_path());
    }
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    fn touch(path: &Path) {
        File::create(path).unwrap();
    }

    #[test]
    fn test_status_of_missing_path() {
        let status = FileStatus::query("no/such/file-98765");
        assert_eq!(status, FileStatus::default());
        assert!(!status.exists);
    }

    #[test]
    fn test_status_of_regular_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.bin");
        let mut file = File::create(&path).unwrap();
        file.write_all(b"12345").unwrap();

        let status = FileStatus::query(&path);
        assert!(status.exists);
        assert!(status.is_file);
        assert!(!status.is_dir);
        assert_eq!(status.len, 5);
        assert!(status.readable);
        assert!(status.writable);
    }

    #[test]
    fn test_status_of_directory() {
        let dir = tempdir().unwrap();
        let status = FileStatus::query(dir.path());
        assert!(status.exists);
        assert!(status.is_dir);
        assert!(!status.is_file);
        assert!(status.executable, "directories should be listable");
    }

    #[test]
    fn test_create_file_reports_created_then_existing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("once.txt");
        assert!(create_file(&path).unwrap());
        assert!(!create_file(&path).unwrap());
    }

    #[test]
    fn test_delete_file_refuses_directory() {
        let dir = tempdir().unwrap();
        let err = delete_file(dir.path()).unwrap_err();
        assert!(matches!(err, FileError::NotAFile { .. }));
    }

    #[test]
    fn test_delete_file_removes_it() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("gone.txt");
        touch(&path);
        delete_file(&path).unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_temp_file_name_and_cleanup() {
        let path = {
            let file = temp_file("tmp-", ".txt").unwrap();
            let name = file.path().file_name().unwrap().to_string_lossy().into_owned();
            assert!(name.starts_with("tmp-"));
            assert!(name.ends_with(".txt"));
            file.path().to_path_buf()
        };
        assert!(!path.exists(), "temp file should vanish on drop");
    }

    #[test]
    fn test_make_dir_requires_parent() {
        let dir = tempdir().unwrap();
        assert!(make_dir(dir.path().join("a/b")).is_err());
        make_dir_all(dir.path().join("a/b")).unwrap();
        assert!(dir.path().join("a/b").is_dir());
    }

    #[test]
    fn test_remove_empty_dir_only_when_empty() {
        let dir = tempdir().unwrap();
        let sub = dir.path().join("sub");
        make_dir(&sub).unwrap();
        touch(&sub.join("keep.txt"));
        assert!(remove_empty_dir(&sub).is_err());

        delete_file(sub.join("keep.txt")).unwrap();
        remove_empty_dir(&sub).unwrap();
        assert!(!sub.exists());
    }

    #[test]
    fn test_list_entries_sorted() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("b.txt"));
        touch(&dir.path().join("a.txt"));
        touch(&dir.path().join("c.txt"));

        let entries = list_entries(dir.path()).unwrap();
        let names: Vec<_> = entries
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.txt", "b.txt", "c.txt"]);
    }

    #[test]
    fn test_list_matching_filters_by_name() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("notes.txt"));
        touch(&dir.path().join("image.png"));
        touch(&dir.path().join("todo.txt"));

        let txt = list_matching(dir.path(), |name| name.ends_with(".txt")).unwrap();
        assert_eq!(txt.len(), 2);
        assert!(txt.iter().all(|p| p.extension().unwrap() == "txt"));
    }

    #[test]
    fn test_list_entries_rejects_non_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("plain.txt");
        touch(&path);
        let err = list_entries(&path).unwrap_err();
        assert!(matches!(err, FileError::NotADirectory { .. }));
    }

    #[test]
    fn test_walk_is_recursive_and_excludes_root() {
        let dir = tempdir().unwrap();
        make_dir_all(dir.path().join("a/b")).unwrap();
        touch(&dir.path().join("top.txt"));
        touch(&dir.path().join("a/b/deep.txt"));

        let paths = walk(dir.path()).unwrap();
        assert!(!paths.contains(&dir.path().to_path_buf()));
        assert!(paths.contains(&dir.path().join("top.txt")));
        assert!(paths.contains(&dir.path().join("a")));
        assert!(paths.contains(&dir.path().join("a/b/deep.txt")));
    }
}
