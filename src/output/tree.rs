//! Output directory management.

use std::fs;
use std::io;
use std::path::Path;

/// Remove `path` and everything beneath it.
///
/// A missing path is a no-op. A path that exists but is not a directory is
/// an error, since the run could not build its tree there.
pub fn clear(path: &Path) -> io::Result<()> {
    match fs::symlink_metadata(path) {
        Ok(meta) if meta.is_dir() => fs::remove_dir_all(path),
        Ok(_) => Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("{} exists and is not a directory", path.display()),
        )),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e),
    }
}

/// Create `path` and any missing ancestors. Existing directories are left alone.
pub fn ensure_dir(path: &Path) -> io::Result<()> {
    fs::create_dir_all(path)
}

/// Write `contents` to `path`, replacing any existing file.
pub fn write_file(path: &Path, contents: &[u8]) -> io::Result<()> {
    fs::write(path, contents)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_missing_path_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("never-created");
        assert!(clear(&missing).is_ok());
        assert!(!missing.exists());
    }

    #[test]
    fn test_clear_removes_nested_tree() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("out");
        fs::create_dir_all(root.join("a/b/c/d")).unwrap();
        fs::write(root.join("index.html"), "root").unwrap();
        fs::write(root.join("a/b/index.html"), "b").unwrap();
        fs::write(root.join("a/b/c/d/index.html"), "d").unwrap();

        clear(&root).unwrap();

        assert!(!root.exists());
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_clear_rejects_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("out");
        fs::write(&file, "not a dir").unwrap();

        assert!(clear(&file).is_err());
        assert!(file.exists());
    }

    #[test]
    fn test_ensure_dir_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("x/y/z");

        ensure_dir(&nested).unwrap();
        ensure_dir(&nested).unwrap();
        assert!(nested.is_dir());
    }

    #[test]
    fn test_ensure_dir_siblings_share_parent() {
        let dir = tempfile::tempdir().unwrap();
        ensure_dir(&dir.path().join("blog/one")).unwrap();
        ensure_dir(&dir.path().join("blog/two")).unwrap();
        assert!(dir.path().join("blog/one").is_dir());
        assert!(dir.path().join("blog/two").is_dir());
    }

    #[test]
    fn test_write_file_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("index.html");

        write_file(&file, b"first").unwrap();
        write_file(&file, b"second").unwrap();
        assert_eq!(fs::read(&file).unwrap(), b"second");
    }
}
