//! File I/O primitives with consistent error handling.

use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Read file contents with standardized error handling.
pub fn read_file(path: &Path, operation: &str) -> Result<String> {
    fs::read_to_string(path)
        .map_err(|e| Error::internal_io(e.to_string(), Some(operation.to_string())))
}

/// Write content to file atomically (write to a sibling temp file, then rename).
///
/// Readers see either the old content or the new content, never a partial write.
/// The original file's permissions are carried over to the replacement.
/// A symlink is resolved first so the link survives and its target is rewritten.
pub fn write_file_atomic(path: &Path, content: &str, operation: &str) -> Result<()> {
    let resolved = match fs::symlink_metadata(path) {
        Ok(meta) if meta.file_type().is_symlink() => fs::canonicalize(path).map_err(|e| {
            Error::internal_io(e.to_string(), Some(format!("{} (resolve link)", operation)))
        })?,
        _ => path.to_path_buf(),
    };
    let path = resolved.as_path();

    let parent = path.parent().ok_or_else(|| {
        Error::internal_io(
            format!("Invalid path: {}", path.display()),
            Some(operation.to_string()),
        )
    })?;

    let filename = path.file_name().ok_or_else(|| {
        Error::internal_io(
            format!("Invalid path: {}", path.display()),
            Some(operation.to_string()),
        )
    })?;

    let tmp_path = parent.join(format!(".{}.propfix.tmp", filename.to_string_lossy()));

    fs::write(&tmp_path, content).map_err(|e| {
        Error::internal_io(e.to_string(), Some(format!("{} (write temp)", operation)))
    })?;

    if let Ok(meta) = fs::metadata(path) {
        let _ = fs::set_permissions(&tmp_path, meta.permissions());
    }

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        Error::internal_io(e.to_string(), Some(format!("{} (rename)", operation)))
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn read_file_succeeds_for_existing_file() {
        let mut temp = NamedTempFile::new().unwrap();
        writeln!(temp, "test content").unwrap();

        let content = read_file(temp.path(), "test read").unwrap();
        assert!(content.contains("test content"));
    }

    #[test]
    fn read_file_returns_error_for_missing_file() {
        let result = read_file(Path::new("/nonexistent/path.tsx"), "test read");
        let err = result.unwrap_err();
        assert_eq!(err.code.as_str(), "internal.io_error");
        assert_eq!(err.details["context"], "test read");
    }

    #[test]
    fn write_file_atomic_replaces_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Card.tsx");
        fs::write(&path, "old").unwrap();

        write_file_atomic(&path, "new content", "test write").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new content");
    }

    #[test]
    fn write_file_atomic_leaves_no_temp_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Card.tsx");
        fs::write(&path, "old").unwrap();

        write_file_atomic(&path, "new", "test write").unwrap();

        let names: Vec<String> = fs::read_dir(dir.path())
            .unwrap()
            .flatten()
            .map(|e| e.file_name().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["Card.tsx".to_string()]);
    }

    #[cfg(unix)]
    #[test]
    fn write_file_atomic_writes_through_symlink() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("shared")).unwrap();
        fs::create_dir_all(dir.path().join("src")).unwrap();
        let target = dir.path().join("shared/Widget.tsx");
        let link = dir.path().join("src/Widget.tsx");
        fs::write(&target, "old").unwrap();
        std::os::unix::fs::symlink(&target, &link).unwrap();

        write_file_atomic(&link, "new", "test write").unwrap();

        assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
        assert_eq!(fs::read_to_string(&target).unwrap(), "new");
        assert_eq!(fs::read_dir(dir.path().join("src")).unwrap().count(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn write_file_atomic_fails_for_dangling_symlink() {
        let dir = TempDir::new().unwrap();
        let link = dir.path().join("Gone.tsx");
        std::os::unix::fs::symlink(dir.path().join("missing.tsx"), &link).unwrap();

        let err = write_file_atomic(&link, "x", "test write").unwrap_err();
        assert_eq!(err.details["context"], "test write (resolve link)");
    }

    #[test]
    fn write_file_atomic_fails_for_missing_directory() {
        let result = write_file_atomic(Path::new("/nonexistent/dir/file.tsx"), "x", "test write");
        assert!(result.is_err());
    }
}
