//! Source file discovery under a scan root.

use std::path::{Path, PathBuf};

/// Whether the path string contains any excluded name.
///
/// Plain substring test: `node_modules_cache/` is excluded along with `node_modules/`.
pub fn is_excluded(path: &Path, excluded_dirs: &[String]) -> bool {
    let text = path.to_string_lossy();
    excluded_dirs
        .iter()
        .any(|d| !d.is_empty() && text.contains(d.as_str()))
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e == extension)
}

/// Collect every file under `root` with the given extension, sorted by path.
///
/// Excluded directories are pruned at any depth and never read. Symlinked
/// directories are not followed. Unreadable directories are skipped.
pub fn collect_source_files(root: &Path, extension: &str, excluded_dirs: &[String]) -> Vec<PathBuf> {
    let mut files = Vec::new();
    if is_excluded(root, excluded_dirs) {
        return files;
    }
    walk_recursive(root, extension, excluded_dirs, &mut files);
    files.sort();
    files
}

fn walk_recursive(dir: &Path, extension: &str, excluded_dirs: &[String], files: &mut Vec<PathBuf>) {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            log_status!("annotate", "Skipping unreadable directory {}: {}", dir.display(), e);
            return;
        }
    };

    for entry in entries.flatten() {
        let path = entry.path();
        let Ok(file_type) = entry.file_type() else {
            continue;
        };

        if is_excluded(&path, excluded_dirs) {
            continue;
        }

        if file_type.is_dir() {
            walk_recursive(&path, extension, excluded_dirs, files);
        } else if path.is_file() && has_extension(&path, extension) {
            files.push(path);
        }
    }
}
