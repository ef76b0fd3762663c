//! Annotation engine: add generated props interfaces to untyped component declarations.
//!
//! For every source file under a root this:
//! 1. Reads the whole file
//! 2. Scans the original text once for the idiom
//! 3. Substitutes each match (first textual occurrence) in the accumulating buffer
//! 4. Writes the whole file back only when the text changed (or reports it in dry-run)

use serde::Serialize;
use std::path::{Path, PathBuf};

use super::matcher::{PropsMatcher, RegexPropsMatcher};
use super::stub::replacement_for;
use super::walk::collect_source_files;
use crate::defaults::Defaults;
use crate::error::{Error, Result};
use crate::utils::io;

// ============================================================================
// Types
// ============================================================================

/// Outcome of transforming one buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedContent {
    /// Buffer after all substitutions.
    pub content: String,
    /// Number of substitutions applied.
    pub occurrences: usize,
}

/// A file whose content changed.
#[derive(Debug, Clone, Serialize)]
pub struct FileEdit {
    /// File path relative to root.
    pub file: String,
    /// Full path as discovered by the walk.
    pub path: String,
    /// Declarations annotated in this file.
    pub occurrences: usize,
    /// Whether the new content was written to disk.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub applied: bool,
}

/// A file that could not be read or written.
#[derive(Debug, Clone, Serialize)]
pub struct SkippedFile {
    /// File path relative to root.
    pub file: String,
    /// Full path as discovered by the walk.
    pub path: String,
    /// Why it was skipped.
    pub reason: String,
}

/// Result of annotating a whole root.
#[derive(Debug, Clone, Serialize)]
pub struct AnnotateResult {
    pub root: String,
    pub dry_run: bool,
    pub files_scanned: usize,
    pub edits: Vec<FileEdit>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<SkippedFile>,
    pub total_occurrences: usize,
    /// Files whose content changed (or would change in dry-run).
    pub files_modified: usize,
}

/// Inputs for [`annotate_root`].
#[derive(Debug, Clone)]
pub struct AnnotateOptions {
    pub root: PathBuf,
    pub defaults: Defaults,
    pub dry_run: bool,
}

// ============================================================================
// Buffer transformation
// ============================================================================

/// Transform one buffer with the default regex matcher.
pub fn annotate_content(content: &str, defaults: &Defaults) -> Result<AnnotatedContent> {
    let matcher = RegexPropsMatcher::new()?;
    Ok(annotate_content_with(content, &matcher, defaults))
}

/// Transform one buffer with any matcher.
///
/// Matches come from a single scan of the original text. The mutated buffer
/// is never rescanned, so generated text cannot trigger further rewrites.
pub fn annotate_content_with<M: PropsMatcher + ?Sized>(
    content: &str,
    matcher: &M,
    defaults: &Defaults,
) -> AnnotatedContent {
    let matches = matcher.find_matches(content);

    let mut buffer = content.to_string();
    let mut occurrences = 0;

    for m in &matches {
        if !buffer.contains(&m.matched) {
            continue;
        }
        let replacement = replacement_for(m, defaults);
        buffer = buffer.replacen(&m.matched, &replacement, 1);
        occurrences += 1;
    }

    AnnotatedContent {
        content: buffer,
        occurrences,
    }
}

// ============================================================================
// Root processing
// ============================================================================

fn relative_display(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .to_string()
}

fn validate_root(root: &Path) -> Result<()> {
    if !root.exists() {
        return Err(Error::validation_invalid_argument(
            "root",
            format!("Directory '{}' does not exist", root.display()),
            None,
        )
        .with_hint("Pass the directory that contains the component sources"));
    }
    if !root.is_dir() {
        return Err(Error::validation_invalid_argument(
            "root",
            format!("'{}' is not a directory", root.display()),
            None,
        ));
    }
    Ok(())
}

/// Annotate every matching file under the root, one file at a time.
///
/// Each file is read, transformed and (unless dry-run) written before the
/// next one is touched. Read or write failures skip the file and continue.
pub fn annotate_root(options: &AnnotateOptions) -> Result<AnnotateResult> {
    let matcher = RegexPropsMatcher::new()?;
    annotate_root_with(options, &matcher)
}

/// [`annotate_root`] with a caller-supplied matcher.
pub fn annotate_root_with<M: PropsMatcher + ?Sized>(
    options: &AnnotateOptions,
    matcher: &M,
) -> Result<AnnotateResult> {
    validate_root(&options.root)?;
    options.defaults.validate()?;

    let root = &options.root;
    let defaults = &options.defaults;
    let files = collect_source_files(
        root,
        defaults.normalized_extension(),
        &defaults.excluded_dirs,
    );

    let mut result = AnnotateResult {
        root: root.display().to_string(),
        dry_run: options.dry_run,
        files_scanned: files.len(),
        edits: Vec::new(),
        skipped: Vec::new(),
        total_occurrences: 0,
        files_modified: 0,
    };

    for path in &files {
        let file = relative_display(path, root);
        let display = path.display().to_string();

        let original = match io::read_file(path, &format!("read {}", display)) {
            Ok(content) => content,
            Err(e) => {
                log_status!("annotate", "Failed to read {}: {}", file, e.detail_error());
                result.skipped.push(SkippedFile {
                    file,
                    path: display,
                    reason: e.detail_error(),
                });
                continue;
            }
        };

        let annotated = annotate_content_with(&original, matcher, defaults);
        if annotated.content == original {
            continue;
        }

        let mut applied = false;
        if !options.dry_run {
            if let Err(e) = io::write_file_atomic(path, &annotated.content, &format!("write {}", display)) {
                log_status!("annotate", "Failed to write {}: {}", file, e.detail_error());
                result.skipped.push(SkippedFile {
                    file,
                    path: display,
                    reason: e.detail_error(),
                });
                continue;
            }
            applied = true;
            log_status!("annotate", "Annotated {} declaration(s) in {}", annotated.occurrences, file);
        }

        result.total_occurrences += annotated.occurrences;
        result.edits.push(FileEdit {
            file,
            path: display,
            occurrences: annotated.occurrences,
            applied,
        });
    }

    result.files_modified = result.edits.len();
    Ok(result)
}

// ============================================================================
// Tests
// ============================================================================
