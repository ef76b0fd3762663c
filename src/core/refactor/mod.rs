//! Structural refactoring: annotate untyped destructured component props.
//!
//! Walks source files, finds exported declarations that destructure props
//! without a type, and inserts a generated placeholder interface for each.

mod annotate;
mod matcher;
mod stub;
mod walk;

pub use annotate::{
    annotate_content, annotate_content_with, annotate_root, annotate_root_with,
    AnnotateOptions, AnnotateResult, AnnotatedContent, FileEdit, SkippedFile,
};
pub use matcher::{PropertyMatch, PropsMatcher, RegexPropsMatcher, IDIOM_PATTERN};
pub use stub::{annotated_signature, replacement_for, GeneratedDeclaration};
pub use walk::{collect_source_files, is_excluded};
