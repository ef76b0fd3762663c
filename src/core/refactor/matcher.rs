//! Detection of untyped destructured-props declarations.
//!
//! Matching sits behind [`PropsMatcher`] so the text-level regex can be
//! replaced by a syntax-aware matcher without touching walking or write-back.

use regex::Regex;

use crate::error::{Error, Result};

/// Exported function whose sole parameter is `{ a, b }` with no type annotation.
///
/// Exactly one space inside the braces and `) {` right after the closing brace,
/// so an already annotated parameter (`}: NameProps) {`) never matches.
pub const IDIOM_PATTERN: &str = r"export function (\w+)\(\{ ([^}]+) \}\) \{";

/// One occurrence of the idiom in the original buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyMatch {
    /// The full matched declaration text.
    pub matched: String,
    /// Declaration (component) name.
    pub name: String,
    /// Raw, unparsed property list between the braces.
    pub props_raw: String,
    /// Byte offset of the match in the scanned buffer.
    pub start: usize,
}

impl PropertyMatch {
    /// Property names, split naively on commas and trimmed.
    ///
    /// Defaults (`count = 0`) and renamed bindings (`value: v`) are passed through verbatim.
    pub fn props(&self) -> Vec<String> {
        self.props_raw
            .split(',')
            .map(|p| p.trim().to_string())
            .collect()
    }
}

/// Finds idiom occurrences in a buffer.
pub trait PropsMatcher {
    /// Every non-overlapping occurrence, in order of position.
    fn find_matches(&self, content: &str) -> Vec<PropertyMatch>;
}

/// Regex-driven matcher over flat source text.
#[derive(Debug, Clone)]
pub struct RegexPropsMatcher {
    re: Regex,
}

impl RegexPropsMatcher {
    pub fn new() -> Result<Self> {
        Self::with_pattern(IDIOM_PATTERN)
    }

    /// Build from a custom pattern. Group 1 must capture the name, group 2 the property list.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        let re = Regex::new(pattern).map_err(|e| {
            Error::validation_invalid_argument(
                "pattern",
                format!("Invalid idiom pattern: {}", e),
                None,
            )
        })?;

        if re.captures_len() < 3 {
            return Err(Error::validation_invalid_argument(
                "pattern",
                "Idiom pattern needs a name group and a property-list group",
                Some(pattern.to_string()),
            ));
        }

        Ok(Self { re })
    }
}

impl PropsMatcher for RegexPropsMatcher {
    fn find_matches(&self, content: &str) -> Vec<PropertyMatch> {
        self.re
            .captures_iter(content)
            .filter_map(|cap| {
                let whole = cap.get(0)?;
                Some(PropertyMatch {
                    matched: whole.as_str().to_string(),
                    name: cap.get(1)?.as_str().to_string(),
                    props_raw: cap.get(2)?.as_str().to_string(),
                    start: whole.start(),
                })
            })
            .collect()
    }
}
