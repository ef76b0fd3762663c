use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::utils::io;

/// File name looked up at the scan root when no explicit config is given.
pub const CONFIG_FILE_NAME: &str = "propfix.json";

/// Root configuration structure for propfix.json
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PropfixConfig {
    #[serde(default)]
    pub defaults: Defaults,
}

/// All configurable defaults that can be overridden via propfix.json
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Defaults {
    /// File extension (without the dot) of component sources to scan.
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Directory names that disqualify any path containing them.
    #[serde(default = "default_excluded_dirs")]
    pub excluded_dirs: Vec<String>,

    /// Type written for every generated property.
    #[serde(default = "default_type_marker")]
    pub type_marker: String,

    /// Trailing comment flagging each generated property for follow-up.
    #[serde(default = "default_follow_up_comment")]
    pub follow_up_comment: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            extension: default_extension(),
            excluded_dirs: default_excluded_dirs(),
            type_marker: default_type_marker(),
            follow_up_comment: default_follow_up_comment(),
        }
    }
}

impl Defaults {
    /// Reject values that would make the walk or the generated code meaningless.
    pub fn validate(&self) -> Result<()> {
        let ext = self.extension.trim_start_matches('.');
        if ext.is_empty() {
            return Err(Error::config_invalid_value(
                "extension",
                Some(self.extension.clone()),
                "Extension must not be empty",
            ));
        }
        if self.excluded_dirs.iter().any(|d| d.trim().is_empty()) {
            return Err(Error::config_invalid_value(
                "excluded_dirs",
                None,
                "Excluded directory names must not be empty",
            ));
        }
        if self.type_marker.trim().is_empty() {
            return Err(Error::config_invalid_value(
                "type_marker",
                Some(self.type_marker.clone()),
                "Type marker must not be empty",
            ));
        }
        Ok(())
    }

    /// Extension without any leading dot.
    pub fn normalized_extension(&self) -> &str {
        self.extension.trim_start_matches('.')
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_extension() -> String {
    "tsx".to_string()
}

fn default_excluded_dirs() -> Vec<String> {
    vec!["node_modules".to_string()]
}

fn default_type_marker() -> String {
    "any".to_string()
}

fn default_follow_up_comment() -> String {
    "TODO: Add proper type".to_string()
}

// =============================================================================
// Loading
// =============================================================================

/// Resolve which config file applies: the explicit one, else `propfix.json` at the root.
pub fn config_path(root: &Path, explicit: Option<&Path>) -> Option<PathBuf> {
    match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => {
            let candidate = root.join(CONFIG_FILE_NAME);
            candidate.is_file().then_some(candidate)
        }
    }
}

/// Load defaults for a scan root.
///
/// An explicit config path must exist and parse. The implicit `propfix.json`
/// is optional, but once present it must parse too.
pub fn load_defaults(root: &Path, explicit: Option<&Path>) -> Result<Defaults> {
    let Some(path) = config_path(root, explicit) else {
        return Ok(Defaults::default());
    };

    let content = io::read_file(&path, &format!("read {}", path.display()))?;
    let config: PropfixConfig = serde_json::from_str(&content)
        .map_err(|e| Error::config_invalid_json(path.display().to_string(), e))?;

    config.defaults.validate()?;
    Ok(config.defaults)
}
