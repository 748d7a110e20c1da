//! Legacy navigation file loading.
//!
//! The legacy configuration is a YAML document with a top-level `nav` key.
//! The producing toolchain embeds language-specific tags (`!!python/name:`
//! and friends) that a plain YAML parser rejects, so those are stripped via
//! text substitution before parsing.

use std::path::{Path, PathBuf};

use serde_yaml::Value;

/// Tag prefixes stripped before YAML parsing, longest first so the
/// `object/apply` form is not left half-stripped by the `object` form.
const TAG_PREFIXES: &[&str] = &["!!python/object/apply:", "!!python/object:", "!!python/name:"];

/// Error loading or parsing the legacy navigation file.
#[derive(Debug, thiserror::Error)]
pub enum NavFileError {
    /// Navigation file could not be read.
    #[error("Failed to read navigation file {}: {source}", .path.display())]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// YAML parsing error.
    #[error("Invalid YAML in navigation file: {0}")]
    Parse(#[from] serde_yaml::Error),
    /// Document parsed but carries no `nav` array.
    #[error("Navigation file has no top-level `nav` array")]
    MissingNav,
}

/// Load the legacy navigation file and extract its `nav` entries.
pub fn load_nav(path: &Path) -> Result<Vec<Value>, NavFileError> {
    let content = std::fs::read_to_string(path).map_err(|source| NavFileError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_nav(&content)
}

/// Parse a legacy navigation document and extract its `nav` entries.
///
/// Strips toolchain tag prefixes, parses the YAML, and returns the value of
/// the top-level `nav` key, which must be an array.
pub fn parse_nav(content: &str) -> Result<Vec<Value>, NavFileError> {
    let document: Value = serde_yaml::from_str(&strip_tags(content))?;
    document
        .get("nav")
        .and_then(Value::as_sequence)
        .cloned()
        .ok_or(NavFileError::MissingNav)
}

/// Remove language-specific tag prefixes the YAML parser cannot handle.
fn strip_tags(content: &str) -> String {
    let mut stripped = content.to_owned();
    for prefix in TAG_PREFIXES {
        stripped = stripped.replace(prefix, "");
    }
    stripped
}
