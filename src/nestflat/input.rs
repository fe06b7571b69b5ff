//! Reading input sequences from JSON or YAML text
//!
//! Both formats are decoded into `serde_json::Value` first and then split into elements by
//! [`sequence_from_value`], so leaves look the same regardless of the source format.
//!
//! serde_json refuses documents nested deeper than 128 levels; that limit applies to JSON
//! input read through this module.

use super::element::Element;
use super::error::FlattenError;
use super::json::sequence_from_value;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Text format of an input document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Json,
    Yaml,
}

impl InputFormat {
    /// Picks a format from a file extension. `.yaml` and `.yml` are YAML, everything else
    /// (including no extension) is JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                InputFormat::Yaml
            }
            _ => InputFormat::Json,
        }
    }
}

/// Parses `text` in the given format into an input sequence.
pub fn parse_str(text: &str, format: InputFormat) -> Result<Vec<Element<Value>>, FlattenError> {
    let value: Value = match format {
        InputFormat::Json => serde_json::from_str(text)?,
        InputFormat::Yaml => serde_yaml::from_str(text)?,
    };
    sequence_from_value(value)
}

/// Reads and parses the file at `path`, choosing the format from its extension.
pub fn read_path(path: impl AsRef<Path>) -> Result<Vec<Element<Value>>, FlattenError> {
    let path = path.as_ref();
    let format = InputFormat::from_path(path);
    tracing::debug!(path = %path.display(), ?format, "reading input");

    let text = fs::read_to_string(path).map_err(|source| FlattenError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_str(&text, format)
}
