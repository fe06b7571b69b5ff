//! Errors raised around the flatten operation
//!
//! Flattening itself cannot fail. These errors come from reading and decoding input
//! documents, from picking an output format, and from parsing user-supplied names.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FlattenError {
    #[error("failed to read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON input")]
    Json(#[from] serde_json::Error),
    #[error("invalid YAML input")]
    Yaml(#[from] serde_yaml::Error),
    #[error("input must be an ordered sequence, found {0}")]
    NotASequence(&'static str),
    #[error("format '{0}' not found")]
    FormatNotFound(String),
    #[error("serialization error: {0}")]
    Serialization(String),
    #[error("unknown traversal '{0}' (expected 'iterative' or 'recursive')")]
    UnknownTraversal(String),
}
