//! Autofocus errors
//!
//! Only setup can fail. Per-frame work absorbs misses and degenerate input
//! locally, so nothing here is returned from `update`.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FocusError {
    /// No camera or lens was bound to receive the focus distance.
    #[error("no focus sink bound: attach a camera lens before initializing")]
    MissingSink,

    /// A configuration field is outside its allowed range.
    #[error("invalid focus config: {field} {reason} (got {value})")]
    InvalidConfig {
        field: &'static str,
        reason: &'static str,
        value: f32,
    },

    #[error("failed to read focus config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed focus config JSON: {0}")]
    Json(#[from] serde_json::Error),
}
