//! Errors raised while loading, decoding or grouping releases.
//!
//! A missing `release_date` or `latest` is never an error; it is a
//! representable state of the data shapes.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MarqueeError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode releases from {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode releases: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("invalid grouping config: {0}")]
    InvalidConfig(String),
}

impl MarqueeError {
    /// True for errors caused by release data rather than the environment.
    pub fn is_data_error(&self) -> bool {
        matches!(self, MarqueeError::Decode { .. } | MarqueeError::Encode(_))
    }
}
