//! JSON file release source.
//!
//! Accepts either a bare array of releases or an object wrapping them:
//!
//! ```json
//! [{ "title": "...", "release_date": null, "runtime": "...", "poster": "...", "link": "..." }]
//! { "releases": [ ... ] }
//! ```

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::domain::{MarqueeError, Release};
use crate::ports::ReleaseSource;

#[derive(Deserialize)]
struct Wrapped {
    releases: Vec<Release>,
}

#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Decode a catalogue from raw bytes; `path` is only used for error context.
    ///
    /// The form is picked from the first non-whitespace byte, so serde_json
    /// reports the failing field and position instead of a generic mismatch.
    pub fn decode(path: &Path, bytes: &[u8]) -> Result<Vec<Release>, MarqueeError> {
        let is_bare = bytes
            .iter()
            .find(|b| !b.is_ascii_whitespace())
            .is_some_and(|&b| b == b'[');

        let decoded = if is_bare {
            serde_json::from_slice::<Vec<Release>>(bytes)
        } else {
            serde_json::from_slice::<Wrapped>(bytes).map(|w| w.releases)
        };
        decoded.map_err(|source| MarqueeError::Decode {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[async_trait]
impl ReleaseSource for JsonFileSource {
    async fn load(&self) -> Result<Vec<Release>, MarqueeError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| MarqueeError::Io {
                path: self.path.clone(),
                source,
            })?;
        debug!(path = %self.path.display(), bytes = bytes.len(), "read catalogue");

        Self::decode(&self.path, &bytes)
    }

    fn describe(&self) -> String {
        format!("json file {}", self.path.display())
    }
}
