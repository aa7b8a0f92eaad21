//! In-memory release source.

use async_trait::async_trait;

use crate::domain::{MarqueeError, Release};
use crate::ports::ReleaseSource;

/// Hands out a clone of a fixed list of releases.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    releases: Vec<Release>,
}

impl InMemorySource {
    pub fn new(releases: Vec<Release>) -> Self {
        Self { releases }
    }
}

impl From<Vec<Release>> for InMemorySource {
    fn from(releases: Vec<Release>) -> Self {
        Self::new(releases)
    }
}

#[async_trait]
impl ReleaseSource for InMemorySource {
    async fn load(&self) -> Result<Vec<Release>, MarqueeError> {
        Ok(self.releases.clone())
    }

    fn describe(&self) -> String {
        format!("in-memory ({} releases)", self.releases.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn load_preserves_order() {
        let releases = vec![
            Release::new("b", None, "", "", ""),
            Release::new("a", Some("2024-01-01".into()), "", "", ""),
        ];
        let source = InMemorySource::from(releases.clone());

        assert_eq!(source.load().await.unwrap(), releases);
        assert_eq!(source.describe(), "in-memory (2 releases)");
    }
}
