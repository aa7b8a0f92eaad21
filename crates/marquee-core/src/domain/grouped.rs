//! Grouped releases: released / upcoming buckets plus a highlighted entry.

use serde::{Deserialize, Serialize};

use super::release::Release;

/// A partition of releases into temporal buckets.
///
/// The container itself asserts no rule about how `latest` is chosen; see
/// [`crate::app::group_releases`] for the rule Marquee applies when it builds
/// one. `latest` serializes as `null` when absent.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GroupedReleases {
    pub released: Vec<Release>,
    pub upcoming: Vec<Release>,

    #[serde(default)]
    pub latest: Option<Release>,
}

impl GroupedReleases {
    /// The "no data" value: both buckets empty, no latest release.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Total number of releases across both buckets.
    pub fn len(&self) -> usize {
        self.released.len() + self.upcoming.len()
    }

    pub fn is_empty(&self) -> bool {
        self.released.is_empty() && self.upcoming.is_empty()
    }

    /// True when `latest` is absent or is one of the bucketed releases.
    pub fn contains_latest(&self) -> bool {
        match &self.latest {
            None => true,
            Some(latest) => self.released.contains(latest) || self.upcoming.contains(latest),
        }
    }
}
