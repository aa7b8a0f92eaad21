//! Grouping configuration.

use serde::{Deserialize, Serialize};

use crate::domain::{DEFAULT_DATE_FORMATS, MarqueeError};

/// Where a release goes when its `release_date` is present but unreadable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnparseablePolicy {
    /// Treat it like an unscheduled release.
    #[default]
    Upcoming,

    /// Leave it out of both buckets.
    Skip,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupingConfig {
    /// chrono formats tried in order when reading `release_date`.
    #[serde(default = "default_date_formats")]
    pub date_formats: Vec<String>,

    #[serde(default)]
    pub unparseable: UnparseablePolicy,
}

fn default_date_formats() -> Vec<String> {
    DEFAULT_DATE_FORMATS.iter().map(|f| f.to_string()).collect()
}

impl Default for GroupingConfig {
    fn default() -> Self {
        Self {
            date_formats: default_date_formats(),
            unparseable: UnparseablePolicy::default(),
        }
    }
}

impl GroupingConfig {
    pub fn with_unparseable(mut self, policy: UnparseablePolicy) -> Self {
        self.unparseable = policy;
        self
    }

    pub fn validate(&self) -> Result<(), MarqueeError> {
        if self.date_formats.is_empty() {
            return Err(MarqueeError::InvalidConfig(
                "date_formats must not be empty".to_string(),
            ));
        }
        if let Some(blank) = self.date_formats.iter().position(|f| f.trim().is_empty()) {
            return Err(MarqueeError::InvalidConfig(format!(
                "date_formats[{blank}] is blank"
            )));
        }
        Ok(())
    }
}
