//! ReleaseService - loads releases from a source and groups them.

use tracing::{debug, info};

use super::config::GroupingConfig;
use super::grouping::group_releases;
use crate::domain::{GroupedReleases, MarqueeError, Release};
use crate::ports::{Clock, ReleaseSource};

/// Glue between a [`ReleaseSource`], a [`Clock`] and the grouping rule.
pub struct ReleaseService<S, C> {
    source: S,
    clock: C,
    config: GroupingConfig,
}

impl<S: ReleaseSource, C: Clock> ReleaseService<S, C> {
    /// Fails with `InvalidConfig` when `config` does not validate.
    pub fn new(source: S, clock: C, config: GroupingConfig) -> Result<Self, MarqueeError> {
        config.validate()?;
        Ok(Self {
            source,
            clock,
            config,
        })
    }

    pub async fn grouped(&self) -> Result<GroupedReleases, MarqueeError> {
        let releases = self.source.load().await?;
        let today = self.clock.today();
        debug!(source = %self.source.describe(), loaded = releases.len(), %today, "grouping releases");

        let grouped = group_releases(releases, today, &self.config);
        info!(
            released = grouped.released.len(),
            upcoming = grouped.upcoming.len(),
            latest = grouped.latest.as_ref().map(|r| r.title.as_str()),
            "grouped releases"
        );
        Ok(grouped)
    }

    pub async fn latest(&self) -> Result<Option<Release>, MarqueeError> {
        Ok(self.grouped().await?.latest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::impls::InMemorySource;
    use crate::ports::FixedClock;
    use chrono::NaiveDate;

    fn service(releases: Vec<Release>) -> ReleaseService<InMemorySource, FixedClock> {
        let clock = FixedClock(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        ReleaseService::new(InMemorySource::new(releases), clock, GroupingConfig::default())
            .unwrap()
    }

    #[tokio::test]
    async fn groups_loaded_releases() {
        let film_a = Release::new(
            "Film A",
            Some("2024-01-01".to_string()),
            "120 min",
            "p1.jpg",
            "http://x/a",
        );
        let film_b = Release::new("Film B", None, "TBA", "p2.jpg", "http://x/b");
        let svc = service(vec![film_b.clone(), film_a.clone()]);

        let g = svc.grouped().await.unwrap();
        assert_eq!(g.released, vec![film_a.clone()]);
        assert_eq!(g.upcoming, vec![film_b]);
        assert_eq!(g.latest, Some(film_a.clone()));

        assert_eq!(svc.latest().await.unwrap(), Some(film_a));
    }

    #[tokio::test]
    async fn empty_source_has_no_latest() {
        let svc = service(vec![]);
        assert_eq!(svc.grouped().await.unwrap(), GroupedReleases::empty());
        assert_eq!(svc.latest().await.unwrap(), None);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = GroupingConfig {
            date_formats: vec![],
            ..GroupingConfig::default()
        };
        let clock = FixedClock(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        let result = ReleaseService::new(InMemorySource::default(), clock, config);
        assert!(matches!(result, Err(MarqueeError::InvalidConfig(_))));
    }
}
