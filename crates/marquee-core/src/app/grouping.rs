//! Grouping rule: turns a flat list of releases into [`GroupedReleases`].
//!
//! - dated on or before `today` -> `released`, newest first
//! - dated after `today` -> `upcoming`, soonest first
//! - no date -> `upcoming`, after every dated entry
//! - unreadable date -> per [`UnparseablePolicy`]
//! - `latest` is the head of `released`
//!
//! Sorting is stable, so ties keep input order.

use std::cmp::Reverse;

use chrono::NaiveDate;
use tracing::trace;

use super::config::{GroupingConfig, UnparseablePolicy};
use crate::domain::{GroupedReleases, Release};

pub fn group_releases(
    releases: Vec<Release>,
    today: NaiveDate,
    config: &GroupingConfig,
) -> GroupedReleases {
    let mut released: Vec<(NaiveDate, Release)> = Vec::new();
    let mut upcoming: Vec<(Option<NaiveDate>, Release)> = Vec::new();

    for release in releases {
        match release.parsed_date(config.date_formats.as_slice()) {
            Some(date) if date <= today => released.push((date, release)),
            Some(date) => upcoming.push((Some(date), release)),
            None if !release.is_dated() => upcoming.push((None, release)),
            None => match config.unparseable {
                UnparseablePolicy::Upcoming => upcoming.push((None, release)),
                UnparseablePolicy::Skip => {
                    trace!(title = %release.title, "skipping release with unreadable date");
                }
            },
        }
    }

    released.sort_by_key(|(date, _)| Reverse(*date));
    // `None` must sort last, so key on (is_undated, date).
    upcoming.sort_by_key(|(date, _)| (date.is_none(), *date));

    let released: Vec<Release> = released.into_iter().map(|(_, r)| r).collect();
    let upcoming: Vec<Release> = upcoming.into_iter().map(|(_, r)| r).collect();
    let latest = released.first().cloned();

    GroupedReleases {
        released,
        upcoming,
        latest,
    }
}
