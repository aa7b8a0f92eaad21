//! Release record: one media release item.
//!
//! The record is a transport contract, not a validator. Text fields are kept
//! exactly as supplied; `runtime`, `poster` and `link` are opaque display
//! strings.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::date::parse_release_date;

/// A single release (film, episode, special, ...).
///
/// `release_date` is the only optional field. `None` serializes as `null`
/// and means the release is unscheduled or its date is unknown.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Release {
    pub title: String,

    #[serde(default)]
    pub release_date: Option<String>,

    pub runtime: String,
    pub poster: String,
    pub link: String,
}

impl Release {
    pub fn new(
        title: impl Into<String>,
        release_date: Option<String>,
        runtime: impl Into<String>,
        poster: impl Into<String>,
        link: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            release_date,
            runtime: runtime.into(),
            poster: poster.into(),
            link: link.into(),
        }
    }

    /// True when a release date (parseable or not) is present.
    pub fn is_dated(&self) -> bool {
        self.release_date.is_some()
    }

    /// Parse `release_date` with the given chrono formats.
    ///
    /// Returns `None` both for undated releases and for text that matches
    /// none of the formats.
    pub fn parsed_date<S: AsRef<str>>(&self, formats: &[S]) -> Option<NaiveDate> {
        self.release_date
            .as_deref()
            .and_then(|text| parse_release_date(text, formats))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DEFAULT_DATE_FORMATS;

    fn film_a() -> Release {
        Release::new(
            "Film A",
            Some("2024-01-01".to_string()),
            "120 min",
            "p1.jpg",
            "http://x/a",
        )
    }

    #[test]
    fn populated_release_keeps_every_field() {
        let r = film_a();
        assert_eq!(r.title, "Film A");
        assert_eq!(r.release_date.as_deref(), Some("2024-01-01"));
        assert_eq!(r.runtime, "120 min");
        assert_eq!(r.poster, "p1.jpg");
        assert_eq!(r.link, "http://x/a");

        let copy = r.clone();
        assert_eq!(copy, r);
    }

    #[test]
    fn undated_release_is_distinguishable() {
        let dated = film_a();
        let undated = Release {
            release_date: None,
            ..film_a()
        };

        assert!(dated.is_dated());
        assert!(!undated.is_dated());
        assert_ne!(dated, undated);
        assert_eq!(undated.parsed_date(DEFAULT_DATE_FORMATS), None);
    }

    #[test]
    fn absent_date_serializes_as_null() {
        let r = Release {
            release_date: None,
            ..film_a()
        };
        let v = serde_json::to_value(&r).unwrap();
        assert!(v["release_date"].is_null());
        assert!(v.as_object().unwrap().contains_key("release_date"));
    }

    #[test]
    fn missing_date_key_deserializes_as_absent() {
        let json = r#"{"title":"Film B","runtime":"TBA","poster":"","link":"http://x/b"}"#;
        let r: Release = serde_json::from_str(json).unwrap();
        assert_eq!(r.release_date, None);
        assert_eq!(r.runtime, "TBA");
    }

    #[test]
    fn parsed_date_uses_supplied_formats() {
        let r = film_a();
        assert_eq!(
            r.parsed_date(DEFAULT_DATE_FORMATS),
            NaiveDate::from_ymd_opt(2024, 1, 1)
        );
        assert_eq!(r.parsed_date(&["%d/%m/%Y"]), None);
    }
}
