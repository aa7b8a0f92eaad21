//! Application logic: grouping rules and the service that drives them.

pub mod config;
pub mod grouping;
pub mod service;

pub use self::config::{GroupingConfig, UnparseablePolicy};
pub use self::grouping::group_releases;
pub use self::service::ReleaseService;
