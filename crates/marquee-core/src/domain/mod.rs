//! Domain model (release records, grouped view, errors).

pub mod date;
pub mod errors;
pub mod grouped;
pub mod release;

pub use self::date::{DEFAULT_DATE_FORMATS, parse_release_date};
pub use self::errors::MarqueeError;
pub use self::grouped::GroupedReleases;
pub use self::release::Release;
