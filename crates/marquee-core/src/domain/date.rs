//! Release date parsing.

use chrono::NaiveDate;

/// Formats tried, in order, when no explicit list is configured.
pub const DEFAULT_DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%B %d, %Y", "%b %d, %Y", "%d %B %Y"];

/// Parse a date-like text value.
///
/// Surrounding whitespace is ignored. The first format that matches wins;
/// text that matches none yields `None`.
pub fn parse_release_date<S: AsRef<str>>(text: &str, formats: &[S]) -> Option<NaiveDate> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    formats
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(text, fmt.as_ref()).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::iso("2024-01-01", 2024, 1, 1)]
    #[case::long_month("May 2, 2025", 2025, 5, 2)]
    #[case::short_month("Jul 26, 2024", 2024, 7, 26)]
    #[case::day_first("14 February 2025", 2025, 2, 14)]
    #[case::padded("  2023-11-10 ", 2023, 11, 10)]
    fn parses_default_formats(#[case] text: &str, #[case] y: i32, #[case] m: u32, #[case] d: u32) {
        assert_eq!(
            parse_release_date(text, DEFAULT_DATE_FORMATS),
            NaiveDate::from_ymd_opt(y, m, d)
        );
    }

    #[rstest]
    #[case::empty("")]
    #[case::blank("   ")]
    #[case::tba("TBA")]
    #[case::year_only("2026")]
    #[case::impossible("2024-02-30")]
    fn unparseable_text_yields_none(#[case] text: &str) {
        assert_eq!(parse_release_date(text, DEFAULT_DATE_FORMATS), None);
    }

    #[test]
    fn first_matching_format_wins() {
        // 01/02/2024 reads as 1 Feb with day-first, 2 Jan with month-first.
        let day_first = parse_release_date("01/02/2024", &["%d/%m/%Y", "%m/%d/%Y"]);
        assert_eq!(day_first, NaiveDate::from_ymd_opt(2024, 2, 1));
    }
}
