//! crates/digest_core/src/format.rs
//!
//! Display formatting for dates and commitfest tag colours.
//! All timestamps are rendered in UTC.

use chrono::{DateTime, Datelike, NaiveDate, Utc};

/// `"5th Jan 2025"`
pub fn date_with_ordinal(date: NaiveDate) -> String {
    format!("{}{} {}", date.day(), ordinal_suffix(date.day()), date.format("%b %Y"))
}

fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

/// `"Jan 12, 2025, 09:30 AM"`
pub fn date_time(ts: DateTime<Utc>) -> String {
    ts.format("%b %-d, %Y, %I:%M %p").to_string()
}

/// `"1/6/2025"`
pub fn short_date(ts: DateTime<Utc>) -> String {
    ts.format("%-m/%-d/%Y").to_string()
}

const UNCOLORED_TAG_STYLE: &str =
    "background-color: #e0f2fe; color: #0369a1; border-color: #bae6fd;";

/// Inline style for a commitfest tag, picking a text colour that contrasts
/// with the tag's background.
pub fn commitfest_tag_style(color: Option<&str>) -> String {
    let Some(color) = color.filter(|c| !c.trim().is_empty()) else {
        return UNCOLORED_TAG_STYLE.to_string();
    };
    let hex = color.trim().trim_start_matches('#');
    let channel = |i: usize| {
        hex.get(i..i + 2)
            .and_then(|s| u8::from_str_radix(s, 16).ok())
            .map(u32::from)
    };
    let (text, border) = match (channel(0), channel(2), channel(4)) {
        (Some(r), Some(g), Some(b)) if (r * 299 + g * 587 + b * 114) / 1000 > 128 => {
            ("#000000", "rgba(0, 0, 0, 0.2)")
        }
        _ => ("#ffffff", "rgba(255, 255, 255, 0.3)"),
    };
    format!(
        "background-color: {}; color: {}; border-color: {};",
        color.trim(),
        text,
        border
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, d).unwrap()
    }

    #[test]
    fn test_ordinals() {
        assert_eq!(date_with_ordinal(day(1)), "1st Jan 2025");
        assert_eq!(date_with_ordinal(day(2)), "2nd Jan 2025");
        assert_eq!(date_with_ordinal(day(3)), "3rd Jan 2025");
        assert_eq!(date_with_ordinal(day(4)), "4th Jan 2025");
        assert_eq!(date_with_ordinal(day(11)), "11th Jan 2025");
        assert_eq!(date_with_ordinal(day(12)), "12th Jan 2025");
        assert_eq!(date_with_ordinal(day(13)), "13th Jan 2025");
        assert_eq!(date_with_ordinal(day(21)), "21st Jan 2025");
        assert_eq!(date_with_ordinal(day(22)), "22nd Jan 2025");
        assert_eq!(date_with_ordinal(day(31)), "31st Jan 2025");
    }

    #[test]
    fn test_date_time() {
        let ts = Utc.with_ymd_and_hms(2025, 1, 12, 9, 30, 0).unwrap();
        assert_eq!(date_time(ts), "Jan 12, 2025, 09:30 AM");
        let ts = Utc.with_ymd_and_hms(2025, 3, 2, 17, 5, 0).unwrap();
        assert_eq!(date_time(ts), "Mar 2, 2025, 05:05 PM");
    }

    #[test]
    fn test_short_date() {
        let ts = Utc.with_ymd_and_hms(2025, 1, 6, 23, 0, 0).unwrap();
        assert_eq!(short_date(ts), "1/6/2025");
    }

    #[test]
    fn test_tag_style_without_color() {
        assert_eq!(commitfest_tag_style(None), UNCOLORED_TAG_STYLE);
        assert_eq!(commitfest_tag_style(Some("")), UNCOLORED_TAG_STYLE);
    }

    #[test]
    fn test_light_color_gets_dark_text() {
        assert_eq!(
            commitfest_tag_style(Some("#ffeb3b")),
            "background-color: #ffeb3b; color: #000000; border-color: rgba(0, 0, 0, 0.2);"
        );
    }

    #[test]
    fn test_dark_color_gets_light_text() {
        assert_eq!(
            commitfest_tag_style(Some("#1a237e")),
            "background-color: #1a237e; color: #ffffff; border-color: rgba(255, 255, 255, 0.3);"
        );
    }
}
