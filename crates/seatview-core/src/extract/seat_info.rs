//! Seat-info parser
//!
//! Recovers section, row and seat identifiers embedded in photo URLs such as
//! `/photo/123/venue/section-100/row-A/seat-5/`.

use crate::types::SeatInfo;

/// Parse section, row and seat from a URL.
///
/// Each label (`section`, `row`, `seat`) is searched independently,
/// case-insensitively, followed by `/` or `-`; the value runs until the next
/// `/`. A label glued to the end of a longer word (`Tomorrow-Land`) does not
/// count. Values are percent-decoded and `-`/`+` become spaces. Missing labels
/// yield an empty section or `None`; this function never fails.
///
/// # Examples
/// ```
/// use seatview_core::extract::parse_seat_info;
///
/// let info = parse_seat_info("https://x/venue/v/photo/section-100/row-A/seat-5/");
/// assert_eq!(info.section, "100");
/// assert_eq!(info.row.as_deref(), Some("A"));
/// assert_eq!(info.seat.as_deref(), Some("5"));
///
/// let info = parse_seat_info("https://x/venue/v/photo/section-GA/");
/// assert_eq!(info.section, "GA");
/// assert_eq!(info.row, None);
/// assert_eq!(info.seat, None);
/// ```
pub fn parse_seat_info(url: &str) -> SeatInfo {
    SeatInfo {
        section: capture_label(url, "section").unwrap_or_default(),
        row: capture_label(url, "row"),
        seat: capture_label(url, "seat"),
    }
}

/// Find `{label}/value` or `{label}-value` in `url` and clean up the value.
fn capture_label(url: &str, label: &str) -> Option<String> {
    let pattern = format!(r"(?i)(?:^|[^A-Za-z0-9]){label}[/-]([^/]+)");
    let re = regex_lite::Regex::new(&pattern).ok()?;
    let raw = re.captures(url)?.get(1)?.as_str();

    let value = clean_value(raw);
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Percent-decode, then turn `-` and `+` separators into spaces.
fn clean_value(raw: &str) -> String {
    let decoded = urlencoding::decode(raw)
        .map(|cow| cow.into_owned())
        .unwrap_or_else(|_| raw.to_string());

    decoded.replace(['-', '+'], " ").trim().to_string()
}
