//! URL helpers shared by the extractors
//!
//! Everything here is string-in, string-out and performs no I/O.

use reqwest::Url;

/// Markers the site appends to file names of reduced-size images
const THUMBNAIL_MARKERS: [&str; 2] = ["_thumb", "_small"];

/// Resolve `href` against the site origin.
///
/// Absolute `http(s)` links are returned unchanged and protocol-relative
/// links (`//host/x`) get an `https:` scheme. Anything else is joined onto
/// `base`.
///
/// # Examples
/// ```
/// use seatview_core::url::resolve_url;
///
/// let base = "https://aviewfrommyseat.com";
/// assert_eq!(resolve_url(base, "/venue/X/"), "https://aviewfrommyseat.com/venue/X/");
/// assert_eq!(resolve_url(base, "https://cdn.example/a.jpg"), "https://cdn.example/a.jpg");
/// ```
pub fn resolve_url(base: &str, href: &str) -> String {
    let href = href.trim();
    let lower = href.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        return href.to_string();
    }
    if let Some(rest) = href.strip_prefix("//") {
        return format!("https://{rest}");
    }

    match Url::parse(base).and_then(|b| b.join(href)) {
        Ok(url) => url.to_string(),
        Err(_) => {
            let base = base.trim_end_matches('/');
            if href.starts_with('/') {
                format!("{base}{href}")
            } else {
                format!("{base}/{href}")
            }
        }
    }
}

/// Strip thumbnail markers from the file-name part of an image URL.
///
/// Only the last path segment is rewritten, so directories that happen to
/// contain a marker are left alone.
///
/// # Examples
/// ```
/// use seatview_core::url::full_resolution_url;
///
/// assert_eq!(full_resolution_url("/photos/photo_thumb.jpg"), "/photos/photo.jpg");
/// assert_eq!(full_resolution_url("/photos/photo_small.jpg"), "/photos/photo.jpg");
/// ```
pub fn full_resolution_url(src: &str) -> String {
    let (dir, file) = match src.rfind('/') {
        Some(idx) => src.split_at(idx + 1),
        None => ("", src),
    };

    let file = THUMBNAIL_MARKERS
        .iter()
        .fold(file.to_string(), |name, marker| name.replace(marker, ""));

    format!("{dir}{file}")
}

/// URL of the sections listing for a venue root page.
///
/// # Examples
/// ```
/// use seatview_core::url::sections_url;
///
/// assert_eq!(
///     sections_url("https://aviewfrommyseat.com/venue/Red+Rocks/"),
///     "https://aviewfrommyseat.com/venue/Red+Rocks/sections/"
/// );
/// ```
pub fn sections_url(venue_url: &str) -> String {
    format!("{}/sections/", venue_url.trim().trim_end_matches('/'))
}
