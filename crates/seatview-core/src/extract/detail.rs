//! Photo detail extractor
//!
//! Parses a single photo page. The markup of this page varies, so the main
//! image is located through a fallback chain of selectors.

use crate::document::Document;
use crate::types::SeatPhoto;

use super::{image_source, parse_seat_info};

/// Candidate selectors for the main photo, tried in order
const PRIMARY_IMAGE_SELECTORS: [&str; 4] = [
    "img.photo",
    "img[src*='/photos/']",
    ".photo-container img",
    "#photo img",
];

const EVENT_SELECTORS: [&str; 3] = [".event-name", ".tour-name", "h2"];

const VENUE_LINK_SELECTOR: &str = "a[href*='/venue/']";

/// Extract a fully populated seat photo from its detail page.
///
/// Returns `None` when no selector in the chain finds a usable image,
/// which means the page does not look like a photo page.
///
/// # Arguments
/// * `document` - Parsed photo page
/// * `photo_page_url` - URL the page was fetched from; seat info is parsed from it
/// * `base_url` - Origin relative links resolve against
pub fn extract_photo_detail(
    document: &Document,
    photo_page_url: &str,
    base_url: &str,
) -> Option<SeatPhoto> {
    let Some(image_url) = PRIMARY_IMAGE_SELECTORS.iter().find_map(|selector| {
        document
            .select_first(selector)
            .and_then(|img| image_source(&img, base_url))
    }) else {
        tracing::debug!(photo_page_url, "no primary image on photo page");
        return None;
    };

    let seat = parse_seat_info(photo_page_url);

    Some(SeatPhoto {
        image_url,
        section: seat.section,
        row: seat.row,
        seat: seat.seat,
        event: extract_event(document),
        venue: extract_venue_name(document).unwrap_or_default(),
        photo_page_url: photo_page_url.to_string(),
    })
}

fn extract_event(document: &Document) -> Option<String> {
    EVENT_SELECTORS.iter().find_map(|selector| {
        document
            .select_first(selector)
            .map(|el| el.text())
            .filter(|text| !text.is_empty())
    })
}

fn extract_venue_name(document: &Document) -> Option<String> {
    document
        .select_first(VENUE_LINK_SELECTOR)
        .map(|el| el.text())
        .filter(|text| !text.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://aviewfrommyseat.com";
    const PAGE_URL: &str = "https://aviewfrommyseat.com/photo/77/section-104/row-J/seat-12/";

    fn extract(html: &str) -> Option<SeatPhoto> {
        extract_photo_detail(&Document::parse(html), PAGE_URL, BASE)
    }

    #[test]
    fn test_extract_full_detail() {
        let photo = extract(
            r#"<html><body>
                <a href="/venue/Ball+Arena/">Ball Arena</a>
                <h2 class="event-name">  Nuggets vs Lakers </h2>
                <img class="photo" src="/photos/77.jpg">
            </body></html>"#,
        )
        .unwrap();

        assert_eq!(
            photo,
            SeatPhoto {
                image_url: "https://aviewfrommyseat.com/photos/77.jpg".to_string(),
                section: "104".to_string(),
                row: Some("J".to_string()),
                seat: Some("12".to_string()),
                event: Some("Nuggets vs Lakers".to_string()),
                venue: "Ball Arena".to_string(),
                photo_page_url: PAGE_URL.to_string(),
            }
        );
    }

    #[test]
    fn test_selector_chain_priority() {
        let photo = extract(
            r##"<div id="photo"><img src="/other/fallback.jpg"></div>
               <img src="/photos/by-path.jpg">"##,
        )
        .unwrap();
        assert_eq!(photo.image_url, "https://aviewfrommyseat.com/photos/by-path.jpg");
    }

    #[test]
    fn test_last_fallback_selector() {
        let photo = extract(r##"<div id="photo"><img src="/other/main.jpg"></div>"##).unwrap();
        assert_eq!(photo.image_url, "https://aviewfrommyseat.com/other/main.jpg");
    }

    #[test]
    fn test_photo_container_fallback() {
        let photo = extract(r#"<div class="photo-container"><img src="//cdn.example.com/x.jpg"></div>"#)
            .unwrap();
        assert_eq!(photo.image_url, "https://cdn.example.com/x.jpg");
    }

    #[test]
    fn test_no_image_returns_none() {
        assert!(extract("<html><body><h2>Some event</h2></body></html>").is_none());
    }

    #[test]
    fn test_optional_fields_absent() {
        let photo = extract(r#"<img class="photo" src="/photos/1.jpg">"#).unwrap();
        assert_eq!(photo.event, None);
        assert_eq!(photo.venue, "");
    }

    #[test]
    fn test_event_falls_back_to_tour_name() {
        let photo = extract(
            r#"<span class="event-name"> </span><span class="tour-name">World Tour</span>
               <img class="photo" src="/photos/1.jpg">"#,
        )
        .unwrap();
        assert_eq!(photo.event.as_deref(), Some("World Tour"));
    }

    #[test]
    fn test_extract_is_idempotent() {
        let doc = Document::parse(r#"<h2>E</h2><img class="photo" src="/photos/1.jpg">"#);
        assert_eq!(
            extract_photo_detail(&doc, PAGE_URL, BASE),
            extract_photo_detail(&doc, PAGE_URL, BASE)
        );
    }
}
