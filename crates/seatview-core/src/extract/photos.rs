//! Photo list extractor
//!
//! Parses a section page into seat photos. Each photo appears as a link to
//! its detail page wrapping a thumbnail image.

use crate::document::Document;
use crate::types::SeatPhoto;
use crate::url::resolve_url;

use super::{image_source, parse_seat_info};

const PHOTO_LINK_SELECTOR: &str = "a[href*='/photo/']";

/// Extract up to `max_photos` seat photos from a section page.
///
/// The cap applies to candidate links in document order before anything else
/// is inspected, so links beyond it are never looked at. Links without a
/// thumbnail produce no record. Seat info comes from the photo-page URL and
/// `event` is always `None` here.
///
/// # Arguments
/// * `document` - Parsed section page
/// * `venue` - Venue name copied into every record
/// * `max_photos` - Maximum number of candidate links to consider
/// * `base_url` - Origin relative links resolve against
pub fn extract_photos(
    document: &Document,
    venue: &str,
    max_photos: usize,
    base_url: &str,
) -> Vec<SeatPhoto> {
    let photos: Vec<SeatPhoto> = document
        .select_all(PHOTO_LINK_SELECTOR)
        .into_iter()
        .take(max_photos)
        .filter_map(|link| {
            let href = link.non_empty_attr("href")?;
            let photo_page_url = resolve_url(base_url, href);

            let img = link.select_first("img")?;
            let image_url = image_source(&img, base_url)?;

            let seat = parse_seat_info(&photo_page_url);

            Some(SeatPhoto {
                image_url,
                section: seat.section,
                row: seat.row,
                seat: seat.seat,
                event: None,
                venue: venue.to_string(),
                photo_page_url,
            })
        })
        .collect();

    tracing::debug!(venue, max_photos, count = photos.len(), "extracted section photos");
    photos
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://aviewfrommyseat.com";

    fn photo_link(id: usize) -> String {
        format!(
            r#"<a href="/photo/{id}/venue/section-10{id}/row-B/seat-{id}/"><img src="/photos/p{id}_thumb.jpg"></a>"#
        )
    }

    #[test]
    fn test_extract_single_photo() {
        let doc = Document::parse(&photo_link(1));
        let photos = extract_photos(&doc, "Red Rocks", 20, BASE);

        assert_eq!(
            photos,
            vec![SeatPhoto {
                image_url: "https://aviewfrommyseat.com/photos/p1.jpg".to_string(),
                section: "101".to_string(),
                row: Some("B".to_string()),
                seat: Some("1".to_string()),
                event: None,
                venue: "Red Rocks".to_string(),
                photo_page_url: "https://aviewfrommyseat.com/photo/1/venue/section-101/row-B/seat-1/"
                    .to_string(),
            }]
        );
    }

    #[test]
    fn test_cap_is_applied_in_document_order() {
        let html: String = (1..=25).map(photo_link).collect();
        let photos = extract_photos(&Document::parse(&html), "V", 10, BASE);

        assert_eq!(photos.len(), 10);
        let pages: std::collections::HashSet<_> =
            photos.iter().map(|p| p.photo_page_url.as_str()).collect();
        assert_eq!(pages.len(), 10);
        assert!(photos[9].photo_page_url.contains("/photo/10/"));
    }

    #[test]
    fn test_cap_counts_links_without_images() {
        let html = format!(
            r#"<a href="/photo/0/">text only</a>{}{}"#,
            photo_link(1),
            photo_link(2)
        );
        let photos = extract_photos(&Document::parse(&html), "V", 2, BASE);

        assert_eq!(photos.len(), 1);
        assert!(photos[0].photo_page_url.contains("/photo/1/"));
    }

    #[test]
    fn test_skips_links_without_usable_image() {
        let html = r#"
            <a href="/photo/1/"><img></a>
            <a href="/photo/2/"><span>no image</span></a>
            <a href="/photo/3/section-GA/"><img data-src="/photos/lazy_small.jpg"></a>
        "#;
        let photos = extract_photos(&Document::parse(html), "V", 20, BASE);

        assert_eq!(photos.len(), 1);
        assert_eq!(photos[0].image_url, "https://aviewfrommyseat.com/photos/lazy.jpg");
        assert_eq!(photos[0].section, "GA");
        assert_eq!(photos[0].row, None);
    }

    #[test]
    fn test_absolute_image_urls_are_kept() {
        let html = r#"<a href="https://aviewfrommyseat.com/photo/5/section-3/"><img src="https://img.example.com/photos/5_thumb.jpg"></a>"#;
        let photos = extract_photos(&Document::parse(html), "V", 20, BASE);

        assert_eq!(photos[0].image_url, "https://img.example.com/photos/5.jpg");
        assert_eq!(photos[0].photo_page_url, "https://aviewfrommyseat.com/photo/5/section-3/");
    }

    #[test]
    fn test_zero_cap_yields_nothing() {
        let doc = Document::parse(&photo_link(1));
        assert!(extract_photos(&doc, "V", 0, BASE).is_empty());
    }

    #[test]
    fn test_extract_is_idempotent() {
        let html: String = (1..=3).map(photo_link).collect();
        let doc = Document::parse(&html);
        assert_eq!(
            extract_photos(&doc, "V", 20, BASE),
            extract_photos(&doc, "V", 20, BASE)
        );
    }
}
