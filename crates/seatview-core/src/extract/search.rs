//! Venue search results extractor
//!
//! Parses the search results page into venue candidates.

use std::collections::HashSet;

use crate::document::Document;
use crate::types::VenueCandidate;
use crate::url::resolve_url;

/// Links pointing anywhere below a venue
const VENUE_LINK_SELECTOR: &str = "a[href*='/venue/']";

/// Extract venue candidates from a search results page.
///
/// Links with no text and links into a venue's section pages are skipped.
/// Duplicate targets keep their first occurrence, and the result stays in
/// document order.
///
/// # Arguments
/// * `document` - Parsed search results page
/// * `base_url` - Origin relative links resolve against
pub fn extract_venues(document: &Document, base_url: &str) -> Vec<VenueCandidate> {
    let mut seen = HashSet::new();
    let mut venues = Vec::new();

    for link in document.select_all(VENUE_LINK_SELECTOR) {
        let Some(href) = link.non_empty_attr("href") else {
            continue;
        };

        let name = link.text();
        if name.is_empty() {
            continue;
        }

        // Section pages live below the venue root
        if href.to_lowercase().contains("/section") {
            continue;
        }

        let url = resolve_url(base_url, href);
        if !seen.insert(url.clone()) {
            continue;
        }

        venues.push(VenueCandidate { name, url });
    }

    tracing::debug!(count = venues.len(), "extracted venue candidates");
    venues
}
