//! HTML extractors for seat-view pages
//!
//! This module contains one extractor per page type:
//! - `search`: venue search results
//! - `sections`: a venue's section listing
//! - `photos`: photo thumbnails of one section
//! - `detail`: a single photo page
//!
//! plus the URL-based `seat_info` parser they share. Extractors are pure
//! functions over a parsed [`Document`](crate::document::Document); missing
//! markup yields empty or `None` output, never an error.

pub mod detail;
pub mod photos;
pub mod search;
pub mod seat_info;
pub mod sections;

use crate::document::Node;
use crate::url::{full_resolution_url, resolve_url};

// Re-export main extraction functions
pub use detail::extract_photo_detail;
pub use photos::extract_photos;
pub use search::extract_venues;
pub use seat_info::parse_seat_info;
pub use sections::{compare_section_names, extract_sections, parse_photo_count, sort_sections};

/// Absolute full-resolution URL of an `<img>`, falling back to `data-src`
/// for lazy-loaded thumbnails.
fn image_source(img: &Node<'_>, base_url: &str) -> Option<String> {
    let src = img
        .non_empty_attr("src")
        .or_else(|| img.non_empty_attr("data-src"))?;
    Some(resolve_url(base_url, &full_resolution_url(src)))
}
