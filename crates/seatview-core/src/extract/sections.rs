//! Section list extractor
//!
//! Parses a venue's sections page. Each section sits in a container marked
//! `section_contained_in` with a `section_name` attribute, holds a link to
//! the section page and shows its photo count as `(34)`.

use std::cmp::Ordering;

use crate::document::{Document, Node};
use crate::types::Section;
use crate::url::resolve_url;

const SECTION_CONTAINER_SELECTOR: &str = ".section_contained_in[section_name]";

const SECTION_LINK_SELECTOR: &str = "a[href*='/venue/']";

/// Extract sections with at least one photo, sorted for display.
///
/// Containers without a name, without a link or without a non-zero
/// parenthesized photo count are dropped.
///
/// # Arguments
/// * `document` - Parsed sections page
/// * `base_url` - Origin relative links resolve against
pub fn extract_sections(document: &Document, base_url: &str) -> Vec<Section> {
    let containers = document.select_all(SECTION_CONTAINER_SELECTOR);
    let total = containers.len();

    let mut sections: Vec<Section> = containers
        .iter()
        .filter_map(|container| parse_section(container, base_url))
        .collect();

    sort_sections(&mut sections);

    tracing::debug!(
        containers = total,
        kept = sections.len(),
        "extracted sections"
    );
    sections
}

fn parse_section(container: &Node<'_>, base_url: &str) -> Option<Section> {
    let name = container.non_empty_attr("section_name")?.to_string();

    let link = container.select_first(SECTION_LINK_SELECTOR)?;
    let href = link.non_empty_attr("href")?;

    let photo_count = parse_photo_count(&container.raw_text())?;

    Some(Section {
        name,
        photo_count,
        url: resolve_url(base_url, href),
    })
}

/// Parse the first parenthesized integer in `text` as a photo count.
///
/// Returns `None` for a missing count and for a count of zero.
///
/// # Examples
/// ```
/// use seatview_core::extract::parse_photo_count;
///
/// assert_eq!(parse_photo_count("Section 101 (34)"), Some(34));
/// assert_eq!(parse_photo_count("Section 102 (0)"), None);
/// assert_eq!(parse_photo_count("Section 103"), None);
/// ```
pub fn parse_photo_count(text: &str) -> Option<u32> {
    let re = regex_lite::Regex::new(r"\((\d+)\)").ok()?;
    let count: u32 = re.captures(text)?.get(1)?.as_str().parse().ok()?;
    (count > 0).then_some(count)
}

/// Sort sections: names with a number first (ascending by their first
/// number), then purely alphabetic names; ties broken by the full name.
pub fn sort_sections(sections: &mut [Section]) {
    sections.sort_by(|a, b| compare_section_names(&a.name, &b.name));
}

/// Ordering used by [`sort_sections`]
pub fn compare_section_names(a: &str, b: &str) -> Ordering {
    match (first_number(a), first_number(b)) {
        (Some(x), Some(y)) => x.cmp(&y).then_with(|| a.cmp(b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

/// First run of ASCII digits in `name`. Runs too long for `u64` saturate.
fn first_number(name: &str) -> Option<u64> {
    let start = name.find(|c: char| c.is_ascii_digit())?;
    let digits: String = name[start..]
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    Some(digits.parse().unwrap_or(u64::MAX))
}
