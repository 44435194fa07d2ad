//! Typed document tree used by the extractors
//!
//! Wraps a parsed `scraper::Html` and exposes only what the extractors need:
//! select the first or all elements matching a CSS pattern, read an attribute,
//! read visible text. Extractors never touch `scraper` types directly.
//!
//! An invalid CSS pattern behaves like a pattern that matched nothing.

use scraper::{ElementRef, Html, Selector};

/// A parsed HTML page
pub struct Document {
    html: Html,
}

/// An element inside a [`Document`]
#[derive(Clone, Copy)]
pub struct Node<'a> {
    element: ElementRef<'a>,
}

fn selector(pattern: &str) -> Option<Selector> {
    match Selector::parse(pattern) {
        Ok(selector) => Some(selector),
        Err(err) => {
            tracing::debug!(pattern, error = ?err, "ignoring invalid selector");
            None
        }
    }
}

impl Document {
    /// Parse a full HTML document. Malformed markup is tolerated.
    pub fn parse(html: &str) -> Self {
        Self {
            html: Html::parse_document(html),
        }
    }

    /// First element matching `pattern`, in document order
    pub fn select_first(&self, pattern: &str) -> Option<Node<'_>> {
        let selector = selector(pattern)?;
        self.html
            .select(&selector)
            .next()
            .map(|element| Node { element })
    }

    /// All elements matching `pattern`, in document order
    pub fn select_all(&self, pattern: &str) -> Vec<Node<'_>> {
        match selector(pattern) {
            Some(selector) => self
                .html
                .select(&selector)
                .map(|element| Node { element })
                .collect(),
            None => Vec::new(),
        }
    }
}

impl std::fmt::Debug for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Document").finish_non_exhaustive()
    }
}

impl<'a> Node<'a> {
    /// First descendant matching `pattern`
    pub fn select_first(&self, pattern: &str) -> Option<Node<'a>> {
        let selector = selector(pattern)?;
        self.element
            .select(&selector)
            .next()
            .map(|element| Node { element })
    }

    /// All descendants matching `pattern`
    pub fn select_all(&self, pattern: &str) -> Vec<Node<'a>> {
        match selector(pattern) {
            Some(selector) => self
                .element
                .select(&selector)
                .map(|element| Node { element })
                .collect(),
            None => Vec::new(),
        }
    }

    /// Raw attribute value
    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.element.value().attr(name)
    }

    /// Attribute value with surrounding whitespace removed; empty counts as absent
    pub fn non_empty_attr(&self, name: &str) -> Option<&'a str> {
        self.attr(name).map(str::trim).filter(|v| !v.is_empty())
    }

    /// Concatenated text of all descendant text nodes, untouched
    pub fn raw_text(&self) -> String {
        self.element.text().collect()
    }

    /// Visible text with runs of whitespace collapsed to single spaces
    pub fn text(&self) -> String {
        self.element
            .text()
            .flat_map(str::split_whitespace)
            .collect::<Vec<_>>()
            .join(" ")
    }
}
