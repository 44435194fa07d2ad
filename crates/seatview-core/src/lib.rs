//! SeatView Scraper Core Library
//!
//! This crate provides the core scraping functionality for venue seat-view
//! photo sites that expose no API, only HTML pages.
//!
//! # Features
//! - Search for venues by name
//! - List a venue's seating sections with photo counts
//! - List seat photos of a section, with section/row/seat parsed from URLs
//! - Load a photo page for event and venue details
//! - Download images, one at a time or as a fault-tolerant batch
//! - Rate-limited HTTP client to avoid server overload
//! - Load local YAML venue configurations

pub mod client;
pub mod document;
pub mod error;
pub mod extract;
pub mod scraper;
pub mod types;
pub mod url;
pub mod venue_config;

// Re-export main types for convenience
pub use client::{ClientConfig, FixedDelay, RateLimiter, SeatViewClient};
pub use document::{Document, Node};
pub use error::{FetchError, Result, SeatViewError};
pub use extract::parse_seat_info;
pub use self::scraper::{SeatViewScraper, DEFAULT_MAX_PHOTOS};
pub use types::{
    DownloadBatch, DownloadFailure, DownloadedImage, SeatInfo, SeatPhoto, Section, VenueCandidate,
};
pub use venue_config::{list_venues, load_venue, VenueConfig};
