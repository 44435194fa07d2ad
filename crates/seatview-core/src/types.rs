//! Data types for SeatView Scraper
//!
//! This module contains the value records produced by the extractors.
//! All types implement Serialize and Deserialize for JSON compatibility.
//! Records are built fresh per call and never mutated afterwards.

use serde::{Deserialize, Serialize};

use crate::error::FetchError;

/// Venue found by a search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueCandidate {
    /// Link text of the venue
    pub name: String,
    /// Absolute URL of the venue root page
    pub url: String,
}

/// Seating section within a venue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Section name as published by the site
    pub name: String,
    /// Number of photos in this section, always > 0
    pub photo_count: u32,
    /// Absolute URL of the section page
    pub url: String,
}

/// A single photo taken from a seat
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatPhoto {
    /// Absolute full-resolution image URL
    pub image_url: String,
    /// Section name, empty when the URL carries none
    pub section: String,
    pub row: Option<String>,
    pub seat: Option<String>,
    /// Event or tour name, only known from the photo detail page
    pub event: Option<String>,
    /// Venue display name
    pub venue: String,
    /// Absolute URL of the photo detail page
    pub photo_page_url: String,
}

/// Seat location recovered from a URL
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatInfo {
    /// Section name, empty when absent
    pub section: String,
    pub row: Option<String>,
    pub seat: Option<String>,
}

/// Raw bytes of one downloaded photo
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadedImage {
    pub image_url: String,
    pub bytes: Vec<u8>,
}

/// Download that did not succeed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DownloadFailure {
    pub image_url: String,
    pub error: FetchError,
}

/// Outcome of a sequential batch download
///
/// Successes and failures are accumulated independently; one failed photo
/// never aborts the batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DownloadBatch {
    pub downloaded: Vec<DownloadedImage>,
    pub failures: Vec<DownloadFailure>,
}

impl DownloadBatch {
    /// Number of images attempted
    pub fn attempted(&self) -> usize {
        self.downloaded.len() + self.failures.len()
    }

    pub fn failure_count(&self) -> usize {
        self.failures.len()
    }

    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}
