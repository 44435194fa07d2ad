//! Main SeatView Scraper API
//!
//! This module provides the high-level API for browsing the seat-view site.
//! It combines the rate-limited client with the extractors: search venues,
//! list a venue's sections, list a section's photos, load one photo page and
//! download images.
//!
//! Every operation issues its requests one after another through the same
//! client. A failed request surfaces as [`SeatViewError::Fetch`]; a page that
//! loaded but held nothing recognizable yields an empty list or `None`.

use crate::client::{ClientConfig, SeatViewClient};
use crate::error::{FetchError, Result, SeatViewError};
use crate::extract::{extract_photo_detail, extract_photos, extract_sections, extract_venues};
use crate::types::{
    DownloadBatch, DownloadFailure, DownloadedImage, SeatPhoto, Section, VenueCandidate,
};
use crate::url::{resolve_url, sections_url};

/// Default number of photos taken from a section page
pub const DEFAULT_MAX_PHOTOS: usize = 20;

/// Main scraper API for the seat-view site
///
/// # Example
/// ```no_run
/// use seatview_core::SeatViewScraper;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let scraper = SeatViewScraper::new()?;
///
///     let venues = scraper.search_venues("Red Rocks").await?;
///     if let Some(venue) = venues.first() {
///         let sections = scraper.venue_sections(&venue.url).await?;
///         println!("{} has {} sections with photos", venue.name, sections.len());
///     }
///
///     scraper.close();
///     Ok(())
/// }
/// ```
pub struct SeatViewScraper {
    client: SeatViewClient,
}

impl SeatViewScraper {
    /// Create a new scraper with default configuration.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn new() -> Result<Self> {
        Ok(Self::with_client(SeatViewClient::new()?))
    }

    /// Create a new scraper from a client configuration.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Ok(Self::with_client(SeatViewClient::with_config(config)?))
    }

    /// Create a new scraper with a pre-built client.
    pub fn with_client(client: SeatViewClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &SeatViewClient {
        &self.client
    }

    /// Search for venues by free-text query.
    ///
    /// # Returns
    /// * `Ok(Vec<VenueCandidate>)` in page order, possibly empty
    /// * `Err(SeatViewError::InvalidQuery)` if query is empty or whitespace-only
    /// * `Err(SeatViewError::Fetch)` if the search page could not be loaded
    pub async fn search_venues(&self, query: &str) -> Result<Vec<VenueCandidate>> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return Err(SeatViewError::InvalidQuery(
                "Search query cannot be empty".to_string(),
            ));
        }

        let url = format!(
            "{}/search.php?q={}",
            self.client.base_url(),
            urlencoding::encode(trimmed)
        );

        let document = self.client.fetch(&url).await?;
        let venues = extract_venues(&document, self.client.base_url());

        tracing::debug!(query = trimmed, count = venues.len(), "venue search done");
        Ok(venues)
    }

    /// List a venue's sections that have photos, sorted for display.
    ///
    /// # Arguments
    /// * `venue_url` - Venue root URL, as returned by [`search_venues`](Self::search_venues)
    pub async fn venue_sections(&self, venue_url: &str) -> Result<Vec<Section>> {
        let venue_url = resolve_url(self.client.base_url(), venue_url);
        let url = sections_url(&venue_url);

        let document = self.client.fetch(&url).await?;
        Ok(extract_sections(&document, self.client.base_url()))
    }

    /// List up to `max_photos` photos of a section.
    ///
    /// # Arguments
    /// * `section_url` - Section page URL, as found in [`Section::url`]
    /// * `venue` - Venue name recorded in every photo
    /// * `max_photos` - Cap on photo links considered (see [`DEFAULT_MAX_PHOTOS`])
    pub async fn section_photos(
        &self,
        section_url: &str,
        venue: &str,
        max_photos: usize,
    ) -> Result<Vec<SeatPhoto>> {
        let url = resolve_url(self.client.base_url(), section_url);

        let document = self.client.fetch(&url).await?;
        Ok(extract_photos(
            &document,
            venue,
            max_photos,
            self.client.base_url(),
        ))
    }

    /// Load one photo page with its event and venue details.
    ///
    /// # Returns
    /// * `Ok(Some(SeatPhoto))` when the page holds a recognizable photo
    /// * `Ok(None)` when it does not
    /// * `Err(SeatViewError::Fetch)` if the page could not be loaded
    pub async fn photo_details(&self, photo_url: &str) -> Result<Option<SeatPhoto>> {
        let url = resolve_url(self.client.base_url(), photo_url);

        let document = self.client.fetch(&url).await?;
        Ok(extract_photo_detail(
            &document,
            &url,
            self.client.base_url(),
        ))
    }

    /// Download the raw bytes of an image.
    ///
    /// # Errors
    /// Returns the classified [`FetchError`] of the failed request.
    pub async fn download_image(&self, image_url: &str) -> std::result::Result<Vec<u8>, FetchError> {
        let url = resolve_url(self.client.base_url(), image_url);
        self.client.fetch_bytes(&url).await
    }

    /// Download the images of several photos, one after another.
    ///
    /// Failures are recorded and the batch carries on; the returned
    /// [`DownloadBatch`] holds the successes in input order and every failure.
    pub async fn download_images(&self, photos: &[SeatPhoto]) -> DownloadBatch {
        let mut batch = DownloadBatch::default();

        for photo in photos {
            match self.download_image(&photo.image_url).await {
                Ok(bytes) => batch.downloaded.push(DownloadedImage {
                    image_url: photo.image_url.clone(),
                    bytes,
                }),
                Err(error) => {
                    tracing::warn!(image_url = %photo.image_url, %error, "image download failed");
                    batch.failures.push(DownloadFailure {
                        image_url: photo.image_url.clone(),
                        error,
                    });
                }
            }
        }

        tracing::info!(
            attempted = batch.attempted(),
            failed = batch.failure_count(),
            "image batch finished"
        );
        batch
    }

    /// End the scraping session and release the client.
    pub fn close(self) {
        self.client.close();
    }
}
