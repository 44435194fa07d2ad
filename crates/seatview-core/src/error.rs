//! Error types for SeatView Scraper
//!
//! Two layers live here:
//! - [`FetchError`] classifies a single failed request (timeout, HTTP status,
//!   transport failure, unreadable body). Every network-touching call returns it.
//! - [`SeatViewError`] is the library-level error returned by the scraper facade
//!   and the venue-config loader.
//!
//! Both implement Serialize (as their display string) so they can be handed
//! straight to a frontend.

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Classified failure of a single HTTP request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The request did not complete within the configured timeout
    #[error("Request timed out: {url}")]
    Timeout { url: String },

    /// The server answered with a non-2xx status
    #[error("HTTP {status} for {url}")]
    Http { status: u16, url: String },

    /// Connection, DNS or other transport failure
    #[error("Network failure for {url}: {message}")]
    Network { url: String, message: String },

    /// The response body could not be read or decoded into a document
    #[error("Response body unavailable for {url}: {message}")]
    ParseUnavailable { url: String, message: String },
}

impl FetchError {
    /// Classify a transport-level `reqwest` error for `url`.
    pub(crate) fn from_reqwest(url: &str, err: &reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout {
                url: url.to_string(),
            }
        } else if err.is_decode() || err.is_body() {
            Self::ParseUnavailable {
                url: url.to_string(),
                message: err.to_string(),
            }
        } else if let Some(status) = err.status() {
            Self::Http {
                status: status.as_u16(),
                url: url.to_string(),
            }
        } else {
            Self::Network {
                url: url.to_string(),
                message: err.to_string(),
            }
        }
    }

    /// URL of the request that failed
    pub fn url(&self) -> &str {
        match self {
            Self::Timeout { url }
            | Self::Http { url, .. }
            | Self::Network { url, .. }
            | Self::ParseUnavailable { url, .. } => url,
        }
    }

    /// HTTP status, if the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }

    /// Whether a retry has a chance of succeeding (429 or 5xx)
    pub fn is_retriable(&self) -> bool {
        matches!(self, Self::Http { status, .. } if *status == 429 || (500..600).contains(status))
    }
}

/// Error type for SeatView Scraper operations
#[derive(Error, Debug)]
pub enum SeatViewError {
    /// A request failed; the classification is forwarded untouched
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// Search query was empty or otherwise unusable
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// Expected markup element was absent
    #[error("Structure mismatch: {0}")]
    StructureMismatch(String),

    /// Requested venue identifier does not exist locally
    #[error("Not found: {0}")]
    NotFound(String),

    /// The HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),

    /// A venue configuration file could not be read or parsed
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl SeatViewError {
    /// The underlying fetch failure, if this error came from the network
    pub fn fetch_error(&self) -> Option<&FetchError> {
        match self {
            Self::Fetch(err) => Some(err),
            _ => None,
        }
    }
}

/// Serialize SeatViewError as a string for frontend compatibility
impl Serialize for SeatViewError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl Serialize for FetchError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Result type alias for SeatView Scraper operations
pub type Result<T> = std::result::Result<T, SeatViewError>;
