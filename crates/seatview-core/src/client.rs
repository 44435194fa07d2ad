//! Rate-limited HTTP client for the seat-view site
//!
//! This module provides the only gateway to the network. A single
//! `reqwest::Client` is kept for the lifetime of [`SeatViewClient`] so the
//! connection and default headers are reused, and every request first waits
//! on an injected [`RateLimiter`].
//!
//! Failures are never raised: each request resolves to either a parsed
//! [`Document`] (or raw bytes) or a classified [`FetchError`].

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE};
use tokio::sync::Mutex;
use tokio::time::sleep;

use crate::document::Document;
use crate::error::{FetchError, Result, SeatViewError};

/// Base URL of the seat-view site
pub const DEFAULT_BASE_URL: &str = "https://aviewfrommyseat.com";

/// Default User-Agent mimicking a desktop browser
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

const DEFAULT_ACCEPT: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8";

const DEFAULT_ACCEPT_LANGUAGE: &str = "en-US,en;q=0.5";

/// Throttle consulted before every outbound request.
///
/// Implementations decide how long a caller has to wait. The client only
/// awaits [`RateLimiter::acquire`], so a shared token bucket for concurrent
/// workers can replace [`FixedDelay`] without touching the extractors.
#[async_trait]
pub trait RateLimiter: Send + Sync {
    /// Wait until the next request may start
    async fn acquire(&self);

    /// Shortest spacing this limiter enforces between request starts
    fn min_interval(&self) -> Duration;
}

/// Fixed-delay throttle
///
/// Each request starts at least `delay` after the start of the previous
/// request made through this limiter. The first request waits the full
/// delay too, so `n` sequential requests always take at least `n * delay`.
/// The internal lock is held while sleeping, which serializes callers.
pub struct FixedDelay {
    delay: Duration,
    last_start: Mutex<Option<Instant>>,
}

impl FixedDelay {
    /// Create a limiter enforcing `delay` between request starts
    ///
    /// # Example
    /// ```
    /// use std::time::Duration;
    /// use seatview_core::client::{FixedDelay, RateLimiter};
    ///
    /// let limiter = FixedDelay::new(Duration::from_millis(500));
    /// assert_eq!(limiter.min_interval(), Duration::from_millis(500));
    /// ```
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            last_start: Mutex::new(None),
        }
    }
}

#[async_trait]
impl RateLimiter for FixedDelay {
    async fn acquire(&self) {
        let mut last = self.last_start.lock().await;

        let wait = match *last {
            Some(previous) => self.delay.saturating_sub(previous.elapsed()),
            None => self.delay,
        };
        if !wait.is_zero() {
            sleep(wait).await;
        }

        *last = Some(Instant::now());
    }

    fn min_interval(&self) -> Duration {
        self.delay
    }
}

/// Configuration for the seat-view HTTP client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Origin all relative links resolve against (default: the public site)
    pub base_url: String,
    /// Fixed delay between request starts (default: 1s)
    pub delay: Duration,
    /// Per-request timeout (default: 10s)
    pub timeout: Duration,
    pub user_agent: String,
    /// Extra attempts for 429/5xx responses (default: 0)
    pub max_retries: u32,
    /// Base of the exponential retry backoff (default: 1s)
    pub retry_backoff: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            delay: Duration::from_secs(1),
            timeout: Duration::from_secs(10),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            max_retries: 0,
            retry_backoff: Duration::from_secs(1),
        }
    }
}

/// HTTP client for the seat-view site
///
/// This client:
/// - Throttles every request through its rate limiter
/// - Reuses one session with browser-like default headers
/// - Classifies failures instead of raising them
///
/// Meant for one scraping session at a time; calls are sequential.
pub struct SeatViewClient {
    client: reqwest::Client,
    rate_limiter: Box<dyn RateLimiter>,
    base_url: String,
    max_retries: u32,
    retry_backoff: Duration,
}

impl SeatViewClient {
    /// Create a new client with default configuration
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client throttled by a [`FixedDelay`] of `config.delay`
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let limiter = FixedDelay::new(config.delay);
        Self::with_rate_limiter(config, Box::new(limiter))
    }

    /// Create a new client with an explicit rate limiter.
    ///
    /// `config.delay` is ignored in favour of the supplied limiter.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created
    pub fn with_rate_limiter(config: ClientConfig, rate_limiter: Box<dyn RateLimiter>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(DEFAULT_ACCEPT));
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static(DEFAULT_ACCEPT_LANGUAGE));

        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .map_err(|e| SeatViewError::ClientBuild(e.to_string()))?;

        Ok(Self {
            client,
            rate_limiter,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            max_retries: config.max_retries,
            retry_backoff: config.retry_backoff,
        })
    }

    /// Origin used to resolve relative links, without trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn rate_limiter(&self) -> &dyn RateLimiter {
        self.rate_limiter.as_ref()
    }

    /// Fetch a page and parse it into a [`Document`].
    ///
    /// # Errors
    /// - `FetchError::Http` - non-2xx status (after configured retries)
    /// - `FetchError::Timeout` - request exceeded the timeout
    /// - `FetchError::Network` - connection or DNS failure
    /// - `FetchError::ParseUnavailable` - body could not be read as text
    pub async fn fetch(&self, url: &str) -> std::result::Result<Document, FetchError> {
        let response = self.send(url).await?;
        let body = response
            .text()
            .await
            .map_err(|e| Self::body_error(url, &e))?;

        tracing::debug!(url, bytes = body.len(), "fetched page");
        Ok(Document::parse(&body))
    }

    /// Fetch raw response bytes, throttled and classified like [`fetch`](Self::fetch).
    ///
    /// # Errors
    /// Same taxonomy as [`fetch`](Self::fetch).
    pub async fn fetch_bytes(&self, url: &str) -> std::result::Result<Vec<u8>, FetchError> {
        let response = self.send(url).await?;
        let bytes = response
            .bytes()
            .await
            .map_err(|e| Self::body_error(url, &e))?;

        tracing::debug!(url, bytes = bytes.len(), "fetched bytes");
        Ok(bytes.to_vec())
    }

    /// Shut the session down, dropping pooled connections.
    pub fn close(self) {
        tracing::info!(base_url = %self.base_url, "closing client session");
        drop(self);
    }

    /// Throttled GET returning a 2xx response, retrying 429/5xx when configured
    async fn send(&self, url: &str) -> std::result::Result<reqwest::Response, FetchError> {
        let mut attempt = 0;

        loop {
            self.rate_limiter.acquire().await;
            tracing::debug!(url, attempt, "GET");

            let error = match self.client.get(url).send().await {
                Ok(response) if response.status().is_success() => return Ok(response),
                Ok(response) => FetchError::Http {
                    status: response.status().as_u16(),
                    url: url.to_string(),
                },
                Err(err) => FetchError::from_reqwest(url, &err),
            };

            if error.is_retriable() && attempt < self.max_retries {
                let delay = self.calculate_backoff_delay(attempt);
                tracing::warn!(url, attempt, ?delay, %error, "retrying request");
                sleep(delay).await;
                attempt += 1;
                continue;
            }

            tracing::warn!(url, %error, "request failed");
            return Err(error);
        }
    }

    fn body_error(url: &str, err: &reqwest::Error) -> FetchError {
        if err.is_timeout() {
            FetchError::Timeout {
                url: url.to_string(),
            }
        } else {
            FetchError::ParseUnavailable {
                url: url.to_string(),
                message: err.to_string(),
            }
        }
    }

    /// Exponential backoff: base, 2x base, 4x base, ...
    fn calculate_backoff_delay(&self, attempt: u32) -> Duration {
        self.retry_backoff.saturating_mul(2u32.saturating_pow(attempt))
    }
}
