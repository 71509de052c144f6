//! TransportAPI HTTP client.
//!
//! Provides async methods for the live departure board and per-service
//! timetables. Handles credentials, timeouts, retries and concurrency
//! limiting, and converts responses into domain types.

use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use tokio::sync::Semaphore;
use tracing::debug;

use crate::credentials::Credentials;
use crate::domain::{Journey, Stop};

use super::convert::{BoardQuery, convert_live_board, convert_timetable};
use super::error::TransportError;
use super::retry::{RetryConfig, with_retry};
use super::types::{LiveBoard, ServiceTimetableResponse};

/// Default base URL for the UK train endpoints.
const DEFAULT_BASE_URL: &str = "https://transportapi.com/v3/uk/train";

/// Default maximum concurrent requests.
const DEFAULT_MAX_CONCURRENT: usize = 5;

/// Default timeout for the live board request.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default timeout for each timetable request.
const DEFAULT_TIMETABLE_TIMEOUT_SECS: u64 = 15;

/// Departure-type filter sent with every board request.
const DEPARTURE_TYPE: &str = "departure";

/// Configuration for the TransportAPI client.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    pub credentials: Credentials,
    /// Base URL for the API (defaults to production TransportAPI)
    pub base_url: String,
    /// Maximum concurrent requests
    pub max_concurrent: usize,
    /// Live board request timeout in seconds
    pub timeout_secs: u64,
    /// Timetable request timeout in seconds
    pub timetable_timeout_secs: u64,
    /// Retry policy for transient failures
    pub retry: RetryConfig,
}

impl TransportConfig {
    /// Create a new config with the given credentials.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            base_url: DEFAULT_BASE_URL.to_string(),
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            timetable_timeout_secs: DEFAULT_TIMETABLE_TIMEOUT_SECS,
            retry: RetryConfig::default(),
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set maximum concurrent requests.
    pub fn with_max_concurrent(mut self, n: usize) -> Self {
        self.max_concurrent = n;
        self
    }

    /// Set the live board timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set the per-timetable timeout.
    pub fn with_timetable_timeout(mut self, secs: u64) -> Self {
        self.timetable_timeout_secs = secs;
        self
    }

    /// Set the retry policy.
    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }
}

/// TransportAPI client.
///
/// Cheap to clone; clones share the connection pool and the semaphore that
/// limits concurrent requests.
#[derive(Debug, Clone)]
pub struct TransportClient {
    http: reqwest::Client,
    base_url: String,
    credentials: Credentials,
    semaphore: Arc<Semaphore>,
    timeout: Duration,
    timetable_timeout: Duration,
    retry: RetryConfig,
}

impl TransportClient {
    /// Create a new client with the given configuration.
    pub fn new(config: TransportConfig) -> Result<Self, TransportError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("train-board/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            credentials: config.credentials,
            semaphore: Arc::new(Semaphore::new(config.max_concurrent.max(1))),
            timeout: Duration::from_secs(config.timeout_secs),
            timetable_timeout: Duration::from_secs(config.timetable_timeout_secs),
            retry: config.retry,
        })
    }

    /// Get live departures from `query.origin` calling at `query.destination`.
    ///
    /// The destination code and name are filled in from `query`, since the
    /// board itself never carries them.
    pub async fn fetch_journey(&self, query: &BoardQuery) -> Result<Journey, TransportError> {
        let url = format!("{}/station/{}/live.json", self.base_url, query.origin);
        let params = [
            ("app_id", self.credentials.app_id.as_str()),
            ("app_key", self.credentials.app_key.as_str()),
            ("station_code", query.origin.as_str()),
            ("calling_at", query.destination.as_str()),
            ("type", DEPARTURE_TYPE),
        ];

        debug!(
            url = %url,
            station_code = %query.origin,
            calling_at = %query.destination,
            "requesting live board"
        );

        let (status, body) = with_retry(&self.retry, || {
            self.get_text(self.http.get(&url).query(&params), self.timeout)
        })
        .await?;

        let board: LiveBoard = parse_body(&body)?;
        if let Some(message) = board.error {
            return Err(TransportError::api(status, &message));
        }

        let journey = convert_live_board(board, query);
        debug!(
            origin = %journey.origin,
            destination = %journey.destination,
            departures = journey.departures.len(),
            "parsed live board"
        );
        Ok(journey)
    }

    /// Get the stops of one service from its timetable URL.
    ///
    /// Stops come back untagged and in timetable order.
    pub async fn fetch_timetable(&self, url: &str) -> Result<Vec<Stop>, TransportError> {
        debug!(url = without_query(url), "requesting service timetable");

        let (_, body) = with_retry(&self.retry, || {
            self.get_text(self.http.get(url), self.timetable_timeout)
        })
        .await?;

        let timetable: ServiceTimetableResponse = parse_body(&body)?;
        debug!(
            url = without_query(url),
            train_uid = timetable.train_uid.as_deref().unwrap_or_default(),
            stops = timetable.stops.len(),
            "parsed service timetable"
        );
        Ok(convert_timetable(timetable))
    }

    /// Send a request and return the status and body of a successful response.
    async fn get_text(
        &self,
        request: reqwest::RequestBuilder,
        timeout: Duration,
    ) -> Result<(u16, String), TransportError> {
        let _permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|_| TransportError::Api {
                status: 0,
                message: "Semaphore closed".to_string(),
            })?;

        let response = request.timeout(timeout).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN
        {
            return Err(TransportError::Unauthorized);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(TransportError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TransportError::api(status.as_u16(), &body));
        }

        let body = response.text().await?;
        debug!(status = status.as_u16(), body = %body, "raw response");

        Ok((status.as_u16(), body))
    }
}

/// A URL with its query string dropped, for logging.
///
/// Timetable links carry `app_id` and `app_key` as query parameters.
fn without_query(url: &str) -> &str {
    url.split_once('?').map_or(url, |(base, _)| base)
}

fn parse_body<T: DeserializeOwned>(body: &str) -> Result<T, TransportError> {
    serde_json::from_str(body).map_err(|e| TransportError::json(e, body))
}
