//! TransportAPI client error types.

/// Errors from the TransportAPI HTTP client.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// HTTP request failed (network error, timeout, etc.)
    ///
    /// Stored without its request URL; the board URL carries `app_key`.
    #[error("HTTP error: {0}")]
    Http(#[source] reqwest::Error),

    /// Invalid or missing app_id / app_key
    #[error("unauthorized: check TRANSPORTAPPID and TRANSPORTAPPKEY")]
    Unauthorized,

    /// Rate limited by the API
    #[error("rate limited by TransportAPI")]
    RateLimited,

    /// No timetable link on the departure, so there was nothing to fetch
    #[error("no timetable link")]
    NoTimetableLink,

    /// API returned an error status code, or an error payload
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Response body didn't match the expected shape
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        body: Option<String>,
    },
}

impl TransportError {
    /// Whether the body was received but couldn't be understood.
    ///
    /// Everything else is a failure to obtain a successful response.
    pub fn is_parse(&self) -> bool {
        matches!(self, TransportError::Json { .. })
    }

    /// Whether retrying the same request might succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            TransportError::Http(e) => e.is_timeout() || e.is_connect() || e.is_request(),
            TransportError::RateLimited => true,
            TransportError::Api { status, .. } => *status >= 500,
            TransportError::Unauthorized
            | TransportError::NoTimetableLink
            | TransportError::Json { .. } => false,
        }
    }

    pub(crate) fn json(err: serde_json::Error, body: &str) -> Self {
        TransportError::Json {
            message: err.to_string(),
            body: Some(excerpt(body)),
        }
    }

    /// An error status, keeping a single-line excerpt of the body.
    pub(crate) fn api(status: u16, body: &str) -> Self {
        TransportError::Api {
            status,
            message: one_line(&excerpt(body)),
        }
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        TransportError::Http(err.without_url())
    }
}

/// Longest body kept in an error.
const BODY_EXCERPT_CHARS: usize = 500;

fn excerpt(body: &str) -> String {
    body.chars().take(BODY_EXCERPT_CHARS).collect()
}

/// Collapse all runs of whitespace, newlines included, to single spaces.
pub(crate) fn one_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
