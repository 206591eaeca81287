use thiserror::Error;

#[derive(Debug, Error)]
pub enum RiotApiError {
    #[error("rate limiter wait failed for {routing}: cancelled")]
    RateLimitWaitFailed { routing: String },

    #[error("request to {url} cancelled while in flight")]
    Cancelled { url: String },

    #[error("failed to create request for {url}: {source}")]
    RequestConstructionFailed {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to make request to {url}: {source}")]
    TransportFailed {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to read response body from {url}: {source}")]
    BodyReadFailed {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("API request to {url} failed with status {code}: {body}")]
    UnsuccessfulStatus { code: u16, url: String, body: String },

    #[error("failed to decode response as {target}: {source}")]
    Decode {
        target: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unknown region: {0}")]
    UnknownRegion(String),

    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl RiotApiError {
    /// HTTP status returned by the API, if the request got that far.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::UnsuccessfulStatus { code, .. } => Some(*code),
            _ => None,
        }
    }
}

/// A call to Riot API can either result in a success with the success type or fail
/// with a [`RiotApiError`].
pub type RiotApiResponse<T> = Result<T, RiotApiError>;
