use std::env;
use std::fmt;
use std::num::NonZeroU32;

use crate::error::RiotApiError;

const DEFAULT_REQUESTS_PER_MINUTE: NonZeroU32 = NonZeroU32::new(100).unwrap();
const DEFAULT_BURST_SIZE: NonZeroU32 = NonZeroU32::MIN;

/// Settings shared read-only by every request of a client.
#[derive(Clone)]
pub struct ClientConfig {
    /// Riot API Key
    pub api_key: String,
    pub requests_per_minute: NonZeroU32,
    /// Kept for configuration compatibility. Limiters are built with a burst of one
    /// and every request takes exactly one permit.
    pub burst_size: NonZeroU32,
    /// Serve every routing value from this base url instead of
    /// `https://{routing}.api.riotgames.com`.
    pub base_url: Option<String>,
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            requests_per_minute: DEFAULT_REQUESTS_PER_MINUTE,
            burst_size: DEFAULT_BURST_SIZE,
            base_url: None,
        }
    }

    pub fn with_requests_per_minute(mut self, requests_per_minute: NonZeroU32) -> Self {
        self.requests_per_minute = requests_per_minute;
        self
    }

    pub fn with_burst_size(mut self, burst_size: NonZeroU32) -> Self {
        self.burst_size = burst_size;
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Load the configuration from the process environment, reading a `.env` file first
    /// if there is one.
    pub fn from_env() -> Result<Self, RiotApiError> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, RiotApiError> {
        let api_key = lookup("RIOT_API_KEY")
            .filter(|key| !key.is_empty())
            .ok_or_else(|| RiotApiError::Config("RIOT_API_KEY must be set".into()))?;

        let requests_per_minute = parse_non_zero(&lookup, "RIOT_REQUESTS_PER_MINUTE")?
            .unwrap_or(DEFAULT_REQUESTS_PER_MINUTE);
        let burst_size =
            parse_non_zero(&lookup, "RIOT_BURST_SIZE")?.unwrap_or(DEFAULT_BURST_SIZE);

        Ok(Self {
            api_key,
            requests_per_minute,
            burst_size,
            base_url: lookup("RIOT_BASE_URL").filter(|url| !url.is_empty()),
        })
    }
}

fn parse_non_zero(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
) -> Result<Option<NonZeroU32>, RiotApiError> {
    lookup(name)
        .map(|raw| {
            raw.trim().parse::<NonZeroU32>().map_err(|e| {
                RiotApiError::Config(format!("{name} must be a positive integer ({raw:?}: {e})"))
            })
        })
        .transpose()
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("requests_per_minute", &self.requests_per_minute)
            .field("burst_size", &self.burst_size)
            .field("base_url", &self.base_url)
            .finish()
    }
}
