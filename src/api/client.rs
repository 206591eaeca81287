use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::StatusCode;
use tokio_util::sync::CancellationToken;

use crate::config::ClientConfig;
use crate::error::{RiotApiError, RiotApiResponse};

use super::{limiter::LimiterRegistry, metrics::RequestMetrics, traits::ApiRequest};

const USER_AGENT: &str = concat!("lol-sdk/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Rate limited transport shared by every endpoint of a client.
#[derive(Debug)]
pub struct ApiClient {
    client: reqwest::Client,
    limiters: LimiterRegistry,
    config: ClientConfig,
    pub metrics: Arc<RequestMetrics>,
}

impl ApiClient {
    pub fn new(config: ClientConfig, name: &'static str) -> RiotApiResponse<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(RiotApiError::HttpClient)?;

        tracing::debug!(
            requests_per_minute = config.requests_per_minute.get(),
            burst_size = config.burst_size.get(),
            base_url = config.base_url.as_deref(),
            "[RIOT::CLIENT] {} client created",
            name
        );

        Ok(Self {
            client,
            limiters: LimiterRegistry::from_config(&config),
            config,
            metrics: RequestMetrics::new(name),
        })
    }

    pub fn limiters(&self) -> &LimiterRegistry {
        &self.limiters
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    async fn wait_for_permit(
        &self,
        url: &str,
        routing: &str,
        cancel: &CancellationToken,
    ) -> RiotApiResponse<()> {
        let limiter = self.limiters.get_or_create(routing).await;

        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                let err = RiotApiError::RateLimitWaitFailed { routing: routing.to_string() };
                tracing::error!(routing, url, error = %err, "rate limiter wait failed");
                Err(err)
            }
            _ = limiter.until_ready() => Ok(()),
        }
    }

    async fn send(
        &self,
        url: String,
        routing: &str,
        cancel: &CancellationToken,
    ) -> RiotApiResponse<Bytes> {
        tracing::trace!(routing, url = %url, "[RIOT::CLIENT] GET");

        let request = self
            .client
            .get(&url)
            .header("X-Riot-Token", &self.config.api_key)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .build()
            .map_err(|source| {
                tracing::error!(routing, url = %url, error = %source, "failed to create request");
                RiotApiError::RequestConstructionFailed {
                    url: url.clone(),
                    source,
                }
            })?;

        let transfer = async {
            let res = self.client.execute(request).await.map_err(|source| {
                tracing::error!(routing, url = %url, error = %source, "failed to make request");
                RiotApiError::TransportFailed {
                    url: url.clone(),
                    source,
                }
            })?;

            let status = res.status();
            let body = res.bytes().await.map_err(|source| {
                tracing::error!(
                    routing, url = %url, error = %source,
                    "failed to read response body"
                );
                RiotApiError::BodyReadFailed {
                    url: url.clone(),
                    source,
                }
            })?;

            Ok::<_, RiotApiError>((status, body))
        };

        // Dropping the transfer aborts the connection.
        let (status, body) = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                tracing::warn!(routing, url = %url, "request cancelled in flight");
                return Err(RiotApiError::Cancelled { url: url.clone() });
            }
            res = transfer => res?,
        };

        if status != StatusCode::OK {
            tracing::warn!(routing, url = %url, status = status.as_u16(), "Got non OK status code");
            return Err(RiotApiError::UnsuccessfulStatus {
                code: status.as_u16(),
                url,
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        Ok(body)
    }
}

#[async_trait]
impl ApiRequest for ApiClient {
    fn base_url(&self, routing: &str) -> String {
        match &self.config.base_url {
            Some(base) => base.trim_end_matches('/').to_string(),
            None => format!("https://{routing}.api.riotgames.com"),
        }
    }

    async fn request(
        &self,
        url: String,
        routing: &str,
        cancel: &CancellationToken,
    ) -> RiotApiResponse<Bytes> {
        // Ensure we do not exceed the RIOT API rate limits before doing any request
        self.wait_for_permit(&url, routing, cancel).await?;
        self.metrics.record_dispatch();

        let res = self.send(url, routing, cancel).await;
        if res.is_err() {
            self.metrics.record_failure();
        }
        res
    }
}
