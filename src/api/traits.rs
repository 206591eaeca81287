use std::fmt::Debug;

use async_trait::async_trait;
use bytes::Bytes;
use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;

use crate::error::{RiotApiError, RiotApiResponse};

/// Trait implemented by structures capable of performing raw HTTP requests to the riot API.
#[async_trait]
pub trait ApiRequest: Send + Sync + Debug {
    /// Scheme and host serving `routing`, without trailing slash.
    fn base_url(&self, routing: &str) -> String;

    /// GET `url` once a permit of the `routing` limiter is available and return the raw
    /// body of a `200 OK` response.
    async fn request(
        &self,
        url: String,
        routing: &str,
        cancel: &CancellationToken,
    ) -> RiotApiResponse<Bytes>;
}

/// Decode a raw response into the record type expected by the endpoint.
pub fn decode<T: DeserializeOwned>(raw: &[u8]) -> RiotApiResponse<T> {
    serde_json::from_slice(raw).map_err(|source| RiotApiError::Decode {
        target: std::any::type_name::<T>(),
        source,
    })
}

/// Request `url` through `api` and decode the body as `T`.
pub async fn fetch<T, Api>(
    api: &Api,
    url: String,
    routing: &str,
    cancel: &CancellationToken,
) -> RiotApiResponse<T>
where
    T: DeserializeOwned,
    Api: ApiRequest + ?Sized,
{
    let raw = api.request(url, routing, cancel).await?;
    decode(&raw)
}
