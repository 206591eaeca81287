use async_trait::async_trait;
use serde::Deserialize;
use tokio_util::sync::CancellationToken;

use crate::{
    api::traits::{ApiRequest, fetch},
    error::RiotApiResponse,
    region::Region,
};

/// Riot Summoner-V4 API.
#[async_trait]
pub trait SummonerApi: ApiRequest {
    async fn get_summoner_by_puuid(
        &self,
        puuid: &str,
        region: Region,
        cancel: &CancellationToken,
    ) -> RiotApiResponse<SummonerDto> {
        tracing::debug!(puuid, %region, "[SUMMONER-V4 API] Fetching summoner");

        let routing = region.routing_cluster().as_str();
        let url = format!(
            "{}/lol/summoner/v4/summoners/by-puuid/{}",
            self.base_url(routing),
            puuid
        );

        fetch(self, url, routing, cancel).await.inspect_err(|e| {
            tracing::warn!(puuid, %region, error = %e, "Failed to fetch summoner");
        })
    }
}

/// Representation of the summoner data response.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SummonerDto {
    /// Encrypted summoner id. No longer sent by the API on most platforms.
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub account_id: Option<String>,
    pub puuid: String,
    #[serde(default)]
    pub name: Option<String>,
    pub profile_icon_id: i32,
    /// Epoch milliseconds of the last profile change.
    pub revision_date: i64,
    pub summoner_level: i64,
}
