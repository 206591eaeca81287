use async_trait::async_trait;
use bytes::Bytes;
use tokio_util::sync::CancellationToken;

use crate::{config::ClientConfig, error::RiotApiResponse};

use super::{client::ApiClient, traits::ApiRequest};

pub mod league_v4;
pub mod match_v5;
pub mod summoner_v4;

pub use league_v4::LeagueApi;
pub use match_v5::MatchApi;
pub use summoner_v4::SummonerApi;

/// All APIs of the LoL scope covered by the SDK.
pub trait LolApiFull: SummonerApi + MatchApi + LeagueApi {}

/// High level client implementing all LoL related APIs.
#[derive(Debug)]
pub struct LolApiClient(ApiClient);

impl LolApiClient {
    /// Create a new API client from the provided configuration.
    pub fn new(config: ClientConfig) -> RiotApiResponse<Self> {
        Ok(Self(ApiClient::new(config, "lol")?))
    }

    /// Create a new API client configured from the environment.
    pub fn from_env() -> RiotApiResponse<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    /// Spawn a task logging periodic metrics about requests.
    pub fn start_metrics_logging(&self) -> tokio::task::JoinHandle<()> {
        let metrics = self.0.metrics.clone();
        tokio::spawn(async move { metrics.log_loop().await })
    }

    pub fn inner(&self) -> &ApiClient {
        &self.0
    }
}

#[async_trait]
impl ApiRequest for LolApiClient {
    fn base_url(&self, routing: &str) -> String {
        self.0.base_url(routing)
    }

    async fn request(
        &self,
        url: String,
        routing: &str,
        cancel: &CancellationToken,
    ) -> RiotApiResponse<Bytes> {
        self.0.request(url, routing, cancel).await
    }
}

impl SummonerApi for LolApiClient {}
impl MatchApi for LolApiClient {}
impl LeagueApi for LolApiClient {}
impl LolApiFull for LolApiClient {}

#[cfg(test)]
mod tests {
    use std::num::NonZeroU32;
    use std::sync::Arc;

    use httpmock::prelude::*;

    use super::league_v4::{ApexTier, Division, Queue, Tier};
    use super::*;
    use crate::{error::RiotApiError, region::Region};

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("lol_sdk=debug")
            .with_test_writer()
            .try_init();
    }

    fn client_for(server: &MockServer) -> LolApiClient {
        init_tracing();
        let config = ClientConfig::new("RGAPI-test")
            .with_requests_per_minute(NonZeroU32::new(6_000).unwrap())
            .with_base_url(server.base_url());
        LolApiClient::new(config).unwrap()
    }

    #[tokio::test]
    async fn get_summoner_by_puuid_decodes_profile() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/lol/summoner/v4/summoners/by-puuid/xyz")
                    .header("x-riot-token", "RGAPI-test");
                then.status(200).body(
                    r#"{"id":"abc","accountId":"acc","puuid":"xyz","name":"Chalop",
                        "profileIconId":4568,"revisionDate":1700000000000,"summonerLevel":412}"#,
                );
            })
            .await;

        let api = client_for(&server);
        let summoner = api
            .get_summoner_by_puuid("xyz", Region::EUW1, &CancellationToken::new())
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(summoner.id.as_deref(), Some("abc"));
        assert_eq!(summoner.puuid, "xyz");
        assert_eq!(summoner.summoner_level, 412);
        // Account routing: the limiter is keyed by the routing cluster.
        assert_eq!(api.inner().limiters().len().await, 1);
        let europe = api.inner().limiters().get_or_create("europe").await;
        assert_eq!(api.inner().limiters().len().await, 1);
        drop(europe);
    }

    #[tokio::test]
    async fn get_match_with_garbage_body_is_a_decode_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/lol/match/v5/matches/EUW1_1");
                then.status(200).body("not json");
            })
            .await;

        let api = client_for(&server);
        let res = api
            .get_match("EUW1_1", Region::EUW1, &CancellationToken::new())
            .await;

        match res {
            Err(RiotApiError::Decode { target, .. }) => assert!(target.ends_with("MatchDto")),
            other => panic!("expected a decode error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn error_status_is_not_decoded() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/lol/match/v5/matches/KR_1/timeline");
                then.status(429).body("rate limited");
            })
            .await;

        let api = client_for(&server);
        let res = api
            .get_match_timeline("KR_1", Region::KR, &CancellationToken::new())
            .await;

        match res {
            Err(RiotApiError::UnsuccessfulStatus { code, body, .. }) => {
                assert_eq!(code, 429);
                assert_eq!(body, "rate limited");
            }
            other => panic!("expected an unsuccessful status, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn match_ids_query_and_last_match_id() {
        let server = MockServer::start_async().await;
        let history = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/lol/match/v5/matches/by-puuid/p1/ids")
                    .query_param("start", "0")
                    .query_param("count", "5");
                then.status(200)
                    .body(r#"["NA1_5","NA1_4","NA1_3","NA1_2","NA1_1"]"#);
            })
            .await;
        let last = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/lol/match/v5/matches/by-puuid/p1/ids")
                    .query_param("count", "1");
                then.status(200).body(r#"["NA1_5"]"#);
            })
            .await;

        let api = client_for(&server);
        let cancel = CancellationToken::new();

        let ids = api
            .get_match_ids_by_puuid("p1", Region::NA1, 5, &cancel)
            .await
            .unwrap();
        let last_id = api.get_last_match_id("p1", Region::NA1, &cancel).await.unwrap();

        history.assert_async().await;
        last.assert_async().await;
        assert_eq!(ids.len(), 5);
        assert_eq!(last_id.as_deref(), Some("NA1_5"));
    }

    #[tokio::test]
    async fn apex_leagues_are_routed_by_platform() {
        let server = MockServer::start_async().await;
        let mut mocks = Vec::new();
        for tier in ["challenger", "grandmaster", "master"] {
            let path = format!("/lol/league/v4/{tier}leagues/by-queue/RANKED_SOLO_5x5");
            let body = format!(
                r#"{{"leagueId":"l-{tier}","tier":"{}","name":"n","queue":"RANKED_SOLO_5x5","entries":[]}}"#,
                tier.to_uppercase()
            );
            mocks.push(
                server
                    .mock_async(move |when, then| {
                        when.method(GET).path(path);
                        then.status(200).body(body);
                    })
                    .await,
            );
        }

        let api = client_for(&server);
        let cancel = CancellationToken::new();

        let challenger = api
            .get_challenger_league(Queue::SoloDuo, Region::JP1, &cancel)
            .await
            .unwrap();
        let grandmaster = api
            .get_grandmaster_league(Queue::SoloDuo, Region::JP1, &cancel)
            .await
            .unwrap();
        let master = api
            .get_apex_league(ApexTier::Master, Queue::SoloDuo, Region::JP1, &cancel)
            .await
            .unwrap();

        for mock in &mocks {
            mock.assert_async().await;
        }
        assert_eq!(challenger.tier, "CHALLENGER");
        assert_eq!(grandmaster.league_id, "l-grandmaster");
        assert_eq!(master.tier, "MASTER");

        // League endpoints key the limiter by the platform, not by the cluster.
        let limiters = api.inner().limiters();
        assert_eq!(limiters.len().await, 1);
        let jp1 = limiters.get_or_create("jp1").await;
        assert_eq!(limiters.len().await, 1);
        drop(jp1);
    }

    #[tokio::test]
    async fn division_entries_path() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/lol/league/v4/entries/RANKED_FLEX_SR/DIAMOND/I");
                then.status(200).body(
                    r#"[{"queueType":"RANKED_FLEX_SR","tier":"DIAMOND","puuid":"p1","leaguePoints":75,
                         "rank":"I","wins":10,"losses":5,"veteran":false,"inactive":false,
                         "freshBlood":false,"hotStreak":false}]"#,
                );
            })
            .await;

        let api = client_for(&server);
        let entries = api
            .get_league_entries(
                Queue::Flex,
                Tier::Diamond,
                Division::I,
                Region::EUN1,
                &CancellationToken::new(),
            )
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].league_points, 75);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_requests_share_one_limiter_per_cluster() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path_contains("/lol/match/v5/matches/by-puuid/");
                then.status(200).body("[]");
            })
            .await;

        let api = Arc::new(client_for(&server));
        let handles: Vec<_> = Region::ALL
            .into_iter()
            .map(|region| {
                let api = api.clone();
                tokio::spawn(async move {
                    api.get_match_ids_by_puuid("p", region, 1, &CancellationToken::new())
                        .await
                })
            })
            .collect();

        for handle in handles {
            assert!(handle.await.unwrap().unwrap().is_empty());
        }

        assert_eq!(mock.hits_async().await, Region::ALL.len());
        assert_eq!(api.inner().metrics.dispatched(), Region::ALL.len() as u64);
        assert_eq!(api.inner().limiters().len().await, 3);
    }
}
