//! Typed client for the League of Legends REST API.
//!
//! Every request waits for a permit of the token bucket of its routing value (one
//! bucket per routing cluster or platform, created on first use) before being sent,
//! and every response is decoded into the record type of its endpoint.
//!
//! ```no_run
//! use lol_sdk::{CancellationToken, LolApiClient, MatchApi, Region};
//!
//! # async fn example() -> lol_sdk::RiotApiResponse<()> {
//! let api = LolApiClient::from_env()?;
//! let cancel = CancellationToken::new();
//!
//! let ids = api.get_match_ids_by_puuid("puuid", Region::EUW1, 5, &cancel).await?;
//! for id in ids {
//!     let game = api.get_match(&id, Region::EUW1, &cancel).await?;
//!     println!("{} lasted {}", id, game.info.duration_formatted());
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod region;

pub mod types {
    pub use super::api::lol::league_v4::{
        ApexTier, Division, LeagueEntryDto, LeagueListDto, MiniSeriesDto, Queue, Tier,
    };
    pub use super::api::lol::match_v5::{
        BanDto, ChampionStatsDto, DamageStatsDto, EventDto, FrameDto, InfoDto, MatchDto,
        MetadataDto, ObjectiveDto, ObjectivesDto, ParticipantDto, ParticipantFrameDto,
        PerkStatsDto, PerkStyleDto, PerkStyleSelectionDto, PerksDto, PositionDto, TeamDto,
        TimelineDto, TimelineInfoDto, TimelineMetadataDto, TimelineParticipantDto,
        VictimDamageDto,
    };
    pub use super::api::lol::summoner_v4::SummonerDto;
}

pub use api::{ApiRequest, LeagueApi, LolApiClient, LolApiFull, MatchApi, SummonerApi};
pub use config::ClientConfig;
pub use error::{RiotApiError, RiotApiResponse};
pub use region::{Region, RoutingCluster};
pub use tokio_util::sync::CancellationToken;
