use std::fmt;

use async_trait::async_trait;
use serde::Deserialize;
use tokio_util::sync::CancellationToken;

use crate::{
    api::traits::{ApiRequest, fetch},
    error::RiotApiResponse,
    region::Region,
};

/// Riot League-V4 API. Unlike the match endpoints, these are routed by the platform
/// itself (`euw1`, `kr`, ...).
#[async_trait]
pub trait LeagueApi: ApiRequest {
    /// Whole league of one of the three apex tiers.
    async fn get_apex_league(
        &self,
        tier: ApexTier,
        queue: Queue,
        region: Region,
        cancel: &CancellationToken,
    ) -> RiotApiResponse<LeagueListDto> {
        tracing::debug!(%tier, %queue, %region, "[LEAGUE-V4 API] Fetching apex league");

        let routing = region.as_str();
        let url = format!(
            "{}/lol/league/v4/{}leagues/by-queue/{}",
            self.base_url(routing),
            tier,
            queue
        );

        fetch(self, url, routing, cancel).await.inspect_err(|e| {
            tracing::warn!(%tier, %queue, %region, error = %e, "Failed to get apex league");
        })
    }

    async fn get_challenger_league(
        &self,
        queue: Queue,
        region: Region,
        cancel: &CancellationToken,
    ) -> RiotApiResponse<LeagueListDto> {
        self.get_apex_league(ApexTier::Challenger, queue, region, cancel)
            .await
    }

    async fn get_grandmaster_league(
        &self,
        queue: Queue,
        region: Region,
        cancel: &CancellationToken,
    ) -> RiotApiResponse<LeagueListDto> {
        self.get_apex_league(ApexTier::Grandmaster, queue, region, cancel)
            .await
    }

    async fn get_master_league(
        &self,
        queue: Queue,
        region: Region,
        cancel: &CancellationToken,
    ) -> RiotApiResponse<LeagueListDto> {
        self.get_apex_league(ApexTier::Master, queue, region, cancel)
            .await
    }

    /// First page of the entries of one division below the apex tiers.
    async fn get_league_entries(
        &self,
        queue: Queue,
        tier: Tier,
        division: Division,
        region: Region,
        cancel: &CancellationToken,
    ) -> RiotApiResponse<Vec<LeagueEntryDto>> {
        tracing::debug!(
            %queue, %tier, %division, %region,
            "[LEAGUE-V4 API] Fetching league entries"
        );

        let routing = region.as_str();
        let url = format!(
            "{}/lol/league/v4/entries/{}/{}/{}",
            self.base_url(routing),
            queue,
            tier,
            division
        );

        fetch(self, url, routing, cancel).await.inspect_err(|e| {
            tracing::warn!(
                %queue, %tier, %division, %region, error = %e,
                "Failed to get league entries"
            );
        })
    }
}

/// Ranked queues exposing a league.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Queue {
    /// Ranked Solo/Duo
    SoloDuo,
    /// Ranked Flex
    Flex,
    /// Twisted Treeline flex, only kept by the API for history.
    FlexTwistedTreeline,
}

impl Queue {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SoloDuo => "RANKED_SOLO_5x5",
            Self::Flex => "RANKED_FLEX_SR",
            Self::FlexTwistedTreeline => "RANKED_FLEX_TT",
        }
    }
}

impl fmt::Display for Queue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tiers whose league is fetched as a whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApexTier {
    Challenger,
    Grandmaster,
    Master,
}

impl ApexTier {
    /// Path prefix of the tier (`challenger` in `challengerleagues`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Challenger => "challenger",
            Self::Grandmaster => "grandmaster",
            Self::Master => "master",
        }
    }
}

impl fmt::Display for ApexTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tiers split in divisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    Iron,
    Bronze,
    Silver,
    Gold,
    Platinum,
    Emerald,
    Diamond,
}

impl Tier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Iron => "IRON",
            Self::Bronze => "BRONZE",
            Self::Silver => "SILVER",
            Self::Gold => "GOLD",
            Self::Platinum => "PLATINUM",
            Self::Emerald => "EMERALD",
            Self::Diamond => "DIAMOND",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Division {
    I,
    II,
    III,
    IV,
}

impl Division {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::I => "I",
            Self::II => "II",
            Self::III => "III",
            Self::IV => "IV",
        }
    }
}

impl fmt::Display for Division {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Representation of the league list response of the apex tiers.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct LeagueListDto {
    pub league_id: String,
    pub entries: Vec<LeagueEntryDto>,
    pub tier: String,
    pub name: String,
    pub queue: String,
}

/// Representation of the league entry response.
///
/// Entries nested in a [`LeagueListDto`] do not repeat the league, queue and tier.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct LeagueEntryDto {
    #[serde(default)]
    pub league_id: Option<String>,
    #[serde(default)]
    pub queue_type: Option<String>,
    #[serde(default)]
    pub tier: Option<String>,
    #[serde(default)]
    pub summoner_id: Option<String>,
    #[serde(default)]
    pub summoner_name: Option<String>,
    pub puuid: String,
    pub league_points: i32,
    pub rank: String,
    pub wins: i32,
    pub losses: i32,
    pub veteran: bool,
    pub inactive: bool,
    pub fresh_blood: bool,
    pub hot_streak: bool,
    #[serde(default)]
    pub mini_series: Option<MiniSeriesDto>,
}

impl LeagueEntryDto {
    pub fn games(&self) -> i32 {
        self.wins + self.losses
    }

    /// Percentage of games won, 0 when no game was played.
    pub fn win_rate(&self) -> f64 {
        match self.games() {
            0 => 0.0,
            games => self.wins as f64 * 100.0 / games as f64,
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MiniSeriesDto {
    pub losses: i32,
    /// One character per game: `W`, `L` or `N` (not played).
    pub progress: String,
    pub target: i32,
    pub wins: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_segments_match_the_api() {
        assert_eq!(Queue::SoloDuo.to_string(), "RANKED_SOLO_5x5");
        assert_eq!(Queue::Flex.to_string(), "RANKED_FLEX_SR");
        assert_eq!(format!("{}leagues", ApexTier::Grandmaster), "grandmasterleagues");
        assert_eq!(Tier::Diamond.to_string(), "DIAMOND");
        assert_eq!(Division::IV.to_string(), "IV");
    }

    #[test]
    fn league_list_decodes_nested_entries() {
        let raw = r#"{
            "leagueId": "0d2f9f9e",
            "tier": "CHALLENGER",
            "name": "Viktor's Masterminds",
            "queue": "RANKED_SOLO_5x5",
            "entries": [
                {"puuid": "p1", "leaguePoints": 1420, "rank": "I", "wins": 300, "losses": 200,
                 "veteran": true, "inactive": false, "freshBlood": false, "hotStreak": true}
            ]
        }"#;

        let league: LeagueListDto = serde_json::from_str(raw).unwrap();
        let entry = &league.entries[0];

        assert_eq!(league.tier, "CHALLENGER");
        assert_eq!(entry.league_points, 1420);
        assert!(entry.queue_type.is_none());
        assert!(entry.mini_series.is_none());
        assert_eq!(entry.win_rate(), 60.0);
    }

    #[test]
    fn division_entry_decodes_mini_series() {
        let raw = r#"{
            "leagueId": "abc", "queueType": "RANKED_SOLO_5x5", "tier": "DIAMOND",
            "summonerId": "s1", "puuid": "p1", "leaguePoints": 100, "rank": "I",
            "wins": 0, "losses": 0, "veteran": false, "inactive": false,
            "freshBlood": true, "hotStreak": false,
            "miniSeries": {"losses": 1, "progress": "WLN", "target": 2, "wins": 1}
        }"#;

        let entry: LeagueEntryDto = serde_json::from_str(raw).unwrap();

        assert_eq!(entry.tier.as_deref(), Some("DIAMOND"));
        assert_eq!(entry.win_rate(), 0.0);

        let series = entry.mini_series.as_ref().unwrap();
        assert_eq!(series.progress, "WLN");
        assert_eq!(series.wins + series.losses, 2);
    }
}
