use async_trait::async_trait;
use serde::Deserialize;
use tokio_util::sync::CancellationToken;

use crate::{
    api::traits::{ApiRequest, fetch},
    error::RiotApiResponse,
    region::Region,
};

mod timeline;

pub use timeline::*;

/// Riot Match-V5 API. Every call is routed through the routing cluster of the region.
#[async_trait]
pub trait MatchApi: ApiRequest {
    /// Most recent match ids played by `puuid`, newest first.
    async fn get_match_ids_by_puuid(
        &self,
        puuid: &str,
        region: Region,
        count: u32,
        cancel: &CancellationToken,
    ) -> RiotApiResponse<Vec<String>> {
        tracing::debug!(puuid, %region, count, "[MATCH-V5 API] Fetching match history");

        let routing = region.routing_cluster().as_str();
        let url = format!(
            "{}/lol/match/v5/matches/by-puuid/{}/ids?start=0&count={}",
            self.base_url(routing),
            puuid,
            count
        );

        let ids: Vec<String> = fetch(self, url, routing, cancel).await.inspect_err(|e| {
            tracing::warn!(puuid, %region, error = %e, "Failed to fetch match history");
        })?;

        tracing::debug!(puuid, %region, match_count = ids.len(), ?ids, "Match history fetched");
        Ok(ids)
    }

    async fn get_last_match_id(
        &self,
        puuid: &str,
        region: Region,
        cancel: &CancellationToken,
    ) -> RiotApiResponse<Option<String>> {
        let ids = self.get_match_ids_by_puuid(puuid, region, 1, cancel).await?;

        Ok(ids.into_iter().next())
    }

    async fn get_match(
        &self,
        match_id: &str,
        region: Region,
        cancel: &CancellationToken,
    ) -> RiotApiResponse<MatchDto> {
        tracing::debug!(match_id, %region, "[MATCH-V5 API] Fetching match");

        let routing = region.routing_cluster().as_str();
        let url = format!(
            "{}/lol/match/v5/matches/{}",
            self.base_url(routing),
            match_id
        );

        fetch(self, url, routing, cancel).await.inspect_err(|e| {
            tracing::warn!(match_id, %region, error = %e, "Failed to fetch match");
        })
    }

    async fn get_match_timeline(
        &self,
        match_id: &str,
        region: Region,
        cancel: &CancellationToken,
    ) -> RiotApiResponse<TimelineDto> {
        tracing::debug!(match_id, %region, "[MATCH-V5 API] Fetching match timeline");

        let routing = region.routing_cluster().as_str();
        let url = format!(
            "{}/lol/match/v5/matches/{}/timeline",
            self.base_url(routing),
            match_id
        );

        fetch(self, url, routing, cancel).await.inspect_err(|e| {
            tracing::warn!(match_id, %region, error = %e, "Failed to fetch match timeline");
        })
    }
}

/// Representation of the match data response.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MatchDto {
    pub metadata: MetadataDto,
    pub info: InfoDto,
}

impl MatchDto {
    pub fn participant(&self, puuid: &str) -> Option<&ParticipantDto> {
        self.info.participants.iter().find(|p| p.puuid == puuid)
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MetadataDto {
    pub data_version: String,
    pub match_id: String,
    /// Participant puuids, in participant id order.
    pub participants: Vec<String>,
}

/// Representation of the match info data response.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct InfoDto {
    pub game_creation: i64,
    /// Seconds (milliseconds for games played before patch 11.20).
    pub game_duration: i64,
    #[serde(default)]
    pub game_end_timestamp: Option<i64>,
    pub game_id: i64,
    pub game_mode: String,
    #[serde(default)]
    pub game_name: String,
    pub game_start_timestamp: i64,
    pub game_type: String,
    pub game_version: String,
    pub map_id: i32,
    pub participants: Vec<ParticipantDto>,
    pub platform_id: String,
    pub queue_id: i32,
    pub teams: Vec<TeamDto>,
    #[serde(default)]
    pub tournament_code: String,
}

impl InfoDto {
    pub fn duration_formatted(&self) -> String {
        let minutes = self.game_duration / 60;
        let seconds = self.game_duration % 60;
        format!("{}:{:02}", minutes, seconds)
    }

    pub fn is_ranked(&self) -> bool {
        matches!(self.queue_id, 420 | 440)
    }
}

/// Representation of the participant data response.
///
/// The API drops or adds fields depending on the game mode and patch, so every field
/// falls back to its default when absent.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ParticipantDto {
    pub all_in_pings: i32,
    pub assist_me_pings: i32,
    pub assists: i32,
    pub baron_kills: i32,
    pub bounty_level: i32,
    pub champ_experience: i32,
    pub champ_level: i32,
    pub champion_id: i32,
    pub champion_name: String,
    pub champion_transform: i32,
    pub consumables_purchased: i32,
    pub damage_dealt_to_buildings: i32,
    pub damage_dealt_to_objectives: i32,
    pub damage_dealt_to_turrets: i32,
    pub damage_self_mitigated: i32,
    pub deaths: i32,
    pub detector_wards_placed: i32,
    pub double_kills: i32,
    pub dragon_kills: i32,
    pub eligible_for_progression: bool,
    pub enemy_missing_pings: i32,
    pub enemy_vision_pings: i32,
    pub first_blood_assist: bool,
    pub first_blood_kill: bool,
    pub first_tower_assist: bool,
    pub first_tower_kill: bool,
    pub game_ended_in_early_surrender: bool,
    pub game_ended_in_surrender: bool,
    pub get_back_pings: i32,
    pub gold_earned: i32,
    pub gold_spent: i32,
    pub hold_pings: i32,
    pub individual_position: String,
    pub inhibitor_kills: i32,
    pub inhibitor_takedowns: i32,
    pub inhibitors_lost: i32,
    pub item0: i32,
    pub item1: i32,
    pub item2: i32,
    pub item3: i32,
    pub item4: i32,
    pub item5: i32,
    pub item6: i32,
    pub items_purchased: i32,
    pub killing_sprees: i32,
    pub kills: i32,
    pub lane: String,
    pub largest_critical_strike: i32,
    pub largest_killing_spree: i32,
    pub largest_multi_kill: i32,
    pub longest_time_spent_living: i32,
    pub magic_damage_dealt: i32,
    pub magic_damage_dealt_to_champions: i32,
    pub magic_damage_taken: i32,
    pub need_vision_pings: i32,
    pub neutral_minions_killed: i32,
    pub nexus_kills: i32,
    pub nexus_lost: i32,
    pub nexus_takedowns: i32,
    pub objectives_stolen: i32,
    pub objectives_stolen_assists: i32,
    pub on_my_way_pings: i32,
    pub participant_id: i32,
    pub penta_kills: i32,
    pub perks: PerksDto,
    pub physical_damage_dealt: i32,
    pub physical_damage_dealt_to_champions: i32,
    pub physical_damage_taken: i32,
    pub profile_icon: i32,
    pub push_pings: i32,
    pub puuid: String,
    pub quadra_kills: i32,
    pub riot_id_game_name: String,
    pub riot_id_name: String,
    pub riot_id_tagline: String,
    pub role: String,
    pub sight_wards_bought_in_game: i32,
    pub spell1_casts: i32,
    pub spell2_casts: i32,
    pub spell3_casts: i32,
    pub spell4_casts: i32,
    pub summoner1_casts: i32,
    pub summoner1_id: i32,
    pub summoner2_casts: i32,
    pub summoner2_id: i32,
    pub summoner_id: String,
    pub summoner_level: i32,
    pub summoner_name: String,
    pub team_early_surrendered: bool,
    pub team_id: i32,
    pub team_position: String,
    #[serde(rename = "timeCCingOthers")]
    pub time_ccing_others: i32,
    pub time_played: i32,
    pub total_damage_dealt: i32,
    pub total_damage_dealt_to_champions: i32,
    pub total_damage_shielded_on_teammates: i32,
    pub total_damage_taken: i32,
    pub total_heal: i32,
    pub total_heals_on_teammates: i32,
    pub total_minions_killed: i32,
    #[serde(rename = "totalTimeCCDealt")]
    pub total_time_cc_dealt: i32,
    pub total_time_spent_dead: i32,
    pub total_units_healed: i32,
    pub triple_kills: i32,
    pub true_damage_dealt: i32,
    pub true_damage_dealt_to_champions: i32,
    pub true_damage_taken: i32,
    pub turret_kills: i32,
    pub turret_takedowns: i32,
    pub turrets_lost: i32,
    pub unreal_kills: i32,
    pub vision_cleared_pings: i32,
    pub vision_score: i32,
    pub vision_wards_bought_in_game: i32,
    pub wards_killed: i32,
    pub wards_placed: i32,
    pub win: bool,
}

impl ParticipantDto {
    pub fn kda_ratio(&self) -> f64 {
        if self.deaths == 0 {
            (self.kills + self.assists) as f64
        } else {
            (self.kills + self.assists) as f64 / self.deaths as f64
        }
    }

    pub fn cs_total(&self) -> i32 {
        self.total_minions_killed + self.neutral_minions_killed
    }

    /// Returns all item IDs (0 = empty slot)
    pub fn items(&self) -> [i32; 7] {
        [
            self.item0, self.item1, self.item2, self.item3, self.item4, self.item5, self.item6,
        ]
    }
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct PerksDto {
    pub stat_perks: PerkStatsDto,
    pub styles: Vec<PerkStyleDto>,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct PerkStatsDto {
    pub defense: i32,
    pub flex: i32,
    pub offense: i32,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct PerkStyleDto {
    pub description: String,
    pub selections: Vec<PerkStyleSelectionDto>,
    pub style: i32,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct PerkStyleSelectionDto {
    pub perk: i32,
    pub var1: i32,
    pub var2: i32,
    pub var3: i32,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TeamDto {
    #[serde(default)]
    pub bans: Vec<BanDto>,
    pub objectives: ObjectivesDto,
    pub team_id: i32,
    pub win: bool,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct BanDto {
    /// -1 when the team did not ban.
    pub champion_id: i32,
    pub pick_turn: i32,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ObjectivesDto {
    pub baron: ObjectiveDto,
    pub champion: ObjectiveDto,
    pub dragon: ObjectiveDto,
    pub inhibitor: ObjectiveDto,
    pub rift_herald: ObjectiveDto,
    pub tower: ObjectiveDto,
}

#[derive(Deserialize, Debug, Clone, Copy, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ObjectiveDto {
    pub first: bool,
    pub kills: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    const MATCH_JSON: &str = r#"{
        "metadata": {
            "dataVersion": "2",
            "matchId": "EUW1_7349112729",
            "participants": ["puuid-a", "puuid-b"]
        },
        "info": {
            "gameCreation": 1700000000000,
            "gameDuration": 1835,
            "gameEndTimestamp": 1700001900000,
            "gameId": 7349112729,
            "gameMode": "CLASSIC",
            "gameName": "teambuilder-match-7349112729",
            "gameStartTimestamp": 1700000060000,
            "gameType": "MATCHED_GAME",
            "gameVersion": "14.24.632.8043",
            "mapId": 11,
            "participants": [
                {
                    "puuid": "puuid-a",
                    "championName": "Ahri",
                    "kills": 7,
                    "deaths": 2,
                    "assists": 9,
                    "timeCCingOthers": 31,
                    "totalTimeCCDealt": 204,
                    "item0": 3089,
                    "perks": {
                        "statPerks": {"defense": 5001, "flex": 5008, "offense": 5005},
                        "styles": [{"description": "primaryStyle", "selections": [{"perk": 8112, "var1": 1, "var2": 2, "var3": 3}], "style": 8100}]
                    },
                    "win": true
                },
                {"puuid": "puuid-b", "championName": "Garen", "deaths": 0, "kills": 3, "assists": 1, "win": false}
            ],
            "platformId": "EUW1",
            "queueId": 420,
            "teams": [
                {
                    "bans": [{"championId": 157, "pickTurn": 1}],
                    "objectives": {"baron": {"first": true, "kills": 1}, "tower": {"first": false, "kills": 8}},
                    "teamId": 100,
                    "win": true
                }
            ]
        }
    }"#;

    #[test]
    fn match_decodes_with_partial_participants() {
        let m: MatchDto = serde_json::from_str(MATCH_JSON).unwrap();

        assert_eq!(m.metadata.match_id, "EUW1_7349112729");
        assert_eq!(m.info.participants.len(), 2);
        assert!(m.info.is_ranked());
        assert_eq!(m.info.duration_formatted(), "30:35");
        assert!(m.info.tournament_code.is_empty());

        let ahri = m.participant("puuid-a").unwrap();
        assert_eq!(ahri.time_ccing_others, 31);
        assert_eq!(ahri.total_time_cc_dealt, 204);
        assert_eq!(ahri.items()[0], 3089);
        assert_eq!(ahri.perks.styles[0].selections[0].perk, 8112);
        assert_eq!(ahri.kda_ratio(), 8.0);

        let garen = m.participant("puuid-b").unwrap();
        assert_eq!(garen.kda_ratio(), 4.0);
        assert_eq!(garen.gold_earned, 0);

        let team = &m.info.teams[0];
        assert!(team.objectives.baron.first);
        assert_eq!(team.objectives.tower.kills, 8);
        assert_eq!(team.objectives.dragon.kills, 0);
        assert!(m.participant("someone-else").is_none());
    }

    #[test]
    fn match_without_info_is_rejected() {
        let raw = r#"{"metadata": {"dataVersion": "2", "matchId": "x", "participants": []}}"#;
        let res = serde_json::from_str::<MatchDto>(raw);
        assert!(res.is_err());
    }
}
