use std::collections::HashMap;

use serde::Deserialize;

/// Representation of the match timeline response.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TimelineDto {
    pub metadata: TimelineMetadataDto,
    pub info: TimelineInfoDto,
}

impl TimelineDto {
    /// All events of the game, in frame order.
    pub fn events(&self) -> impl Iterator<Item = &EventDto> {
        self.info.frames.iter().flat_map(|frame| frame.events.iter())
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TimelineMetadataDto {
    pub data_version: String,
    pub match_id: String,
    pub participants: Vec<String>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TimelineInfoDto {
    /// Milliseconds between two frames.
    pub frame_interval: i64,
    pub frames: Vec<FrameDto>,
    #[serde(default)]
    pub game_id: i64,
    #[serde(default)]
    pub participants: Vec<TimelineParticipantDto>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct FrameDto {
    pub events: Vec<EventDto>,
    /// Keyed by participant id ("1" to "10").
    pub participant_frames: HashMap<String, ParticipantFrameDto>,
    pub timestamp: i64,
}

/// A single timeline event. Apart from the timestamps and the type, which fields are
/// present depends on the event type.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct EventDto {
    #[serde(default)]
    pub real_timestamp: Option<i64>,
    pub timestamp: i64,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub item_id: Option<i32>,
    #[serde(default)]
    pub participant_id: Option<i32>,
    #[serde(default)]
    pub level_up_type: Option<String>,
    #[serde(default)]
    pub skill_slot: Option<i32>,
    #[serde(default)]
    pub creator_id: Option<i32>,
    #[serde(default)]
    pub ward_type: Option<String>,
    #[serde(default)]
    pub level: Option<i32>,
    #[serde(default)]
    pub assisting_participant_ids: Vec<i32>,
    #[serde(default)]
    pub bounty_level: Option<i32>,
    #[serde(default)]
    pub kill_streak_length: Option<i32>,
    #[serde(default)]
    pub killer_id: Option<i32>,
    #[serde(default)]
    pub position: Option<PositionDto>,
    #[serde(default)]
    pub victim_damage_dealt: Vec<VictimDamageDto>,
    #[serde(default)]
    pub victim_damage_received: Vec<VictimDamageDto>,
    #[serde(default)]
    pub victim_id: Option<i32>,
    #[serde(default)]
    pub kill_type: Option<String>,
    #[serde(default)]
    pub lane_type: Option<String>,
    #[serde(default)]
    pub team_id: Option<i32>,
    #[serde(default)]
    pub monster_type: Option<String>,
    #[serde(default)]
    pub monster_sub_type: Option<String>,
    #[serde(default)]
    pub building_type: Option<String>,
    #[serde(default)]
    pub tower_type: Option<String>,
    #[serde(default)]
    pub after_id: Option<i32>,
    #[serde(default)]
    pub before_id: Option<i32>,
    #[serde(default)]
    pub gold_gain: Option<i32>,
    #[serde(default)]
    pub game_id: Option<i64>,
    #[serde(default)]
    pub winning_team: Option<i32>,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PositionDto {
    pub x: i32,
    pub y: i32,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct VictimDamageDto {
    pub basic: bool,
    pub magic_damage: i32,
    pub name: String,
    pub participant_id: i32,
    pub physical_damage: i32,
    pub spell_name: String,
    pub spell_slot: i32,
    pub true_damage: i32,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ParticipantFrameDto {
    pub champion_stats: ChampionStatsDto,
    pub current_gold: i32,
    pub damage_stats: DamageStatsDto,
    pub gold_per_second: i32,
    pub jungle_minions_killed: i32,
    pub level: i32,
    pub minions_killed: i32,
    pub participant_id: i32,
    pub position: PositionDto,
    pub time_enemy_spent_controlled: i32,
    pub total_gold: i32,
    pub xp: i32,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ChampionStatsDto {
    pub ability_haste: i32,
    pub ability_power: i32,
    pub armor: i32,
    pub armor_pen: i32,
    pub armor_pen_percent: i32,
    pub attack_damage: i32,
    pub attack_speed: i32,
    pub bonus_armor_pen_percent: i32,
    pub bonus_magic_pen_percent: i32,
    pub cc_reduction: i32,
    pub cooldown_reduction: i32,
    pub health: i32,
    pub health_max: i32,
    pub health_regen: i32,
    pub lifesteal: i32,
    pub magic_pen: i32,
    pub magic_pen_percent: i32,
    pub magic_resist: i32,
    pub movement_speed: i32,
    pub omnivamp: i32,
    pub physical_vamp: i32,
    pub power: i32,
    pub power_max: i32,
    pub power_regen: i32,
    pub spell_vamp: i32,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct DamageStatsDto {
    pub magic_damage_done: i32,
    pub magic_damage_done_to_champions: i32,
    pub magic_damage_taken: i32,
    pub physical_damage_done: i32,
    pub physical_damage_done_to_champions: i32,
    pub physical_damage_taken: i32,
    pub total_damage_done: i32,
    pub total_damage_done_to_champions: i32,
    pub total_damage_taken: i32,
    pub true_damage_done: i32,
    pub true_damage_done_to_champions: i32,
    pub true_damage_taken: i32,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TimelineParticipantDto {
    pub participant_id: i32,
    pub puuid: String,
}
