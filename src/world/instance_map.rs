//! The boundary between the instance coordinator and the host engine.
//!
//! The coordinator never owns world objects. It keeps guids and asks the
//! map to resolve or act on them; every call may find nothing, which is a
//! normal outcome (the object despawned or never spawned).

use crate::entities::creature::CreatureEntry;
use crate::entities::guid::ObjectGuid;
use crate::world::position::Location;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DespawnPolicy {
    /// Corpse despawns once the creature dies.
    OnDeath,
}

/// Events forwarded to a boss AI on behalf of the creatures it commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiNotification {
    JustSummoned(ObjectGuid),
    SummonedCreatureDied(ObjectGuid),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitState {
    pub location: Location,
    pub is_alive: bool,
}

pub trait InstanceMap {
    fn creature_state(&self, guid: ObjectGuid) -> Option<UnitState>;
    fn game_object_location(&self, guid: ObjectGuid) -> Option<Location>;
    fn has_player(&self) -> bool;
    fn is_regular_difficulty(&self) -> bool;

    /// Puts a door-like object into its open or closed state. Idempotent.
    fn set_door_open(&mut self, guid: ObjectGuid, open: bool) -> bool;
    fn set_no_interact(&mut self, guid: ObjectGuid, no_interact: bool) -> bool;
    fn respawn_game_object(&mut self, guid: ObjectGuid, respawn_delay_secs: u32) -> bool;
    fn despawn_game_object(&mut self, guid: ObjectGuid) -> bool;
    fn use_trap(&mut self, trap: ObjectGuid, user: ObjectGuid) -> bool;

    /// Summons through a player in the map; `None` when nobody is present.
    fn summon_creature(
        &mut self,
        entry: CreatureEntry,
        at: Location,
        policy: DespawnPolicy,
    ) -> Option<ObjectGuid>;
    fn move_creature_to(&mut self, guid: ObjectGuid, to: Location) -> bool;
    fn force_despawn_creature(&mut self, guid: ObjectGuid, after_ms: u32) -> bool;
    fn set_can_enter_combat(&mut self, guid: ObjectGuid, can_enter: bool) -> bool;
    fn attack_with_threat(&mut self, attacker: ObjectGuid, victim: ObjectGuid, threat: f32) -> bool;
    fn set_in_combat_with_zone(&mut self, guid: ObjectGuid) -> bool;
    fn notify_ai(&mut self, boss: ObjectGuid, notification: AiNotification) -> bool;

    fn play_sound_to_map(&mut self, sound_id: u32);
    /// Speaks a script text. When `speaker_guid` is absent the engine
    /// simulates the line on behalf of `speaker`.
    fn say_text(&mut self, text_id: i32, speaker: CreatureEntry, speaker_guid: Option<ObjectGuid>);
    fn start_timed_achievement(&mut self, criteria_type: u32, start_id: u32);
    fn save_instance_data(&mut self, data: &str);
}
