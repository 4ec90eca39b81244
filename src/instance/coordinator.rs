use crate::config::InstanceTuning;
use crate::entities::creature::{self as npc, CreatureEntry, CreatureInfo, PlayerInfo};
use crate::entities::game_object::{self as go, GameObjectEntry, GameObjectInfo, HEIGAN_TRAP_AREAS};
use crate::entities::guid::ObjectGuid;
use crate::instance::achievements::{
    self, CriteriaContext, SpecialAchievement, SpecialAchievementFlags,
    ACHIEVEMENT_CRITERIA_TYPE_KILL_CREATURE, TIMED_START_MAEXXNA, TIMED_START_PATCHWERK,
};
use crate::instance::dialogue::{
    DialogueSequencer, SpokenLine, NAXXRAMAS_DIALOGUE, SAY_KELTHUZAD_CAT_DIED,
    SAY_KELTHUZAD_TAUNT1, SAY_KELTHUZAD_TAUNT2, SAY_KELTHUZAD_TAUNT3, SAY_KELTHUZAD_TAUNT4,
};
use crate::instance::encounter::{self, SpawnAppearance};
use crate::instance::registry::{CreatureRole, GameObjectRole, TrackedObjects};
use crate::instance::status::{EncounterId, EncounterStatus, MAX_ENCOUNTER};
use crate::instance::timers::{InstanceTimer, TimerTable};
use crate::persistence::snapshot::{self, EncounterTable};
use crate::world::instance_map::{AiNotification, DespawnPolicy, InstanceMap};
use crate::world::position::Location;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const SAPPHIRON_SPAWN: Location = Location::new(3521.48, -5234.87, 137.626, 4.53329);

/// Living Poison blobs crawl across the Patchwerk corridor: three start
/// points followed by their matching end points.
pub const LIVING_POISON_PATHS: [Location; 6] = [
    Location::new(3128.692, -3119.211, 293.346, 4.725505),
    Location::new(3154.432, -3125.669, 293.408, 4.456693),
    Location::new(3175.614, -3134.716, 293.282, 4.244928),
    Location::new(3128.709, -3157.404, 293.3238, 4.725505),
    Location::new(3145.881, -3158.563, 293.3216, 4.456693),
    Location::new(3157.736, -3164.859, 293.2874, 4.244928),
];
const LIVING_POISONS_PER_WAVE: usize = 3;

// Four background screams, 8873..=8876, while Thaddius lives.
pub const SOUND_SCREAM_FIRST: u32 = 8873;
const SCREAM_VARIANTS: u32 = 4;

const HORSEMEN_COUNT: u8 = 4;
const ZOMBIE_CHOW_THREAT: f32 = 2000.0;

/// Encounter coordinator for one Naxxramas instance.
///
/// Owns the encounter table and every timer; world objects are only known
/// by guid and resolved through the [`InstanceMap`] passed into each call.
pub struct NaxxramasInstance {
    encounters: EncounterTable,
    achievements: SpecialAchievementFlags,
    timers: TimerTable,
    tracked: TrackedObjects,
    dialogue: DialogueSequencer,
    horsemen_killed: u8,
    chamber_center: Location,
    instance_data: String,
    tuning: InstanceTuning,
    rng: StdRng,
}

impl NaxxramasInstance {
    pub fn new(tuning: InstanceTuning, seed: u64) -> Self {
        let mut timers = TimerTable::new();
        timers.arm(InstanceTimer::LivingPoison, tuning.living_poison_interval_ms);
        timers.arm(InstanceTimer::Screams, tuning.scream_interval_ms);
        let mut instance = Self {
            encounters: [EncounterStatus::NotStarted; MAX_ENCOUNTER],
            achievements: SpecialAchievementFlags::default(),
            timers,
            tracked: TrackedObjects::new(),
            dialogue: DialogueSequencer::new(NAXXRAMAS_DIALOGUE),
            horsemen_killed: 0,
            chamber_center: Location::default(),
            instance_data: String::new(),
            tuning,
            rng: StdRng::seed_from_u64(seed),
        };
        instance.initialize();
        instance
    }

    pub fn initialize(&mut self) {
        self.encounters = [EncounterStatus::NotStarted; MAX_ENCOUNTER];
        self.achievements.reset();
        self.dialogue = DialogueSequencer::new(NAXXRAMAS_DIALOGUE);
    }

    pub fn encounters(&self) -> &EncounterTable {
        &self.encounters
    }

    pub fn timers(&self) -> &TimerTable {
        &self.timers
    }

    pub fn tracked(&self) -> &TrackedObjects {
        &self.tracked
    }

    pub fn horsemen_killed(&self) -> u8 {
        self.horsemen_killed
    }

    pub fn get_data(&self, id: EncounterId) -> EncounterStatus {
        self.encounters[id.index()]
    }

    /// Engine-facing lookup; out-of-range ids read as NOT_STARTED (0).
    pub fn get_data_raw(&self, id: u32) -> u32 {
        usize::try_from(id)
            .ok()
            .and_then(EncounterId::from_index)
            .map(|id| self.get_data(id).as_u32())
            .unwrap_or(0)
    }

    /// Engine-facing setter. Unknown encounter ids or status values are
    /// ignored and reported as `false`.
    pub fn set_data_raw(&mut self, map: &mut dyn InstanceMap, id: u32, status: u32) -> bool {
        let encounter = usize::try_from(id).ok().and_then(EncounterId::from_index);
        let (Some(encounter), Some(status)) = (encounter, EncounterStatus::from_u32(status)) else {
            tracing::warn!(id, status, "ignoring status change for unknown encounter or status");
            return false;
        };
        self.set_data(map, encounter, status);
        true
    }

    pub fn set_data(&mut self, map: &mut dyn InstanceMap, id: EncounterId, status: EncounterStatus) {
        let rule = encounter::rule(id);
        // A wipe clears partial horseman kills even when FAIL is already stored.
        if id == EncounterId::FourHorsemen && status == EncounterStatus::Fail {
            self.horsemen_killed = 0;
        }
        if rule.ignore_repeats && self.encounters[id.index()] == status {
            return;
        }
        tracing::debug!(encounter = %id, %status, "encounter status change");

        // Each horseman reports its own death; the encounter only completes
        // once all four are down.
        if id == EncounterId::FourHorsemen && status == EncounterStatus::Special {
            self.record_horseman_kill(map);
            return;
        }

        if let Some(door) = rule.entry_door {
            // Thaddius' greeting phase leaves the door alone.
            if !(id == EncounterId::Thaddius && status == EncounterStatus::Special) {
                self.set_door(map, door, status != EncounterStatus::InProgress);
            }
        }
        if status == EncounterStatus::InProgress {
            if let Some(achievement) = rule.engage_achievement {
                self.achievements.set(achievement, true);
            }
        }
        if status == EncounterStatus::Done {
            for door in rule.opens_on_done {
                self.set_door(map, *door, true);
            }
            if let Some(portal) = rule.wing_portal {
                self.respawn_object(map, portal);
                self.set_interactable(map, portal);
                self.timers.arm(InstanceTimer::Taunt, self.tuning.taunt_delay_ms);
            }
        }
        self.apply_encounter_specifics(map, id, status);

        self.encounters[id.index()] = status;

        if status == EncounterStatus::Done
            || (status == EncounterStatus::Special && id == EncounterId::Sapphiron)
        {
            self.persist(map);
        }
    }

    fn apply_encounter_specifics(
        &mut self,
        map: &mut dyn InstanceMap,
        id: EncounterId,
        status: EncounterStatus,
    ) {
        use EncounterStatus::{Done, Fail, InProgress, Special};
        match (id, status) {
            (EncounterId::AnubRekhan, Done | Fail) => {
                if status == Done {
                    map.start_timed_achievement(
                        ACHIEVEMENT_CRITERIA_TYPE_KILL_CREATURE,
                        TIMED_START_MAEXXNA,
                    );
                }
                for scarab in self.tracked.take_corpse_scarabs() {
                    map.force_despawn_creature(scarab, 0);
                }
            }
            (EncounterId::Loatheb, Done) => {
                for add in self.tracked.take_heigan_backroom_adds() {
                    map.force_despawn_creature(add, 0);
                }
            }
            (EncounterId::Gothik, InProgress) => {
                self.set_door(map, go::MILI_GOTH_ENTRY_GATE, false);
                self.set_door(map, go::MILI_GOTH_COMBAT_GATE, false);
            }
            (EncounterId::Gothik, Special) => {
                self.set_door(map, go::MILI_GOTH_COMBAT_GATE, true);
            }
            (EncounterId::Gothik, Fail) => {
                self.set_door(map, go::MILI_GOTH_ENTRY_GATE, true);
                self.set_door(map, go::MILI_GOTH_COMBAT_GATE, true);
            }
            (EncounterId::Gothik, Done) => {
                self.set_door(map, go::MILI_GOTH_ENTRY_GATE, true);
                self.set_door(map, go::MILI_GOTH_EXIT_GATE, true);
                self.set_door(map, go::MILI_GOTH_COMBAT_GATE, true);
                self.set_door(map, go::MILI_HORSEMEN_DOOR, true);
                self.start_dialogue(map, npc::THANE);
            }
            (EncounterId::FourHorsemen, Done) => {
                let chest = if map.is_regular_difficulty() {
                    go::CHEST_HORSEMEN_NORMAL
                } else {
                    go::CHEST_HORSEMEN_HEROIC
                };
                self.respawn_object(map, chest);
            }
            (EncounterId::Patchwerk, InProgress) => {
                map.start_timed_achievement(
                    ACHIEVEMENT_CRITERIA_TYPE_KILL_CREATURE,
                    TIMED_START_PATCHWERK,
                );
            }
            (EncounterId::Sapphiron, Done) => self.start_dialogue(map, npc::KELTHUZAD),
            (EncounterId::Sapphiron, Special) => {
                self.timers
                    .arm(InstanceTimer::SapphironSpawn, self.tuning.sapphiron_respawn_ms);
            }
            (EncounterId::Kelthuzad, InProgress) => {
                self.achievements.set(SpecialAchievement::GetEnough, false);
                self.set_door(map, go::KELTHUZAD_TRIGGER, true);
                self.timers.arm(
                    InstanceTimer::KelthuzadTriggerDespawn,
                    self.tuning.kelthuzad_trigger_despawn_ms,
                );
            }
            _ => {}
        }
    }

    fn record_horseman_kill(&mut self, map: &mut dyn InstanceMap) {
        if self.horsemen_killed == 0 {
            self.timers
                .arm(InstanceTimer::HorsemenAchievement, self.tuning.horsemen_window_ms);
        }
        self.horsemen_killed = self.horsemen_killed.saturating_add(1);
        tracing::debug!(killed = self.horsemen_killed, "horseman down");
        if self.horsemen_killed == HORSEMEN_COUNT {
            self.set_data(map, EncounterId::FourHorsemen, EncounterStatus::Done);
        }
    }

    fn persist(&mut self, map: &mut dyn InstanceMap) {
        self.instance_data = snapshot::encode(&self.encounters);
        map.save_instance_data(&self.instance_data);
        tracing::info!(data = %self.instance_data, "instance data saved");
    }

    /// Latest persisted snapshot; empty until the first save or load.
    pub fn save(&self) -> &str {
        &self.instance_data
    }

    /// Restores the encounter table from a snapshot. A missing or malformed
    /// snapshot is logged and leaves every encounter NOT_STARTED.
    pub fn load(&mut self, data: Option<&str>) -> bool {
        let Some(data) = data else {
            tracing::warn!("instance data load failed: no data");
            return false;
        };
        match snapshot::decode(data) {
            Ok(table) => {
                self.encounters = table;
                self.instance_data = snapshot::encode(&self.encounters);
                tracing::info!(data = %self.instance_data, "instance data loaded");
                true
            }
            Err(err) => {
                self.encounters = [EncounterStatus::NotStarted; MAX_ENCOUNTER];
                self.instance_data = snapshot::encode(&self.encounters);
                tracing::warn!(error = %err, data, "instance data load failed");
                false
            }
        }
    }

    /// True while a boss fight is running anywhere in the instance. Gothik's
    /// second phase is stored as SPECIAL but still counts as a fight.
    pub fn is_encounter_in_progress(&self) -> bool {
        self.encounters[..=EncounterId::Kelthuzad.index()]
            .iter()
            .any(|status| *status == EncounterStatus::InProgress)
            || self.encounters[EncounterId::Gothik.index()] == EncounterStatus::Special
    }

    pub fn set_special_achievement_criteria(&mut self, achievement: SpecialAchievement, met: bool) {
        self.achievements.set(achievement, met);
    }

    pub fn check_achievement_criteria_meet(&self, criteria_id: u32) -> bool {
        achievements::criteria_met(
            criteria_id,
            &CriteriaContext {
                flags: &self.achievements,
                encounters: &self.encounters,
                together_window_open: self.timers.is_active(InstanceTimer::HorsemenAchievement),
            },
        )
    }

    pub fn update(&mut self, map: &mut dyn InstanceMap, diff: u32) {
        let thaddius_done = self.get_data(EncounterId::Thaddius) == EncounterStatus::Done;
        let fired = self
            .timers
            .advance(diff, |timer| timer != InstanceTimer::Screams || !thaddius_done);

        for timer in fired {
            match timer {
                InstanceTimer::LivingPoison => {
                    self.spawn_living_poison(map);
                    self.timers
                        .arm(InstanceTimer::LivingPoison, self.tuning.living_poison_interval_ms);
                }
                InstanceTimer::KelthuzadTriggerDespawn => {
                    if let Some(trigger) = self.tracked.game_object(go::KELTHUZAD_TRIGGER) {
                        map.set_door_open(trigger, false);
                        map.despawn_game_object(trigger);
                    }
                }
                InstanceTimer::Screams => {
                    if map.has_player() {
                        let sound = SOUND_SCREAM_FIRST + self.rng.gen_range(0..SCREAM_VARIANTS);
                        map.play_sound_to_map(sound);
                    }
                    let jitter_ms = self
                        .rng
                        .gen_range(0..=self.tuning.scream_jitter_secs)
                        .saturating_mul(1000);
                    self.timers.arm(
                        InstanceTimer::Screams,
                        self.tuning.scream_interval_ms.saturating_add(jitter_ms),
                    );
                }
                InstanceTimer::Taunt => self.do_taunt(map),
                InstanceTimer::HorsemenAchievement => {
                    tracing::debug!("four horsemen achievement window closed");
                }
                InstanceTimer::SapphironSpawn => {
                    map.summon_creature(npc::SAPPHIRON, SAPPHIRON_SPAWN, DespawnPolicy::OnDeath);
                }
            }
        }

        if let Some(line) = self.dialogue.update(diff) {
            self.speak(map, line);
        }
    }

    fn spawn_living_poison(&mut self, map: &mut dyn InstanceMap) {
        if !map.has_player() {
            return;
        }
        for index in 0..LIVING_POISONS_PER_WAVE {
            let start = LIVING_POISON_PATHS[index];
            let end = LIVING_POISON_PATHS[index + LIVING_POISONS_PER_WAVE];
            if let Some(poison) = map.summon_creature(npc::LIVING_POISON, start, DespawnPolicy::OnDeath) {
                map.move_creature_to(poison, end);
                map.force_despawn_creature(poison, self.tuning.living_poison_lifespan_ms);
            }
        }
    }

    /// Kel'Thuzad comments on every wing the raid clears.
    pub fn do_taunt(&mut self, map: &mut dyn InstanceMap) {
        if self.get_data(EncounterId::Kelthuzad) == EncounterStatus::Done {
            return;
        }
        let wings_cleared = [
            EncounterId::Maexxna,
            EncounterId::Loatheb,
            EncounterId::FourHorsemen,
            EncounterId::Thaddius,
        ]
        .iter()
        .filter(|id| self.get_data(**id) == EncounterStatus::Done)
        .count();
        let text_id = match wings_cleared {
            1 => SAY_KELTHUZAD_TAUNT1,
            2 => SAY_KELTHUZAD_TAUNT2,
            3 => SAY_KELTHUZAD_TAUNT3,
            4 => SAY_KELTHUZAD_TAUNT4,
            _ => return,
        };
        self.speak(
            map,
            SpokenLine {
                text_id,
                speaker: npc::KELTHUZAD,
            },
        );
    }

    fn start_dialogue(&mut self, map: &mut dyn InstanceMap, opener: CreatureEntry) {
        if let Some(line) = self.dialogue.start(opener) {
            self.speak(map, line);
        }
    }

    pub(crate) fn speak(&self, map: &mut dyn InstanceMap, line: SpokenLine) {
        let speaker_guid = self.tracked.creature(line.speaker);
        map.say_text(line.text_id, line.speaker, speaker_guid);
    }

    fn set_door(&self, map: &mut dyn InstanceMap, entry: GameObjectEntry, open: bool) {
        match self.tracked.game_object(entry) {
            Some(guid) => {
                map.set_door_open(guid, open);
            }
            None => tracing::debug!(entry = entry.0, open, "door not spawned"),
        }
    }

    fn respawn_object(&self, map: &mut dyn InstanceMap, entry: GameObjectEntry) {
        if let Some(guid) = self.tracked.game_object(entry) {
            map.respawn_game_object(guid, self.tuning.portal_respawn_secs);
        }
    }

    fn set_interactable(&self, map: &mut dyn InstanceMap, entry: GameObjectEntry) {
        if let Some(guid) = self.tracked.game_object(entry) {
            map.set_no_interact(guid, false);
        }
    }

    pub fn on_player_enter(&mut self, map: &mut dyn InstanceMap, _player: &PlayerInfo) {
        // Sapphiron left mid-respawn by a restart has to be brought back.
        if self.get_data(EncounterId::Sapphiron) != EncounterStatus::Special {
            return;
        }
        let present = self
            .tracked
            .creature(npc::SAPPHIRON)
            .and_then(|guid| map.creature_state(guid))
            .is_some();
        if present {
            return;
        }
        map.summon_creature(npc::SAPPHIRON, SAPPHIRON_SPAWN, DespawnPolicy::OnDeath);
    }

    pub fn on_creature_create(&mut self, map: &mut dyn InstanceMap, creature: &CreatureInfo) {
        if self.tracked.register_creature(creature) == CreatureRole::ToxicTunnel {
            map.set_can_enter_combat(creature.guid, false);
        }
    }

    pub fn on_object_create(&mut self, map: &mut dyn InstanceMap, object: &GameObjectInfo) {
        if self.tracked.register_game_object(object) != GameObjectRole::Single {
            return;
        }
        let Some((gate, appearance)) = encounter::spawn_appearance(object.entry) else {
            return;
        };
        if self.get_data(gate) != EncounterStatus::Done {
            return;
        }
        match appearance {
            SpawnAppearance::Open => {
                map.set_door_open(object.guid, true);
            }
            SpawnAppearance::Closed => {
                map.set_door_open(object.guid, false);
            }
            SpawnAppearance::Interactable => {
                map.set_no_interact(object.guid, false);
            }
        }
    }

    pub fn on_creature_respawn(&mut self, map: &mut dyn InstanceMap, creature: &CreatureInfo) {
        match creature.entry {
            npc::ZOMBIE_CHOW => {
                let Some(gluth) = self.tracked.creature(npc::GLUTH) else {
                    return;
                };
                let alive = map
                    .creature_state(gluth)
                    .map(|state| state.is_alive)
                    .unwrap_or(false);
                if alive {
                    map.attack_with_threat(creature.guid, gluth, ZOMBIE_CHOW_THREAT);
                }
            }
            entry if entry.is_gothik_add() => {
                if let Some(gothik) = self.tracked.creature(npc::GOTHIK) {
                    map.notify_ai(gothik, AiNotification::JustSummoned(creature.guid));
                }
            }
            _ => {}
        }
    }

    pub fn on_player_death(&mut self, map: &mut dyn InstanceMap, _player: &PlayerInfo) {
        if self.is_encounter_in_progress() {
            self.set_data(map, EncounterId::UndyingFailed, EncounterStatus::Done);
        }
        if self.get_data(EncounterId::Heigan) == EncounterStatus::InProgress {
            self.achievements.set(SpecialAchievement::SafetyDance, false);
        }
    }

    pub fn on_creature_death(&mut self, map: &mut dyn InstanceMap, creature: &CreatureInfo) {
        match creature.entry {
            npc::MR_BIGGLESWORTH => {
                if self.get_data(EncounterId::Kelthuzad) != EncounterStatus::Done {
                    self.speak(
                        map,
                        SpokenLine {
                            text_id: SAY_KELTHUZAD_CAT_DIED,
                            speaker: npc::KELTHUZAD,
                        },
                    );
                }
            }
            entry if entry.is_gothik_add() => {
                if let Some(gothik) = self.tracked.creature(npc::GOTHIK) {
                    map.notify_ai(gothik, AiNotification::SummonedCreatureDied(creature.guid));
                }
            }
            _ => {}
        }
    }

    /// Fires every trap of one of Heigan's eruption zones.
    pub fn trigger_heigan_traps(&self, map: &mut dyn InstanceMap, heigan: ObjectGuid, area: usize) {
        if area >= HEIGAN_TRAP_AREAS {
            return;
        }
        for trap in self.tracked.heigan_traps(area) {
            map.use_trap(*trap, heigan);
        }
    }

    /// Right is the eastern (living) side of Gothik's arena, split by the
    /// combat gate.
    pub fn is_in_right_side_gothik_area(&self, map: &dyn InstanceMap, location: Location) -> bool {
        let gate = self
            .tracked
            .game_object(go::MILI_GOTH_COMBAT_GATE)
            .and_then(|guid| map.game_object_location(guid));
        match gate {
            Some(gate) => gate.y >= location.y,
            None => {
                tracing::error!("left/right side check, Gothik combat area failed");
                true
            }
        }
    }

    pub fn gluth_triggers(&self) -> &[ObjectGuid] {
        self.tracked.gluth_triggers()
    }

    pub fn thaddius_tesla_coils(&self) -> &[ObjectGuid] {
        self.tracked.tesla_coils()
    }

    pub fn creature_guid(&self, entry: CreatureEntry) -> Option<ObjectGuid> {
        self.tracked.creature(entry)
    }

    pub fn game_object_guid(&self, entry: GameObjectEntry) -> Option<ObjectGuid> {
        self.tracked.game_object(entry)
    }

    pub fn set_chamber_center(&mut self, center: Location) {
        self.chamber_center = center;
    }

    pub fn chamber_center(&self) -> Location {
        self.chamber_center
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::game_object::GameObjectType;
    use crate::instance::achievements::{
        CRITERIA_GET_ENOUGH_N, CRITERIA_IMMORTAL_KELTHUZAD, CRITERIA_SAFETY_DANCE_N,
        CRITERIA_SHOCKING_N, CRITERIA_TOGETHER_N, CRITERIA_UNDYING_MAEXXNA,
    };
    use crate::instance::dialogue::{SAY_KORT_TAUNT1, SAY_SAPP_DIALOG1};
    use crate::world::sandbox::{MapEffect, SandboxMap};

    const SEED: u64 = 7;

    fn instance() -> NaxxramasInstance {
        NaxxramasInstance::new(InstanceTuning::default(), SEED)
    }

    fn spawn_object(
        instance: &mut NaxxramasInstance,
        map: &mut SandboxMap,
        entry: GameObjectEntry,
        go_type: GameObjectType,
    ) -> ObjectGuid {
        let object = map.spawn_game_object(entry, go_type, Location::default());
        instance.on_object_create(map, &object);
        object.guid
    }

    fn spawn_door(instance: &mut NaxxramasInstance, map: &mut SandboxMap, entry: GameObjectEntry) -> ObjectGuid {
        spawn_object(instance, map, entry, GameObjectType::Door)
    }

    fn spawn_creature(
        instance: &mut NaxxramasInstance,
        map: &mut SandboxMap,
        entry: CreatureEntry,
    ) -> CreatureInfo {
        let creature = map.spawn_creature(entry, Location::default());
        instance.on_creature_create(map, &creature);
        creature
    }

    fn all_done_before_kelthuzad(instance: &mut NaxxramasInstance, map: &mut SandboxMap) {
        for id in EncounterId::ALL {
            if id.index() < EncounterId::Kelthuzad.index() {
                instance.set_data(map, id, EncounterStatus::Done);
            }
        }
    }

    #[test]
    fn out_of_range_ids_are_ignored() {
        let mut instance = instance();
        let mut map = SandboxMap::new();
        assert_eq!(instance.get_data_raw(16), 0);
        assert_eq!(instance.get_data_raw(u32::MAX), 0);
        assert!(!instance.set_data_raw(&mut map, 16, 3));
        assert!(!instance.set_data_raw(&mut map, 0, 9));
        assert!(map.effects().is_empty());
        assert_eq!(map.saved_data(), None);
        assert!(instance.encounters().iter().all(|s| *s == EncounterStatus::NotStarted));
    }

    #[test]
    fn raw_setter_stores_status() {
        let mut instance = instance();
        let mut map = SandboxMap::new();
        assert!(instance.set_data_raw(&mut map, 10, 1));
        assert_eq!(instance.get_data_raw(10), 1);
        assert_eq!(instance.get_data(EncounterId::Grobbulus), EncounterStatus::InProgress);
    }

    #[test]
    fn entry_door_closes_for_the_fight_and_reopens_on_wipe() {
        let mut instance = instance();
        let mut map = SandboxMap::new();
        let door = spawn_door(&mut instance, &mut map, go::ARAC_ANUB_DOOR);

        instance.set_data(&mut map, EncounterId::AnubRekhan, EncounterStatus::InProgress);
        assert_eq!(map.is_door_open(door), Some(false));
        instance.set_data(&mut map, EncounterId::AnubRekhan, EncounterStatus::Fail);
        assert_eq!(map.is_door_open(door), Some(true));
        assert_eq!(map.saved_data(), None);
    }

    #[test]
    fn repeated_done_leaves_doors_open() {
        let mut instance = instance();
        let mut map = SandboxMap::new();
        let door = spawn_door(&mut instance, &mut map, go::PLAG_NOTH_ENTRY_DOOR);
        let exit = spawn_door(&mut instance, &mut map, go::PLAG_NOTH_EXIT_DOOR);

        instance.set_data(&mut map, EncounterId::Noth, EncounterStatus::Done);
        instance.set_data(&mut map, EncounterId::Noth, EncounterStatus::Done);
        assert_eq!(map.is_door_open(door), Some(true));
        assert_eq!(map.is_door_open(exit), Some(true));
    }

    #[test]
    fn maexxna_done_opens_the_wing_and_taunts() {
        let mut instance = instance();
        let mut map = SandboxMap::new();
        let inner = spawn_door(&mut instance, &mut map, go::ARAC_MAEX_INNER_DOOR);
        let ramp = spawn_door(&mut instance, &mut map, go::ARAC_EYE_RAMP);
        let portal = spawn_object(&mut instance, &mut map, go::ARAC_PORTAL, GameObjectType::Generic);
        spawn_creature(&mut instance, &mut map, npc::KELTHUZAD);
        assert_eq!(map.is_no_interact(portal), Some(true));

        instance.set_data(&mut map, EncounterId::Maexxna, EncounterStatus::Done);
        assert_eq!(map.is_door_open(inner), Some(true));
        assert_eq!(map.is_door_open(ramp), Some(true));
        assert_eq!(map.is_no_interact(portal), Some(false));
        assert!(map.effects().contains(&MapEffect::GameObjectRespawn {
            guid: portal,
            delay_secs: 1800,
        }));
        assert_eq!(map.saved_data(), Some("0 0 3 0 0 0 0 0 0 0 0 0 0 0 0 0"));
        assert_eq!(instance.save(), "0 0 3 0 0 0 0 0 0 0 0 0 0 0 0 0");

        map.take_effects();
        instance.update(&mut map, 4999);
        assert!(!map.effects().iter().any(|e| matches!(e, MapEffect::Text { .. })));
        instance.update(&mut map, 1);
        assert!(map.effects().contains(&MapEffect::Text {
            text_id: SAY_KELTHUZAD_TAUNT1,
            speaker: npc::KELTHUZAD,
            simulated: false,
        }));
    }

    #[test]
    fn taunt_counts_cleared_wings() {
        let mut instance = instance();
        let mut map = SandboxMap::new();
        instance.set_data(&mut map, EncounterId::Maexxna, EncounterStatus::Done);
        instance.set_data(&mut map, EncounterId::Loatheb, EncounterStatus::Done);
        map.take_effects();
        instance.do_taunt(&mut map);
        assert_eq!(
            map.effects(),
            &[MapEffect::Text {
                text_id: SAY_KELTHUZAD_TAUNT2,
                speaker: npc::KELTHUZAD,
                simulated: true,
            }]
        );

        instance.set_data(&mut map, EncounterId::Kelthuzad, EncounterStatus::Done);
        map.take_effects();
        instance.do_taunt(&mut map);
        assert!(map.effects().is_empty());
    }

    #[test]
    fn four_horsemen_complete_on_the_fourth_kill() {
        let mut instance = instance();
        let mut map = SandboxMap::new();
        let chest = spawn_object(&mut instance, &mut map, go::CHEST_HORSEMEN_NORMAL, GameObjectType::Chest);

        for kill in 1..=3 {
            instance.set_data(&mut map, EncounterId::FourHorsemen, EncounterStatus::Special);
            assert_eq!(instance.horsemen_killed(), kill);
            assert_eq!(instance.get_data(EncounterId::FourHorsemen), EncounterStatus::NotStarted);
        }
        assert!(instance.check_achievement_criteria_meet(CRITERIA_TOGETHER_N));
        assert_eq!(map.saved_data(), None);

        instance.set_data(&mut map, EncounterId::FourHorsemen, EncounterStatus::Special);
        assert_eq!(instance.get_data(EncounterId::FourHorsemen), EncounterStatus::Done);
        assert!(map.effects().contains(&MapEffect::GameObjectRespawn {
            guid: chest,
            delay_secs: 1800,
        }));
        assert_eq!(map.saved_data(), Some("0 0 0 0 0 0 0 0 3 0 0 0 0 0 0 0"));
    }

    #[test]
    fn heroic_horsemen_spawn_the_heroic_chest() {
        let mut instance = instance();
        let mut map = SandboxMap::new();
        map.set_regular_difficulty(false);
        let normal = spawn_object(&mut instance, &mut map, go::CHEST_HORSEMEN_NORMAL, GameObjectType::Chest);
        let heroic = spawn_object(&mut instance, &mut map, go::CHEST_HORSEMEN_HEROIC, GameObjectType::Chest);

        instance.set_data(&mut map, EncounterId::FourHorsemen, EncounterStatus::Done);
        assert!(map
            .effects()
            .iter()
            .any(|e| matches!(e, MapEffect::GameObjectRespawn { guid, .. } if *guid == heroic)));
        assert!(!map
            .effects()
            .iter()
            .any(|e| matches!(e, MapEffect::GameObjectRespawn { guid, .. } if *guid == normal)));
    }

    #[test]
    fn horsemen_wipe_resets_kill_counter() {
        let mut instance = instance();
        let mut map = SandboxMap::new();
        instance.set_data(&mut map, EncounterId::FourHorsemen, EncounterStatus::InProgress);
        instance.set_data(&mut map, EncounterId::FourHorsemen, EncounterStatus::Special);
        instance.set_data(&mut map, EncounterId::FourHorsemen, EncounterStatus::Special);
        instance.set_data(&mut map, EncounterId::FourHorsemen, EncounterStatus::Fail);
        assert_eq!(instance.horsemen_killed(), 0);
        assert_eq!(instance.get_data(EncounterId::FourHorsemen), EncounterStatus::Fail);

        for _ in 0..3 {
            instance.set_data(&mut map, EncounterId::FourHorsemen, EncounterStatus::Special);
        }
        assert_ne!(instance.get_data(EncounterId::FourHorsemen), EncounterStatus::Done);
    }

    #[test]
    fn repeated_horsemen_wipe_still_resets_kill_counter() {
        let mut instance = instance();
        let mut map = SandboxMap::new();
        instance.set_data(&mut map, EncounterId::FourHorsemen, EncounterStatus::Fail);
        instance.set_data(&mut map, EncounterId::FourHorsemen, EncounterStatus::Special);
        assert_eq!(instance.horsemen_killed(), 1);

        map.take_effects();
        instance.set_data(&mut map, EncounterId::FourHorsemen, EncounterStatus::Fail);
        assert_eq!(instance.horsemen_killed(), 0);
        assert!(map.effects().is_empty());

        for _ in 0..3 {
            instance.set_data(&mut map, EncounterId::FourHorsemen, EncounterStatus::Special);
        }
        assert_eq!(instance.get_data(EncounterId::FourHorsemen), EncounterStatus::Fail);
        instance.set_data(&mut map, EncounterId::FourHorsemen, EncounterStatus::Special);
        assert_eq!(instance.get_data(EncounterId::FourHorsemen), EncounterStatus::Done);
    }

    #[test]
    fn horsemen_window_closes_after_fifteen_seconds() {
        let mut instance = instance();
        let mut map = SandboxMap::new();
        instance.set_data(&mut map, EncounterId::FourHorsemen, EncounterStatus::Special);
        instance.update(&mut map, 14_999);
        assert!(instance.check_achievement_criteria_meet(CRITERIA_TOGETHER_N));
        instance.update(&mut map, 1);
        assert!(!instance.check_achievement_criteria_meet(CRITERIA_TOGETHER_N));
    }

    #[test]
    fn thaddius_ignores_repeated_status() {
        let mut instance = instance();
        let mut map = SandboxMap::new();
        let door = spawn_door(&mut instance, &mut map, go::CONS_THAD_DOOR);

        instance.set_data(&mut map, EncounterId::Thaddius, EncounterStatus::InProgress);
        let after_first = map.effects().len();
        instance.set_data(&mut map, EncounterId::Thaddius, EncounterStatus::InProgress);
        assert_eq!(map.effects().len(), after_first);
        assert_eq!(map.is_door_open(door), Some(false));
        assert!(instance.check_achievement_criteria_meet(CRITERIA_SHOCKING_N));

        // The greeting phase does not touch the door.
        instance.set_data(&mut map, EncounterId::Thaddius, EncounterStatus::Special);
        assert_eq!(map.effects().len(), after_first);
        assert_eq!(instance.get_data(EncounterId::Thaddius), EncounterStatus::Special);
    }

    #[test]
    fn gothik_gates_follow_the_fight() {
        let mut instance = instance();
        let mut map = SandboxMap::new();
        let entry = spawn_door(&mut instance, &mut map, go::MILI_GOTH_ENTRY_GATE);
        let combat = spawn_door(&mut instance, &mut map, go::MILI_GOTH_COMBAT_GATE);
        let exit = spawn_door(&mut instance, &mut map, go::MILI_GOTH_EXIT_GATE);
        let horsemen = spawn_door(&mut instance, &mut map, go::MILI_HORSEMEN_DOOR);
        map.set_door_open(entry, true);
        map.set_door_open(combat, true);

        instance.set_data(&mut map, EncounterId::Gothik, EncounterStatus::InProgress);
        assert_eq!(map.is_door_open(entry), Some(false));
        assert_eq!(map.is_door_open(combat), Some(false));
        assert!(instance.is_encounter_in_progress());

        instance.set_data(&mut map, EncounterId::Gothik, EncounterStatus::Special);
        assert_eq!(map.is_door_open(combat), Some(true));
        assert_eq!(map.is_door_open(entry), Some(false));
        assert!(instance.is_encounter_in_progress());

        instance.set_data(&mut map, EncounterId::Gothik, EncounterStatus::Done);
        for gate in [entry, combat, exit, horsemen] {
            assert_eq!(map.is_door_open(gate), Some(true));
        }
        assert!(!instance.is_encounter_in_progress());
    }

    #[test]
    fn gothik_done_starts_the_horsemen_banter() {
        let mut instance = instance();
        let mut map = SandboxMap::new();
        spawn_creature(&mut instance, &mut map, npc::THANE);
        instance.set_data(&mut map, EncounterId::Gothik, EncounterStatus::Done);
        map.take_effects();

        instance.update(&mut map, 10_000);
        assert!(map.effects().contains(&MapEffect::Text {
            text_id: SAY_KORT_TAUNT1,
            speaker: npc::THANE,
            simulated: false,
        }));
    }

    #[test]
    fn sapphiron_special_is_saved_and_respawns_after_delay() {
        let mut instance = instance();
        let mut map = SandboxMap::new();
        map.add_player(Location::default());

        instance.set_data(&mut map, EncounterId::Sapphiron, EncounterStatus::Special);
        assert_eq!(map.saved_data(), Some("0 0 0 0 0 0 0 0 0 0 0 0 0 4 0 0"));

        map.take_effects();
        instance.update(&mut map, 21_999);
        assert!(!map
            .effects()
            .iter()
            .any(|e| matches!(e, MapEffect::Summoned { entry, .. } if *entry == npc::SAPPHIRON)));
        instance.update(&mut map, 1);
        assert!(map.effects().iter().any(|e| matches!(
            e,
            MapEffect::Summoned { entry, at, .. } if *entry == npc::SAPPHIRON && *at == SAPPHIRON_SPAWN
        )));
    }

    #[test]
    fn sapphiron_done_opens_waterfall_and_starts_lich_king_dialogue() {
        let mut instance = instance();
        let mut map = SandboxMap::new();
        let waterfall = spawn_door(&mut instance, &mut map, go::KELTHUZAD_WATERFALL_DOOR);
        instance.set_data(&mut map, EncounterId::Sapphiron, EncounterStatus::Done);
        assert_eq!(map.is_door_open(waterfall), Some(true));

        map.take_effects();
        instance.update(&mut map, 10_000);
        assert!(map.effects().iter().any(|e| matches!(
            e,
            MapEffect::Text { text_id, .. } if *text_id == SAY_SAPP_DIALOG1
        )));
    }

    #[test]
    fn entering_player_brings_back_missing_sapphiron() {
        let mut instance = instance();
        let mut map = SandboxMap::new();
        assert!(instance.load(Some("3 3 3 3 3 3 3 3 3 3 3 3 3 4 0 0")));
        let player = map.add_player(Location::default());

        instance.on_player_enter(&mut map, &player);
        let summons = |map: &SandboxMap| {
            map.effects()
                .iter()
                .filter(|e| matches!(e, MapEffect::Summoned { entry, .. } if *entry == npc::SAPPHIRON))
                .count()
        };
        assert_eq!(summons(&map), 1);

        // Once the engine reports the spawn, later entries leave it alone.
        spawn_creature(&mut instance, &mut map, npc::SAPPHIRON);
        instance.on_player_enter(&mut map, &player);
        assert_eq!(summons(&map), 1);
    }

    #[test]
    fn kelthuzad_engage_opens_trigger_then_despawns_it() {
        let mut instance = instance();
        let mut map = SandboxMap::new();
        let trigger = spawn_door(&mut instance, &mut map, go::KELTHUZAD_TRIGGER);
        let exit = spawn_door(&mut instance, &mut map, go::KELTHUZAD_EXIT_DOOR);
        instance.set_special_achievement_criteria(SpecialAchievement::GetEnough, true);

        instance.set_data(&mut map, EncounterId::Kelthuzad, EncounterStatus::InProgress);
        assert!(!instance.check_achievement_criteria_meet(CRITERIA_GET_ENOUGH_N));
        assert_eq!(map.is_door_open(trigger), Some(true));
        assert_eq!(map.is_door_open(exit), Some(false));

        instance.update(&mut map, 5000);
        assert_eq!(map.is_door_open(trigger), Some(false));
        assert_eq!(map.is_spawned(trigger), Some(false));
    }

    #[test]
    fn anub_done_despawns_scarabs_and_starts_maexxna_timer() {
        let mut instance = instance();
        let mut map = SandboxMap::new();
        let scarab = spawn_creature(&mut instance, &mut map, npc::CORPSE_SCARAB);

        instance.set_data(&mut map, EncounterId::AnubRekhan, EncounterStatus::Done);
        assert!(map.effects().contains(&MapEffect::ForcedDespawn {
            guid: scarab.guid,
            after_ms: 0,
        }));
        assert!(map.effects().contains(&MapEffect::TimedAchievement {
            criteria_type: ACHIEVEMENT_CRITERIA_TYPE_KILL_CREATURE,
            start_id: TIMED_START_MAEXXNA,
        }));
    }

    #[test]
    fn patchwerk_engage_starts_timed_achievement() {
        let mut instance = instance();
        let mut map = SandboxMap::new();
        instance.set_data(&mut map, EncounterId::Patchwerk, EncounterStatus::InProgress);
        assert_eq!(
            map.effects(),
            &[MapEffect::TimedAchievement {
                criteria_type: ACHIEVEMENT_CRITERIA_TYPE_KILL_CREATURE,
                start_id: TIMED_START_PATCHWERK,
            }]
        );
    }

    #[test]
    fn loatheb_done_clears_heigan_backroom() {
        let mut instance = instance();
        let mut map = SandboxMap::new();
        let maggot = spawn_creature(&mut instance, &mut map, npc::ROTTING_MAGGOT);
        instance.set_data(&mut map, EncounterId::Loatheb, EncounterStatus::Done);
        assert!(map.effects().contains(&MapEffect::ForcedDespawn {
            guid: maggot.guid,
            after_ms: 0,
        }));
        assert_eq!(map.creature_entry(maggot.guid), None);
    }

    #[test]
    fn player_death_during_a_fight_fails_the_no_death_run() {
        let mut instance = instance();
        let mut map = SandboxMap::new();
        let player = map.add_player(Location::default());
        all_done_before_kelthuzad(&mut instance, &mut map);
        assert!(instance.check_achievement_criteria_meet(CRITERIA_IMMORTAL_KELTHUZAD));

        // Dying outside a fight does not count.
        instance.on_player_death(&mut map, &player);
        assert!(instance.check_achievement_criteria_meet(CRITERIA_UNDYING_MAEXXNA));

        instance.set_data(&mut map, EncounterId::Kelthuzad, EncounterStatus::InProgress);
        instance.on_player_death(&mut map, &player);
        assert_eq!(instance.get_data(EncounterId::UndyingFailed), EncounterStatus::Done);
        assert!(!instance.check_achievement_criteria_meet(CRITERIA_IMMORTAL_KELTHUZAD));
        assert_eq!(map.saved_data(), Some("3 3 3 3 3 3 3 3 3 3 3 3 3 3 1 3"));
    }

    #[test]
    fn heigan_death_clears_safety_dance() {
        let mut instance = instance();
        let mut map = SandboxMap::new();
        let player = map.add_player(Location::default());
        instance.set_data(&mut map, EncounterId::Heigan, EncounterStatus::InProgress);
        assert!(instance.check_achievement_criteria_meet(CRITERIA_SAFETY_DANCE_N));
        instance.on_player_death(&mut map, &player);
        assert!(!instance.check_achievement_criteria_meet(CRITERIA_SAFETY_DANCE_N));
    }

    #[test]
    fn load_normalizes_fights_in_progress() {
        let mut instance = instance();
        assert!(instance.load(Some("3 1 0 0 0 0 0 4 0 0 0 0 0 4 0 0")));
        assert_eq!(instance.get_data(EncounterId::AnubRekhan), EncounterStatus::Done);
        assert_eq!(instance.get_data(EncounterId::Faerlina), EncounterStatus::NotStarted);
        assert_eq!(instance.get_data(EncounterId::Gothik), EncounterStatus::Special);
        assert_eq!(instance.save(), "3 0 0 0 0 0 0 4 0 0 0 0 0 4 0 0");
        assert!(instance.is_encounter_in_progress());
    }

    #[test]
    fn bad_snapshots_leave_defaults() {
        let mut instance = instance();
        assert!(!instance.load(None));
        assert!(instance.load(Some("3 3")));
        assert!(!instance.load(Some("3 x 3")));
        assert!(instance.encounters().iter().all(|s| *s == EncounterStatus::NotStarted));
    }

    #[test]
    fn failed_load_does_not_keep_the_previous_blob() {
        let mut instance = instance();
        assert!(instance.load(Some("3 3")));
        assert_eq!(instance.save(), "3 3 0 0 0 0 0 0 0 0 0 0 0 0 0 0");

        assert!(!instance.load(Some("3 x 3")));
        assert_eq!(instance.save(), "0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0");
    }

    #[test]
    fn objects_spawning_after_completion_take_final_state() {
        let mut instance = instance();
        let mut map = SandboxMap::new();
        instance.load(Some("3 0 3 0 0 0 0 0 0 0 0 0 3 0 0 0"));

        let gate = spawn_door(&mut instance, &mut map, go::ARAC_ANUB_GATE);
        let tesla = spawn_door(&mut instance, &mut map, go::CONS_NOX_TESLA_FEUGEN);
        let portal = spawn_object(&mut instance, &mut map, go::ARAC_PORTAL, GameObjectType::Generic);
        let locked = spawn_door(&mut instance, &mut map, go::ARAC_FAER_DOOR);

        assert_eq!(map.is_door_open(gate), Some(true));
        assert_eq!(map.is_door_open(tesla), Some(false));
        assert_eq!(map.is_no_interact(portal), Some(false));
        assert_eq!(map.is_door_open(locked), Some(false));
        assert_eq!(map.saved_data(), None);
    }

    #[test]
    fn living_poison_needs_a_player() {
        let mut instance = instance();
        let mut map = SandboxMap::new();
        instance.update(&mut map, 5000);
        assert!(map.effects().is_empty());

        map.add_player(Location::default());
        instance.update(&mut map, 5000);
        let summoned: Vec<_> = map
            .effects()
            .iter()
            .filter_map(|e| match e {
                MapEffect::Summoned { guid, entry, .. } if *entry == npc::LIVING_POISON => Some(*guid),
                _ => None,
            })
            .collect();
        assert_eq!(summoned.len(), 3);
        assert!(map.effects().contains(&MapEffect::Moved {
            guid: summoned[0],
            to: LIVING_POISON_PATHS[3],
        }));
        assert!(map.effects().contains(&MapEffect::ForcedDespawn {
            guid: summoned[2],
            after_ms: 15_000,
        }));
        assert_eq!(instance.timers().remaining(InstanceTimer::LivingPoison), 5000);
    }

    #[test]
    fn screams_repeat_with_jitter() {
        let mut instance = instance();
        let mut map = SandboxMap::new();
        map.add_player(Location::default());

        for _ in 0..5 {
            let wait = instance.timers().remaining(InstanceTimer::Screams);
            map.take_effects();
            instance.update(&mut map, wait);
            let sounds: Vec<u32> = map
                .effects()
                .iter()
                .filter_map(|e| match e {
                    MapEffect::Sound { sound_id } => Some(*sound_id),
                    _ => None,
                })
                .collect();
            assert_eq!(sounds.len(), 1);
            assert!((SOUND_SCREAM_FIRST..SOUND_SCREAM_FIRST + 4).contains(&sounds[0]));
            let next = instance.timers().remaining(InstanceTimer::Screams);
            assert!((120_000..=150_000).contains(&next));
            assert_eq!(next % 1000, 0);
        }
    }

    #[test]
    fn oversized_scream_jitter_saturates() {
        let tuning = InstanceTuning::parse("scream_jitter_secs: 4294967295\nscream_interval_ms: 1\n")
            .expect("tuning");
        let mut instance = NaxxramasInstance::new(tuning, SEED);
        let mut map = SandboxMap::new();
        map.add_player(Location::default());

        for _ in 0..5 {
            let wait = instance.timers().remaining(InstanceTimer::Screams);
            map.take_effects();
            instance.update(&mut map, wait);
            let sounds = map
                .effects()
                .iter()
                .filter(|e| matches!(e, MapEffect::Sound { .. }))
                .count();
            assert_eq!(sounds, 1);
            assert!(instance.timers().is_active(InstanceTimer::Screams));
        }
    }

    #[test]
    fn screams_stop_once_thaddius_is_dead() {
        let mut instance = instance();
        let mut map = SandboxMap::new();
        map.add_player(Location::default());
        instance.set_data(&mut map, EncounterId::Thaddius, EncounterStatus::Done);
        map.take_effects();

        instance.update(&mut map, 200_000);
        assert!(!map.effects().iter().any(|e| matches!(e, MapEffect::Sound { .. })));
        assert_eq!(instance.timers().remaining(InstanceTimer::Screams), 120_000);
    }

    #[test]
    fn zombie_chow_only_charges_a_living_gluth() {
        let mut instance = instance();
        let mut map = SandboxMap::new();
        let gluth = spawn_creature(&mut instance, &mut map, npc::GLUTH);
        let chow = spawn_creature(&mut instance, &mut map, npc::ZOMBIE_CHOW);

        instance.on_creature_respawn(&mut map, &chow);
        assert!(map.effects().contains(&MapEffect::Attack {
            attacker: chow.guid,
            victim: gluth.guid,
            threat: 2000.0,
        }));

        map.take_effects();
        map.kill_creature(gluth.guid);
        instance.on_creature_respawn(&mut map, &chow);
        assert!(map.effects().is_empty());
    }

    #[test]
    fn gothik_hears_about_his_adds() {
        let mut instance = instance();
        let mut map = SandboxMap::new();
        let gothik = spawn_creature(&mut instance, &mut map, npc::GOTHIK);
        let add = spawn_creature(&mut instance, &mut map, npc::SPECTRAL_RIDER);

        instance.on_creature_respawn(&mut map, &add);
        instance.on_creature_death(&mut map, &add);
        assert_eq!(
            map.effects(),
            &[
                MapEffect::AiNotified {
                    boss: gothik.guid,
                    notification: AiNotification::JustSummoned(add.guid),
                },
                MapEffect::AiNotified {
                    boss: gothik.guid,
                    notification: AiNotification::SummonedCreatureDied(add.guid),
                },
            ]
        );
    }

    #[test]
    fn cat_death_angers_kelthuzad_until_he_is_dead() {
        let mut instance = instance();
        let mut map = SandboxMap::new();
        let cat = map.spawn_creature(npc::MR_BIGGLESWORTH, Location::default());
        instance.on_creature_death(&mut map, &cat);
        assert_eq!(map.take_effects().len(), 1);

        instance.set_data(&mut map, EncounterId::Kelthuzad, EncounterStatus::Done);
        map.take_effects();
        instance.on_creature_death(&mut map, &cat);
        assert!(map.effects().is_empty());
    }

    #[test]
    fn toxic_tunnel_never_enters_combat() {
        let mut instance = instance();
        let mut map = SandboxMap::new();
        let tunnel = spawn_creature(&mut instance, &mut map, npc::TOXIC_TUNNEL);
        assert_eq!(
            map.effects(),
            &[MapEffect::CombatToggled {
                guid: tunnel.guid,
                can_enter: false,
            }]
        );
    }

    #[test]
    fn heigan_traps_fire_by_zone() {
        let mut instance = instance();
        let mut map = SandboxMap::new();
        let trap = spawn_object(&mut instance, &mut map, GameObjectEntry(181532), GameObjectType::Trap);
        let heigan = ObjectGuid(500);

        instance.trigger_heigan_traps(&mut map, heigan, 0);
        instance.trigger_heigan_traps(&mut map, heigan, 7);
        assert!(map.effects().is_empty());
        instance.trigger_heigan_traps(&mut map, heigan, 2);
        assert_eq!(map.effects(), &[MapEffect::TrapUsed { trap, user: heigan }]);
    }

    #[test]
    fn gothik_side_check_uses_the_combat_gate() {
        let mut instance = instance();
        let mut map = SandboxMap::new();
        let probe = Location::point(2690.0, -3330.0, 267.0);
        assert!(instance.is_in_right_side_gothik_area(&map, probe));

        let gate = map.spawn_game_object(
            go::MILI_GOTH_COMBAT_GATE,
            GameObjectType::Door,
            Location::point(2691.0, -3335.0, 267.0),
        );
        instance.on_object_create(&mut map, &gate);
        assert!(!instance.is_in_right_side_gothik_area(&map, probe));
        assert!(instance.is_in_right_side_gothik_area(&map, Location::point(2690.0, -3340.0, 267.0)));
    }

    #[test]
    fn chamber_center_round_trips() {
        let mut instance = instance();
        let center = Location::point(3716.0, -5106.0, 141.0);
        instance.set_chamber_center(center);
        assert_eq!(instance.chamber_center(), center);
    }
}
