use crate::entities::creature::{CreatureEntry, CreatureInfo, PlayerInfo};
use crate::entities::game_object::{GameObjectEntry, GameObjectInfo, GameObjectType};
use crate::entities::guid::ObjectGuid;
use crate::world::instance_map::{AiNotification, DespawnPolicy, InstanceMap, UnitState};
use crate::world::position::Location;
use std::collections::HashMap;

/// Something the coordinator asked the map to do.
#[derive(Debug, Clone, PartialEq)]
pub enum MapEffect {
    DoorSet { guid: ObjectGuid, open: bool },
    NoInteract { guid: ObjectGuid, no_interact: bool },
    GameObjectRespawn { guid: ObjectGuid, delay_secs: u32 },
    GameObjectDespawn { guid: ObjectGuid },
    TrapUsed { trap: ObjectGuid, user: ObjectGuid },
    Summoned { guid: ObjectGuid, entry: CreatureEntry, at: Location, policy: DespawnPolicy },
    Moved { guid: ObjectGuid, to: Location },
    ForcedDespawn { guid: ObjectGuid, after_ms: u32 },
    CombatToggled { guid: ObjectGuid, can_enter: bool },
    Attack { attacker: ObjectGuid, victim: ObjectGuid, threat: f32 },
    ZoneCombat { guid: ObjectGuid },
    AiNotified { boss: ObjectGuid, notification: AiNotification },
    Sound { sound_id: u32 },
    Text { text_id: i32, speaker: CreatureEntry, simulated: bool },
    TimedAchievement { criteria_type: u32, start_id: u32 },
    Saved { data: String },
}

#[derive(Debug, Clone, Copy)]
struct SandboxCreature {
    entry: CreatureEntry,
    location: Location,
    is_alive: bool,
}

#[derive(Debug, Clone, Copy)]
struct SandboxObject {
    location: Location,
    open: bool,
    no_interact: bool,
    spawned: bool,
}

/// In-memory map that records every effect it is asked to perform.
///
/// Used by the replay tool and the coordinator tests in place of a live
/// engine. Calls against unknown guids return `false` and record nothing.
#[derive(Debug)]
pub struct SandboxMap {
    creatures: HashMap<ObjectGuid, SandboxCreature>,
    objects: HashMap<ObjectGuid, SandboxObject>,
    players: HashMap<ObjectGuid, PlayerInfo>,
    regular_difficulty: bool,
    next_guid: u64,
    effects: Vec<MapEffect>,
    saved: Option<String>,
}

impl Default for SandboxMap {
    fn default() -> Self {
        Self::new()
    }
}

impl SandboxMap {
    pub fn new() -> Self {
        Self {
            creatures: HashMap::new(),
            objects: HashMap::new(),
            players: HashMap::new(),
            regular_difficulty: true,
            next_guid: 1,
            effects: Vec::new(),
            saved: None,
        }
    }

    pub fn set_regular_difficulty(&mut self, regular: bool) {
        self.regular_difficulty = regular;
    }

    fn allocate_guid(&mut self) -> ObjectGuid {
        let guid = ObjectGuid(self.next_guid);
        self.next_guid += 1;
        guid
    }

    pub fn add_player(&mut self, location: Location) -> PlayerInfo {
        let player = PlayerInfo {
            guid: self.allocate_guid(),
            location,
            is_alive: true,
            is_game_master: false,
        };
        self.players.insert(player.guid, player);
        player
    }

    pub fn spawn_creature(&mut self, entry: CreatureEntry, location: Location) -> CreatureInfo {
        let guid = self.allocate_guid();
        self.creatures.insert(
            guid,
            SandboxCreature {
                entry,
                location,
                is_alive: true,
            },
        );
        CreatureInfo {
            guid,
            entry,
            location,
        }
    }

    pub fn spawn_game_object(
        &mut self,
        entry: GameObjectEntry,
        go_type: GameObjectType,
        location: Location,
    ) -> GameObjectInfo {
        let guid = self.allocate_guid();
        self.objects.insert(
            guid,
            SandboxObject {
                location,
                open: false,
                no_interact: matches!(go_type, GameObjectType::Generic),
                spawned: true,
            },
        );
        GameObjectInfo {
            guid,
            entry,
            go_type,
            location,
        }
    }

    pub fn kill_creature(&mut self, guid: ObjectGuid) -> bool {
        match self.creatures.get_mut(&guid) {
            Some(creature) => {
                creature.is_alive = false;
                true
            }
            None => false,
        }
    }

    pub fn creature_entry(&self, guid: ObjectGuid) -> Option<CreatureEntry> {
        self.creatures.get(&guid).map(|creature| creature.entry)
    }

    pub fn is_door_open(&self, guid: ObjectGuid) -> Option<bool> {
        self.objects.get(&guid).map(|object| object.open)
    }

    pub fn is_no_interact(&self, guid: ObjectGuid) -> Option<bool> {
        self.objects.get(&guid).map(|object| object.no_interact)
    }

    pub fn is_spawned(&self, guid: ObjectGuid) -> Option<bool> {
        self.objects.get(&guid).map(|object| object.spawned)
    }

    pub fn saved_data(&self) -> Option<&str> {
        self.saved.as_deref()
    }

    pub fn effects(&self) -> &[MapEffect] {
        &self.effects
    }

    pub fn take_effects(&mut self) -> Vec<MapEffect> {
        std::mem::take(&mut self.effects)
    }
}

impl InstanceMap for SandboxMap {
    fn creature_state(&self, guid: ObjectGuid) -> Option<UnitState> {
        self.creatures.get(&guid).map(|creature| UnitState {
            location: creature.location,
            is_alive: creature.is_alive,
        })
    }

    fn game_object_location(&self, guid: ObjectGuid) -> Option<Location> {
        self.objects.get(&guid).map(|object| object.location)
    }

    fn has_player(&self) -> bool {
        !self.players.is_empty()
    }

    fn is_regular_difficulty(&self) -> bool {
        self.regular_difficulty
    }

    fn set_door_open(&mut self, guid: ObjectGuid, open: bool) -> bool {
        let Some(object) = self.objects.get_mut(&guid) else {
            return false;
        };
        object.open = open;
        self.effects.push(MapEffect::DoorSet { guid, open });
        true
    }

    fn set_no_interact(&mut self, guid: ObjectGuid, no_interact: bool) -> bool {
        let Some(object) = self.objects.get_mut(&guid) else {
            return false;
        };
        object.no_interact = no_interact;
        self.effects.push(MapEffect::NoInteract { guid, no_interact });
        true
    }

    fn respawn_game_object(&mut self, guid: ObjectGuid, respawn_delay_secs: u32) -> bool {
        let Some(object) = self.objects.get_mut(&guid) else {
            return false;
        };
        object.spawned = true;
        self.effects.push(MapEffect::GameObjectRespawn {
            guid,
            delay_secs: respawn_delay_secs,
        });
        true
    }

    fn despawn_game_object(&mut self, guid: ObjectGuid) -> bool {
        let Some(object) = self.objects.get_mut(&guid) else {
            return false;
        };
        object.spawned = false;
        self.effects.push(MapEffect::GameObjectDespawn { guid });
        true
    }

    fn use_trap(&mut self, trap: ObjectGuid, user: ObjectGuid) -> bool {
        if !self.objects.contains_key(&trap) {
            return false;
        }
        self.effects.push(MapEffect::TrapUsed { trap, user });
        true
    }

    fn summon_creature(
        &mut self,
        entry: CreatureEntry,
        at: Location,
        policy: DespawnPolicy,
    ) -> Option<ObjectGuid> {
        if self.players.is_empty() {
            return None;
        }
        let guid = self.spawn_creature(entry, at).guid;
        self.effects.push(MapEffect::Summoned {
            guid,
            entry,
            at,
            policy,
        });
        Some(guid)
    }

    fn move_creature_to(&mut self, guid: ObjectGuid, to: Location) -> bool {
        let Some(creature) = self.creatures.get_mut(&guid) else {
            return false;
        };
        creature.location = to;
        self.effects.push(MapEffect::Moved { guid, to });
        true
    }

    fn force_despawn_creature(&mut self, guid: ObjectGuid, after_ms: u32) -> bool {
        if !self.creatures.contains_key(&guid) {
            return false;
        }
        if after_ms == 0 {
            self.creatures.remove(&guid);
        }
        self.effects.push(MapEffect::ForcedDespawn { guid, after_ms });
        true
    }

    fn set_can_enter_combat(&mut self, guid: ObjectGuid, can_enter: bool) -> bool {
        if !self.creatures.contains_key(&guid) {
            return false;
        }
        self.effects.push(MapEffect::CombatToggled { guid, can_enter });
        true
    }

    fn attack_with_threat(&mut self, attacker: ObjectGuid, victim: ObjectGuid, threat: f32) -> bool {
        if !self.creatures.contains_key(&attacker) || !self.creatures.contains_key(&victim) {
            return false;
        }
        self.effects.push(MapEffect::Attack {
            attacker,
            victim,
            threat,
        });
        true
    }

    fn set_in_combat_with_zone(&mut self, guid: ObjectGuid) -> bool {
        if !self.creatures.contains_key(&guid) {
            return false;
        }
        self.effects.push(MapEffect::ZoneCombat { guid });
        true
    }

    fn notify_ai(&mut self, boss: ObjectGuid, notification: AiNotification) -> bool {
        if !self.creatures.contains_key(&boss) {
            return false;
        }
        self.effects.push(MapEffect::AiNotified { boss, notification });
        true
    }

    fn play_sound_to_map(&mut self, sound_id: u32) {
        self.effects.push(MapEffect::Sound { sound_id });
    }

    fn say_text(&mut self, text_id: i32, speaker: CreatureEntry, speaker_guid: Option<ObjectGuid>) {
        let simulated = speaker_guid
            .map(|guid| !self.creatures.contains_key(&guid))
            .unwrap_or(true);
        self.effects.push(MapEffect::Text {
            text_id,
            speaker,
            simulated,
        });
    }

    fn start_timed_achievement(&mut self, criteria_type: u32, start_id: u32) {
        self.effects.push(MapEffect::TimedAchievement {
            criteria_type,
            start_id,
        });
    }

    fn save_instance_data(&mut self, data: &str) {
        self.saved = Some(data.to_string());
        self.effects.push(MapEffect::Saved {
            data: data.to_string(),
        });
    }
}
