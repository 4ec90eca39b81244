use crate::entities::creature::{self as npc, CreatureEntry, CreatureInfo};
use crate::entities::game_object::{GameObjectEntry, GameObjectInfo, GameObjectType, HEIGAN_TRAP_AREAS};
use crate::entities::guid::ObjectGuid;
use std::collections::HashMap;

// Old-world triggers inside Gluth's room mark where zombie chow spawn.
const GLUTH_ROOM_MIN_X: f32 = 3250.0;
const GLUTH_ROOM_MAX_X: f32 = 3322.0;
const GLUTH_ROOM_MIN_Y: f32 = -3190.0;
const GLUTH_ROOM_MAX_Y: f32 = -3115.0;

/// What the registry did with a newly created creature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreatureRole {
    Boss,
    TeslaCoil,
    CorpseScarab,
    HeiganBackroomAdd,
    GluthTrigger,
    ToxicTunnel,
    Untracked,
}

/// What the registry did with a newly created game object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameObjectRole {
    Single,
    HeiganTrap(usize),
    Untracked,
}

/// Guids of the creatures and game objects the instance cares about.
///
/// Filled as the map spawns its contents; entries are never removed except
/// for the add lists that get despawned as a group.
#[derive(Debug, Default)]
pub struct TrackedObjects {
    creatures: HashMap<CreatureEntry, ObjectGuid>,
    game_objects: HashMap<GameObjectEntry, ObjectGuid>,
    tesla_coils: Vec<ObjectGuid>,
    heigan_traps: [Vec<ObjectGuid>; HEIGAN_TRAP_AREAS],
    heigan_backroom_adds: Vec<ObjectGuid>,
    corpse_scarabs: Vec<ObjectGuid>,
    gluth_triggers: Vec<ObjectGuid>,
}

impl TrackedObjects {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_creature(&mut self, creature: &CreatureInfo) -> CreatureRole {
        let guid = creature.guid;
        match creature.entry {
            entry if entry.is_tracked_single() => {
                self.creatures.insert(entry, guid);
                CreatureRole::Boss
            }
            npc::TESLA_COIL => {
                self.tesla_coils.push(guid);
                CreatureRole::TeslaCoil
            }
            npc::TOXIC_TUNNEL => CreatureRole::ToxicTunnel,
            npc::CORPSE_SCARAB => {
                self.corpse_scarabs.push(guid);
                CreatureRole::CorpseScarab
            }
            npc::OLDWORLD_TRIGGER => {
                if creature.location.inside_xy(
                    GLUTH_ROOM_MIN_X,
                    GLUTH_ROOM_MAX_X,
                    GLUTH_ROOM_MIN_Y,
                    GLUTH_ROOM_MAX_Y,
                ) {
                    self.gluth_triggers.push(guid);
                    CreatureRole::GluthTrigger
                } else {
                    CreatureRole::Untracked
                }
            }
            entry if entry.is_heigan_backroom_add() => {
                self.heigan_backroom_adds.push(guid);
                CreatureRole::HeiganBackroomAdd
            }
            _ => CreatureRole::Untracked,
        }
    }

    pub fn register_game_object(&mut self, object: &GameObjectInfo) -> GameObjectRole {
        if object.entry.is_tracked_single() {
            self.game_objects.insert(object.entry, object.guid);
            return GameObjectRole::Single;
        }
        if object.go_type != GameObjectType::Trap {
            return GameObjectRole::Untracked;
        }
        match object.entry.heigan_trap_area() {
            Some(area) => {
                self.heigan_traps[area].push(object.guid);
                GameObjectRole::HeiganTrap(area)
            }
            None => GameObjectRole::Untracked,
        }
    }

    pub fn creature(&self, entry: CreatureEntry) -> Option<ObjectGuid> {
        self.creatures.get(&entry).copied()
    }

    pub fn game_object(&self, entry: GameObjectEntry) -> Option<ObjectGuid> {
        self.game_objects.get(&entry).copied()
    }

    /// Traps of one eruption zone; empty for zones outside `0..4`.
    pub fn heigan_traps(&self, area: usize) -> &[ObjectGuid] {
        self.heigan_traps
            .get(area)
            .map(|traps| traps.as_slice())
            .unwrap_or(&[])
    }

    pub fn tesla_coils(&self) -> &[ObjectGuid] {
        &self.tesla_coils
    }

    pub fn gluth_triggers(&self) -> &[ObjectGuid] {
        &self.gluth_triggers
    }

    pub fn take_corpse_scarabs(&mut self) -> Vec<ObjectGuid> {
        std::mem::take(&mut self.corpse_scarabs)
    }

    pub fn take_heigan_backroom_adds(&mut self) -> Vec<ObjectGuid> {
        std::mem::take(&mut self.heigan_backroom_adds)
    }
}
