//! Offline encounter replays.
//!
//! A replay script is a YAML document listing engine events in order. The
//! runner feeds them to a fresh coordinator backed by a [`SandboxMap`] and
//! records what the coordinator asked the map to do after every event.

use crate::config::InstanceTuning;
use crate::entities::creature::{CreatureEntry, CreatureInfo, PlayerInfo};
use crate::entities::game_object::{GameObjectEntry, GameObjectType};
use crate::instance::area_trigger::{handle_area_trigger, AreaTrigger};
use crate::instance::coordinator::NaxxramasInstance;
use crate::instance::status::{EncounterId, EncounterStatus};
use crate::persistence::snapshot::EncounterTable;
use crate::world::position::Location;
use crate::world::sandbox::{MapEffect, SandboxMap};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

const DEFAULT_SEED: u64 = 0x4e41_5858;

#[derive(Debug, Clone, Deserialize)]
pub struct ReplayScript {
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub heroic: bool,
    /// Snapshot loaded before the first event, as after a server restart.
    #[serde(default)]
    pub snapshot: Option<String>,
    #[serde(default)]
    pub events: Vec<ReplayEvent>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ReplayEvent {
    AddPlayer {
        #[serde(default)]
        at: Location,
        #[serde(default)]
        game_master: bool,
    },
    SpawnCreature {
        entry: u32,
        #[serde(default)]
        at: Location,
        #[serde(default)]
        label: Option<String>,
    },
    SpawnObject {
        entry: u32,
        #[serde(default)]
        kind: GameObjectType,
        #[serde(default)]
        at: Location,
    },
    SetData {
        encounter: EncounterId,
        status: EncounterStatus,
    },
    Tick {
        ms: u32,
    },
    RespawnCreature {
        label: String,
    },
    KillCreature {
        label: String,
    },
    PlayerDeath,
    AreaTrigger {
        id: u32,
        #[serde(default)]
        at: Location,
    },
}

#[derive(Debug, Clone)]
pub struct ReplayStep {
    pub index: usize,
    pub event: String,
    pub effects: Vec<MapEffect>,
    /// Set for area triggers: whether the trigger was blocked.
    pub blocked: Option<bool>,
}

#[derive(Debug, Clone)]
pub struct ReplayReport {
    pub steps: Vec<ReplayStep>,
    pub encounters: EncounterTable,
    pub saved: Option<String>,
}

pub fn load_replay_script(path: &Path) -> Result<ReplayScript, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|err| format!("failed to read replay script {}: {}", path.display(), err))?;
    parse_replay_script(&content).map_err(|err| format!("replay script {}: {}", path.display(), err))
}

pub fn parse_replay_script(content: &str) -> Result<ReplayScript, String> {
    serde_yaml::from_str(content).map_err(|err| err.to_string())
}

struct ReplayRunner {
    instance: NaxxramasInstance,
    map: SandboxMap,
    players: Vec<PlayerInfo>,
    creatures: HashMap<String, CreatureInfo>,
}

pub fn run_replay(script: &ReplayScript, tuning: InstanceTuning) -> Result<ReplayReport, String> {
    let mut runner = ReplayRunner {
        instance: NaxxramasInstance::new(tuning, script.seed.unwrap_or(DEFAULT_SEED)),
        map: SandboxMap::new(),
        players: Vec::new(),
        creatures: HashMap::new(),
    };
    runner.map.set_regular_difficulty(!script.heroic);
    if let Some(snapshot) = &script.snapshot {
        if !runner.instance.load(Some(snapshot)) {
            return Err(format!("replay snapshot '{}' is invalid", snapshot));
        }
    }

    let mut steps = Vec::with_capacity(script.events.len());
    for (index, event) in script.events.iter().enumerate() {
        let blocked = runner
            .apply(event)
            .map_err(|err| format!("event {}: {}", index + 1, err))?;
        steps.push(ReplayStep {
            index: index + 1,
            event: describe(event),
            effects: runner.map.take_effects(),
            blocked,
        });
    }

    Ok(ReplayReport {
        steps,
        encounters: *runner.instance.encounters(),
        saved: runner.map.saved_data().map(str::to_string),
    })
}

impl ReplayRunner {
    fn apply(&mut self, event: &ReplayEvent) -> Result<Option<bool>, String> {
        match event {
            ReplayEvent::AddPlayer { at, game_master } => {
                let mut player = self.map.add_player(*at);
                player.is_game_master = *game_master;
                self.instance.on_player_enter(&mut self.map, &player);
                self.players.push(player);
            }
            ReplayEvent::SpawnCreature { entry, at, label } => {
                let creature = self.map.spawn_creature(CreatureEntry(*entry), *at);
                self.instance.on_creature_create(&mut self.map, &creature);
                if let Some(label) = label {
                    self.creatures.insert(label.clone(), creature);
                }
            }
            ReplayEvent::SpawnObject { entry, kind, at } => {
                let object = self.map.spawn_game_object(GameObjectEntry(*entry), *kind, *at);
                self.instance.on_object_create(&mut self.map, &object);
            }
            ReplayEvent::SetData { encounter, status } => {
                self.instance.set_data(&mut self.map, *encounter, *status);
            }
            ReplayEvent::Tick { ms } => self.instance.update(&mut self.map, *ms),
            ReplayEvent::RespawnCreature { label } => {
                let creature = self.creature(label)?;
                self.instance.on_creature_respawn(&mut self.map, &creature);
            }
            ReplayEvent::KillCreature { label } => {
                let creature = self.creature(label)?;
                self.map.kill_creature(creature.guid);
                self.instance.on_creature_death(&mut self.map, &creature);
            }
            ReplayEvent::PlayerDeath => {
                let player = self
                    .players
                    .iter_mut()
                    .find(|player| player.is_alive)
                    .ok_or_else(|| "no living player to kill".to_string())?;
                player.is_alive = false;
                let player = *player;
                self.instance.on_player_death(&mut self.map, &player);
            }
            ReplayEvent::AreaTrigger { id, at } => {
                let player = *self
                    .players
                    .first()
                    .ok_or_else(|| "area trigger needs a player".to_string())?;
                let trigger = AreaTrigger {
                    id: *id,
                    location: *at,
                };
                let blocked =
                    handle_area_trigger(&mut self.instance, &mut self.map, &trigger, &player);
                return Ok(Some(blocked));
            }
        }
        Ok(None)
    }

    fn creature(&self, label: &str) -> Result<CreatureInfo, String> {
        self.creatures
            .get(label)
            .copied()
            .ok_or_else(|| format!("unknown creature label '{}'", label))
    }
}

fn describe(event: &ReplayEvent) -> String {
    match event {
        ReplayEvent::AddPlayer { game_master, .. } if *game_master => "add game master".to_string(),
        ReplayEvent::AddPlayer { .. } => "add player".to_string(),
        ReplayEvent::SpawnCreature { entry, label, .. } => match label {
            Some(label) => format!("spawn creature {} ({})", entry, label),
            None => format!("spawn creature {}", entry),
        },
        ReplayEvent::SpawnObject { entry, .. } => format!("spawn object {}", entry),
        ReplayEvent::SetData { encounter, status } => format!("set {} {}", encounter, status),
        ReplayEvent::Tick { ms } => format!("tick {}ms", ms),
        ReplayEvent::RespawnCreature { label } => format!("respawn {}", label),
        ReplayEvent::KillCreature { label } => format!("kill {}", label),
        ReplayEvent::PlayerDeath => "player death".to_string(),
        ReplayEvent::AreaTrigger { id, .. } => format!("area trigger {}", id),
    }
}
