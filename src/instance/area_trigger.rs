use crate::entities::creature::{self as npc, PlayerInfo};
use crate::instance::coordinator::NaxxramasInstance;
use crate::instance::dialogue::{SpokenLine, SAY_THADDIUS_GREET};
use crate::instance::status::{EncounterId, EncounterStatus};
use crate::world::instance_map::InstanceMap;
use crate::world::position::Location;

pub const AREATRIGGER_KELTHUZAD: u32 = 4112;
pub const AREATRIGGER_THADDIUS_DOOR: u32 = 4113;
pub const AREATRIGGER_FROSTWYRM_TELE: u32 = 4156;

/// Wing-end bosses that unlock the teleport to Sapphiron's lair.
const FROSTWYRM_GATE: [EncounterId; 4] = [
    EncounterId::Thaddius,
    EncounterId::Loatheb,
    EncounterId::Maexxna,
    EncounterId::FourHorsemen,
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AreaTrigger {
    pub id: u32,
    pub location: Location,
}

/// Handles a player stepping into one of the instance's area triggers.
/// Returns `true` when the trigger's default action must be blocked.
pub fn handle_area_trigger(
    instance: &mut NaxxramasInstance,
    map: &mut dyn InstanceMap,
    trigger: &AreaTrigger,
    player: &PlayerInfo,
) -> bool {
    match trigger.id {
        AREATRIGGER_KELTHUZAD => {
            if player.is_game_master || !player.is_alive {
                return false;
            }
            instance.set_chamber_center(trigger.location);
            if instance.get_data(EncounterId::Kelthuzad) != EncounterStatus::NotStarted {
                return false;
            }
            let Some(kelthuzad) = instance.creature_guid(npc::KELTHUZAD) else {
                return false;
            };
            let alive = map
                .creature_state(kelthuzad)
                .map(|state| state.is_alive)
                .unwrap_or(false);
            if alive {
                instance.set_data(map, EncounterId::Kelthuzad, EncounterStatus::InProgress);
                map.set_in_combat_with_zone(kelthuzad);
            }
            false
        }
        AREATRIGGER_THADDIUS_DOOR => {
            if instance.get_data(EncounterId::Thaddius) != EncounterStatus::NotStarted {
                return false;
            }
            let present = instance
                .creature_guid(npc::THADDIUS)
                .and_then(|guid| map.creature_state(guid))
                .is_some();
            if present {
                instance.set_data(map, EncounterId::Thaddius, EncounterStatus::Special);
                instance.speak(
                    map,
                    SpokenLine {
                        text_id: SAY_THADDIUS_GREET,
                        speaker: npc::THADDIUS,
                    },
                );
            }
            false
        }
        // The teleport itself is data driven; only the unlock is checked here.
        AREATRIGGER_FROSTWYRM_TELE => FROSTWYRM_GATE
            .iter()
            .any(|id| instance.get_data(*id) != EncounterStatus::Done),
        _ => false,
    }
}
