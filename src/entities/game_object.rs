use crate::entities::guid::ObjectGuid;
use crate::world::position::Location;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GameObjectEntry(pub u32);

// Arachnid Quarter
pub const ARAC_ANUB_DOOR: GameObjectEntry = GameObjectEntry(181126);
pub const ARAC_ANUB_GATE: GameObjectEntry = GameObjectEntry(181195);
pub const ARAC_FAER_WEB: GameObjectEntry = GameObjectEntry(181235);
pub const ARAC_FAER_DOOR: GameObjectEntry = GameObjectEntry(194022);
pub const ARAC_MAEX_INNER_DOOR: GameObjectEntry = GameObjectEntry(181197);
pub const ARAC_MAEX_OUTER_DOOR: GameObjectEntry = GameObjectEntry(181209);

// Plague Quarter
pub const PLAG_NOTH_ENTRY_DOOR: GameObjectEntry = GameObjectEntry(181200);
pub const PLAG_NOTH_EXIT_DOOR: GameObjectEntry = GameObjectEntry(181201);
pub const PLAG_HEIG_ENTRY_DOOR: GameObjectEntry = GameObjectEntry(181202);
pub const PLAG_HEIG_EXIT_DOOR: GameObjectEntry = GameObjectEntry(181203);
pub const PLAG_LOAT_DOOR: GameObjectEntry = GameObjectEntry(181241);

// Military Quarter
pub const MILI_GOTH_ENTRY_GATE: GameObjectEntry = GameObjectEntry(181124);
pub const MILI_GOTH_EXIT_GATE: GameObjectEntry = GameObjectEntry(181125);
pub const MILI_GOTH_COMBAT_GATE: GameObjectEntry = GameObjectEntry(181170);
pub const MILI_HORSEMEN_DOOR: GameObjectEntry = GameObjectEntry(181119);
pub const CHEST_HORSEMEN_NORMAL: GameObjectEntry = GameObjectEntry(181366);
pub const CHEST_HORSEMEN_HEROIC: GameObjectEntry = GameObjectEntry(193426);

// Construct Quarter
pub const CONS_PATCH_EXIT_DOOR: GameObjectEntry = GameObjectEntry(181123);
pub const CONS_GLUTH_EXIT_DOOR: GameObjectEntry = GameObjectEntry(181120);
pub const CONS_THAD_DOOR: GameObjectEntry = GameObjectEntry(181121);
pub const CONS_NOX_TESLA_FEUGEN: GameObjectEntry = GameObjectEntry(181477);
pub const CONS_NOX_TESLA_STALAGG: GameObjectEntry = GameObjectEntry(181478);

// Frostwyrm Lair
pub const KELTHUZAD_WATERFALL_DOOR: GameObjectEntry = GameObjectEntry(181225);
pub const KELTHUZAD_EXIT_DOOR: GameObjectEntry = GameObjectEntry(181228);
pub const KELTHUZAD_TRIGGER: GameObjectEntry = GameObjectEntry(181444);
pub const KELTHUZAD_WINDOW_1: GameObjectEntry = GameObjectEntry(181402);
pub const KELTHUZAD_WINDOW_2: GameObjectEntry = GameObjectEntry(181403);
pub const KELTHUZAD_WINDOW_3: GameObjectEntry = GameObjectEntry(181404);
pub const KELTHUZAD_WINDOW_4: GameObjectEntry = GameObjectEntry(181405);

// Eyes
pub const ARAC_EYE_RAMP: GameObjectEntry = GameObjectEntry(181212);
pub const PLAG_EYE_RAMP: GameObjectEntry = GameObjectEntry(181211);
pub const MILI_EYE_RAMP: GameObjectEntry = GameObjectEntry(181210);
pub const CONS_EYE_RAMP: GameObjectEntry = GameObjectEntry(181213);
pub const ARAC_EYE_BOSS: GameObjectEntry = GameObjectEntry(181233);
pub const PLAG_EYE_BOSS: GameObjectEntry = GameObjectEntry(181231);
pub const MILI_EYE_BOSS: GameObjectEntry = GameObjectEntry(181230);
pub const CONS_EYE_BOSS: GameObjectEntry = GameObjectEntry(181232);

// Portals
pub const ARAC_PORTAL: GameObjectEntry = GameObjectEntry(181575);
pub const PLAG_PORTAL: GameObjectEntry = GameObjectEntry(181577);
pub const MILI_PORTAL: GameObjectEntry = GameObjectEntry(181578);
pub const CONS_PORTAL: GameObjectEntry = GameObjectEntry(181576);

pub const HEIGAN_TRAP_AREAS: usize = 4;

const TRACKED_SINGLE: &[GameObjectEntry] = &[
    ARAC_ANUB_DOOR,
    ARAC_ANUB_GATE,
    ARAC_FAER_WEB,
    ARAC_FAER_DOOR,
    ARAC_MAEX_INNER_DOOR,
    ARAC_MAEX_OUTER_DOOR,
    PLAG_NOTH_ENTRY_DOOR,
    PLAG_NOTH_EXIT_DOOR,
    PLAG_HEIG_ENTRY_DOOR,
    PLAG_HEIG_EXIT_DOOR,
    PLAG_LOAT_DOOR,
    MILI_GOTH_ENTRY_GATE,
    MILI_GOTH_EXIT_GATE,
    MILI_GOTH_COMBAT_GATE,
    MILI_HORSEMEN_DOOR,
    CHEST_HORSEMEN_NORMAL,
    CHEST_HORSEMEN_HEROIC,
    CONS_PATCH_EXIT_DOOR,
    CONS_GLUTH_EXIT_DOOR,
    CONS_THAD_DOOR,
    CONS_NOX_TESLA_FEUGEN,
    CONS_NOX_TESLA_STALAGG,
    KELTHUZAD_WATERFALL_DOOR,
    KELTHUZAD_EXIT_DOOR,
    KELTHUZAD_TRIGGER,
    KELTHUZAD_WINDOW_1,
    KELTHUZAD_WINDOW_2,
    KELTHUZAD_WINDOW_3,
    KELTHUZAD_WINDOW_4,
    ARAC_EYE_RAMP,
    PLAG_EYE_RAMP,
    MILI_EYE_RAMP,
    CONS_EYE_RAMP,
    ARAC_EYE_BOSS,
    PLAG_EYE_BOSS,
    MILI_EYE_BOSS,
    CONS_EYE_BOSS,
    ARAC_PORTAL,
    PLAG_PORTAL,
    MILI_PORTAL,
    CONS_PORTAL,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameObjectType {
    #[default]
    Door,
    Button,
    Chest,
    Trap,
    Generic,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameObjectInfo {
    pub guid: ObjectGuid,
    pub entry: GameObjectEntry,
    pub go_type: GameObjectType,
    pub location: Location,
}

impl GameObjectEntry {
    pub fn is_tracked_single(self) -> bool {
        TRACKED_SINGLE.contains(&self)
    }

    /// Heigan's floor is split into four eruption zones; each trap entry
    /// belongs to exactly one of them.
    pub fn heigan_trap_area(self) -> Option<usize> {
        match self.0 {
            181517..=181524 | 181678 => Some(0),
            181510..=181516 | 181525..=181531 | 181533 | 181676 => Some(1),
            181534..=181544 | 181532 | 181677 => Some(2),
            181545..=181552 | 181695 => Some(3),
            _ => None,
        }
    }
}
