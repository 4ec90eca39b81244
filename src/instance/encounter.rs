//! Static per-encounter rules: which barriers an encounter drives, what it
//! unlocks when it is beaten, and how objects should look when they spawn
//! after the encounter was already completed.

use crate::entities::game_object::{self as go, GameObjectEntry};
use crate::instance::achievements::SpecialAchievement;
use crate::instance::status::{EncounterId, MAX_ENCOUNTER};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncounterRule {
    pub id: EncounterId,
    /// Barrier closed while the fight is in progress and open otherwise.
    pub entry_door: Option<GameObjectEntry>,
    /// Opened once the encounter is DONE.
    pub opens_on_done: &'static [GameObjectEntry],
    /// Wing-end portal respawned and made usable once the encounter is DONE.
    /// Beating a wing-end boss also provokes Kel'Thuzad.
    pub wing_portal: Option<GameObjectEntry>,
    /// Eligibility flag raised when the fight starts.
    pub engage_achievement: Option<SpecialAchievement>,
    /// Repeated calls with the stored status are ignored.
    pub ignore_repeats: bool,
}

impl EncounterRule {
    const fn plain(id: EncounterId) -> Self {
        Self {
            id,
            entry_door: None,
            opens_on_done: &[],
            wing_portal: None,
            engage_achievement: None,
            ignore_repeats: false,
        }
    }
}

pub const RULES: [EncounterRule; MAX_ENCOUNTER] = [
    EncounterRule {
        entry_door: Some(go::ARAC_ANUB_DOOR),
        opens_on_done: &[go::ARAC_ANUB_GATE],
        ..EncounterRule::plain(EncounterId::AnubRekhan)
    },
    EncounterRule {
        entry_door: Some(go::ARAC_FAER_WEB),
        opens_on_done: &[go::ARAC_FAER_DOOR, go::ARAC_MAEX_OUTER_DOOR],
        engage_achievement: Some(SpecialAchievement::KnockYouOut),
        ..EncounterRule::plain(EncounterId::Faerlina)
    },
    EncounterRule {
        entry_door: Some(go::ARAC_MAEX_INNER_DOOR),
        opens_on_done: &[go::ARAC_EYE_RAMP, go::ARAC_EYE_BOSS],
        wing_portal: Some(go::ARAC_PORTAL),
        ..EncounterRule::plain(EncounterId::Maexxna)
    },
    EncounterRule {
        entry_door: Some(go::PLAG_NOTH_ENTRY_DOOR),
        opens_on_done: &[go::PLAG_NOTH_EXIT_DOOR, go::PLAG_HEIG_ENTRY_DOOR],
        ..EncounterRule::plain(EncounterId::Noth)
    },
    EncounterRule {
        entry_door: Some(go::PLAG_HEIG_ENTRY_DOOR),
        opens_on_done: &[go::PLAG_HEIG_EXIT_DOOR],
        engage_achievement: Some(SpecialAchievement::SafetyDance),
        ..EncounterRule::plain(EncounterId::Heigan)
    },
    EncounterRule {
        entry_door: Some(go::PLAG_LOAT_DOOR),
        opens_on_done: &[go::PLAG_EYE_RAMP, go::PLAG_EYE_BOSS],
        wing_portal: Some(go::PLAG_PORTAL),
        engage_achievement: Some(SpecialAchievement::SporeLoser),
        ..EncounterRule::plain(EncounterId::Loatheb)
    },
    EncounterRule::plain(EncounterId::Razuvious),
    // Gothik's three gates depend on the fight phase and are driven by the
    // coordinator directly.
    EncounterRule::plain(EncounterId::Gothik),
    EncounterRule {
        entry_door: Some(go::MILI_HORSEMEN_DOOR),
        opens_on_done: &[go::MILI_EYE_RAMP, go::MILI_EYE_BOSS],
        wing_portal: Some(go::MILI_PORTAL),
        ignore_repeats: true,
        ..EncounterRule::plain(EncounterId::FourHorsemen)
    },
    EncounterRule {
        opens_on_done: &[go::CONS_PATCH_EXIT_DOOR],
        ..EncounterRule::plain(EncounterId::Patchwerk)
    },
    EncounterRule::plain(EncounterId::Grobbulus),
    EncounterRule {
        opens_on_done: &[go::CONS_GLUTH_EXIT_DOOR, go::CONS_THAD_DOOR],
        ..EncounterRule::plain(EncounterId::Gluth)
    },
    EncounterRule {
        entry_door: Some(go::CONS_THAD_DOOR),
        opens_on_done: &[go::CONS_EYE_RAMP, go::CONS_EYE_BOSS],
        wing_portal: Some(go::CONS_PORTAL),
        engage_achievement: Some(SpecialAchievement::Shocking),
        ignore_repeats: true,
        ..EncounterRule::plain(EncounterId::Thaddius)
    },
    EncounterRule {
        opens_on_done: &[go::KELTHUZAD_WATERFALL_DOOR],
        engage_achievement: Some(SpecialAchievement::HundredClub),
        ..EncounterRule::plain(EncounterId::Sapphiron)
    },
    EncounterRule {
        entry_door: Some(go::KELTHUZAD_EXIT_DOOR),
        ..EncounterRule::plain(EncounterId::Kelthuzad)
    },
    EncounterRule::plain(EncounterId::UndyingFailed),
];

pub fn rule(id: EncounterId) -> &'static EncounterRule {
    &RULES[id.index()]
}

/// How an object must be presented when it spawns after its gating
/// encounter is already DONE (e.g. after a server restart).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnAppearance {
    Open,
    Closed,
    Interactable,
}

pub fn spawn_appearance(entry: GameObjectEntry) -> Option<(EncounterId, SpawnAppearance)> {
    use SpawnAppearance::{Closed, Interactable, Open};
    let gate = match entry {
        go::ARAC_ANUB_GATE => (EncounterId::AnubRekhan, Open),
        go::ARAC_FAER_DOOR | go::ARAC_MAEX_OUTER_DOOR => (EncounterId::Faerlina, Open),
        go::PLAG_NOTH_EXIT_DOOR | go::PLAG_HEIG_ENTRY_DOOR => (EncounterId::Noth, Open),
        go::PLAG_HEIG_EXIT_DOOR => (EncounterId::Heigan, Open),
        go::MILI_GOTH_EXIT_GATE | go::MILI_HORSEMEN_DOOR => (EncounterId::Gothik, Open),
        go::CONS_PATCH_EXIT_DOOR => (EncounterId::Patchwerk, Open),
        go::CONS_GLUTH_EXIT_DOOR | go::CONS_THAD_DOOR => (EncounterId::Gluth, Open),
        go::CONS_NOX_TESLA_FEUGEN | go::CONS_NOX_TESLA_STALAGG => (EncounterId::Thaddius, Closed),
        go::KELTHUZAD_WATERFALL_DOOR => (EncounterId::Sapphiron, Open),
        go::ARAC_EYE_RAMP | go::ARAC_EYE_BOSS => (EncounterId::Maexxna, Open),
        go::PLAG_EYE_RAMP | go::PLAG_EYE_BOSS => (EncounterId::Loatheb, Open),
        go::MILI_EYE_RAMP | go::MILI_EYE_BOSS => (EncounterId::FourHorsemen, Open),
        go::CONS_EYE_RAMP | go::CONS_EYE_BOSS => (EncounterId::Thaddius, Open),
        go::ARAC_PORTAL => (EncounterId::Maexxna, Interactable),
        go::PLAG_PORTAL => (EncounterId::Loatheb, Interactable),
        go::MILI_PORTAL => (EncounterId::FourHorsemen, Interactable),
        go::CONS_PORTAL => (EncounterId::Thaddius, Interactable),
        _ => return None,
    };
    Some(gate)
}
