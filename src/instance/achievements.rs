use crate::instance::status::{EncounterId, EncounterStatus, MAX_ENCOUNTER};

pub const MAX_SPECIAL_ACHIEV_CRITS: usize = 6;

pub const CRITERIA_SAFETY_DANCE_N: u32 = 7264;
pub const CRITERIA_SAFETY_DANCE_H: u32 = 7548;
pub const CRITERIA_KNOCK_YOU_OUT_N: u32 = 7265;
pub const CRITERIA_KNOCK_YOU_OUT_H: u32 = 7549;
pub const CRITERIA_HUNDRED_CLUB_N: u32 = 7567;
pub const CRITERIA_HUNDRED_CLUB_H: u32 = 7568;
pub const CRITERIA_TOGETHER_N: u32 = 7600;
pub const CRITERIA_TOGETHER_H: u32 = 7601;
pub const CRITERIA_SHOCKING_N: u32 = 7604;
pub const CRITERIA_SHOCKING_H: u32 = 7605;
pub const CRITERIA_SPORE_LOSER_N: u32 = 7612;
pub const CRITERIA_SPORE_LOSER_H: u32 = 7613;
pub const CRITERIA_GET_ENOUGH_N: u32 = 7614;
pub const CRITERIA_GET_ENOUGH_H: u32 = 7615;

// 'The Immortal' (25 player) and 'The Undying' (10 player)
pub const CRITERIA_IMMORTAL_KELTHUZAD: u32 = 7616;
pub const CRITERIA_IMMORTAL_LOATHEB: u32 = 13236;
pub const CRITERIA_IMMORTAL_THADDIUS: u32 = 13235;
pub const CRITERIA_IMMORTAL_MAEXXNA: u32 = 13234;
pub const CRITERIA_IMMORTAL_HORSEMEN: u32 = 13233;
pub const CRITERIA_UNDYING_KELTHUZAD: u32 = 7617;
pub const CRITERIA_UNDYING_HORSEMEN: u32 = 13237;
pub const CRITERIA_UNDYING_MAEXXNA: u32 = 13238;
pub const CRITERIA_UNDYING_LOATHEB: u32 = 13239;
pub const CRITERIA_UNDYING_THADDIUS: u32 = 13240;

// Timed achievements started by the instance
pub const ACHIEVEMENT_CRITERIA_TYPE_KILL_CREATURE: u32 = 0;
pub const TIMED_START_PATCHWERK: u32 = 10286;
pub const TIMED_START_MAEXXNA: u32 = 9891;

/// Bosses that must be DONE for the no-death achievements: everything
/// before Kel'Thuzad in slot order.
const NO_DEATH_REQUIRED_KILLS: usize = 14;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecialAchievement {
    SafetyDance = 0,
    KnockYouOut = 1,
    HundredClub = 2,
    Shocking = 3,
    SporeLoser = 4,
    GetEnough = 5,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpecialAchievementFlags([bool; MAX_SPECIAL_ACHIEV_CRITS]);

impl SpecialAchievementFlags {
    pub fn set(&mut self, achievement: SpecialAchievement, met: bool) {
        self.0[achievement as usize] = met;
    }

    pub fn get(&self, achievement: SpecialAchievement) -> bool {
        self.0[achievement as usize]
    }

    pub fn reset(&mut self) {
        self.0 = [false; MAX_SPECIAL_ACHIEV_CRITS];
    }
}

/// Everything the criteria checks read, borrowed from the coordinator.
pub struct CriteriaContext<'a> {
    pub flags: &'a SpecialAchievementFlags,
    pub encounters: &'a [EncounterStatus; MAX_ENCOUNTER],
    pub together_window_open: bool,
}

pub fn criteria_met(criteria_id: u32, ctx: &CriteriaContext<'_>) -> bool {
    use SpecialAchievement::*;
    match criteria_id {
        CRITERIA_SAFETY_DANCE_N | CRITERIA_SAFETY_DANCE_H => ctx.flags.get(SafetyDance),
        CRITERIA_KNOCK_YOU_OUT_N | CRITERIA_KNOCK_YOU_OUT_H => ctx.flags.get(KnockYouOut),
        CRITERIA_HUNDRED_CLUB_N | CRITERIA_HUNDRED_CLUB_H => ctx.flags.get(HundredClub),
        CRITERIA_SHOCKING_N | CRITERIA_SHOCKING_H => ctx.flags.get(Shocking),
        CRITERIA_SPORE_LOSER_N | CRITERIA_SPORE_LOSER_H => ctx.flags.get(SporeLoser),
        CRITERIA_GET_ENOUGH_N | CRITERIA_GET_ENOUGH_H => ctx.flags.get(GetEnough),
        CRITERIA_TOGETHER_N | CRITERIA_TOGETHER_H => ctx.together_window_open,
        CRITERIA_IMMORTAL_KELTHUZAD
        | CRITERIA_IMMORTAL_LOATHEB
        | CRITERIA_IMMORTAL_THADDIUS
        | CRITERIA_IMMORTAL_MAEXXNA
        | CRITERIA_IMMORTAL_HORSEMEN
        | CRITERIA_UNDYING_KELTHUZAD
        | CRITERIA_UNDYING_HORSEMEN
        | CRITERIA_UNDYING_MAEXXNA
        | CRITERIA_UNDYING_LOATHEB
        | CRITERIA_UNDYING_THADDIUS => {
            let done = ctx.encounters[..EncounterId::Kelthuzad.index()]
                .iter()
                .filter(|status| **status == EncounterStatus::Done)
                .count();
            done >= NO_DEATH_REQUIRED_KILLS
                && ctx.encounters[EncounterId::UndyingFailed.index()] != EncounterStatus::Done
        }
        _ => false,
    }
}
