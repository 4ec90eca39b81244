use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

pub const MAX_ENCOUNTER: usize = 16;

/// Lifecycle of one boss encounter. The discriminants are the values
/// stored in the persisted snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EncounterStatus {
    #[default]
    NotStarted = 0,
    InProgress = 1,
    Fail = 2,
    Done = 3,
    Special = 4,
}

impl EncounterStatus {
    pub fn as_u32(self) -> u32 {
        self as u32
    }

    pub fn from_u32(value: u32) -> Option<Self> {
        match value {
            0 => Some(Self::NotStarted),
            1 => Some(Self::InProgress),
            2 => Some(Self::Fail),
            3 => Some(Self::Done),
            4 => Some(Self::Special),
            _ => None,
        }
    }
}

impl fmt::Display for EncounterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::NotStarted => "not started",
            Self::InProgress => "in progress",
            Self::Fail => "failed",
            Self::Done => "done",
            Self::Special => "special",
        };
        f.write_str(label)
    }
}

/// Encounter slots in persisted order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EncounterId {
    AnubRekhan = 0,
    Faerlina = 1,
    Maexxna = 2,
    Noth = 3,
    Heigan = 4,
    Loatheb = 5,
    Razuvious = 6,
    Gothik = 7,
    FourHorsemen = 8,
    Patchwerk = 9,
    Grobbulus = 10,
    Gluth = 11,
    Thaddius = 12,
    Sapphiron = 13,
    Kelthuzad = 14,
    /// Set to DONE once any player dies while an encounter is active.
    UndyingFailed = 15,
}

impl EncounterId {
    pub const ALL: [EncounterId; MAX_ENCOUNTER] = [
        EncounterId::AnubRekhan,
        EncounterId::Faerlina,
        EncounterId::Maexxna,
        EncounterId::Noth,
        EncounterId::Heigan,
        EncounterId::Loatheb,
        EncounterId::Razuvious,
        EncounterId::Gothik,
        EncounterId::FourHorsemen,
        EncounterId::Patchwerk,
        EncounterId::Grobbulus,
        EncounterId::Gluth,
        EncounterId::Thaddius,
        EncounterId::Sapphiron,
        EncounterId::Kelthuzad,
        EncounterId::UndyingFailed,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::AnubRekhan => "anub_rekhan",
            Self::Faerlina => "faerlina",
            Self::Maexxna => "maexxna",
            Self::Noth => "noth",
            Self::Heigan => "heigan",
            Self::Loatheb => "loatheb",
            Self::Razuvious => "razuvious",
            Self::Gothik => "gothik",
            Self::FourHorsemen => "four_horsemen",
            Self::Patchwerk => "patchwerk",
            Self::Grobbulus => "grobbulus",
            Self::Gluth => "gluth",
            Self::Thaddius => "thaddius",
            Self::Sapphiron => "sapphiron",
            Self::Kelthuzad => "kelthuzad",
            Self::UndyingFailed => "undying_failed",
        }
    }
}

impl fmt::Display for EncounterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EncounterId {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|id| id.name().eq_ignore_ascii_case(value))
            .ok_or_else(|| format!("unknown encounter '{}'", value))
    }
}
