use crate::entities::guid::ObjectGuid;
use crate::world::position::Location;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CreatureEntry(pub u32);

pub const ANUB_REKHAN: CreatureEntry = CreatureEntry(15956);
pub const FAERLINA: CreatureEntry = CreatureEntry(15953);
pub const CORPSE_SCARAB: CreatureEntry = CreatureEntry(16698);

pub const THADDIUS: CreatureEntry = CreatureEntry(15928);
pub const STALAGG: CreatureEntry = CreatureEntry(15929);
pub const FEUGEN: CreatureEntry = CreatureEntry(15930);
pub const TESLA_COIL: CreatureEntry = CreatureEntry(16218);
pub const TOXIC_TUNNEL: CreatureEntry = CreatureEntry(16400);

pub const ZELIEK: CreatureEntry = CreatureEntry(16063);
pub const THANE: CreatureEntry = CreatureEntry(16064);
pub const BLAUMEUX: CreatureEntry = CreatureEntry(16065);
pub const RIVENDARE: CreatureEntry = CreatureEntry(30549);

pub const SAPPHIRON: CreatureEntry = CreatureEntry(15989);
pub const KELTHUZAD: CreatureEntry = CreatureEntry(15990);
pub const THE_LICH_KING: CreatureEntry = CreatureEntry(16980);
pub const MR_BIGGLESWORTH: CreatureEntry = CreatureEntry(16998);
pub const LIVING_POISON: CreatureEntry = CreatureEntry(16027);

pub const OLDWORLD_TRIGGER: CreatureEntry = CreatureEntry(15384);

pub const GOTHIK: CreatureEntry = CreatureEntry(16060);
pub const UNRELENTING_TRAINEE: CreatureEntry = CreatureEntry(16124);
pub const UNRELENTING_DEATH_KNIGHT: CreatureEntry = CreatureEntry(16125);
pub const UNRELENTING_RIDER: CreatureEntry = CreatureEntry(16126);
pub const SPECTRAL_TRAINEE: CreatureEntry = CreatureEntry(16127);
pub const SPECTRAL_DEATH_KNIGHT: CreatureEntry = CreatureEntry(16148);
pub const SPECTRAL_RIDER: CreatureEntry = CreatureEntry(16150);
pub const SPECTRAL_HORSE: CreatureEntry = CreatureEntry(16149);

pub const DISEASED_MAGGOT: CreatureEntry = CreatureEntry(16056);
pub const ROTTING_MAGGOT: CreatureEntry = CreatureEntry(16057);
pub const EYE_STALK: CreatureEntry = CreatureEntry(16236);

pub const ZOMBIE_CHOW: CreatureEntry = CreatureEntry(16360);
pub const GLUTH: CreatureEntry = CreatureEntry(15932);

impl CreatureEntry {
    /// Creatures kept as a single handle for later lookup by entry.
    pub fn is_tracked_single(self) -> bool {
        matches!(
            self,
            ANUB_REKHAN
                | FAERLINA
                | THADDIUS
                | STALAGG
                | FEUGEN
                | ZELIEK
                | THANE
                | BLAUMEUX
                | RIVENDARE
                | GOTHIK
                | SAPPHIRON
                | KELTHUZAD
                | THE_LICH_KING
                | GLUTH
        )
    }

    /// Adds summoned by Gothik on both sides of the arena.
    pub fn is_gothik_add(self) -> bool {
        matches!(
            self,
            UNRELENTING_TRAINEE
                | UNRELENTING_DEATH_KNIGHT
                | UNRELENTING_RIDER
                | SPECTRAL_TRAINEE
                | SPECTRAL_DEATH_KNIGHT
                | SPECTRAL_RIDER
                | SPECTRAL_HORSE
        )
    }

    pub fn is_heigan_backroom_add(self) -> bool {
        matches!(self, ROTTING_MAGGOT | DISEASED_MAGGOT | EYE_STALK)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CreatureInfo {
    pub guid: ObjectGuid,
    pub entry: CreatureEntry,
    pub location: Location,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerInfo {
    pub guid: ObjectGuid,
    pub location: Location,
    pub is_alive: bool,
    pub is_game_master: bool,
}
