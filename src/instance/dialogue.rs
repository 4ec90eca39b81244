use crate::entities::creature::{self as npc, CreatureEntry};

pub const SAY_THADDIUS_GREET: i32 = -1533029;
pub const SAY_KELTHUZAD_CAT_DIED: i32 = -1533089;
pub const SAY_KELTHUZAD_TAUNT1: i32 = -1533090;
pub const SAY_KELTHUZAD_TAUNT2: i32 = -1533091;
pub const SAY_KELTHUZAD_TAUNT3: i32 = -1533092;
pub const SAY_KELTHUZAD_TAUNT4: i32 = -1533093;

pub const SAY_SAPP_DIALOG1: i32 = -1533084;
pub const SAY_SAPP_DIALOG2_LICH: i32 = -1533085;
pub const SAY_SAPP_DIALOG3: i32 = -1533086;
pub const SAY_SAPP_DIALOG4_LICH: i32 = -1533087;
pub const SAY_SAPP_DIALOG5: i32 = -1533088;

// The third taunt of each horseman has no known trigger and is left out.
pub const SAY_BLAU_TAUNT1: i32 = -1533045;
pub const SAY_BLAU_TAUNT2: i32 = -1533046;
pub const SAY_RIVE_TAUNT1: i32 = -1533071;
pub const SAY_RIVE_TAUNT2: i32 = -1533072;
pub const SAY_KORT_TAUNT1: i32 = -1533052;
pub const SAY_KORT_TAUNT2: i32 = -1533053;
pub const SAY_ZELI_TAUNT1: i32 = -1533059;
pub const SAY_ZELI_TAUNT2: i32 = -1533060;

/// What a dialogue step does when it is reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogueStep {
    /// Start marker, named after the creature whose event opens the sequence.
    Marker(CreatureEntry),
    Line { text_id: i32, speaker: CreatureEntry },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialogueEntry {
    pub step: DialogueStep,
    /// Wait before the next entry; zero ends the sequence.
    pub delay_ms: u32,
}

const fn marker(entry: CreatureEntry, delay_ms: u32) -> DialogueEntry {
    DialogueEntry {
        step: DialogueStep::Marker(entry),
        delay_ms,
    }
}

const fn line(text_id: i32, speaker: CreatureEntry, delay_ms: u32) -> DialogueEntry {
    DialogueEntry {
        step: DialogueStep::Line { text_id, speaker },
        delay_ms,
    }
}

pub const NAXXRAMAS_DIALOGUE: &[DialogueEntry] = &[
    marker(npc::KELTHUZAD, 10_000),
    line(SAY_SAPP_DIALOG1, npc::KELTHUZAD, 8000),
    line(SAY_SAPP_DIALOG2_LICH, npc::THE_LICH_KING, 14_000),
    line(SAY_SAPP_DIALOG3, npc::KELTHUZAD, 10_000),
    line(SAY_SAPP_DIALOG4_LICH, npc::THE_LICH_KING, 12_000),
    line(SAY_SAPP_DIALOG5, npc::KELTHUZAD, 0),
    marker(npc::THANE, 10_000),
    line(SAY_KORT_TAUNT1, npc::THANE, 5000),
    line(SAY_ZELI_TAUNT1, npc::ZELIEK, 6000),
    line(SAY_BLAU_TAUNT1, npc::BLAUMEUX, 6000),
    line(SAY_RIVE_TAUNT1, npc::RIVENDARE, 6000),
    line(SAY_BLAU_TAUNT2, npc::BLAUMEUX, 6000),
    line(SAY_ZELI_TAUNT2, npc::ZELIEK, 5000),
    line(SAY_KORT_TAUNT2, npc::THANE, 7000),
    line(SAY_RIVE_TAUNT2, npc::RIVENDARE, 0),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpokenLine {
    pub text_id: i32,
    pub speaker: CreatureEntry,
}

/// Plays scripted conversations from a fixed table, one entry at a time.
#[derive(Debug, Clone)]
pub struct DialogueSequencer {
    entries: &'static [DialogueEntry],
    current: Option<usize>,
    timer_ms: u32,
}

impl DialogueSequencer {
    pub fn new(entries: &'static [DialogueEntry]) -> Self {
        Self {
            entries,
            current: None,
            timer_ms: 0,
        }
    }

    /// Jumps to the marker for `opener` and returns the line to speak now,
    /// if that entry is a line. Unknown openers leave the sequencer idle.
    pub fn start(&mut self, opener: CreatureEntry) -> Option<SpokenLine> {
        let index = self
            .entries
            .iter()
            .position(|entry| entry.step == DialogueStep::Marker(opener));
        match index {
            Some(index) => self.enter(index),
            None => {
                self.current = None;
                None
            }
        }
    }

    pub fn update(&mut self, diff: u32) -> Option<SpokenLine> {
        let current = self.current?;
        if self.timer_ms > diff {
            self.timer_ms -= diff;
            return None;
        }
        self.enter(current + 1)
    }

    fn enter(&mut self, index: usize) -> Option<SpokenLine> {
        let Some(entry) = self.entries.get(index) else {
            self.current = None;
            return None;
        };
        if entry.delay_ms == 0 {
            self.current = None;
        } else {
            self.current = Some(index);
            self.timer_ms = entry.delay_ms;
        }
        match entry.step {
            DialogueStep::Line { text_id, speaker } => Some(SpokenLine { text_id, speaker }),
            DialogueStep::Marker(_) => None,
        }
    }
}
