//! Text form of the encounter table: one line of whitespace separated
//! status integers in slot order.

use crate::instance::status::{EncounterStatus, MAX_ENCOUNTER};
use thiserror::Error;

pub type EncounterTable = [EncounterStatus; MAX_ENCOUNTER];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnapshotError {
    #[error("snapshot is empty")]
    Empty,
    #[error("field {index} is not a number: '{token}'")]
    InvalidToken { index: usize, token: String },
    #[error("field {index} holds unknown status {value}")]
    UnknownStatus { index: usize, value: u32 },
    #[error("snapshot has {found} fields, at most {max} expected")]
    TooManyFields { found: usize, max: usize },
}

pub fn encode(table: &EncounterTable) -> String {
    table
        .iter()
        .map(|status| status.as_u32().to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parses a snapshot. Fields missing at the end (older saves) read as
/// NOT_STARTED, and fights that were IN_PROGRESS when the snapshot was
/// taken come back as NOT_STARTED.
pub fn decode(data: &str) -> Result<EncounterTable, SnapshotError> {
    let tokens: Vec<&str> = data.split_whitespace().collect();
    if tokens.is_empty() {
        return Err(SnapshotError::Empty);
    }
    if tokens.len() > MAX_ENCOUNTER {
        return Err(SnapshotError::TooManyFields {
            found: tokens.len(),
            max: MAX_ENCOUNTER,
        });
    }

    let mut table = [EncounterStatus::NotStarted; MAX_ENCOUNTER];
    for (index, token) in tokens.iter().enumerate() {
        let value: u32 = token.parse().map_err(|_| SnapshotError::InvalidToken {
            index,
            token: token.to_string(),
        })?;
        let status = EncounterStatus::from_u32(value)
            .ok_or(SnapshotError::UnknownStatus { index, value })?;
        table[index] = match status {
            EncounterStatus::InProgress => EncounterStatus::NotStarted,
            other => other,
        };
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instance::status::EncounterId;

    #[test]
    fn encode_writes_sixteen_fields_in_slot_order() {
        let mut table = [EncounterStatus::NotStarted; MAX_ENCOUNTER];
        table[EncounterId::AnubRekhan.index()] = EncounterStatus::Done;
        table[EncounterId::Sapphiron.index()] = EncounterStatus::Special;
        assert_eq!(encode(&table), "3 0 0 0 0 0 0 0 0 0 0 0 0 4 0 0");
    }

    #[test]
    fn decode_restores_settled_tables_unchanged() {
        let mut table = [EncounterStatus::Done; MAX_ENCOUNTER];
        table[EncounterId::Gothik.index()] = EncounterStatus::Fail;
        table[EncounterId::Sapphiron.index()] = EncounterStatus::Special;
        table[EncounterId::Kelthuzad.index()] = EncounterStatus::NotStarted;
        assert_eq!(decode(&encode(&table)), Ok(table));
    }

    #[test]
    fn decode_resets_fights_in_progress() {
        let table = decode("1 3 1 0 0 0 0 0 0 0 0 0 0 0 1 0").expect("decode");
        assert_eq!(table[0], EncounterStatus::NotStarted);
        assert_eq!(table[1], EncounterStatus::Done);
        assert_eq!(table[2], EncounterStatus::NotStarted);
        assert_eq!(table[14], EncounterStatus::NotStarted);
        assert_eq!(encode(&table), "0 3 0 0 0 0 0 0 0 0 0 0 0 0 0 0");
    }

    #[test]
    fn decode_pads_short_records() {
        let table = decode("3 3\n3").expect("decode");
        assert_eq!(&table[..3], &[EncounterStatus::Done; 3]);
        assert!(table[3..].iter().all(|s| *s == EncounterStatus::NotStarted));
    }

    #[test]
    fn decode_rejects_malformed_records() {
        assert_eq!(decode("   "), Err(SnapshotError::Empty));
        assert_eq!(
            decode("3 x 0"),
            Err(SnapshotError::InvalidToken {
                index: 1,
                token: "x".to_string()
            })
        );
        assert_eq!(
            decode("3 9"),
            Err(SnapshotError::UnknownStatus { index: 1, value: 9 })
        );
        assert_eq!(
            decode("-1"),
            Err(SnapshotError::InvalidToken {
                index: 0,
                token: "-1".to_string()
            })
        );
        let long = vec!["0"; 17].join(" ");
        assert_eq!(
            decode(&long),
            Err(SnapshotError::TooManyFields { found: 17, max: 16 })
        );
    }
}
