//! State codec: the fixed-width snapshot protocol.
//!
//! A snapshot encodes a `size_x × size_y` world as one string of `3 * size_x * size_y`
//! characters. Records are column-major: the record for `(x, y)` starts at
//! [`record_offset`]`(x, y, size_y)`.
//!
//! Decoding is all-or-nothing. The first invalid record aborts the whole decode and
//! nothing is returned for the cells that did parse.

use crate::grid::{cell_count, cell_index, Grid};
use crate::types::{
    Animal, AnimalKind, CellRecord, MAX_GRASS, MAX_HUNGER, NO_ANIMAL_MARKER, RECORD_WIDTH,
};

/// Snapshot validation failures.
///
/// The three per-record variants carry the offending character, its character
/// position in the snapshot, and the full snapshot text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error(
        "malformed snapshot: expected {expected} chars for a {size_x}x{size_y} world, got {actual}"
    )]
    MalformedLength {
        expected: usize,
        actual: usize,
        size_x: u16,
        size_y: u16,
    },

    #[error("invalid grass char {ch:?} at position {position}")]
    InvalidGrassLevel {
        ch: char,
        position: usize,
        snapshot: String,
    },

    #[error("invalid animal char {ch:?} at position {position}")]
    InvalidAnimalMarker {
        ch: char,
        position: usize,
        snapshot: String,
    },

    #[error("invalid hunger char {ch:?} at position {position}")]
    InvalidHungerLevel {
        ch: char,
        position: usize,
        snapshot: String,
    },
}

impl DecodeError {
    /// Character position of the offending character, if the error is per-record.
    pub fn position(&self) -> Option<usize> {
        match self {
            DecodeError::MalformedLength { .. } => None,
            DecodeError::InvalidGrassLevel { position, .. }
            | DecodeError::InvalidAnimalMarker { position, .. }
            | DecodeError::InvalidHungerLevel { position, .. } => Some(*position),
        }
    }

    /// The snapshot that failed to decode, if the error carries it.
    pub fn snapshot(&self) -> Option<&str> {
        match self {
            DecodeError::MalformedLength { .. } => None,
            DecodeError::InvalidGrassLevel { snapshot, .. }
            | DecodeError::InvalidAnimalMarker { snapshot, .. }
            | DecodeError::InvalidHungerLevel { snapshot, .. } => Some(snapshot),
        }
    }
}

/// Expected snapshot length in characters.
#[inline]
pub fn expected_len(size_x: u16, size_y: u16) -> usize {
    cell_count(size_x, size_y) * RECORD_WIDTH
}

/// Character offset of the record for `(x, y)`.
#[inline]
pub fn record_offset(x: u16, y: u16, size_y: u16) -> usize {
    cell_index(x, y, size_y) * RECORD_WIDTH
}

/// Decode a snapshot into a grid of cell records.
///
/// # Errors
///
/// Returns the first violation found, scanning records in snapshot order.
pub fn decode(snapshot: &str, size_x: u16, size_y: u16) -> Result<Grid<CellRecord>, DecodeError> {
    check_len(snapshot, size_x, size_y)?;

    let mut cells = Vec::with_capacity(cell_count(size_x, size_y));
    let mut chars = snapshot.chars();
    while let (Some(g), Some(a), Some(h)) = (chars.next(), chars.next(), chars.next()) {
        let position = cells.len() * RECORD_WIDTH;
        let record = parse_record([g, a, h]).map_err(|fault| fault.at(position, snapshot))?;
        cells.push(record);
    }

    Grid::from_column_major(size_x, size_y, cells).ok_or(DecodeError::MalformedLength {
        expected: expected_len(size_x, size_y),
        actual: snapshot.chars().count(),
        size_x,
        size_y,
    })
}

/// Validate a whole snapshot and report every violation.
///
/// Diagnostic companion to [`decode`]; an empty result means `decode` would succeed.
/// A length mismatch is reported alone since record boundaries are then meaningless.
pub fn validate_all(snapshot: &str, size_x: u16, size_y: u16) -> Vec<DecodeError> {
    if let Err(e) = check_len(snapshot, size_x, size_y) {
        return vec![e];
    }

    let mut errors = Vec::new();
    let mut chars = snapshot.chars();
    let mut position = 0;
    while let (Some(g), Some(a), Some(h)) = (chars.next(), chars.next(), chars.next()) {
        for fault in record_faults([g, a, h]) {
            errors.push(fault.at(position, snapshot));
        }
        position += RECORD_WIDTH;
    }
    errors
}

/// Encode a grid of records into a snapshot string.
///
/// Empty cells use `' '` as the hunger placeholder.
pub fn encode(grid: &Grid<CellRecord>) -> String {
    let mut out = String::with_capacity(grid.len() * RECORD_WIDTH);
    for record in grid.cells() {
        encode_record_into(record, &mut out);
    }
    out
}

/// Append one 3-character record to `out`.
///
/// Out-of-range levels are written as `'?'`, which the decoder rejects.
pub fn encode_record_into(record: &CellRecord, out: &mut String) {
    out.push(digit(record.grass, MAX_GRASS));
    match record.animal {
        Some(animal) => {
            out.push(animal.kind.marker());
            out.push(digit(animal.hunger, MAX_HUNGER));
        }
        None => {
            out.push(NO_ANIMAL_MARKER);
            out.push(NO_ANIMAL_MARKER);
        }
    }
}

fn digit(value: u8, max: u8) -> char {
    if value > max {
        return '?';
    }
    char::from(b'0' + value)
}

fn check_len(snapshot: &str, size_x: u16, size_y: u16) -> Result<(), DecodeError> {
    let expected = expected_len(size_x, size_y);
    // Byte length equals char count only for ASCII; count chars otherwise.
    let actual = if snapshot.is_ascii() {
        snapshot.len()
    } else {
        snapshot.chars().count()
    };
    if actual != expected {
        return Err(DecodeError::MalformedLength {
            expected,
            actual,
            size_x,
            size_y,
        });
    }
    Ok(())
}

/// A bad character within one record, before it is placed in the snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Fault {
    Grass(char),
    Animal(char),
    Hunger(char),
}

impl Fault {
    fn at(self, record_start: usize, snapshot: &str) -> DecodeError {
        let snapshot = snapshot.to_string();
        match self {
            Fault::Grass(ch) => DecodeError::InvalidGrassLevel {
                ch,
                position: record_start,
                snapshot,
            },
            Fault::Animal(ch) => DecodeError::InvalidAnimalMarker {
                ch,
                position: record_start + 1,
                snapshot,
            },
            Fault::Hunger(ch) => DecodeError::InvalidHungerLevel {
                ch,
                position: record_start + 2,
                snapshot,
            },
        }
    }
}

fn parse_level(ch: char, max: u8) -> Option<u8> {
    let value = ch.to_digit(10)?;
    (value <= max as u32).then_some(value as u8)
}

fn parse_record([g, a, h]: [char; 3]) -> Result<CellRecord, Fault> {
    let grass = parse_level(g, MAX_GRASS).ok_or(Fault::Grass(g))?;
    if a == NO_ANIMAL_MARKER {
        return Ok(CellRecord::grass(grass));
    }
    // Hunger is checked before the marker it belongs to.
    let hunger = parse_level(h, MAX_HUNGER).ok_or(Fault::Hunger(h))?;
    let kind = AnimalKind::from_marker(a).ok_or(Fault::Animal(a))?;
    Ok(CellRecord::new(grass, Some(Animal::new(kind, hunger))))
}

fn record_faults([g, a, h]: [char; 3]) -> impl Iterator<Item = Fault> {
    let grass = parse_level(g, MAX_GRASS).is_none().then_some(Fault::Grass(g));
    let (hunger, animal) = if a == NO_ANIMAL_MARKER {
        (None, None)
    } else {
        (
            parse_level(h, MAX_HUNGER).is_none().then_some(Fault::Hunger(h)),
            AnimalKind::from_marker(a).is_none().then_some(Fault::Animal(a)),
        )
    };
    grass.into_iter().chain(hunger).chain(animal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_offset_matches_layout() {
        // 2 columns, 3 rows: (1, 2) is the 6th record.
        assert_eq!(record_offset(0, 0, 3), 0);
        assert_eq!(record_offset(0, 1, 3), 3);
        assert_eq!(record_offset(1, 2, 3), 15);
    }

    #[test]
    fn parse_record_accepts_placeholder_hunger_for_empty_cell() {
        assert_eq!(parse_record(['4', ' ', 'x']), Ok(CellRecord::grass(4)));
    }

    #[test]
    fn parse_record_checks_fields_in_order() {
        assert_eq!(parse_record(['6', 'q', 'x']), Err(Fault::Grass('6')));
        assert_eq!(parse_record(['1', 'q', 'x']), Err(Fault::Hunger('x')));
        assert_eq!(parse_record(['1', 'q', '3']), Err(Fault::Animal('q')));
        assert_eq!(parse_record(['1', 'r', 'x']), Err(Fault::Hunger('x')));
    }

    #[test]
    fn record_faults_follow_check_order() {
        let faults: Vec<_> = record_faults(['6', 'q', 'x']).collect();
        assert_eq!(
            faults,
            vec![Fault::Grass('6'), Fault::Hunger('x'), Fault::Animal('q')]
        );
        assert_eq!(record_faults(['0', ' ', 'x']).count(), 0);
    }

    #[test]
    fn parse_level_rejects_non_ascii_digits() {
        assert_eq!(parse_level('٣', MAX_GRASS), None);
        assert_eq!(parse_level('5', MAX_GRASS), Some(5));
        assert_eq!(parse_level('9', MAX_HUNGER), Some(9));
    }

    #[test]
    fn encode_marks_out_of_range_levels() {
        let mut out = String::new();
        encode_record_into(
            &CellRecord::new(7, Some(Animal::new(AnimalKind::Fox, 12))),
            &mut out,
        );
        assert_eq!(out, "?f?");
    }

    #[test]
    fn faults_carry_character_positions() {
        let err = Fault::Hunger('z').at(6, "0  0  0rz");
        assert_eq!(err.position(), Some(8));
        assert_eq!(err.snapshot(), Some("0  0  0rz"));
    }
}
