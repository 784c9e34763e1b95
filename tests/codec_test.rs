use tui_ecosim::core::codec::{self, record_offset, DecodeError};
use tui_ecosim::core::Grid;
use tui_ecosim::types::{Animal, AnimalKind, CellRecord};

fn every_valid_record() -> Vec<CellRecord> {
    let mut out = Vec::new();
    for grass in 0..=5 {
        out.push(CellRecord::grass(grass));
        for hunger in 0..=9 {
            out.push(CellRecord::new(grass, Some(Animal::new(AnimalKind::Rabbit, hunger))));
            out.push(CellRecord::new(grass, Some(Animal::new(AnimalKind::Fox, hunger))));
        }
    }
    out
}

#[test]
fn encode_then_decode_reproduces_every_valid_record() {
    // 126 records laid out as a 14x9 world.
    let records = every_valid_record();
    assert_eq!(records.len(), 126);
    let grid = Grid::from_column_major(14, 9, records).unwrap();

    let snapshot = codec::encode(&grid);
    assert_eq!(snapshot.len(), 3 * 14 * 9);

    let decoded = codec::decode(&snapshot, 14, 9).unwrap();
    assert_eq!(decoded, grid);
}

#[test]
fn decode_single_hungry_fox() {
    let decoded = codec::decode("3f7", 1, 1).unwrap();
    assert_eq!(
        decoded.get(0, 0),
        Some(&CellRecord::new(3, Some(Animal::new(AnimalKind::Fox, 7))))
    );
}

#[test]
fn decode_column_major_pair() {
    let decoded = codec::decode("0  1r2", 1, 2).unwrap();
    assert_eq!(decoded.get(0, 0), Some(&CellRecord::grass(0)));
    assert_eq!(
        decoded.get(0, 1),
        Some(&CellRecord::new(1, Some(Animal::new(AnimalKind::Rabbit, 2))))
    );
}

#[test]
fn records_are_column_major() {
    // 2x2 world: x=0 column first.
    let decoded = codec::decode("1  2  3  4  ", 2, 2).unwrap();
    assert_eq!(decoded.get(0, 0).unwrap().grass, 1);
    assert_eq!(decoded.get(0, 1).unwrap().grass, 2);
    assert_eq!(decoded.get(1, 0).unwrap().grass, 3);
    assert_eq!(decoded.get(1, 1).unwrap().grass, 4);
}

#[test]
fn empty_cell_hunger_is_unconstrained() {
    let decoded = codec::decode("5 x0 ?", 1, 2).unwrap();
    assert_eq!(decoded.get(0, 0), Some(&CellRecord::grass(5)));
    assert_eq!(decoded.get(0, 1), Some(&CellRecord::grass(0)));
}

#[test]
fn wrong_length_is_malformed() {
    for bad in ["", "0 ", "0  0", "0  0  0  "] {
        let err = codec::decode(bad, 1, 2).unwrap_err();
        assert_eq!(
            err,
            DecodeError::MalformedLength {
                expected: 6,
                actual: bad.len(),
                size_x: 1,
                size_y: 2,
            }
        );
    }
}

#[test]
fn length_counts_characters_not_bytes() {
    // Three chars, but 'é' is two bytes: length is right, the grass char is not.
    let err = codec::decode("é  ", 1, 1).unwrap_err();
    assert!(matches!(
        err,
        DecodeError::InvalidGrassLevel { ch: 'é', position: 0, .. }
    ));
}

#[test]
fn invalid_grass_reports_char_position_and_snapshot() {
    let snapshot = "0  1r26  ";
    let err = codec::decode(snapshot, 1, 3).unwrap_err();
    assert_eq!(
        err,
        DecodeError::InvalidGrassLevel {
            ch: '6',
            position: record_offset(0, 2, 3),
            snapshot: snapshot.to_string(),
        }
    );
}

#[test]
fn invalid_animal_marker() {
    let err = codec::decode("0R1", 1, 1).unwrap_err();
    assert!(matches!(
        err,
        DecodeError::InvalidAnimalMarker { ch: 'R', position: 1, .. }
    ));
}

#[test]
fn invalid_hunger_only_matters_with_an_animal() {
    let err = codec::decode("2f ", 1, 1).unwrap_err();
    assert!(matches!(
        err,
        DecodeError::InvalidHungerLevel { ch: ' ', position: 2, .. }
    ));
    assert!(codec::decode("2  ", 1, 1).is_ok());
}

#[test]
fn bad_hunger_reported_before_bad_marker() {
    let err = codec::decode("1qx", 1, 1).unwrap_err();
    assert!(matches!(
        err,
        DecodeError::InvalidHungerLevel { ch: 'x', position: 2, .. }
    ));

    let positions: Vec<_> = codec::validate_all("1qx", 1, 1)
        .iter()
        .filter_map(|e| e.position())
        .collect();
    assert_eq!(positions, vec![2, 1]);
}

#[test]
fn first_violation_wins() {
    // Cell 0 has a bad marker, cell 1 a bad grass digit.
    let err = codec::decode("0x19  ", 1, 2).unwrap_err();
    assert!(matches!(err, DecodeError::InvalidAnimalMarker { position: 1, .. }));
}

#[test]
fn validate_all_collects_every_violation() {
    let errors = codec::validate_all("0x19  0r?", 1, 3);
    let positions: Vec<_> = errors.iter().map(|e| e.position()).collect();
    assert_eq!(positions, vec![Some(1), Some(3), Some(8)]);
    assert!(codec::validate_all("0  1r2", 1, 2).is_empty());
}

#[test]
fn validate_all_reports_length_alone() {
    let errors = codec::validate_all("0x", 1, 1);
    assert_eq!(errors.len(), 1);
    assert!(matches!(errors[0], DecodeError::MalformedLength { .. }));
}

#[test]
fn decode_error_messages_are_readable() {
    let err = codec::decode("7  ", 1, 1).unwrap_err();
    assert_eq!(err.to_string(), "invalid grass char '7' at position 0");
    let err = codec::decode("", 2, 2).unwrap_err();
    assert_eq!(
        err.to_string(),
        "malformed snapshot: expected 12 chars for a 2x2 world, got 0"
    );
}
