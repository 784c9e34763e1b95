//! Color mapping from decoded cells to visual attributes.

use crate::grid::Grid;
use crate::types::{palette, AnimalKind, CellRecord, Rgb};

/// Decoded color attributes for one cell.
///
/// `grass_color` is drawn as the cell outline, `fill_color` as its body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CellVisual {
    pub grass_color: Rgb,
    pub fill_color: Rgb,
}

/// Grass tint for abundance level `g` (0..=5).
///
/// Linear ramp from sand `(245, 220, 180)` at 0 to dark green `(0, 100, 0)` at 5.
pub fn grass_color(g: u8) -> Rgb {
    let g = g as i32;
    Rgb::new(
        channel(245 - 49 * g),
        channel(220 - 24 * g),
        channel(180 - 36 * g),
    )
}

// Levels above 5 never reach here through the decoder.
fn channel(v: i32) -> u8 {
    v.clamp(0, 255) as u8
}

/// Map one record to its colors.
pub fn map_cell(record: &CellRecord) -> CellVisual {
    let grass = grass_color(record.grass);
    let fill = match record.animal {
        None => grass,
        Some(animal) => match (animal.kind, animal.is_well_fed()) {
            (AnimalKind::Fox, true) => palette::DARK_ORANGE,
            (AnimalKind::Fox, false) => palette::LIGHT_ORANGE,
            (AnimalKind::Rabbit, true) => palette::GRAY,
            (AnimalKind::Rabbit, false) => palette::LIGHT_GRAY,
        },
    };
    CellVisual {
        grass_color: grass,
        fill_color: fill,
    }
}

/// Map every record of a decoded grid.
pub fn map_each(decoded: &Grid<CellRecord>) -> Grid<CellVisual> {
    decoded.map(map_cell)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Animal;

    #[test]
    fn grass_ramp_endpoints() {
        assert_eq!(grass_color(0), Rgb::new(245, 220, 180));
        assert_eq!(grass_color(5), Rgb::new(0, 100, 0));
    }

    #[test]
    fn hungry_fox_is_light_orange() {
        let v = map_cell(&CellRecord::new(3, Some(Animal::new(AnimalKind::Fox, 7))));
        assert_eq!(v.grass_color, Rgb::new(98, 148, 72));
        assert_eq!(v.fill_color, palette::LIGHT_ORANGE);
    }

    #[test]
    fn rabbit_threshold_is_three() {
        let fed = map_cell(&CellRecord::new(0, Some(Animal::new(AnimalKind::Rabbit, 3))));
        let hungry = map_cell(&CellRecord::new(0, Some(Animal::new(AnimalKind::Rabbit, 4))));
        assert_eq!(fed.fill_color, palette::GRAY);
        assert_eq!(hungry.fill_color, palette::LIGHT_GRAY);
    }
}
