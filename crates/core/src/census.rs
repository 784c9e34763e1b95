//! Population counts over a decoded snapshot.

use crate::grid::Grid;
use crate::types::{AnimalKind, CellRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Census {
    pub rabbits: u32,
    pub hungry_rabbits: u32,
    pub foxes: u32,
    pub hungry_foxes: u32,
    /// Sum of grass levels over all cells.
    pub grass: u32,
}

impl Census {
    pub fn count(decoded: &Grid<CellRecord>) -> Self {
        let mut census = Census::default();
        for record in decoded.cells() {
            census.grass += record.grass as u32;
            let Some(animal) = record.animal else {
                continue;
            };
            let hungry = !animal.is_well_fed() as u32;
            match animal.kind {
                AnimalKind::Rabbit => {
                    census.rabbits += 1;
                    census.hungry_rabbits += hungry;
                }
                AnimalKind::Fox => {
                    census.foxes += 1;
                    census.hungry_foxes += hungry;
                }
            }
        }
        census
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Animal;

    #[test]
    fn counts_animals_by_tier() {
        let cells = vec![
            CellRecord::new(2, Some(Animal::new(AnimalKind::Rabbit, 1))),
            CellRecord::new(0, Some(Animal::new(AnimalKind::Rabbit, 8))),
            CellRecord::new(5, Some(Animal::new(AnimalKind::Fox, 6))),
            CellRecord::grass(3),
        ];
        let grid = Grid::from_column_major(2, 2, cells).unwrap();
        let census = Census::count(&grid);
        assert_eq!(census.rabbits, 2);
        assert_eq!(census.hungry_rabbits, 1);
        assert_eq!(census.foxes, 1);
        assert_eq!(census.hungry_foxes, 1);
        assert_eq!(census.grass, 10);
    }
}
