//! Demo grass/rabbit/fox world.
//!
//! Rules per step:
//! - grass grows one level with probability 1/4, up to 5
//! - every animal gets one hunger point and starves above 9
//! - rabbits graze the grass under them (one level, two hunger points)
//! - foxes catch an adjacent rabbit if there is one (hunger resets to 0)
//! - animals otherwise wander to a random free neighbor
//! - well-fed animals that move may leave an offspring in the cell they left

use arrayvec::ArrayVec;

use crate::core::codec;
use crate::core::{Engine, Grid};
use crate::rng::SimpleRng;
use crate::types::{Animal, AnimalKind, CellRecord, MAX_GRASS, MAX_HUNGER};

/// Hunger an offspring starts with.
const NEWBORN_HUNGER: u8 = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorldConfig {
    pub size_x: u16,
    pub size_y: u16,
    pub seed: u32,
    /// Share of cells that start with a rabbit.
    pub rabbit_percent: u8,
    /// Share of cells that start with a fox.
    pub fox_percent: u8,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            size_x: crate::types::WORLD_SIZE_X,
            size_y: crate::types::WORLD_SIZE_Y,
            seed: 1,
            rabbit_percent: 10,
            fox_percent: 2,
        }
    }
}

pub struct World {
    cells: Grid<CellRecord>,
    rng: SimpleRng,
    step: u64,
    state: Option<String>,
}

impl World {
    pub fn new(config: &WorldConfig) -> Self {
        let mut rng = SimpleRng::new(config.seed);
        let mut cells = Grid::filled(config.size_x, config.size_y, CellRecord::default());
        for cell in cells.cells_mut() {
            cell.grass = rng.next_range(MAX_GRASS as u32 + 1) as u8;
            let roll = rng.next_range(100);
            let kind = if roll < config.fox_percent as u32 {
                Some(AnimalKind::Fox)
            } else if roll < config.fox_percent as u32 + config.rabbit_percent as u32 {
                Some(AnimalKind::Rabbit)
            } else {
                None
            };
            cell.animal = kind.map(|k| {
                let hunger = rng.next_range(NEWBORN_HUNGER as u32 + 1) as u8;
                Animal::new(k, hunger)
            });
        }
        Self::from_cells(cells, config.seed)
    }

    /// Start from an explicit layout.
    pub fn from_cells(cells: Grid<CellRecord>, seed: u32) -> Self {
        Self {
            cells,
            rng: SimpleRng::new(seed),
            step: 0,
            state: None,
        }
    }

    pub fn cells(&self) -> &Grid<CellRecord> {
        &self.cells
    }

    /// Completed steps.
    pub fn step(&self) -> u64 {
        self.step
    }

    fn grow_grass(&mut self) {
        for i in 0..self.cells.len() {
            let grows = self.rng.one_in(4);
            let cell = &mut self.cells.cells_mut()[i];
            if grows && cell.grass < MAX_GRASS {
                cell.grass += 1;
            }
        }
    }

    fn neighbors(&self, x: u16, y: u16) -> ArrayVec<(u16, u16), 8> {
        let mut out = ArrayVec::new();
        for dx in -1i32..=1 {
            for dy in -1i32..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let nx = x as i32 + dx;
                let ny = y as i32 + dy;
                if nx < 0
                    || ny < 0
                    || nx >= self.cells.size_x() as i32
                    || ny >= self.cells.size_y() as i32
                {
                    continue;
                }
                out.push((nx as u16, ny as u16));
            }
        }
        out
    }

    fn free_neighbors(&self, x: u16, y: u16) -> ArrayVec<(u16, u16), 8> {
        self.neighbors(x, y)
            .into_iter()
            .filter(|&(nx, ny)| self.animal_at(nx, ny).is_none())
            .collect()
    }

    fn prey_neighbors(&self, x: u16, y: u16) -> ArrayVec<(u16, u16), 8> {
        self.neighbors(x, y)
            .into_iter()
            .filter(|&(nx, ny)| {
                self.animal_at(nx, ny).map(|a| a.kind) == Some(AnimalKind::Rabbit)
            })
            .collect()
    }

    fn animal_at(&self, x: u16, y: u16) -> Option<Animal> {
        self.cells.get(x, y).and_then(|c| c.animal)
    }

    fn set_animal(&mut self, x: u16, y: u16, animal: Option<Animal>) {
        if let Some(cell) = self.cells.get_mut(x, y) {
            cell.animal = animal;
        }
    }

    fn move_animals(&mut self) {
        let mut order: Vec<(u16, u16)> = self
            .cells
            .iter()
            .filter(|(_, _, c)| c.animal.is_some())
            .map(|(x, y, _)| (x, y))
            .collect();
        self.rng.shuffle(&mut order);

        let mut acted = Grid::filled(self.cells.size_x(), self.cells.size_y(), false);
        for (x, y) in order {
            if acted.get(x, y).copied().unwrap_or(true) {
                continue;
            }
            // Eaten earlier this step.
            let Some(mut animal) = self.animal_at(x, y) else {
                continue;
            };

            animal.hunger += 1;
            if animal.hunger > MAX_HUNGER {
                self.set_animal(x, y, None);
                continue;
            }

            let mut dest = None;
            match animal.kind {
                AnimalKind::Rabbit => {
                    if let Some(cell) = self.cells.get_mut(x, y) {
                        if cell.grass > 0 {
                            cell.grass -= 1;
                            animal.hunger = animal.hunger.saturating_sub(2);
                        }
                    }
                }
                AnimalKind::Fox => {
                    let prey = self.prey_neighbors(x, y);
                    if let Some(target) = self.rng.pick(&prey) {
                        animal.hunger = 0;
                        dest = Some(target);
                    }
                }
            }
            if dest.is_none() {
                let free = self.free_neighbors(x, y);
                dest = self.rng.pick(&free);
            }

            let (fx, fy) = dest.unwrap_or((x, y));
            if (fx, fy) != (x, y) {
                let breeds = animal.is_well_fed() && self.rng.one_in(breed_odds(animal.kind));
                let left_behind = breeds.then(|| Animal::new(animal.kind, NEWBORN_HUNGER));
                self.set_animal(x, y, left_behind);
                if left_behind.is_some() {
                    acted.set(x, y, true);
                }
            }
            self.set_animal(fx, fy, Some(animal));
            acted.set(fx, fy, true);
        }
    }
}

fn breed_odds(kind: AnimalKind) -> u32 {
    match kind {
        AnimalKind::Rabbit => 4,
        AnimalKind::Fox => 8,
    }
}

impl Engine for World {
    fn size_x(&self) -> u16 {
        self.cells.size_x()
    }

    fn size_y(&self) -> u16 {
        self.cells.size_y()
    }

    fn advance(&mut self) {
        self.grow_grass();
        self.move_animals();
        self.step += 1;
        // Reuse the snapshot allocation across steps.
        let mut state = self.state.take().unwrap_or_default();
        state.clear();
        for record in self.cells.cells() {
            codec::encode_record_into(record, &mut state);
        }
        self.state = Some(state);
    }

    fn current_state(&self) -> Option<&str> {
        self.state.as_deref()
    }
}
