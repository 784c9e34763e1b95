//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the viewer.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (codec, color mapping, terminal rendering, demo engine).
//!
//! # Snapshot Record Layout
//!
//! Every grid cell is encoded as a fixed-width 3-character record:
//!
//! | Offset | Meaning | Alphabet |
//! |--------|---------|----------|
//! | 0 | grass level | `'0'..='5'` |
//! | 1 | animal marker | `' '`, `'r'`, `'f'` |
//! | 2 | hunger level | `'0'..='9'` (only meaningful with an animal) |
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 200 | Default playback tick interval |
//! | `WORLD_SIZE_X` | 100 | Default world width in cells |
//! | `WORLD_SIZE_Y` | 100 | Default world height in cells |
//!
//! # Examples
//!
//! ```
//! use tui_ecosim_types::{Animal, AnimalKind, CellRecord};
//!
//! let cell = CellRecord::new(3, Some(Animal::new(AnimalKind::Fox, 7)));
//! assert_eq!(cell.grass, 3);
//! assert_eq!(cell.animal.map(|a| a.kind), Some(AnimalKind::Fox));
//!
//! assert_eq!(AnimalKind::from_marker('r'), Some(AnimalKind::Rabbit));
//! ```

/// Default playback tick interval in milliseconds.
pub const TICK_MS: u32 = 200;

/// Default world width in cells.
pub const WORLD_SIZE_X: u16 = 100;

/// Default world height in cells.
pub const WORLD_SIZE_Y: u16 = 100;

/// Width of one encoded cell record in characters.
pub const RECORD_WIDTH: usize = 3;

/// Highest valid grass level (6 tiers: 0..=5).
pub const MAX_GRASS: u8 = 5;

/// Highest valid hunger level (single decimal digit).
pub const MAX_HUNGER: u8 = 9;

/// Foxes at or below this hunger are drawn as well-fed.
pub const FOX_FED_MAX_HUNGER: u8 = 5;

/// Rabbits at or below this hunger are drawn as well-fed.
pub const RABBIT_FED_MAX_HUNGER: u8 = 3;

/// Marker character for an empty (animal-free) cell.
pub const NO_ANIMAL_MARKER: char = ' ';


/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Named colors used by the hunger tiers.
///
/// Values match the classic web/X11 named colors.
pub mod palette {
    use super::Rgb;

    /// Well-fed fox.
    pub const DARK_ORANGE: Rgb = Rgb::new(255, 140, 0);
    /// Hungry fox.
    pub const LIGHT_ORANGE: Rgb = Rgb::new(255, 165, 0);
    /// Well-fed rabbit.
    pub const GRAY: Rgb = Rgb::new(128, 128, 128);
    /// Hungry rabbit.
    pub const LIGHT_GRAY: Rgb = Rgb::new(211, 211, 211);
}

/// The two animal species that can occupy a cell
///
/// - **Rabbit**: grazes on grass, encoded as `'r'`
/// - **Fox**: hunts rabbits, encoded as `'f'`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimalKind {
    Rabbit,
    Fox,
}

impl AnimalKind {
    /// Parse the animal marker character of a cell record.
    ///
    /// Returns `None` for the empty marker and for any unknown character;
    /// callers that need to tell those apart compare against [`NO_ANIMAL_MARKER`].
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_ecosim_types::AnimalKind;
    ///
    /// assert_eq!(AnimalKind::from_marker('f'), Some(AnimalKind::Fox));
    /// assert_eq!(AnimalKind::from_marker(' '), None);
    /// ```
    pub fn from_marker(ch: char) -> Option<Self> {
        match ch {
            'r' => Some(AnimalKind::Rabbit),
            'f' => Some(AnimalKind::Fox),
            _ => None,
        }
    }

    /// Marker character used in the snapshot encoding.
    pub fn marker(&self) -> char {
        match self {
            AnimalKind::Rabbit => 'r',
            AnimalKind::Fox => 'f',
        }
    }
}

/// An animal occupying a cell, with its current hunger level (0..=9).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Animal {
    pub kind: AnimalKind,
    pub hunger: u8,
}

impl Animal {
    pub const fn new(kind: AnimalKind, hunger: u8) -> Self {
        Self { kind, hunger }
    }

    /// Whether the animal falls in its species' well-fed hunger tier.
    pub fn is_well_fed(&self) -> bool {
        match self.kind {
            AnimalKind::Fox => self.hunger <= FOX_FED_MAX_HUNGER,
            AnimalKind::Rabbit => self.hunger <= RABBIT_FED_MAX_HUNGER,
        }
    }
}

/// One decoded cell of a snapshot.
///
/// - `grass`: abundance level 0..=5
/// - `animal`: `None` for an empty cell, otherwise the occupant and its hunger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CellRecord {
    pub grass: u8,
    pub animal: Option<Animal>,
}

impl CellRecord {
    pub const fn new(grass: u8, animal: Option<Animal>) -> Self {
        Self { grass, animal }
    }

    pub const fn grass(grass: u8) -> Self {
        Self { grass, animal: None }
    }
}

/// Playback commands issued from the control surface
///
/// These are the terminal equivalents of the pause/play buttons, plus view panning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackAction {
    /// Stop delivering ticks
    Pause,
    /// Resume delivering ticks
    Play,
    /// Pause when running, play when paused
    Toggle,
    /// Scroll the viewport by whole cells
    Pan { dx: i16, dy: i16 },
}
