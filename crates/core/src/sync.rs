//! RenderSync: owns the drawable cell grid and repaints it from decoded visuals.

use crate::grid::Grid;
use crate::palette::CellVisual;
use crate::types::Rgb;

/// Initial color of every drawable cell before the first snapshot lands.
pub const BLANK: Rgb = Rgb::new(0, 0, 0);

/// One drawable rectangular cell with independent outline and fill colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellSwatch {
    pub outline: Rgb,
    pub fill: Rgb,
}

impl Default for CellSwatch {
    fn default() -> Self {
        Self {
            outline: BLANK,
            fill: BLANK,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SyncError {
    #[error("decoded grid is {got_x}x{got_y}, drawable grid is {size_x}x{size_y}")]
    SizeMismatch {
        size_x: u16,
        size_y: u16,
        got_x: u16,
        got_y: u16,
    },
}

/// Fixed `size_x × size_y` grid of drawable cells.
///
/// Created once at startup and only ever repainted. `apply` is the single writer.
#[derive(Debug, Clone)]
pub struct RenderSync {
    cells: Grid<CellSwatch>,
    generation: u64,
}

impl RenderSync {
    pub fn new(size_x: u16, size_y: u16) -> Self {
        Self {
            cells: Grid::filled(size_x, size_y, CellSwatch::default()),
            generation: 0,
        }
    }

    pub fn size_x(&self) -> u16 {
        self.cells.size_x()
    }

    pub fn size_y(&self) -> u16 {
        self.cells.size_y()
    }

    pub fn cells(&self) -> &Grid<CellSwatch> {
        &self.cells
    }

    pub fn get(&self, x: u16, y: u16) -> Option<CellSwatch> {
        self.cells.get(x, y).copied()
    }

    /// Number of successful `apply` calls so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Repaint every cell: outline from the grass color, fill from the fill color.
    ///
    /// Unchanged cells are skipped; the resulting grid is the same either way.
    /// Returns how many cells actually changed.
    ///
    /// # Errors
    ///
    /// Fails without touching any cell if `decoded` has a different shape.
    pub fn apply(&mut self, decoded: &Grid<CellVisual>) -> Result<usize, SyncError> {
        if !self.cells.same_shape(decoded) {
            return Err(SyncError::SizeMismatch {
                size_x: self.cells.size_x(),
                size_y: self.cells.size_y(),
                got_x: decoded.size_x(),
                got_y: decoded.size_y(),
            });
        }

        let mut changed = 0;
        for (swatch, visual) in self.cells.cells_mut().iter_mut().zip(decoded.cells()) {
            let next = CellSwatch {
                outline: visual.grass_color,
                fill: visual.fill_color,
            };
            if *swatch != next {
                *swatch = next;
                changed += 1;
            }
        }
        self.generation += 1;
        Ok(changed)
    }
}
