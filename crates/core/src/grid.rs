//! Fixed-size 2-D arena indexed by `(x, y)`.
//!
//! Cells are stored column-major, the same order records appear in a snapshot:
//! cell `(x, y)` lives at index `x * size_y + y`.

/// A `size_x × size_y` grid of `T`, allocated once and never resized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    size_x: u16,
    size_y: u16,
    cells: Vec<T>,
}

impl<T: Clone> Grid<T> {
    /// Create a grid with every cell set to `fill`.
    pub fn filled(size_x: u16, size_y: u16, fill: T) -> Self {
        Self {
            size_x,
            size_y,
            cells: vec![fill; cell_count(size_x, size_y)],
        }
    }
}

impl<T> Grid<T> {
    /// Build a grid from cells already laid out column-major.
    ///
    /// Returns `None` when `cells.len()` does not match the dimensions.
    pub fn from_column_major(size_x: u16, size_y: u16, cells: Vec<T>) -> Option<Self> {
        if cells.len() != cell_count(size_x, size_y) {
            return None;
        }
        Some(Self {
            size_x,
            size_y,
            cells,
        })
    }

    pub fn size_x(&self) -> u16 {
        self.size_x
    }

    pub fn size_y(&self) -> u16 {
        self.size_y
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn same_shape<U>(&self, other: &Grid<U>) -> bool {
        self.size_x == other.size_x && self.size_y == other.size_y
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.size_x || y >= self.size_y {
            return None;
        }
        Some(cell_index(x, y, self.size_y))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&T> {
        self.idx(x, y).map(|i| &self.cells[i])
    }

    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut T> {
        self.idx(x, y).map(move |i| &mut self.cells[i])
    }

    pub fn set(&mut self, x: u16, y: u16, value: T) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = value;
        }
    }

    /// Cells in column-major order.
    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    pub fn cells_mut(&mut self) -> &mut [T] {
        &mut self.cells
    }

    /// Iterate `(x, y, cell)` in column-major order.
    pub fn iter(&self) -> impl Iterator<Item = (u16, u16, &T)> + '_ {
        let size_y = self.size_y.max(1) as usize;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, c)| ((i / size_y) as u16, (i % size_y) as u16, c))
    }

    /// Map every cell into a new grid of the same shape.
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Grid<U> {
        Grid {
            size_x: self.size_x,
            size_y: self.size_y,
            cells: self.cells.iter().map(f).collect(),
        }
    }
}

/// Number of cells in a `size_x × size_y` grid.
#[inline]
pub fn cell_count(size_x: u16, size_y: u16) -> usize {
    (size_x as usize) * (size_y as usize)
}

/// Column-major index of `(x, y)`.
#[inline]
pub fn cell_index(x: u16, y: u16, size_y: u16) -> usize {
    (x as usize) * (size_y as usize) + (y as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_is_column_major() {
        let mut g = Grid::filled(3, 2, 0u8);
        g.set(1, 0, 7);
        g.set(2, 1, 9);
        assert_eq!(g.cells(), &[0, 0, 7, 0, 0, 9]);
        assert_eq!(cell_index(2, 1, 2), 5);
    }

    #[test]
    fn out_of_bounds_is_ignored() {
        let mut g = Grid::filled(2, 2, 1u8);
        g.set(2, 0, 5);
        g.set(0, 2, 5);
        assert!(g.get(2, 0).is_none());
        assert!(g.cells().iter().all(|&c| c == 1));
    }

    #[test]
    fn iter_yields_coordinates_in_record_order() {
        let g = Grid::from_column_major(2, 2, vec!['a', 'b', 'c', 'd']).unwrap();
        let seen: Vec<_> = g.iter().map(|(x, y, c)| (x, y, *c)).collect();
        assert_eq!(
            seen,
            vec![(0, 0, 'a'), (0, 1, 'b'), (1, 0, 'c'), (1, 1, 'd')]
        );
    }

    #[test]
    fn from_column_major_rejects_wrong_len() {
        assert!(Grid::from_column_major(2, 2, vec![0u8; 3]).is_none());
    }
}
