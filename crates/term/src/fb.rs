//! Styled character grid the views draw into.

use std::fmt;

pub use crate::types::Rgb;

/// Colors and weight of one terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
}

impl CellStyle {
    pub const fn new(fg: Rgb, bg: Rgb) -> Self {
        Self {
            fg,
            bg,
            bold: false,
        }
    }

    pub const fn bold(self) -> Self {
        Self { bold: true, ..self }
    }
}

/// Light gray on black.
impl Default for CellStyle {
    fn default() -> Self {
        Self::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Cell {
    pub const BLANK: Cell = Cell {
        ch: ' ',
        style: CellStyle::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0)),
    };
}

impl Default for Cell {
    fn default() -> Self {
        Self::BLANK
    }
}

/// Row-major grid of styled cells, one per terminal column/row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let mut fb = Self {
            width: 0,
            height: 0,
            cells: Vec::new(),
        };
        fb.reset(width, height);
        fb
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Blank every cell, changing the size if needed.
    ///
    /// The allocation is kept, so resetting to the same or a smaller size never allocates.
    pub fn reset(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.cells.clear();
        self.cells
            .resize(width as usize * height as usize, Cell::BLANK);
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.cells[y as usize * self.width as usize + x as usize])
    }

    /// Row `y`, or an empty slice past the bottom edge.
    pub fn row(&self, y: u16) -> &[Cell] {
        if y >= self.height {
            return &[];
        }
        let start = y as usize * self.width as usize;
        &self.cells[start..start + self.width as usize]
    }

    /// Set one cell; writes outside the buffer are dropped.
    pub fn put(&mut self, x: u16, y: u16, ch: char, style: CellStyle) {
        if x < self.width && y < self.height {
            self.cells[y as usize * self.width as usize + x as usize] = Cell { ch, style };
        }
    }

    /// Write `s` from `(x, y)`, clipped at the right edge. Returns the next free column.
    pub fn put_str(&mut self, x: u16, y: u16, s: &str, style: CellStyle) -> u16 {
        let mut cx = x;
        for ch in s.chars() {
            if cx >= self.width {
                break;
            }
            self.put(cx, y, ch, style);
            cx += 1;
        }
        cx
    }

    /// A `fmt::Write` cursor at `(x, y)`, so status lines can use `write!` without
    /// building intermediate strings.
    pub fn pen(&mut self, x: u16, y: u16, style: CellStyle) -> Pen<'_> {
        Pen {
            fb: self,
            x,
            y,
            style,
        }
    }

    /// Row `y` as plain text.
    pub fn row_text(&self, y: u16) -> String {
        self.row(y).iter().map(|c| c.ch).collect()
    }
}

/// Formatted text writer into a [`FrameBuffer`] row.
pub struct Pen<'a> {
    fb: &'a mut FrameBuffer,
    x: u16,
    y: u16,
    style: CellStyle,
}

impl Pen<'_> {
    /// Column the next character lands in.
    pub fn x(&self) -> u16 {
        self.x
    }
}

impl fmt::Write for Pen<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.x = self.fb.put_str(self.x, self.y, s, self.style);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt::Write;

    #[test]
    fn pen_formats_in_place() {
        let mut fb = FrameBuffer::new(16, 1);
        let mut pen = fb.pen(1, 0, CellStyle::default());
        write!(pen, "tick {}", 4096).unwrap();
        assert_eq!(pen.x(), 10);
        assert_eq!(fb.row_text(0), " tick 4096      ");
    }

    #[test]
    fn text_is_clipped_at_right_edge() {
        let mut fb = FrameBuffer::new(3, 1);
        assert_eq!(fb.put_str(1, 0, "abc", CellStyle::default()), 3);
        assert_eq!(fb.row_text(0), " ab");
    }

    #[test]
    fn reset_blanks_and_resizes() {
        let mut fb = FrameBuffer::new(2, 2);
        fb.put(1, 1, 'x', CellStyle::default().bold());
        fb.reset(3, 1);
        assert_eq!((fb.width(), fb.height()), (3, 1));
        assert!(fb.row(0).iter().all(|&c| c == Cell::BLANK));
        assert!(fb.row(1).is_empty());
        assert_eq!(fb.get(1, 1), None);
    }
}
