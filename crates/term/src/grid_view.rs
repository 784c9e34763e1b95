//! GridView: paints the drawable world grid and status lines into a framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use std::fmt::Write;

use crate::core::{Census, PlaybackState, RenderSync};
use crate::fb::{CellStyle, FrameBuffer, Rgb};

/// Window title and header text.
pub const TITLE: &str = "Rabbits and Foxes";

const HEADER_ROWS: u16 = 2;
const FOOTER_ROWS: u16 = 1;

const HELP: &str = "p pause  space play  t toggle  arrows pan  q quit";

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Top-left world cell shown in the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Scroll {
    pub x: u16,
    pub y: u16,
}

/// Everything the status lines show besides the grid itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusView<'a> {
    pub state: PlaybackState,
    pub ticks: u64,
    /// Counts from the last rendered snapshot.
    pub census: Option<Census>,
    /// Message of the last failed tick, cleared by the next good one.
    pub last_error: Option<&'a str>,
}

impl StatusView<'_> {
    pub fn new(state: PlaybackState) -> Self {
        Self {
            state,
            ticks: 0,
            census: None,
            last_error: None,
        }
    }
}

/// Terminal renderer for the drawable grid.
pub struct GridView {
    /// World cell width in terminal columns.
    cell_w: u16,
    /// World cell height in terminal rows.
    cell_h: u16,
}

impl Default for GridView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GridView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// How many world cells (columns, rows) fit in `viewport`.
    pub fn visible_cells(&self, size_x: u16, size_y: u16, viewport: Viewport) -> (u16, u16) {
        let inner_w = viewport.width.saturating_sub(2);
        let inner_h = viewport
            .height
            .saturating_sub(HEADER_ROWS + FOOTER_ROWS + 2);
        (
            size_x.min(inner_w / self.cell_w),
            size_y.min(inner_h / self.cell_h),
        )
    }

    /// Apply a pan of `(dx, dy)` cells, keeping the view inside the world.
    pub fn scrolled(
        &self,
        scroll: Scroll,
        dx: i16,
        dy: i16,
        size_x: u16,
        size_y: u16,
        viewport: Viewport,
    ) -> Scroll {
        let (vis_x, vis_y) = self.visible_cells(size_x, size_y, viewport);
        Scroll {
            x: shift(scroll.x, dx, size_x.saturating_sub(vis_x)),
            y: shift(scroll.y, dy, size_y.saturating_sub(vis_y)),
        }
    }

    /// Render into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers reuse one framebuffer across
    /// frames and it is only resized when the terminal size changes.
    pub fn render_into(
        &self,
        sync: &RenderSync,
        status: &StatusView<'_>,
        scroll: Scroll,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.reset(viewport.width, viewport.height);

        self.draw_header(fb, status);

        let (vis_x, vis_y) = self.visible_cells(sync.size_x(), sync.size_y(), viewport);
        let scroll = self.scrolled(scroll, 0, 0, sync.size_x(), sync.size_y(), viewport);
        let frame_w = vis_x * self.cell_w + 2;
        let frame_h = vis_y * self.cell_h + 2;
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = HEADER_ROWS;

        if frame_h <= viewport.height.saturating_sub(HEADER_ROWS) {
            let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
            self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);
        }

        for j in 0..vis_y {
            for i in 0..vis_x {
                if let Some(swatch) = sync.get(scroll.x + i, scroll.y + j) {
                    let style = CellStyle::new(swatch.fill, swatch.outline);
                    let px = start_x + 1 + i * self.cell_w;
                    let py = start_y + 1 + j * self.cell_h;
                    self.draw_swatch(fb, px, py, style);
                }
            }
        }

        self.draw_footer(fb, status, viewport);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        sync: &RenderSync,
        status: &StatusView<'_>,
        scroll: Scroll,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(sync, status, scroll, viewport, &mut fb);
        fb
    }

    fn draw_header(&self, fb: &mut FrameBuffer, status: &StatusView<'_>) {
        let label = CellStyle::default().bold();
        let value = CellStyle::default();
        let state_style = match status.state {
            PlaybackState::Running => CellStyle::new(Rgb::new(120, 220, 120), Rgb::new(0, 0, 0)),
            PlaybackState::Paused => CellStyle::new(Rgb::new(240, 200, 80), Rgb::new(0, 0, 0)),
        }
        .bold();

        let x = fb.put_str(0, 0, TITLE, label);
        fb.put_str(x + 2, 0, status.state.as_str(), state_style);

        let mut pen = fb.pen(0, 1, value);
        let _ = write!(pen, "tick {}", status.ticks);
        if let Some(c) = status.census {
            let _ = write!(
                pen,
                "  rabbits {} ({} hungry)  foxes {} ({} hungry)",
                c.rabbits, c.hungry_rabbits, c.foxes, c.hungry_foxes
            );
        }
    }

    fn draw_footer(&self, fb: &mut FrameBuffer, status: &StatusView<'_>, viewport: Viewport) {
        if viewport.height <= HEADER_ROWS {
            return;
        }
        let y = viewport.height - 1;
        match status.last_error {
            Some(msg) => {
                let style = CellStyle::new(Rgb::new(255, 90, 90), Rgb::new(0, 0, 0)).bold();
                let _ = write!(fb.pen(0, y, style), "error: {msg}");
            }
            None => {
                let style = CellStyle::new(Rgb::new(140, 140, 140), Rgb::new(0, 0, 0));
                fb.put_str(0, y, HELP, style);
            }
        }
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put(x, y, '┌', style);
        fb.put(x + w - 1, y, '┐', style);
        fb.put(x, y + h - 1, '└', style);
        fb.put(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put(x + dx, y, '─', style);
            fb.put(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put(x, y + dy, '│', style);
            fb.put(x + w - 1, y + dy, '│', style);
        }
    }

    /// Fill shows as a centered block, outline as the background around it.
    fn draw_swatch(&self, fb: &mut FrameBuffer, px: u16, py: u16, style: CellStyle) {
        for dy in 0..self.cell_h {
            for dx in 0..self.cell_w {
                let ch = match (self.cell_w, dx) {
                    (1, _) => '■',
                    (_, 0) => '▐',
                    (w, dx) if dx == w - 1 => '▌',
                    _ => '█',
                };
                fb.put(px + dx, py + dy, ch, style);
            }
        }
    }
}

fn shift(pos: u16, delta: i16, max: u16) -> u16 {
    (pos as i32 + delta as i32).clamp(0, max as i32) as u16
}
