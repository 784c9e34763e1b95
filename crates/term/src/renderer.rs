//! Flushes framebuffers to the terminal.
//!
//! Each frame is compared row by row with the last one flushed and only the changed
//! runs are written. A tick that recolors a handful of world cells costs a handful of
//! short writes, and a frame identical to the last one writes nothing at all.

use std::io::{self, Write};
use std::ops::Range;

use anyhow::Result;
use crossterm::{
    cursor,
    style::{Attribute, Color, Print, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};

/// Unchanged cells between two changed runs that are re-sent rather than skipped with a
/// cursor move.
const MAX_GAP: usize = 2;

pub struct TerminalRenderer<W: Write = io::Stdout> {
    out: W,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            last: None,
            buf: Vec::with_capacity(64 * 1024),
        }
    }

    pub fn get_mut(&mut self) -> &mut W {
        &mut self.out
    }

    /// Raw mode, alternate screen, hidden cursor and the window title.
    pub fn enter(&mut self, title: &str) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf
            .queue(terminal::EnterAlternateScreen)?
            .queue(terminal::SetTitle(title))?
            .queue(cursor::Hide)?
            .queue(terminal::DisableLineWrap)?;
        self.flush()
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf
            .queue(SetAttribute(Attribute::Reset))?
            .queue(terminal::EnableLineWrap)?
            .queue(cursor::Show)?
            .queue(terminal::LeaveAlternateScreen)?;
        self.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Make the next draw a full redraw (after a terminal resize).
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw `fb`, then swap it with the previously drawn frame.
    ///
    /// After the call `fb` holds stale content for the caller to overwrite, so one pair of
    /// buffers serves every frame.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.buf.clear();
        let mut painter = Painter {
            out: &mut self.buf,
            style: None,
        };
        match self.last.as_ref() {
            Some(prev) if prev.width() == fb.width() && prev.height() == fb.height() => {
                painter.diff(prev, fb)?
            }
            _ => painter.full(fb)?,
        }
        painter.finish()?;
        self.flush()?;

        let prev = self.last.get_or_insert_with(|| FrameBuffer::new(0, 0));
        std::mem::swap(prev, fb);
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        if !self.buf.is_empty() {
            self.out.write_all(&self.buf)?;
        }
        self.out.flush()?;
        Ok(())
    }
}

/// Escape-sequence writer for one frame; remembers the active style.
struct Painter<'a> {
    out: &'a mut Vec<u8>,
    style: Option<CellStyle>,
}

impl Painter<'_> {
    fn full(&mut self, fb: &FrameBuffer) -> io::Result<()> {
        self.out.queue(terminal::Clear(terminal::ClearType::All))?;
        for y in 0..fb.height() {
            self.run(0, y, fb.row(y))?;
        }
        Ok(())
    }

    fn diff(&mut self, prev: &FrameBuffer, next: &FrameBuffer) -> io::Result<()> {
        for y in 0..next.height() {
            let (old, new) = (prev.row(y), next.row(y));
            if old == new {
                continue;
            }
            for span in (Runs { old, new, pos: 0 }) {
                self.run(span.start as u16, y, &new[span])?;
            }
        }
        Ok(())
    }

    fn run(&mut self, x: u16, y: u16, cells: &[Cell]) -> io::Result<()> {
        self.out.queue(cursor::MoveTo(x, y))?;
        for cell in cells {
            if self.style != Some(cell.style) {
                self.set_style(cell.style)?;
            }
            self.out.queue(Print(cell.ch))?;
        }
        Ok(())
    }

    // SGR 0 also clears both colors, so it must precede them.
    fn set_style(&mut self, style: CellStyle) -> io::Result<()> {
        self.out
            .queue(SetAttribute(Attribute::Reset))?
            .queue(SetForegroundColor(color(style.fg)))?
            .queue(SetBackgroundColor(color(style.bg)))?;
        if style.bold {
            self.out.queue(SetAttribute(Attribute::Bold))?;
        }
        self.style = Some(style);
        Ok(())
    }

    fn finish(self) -> io::Result<()> {
        if self.style.is_some() {
            self.out.queue(SetAttribute(Attribute::Reset))?;
        }
        Ok(())
    }
}

fn color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// Changed spans of one row, with nearby spans merged.
struct Runs<'a> {
    old: &'a [Cell],
    new: &'a [Cell],
    pos: usize,
}

impl Runs<'_> {
    fn differs(&self, i: usize) -> bool {
        self.old.get(i) != self.new.get(i)
    }
}

impl Iterator for Runs<'_> {
    type Item = Range<usize>;

    fn next(&mut self) -> Option<Range<usize>> {
        let len = self.new.len();
        let start = (self.pos..len).find(|&i| self.differs(i))?;
        let mut end = start + 1;
        while let Some(next) = (end..len).find(|&i| self.differs(i)) {
            if next - end > MAX_GAP {
                break;
            }
            end = next + 1;
        }
        self.pos = end;
        Some(start..end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORANGE_ON_GREEN: CellStyle = CellStyle::new(Rgb::new(255, 140, 0), Rgb::new(0, 100, 0));

    fn frame(w: u16, h: u16, marks: &[(u16, u16, char, CellStyle)]) -> FrameBuffer {
        let mut fb = FrameBuffer::new(w, h);
        for &(x, y, ch, style) in marks {
            fb.put(x, y, ch, style);
        }
        fb
    }

    fn drawn(term: &mut TerminalRenderer<Vec<u8>>, mut fb: FrameBuffer) -> String {
        term.get_mut().clear();
        term.draw_swap(&mut fb).unwrap();
        String::from_utf8(term.get_mut().clone()).unwrap()
    }

    fn spans(old: &FrameBuffer, new: &FrameBuffer, y: u16) -> Vec<Range<usize>> {
        Runs {
            old: old.row(y),
            new: new.row(y),
            pos: 0,
        }
        .collect()
    }

    #[test]
    fn colors_are_active_when_glyph_prints() {
        let mut term = TerminalRenderer::with_writer(Vec::new());
        let out = drawn(&mut term, frame(1, 1, &[(0, 0, 'X', ORANGE_ON_GREEN)]));
        assert!(out.contains("\x1b[0m\x1b[38;2;255;140;0m\x1b[48;2;0;100;0mX"));
    }

    #[test]
    fn bold_follows_colors() {
        let mut term = TerminalRenderer::with_writer(Vec::new());
        let out = drawn(&mut term, frame(1, 1, &[(0, 0, 'B', ORANGE_ON_GREEN.bold())]));
        assert!(out.contains("\x1b[48;2;0;100;0m\x1b[1mB"));
    }

    #[test]
    fn unchanged_frame_writes_nothing() {
        let mut term = TerminalRenderer::with_writer(Vec::new());
        let marks = [(1, 0, 'X', ORANGE_ON_GREEN)];
        drawn(&mut term, frame(3, 2, &marks));
        assert_eq!(drawn(&mut term, frame(3, 2, &marks)), "");
    }

    #[test]
    fn diff_jumps_to_changed_cell() {
        let mut term = TerminalRenderer::with_writer(Vec::new());
        drawn(&mut term, frame(3, 2, &[]));
        let out = drawn(&mut term, frame(3, 2, &[(2, 1, 'X', ORANGE_ON_GREEN)]));
        assert!(out.starts_with("\x1b[2;3H"));
        assert!(!out.contains("\x1b[2J"));
    }

    #[test]
    fn size_change_and_invalidate_redraw_everything() {
        let mut term = TerminalRenderer::with_writer(Vec::new());
        drawn(&mut term, frame(3, 2, &[]));
        assert!(drawn(&mut term, frame(4, 2, &[])).contains("\x1b[2J"));

        term.invalidate();
        assert!(drawn(&mut term, frame(4, 2, &[])).contains("\x1b[2J"));
    }

    #[test]
    fn nearby_changes_share_one_run() {
        let old = FrameBuffer::new(12, 1);
        let s = CellStyle::default();
        let new = frame(12, 1, &[(1, 0, 'a', s), (3, 0, 'b', s), (7, 0, 'c', s)]);
        // Gap of 1 is bridged, gap of 3 is not.
        assert_eq!(spans(&old, &new, 0), vec![1..4, 7..8]);
    }

    #[test]
    fn color_only_change_is_a_run() {
        let old = FrameBuffer::new(3, 1);
        let recolored = CellStyle::new(Rgb::new(0, 100, 0), Rgb::new(0, 0, 0));
        let new = frame(3, 1, &[(2, 0, ' ', recolored)]);
        assert_eq!(spans(&old, &new, 0), vec![2..3]);
    }
}
