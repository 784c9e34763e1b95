//! Terminal rendering module.
//!
//! A small rendering layer for the world viewer. It avoids widget/layout libraries and
//! instead paints the drawable grid owned by [`core::RenderSync`] into a simple
//! framebuffer that is diffed and flushed to the terminal.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Only write the terminal cells that changed since the last frame
//! - Allow precise control over aspect ratio (2 chars wide per world cell)

pub mod fb;
pub mod grid_view;
pub mod renderer;

pub use tui_ecosim_core as core;
pub use tui_ecosim_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Pen, Rgb};
pub use grid_view::{GridView, Scroll, StatusView, Viewport, TITLE};
pub use renderer::TerminalRenderer;
