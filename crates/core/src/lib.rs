//! Viewer core - pure, deterministic, and testable
//!
//! This crate turns engine snapshots into repainted cells. It has **zero dependencies**
//! on terminals or I/O, making it:
//!
//! - **Deterministic**: the same snapshot always yields the same colors
//! - **Testable**: every stage is a plain function or a small state machine
//! - **Portable**: the drawable grid is an owned arena any frontend can paint
//!
//! # Module Structure
//!
//! - [`grid`]: column-major `Grid<T>` arena indexed by `(x, y)`
//! - [`codec`]: fixed-width snapshot decoding (and a fixture encoder)
//! - [`palette`]: grass ramp and hunger-tier colors
//! - [`sync`]: [`RenderSync`], the single owner and writer of the drawable grid
//! - [`clock`]: [`PlaybackClock`] and its shareable [`PlaybackControl`]
//! - [`engine`]: the [`Engine`] seam
//! - [`pipeline`]: one tick, advance → decode → map → apply
//! - [`census`]: population counts for the status line
//!
//! # Example
//!
//! ```
//! use tui_ecosim_core::{codec, palette, RenderSync};
//! use tui_ecosim_core::types::{palette as named, Rgb};
//!
//! let decoded = codec::decode("0  1r2", 1, 2).unwrap();
//! let mut sync = RenderSync::new(1, 2);
//! sync.apply(&palette::map_each(&decoded)).unwrap();
//!
//! assert_eq!(sync.get(0, 0).unwrap().fill, Rgb::new(245, 220, 180));
//! assert_eq!(sync.get(0, 1).unwrap().fill, named::GRAY);
//! ```

pub mod census;
pub mod clock;
pub mod codec;
pub mod engine;
pub mod grid;
pub mod palette;
pub mod pipeline;
pub mod sync;

pub use tui_ecosim_types as types;

// Re-export commonly used types for convenience
pub use census::Census;
pub use clock::{PlaybackClock, PlaybackControl, PlaybackState};
pub use codec::{decode, encode, validate_all, DecodeError};
pub use engine::Engine;
pub use grid::Grid;
pub use palette::{map_cell, map_each, CellVisual};
pub use pipeline::{run_tick, TickError, TickOutcome};
pub use sync::{CellSwatch, RenderSync, SyncError};
