//! Demo simulation engine.
//!
//! A small grass/rabbit/fox ecology that implements [`tui_ecosim_core::Engine`], so the
//! viewer has something to drive. The viewer treats it as opaque: it only calls
//! `advance()` and reads back the encoded snapshot.
//!
//! # Example
//!
//! ```
//! use tui_ecosim_core::Engine;
//! use tui_ecosim_engine::{World, WorldConfig};
//!
//! let mut world = World::new(&WorldConfig { size_x: 4, size_y: 3, ..WorldConfig::default() });
//! assert!(world.current_state().is_none());
//!
//! world.advance();
//! assert_eq!(world.current_state().unwrap().len(), 3 * 4 * 3);
//! ```

pub mod rng;
pub mod world;

pub use tui_ecosim_core as core;
pub use tui_ecosim_types as types;

pub use rng::SimpleRng;
pub use world::{World, WorldConfig};
