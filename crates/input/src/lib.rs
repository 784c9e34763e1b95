//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::PlaybackAction`]: the keyboard
//! stands in for the pause/play buttons, and the movement keys pan the view over
//! worlds larger than the terminal.

pub mod map;

pub use tui_ecosim_types as types;

pub use map::{handle_key_event, should_quit, PAN_STEP};
