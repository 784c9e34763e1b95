//! Rabbits and Foxes terminal viewer (workspace facade crate).
//!
//! Re-exports the member crates under `tui_ecosim::{core,engine,input,term,types}` and
//! holds the binary-level concerns: configuration and log setup.

pub mod config;
pub mod logging;

pub use tui_ecosim_core as core;
pub use tui_ecosim_engine as engine;
pub use tui_ecosim_input as input;
pub use tui_ecosim_term as term;
pub use tui_ecosim_types as types;

pub use config::ViewerConfig;
