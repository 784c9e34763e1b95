//! Key mapping from terminal events to playback actions.

use crate::types::PlaybackAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Cells scrolled per pan key press.
pub const PAN_STEP: i16 = 4;

/// Map keyboard input to playback actions.
pub fn handle_key_event(key: KeyEvent) -> Option<PlaybackAction> {
    match key.code {
        // Playback
        KeyCode::Char('p') | KeyCode::Char('P') => Some(PlaybackAction::Pause),
        KeyCode::Char(' ') | KeyCode::Enter => Some(PlaybackAction::Play),
        KeyCode::Char('t') | KeyCode::Char('T') => Some(PlaybackAction::Toggle),

        // Panning
        KeyCode::Left
        | KeyCode::Char('h')
        | KeyCode::Char('H')
        | KeyCode::Char('a')
        | KeyCode::Char('A') => Some(PlaybackAction::Pan { dx: -PAN_STEP, dy: 0 }),
        KeyCode::Right
        | KeyCode::Char('l')
        | KeyCode::Char('L')
        | KeyCode::Char('d')
        | KeyCode::Char('D') => Some(PlaybackAction::Pan { dx: PAN_STEP, dy: 0 }),
        KeyCode::Up
        | KeyCode::Char('k')
        | KeyCode::Char('K')
        | KeyCode::Char('w')
        | KeyCode::Char('W') => Some(PlaybackAction::Pan { dx: 0, dy: -PAN_STEP }),
        KeyCode::Down
        | KeyCode::Char('j')
        | KeyCode::Char('J')
        | KeyCode::Char('s')
        | KeyCode::Char('S') => Some(PlaybackAction::Pan { dx: 0, dy: PAN_STEP }),

        _ => None,
    }
}

/// Check if key should quit the viewer.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
