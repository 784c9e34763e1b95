//! One playback tick: advance the engine, then decode, color and repaint.

use tracing::{debug, error};

use crate::census::Census;
use crate::clock::PlaybackControl;
use crate::codec::{self, DecodeError};
use crate::engine::Engine;
use crate::palette;
use crate::sync::{RenderSync, SyncError};

/// What a tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The drawable grid was repainted from the new snapshot.
    Rendered { changed: usize, census: Census },
    /// The engine has no snapshot yet; the grid keeps its previous state.
    NoSnapshot,
    /// A pause arrived while the tick was in flight; the repaint was not committed.
    ///
    /// The engine has already advanced, so that step is never shown.
    Interrupted,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TickError {
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error(transparent)]
    Sync(#[from] SyncError),
}

/// Run one tick against `engine` and `sync`.
///
/// The pause flag is checked once more after decoding, right before the grid is
/// repainted, so a slow engine never holds up a pause request.
///
/// # Errors
///
/// A malformed snapshot fails this tick only; the grid is left untouched and the
/// caller can keep ticking.
pub fn run_tick<E: Engine + ?Sized>(
    engine: &mut E,
    sync: &mut RenderSync,
    control: &PlaybackControl,
) -> Result<TickOutcome, TickError> {
    engine.advance();

    let Some(snapshot) = engine.current_state() else {
        debug!("no snapshot yet, skipping render");
        return Ok(TickOutcome::NoSnapshot);
    };

    let decoded = codec::decode(snapshot, engine.size_x(), engine.size_y()).map_err(|e| {
        error!(error = %e, "snapshot rejected");
        debug!(snapshot = e.snapshot().unwrap_or(""), "rejected snapshot text");
        e
    })?;
    let visuals = palette::map_each(&decoded);

    if control.is_paused() {
        debug!("paused mid-tick, render not committed");
        return Ok(TickOutcome::Interrupted);
    }

    let changed = sync.apply(&visuals)?;
    Ok(TickOutcome::Rendered {
        changed,
        census: Census::count(&decoded),
    })
}
