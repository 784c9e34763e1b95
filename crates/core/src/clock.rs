//! Playback clock: a pausable fixed-interval tick source.
//!
//! The clock is polled from the event loop (the same loop that draws), so ticks are
//! delivered on one thread and never overlap. Pause state is a single atomic flag
//! shared through [`PlaybackControl`], so pause/play can be issued from any thread.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Running,
    Paused,
}

impl PlaybackState {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlaybackState::Running => "RUNNING",
            PlaybackState::Paused => "PAUSED",
        }
    }
}

/// Cloneable pause/play handle.
///
/// All clones share one flag. Both transitions are idempotent.
#[derive(Debug, Clone, Default)]
pub struct PlaybackControl {
    paused: Arc<AtomicBool>,
}

impl PlaybackControl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Running → Paused. Returns `true` if the state changed.
    pub fn pause(&self) -> bool {
        let changed = !self.paused.swap(true, Ordering::SeqCst);
        if changed {
            info!("playback paused");
        }
        changed
    }

    /// Paused → Running. Returns `true` if the state changed.
    pub fn resume(&self) -> bool {
        let changed = self.paused.swap(false, Ordering::SeqCst);
        if changed {
            info!("playback resumed");
        }
        changed
    }

    /// Flip the state and return the new one.
    pub fn toggle(&self) -> PlaybackState {
        let was_paused = self.paused.fetch_xor(true, Ordering::SeqCst);
        let state = if was_paused {
            PlaybackState::Running
        } else {
            PlaybackState::Paused
        };
        info!(state = state.as_str(), "playback toggled");
        state
    }

    pub fn is_paused(&self) -> bool {
        self.paused.load(Ordering::SeqCst)
    }

    pub fn state(&self) -> PlaybackState {
        if self.is_paused() {
            PlaybackState::Paused
        } else {
            PlaybackState::Running
        }
    }
}

/// Fixed-interval tick scheduler with pause support.
///
/// - Starts Running; the first tick is due one interval after construction.
/// - While Paused, `poll` never fires and the pending deadline is dropped.
/// - After a resume the next tick is one full interval away; missed ticks are not replayed.
/// - At most one tick fires per `poll`, and the next deadline is measured from the
///   moment that tick fired, so a slow tick delays the schedule instead of bunching it.
#[derive(Debug, Clone)]
pub struct PlaybackClock {
    interval: Duration,
    control: PlaybackControl,
    next_due: Option<Instant>,
    ticks: u64,
}

impl PlaybackClock {
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            control: PlaybackControl::new(),
            next_due: Some(now + interval),
            ticks: 0,
        }
    }

    /// A handle sharing this clock's pause flag.
    pub fn control(&self) -> PlaybackControl {
        self.control.clone()
    }

    pub fn pause(&self) -> bool {
        self.control.pause()
    }

    pub fn resume(&self) -> bool {
        self.control.resume()
    }

    pub fn state(&self) -> PlaybackState {
        self.control.state()
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Ticks fired so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Check the clock at `now`. Returns `true` when a tick should run.
    pub fn poll(&mut self, now: Instant) -> bool {
        if self.control.is_paused() {
            self.next_due = None;
            return false;
        }

        match self.next_due {
            None => {
                self.next_due = Some(now + self.interval);
                false
            }
            Some(due) if now >= due => {
                self.next_due = Some(now + self.interval);
                self.ticks += 1;
                true
            }
            Some(_) => false,
        }
    }

    /// How long the event loop may wait before polling again.
    ///
    /// While paused (or right after a resume) this is one interval, which keeps the
    /// loop responsive without spinning.
    pub fn time_until_next(&self, now: Instant) -> Duration {
        match self.next_due {
            Some(due) if !self.control.is_paused() => due.saturating_duration_since(now),
            _ => self.interval,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn starts_running() {
        let clock = PlaybackClock::new(200 * MS, Instant::now());
        assert_eq!(clock.state(), PlaybackState::Running);
    }

    #[test]
    fn fires_once_per_interval() {
        let t0 = Instant::now();
        let mut clock = PlaybackClock::new(200 * MS, t0);
        assert!(!clock.poll(t0 + 199 * MS));
        assert!(clock.poll(t0 + 200 * MS));
        assert!(!clock.poll(t0 + 201 * MS));
        assert!(clock.poll(t0 + 400 * MS));
        assert_eq!(clock.ticks(), 2);
    }

    #[test]
    fn late_poll_fires_a_single_tick() {
        let t0 = Instant::now();
        let mut clock = PlaybackClock::new(200 * MS, t0);
        assert!(clock.poll(t0 + 1000 * MS));
        assert!(!clock.poll(t0 + 1001 * MS));
        assert_eq!(clock.time_until_next(t0 + 1001 * MS), 199 * MS);
    }

    #[test]
    fn toggle_flips_state() {
        let control = PlaybackControl::new();
        assert_eq!(control.toggle(), PlaybackState::Paused);
        assert_eq!(control.toggle(), PlaybackState::Running);
    }

    #[test]
    fn pause_and_resume_report_changes() {
        let control = PlaybackControl::new();
        assert!(control.pause());
        assert!(!control.pause());
        assert!(control.resume());
        assert!(!control.resume());
    }
}
