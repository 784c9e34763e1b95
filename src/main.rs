//! Rabbits and Foxes terminal viewer (default binary).
//!
//! Steps the demo world on a fixed playback clock and paints each snapshot into the
//! terminal. Uses crossterm for input and a framebuffer-based renderer.

use std::time::Instant;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{info, warn};

use tui_ecosim::core::{run_tick, Engine, PlaybackClock, RenderSync, TickOutcome};
use tui_ecosim::engine::World;
use tui_ecosim::input::{handle_key_event, should_quit};
use tui_ecosim::term::{
    FrameBuffer, GridView, Scroll, StatusView, TerminalRenderer, Viewport, TITLE,
};
use tui_ecosim::types::PlaybackAction;
use tui_ecosim::{logging, ViewerConfig};

fn main() -> Result<()> {
    let config = ViewerConfig::from_env();
    logging::init(config.log_path.as_deref())?;
    info!(
        size_x = config.size_x,
        size_y = config.size_y,
        tick_ms = config.tick_ms,
        seed = config.seed,
        "viewer starting"
    );

    let mut term = TerminalRenderer::new();
    term.enter(TITLE)?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    info!("viewer stopped");
    result
}

fn run(term: &mut TerminalRenderer, config: &ViewerConfig) -> Result<()> {
    let mut world = World::new(&config.world());
    let mut sync = RenderSync::new(world.size_x(), world.size_y());

    let mut clock = PlaybackClock::new(config.tick_interval(), Instant::now());
    let control = clock.control();
    if config.start_paused {
        control.pause();
    }

    let view = GridView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut scroll = Scroll::default();
    let mut census = None;
    let mut last_error: Option<String> = None;

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        let status = StatusView {
            state: control.state(),
            ticks: clock.ticks(),
            census,
            last_error: last_error.as_deref(),
        };
        view.render_into(&sync, &status, scroll, viewport, &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = clock.time_until_next(Instant::now());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }

                    match handle_key_event(key) {
                        Some(PlaybackAction::Pause) => {
                            control.pause();
                        }
                        Some(PlaybackAction::Play) => {
                            control.resume();
                        }
                        Some(PlaybackAction::Toggle) => {
                            control.toggle();
                        }
                        Some(PlaybackAction::Pan { dx, dy }) => {
                            scroll = view.scrolled(
                                scroll,
                                dx,
                                dy,
                                sync.size_x(),
                                sync.size_y(),
                                viewport,
                            );
                        }
                        None => {}
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if clock.poll(Instant::now()) {
            match run_tick(&mut world, &mut sync, &control) {
                Ok(TickOutcome::Rendered { census: counted, .. }) => {
                    census = Some(counted);
                    last_error = None;
                }
                Ok(TickOutcome::NoSnapshot | TickOutcome::Interrupted) => {}
                Err(e) => {
                    // Only this tick is lost; the clock keeps running.
                    warn!(tick = clock.ticks(), "tick aborted");
                    last_error = Some(e.to_string());
                }
            }
        }
    }
}
