//! Terminal vocabulary trainer (default binary).
//!
//! Fixed-timestep loop: poll crossterm input until the next tick, apply the
//! mapped action, advance session timers, redraw through the diffing
//! framebuffer renderer.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};

use oshi_vocab::input::{handle_key_event, should_quit};
use oshi_vocab::logging::init_tracing;
use oshi_vocab::term::{FrameBuffer, TerminalRenderer, Viewport};
use oshi_vocab::types::TICK_MS;
use oshi_vocab::{App, AppConfig};

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    let _log_guard = init_tracing(&config);

    // Load before touching the terminal so dataset errors print normally.
    let mut app = App::from_config(&config).context("failed to load vocabulary")?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut app);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(err) = &result {
        tracing::error!(error = %err, "exited with error");
    }
    result
}

fn run(term: &mut TerminalRenderer, app: &mut App) -> Result<()> {
    let mut fb = FrameBuffer::new(0, 0);
    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut dirty = true;

    loop {
        if dirty {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            app.render_into(Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb)?;
            dirty = false;
        }

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if should_quit(key) {
                        tracing::info!("quit requested");
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        dirty |= app.handle(action);
                    }
                    if app.should_quit() {
                        return Ok(());
                    }
                }
                Event::Resize(_, _) => {
                    term.invalidate();
                    dirty = true;
                }
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            dirty |= app.tick(TICK_MS);
        }
    }
}
