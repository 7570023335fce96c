//! Terminal Snake runner (default binary).
//!
//! Drives the core `GameLoop` from a crossterm event loop: input is polled
//! until the next tick is due, then the loop advances by the measured elapsed
//! time. Rendering goes through the framebuffer-based `Screen`.

use std::fs::File;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use log::{debug, error, info, warn, LevelFilter};
use simplelog::{Config, WriteLogger};

use tui_snake::core::GameLoop;
use tui_snake::input::{handle_key_event, should_quit, PointerTracker};
use tui_snake::term::{GameView, Screen, Viewport};
use tui_snake::types::GameConfig;

/// Poll timeout while no tick is scheduled (game over screen).
const IDLE_POLL_MS: u64 = 250;

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    config.validate().context("invalid game configuration")?;
    init_logging(&config)?;
    info!("starting tui-snake: {:?}", config);

    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut screen = Screen::new(GameView::default(), Viewport::new(w, h));
    screen.enter()?;

    let result = run(&mut screen, config);

    // Always try to restore terminal state.
    warn_on_restore_failure(screen.exit());
    if let Err(err) = &result {
        error!("exiting with error: {:#}", err);
    }
    result
}

/// Log a failed terminal restore. Returns whether it failed.
fn warn_on_restore_failure(restored: Result<()>) -> bool {
    match restored {
        Ok(()) => false,
        Err(err) => {
            warn!("failed to restore terminal: {:#}", err);
            true
        }
    }
}

fn init_logging(config: &GameConfig) -> Result<()> {
    let Some(path) = config.log_path.as_deref() else {
        return Ok(());
    };
    let level = config
        .log_level
        .parse::<LevelFilter>()
        .unwrap_or(LevelFilter::Info);
    let file = File::create(path).with_context(|| format!("cannot create log file {}", path))?;
    WriteLogger::init(level, Config::default(), file).context("logger already initialised")?;
    Ok(())
}

fn run(screen: &mut Screen, config: GameConfig) -> Result<()> {
    let mut game = GameLoop::new(config);
    let (cell_w, cell_h) = screen.view().cell_size();
    let mut pointer = PointerTracker::new(cell_w, cell_h);
    let mut last = Instant::now();

    loop {
        let timeout = game
            .time_until_tick()
            .map(|ms| Duration::from_millis(ms as u64))
            .unwrap_or(Duration::from_millis(IDLE_POLL_MS));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        info!("quit requested");
                        return Ok(());
                    }
                    if let Some(input) = handle_key_event(key) {
                        let outcome = game.handle_input(input);
                        debug!("key {:?} -> {:?}", input, outcome);
                    }
                }
                Event::Mouse(mouse) => {
                    let buttons = screen.buttons(game.state());
                    if let Some(input) = pointer.handle(mouse, &buttons) {
                        let outcome = game.handle_input(input);
                        debug!("pointer {:?} -> {:?}", input, outcome);
                    }
                }
                Event::Resize(w, h) => {
                    screen.resize(w, h);
                    game.redraw(screen)?;
                }
                _ => {}
            }
        }

        let now = Instant::now();
        let elapsed = now.duration_since(last).as_millis().min(u32::MAX as u128) as u32;
        last = now;

        if let Some(report) = game.advance(elapsed, screen)? {
            if let Some(score) = report.score_changed {
                info!("score {}", score);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn restore_failure_is_reported() {
        assert!(!warn_on_restore_failure(Ok(())));
        assert!(warn_on_restore_failure(Err(anyhow::anyhow!("tty gone"))));
    }
}
