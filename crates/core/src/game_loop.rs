//! Fixed-delay game loop.
//!
//! The loop is a two-state machine:
//!
//! ```text
//!            tick -> terminal
//!   Running ------------------> GameOver
//!      ^                           |
//!      +------ restart input ------+
//! ```
//!
//! While `Running`, a tick is due `tick_ms` after the previous one completed
//! (fixed delay, leftover time is dropped). `GameOver` schedules nothing until
//! a restart, which makes the next tick due immediately.
//!
//! Time is pushed in by the host through [`GameLoop::advance`], so the loop can
//! be driven by a real clock or stepped in tests.

use log::info;

use crate::game_state::{GameState, StepOutcome};
use crate::translator::{InputOutcome, InputTranslator};
use crate::types::{GameConfig, InputEvent};

/// Drawing surface the loop paints after every tick.
pub trait Renderer {
    type Error;

    /// Paint `state`. A terminal state is drawn as the game-over screen.
    fn draw(&mut self, state: &GameState) -> Result<(), Self::Error>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    GameOver,
}

/// What happened on one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickReport {
    pub step: StepOutcome,
    /// New score, when this tick changed it.
    pub score_changed: Option<u32>,
    /// The loop moved from `Running` to `GameOver` on this tick.
    pub entered_game_over: bool,
}

pub struct GameLoop {
    state: GameState,
    phase: LoopState,
    translator: InputTranslator,
    /// Milliseconds until the next tick; `None` while nothing is scheduled.
    until_tick_ms: Option<u32>,
}

impl GameLoop {
    /// Start in `Running` with a fresh state and the first tick due now.
    pub fn new(config: GameConfig) -> Self {
        Self::with_state(GameState::new(config))
    }

    pub fn with_state(state: GameState) -> Self {
        let phase = if state.is_terminal() {
            LoopState::GameOver
        } else {
            LoopState::Running
        };
        Self {
            until_tick_ms: (phase == LoopState::Running).then_some(0),
            state,
            phase,
            translator: InputTranslator::new(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> LoopState {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == LoopState::Running
    }

    /// Milliseconds until the next tick is due, `None` during game over.
    pub fn time_until_tick(&self) -> Option<u32> {
        self.until_tick_ms
    }

    /// Deliver one input event. A restart puts the loop back in `Running`.
    pub fn handle_input(&mut self, event: InputEvent) -> InputOutcome {
        let outcome = self.translator.apply(&mut self.state, event);
        if outcome == InputOutcome::Restarted {
            info!("restarting loop");
            self.phase = LoopState::Running;
            self.until_tick_ms = Some(0);
        }
        outcome
    }

    /// Let `elapsed_ms` pass and run the tick if it became due.
    pub fn advance<R: Renderer>(
        &mut self,
        elapsed_ms: u32,
        renderer: &mut R,
    ) -> Result<Option<TickReport>, R::Error> {
        let Some(remaining) = self.until_tick_ms else {
            return Ok(None);
        };
        if elapsed_ms < remaining {
            self.until_tick_ms = Some(remaining - elapsed_ms);
            return Ok(None);
        }
        self.tick(renderer)
    }

    /// Run one tick now: step, schedule the next tick, draw.
    ///
    /// Does nothing during game over.
    pub fn tick<R: Renderer>(&mut self, renderer: &mut R) -> Result<Option<TickReport>, R::Error> {
        if self.phase == LoopState::GameOver {
            return Ok(None);
        }

        let score_before = self.state.score();
        let step = self.state.step();

        let entered_game_over = self.state.is_terminal();
        if entered_game_over {
            self.phase = LoopState::GameOver;
            self.until_tick_ms = None;
            info!(
                "game over after episode {} with score {}",
                self.state.episode_id(),
                self.state.score()
            );
        } else {
            self.until_tick_ms = Some(self.state.config().tick_ms);
        }

        renderer.draw(&self.state)?;

        let score = self.state.score();
        Ok(Some(TickReport {
            step,
            score_changed: (score != score_before).then_some(score),
            entered_game_over,
        }))
    }

    /// Draw the current state without stepping (e.g. after a resize).
    pub fn redraw<R: Renderer>(&self, renderer: &mut R) -> Result<(), R::Error> {
        renderer.draw(&self.state)
    }
}
