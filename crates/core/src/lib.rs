//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the game rules, state management and the loop state
//! machine. It has no dependencies on terminals, input devices or clocks:
//!
//! - **Deterministic**: the same seed and inputs produce the same food sequence
//! - **Testable**: every rule is exercised without a drawing surface
//! - **Portable**: any type implementing [`Renderer`] can display the game
//!
//! # Module Structure
//!
//! - [`game_state`]: snake, food, heading, score, terminal flag and the per-tick simulator
//! - [`translator`]: input events to heading changes, with reversal filtering and restart
//! - [`game_loop`]: `Running` / `GameOver` state machine with fixed-delay ticks
//! - [`food`]: bounded food placement that never lands on the snake
//! - [`rng`]: seeded LCG
//!
//! # Example
//!
//! ```
//! use tui_snake_core::{GameState, InputTranslator};
//! use tui_snake_types::{Direction, GameConfig, InputEvent, Position};
//!
//! let mut game = GameState::new(GameConfig::default());
//! let input = InputTranslator::new();
//!
//! input.apply(&mut game, InputEvent::ArrowKey(Direction::Right));
//! game.step();
//!
//! assert_eq!(game.head(), Position::new(11, 10));
//! assert!(!game.is_terminal());
//! ```

pub mod food;
pub mod game_loop;
pub mod game_state;
pub mod rng;
pub mod translator;

pub use tui_snake_types as types;

// Re-export commonly used types for convenience
pub use food::{FoodSpawner, NoFreeCellError};
pub use game_loop::{GameLoop, LoopState, Renderer, TickReport};
pub use game_state::{Collision, GameState, StepOutcome};
pub use rng::SimpleRng;
pub use translator::{InputOutcome, InputTranslator};
