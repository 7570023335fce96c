//! Game state module - the authoritative model and the per-tick simulator
//!
//! `GameState` owns the snake, the food, the heading, the score and the
//! terminal flag. [`GameState::step`] advances it by exactly one tick:
//!
//! 1. no-op once terminal
//! 2. move the head one tile along the heading
//! 3. eat (score + relocate food) or drop the tail
//! 4. detect wall and self collisions on the post-move board
//!
//! Collisions are checked after movement and scoring, so a head that eats and
//! collides in the same tick keeps the reward.

use std::collections::VecDeque;

use log::{debug, info, warn};

use crate::food::FoodSpawner;
use crate::types::{Facing, GameConfig, Heading, Position, Segment};

/// What ended the game on a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    Wall,
    SelfHit,
}

/// Result of a single [`GameState::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepOutcome {
    /// The step ran (false when the state was already terminal).
    pub moved: bool,
    pub ate: bool,
    pub collision: Option<Collision>,
    /// The snake covers the whole grid; no food could be placed.
    pub cleared: bool,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    snake: VecDeque<Segment>,
    food: Position,
    heading: Heading,
    score: u32,
    terminal: bool,
    cleared: bool,
    /// Monotonic episode id (increments on reset).
    episode_id: u32,
    spawner: FoodSpawner,
}

impl GameState {
    /// Create a fresh game from the given configuration
    pub fn new(config: GameConfig) -> Self {
        let spawner = FoodSpawner::new(config.seed, config.food_spawn_attempts);
        let mut state = Self {
            snake: VecDeque::with_capacity(config.tile_count().max(1) as usize * 2),
            food: config.start_food,
            heading: Heading::Still,
            score: 0,
            terminal: false,
            cleared: false,
            episode_id: 0,
            spawner,
            config,
        };
        state.snake.push_back(Segment::new(state.config.start_position, Facing::Up));
        state
    }

    /// Build a state with an explicit board.
    ///
    /// `body` is head first and must not be empty. Every segment faces along
    /// `heading`. Used by scenario tests and benchmarks.
    pub fn with_layout(
        config: GameConfig,
        body: &[Position],
        food: Position,
        heading: Heading,
    ) -> Self {
        let mut state = Self::new(config);
        if !body.is_empty() {
            let facing = heading.facing();
            state.snake = body.iter().map(|&pos| Segment::new(pos, facing)).collect();
        }
        state.food = food;
        state.heading = heading;
        state
    }

    /// Reinitialize every field to the configured starting values.
    pub fn reset(&mut self) {
        self.snake.clear();
        self.snake
            .push_back(Segment::new(self.config.start_position, Facing::Up));
        self.food = self.config.start_food;
        self.heading = Heading::Still;
        self.score = 0;
        self.terminal = false;
        self.cleared = false;
        self.episode_id = self.episode_id.wrapping_add(1);
        info!("game reset (episode {})", self.episode_id);
    }

    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// True when the game ended because the snake filled the grid.
    pub fn is_cleared(&self) -> bool {
        self.cleared
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn tile_count(&self) -> i32 {
        self.config.tile_count()
    }

    /// Snake segments, head first.
    pub fn snake(&self) -> &VecDeque<Segment> {
        &self.snake
    }

    pub fn head(&self) -> Position {
        // The body is never empty: new() seeds it and step() pushes before popping.
        self.snake
            .front()
            .map(|s| s.pos)
            .unwrap_or(self.config.start_position)
    }

    pub fn food(&self) -> Position {
        self.food
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    /// Unchecked heading update. Reversal filtering lives in the input translator.
    pub fn set_heading(&mut self, heading: Heading) {
        self.heading = heading;
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    fn occupies(&self, pos: Position) -> bool {
        self.snake.iter().any(|s| s.pos == pos)
    }

    /// Advance the game by one tick.
    pub fn step(&mut self) -> StepOutcome {
        let mut outcome = StepOutcome::default();
        if self.terminal {
            return outcome;
        }
        outcome.moved = true;

        let head = self.head().offset(self.heading);
        self.snake
            .push_front(Segment::new(head, self.heading.facing()));

        if head == self.food {
            self.score += self.config.food_reward;
            outcome.ate = true;
            debug!("ate food at {:?}, score {}", head, self.score);

            let tiles = self.tile_count();
            let snake = &self.snake;
            match self
                .spawner
                .place(tiles, |pos| snake.iter().any(|s| s.pos == pos))
            {
                Ok(pos) => self.food = pos,
                Err(err) => {
                    warn!("{}; ending the game as cleared", err);
                    self.cleared = true;
                    self.terminal = true;
                    outcome.cleared = true;
                }
            }
        } else {
            self.snake.pop_back();
        }

        if !head.in_bounds(self.tile_count()) {
            self.terminal = true;
            outcome.collision = Some(Collision::Wall);
        } else if self.snake.iter().skip(1).any(|s| s.pos == head) {
            self.terminal = true;
            outcome.collision = Some(Collision::SelfHit);
        }

        if let Some(collision) = outcome.collision {
            info!(
                "game over: {:?} at {:?}, score {}, length {}",
                collision,
                head,
                self.score,
                self.snake.len()
            );
        }

        outcome
    }

    /// Whether the food currently sits on a snake segment.
    pub fn food_overlaps_snake(&self) -> bool {
        self.occupies(self.food)
    }
}
