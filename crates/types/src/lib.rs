//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no I/O, so they can be used by the core
//! simulation, the input mapping layer and the terminal renderer alike.
//!
//! # Grid
//!
//! The playfield is a square grid of `tile_count` tiles per side, where
//! `tile_count = canvas_size / grid_size`. With the defaults that is
//! 400 / 20 = 20 tiles, indexed 0-19 on both axes.
//!
//! # Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `CANVAS_SIZE` | 400 | Logical drawing surface size in pixels |
//! | `GRID_SIZE` | 20 | Pixel size of one tile |
//! | `TICK_MS` | 100 | Delay between two simulation ticks |
//! | `FOOD_REWARD` | 10 | Score awarded per food eaten |
//! | `START_POSITION` | (10, 10) | Snake head after reset |
//! | `START_FOOD` | (15, 15) | Food position after reset |
//!
//! # Examples
//!
//! ```
//! use tui_snake_types::{Direction, Heading, Position};
//!
//! let heading = Heading::from(Direction::Right);
//! assert_eq!(Position::new(10, 10).offset(heading), Position::new(11, 10));
//! assert!(Heading::Left.is_reverse_of(heading));
//! ```

pub mod config;

pub use config::{ConfigError, GameConfig, MAX_TILE_COUNT};

/// Logical drawing surface size in pixels (square)
pub const CANVAS_SIZE: u32 = 400;

/// Pixel size of a single grid tile
pub const GRID_SIZE: u32 = 20;

/// Delay between two simulation ticks in milliseconds
pub const TICK_MS: u32 = 100;

/// Score awarded for each food eaten
pub const FOOD_REWARD: u32 = 10;

/// Snake head position after a reset
pub const START_POSITION: Position = Position::new(10, 10);

/// Food position after a reset
pub const START_FOOD: Position = Position::new(15, 15);

/// A tile coordinate on the grid.
///
/// Coordinates are signed: a head that moves through a wall ends up at -1 or
/// `tile_count` for the one tick it takes to detect the collision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Position one step along `heading`.
    pub fn offset(self, heading: Heading) -> Self {
        let (dx, dy) = heading.delta();
        Self::new(self.x + dx, self.y + dy)
    }

    /// Whether the position lies inside a `tile_count` x `tile_count` grid.
    pub fn in_bounds(self, tile_count: i32) -> bool {
        self.x >= 0 && self.x < tile_count && self.y >= 0 && self.y < tile_count
    }
}

/// A discrete direction request coming from the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Resolve a swipe displacement into a direction.
    ///
    /// The axis with the larger absolute displacement wins; ties resolve to the
    /// horizontal axis. A zero vector carries no direction.
    ///
    /// ```
    /// use tui_snake_types::Direction;
    ///
    /// assert_eq!(Direction::from_swipe(5, -2), Some(Direction::Right));
    /// assert_eq!(Direction::from_swipe(1, -4), Some(Direction::Up));
    /// assert_eq!(Direction::from_swipe(-3, 3), Some(Direction::Left));
    /// assert_eq!(Direction::from_swipe(0, 0), None);
    /// ```
    pub fn from_swipe(dx: i32, dy: i32) -> Option<Self> {
        if dx == 0 && dy == 0 {
            return None;
        }
        if dx.abs() >= dy.abs() {
            Some(if dx > 0 { Direction::Right } else { Direction::Left })
        } else {
            Some(if dy > 0 { Direction::Down } else { Direction::Up })
        }
    }
}

/// Current movement vector of the snake.
///
/// `Still` is the (0, 0) heading the game starts with: the snake stays in
/// place until the first direction is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Heading {
    #[default]
    Still,
    Up,
    Down,
    Left,
    Right,
}

impl Heading {
    /// Unit vector in grid coordinates (y grows downwards).
    pub fn delta(self) -> (i32, i32) {
        match self {
            Heading::Still => (0, 0),
            Heading::Up => (0, -1),
            Heading::Down => (0, 1),
            Heading::Left => (-1, 0),
            Heading::Right => (1, 0),
        }
    }

    /// True when `self` points exactly against a non-zero `current` heading.
    pub fn is_reverse_of(self, current: Heading) -> bool {
        let (ax, ay) = self.delta();
        let (bx, by) = current.delta();
        current != Heading::Still && ax == -bx && ay == -by
    }

    pub fn facing(self) -> Facing {
        match self {
            Heading::Still | Heading::Up => Facing::Up,
            Heading::Down => Facing::Down,
            Heading::Left => Facing::Left,
            Heading::Right => Facing::Right,
        }
    }
}

impl From<Direction> for Heading {
    fn from(value: Direction) -> Self {
        match value {
            Direction::Up => Heading::Up,
            Direction::Down => Heading::Down,
            Direction::Left => Heading::Left,
            Direction::Right => Heading::Right,
        }
    }
}

/// Orientation of a rendered segment.
///
/// Only used for drawing. A `Still` heading renders as `Up` (angle 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Facing {
    #[default]
    Up,
    Right,
    Down,
    Left,
}

impl Facing {
    /// Rotation angle in radians, clockwise from "pointing up".
    pub fn radians(self) -> f32 {
        use std::f32::consts::{FRAC_PI_2, PI};
        match self {
            Facing::Up => 0.0,
            Facing::Right => FRAC_PI_2,
            Facing::Down => PI,
            Facing::Left => -FRAC_PI_2,
        }
    }
}

/// One body cell of the snake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Segment {
    pub pos: Position,
    pub facing: Facing,
}

impl Segment {
    pub const fn new(pos: Position, facing: Facing) -> Self {
        Self { pos, facing }
    }
}

/// Discrete input delivered by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Arrow key (or an alias such as WASD).
    ArrowKey(Direction),
    /// A completed drag from press to release, in tile-normalised units.
    SwipeVector { dx: i32, dy: i32 },
    /// Click on one of the on-screen direction buttons.
    ButtonPress(Direction),
    /// Space bar, or a click that did not move.
    RestartGesture,
}

/// Screen-space hit box of an on-screen direction button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonHitbox {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
    pub direction: Direction,
}

impl ButtonHitbox {
    pub fn contains(&self, col: u16, row: u16) -> bool {
        col >= self.x
            && row >= self.y
            && (col as u32) < self.x as u32 + self.w as u32
            && (row as u32) < self.y as u32 + self.h as u32
    }
}

/// Find the button under a screen cell, if any.
pub fn hit_test(buttons: &[ButtonHitbox], col: u16, row: u16) -> Option<Direction> {
    buttons
        .iter()
        .find(|b| b.contains(col, row))
        .map(|b| b.direction)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_defaults() {
        assert_eq!(CANVAS_SIZE / GRID_SIZE, 20);
        assert_eq!(TICK_MS, 100);
        assert_eq!(FOOD_REWARD, 10);
        assert_eq!(START_POSITION, Position::new(10, 10));
        assert_eq!(START_FOOD, Position::new(15, 15));
    }

    #[test]
    fn reverse_detection_covers_all_directions() {
        for dir in Direction::ALL {
            let current = Heading::from(dir);
            assert!(Heading::from(dir.opposite()).is_reverse_of(current));
            assert!(!Heading::from(dir).is_reverse_of(current));
        }
    }

    #[test]
    fn nothing_reverses_a_still_heading() {
        for dir in Direction::ALL {
            assert!(!Heading::from(dir).is_reverse_of(Heading::Still));
        }
        assert!(!Heading::Still.is_reverse_of(Heading::Still));
    }

    #[test]
    fn swipe_ties_prefer_horizontal() {
        assert_eq!(Direction::from_swipe(4, 4), Some(Direction::Right));
        assert_eq!(Direction::from_swipe(-4, 4), Some(Direction::Left));
        assert_eq!(Direction::from_swipe(0, 3), Some(Direction::Down));
        assert_eq!(Direction::from_swipe(0, -3), Some(Direction::Up));
    }

    #[test]
    fn facing_angles() {
        use std::f32::consts::{FRAC_PI_2, PI};
        assert_eq!(Heading::Still.facing().radians(), 0.0);
        assert_eq!(Heading::Up.facing().radians(), 0.0);
        assert_eq!(Heading::Right.facing().radians(), FRAC_PI_2);
        assert_eq!(Heading::Down.facing().radians(), PI);
        assert_eq!(Heading::Left.facing().radians(), -FRAC_PI_2);
    }

    #[test]
    fn bounds_check() {
        assert!(Position::new(0, 0).in_bounds(20));
        assert!(Position::new(19, 19).in_bounds(20));
        assert!(!Position::new(20, 5).in_bounds(20));
        assert!(!Position::new(5, -1).in_bounds(20));
    }

    #[test]
    fn button_hit_test() {
        let buttons = [
            ButtonHitbox { x: 10, y: 2, w: 5, h: 1, direction: Direction::Up },
            ButtonHitbox { x: 4, y: 3, w: 5, h: 1, direction: Direction::Left },
        ];
        assert_eq!(hit_test(&buttons, 12, 2), Some(Direction::Up));
        assert_eq!(hit_test(&buttons, 14, 2), Some(Direction::Up));
        assert_eq!(hit_test(&buttons, 15, 2), None);
        assert_eq!(hit_test(&buttons, 4, 3), Some(Direction::Left));
        assert_eq!(hit_test(&buttons, 4, 4), None);
    }
}
