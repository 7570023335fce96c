//! Terminal input module (engine-facing).
//!
//! This module is independent of any UI framework. It maps `crossterm` key
//! and mouse events into [`crate::types::InputEvent`]s that the core input
//! translator understands. Mouse drags stand in for touch swipes and clicks
//! for taps.

pub mod map;
pub mod pointer;

pub use tui_snake_types as types;

pub use map::{handle_key_event, should_quit};
pub use pointer::PointerTracker;
