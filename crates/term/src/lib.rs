//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It avoids widget/layout libraries and instead renders into a simple
//! framebuffer that is flushed to the terminal with crossterm.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Allow precise control over aspect ratio (e.g. 2 chars wide per tile)
//! - Share one layout between drawing and mouse hit-testing

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod screen;

pub use tui_snake_core as core;
pub use tui_snake_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{facing_glyph, AnchorY, GameView, Layout, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use screen::Screen;
