//! Screen: the terminal-backed [`Renderer`] the game loop draws into.
//!
//! Owns the view, a reusable framebuffer and the terminal renderer, and
//! tracks the current viewport so input hit-testing uses the same layout as
//! the last frame.

use anyhow::Result;
use arrayvec::ArrayVec;

use crate::core::{GameState, Renderer};
use crate::fb::FrameBuffer;
use crate::game_view::{GameView, Viewport};
use crate::renderer::TerminalRenderer;
use crate::types::ButtonHitbox;

pub struct Screen {
    term: TerminalRenderer,
    view: GameView,
    fb: FrameBuffer,
    viewport: Viewport,
}

impl Screen {
    pub fn new(view: GameView, viewport: Viewport) -> Self {
        Self {
            term: TerminalRenderer::new(),
            view,
            fb: FrameBuffer::new(viewport.width, viewport.height),
            viewport,
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        self.term.enter()
    }

    pub fn exit(&mut self) -> Result<()> {
        self.term.exit()
    }

    pub fn view(&self) -> &GameView {
        &self.view
    }

    /// Adopt a new terminal size; the next draw is a full redraw.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.viewport = Viewport::new(width, height);
        self.term.invalidate();
    }

    pub fn buttons(&self, state: &GameState) -> ArrayVec<ButtonHitbox, 4> {
        self.view.buttons(state, self.viewport)
    }
}

impl Renderer for Screen {
    type Error = anyhow::Error;

    fn draw(&mut self, state: &GameState) -> Result<()> {
        self.view.render_into(state, self.viewport, &mut self.fb);
        self.term.draw_swap(&mut self.fb)
    }
}
