//! GameView: maps `core::GameState` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Each grid tile is `cell_w` x `cell_h` terminal cells. Snake segments are
//! drawn as triangles pointing along their facing; food is a red triangle
//! pointing up. The side panel shows the score and the on-screen direction
//! buttons. Button hit boxes come from [`GameView::layout`], the same routine
//! the drawing code uses, so clicks always line up with what is on screen.

use arrayvec::ArrayVec;

use crate::core::GameState;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{ButtonHitbox, Direction, Facing, Position};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Screen placement of the board, panel and buttons for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    /// Top-left corner of the board border.
    pub frame_x: u16,
    pub frame_y: u16,
    pub frame_w: u16,
    pub frame_h: u16,
    /// Left column of the side panel, when it fits.
    pub panel_x: Option<u16>,
    pub buttons: ArrayVec<ButtonHitbox, 4>,
}

const PANEL_GAP: u16 = 2;
const PANEL_MIN_W: u16 = 12;
const BUTTON_W: u16 = 5;
/// Panel rows above the button pad: SCORE, value, blank, MOVE.
const BUTTON_ROW: u16 = 4;

const BOARD_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

/// A lightweight terminal renderer for the Snake game.
#[derive(Debug, Clone)]
pub struct GameView {
    /// Tile width in terminal columns.
    cell_w: u16,
    /// Tile height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self::new(2, 1)
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    pub fn cell_size(&self) -> (u16, u16) {
        (self.cell_w, self.cell_h)
    }

    /// Place the board and panel for a `tile_count` grid inside `viewport`.
    pub fn layout(&self, tile_count: i32, viewport: Viewport) -> Layout {
        let tiles = u16::try_from(tile_count.max(0)).unwrap_or(u16::MAX);
        let frame_w = tiles.saturating_mul(self.cell_w).saturating_add(2);
        let frame_h = tiles.saturating_mul(self.cell_h).saturating_add(2);

        let frame_x = viewport.width.saturating_sub(frame_w) / 2;
        let frame_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        let panel_x = frame_x
            .checked_add(frame_w)
            .and_then(|x| x.checked_add(PANEL_GAP))
            .filter(|&x| x < viewport.width && viewport.width - x >= PANEL_MIN_W);

        let mut buttons = ArrayVec::new();
        if let Some(px) = panel_x {
            let fits_w = viewport.width - px >= BUTTON_W * 3;
            let fits_h = frame_y as u32 + BUTTON_ROW as u32 + 3 <= viewport.height as u32;
            if fits_w && fits_h {
                let top = frame_y + BUTTON_ROW;
                for (dx, dy, direction) in [
                    (BUTTON_W, 0, Direction::Up),
                    (0, 1, Direction::Left),
                    (BUTTON_W * 2, 1, Direction::Right),
                    (BUTTON_W, 2, Direction::Down),
                ] {
                    buttons.push(ButtonHitbox {
                        x: px + dx,
                        y: top + dy,
                        w: BUTTON_W,
                        h: 1,
                        direction,
                    });
                }
            }
        }

        Layout {
            frame_x,
            frame_y,
            frame_w,
            frame_h,
            panel_x,
            buttons,
        }
    }

    /// On-screen button hit boxes for `state` drawn into `viewport`.
    pub fn buttons(&self, state: &GameState, viewport: Viewport) -> ArrayVec<ButtonHitbox, 4> {
        self.layout(state.tile_count(), viewport).buttons
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// Callers can reuse one framebuffer across frames; it is resized to the
    /// viewport when needed.
    pub fn render_into(&self, state: &GameState, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let tiles = state.tile_count();
        let layout = self.layout(tiles, viewport);

        self.draw_board(fb, &layout, tiles);

        if state.is_terminal() {
            self.draw_game_over(fb, &layout, state.is_cleared());
        } else {
            let food = CellStyle::plain(Rgb::new(230, 60, 60), BOARD_BG).bold();
            self.draw_tile(fb, &layout, tiles, state.food(), '▲', food);

            let body = CellStyle::plain(Rgb::new(60, 180, 75), BOARD_BG);
            let head = CellStyle::plain(Rgb::new(120, 240, 120), BOARD_BG).bold();
            // Tail first so the head wins any overlap.
            for (i, seg) in state.snake().iter().enumerate().rev() {
                let style = if i == 0 { head } else { body };
                self.draw_tile(fb, &layout, tiles, seg.pos, facing_glyph(seg.facing), style);
            }
        }

        self.draw_side_panel(fb, &layout, state);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, state: &GameState, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(state, viewport, &mut fb);
        fb
    }

    fn draw_board(&self, fb: &mut FrameBuffer, layout: &Layout, tiles: i32) {
        let Layout {
            frame_x: x,
            frame_y: y,
            frame_w: w,
            frame_h: h,
            ..
        } = *layout;
        if w < 2 || h < 2 {
            return;
        }

        let dot = CellStyle::plain(Rgb::new(90, 90, 100), BOARD_BG).dim();
        for ty in 0..tiles {
            for tx in 0..tiles {
                self.draw_tile(fb, layout, tiles, Position::new(tx, ty), '·', dot);
            }
        }

        let border = CellStyle::plain(Rgb::new(200, 200, 200), PANEL_BG);
        fb.put_char(x, y, '┌', border);
        fb.put_char(x + w - 1, y, '┐', border);
        fb.put_char(x, y + h - 1, '└', border);
        fb.put_char(x + w - 1, y + h - 1, '┘', border);
        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', border);
            fb.put_char(x + dx, y + h - 1, '─', border);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', border);
            fb.put_char(x + w - 1, y + dy, '│', border);
        }
    }

    /// Fill one grid tile and put `glyph` in it. Tiles off the grid are skipped.
    fn draw_tile(
        &self,
        fb: &mut FrameBuffer,
        layout: &Layout,
        tiles: i32,
        pos: Position,
        glyph: char,
        style: CellStyle,
    ) {
        if !pos.in_bounds(tiles) {
            return;
        }
        let (Ok(tx), Ok(ty)) = (u16::try_from(pos.x), u16::try_from(pos.y)) else {
            return;
        };
        let px = (layout.frame_x + 1).saturating_add(tx.saturating_mul(self.cell_w));
        let py = (layout.frame_y + 1).saturating_add(ty.saturating_mul(self.cell_h));
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);
        fb.put_char(
            px.saturating_add((self.cell_w - 1) / 2),
            py.saturating_add((self.cell_h - 1) / 2),
            glyph,
            style,
        );
    }

    fn draw_game_over(&self, fb: &mut FrameBuffer, layout: &Layout, cleared: bool) {
        let title = CellStyle::plain(Rgb::new(255, 255, 255), BOARD_BG).bold();
        let hint = CellStyle::plain(Rgb::new(200, 200, 200), BOARD_BG);

        let mid_y = layout.frame_y.saturating_add(layout.frame_h / 2);
        let x = layout.frame_x;
        let w = layout.frame_w;
        let heading = if cleared { "You Win!" } else { "Game Over!" };
        fb.put_str_centered(x, w, mid_y.saturating_sub(1), heading, title);
        fb.put_str_centered(x, w, mid_y.saturating_add(1), "Tap to Restart", hint);
        fb.put_str_centered(x, w, mid_y.saturating_add(2), "or press Space", hint.dim());
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, layout: &Layout, state: &GameState) {
        let Some(panel_x) = layout.panel_x else {
            return;
        };

        let label = CellStyle::plain(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::plain(Rgb::new(200, 200, 200), PANEL_BG);

        let y = layout.frame_y;
        fb.put_str(panel_x, y, "SCORE", label);
        fb.put_str(panel_x, y.saturating_add(1), &state.score().to_string(), value);

        if layout.buttons.is_empty() {
            return;
        }
        fb.put_str(panel_x, y + BUTTON_ROW - 1, "MOVE", label);

        let button = CellStyle::plain(Rgb::new(240, 240, 240), Rgb::new(60, 60, 80));
        for b in &layout.buttons {
            let arrow = match b.direction {
                Direction::Up => '▲',
                Direction::Down => '▼',
                Direction::Left => '◀',
                Direction::Right => '▶',
            };
            fb.fill_rect(b.x, b.y, b.w, b.h, ' ', button);
            fb.put_char(b.x, b.y, '[', button);
            fb.put_char(b.x + b.w / 2, b.y, arrow, button.bold());
            fb.put_char(b.x + b.w - 1, b.y, ']', button);
        }

        let help_y = y + BUTTON_ROW + 4;
        if help_y < fb.height() {
            fb.put_str(panel_x, help_y, "q: quit", value.dim());
        }
    }
}

/// Triangle pointing along a segment's facing.
pub fn facing_glyph(facing: Facing) -> char {
    match facing {
        Facing::Up => '▲',
        Facing::Right => '▶',
        Facing::Down => '▼',
        Facing::Left => '◀',
    }
}
