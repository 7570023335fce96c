//! Mouse gestures: drags become swipes, clicks become taps or button presses.
//!
//! A gesture starts on left-button press and completes on release. Terminal
//! cells are not square, so the drag vector is rescaled to tile units before
//! the dominant axis is picked: one tile spans `cell_w` columns and `cell_h`
//! rows.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::types::{hit_test, ButtonHitbox, Direction, InputEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Press {
    col: u16,
    row: u16,
    button: Option<Direction>,
}

#[derive(Debug, Clone)]
pub struct PointerTracker {
    press: Option<Press>,
    cell_w: u16,
    cell_h: u16,
}

impl Default for PointerTracker {
    fn default() -> Self {
        // Matches the renderer's default 2x1 tile.
        Self::new(2, 1)
    }
}

impl PointerTracker {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            press: None,
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    pub fn is_pressed(&self) -> bool {
        self.press.is_some()
    }

    /// Feed a mouse event. Returns an input event when a gesture completes.
    ///
    /// `buttons` are the on-screen direction buttons of the current frame.
    pub fn handle(&mut self, ev: MouseEvent, buttons: &[ButtonHitbox]) -> Option<InputEvent> {
        match ev.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.press = Some(Press {
                    col: ev.column,
                    row: ev.row,
                    button: hit_test(buttons, ev.column, ev.row),
                });
                None
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let press = self.press.take()?;
                Some(self.release(press, ev.column, ev.row, buttons))
            }
            _ => None,
        }
    }

    fn release(&self, press: Press, col: u16, row: u16, buttons: &[ButtonHitbox]) -> InputEvent {
        if let Some(dir) = press.button {
            if hit_test(buttons, col, row) == Some(dir) {
                return InputEvent::ButtonPress(dir);
            }
        }

        let dx = (col as i32 - press.col as i32) * self.cell_h as i32;
        let dy = (row as i32 - press.row as i32) * self.cell_w as i32;
        if dx == 0 && dy == 0 {
            InputEvent::RestartGesture
        } else {
            InputEvent::SwipeVector { dx, dy }
        }
    }
}
