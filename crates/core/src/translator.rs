//! Input translation - turns discrete input events into heading changes.
//!
//! A direction request is dropped when it points exactly against the current
//! heading. Once the game is over, direction requests are ignored and a
//! restart gesture (or any finished swipe/tap) resets the state instead.

use log::debug;

use crate::game_state::GameState;
use crate::types::{Direction, Heading, InputEvent};

/// Effect of one input event on the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    Ignored,
    HeadingChanged(Heading),
    Restarted,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct InputTranslator;

impl InputTranslator {
    pub fn new() -> Self {
        Self
    }

    pub fn apply(&self, state: &mut GameState, event: InputEvent) -> InputOutcome {
        if state.is_terminal() {
            return match event {
                InputEvent::RestartGesture | InputEvent::SwipeVector { .. } => {
                    state.reset();
                    InputOutcome::Restarted
                }
                InputEvent::ArrowKey(_) | InputEvent::ButtonPress(_) => InputOutcome::Ignored,
            };
        }

        let direction = match event {
            InputEvent::ArrowKey(dir) | InputEvent::ButtonPress(dir) => Some(dir),
            InputEvent::SwipeVector { dx, dy } => Direction::from_swipe(dx, dy),
            InputEvent::RestartGesture => None,
        };

        match direction {
            Some(dir) => self.turn(state, dir),
            None => InputOutcome::Ignored,
        }
    }

    fn turn(&self, state: &mut GameState, dir: Direction) -> InputOutcome {
        let requested = Heading::from(dir);
        let current = state.heading();
        if requested.is_reverse_of(current) {
            debug!("ignoring reverse turn {:?} while heading {:?}", dir, current);
            return InputOutcome::Ignored;
        }
        state.set_heading(requested);
        InputOutcome::HeadingChanged(requested)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{GameConfig, Position, START_FOOD, START_POSITION};

    fn state_heading(heading: Heading) -> GameState {
        GameState::with_layout(
            GameConfig::default(),
            &[Position::new(10, 10)],
            START_FOOD,
            heading,
        )
    }

    #[test]
    fn reverse_requests_never_change_heading() {
        let t = InputTranslator::new();
        for dir in Direction::ALL {
            let mut state = state_heading(Heading::from(dir));
            for event in [
                InputEvent::ArrowKey(dir.opposite()),
                InputEvent::ButtonPress(dir.opposite()),
            ] {
                assert_eq!(t.apply(&mut state, event), InputOutcome::Ignored);
                assert_eq!(state.heading(), Heading::from(dir));
            }
        }
    }

    #[test]
    fn any_direction_is_accepted_from_still() {
        let t = InputTranslator::new();
        for dir in Direction::ALL {
            let mut state = state_heading(Heading::Still);
            assert_eq!(
                t.apply(&mut state, InputEvent::ArrowKey(dir)),
                InputOutcome::HeadingChanged(Heading::from(dir))
            );
            assert_eq!(state.heading(), Heading::from(dir));
        }
    }

    #[test]
    fn perpendicular_turn_is_applied() {
        let t = InputTranslator::new();
        let mut state = state_heading(Heading::Right);
        t.apply(&mut state, InputEvent::ButtonPress(Direction::Up));
        assert_eq!(state.heading(), Heading::Up);
    }

    #[test]
    fn swipe_resolves_dominant_axis() {
        let t = InputTranslator::new();
        let mut state = state_heading(Heading::Right);
        t.apply(&mut state, InputEvent::SwipeVector { dx: 2, dy: 9 });
        assert_eq!(state.heading(), Heading::Down);

        // Tie goes to the horizontal axis.
        t.apply(&mut state, InputEvent::SwipeVector { dx: -5, dy: 5 });
        assert_eq!(state.heading(), Heading::Left);

        assert_eq!(
            t.apply(&mut state, InputEvent::SwipeVector { dx: 0, dy: 0 }),
            InputOutcome::Ignored
        );
        assert_eq!(state.heading(), Heading::Left);
    }

    #[test]
    fn restart_gesture_is_ignored_while_playing() {
        let t = InputTranslator::new();
        let mut state = state_heading(Heading::Up);
        assert_eq!(
            t.apply(&mut state, InputEvent::RestartGesture),
            InputOutcome::Ignored
        );
        assert_eq!(state.heading(), Heading::Up);
        assert_eq!(state.episode_id(), 0);
    }

    #[test]
    fn restart_resets_terminal_state_without_turning() {
        let t = InputTranslator::new();
        let mut state = GameState::with_layout(
            GameConfig::default(),
            &[Position::new(19, 10)],
            START_FOOD,
            Heading::Right,
        );
        state.step();
        assert!(state.is_terminal());

        assert_eq!(
            t.apply(&mut state, InputEvent::ArrowKey(Direction::Up)),
            InputOutcome::Ignored
        );
        assert!(state.is_terminal());

        assert_eq!(
            t.apply(&mut state, InputEvent::SwipeVector { dx: 0, dy: -6 }),
            InputOutcome::Restarted
        );
        assert!(!state.is_terminal());
        assert_eq!(state.heading(), Heading::Still);
        assert_eq!(state.head(), START_POSITION);
    }
}
