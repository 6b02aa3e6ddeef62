use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::Rng;

use crate::game::{Confirmation, Game, Phase};
use crate::grid::Direction;

/// Holds the direction the next tick will use.
///
/// Requests are checked against the direction applied by the *last tick*,
/// not against the pending one, so any number of key presses between two
/// ticks can never turn the snake back onto its own axis.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputLatch {
    pending: Option<Direction>,
    last_applied: Option<Direction>,
}

impl InputLatch {
    /// Returns whether the request was taken.
    pub fn request(&mut self, direction: Direction) -> bool {
        if let Some(last) = self.last_applied {
            if last.axis() == direction.axis() {
                return false;
            }
        }
        self.pending = Some(direction);
        true
    }

    /// Called once at the start of a tick. `None` until the first key press.
    pub fn latch(&mut self) -> Option<Direction> {
        self.last_applied = self.pending;
        self.pending
    }

    pub fn pending(&self) -> Option<Direction> {
        self.pending
    }

    pub fn last_applied(&self) -> Option<Direction> {
        self.last_applied
    }
}

pub fn direction_for_key(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Up | KeyCode::Char('w') => Some(Direction::Up),
        KeyCode::Down | KeyCode::Char('s') => Some(Direction::Down),
        KeyCode::Left | KeyCode::Char('a') => Some(Direction::Left),
        KeyCode::Right | KeyCode::Char('d') => Some(Direction::Right),
        _ => None,
    }
}

/// Routes one key press to the session. Returns false when the player
/// asked to quit.
pub fn handle_key<R: Rng>(game: &mut Game<R>, key: KeyEvent) -> bool {
    let ctrl_c = key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL);
    if key.code == KeyCode::Esc || ctrl_c {
        return false;
    }

    match game.phase() {
        Phase::Running => {
            if let Some(direction) = direction_for_key(key.code) {
                game.request_direction(direction);
            }
        }
        Phase::Over => match key.code {
            KeyCode::Enter | KeyCode::Char('y') => game.confirm(Confirmation::Restart),
            KeyCode::Char('n') | KeyCode::Char('q') => game.confirm(Confirmation::Halt),
            _ => {}
        },
        Phase::Halted => {
            if key.code == KeyCode::Char('q') {
                return false;
            }
        }
    }

    true
}
