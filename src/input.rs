use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};

/// Canonical movement directions.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// Latches the most recent legal direction request until the next tick.
///
/// Only a single pending value is kept, so several inputs between two ticks
/// collapse to the last valid one. A request that exactly reverses the
/// heading already in effect is dropped silently; turning 180° in one step
/// would walk the head straight into the neck.
#[derive(Debug, Clone, Copy)]
pub struct InputRouter {
    pending: Direction,
}

impl InputRouter {
    #[must_use]
    pub fn new(initial: Direction) -> Self {
        Self { pending: initial }
    }

    /// Records `requested` unless it reverses `current`, the heading the
    /// snake is actually travelling in (not the pending one).
    pub fn request(&mut self, current: Direction, requested: Direction) {
        if requested == current.opposite() {
            return;
        }
        self.pending = requested;
    }

    /// Returns the heading the next tick should apply.
    #[must_use]
    pub fn pending(&self) -> Direction {
        self.pending
    }

    /// Re-latches to `heading` when a session (re)starts.
    pub fn reset(&mut self, heading: Direction) {
        self.pending = heading;
    }
}

/// High-level input events consumed by the main loop.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Direction(Direction),
    StartPause,
    Reset,
    Quit,
}

/// Polls the terminal for up to `timeout` and maps the next key press.
///
/// Returns `Ok(None)` on timeout, key release, or any key with no binding.
pub fn poll_input(timeout: Duration) -> io::Result<Option<GameInput>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }

    match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => Ok(map_key(key.code)),
        _ => Ok(None),
    }
}

/// Maps a key code to a game input, arrows and WASD alike.
#[must_use]
pub fn map_key(code: KeyCode) -> Option<GameInput> {
    match code {
        KeyCode::Up | KeyCode::Char('w') => Some(GameInput::Direction(Direction::Up)),
        KeyCode::Down | KeyCode::Char('s') => Some(GameInput::Direction(Direction::Down)),
        KeyCode::Left | KeyCode::Char('a') => Some(GameInput::Direction(Direction::Left)),
        KeyCode::Right | KeyCode::Char('d') => Some(GameInput::Direction(Direction::Right)),
        KeyCode::Char(' ') | KeyCode::Enter | KeyCode::Char('p') => Some(GameInput::StartPause),
        KeyCode::Char('r') => Some(GameInput::Reset),
        KeyCode::Char('q') | KeyCode::Esc => Some(GameInput::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyCode;

    use super::{map_key, Direction, GameInput, InputRouter};

    #[test]
    fn opposite_direction_is_correct() {
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Down.opposite(), Direction::Up);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        assert_eq!(Direction::Right.opposite(), Direction::Left);
    }

    #[test]
    fn router_rejects_reversal_of_current_heading() {
        let mut router = InputRouter::new(Direction::Right);

        router.request(Direction::Right, Direction::Left);

        assert_eq!(router.pending(), Direction::Right);
    }

    #[test]
    fn router_accepts_perpendicular_turns() {
        let mut router = InputRouter::new(Direction::Right);

        router.request(Direction::Right, Direction::Up);
        assert_eq!(router.pending(), Direction::Up);

        router.request(Direction::Right, Direction::Down);
        assert_eq!(router.pending(), Direction::Down);
    }

    #[test]
    fn router_keeps_only_the_last_valid_request() {
        let mut router = InputRouter::new(Direction::Right);

        router.request(Direction::Right, Direction::Up);
        router.request(Direction::Right, Direction::Left); // reversal, dropped
        router.request(Direction::Right, Direction::Down);

        assert_eq!(router.pending(), Direction::Down);
    }

    #[test]
    fn reversal_check_uses_current_not_pending_heading() {
        let mut router = InputRouter::new(Direction::Right);

        // Pending becomes Up; the snake is still travelling Right, so Down
        // (opposite of the *pending* value) must still be accepted.
        router.request(Direction::Right, Direction::Up);
        router.request(Direction::Right, Direction::Down);

        assert_eq!(router.pending(), Direction::Down);
    }

    #[test]
    fn key_bindings_cover_arrows_wasd_and_controls() {
        assert_eq!(
            map_key(KeyCode::Up),
            Some(GameInput::Direction(Direction::Up))
        );
        assert_eq!(
            map_key(KeyCode::Char('a')),
            Some(GameInput::Direction(Direction::Left))
        );
        assert_eq!(map_key(KeyCode::Char(' ')), Some(GameInput::StartPause));
        assert_eq!(map_key(KeyCode::Char('r')), Some(GameInput::Reset));
        assert_eq!(map_key(KeyCode::Esc), Some(GameInput::Quit));
        assert_eq!(map_key(KeyCode::Char('x')), None);
    }
}
