use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEventKind};

use crate::config::INPUT_DEBOUNCE_MS;

/// Canonical movement directions for snake input.
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

/// High-level input events consumed by the game loop.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Direction(Direction),
    /// Start when idle, restart when game over.
    Confirm,
    Quit,
}

/// Maps a pressed key to a game input.
///
/// Arrow keys and WASD steer, Space and Enter confirm, Q and Esc quit.
/// Everything else is ignored.
#[must_use]
pub fn map_key_code(code: KeyCode) -> Option<GameInput> {
    match code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(GameInput::Direction(Direction::Up))
        }
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(GameInput::Direction(Direction::Down))
        }
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(GameInput::Direction(Direction::Left))
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(GameInput::Direction(Direction::Right))
        }
        KeyCode::Char(' ') | KeyCode::Enter => Some(GameInput::Confirm),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(GameInput::Quit),
        _ => None,
    }
}

/// Drops events that arrive faster than a minimum interval apart.
///
/// Key-repeat storms from held keys are an input concern, not an engine one;
/// the simulation never sees the rejected events.
#[derive(Debug)]
pub struct Debouncer {
    min_interval: Duration,
    last_accepted: Option<Instant>,
}

impl Debouncer {
    /// Creates a debouncer with the given minimum spacing between events.
    #[must_use]
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_accepted: None,
        }
    }

    /// Returns true when an event at `now` should pass through.
    pub fn accept(&mut self, now: Instant) -> bool {
        if let Some(last) = self.last_accepted {
            if now.duration_since(last) < self.min_interval {
                return false;
            }
        }

        self.last_accepted = Some(now);
        true
    }
}

/// Polls the terminal for game input, debounced.
#[derive(Debug)]
pub struct InputHandler {
    debouncer: Debouncer,
}

impl InputHandler {
    /// Creates a handler with the default debounce interval.
    #[must_use]
    pub fn new() -> Self {
        Self {
            debouncer: Debouncer::new(Duration::from_millis(INPUT_DEBOUNCE_MS)),
        }
    }

    /// Returns the next pending game input, if any, without blocking.
    pub fn poll_input(&mut self) -> io::Result<Option<GameInput>> {
        if !event::poll(Duration::ZERO)? {
            return Ok(None);
        }

        let Event::Key(key) = event::read()? else {
            return Ok(None);
        };
        if key.kind != KeyEventKind::Press {
            return Ok(None);
        }

        let Some(input) = map_key_code(key.code) else {
            return Ok(None);
        };

        // Quit must never be swallowed by the debounce window.
        if input != GameInput::Quit && !self.debouncer.accept(Instant::now()) {
            return Ok(None);
        }

        Ok(Some(input))
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use crossterm::event::KeyCode;

    use super::{Debouncer, Direction, GameInput, map_key_code};

    #[test]
    fn opposite_direction_is_correct() {
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Down.opposite(), Direction::Up);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        assert_eq!(Direction::Right.opposite(), Direction::Left);
    }

    #[test]
    fn arrows_and_wasd_map_to_directions() {
        assert_eq!(
            map_key_code(KeyCode::Up),
            Some(GameInput::Direction(Direction::Up))
        );
        assert_eq!(
            map_key_code(KeyCode::Char('w')),
            Some(GameInput::Direction(Direction::Up))
        );
        assert_eq!(
            map_key_code(KeyCode::Char('a')),
            Some(GameInput::Direction(Direction::Left))
        );
        assert_eq!(
            map_key_code(KeyCode::Char('S')),
            Some(GameInput::Direction(Direction::Down))
        );
        assert_eq!(
            map_key_code(KeyCode::Right),
            Some(GameInput::Direction(Direction::Right))
        );
    }

    #[test]
    fn control_keys_map_to_confirm_and_quit() {
        assert_eq!(map_key_code(KeyCode::Char(' ')), Some(GameInput::Confirm));
        assert_eq!(map_key_code(KeyCode::Enter), Some(GameInput::Confirm));
        assert_eq!(map_key_code(KeyCode::Char('q')), Some(GameInput::Quit));
        assert_eq!(map_key_code(KeyCode::Esc), Some(GameInput::Quit));
    }

    #[test]
    fn unmapped_keys_are_ignored() {
        assert_eq!(map_key_code(KeyCode::Char('x')), None);
        assert_eq!(map_key_code(KeyCode::Tab), None);
    }

    #[test]
    fn debouncer_drops_events_within_the_window() {
        let mut debouncer = Debouncer::new(Duration::from_millis(50));
        let start = Instant::now();

        assert!(debouncer.accept(start));
        assert!(!debouncer.accept(start + Duration::from_millis(10)));
        assert!(!debouncer.accept(start + Duration::from_millis(49)));
        assert!(debouncer.accept(start + Duration::from_millis(51)));
    }

    #[test]
    fn debounce_window_restarts_from_last_accepted_event() {
        let mut debouncer = Debouncer::new(Duration::from_millis(50));
        let start = Instant::now();

        assert!(debouncer.accept(start));
        // Rejected events must not extend the window.
        assert!(!debouncer.accept(start + Duration::from_millis(30)));
        assert!(debouncer.accept(start + Duration::from_millis(60)));
        assert!(!debouncer.accept(start + Duration::from_millis(70)));
    }
}
