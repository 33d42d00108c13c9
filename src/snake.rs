use std::collections::VecDeque;

use crate::config::GridSize;
use crate::input::Direction;

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Returns the neighbor cell one step in `direction`, unwrapped.
    #[must_use]
    pub fn stepped(self, direction: Direction) -> Self {
        match direction {
            Direction::Up => Self {
                x: self.x,
                y: self.y - 1,
            },
            Direction::Down => Self {
                x: self.x,
                y: self.y + 1,
            },
            Direction::Left => Self {
                x: self.x - 1,
                y: self.y,
            },
            Direction::Right => Self {
                x: self.x + 1,
                y: self.y,
            },
        }
    }

    /// Returns this position wrapped into bounds on both axes.
    ///
    /// The grid is toroidal: leaving one edge re-enters the opposite edge,
    /// so a wrapped position is always a legal cell.
    #[must_use]
    pub fn wrapped(self, bounds: GridSize) -> Self {
        Self {
            x: wrap_axis(self.x, i32::from(bounds.width)),
            y: wrap_axis(self.y, i32::from(bounds.height)),
        }
    }
}

fn wrap_axis(value: i32, upper_bound: i32) -> i32 {
    let wrapped = value % upper_bound;
    if wrapped < 0 {
        wrapped + upper_bound
    } else {
        wrapped
    }
}

/// Snake body and direction state.
///
/// `direction` is the committed direction: the one applied on the most
/// recently completed movement step. `pending` is whatever the player asked
/// for since then; it is validated against the committed direction at request
/// time, so a rapid double-tap between two ticks can never reverse the snake
/// into its own neck.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Position>,
    direction: Direction,
    pending: Direction,
}

impl Snake {
    /// Creates a one-cell snake at `start` heading in `direction`.
    #[must_use]
    pub fn new(start: Position, direction: Direction) -> Self {
        Self::from_segments(vec![start], direction)
    }

    /// Creates a snake from explicit body segments (front is head).
    #[must_use]
    pub fn from_segments(segments: Vec<Position>, direction: Direction) -> Self {
        debug_assert!(!segments.is_empty());

        Self {
            body: VecDeque::from(segments),
            direction,
            pending: direction,
        }
    }

    /// Requests a direction change for the next movement step.
    ///
    /// Silently dropped when `requested` is the exact opposite of the
    /// committed direction. Later requests overwrite earlier ones within the
    /// same tick (last input wins), each checked against the committed
    /// direction, never against a previous request.
    pub fn steer(&mut self, requested: Direction) {
        if requested == self.direction.opposite() {
            return;
        }
        self.pending = requested;
    }

    /// Moves the head one cell in the pending direction, wrapping at edges.
    ///
    /// The pending direction becomes committed. The tail cell is removed to
    /// keep the length constant and returned so the caller can re-append it
    /// when growth applies this tick.
    pub fn advance(&mut self, bounds: GridSize) -> Position {
        debug_assert!(bounds.width > 0 && bounds.height > 0);

        self.direction = self.pending;
        let next_head = self.head().stepped(self.direction).wrapped(bounds);

        self.body.push_front(next_head);
        self.body
            .pop_back()
            .expect("snake body must always contain at least one segment")
    }

    /// Re-appends a tail segment removed by [`Snake::advance`].
    pub fn grow_tail(&mut self, tail: Position) {
        self.body.push_back(tail);
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    /// Returns true if the head overlaps any non-head segment.
    #[must_use]
    pub fn head_overlaps_body(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|segment| *segment == head)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments. Never true in practice.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Returns the committed movement direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::config::GridSize;
    use crate::input::Direction;

    use super::{Position, Snake};

    const BOUNDS: GridSize = GridSize {
        width: 20,
        height: 20,
    };

    #[test]
    fn stepped_positions_follow_directions() {
        let origin = Position { x: 5, y: 5 };

        assert_eq!(origin.stepped(Direction::Up), Position { x: 5, y: 4 });
        assert_eq!(origin.stepped(Direction::Down), Position { x: 5, y: 6 });
        assert_eq!(origin.stepped(Direction::Left), Position { x: 4, y: 5 });
        assert_eq!(origin.stepped(Direction::Right), Position { x: 6, y: 5 });
    }

    #[test]
    fn wrapping_keeps_coordinates_inside_bounds() {
        let bounds = GridSize {
            width: 10,
            height: 8,
        };

        assert_eq!(
            Position { x: -1, y: 3 }.wrapped(bounds),
            Position { x: 9, y: 3 }
        );
        assert_eq!(
            Position { x: 4, y: 8 }.wrapped(bounds),
            Position { x: 4, y: 0 }
        );
        assert_eq!(
            Position { x: 10, y: -1 }.wrapped(bounds),
            Position { x: 0, y: 7 }
        );
    }

    #[test]
    fn advance_moves_one_cell_and_keeps_length() {
        let mut snake = Snake::new(Position { x: 5, y: 5 }, Direction::Right);

        snake.advance(BOUNDS);

        assert_eq!(snake.head(), Position { x: 6, y: 5 });
        assert_eq!(snake.len(), 1);
    }

    #[test]
    fn advance_wraps_at_the_left_edge() {
        let mut snake = Snake::new(Position { x: 0, y: 5 }, Direction::Left);

        snake.advance(BOUNDS);

        assert_eq!(snake.head(), Position { x: 19, y: 5 });
    }

    #[test]
    fn grow_tail_restores_the_removed_segment() {
        let mut snake = Snake::new(Position { x: 5, y: 5 }, Direction::Right);

        let tail = snake.advance(BOUNDS);
        snake.grow_tail(tail);

        assert_eq!(snake.len(), 2);
        assert_eq!(snake.head(), Position { x: 6, y: 5 });
        assert!(snake.occupies(Position { x: 5, y: 5 }));
    }

    #[test]
    fn steer_rejects_reversal_of_committed_direction() {
        let mut snake = Snake::new(Position { x: 5, y: 5 }, Direction::Right);

        snake.steer(Direction::Left);
        snake.advance(BOUNDS);

        assert_eq!(snake.head(), Position { x: 6, y: 5 });
        assert_eq!(snake.direction(), Direction::Right);
    }

    #[test]
    fn steer_checks_against_committed_not_previous_request() {
        let mut snake = Snake::new(Position { x: 5, y: 5 }, Direction::Right);

        // Up then Down within one tick: both are perpendicular to the
        // committed Right, so the last request wins.
        snake.steer(Direction::Up);
        snake.steer(Direction::Down);
        snake.advance(BOUNDS);

        assert_eq!(snake.head(), Position { x: 5, y: 6 });
        assert_eq!(snake.direction(), Direction::Down);
    }

    #[test]
    fn reversal_still_blocked_after_valid_intermediate_request() {
        let mut snake = Snake::new(Position { x: 5, y: 5 }, Direction::Right);

        // Queuing Up must not open a path for Left before the next tick.
        snake.steer(Direction::Up);
        snake.steer(Direction::Left);
        snake.advance(BOUNDS);

        assert_eq!(snake.head(), Position { x: 5, y: 4 });
        assert_eq!(snake.direction(), Direction::Up);
    }

    #[test]
    fn steer_allowed_again_after_commit() {
        let mut snake = Snake::new(Position { x: 5, y: 5 }, Direction::Right);

        snake.steer(Direction::Up);
        snake.advance(BOUNDS);
        // Left was blocked while Right was committed; after the Up tick it
        // is perpendicular to the committed direction and legal again.
        snake.steer(Direction::Left);
        snake.advance(BOUNDS);

        assert_eq!(snake.direction(), Direction::Left);
        assert_eq!(snake.head(), Position { x: 4, y: 4 });
    }
}
