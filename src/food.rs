use rand::Rng;

use crate::config::{GridSize, MAX_FOOD_SPAWN_ATTEMPTS};
use crate::snake::{Position, Snake};

/// Picks a food cell not occupied by the snake.
///
/// Draws uniformly random cells and rejects those on the snake's body. The
/// rejection loop is capped: once the attempt budget is spent (relevant only
/// when the snake covers most of the board), placement falls back to a
/// row-major scan for the first free cell, so this always terminates.
///
/// Returns `None` only when the snake covers every cell of the grid.
#[must_use]
pub fn spawn_position<R: Rng + ?Sized>(
    rng: &mut R,
    bounds: GridSize,
    snake: &Snake,
) -> Option<Position> {
    for _ in 0..MAX_FOOD_SPAWN_ATTEMPTS {
        let candidate = Position {
            x: rng.gen_range(0..i32::from(bounds.width)),
            y: rng.gen_range(0..i32::from(bounds.height)),
        };

        if !snake.occupies(candidate) {
            return Some(candidate);
        }
    }

    first_free_cell(bounds, snake)
}

fn first_free_cell(bounds: GridSize, snake: &Snake) -> Option<Position> {
    for y in 0..i32::from(bounds.height) {
        for x in 0..i32::from(bounds.width) {
            let position = Position { x, y };
            if !snake.occupies(position) {
                return Some(position);
            }
        }
    }

    None
}
