use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::{FOOD_POINTS, GameRules, GridSize, POINTS_PER_LEVEL};
use crate::food;
use crate::input::{Direction, GameInput};
use crate::snake::{Position, Snake};

/// Session lifecycle state.
///
/// `Idle` is the initial state and the reset target. `GameOver` is terminal;
/// only an explicit reset leaves it. There is no pause state: the host
/// suspends the session by simply not calling [`GameState::tick`].
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Idle,
    Running,
    GameOver,
}

/// Complete mutable simulation state for one session.
///
/// The engine is timer-free: the host owns scheduling and calls `tick` once
/// per period. All mutation happens through `tick`, `apply_input`, `start`
/// and `reset`, so a single-threaded caller needs no synchronization.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub food: Position,
    pub score: u32,
    pub level: u32,
    pub status: GameStatus,
    rules: GameRules,
    rng: StdRng,
}

impl GameState {
    /// Creates an idle session with entropy-seeded food placement.
    #[must_use]
    pub fn new(rules: GameRules) -> Self {
        Self::new_with_seed(rules, rand::random())
    }

    /// Creates a deterministic session for tests and reproducible runs.
    #[must_use]
    pub fn new_with_seed(rules: GameRules, seed: u64) -> Self {
        Self {
            snake: initial_snake(rules.size),
            food: initial_food(rules.size),
            score: 0,
            level: 1,
            status: GameStatus::Idle,
            rules,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Begins play. No-op unless the session is idle.
    pub fn start(&mut self) {
        if self.status == GameStatus::Idle {
            self.status = GameStatus::Running;
        }
    }

    /// Restores the initial session state, from any status.
    ///
    /// Always lands on the identical idle state: center snake, fixed food
    /// cell, rightward direction, zeroed score, level 1. The random number
    /// generator is not re-seeded; it only influences future food placement.
    pub fn reset(&mut self) {
        self.snake = initial_snake(self.rules.size);
        self.food = initial_food(self.rules.size);
        self.score = 0;
        self.level = 1;
        self.status = GameStatus::Idle;
    }

    /// Advances the simulation by exactly one step.
    ///
    /// No-op unless running. Otherwise exactly one of three outcomes results:
    /// a routine move, a self-collision ending the session with the score
    /// frozen, or a food consumption applying growth, scoring, leveling and
    /// a food respawn.
    pub fn tick(&mut self) {
        if self.status != GameStatus::Running {
            return;
        }

        // Constant-length move first; the removed tail comes back only when
        // food is eaten this tick.
        let removed_tail = self.snake.advance(self.rules.size);

        // Collision is judged against the post-move, pre-growth body, so a
        // head landing on the vacated tail cell is not a death.
        if self.snake.head_overlaps_body() {
            self.status = GameStatus::GameOver;
            return;
        }

        if self.snake.head() != self.food {
            return;
        }

        self.snake.grow_tail(removed_tail);
        self.score += FOOD_POINTS;

        if self.rules.leveling && self.score % POINTS_PER_LEVEL == 0 {
            self.level += 1;
        }

        match food::spawn_position(&mut self.rng, self.rules.size, &self.snake) {
            Some(position) => self.food = position,
            // The snake fills the entire board; nothing left to play for.
            None => self.status = GameStatus::GameOver,
        }
    }

    /// Applies one external input event.
    ///
    /// Direction changes only reach the snake while running; confirm starts
    /// an idle session and resets a finished one. Invalid inputs are dropped
    /// without signaling an error.
    pub fn apply_input(&mut self, input: GameInput) {
        match input {
            GameInput::Direction(direction) => {
                if self.status == GameStatus::Running {
                    self.snake.steer(direction);
                }
            }
            GameInput::Confirm => match self.status {
                GameStatus::Idle => self.start(),
                GameStatus::GameOver => self.reset(),
                GameStatus::Running => {}
            },
            GameInput::Quit => {}
        }
    }

    /// Returns the session rules.
    #[must_use]
    pub fn rules(&self) -> GameRules {
        self.rules
    }

    /// Returns the grid dimensions.
    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.rules.size
    }

    /// Returns true while the simulation is advancing.
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.status == GameStatus::Running
    }

    /// Returns true once the session has ended.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }
}

fn initial_snake(size: GridSize) -> Snake {
    let center = Position {
        x: i32::from(size.width / 2),
        y: i32::from(size.height / 2),
    };
    Snake::new(center, Direction::Right)
}

fn initial_food(size: GridSize) -> Position {
    // Three quarters along both axes: (15, 15) on the default 20x20 board.
    Position {
        x: i32::from(size.width) * 3 / 4,
        y: i32::from(size.height) * 3 / 4,
    }
}
