//! End-of-game reward math for the arcade hub economy.
//!
//! Each minigame reports a final score; the hub converts it into coins,
//! experience and pet happiness with a per-game multiplier and an optional
//! winner bonus. This module only computes the numbers; spending them is the
//! hub's business.

/// Minigames whose scores feed the shared reward formula.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameKind {
    Snake,
    Tetris,
    Pong,
    Memory,
    Simon,
    Breakout,
    TwentyFortyEight,
}

impl GameKind {
    /// Per-game payout multiplier. Harder or slower games pay out more.
    #[must_use]
    pub fn multiplier(self) -> f64 {
        match self {
            Self::Snake => 1.0,
            Self::Tetris => 1.2,
            Self::Pong => 1.1,
            Self::Memory => 1.3,
            Self::Simon => 1.4,
            Self::Breakout => 1.1,
            Self::TwentyFortyEight => 1.5,
        }
    }
}

/// Multiplier applied on top when the player won outright.
pub const WINNER_BONUS: f64 = 1.5;

/// Happiness cap before the winner bonus.
pub const MAX_BASE_HAPPINESS: u32 = 50;

/// Payout for one finished game.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GameRewards {
    pub coins: u32,
    pub experience: u32,
    pub happiness: u32,
}

/// Converts a final score into the payout for `kind`.
///
/// Coins and experience scale with both the winner bonus and the per-game
/// multiplier; happiness only gets the winner bonus. All three are floored
/// to whole units.
#[must_use]
pub fn calculate_rewards(score: u32, kind: GameKind, winner: bool) -> GameRewards {
    let base_coins = score / 50 + 10;
    let base_experience = score + 20;
    let base_happiness = (score / 20 + 10).min(MAX_BASE_HAPPINESS);

    let bonus = if winner { WINNER_BONUS } else { 1.0 };
    let multiplier = kind.multiplier();

    GameRewards {
        coins: scaled(base_coins, bonus * multiplier),
        experience: scaled(base_experience, bonus * multiplier),
        happiness: scaled(base_happiness, bonus),
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn scaled(base: u32, factor: f64) -> u32 {
    (f64::from(base) * factor).floor() as u32
}
