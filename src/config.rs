use std::time::Duration;

use clap::ValueEnum;
use ratatui::style::Color;

/// Logical grid dimensions passed through the game as a named type.
///
/// Makes width vs. height unambiguous at every call site; both axes wrap,
/// so there are no border walls anywhere in the rules.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self {
            width: DEFAULT_GRID_SIDE,
            height: DEFAULT_GRID_SIDE,
        }
    }
}

/// Rule variant selection for one game session.
///
/// The classic and leveling variants share one engine; `leveling` is the
/// only divergence point between them.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GameRules {
    pub size: GridSize,
    /// When true, the level rises at every exact multiple of
    /// [`POINTS_PER_LEVEL`] and the tick period shrinks accordingly.
    pub leveling: bool,
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            size: GridSize::default(),
            leveling: true,
        }
    }
}

/// Default side length of the square play field.
pub const DEFAULT_GRID_SIDE: u16 = 20;

/// Score granted per food cell eaten.
pub const FOOD_POINTS: u32 = 10;

/// Score at which the level rises by one (leveling rules only).
pub const POINTS_PER_LEVEL: u32 = 50;

/// Tick period at level 1, in milliseconds.
pub const BASE_TICK_INTERVAL_MS: u64 = 150;

/// Tick period reduction per level above 1, in milliseconds.
pub const SPEEDUP_PER_LEVEL_MS: u64 = 10;

/// Lower clamp for the tick period so high levels stay playable.
pub const MIN_TICK_INTERVAL_MS: u64 = 60;

/// Key repeats arriving faster than this are dropped by the input adapter.
pub const INPUT_DEBOUNCE_MS: u64 = 50;

/// Random food placement attempts before falling back to a row-major scan.
pub const MAX_FOOD_SPAWN_ATTEMPTS: u32 = 256;

/// Returns the tick period for `level`, clamped to the minimum interval.
#[must_use]
pub fn tick_interval_for_level(level: u32) -> Duration {
    let speedup_ms = u64::from(level.saturating_sub(1)) * SPEEDUP_PER_LEVEL_MS;
    let clamped_ms = BASE_TICK_INTERVAL_MS
        .saturating_sub(speedup_ms)
        .max(MIN_TICK_INTERVAL_MS);
    Duration::from_millis(clamped_ms)
}

/// Snake head glyph.
pub const GLYPH_SNAKE_HEAD: &str = "█";

/// Snake body glyph.
pub const GLYPH_SNAKE_BODY: &str = "▓";

/// Food glyph.
pub const GLYPH_FOOD: &str = "●";

/// A color theme applied to all visual elements.
#[derive(Debug)]
pub struct Theme {
    pub name: &'static str,
    pub snake_head: Color,
    pub snake_body: Color,
    pub food: Color,
    pub border_fg: Color,
    pub hud_fg: Color,
    pub menu_title: Color,
    pub menu_footer: Color,
}

/// Green snake on dark theme.
pub const THEME_CLASSIC: Theme = Theme {
    name: "Classic",
    snake_head: Color::White,
    snake_body: Color::Green,
    food: Color::Red,
    border_fg: Color::DarkGray,
    hud_fg: Color::White,
    menu_title: Color::Green,
    menu_footer: Color::DarkGray,
};

/// Neon magenta/yellow theme.
pub const THEME_NEON: Theme = Theme {
    name: "Neon",
    snake_head: Color::White,
    snake_body: Color::Magenta,
    food: Color::Yellow,
    border_fg: Color::Magenta,
    hud_fg: Color::Magenta,
    menu_title: Color::Magenta,
    menu_footer: Color::DarkGray,
};

/// Theme selection exposed on the command line.
#[derive(Debug, Clone, Copy, Eq, PartialEq, ValueEnum)]
pub enum ThemeChoice {
    Classic,
    Neon,
}

impl ThemeChoice {
    /// Resolves the selection to its theme definition.
    #[must_use]
    pub fn theme(self) -> &'static Theme {
        match self {
            Self::Classic => &THEME_CLASSIC,
            Self::Neon => &THEME_NEON,
        }
    }
}
