//! Wraparound Snake: a toroidal-grid snake simulation plus a terminal front end.
//!
//! The simulation lives in [`game`] and is a pure, timer-free state machine:
//! the host owns the periodic scheduler and calls [`game::GameState::tick`]
//! once per interval. Everything else (input mapping, rendering, persistence,
//! reward math) is peripheral to that core and testable on its own.

pub mod config;
pub mod food;
pub mod game;
pub mod input;
pub mod renderer;
pub mod rewards;
pub mod score;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;
