use std::io;
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;
use torus_snake::config::{GameRules, GridSize, ThemeChoice, tick_interval_for_level};
use torus_snake::game::{GameState, GameStatus};
use torus_snake::input::{GameInput, InputHandler};
use torus_snake::renderer;
use torus_snake::score::{load_high_score, save_high_score};
use torus_snake::terminal_runtime::{TerminalSession, install_panic_hook};
use torus_snake::ui::hud::HudInfo;

#[derive(Debug, Parser)]
#[command(version, about = "Wraparound Snake for the terminal")]
struct Cli {
    /// Grid width in cells.
    #[arg(long, default_value_t = 20, value_parser = clap::value_parser!(u16).range(4..=100))]
    width: u16,

    /// Grid height in cells.
    #[arg(long, default_value_t = 20, value_parser = clap::value_parser!(u16).range(4..=100))]
    height: u16,

    /// Classic rules: fixed speed, no level progression.
    #[arg(long)]
    classic: bool,

    /// Color theme.
    #[arg(long, value_enum, default_value_t = ThemeChoice::Classic)]
    theme: ThemeChoice,

    /// Seed for food placement, for reproducible sessions.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    let rules = GameRules {
        size: GridSize {
            width: cli.width,
            height: cli.height,
        },
        leveling: !cli.classic,
    };

    // Read scores before raw mode so a corrupt file warns on a usable tty.
    let high_score = match load_high_score(rules.leveling) {
        Ok(score) => score,
        Err(error) => {
            eprintln!("warning: ignoring unreadable high score: {error}");
            0
        }
    };

    install_panic_hook();
    let mut session = TerminalSession::enter()?;
    run(&mut session, &cli, rules, high_score)?;
    Ok(())
}

fn run(
    session: &mut TerminalSession,
    cli: &Cli,
    rules: GameRules,
    mut high_score: u32,
) -> io::Result<()> {
    let mut state = match cli.seed {
        Some(seed) => GameState::new_with_seed(rules, seed),
        None => GameState::new(rules),
    };
    let mut input = InputHandler::new();
    let theme = cli.theme.theme();

    let mut last_tick = Instant::now();
    let mut last_status = state.status;

    loop {
        session.terminal_mut().draw(|frame| {
            renderer::render(frame, &state, HudInfo { high_score, theme });
        })?;

        if let Some(game_input) = input.poll_input()? {
            if game_input == GameInput::Quit {
                break;
            }
            state.apply_input(game_input);
        }

        if state.is_playing() && last_tick.elapsed() >= tick_interval_for_level(state.level) {
            state.tick();
            last_tick = Instant::now();
        }

        if state.status != last_status {
            if state.status == GameStatus::GameOver && state.score > high_score {
                high_score = state.score;
                if let Err(error) = save_high_score(rules.leveling, high_score) {
                    // Not fatal; the session continues with the in-memory score.
                    eprintln!("warning: failed to save high score: {error}");
                }
            }
            last_status = state.status;
        }

        thread::sleep(Duration::from_millis(8));
    }

    Ok(())
}
