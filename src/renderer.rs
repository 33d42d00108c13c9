use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;

use crate::config::{GLYPH_FOOD, GLYPH_SNAKE_BODY, GLYPH_SNAKE_HEAD, GridSize, Theme};
use crate::game::{GameState, GameStatus};
use crate::rewards::{GameKind, calculate_rewards};
use crate::snake::Position;
use crate::ui::hud::{HudInfo, render_hud};
use crate::ui::menu::{render_game_over_menu, render_start_menu};

/// Renders the full game frame from immutable state.
pub fn render(frame: &mut Frame<'_>, state: &GameState, hud_info: HudInfo) {
    let area = frame.area();
    let play_area = render_hud(frame, area, state, &hud_info);

    let theme = hud_info.theme;
    let block = Block::bordered().border_style(Style::new().fg(theme.border_fg));

    let inner = block.inner(play_area);
    frame.render_widget(block, play_area);

    render_food(frame, inner, state, theme);
    render_snake(frame, inner, state, theme);

    match state.status {
        GameStatus::Idle => render_start_menu(frame, play_area, hud_info.high_score, theme),
        GameStatus::GameOver => {
            let rewards = calculate_rewards(state.score, GameKind::Snake, false);
            render_game_over_menu(
                frame,
                play_area,
                state.score,
                hud_info.high_score,
                rewards,
                theme,
            );
        }
        GameStatus::Running => {}
    }
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, state: &GameState, theme: &Theme) {
    let Some((x, y)) = logical_to_terminal(inner, state.bounds(), state.food) else {
        return;
    };

    let buffer = frame.buffer_mut();
    buffer.set_string(x, y, GLYPH_FOOD, Style::new().fg(theme.food));
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, state: &GameState, theme: &Theme) {
    let head = state.snake.head();

    let buffer = frame.buffer_mut();
    for segment in state.snake.segments() {
        let Some((x, y)) = logical_to_terminal(inner, state.bounds(), *segment) else {
            continue;
        };

        if *segment == head {
            buffer.set_string(
                x,
                y,
                GLYPH_SNAKE_HEAD,
                Style::new()
                    .fg(theme.snake_head)
                    .add_modifier(Modifier::BOLD),
            );
        } else {
            buffer.set_string(x, y, GLYPH_SNAKE_BODY, Style::new().fg(theme.snake_body));
        }
    }
}

// Cells are always inside grid bounds thanks to wraparound; clipping here
// only guards against terminals smaller than the grid.
fn logical_to_terminal(inner: Rect, bounds: GridSize, position: Position) -> Option<(u16, u16)> {
    debug_assert!(position.x >= 0 && position.x < i32::from(bounds.width));
    debug_assert!(position.y >= 0 && position.y < i32::from(bounds.height));

    let x_offset = u16::try_from(position.x).ok()?;
    let y_offset = u16::try_from(position.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x >= inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
