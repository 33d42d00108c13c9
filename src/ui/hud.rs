use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::config::{Theme, tick_interval_for_level};
use crate::game::GameState;

/// Session-external facts the HUD needs alongside the game state.
#[derive(Debug, Clone, Copy)]
pub struct HudInfo {
    pub high_score: u32,
    pub theme: &'static Theme,
}

/// Draws the status line and returns the remaining play area.
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, state: &GameState, info: &HudInfo) -> Rect {
    let [status_row, play_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);

    let style = Style::new().fg(info.theme.hud_fg);
    let bold = style.add_modifier(Modifier::BOLD);

    let mut spans = vec![
        Span::styled(" Score ", style),
        Span::styled(state.score.to_string(), bold),
        Span::styled("  Best ", style),
        Span::styled(info.high_score.max(state.score).to_string(), bold),
    ];

    if state.rules().leveling {
        let period = tick_interval_for_level(state.level);
        spans.push(Span::styled("  Level ", style));
        spans.push(Span::styled(state.level.to_string(), bold));
        spans.push(Span::styled(
            format!("  {}ms/step", period.as_millis()),
            style,
        ));
    }

    frame.render_widget(Line::from(spans), status_row);

    play_area
}
