use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::config::Theme;
use crate::game::{GameState, GameStatus};

/// Supplemental values displayed by the HUD rows.
#[derive(Debug, Clone)]
pub struct HudInfo<'a> {
    pub player_name: &'a str,
    pub theme: &'a Theme,
}

/// Returns the pause-control label for the current status.
#[must_use]
pub fn pause_label(status: GameStatus) -> &'static str {
    match status {
        GameStatus::Paused => "[P] Resume",
        _ => "[P] Pause",
    }
}

/// Renders the two-line HUD and returns the remaining canvas above it.
#[must_use]
pub fn render_hud(
    frame: &mut Frame<'_>,
    area: Rect,
    state: &GameState,
    info: &HudInfo<'_>,
) -> Rect {
    let [canvas, score_row, controls_row] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);

    let [player_area, score_area] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
            .areas(score_row);

    frame.render_widget(
        Paragraph::new(Line::from(format!("Player: {}", info.player_name)))
            .style(Style::new().fg(info.theme.hud_player)),
        player_area,
    );

    frame.render_widget(
        Paragraph::new(Line::from(format!("Score: {}", state.score)))
            .alignment(Alignment::Right)
            .style(
                Style::new()
                    .fg(info.theme.hud_score)
                    .add_modifier(Modifier::BOLD),
            ),
        score_area,
    );

    let controls = format!(
        "[←↑→↓] Move  {}  [R] Restart  [X] Exit  [Q] Quit",
        pause_label(state.status),
    );
    frame.render_widget(
        Paragraph::new(Line::from(controls)).style(Style::new().fg(info.theme.hud_hint)),
        controls_row,
    );

    canvas
}

#[cfg(test)]
mod tests {
    use crate::game::GameStatus;

    use super::pause_label;

    #[test]
    fn pause_label_flips_and_flips_back() {
        assert_eq!(pause_label(GameStatus::Running), "[P] Pause");
        assert_eq!(pause_label(GameStatus::Paused), "[P] Resume");
        assert_eq!(pause_label(GameStatus::Running), "[P] Pause");
    }

    #[test]
    fn pause_label_is_inert_on_terminal_states() {
        assert_eq!(pause_label(GameStatus::GameOver), "[P] Pause");
        assert_eq!(pause_label(GameStatus::Exited), "[P] Pause");
    }
}
