use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::game::GameState;

/// Supplemental values displayed alongside the simulation state.
#[derive(Debug, Clone, Copy)]
pub struct HudInfo {
    pub best: u32,
    pub speed_level: u8,
}

/// Renders the two-line HUD and returns the remaining play area above it.
#[must_use]
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, state: &GameState, info: HudInfo) -> Rect {
    let [play_area, score_area, hint_area] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);

    let score_line = Line::from(vec![
        Span::styled(
            format!(" Score {:>4}", state.score),
            Style::new().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled(format!("Best {:>4}", info.best), Style::new().fg(Color::Yellow)),
        Span::raw("   "),
        Span::styled(
            format!("Speed {:>2}", info.speed_level),
            Style::new().fg(Color::Cyan),
        ),
    ]);
    frame.render_widget(Paragraph::new(score_line), score_area);

    let hint = Line::from(" arrows/wasd move   space pause   r restart   +/- speed   q quit");
    frame.render_widget(
        Paragraph::new(hint).style(Style::new().fg(Color::DarkGray)),
        hint_area,
    );

    play_area
}
