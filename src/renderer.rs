use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::config::GridSize;
use crate::game::{GameState, Phase};
use crate::snake::Cell;
use crate::ui::hud::{render_hud, HudInfo};
use crate::ui::menu::{render_game_over_menu, render_pause_menu, render_ready_menu};

/// Terminal columns per logical grid cell, so cells render roughly square.
const CELL_WIDTH: u16 = 2;

const GLYPH_CELL: &str = "██";

/// Renders one full frame from an immutable snapshot.
pub fn render(frame: &mut Frame<'_>, state: &GameState, info: HudInfo) {
    let area = frame.area();
    let play_area = render_hud(frame, area, state, info);

    let block = Block::bordered().border_style(Style::new().fg(Color::DarkGray));
    let inner = block.inner(play_area);
    frame.render_widget(block, play_area);

    render_food(frame, inner, state);
    render_snake(frame, inner, state);

    match state.phase {
        Phase::Ready => render_ready_menu(frame, play_area, info.best),
        Phase::Paused => render_pause_menu(frame, play_area),
        Phase::GameOver => render_game_over_menu(frame, play_area, state.score, info.best),
        Phase::Running => {}
    }
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, state: &GameState) {
    let Some((x, y)) = cell_to_terminal(inner, state.bounds(), state.food) else {
        return;
    };

    frame
        .buffer_mut()
        .set_string(x, y, GLYPH_CELL, Style::new().fg(Color::Red));
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, state: &GameState) {
    let head = state.snake.head();
    let buffer = frame.buffer_mut();

    for cell in state.snake.cells() {
        let Some((x, y)) = cell_to_terminal(inner, state.bounds(), *cell) else {
            continue;
        };

        let style = if *cell == head {
            Style::new().fg(Color::White).add_modifier(Modifier::BOLD)
        } else {
            Style::new().fg(Color::Green)
        };
        buffer.set_string(x, y, GLYPH_CELL, style);
    }
}

/// Maps a logical cell to the terminal column/row of its leftmost glyph.
///
/// Returns `None` when the cell does not fit inside `inner`, so a too-small
/// terminal degrades to clipping.
fn cell_to_terminal(inner: Rect, bounds: GridSize, cell: Cell) -> Option<(u16, u16)> {
    if cell.x < 0
        || cell.y < 0
        || cell.x >= i32::from(bounds.cols)
        || cell.y >= i32::from(bounds.rows)
    {
        return None;
    }

    let x = inner.x + u16::try_from(cell.x).ok()? * CELL_WIDTH;
    let y = inner.y + u16::try_from(cell.y).ok()?;
    if x + CELL_WIDTH > inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}

#[cfg(test)]
mod tests {
    use ratatui::layout::Rect;

    use crate::config::GridSize;
    use crate::snake::Cell;

    use super::cell_to_terminal;

    const BOUNDS: GridSize = GridSize { cols: 24, rows: 24 };

    #[test]
    fn cells_map_to_two_column_terminal_slots() {
        let inner = Rect::new(1, 1, 48, 24);

        assert_eq!(
            cell_to_terminal(inner, BOUNDS, Cell { x: 0, y: 0 }),
            Some((1, 1))
        );
        assert_eq!(
            cell_to_terminal(inner, BOUNDS, Cell { x: 3, y: 2 }),
            Some((7, 3))
        );
        assert_eq!(
            cell_to_terminal(inner, BOUNDS, Cell { x: 23, y: 23 }),
            Some((47, 24))
        );
    }

    #[test]
    fn cells_outside_a_small_terminal_are_clipped() {
        let inner = Rect::new(0, 0, 10, 5);

        assert_eq!(cell_to_terminal(inner, BOUNDS, Cell { x: 4, y: 4 }), Some((8, 4)));
        assert_eq!(cell_to_terminal(inner, BOUNDS, Cell { x: 5, y: 4 }), None);
        assert_eq!(cell_to_terminal(inner, BOUNDS, Cell { x: 4, y: 5 }), None);
    }

    #[test]
    fn cells_outside_the_grid_are_rejected() {
        let inner = Rect::new(0, 0, 48, 24);

        assert_eq!(cell_to_terminal(inner, BOUNDS, Cell { x: -1, y: 0 }), None);
        assert_eq!(cell_to_terminal(inner, BOUNDS, Cell { x: 24, y: 0 }), None);
    }
}
