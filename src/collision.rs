use crate::config::GridSize;
use crate::snake::{Cell, Snake};

/// Returns true when `cell` lies outside the playfield.
#[must_use]
pub fn is_wall_collision(cell: Cell, bounds: GridSize) -> bool {
    cell.x < 0 || cell.y < 0 || cell.x >= i32::from(bounds.cols) || cell.y >= i32::from(bounds.rows)
}

/// Returns true when `cell` is occupied by the snake body.
///
/// Evaluated against the full body before the tail moves for the step, so
/// entering the cell the tail is about to vacate still counts as a
/// collision.
#[must_use]
pub fn is_self_collision(cell: Cell, snake: &Snake) -> bool {
    snake.occupies(cell)
}

#[cfg(test)]
mod tests {
    use crate::config::GridSize;
    use crate::snake::{Cell, Snake};

    use super::{is_self_collision, is_wall_collision};

    const BOUNDS: GridSize = GridSize { cols: 24, rows: 24 };

    #[test]
    fn cells_inside_bounds_do_not_collide() {
        assert!(!is_wall_collision(Cell { x: 0, y: 0 }, BOUNDS));
        assert!(!is_wall_collision(Cell { x: 23, y: 23 }, BOUNDS));
        assert!(!is_wall_collision(Cell { x: 12, y: 7 }, BOUNDS));
    }

    #[test]
    fn cells_on_or_past_the_edge_collide() {
        assert!(is_wall_collision(Cell { x: -1, y: 5 }, BOUNDS));
        assert!(is_wall_collision(Cell { x: 5, y: -1 }, BOUNDS));
        assert!(is_wall_collision(Cell { x: 24, y: 5 }, BOUNDS));
        assert!(is_wall_collision(Cell { x: 5, y: 24 }, BOUNDS));
    }

    #[test]
    fn body_cells_collide_and_free_cells_do_not() {
        let snake = Snake::from_cells(vec![
            Cell { x: 2, y: 2 },
            Cell { x: 1, y: 2 },
            Cell { x: 1, y: 3 },
        ]);

        assert!(is_self_collision(Cell { x: 1, y: 2 }, &snake));
        assert!(!is_self_collision(Cell { x: 3, y: 2 }, &snake));
    }

    #[test]
    fn tail_cell_still_counts_as_occupied() {
        // The tail vacates its cell only after the head moves, so the check
        // runs against the full pre-move body and the tail cell collides.
        let snake = Snake::from_cells(vec![
            Cell { x: 2, y: 2 },
            Cell { x: 1, y: 2 },
            Cell { x: 1, y: 3 },
            Cell { x: 2, y: 3 },
        ]);

        assert!(is_self_collision(Cell { x: 2, y: 3 }, &snake));
    }
}
