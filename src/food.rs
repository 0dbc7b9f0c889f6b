use rand::Rng;

use crate::config::GridSize;
use crate::snake::{Cell, Snake};

/// Draws uniformly random cells until one lands outside the snake body.
///
/// There is no retry cap: placement is probabilistic and relies on the board
/// always having free cells, which holds for every body length reachable
/// under the growth rule on the shipped grid sizes.
#[must_use]
pub fn spawn_food<R: Rng + ?Sized>(rng: &mut R, bounds: GridSize, snake: &Snake) -> Cell {
    loop {
        let cell = Cell {
            x: rng.gen_range(0..i32::from(bounds.cols)),
            y: rng.gen_range(0..i32::from(bounds.rows)),
        };

        if !snake.occupies(cell) {
            return cell;
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::config::GridSize;
    use crate::snake::{Cell, Snake};

    use super::spawn_food;

    #[test]
    fn food_never_spawns_on_the_snake() {
        let mut rng = StdRng::seed_from_u64(7);
        let bounds = GridSize { cols: 8, rows: 6 };
        let snake = Snake::from_cells(vec![
            Cell { x: 0, y: 0 },
            Cell { x: 1, y: 0 },
            Cell { x: 2, y: 0 },
        ]);

        for _ in 0..100 {
            let food = spawn_food(&mut rng, bounds, &snake);
            assert!(!snake.occupies(food));
            assert!(food.x >= 0 && food.x < 8);
            assert!(food.y >= 0 && food.y < 6);
        }
    }

    #[test]
    fn identical_seeds_place_identical_food() {
        let bounds = GridSize { cols: 24, rows: 24 };
        let snake = Snake::from_cells(vec![Cell { x: 12, y: 12 }]);
        let mut a = StdRng::seed_from_u64(11);
        let mut b = StdRng::seed_from_u64(11);

        for _ in 0..20 {
            assert_eq!(
                spawn_food(&mut a, bounds, &snake),
                spawn_food(&mut b, bounds, &snake)
            );
        }
    }

    #[test]
    fn spawn_lands_on_the_only_free_cell() {
        let mut rng = StdRng::seed_from_u64(0);
        let snake = Snake::from_cells(vec![
            Cell { x: 0, y: 0 },
            Cell { x: 1, y: 0 },
            Cell { x: 0, y: 1 },
        ]);

        let food = spawn_food(&mut rng, GridSize { cols: 2, rows: 2 }, &snake);

        assert_eq!(food, Cell { x: 1, y: 1 });
    }
}
