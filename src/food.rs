use rand::Rng;

use crate::grid::{Cell, Grid};
use crate::snake::Snake;

/// Picks a uniformly random free cell for the next food item.
///
/// Free cells are enumerated up front instead of rejection-sampled, so the
/// call terminates even on a nearly full board. Returns `None` when the
/// snake covers every cell; the session treats that as winning the board.
#[must_use]
pub fn spawn<R: Rng + ?Sized>(rng: &mut R, grid: Grid, snake: &Snake) -> Option<Cell> {
    let mut free = Vec::with_capacity(grid.total_cells().saturating_sub(snake.len()));

    for y in 0..i32::from(grid.height) {
        for x in 0..i32::from(grid.width) {
            let cell = Cell { x, y };
            if !snake.occupies(cell) {
                free.push(cell);
            }
        }
    }

    if free.is_empty() {
        return None;
    }

    Some(free[rng.gen_range(0..free.len())])
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::grid::{Cell, Grid};
    use crate::input::Direction;
    use crate::snake::Snake;

    use super::spawn;

    #[test]
    fn spawned_food_never_overlaps_the_snake() {
        let mut rng = StdRng::seed_from_u64(7);
        let grid = Grid {
            width: 8,
            height: 6,
        };
        let snake = Snake::new(Cell { x: 4, y: 3 }, 4);

        for _ in 0..200 {
            let food = spawn(&mut rng, grid, &snake).expect("board has free cells");
            assert!(!snake.occupies(food));
            assert!(grid.contains(food));
        }
    }

    #[test]
    fn full_board_yields_no_food() {
        let mut rng = StdRng::seed_from_u64(11);
        let grid = Grid {
            width: 2,
            height: 2,
        };
        let snake = Snake::from_segments(
            vec![
                Cell { x: 0, y: 0 },
                Cell { x: 1, y: 0 },
                Cell { x: 1, y: 1 },
                Cell { x: 0, y: 1 },
            ],
            Direction::Left,
        );

        assert_eq!(spawn(&mut rng, grid, &snake), None);
    }

    #[test]
    fn single_free_cell_is_always_found() {
        let mut rng = StdRng::seed_from_u64(3);
        let grid = Grid {
            width: 3,
            height: 1,
        };
        let snake = Snake::from_segments(
            vec![Cell { x: 1, y: 0 }, Cell { x: 0, y: 0 }],
            Direction::Right,
        );

        assert_eq!(spawn(&mut rng, grid, &snake), Some(Cell { x: 2, y: 0 }));
    }
}
