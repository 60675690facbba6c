use crate::grid::{Cell, Grid};
use crate::snake::Snake;

/// Terminal collision kinds detected after a movement step.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Collision {
    Wall,
    Body,
}

/// Checks the freshly advanced head against the walls and the body.
///
/// Called once per tick, right after the snake moves. `snake` already
/// contains the new head, so the self-collision scan skips the first
/// segment; moving into the cell the tail just vacated is legal because
/// the tail drop happens during the advance.
#[must_use]
pub fn check(head: Cell, grid: Grid, snake: &Snake) -> Option<Collision> {
    if !grid.contains(head) {
        return Some(Collision::Wall);
    }

    if snake.head_overlaps_body() {
        return Some(Collision::Body);
    }

    None
}
