use std::collections::VecDeque;

use crate::grid::Cell;
use crate::input::Direction;

/// Mutable snake body state, ordered head-first.
///
/// The snake advances in whatever heading it is handed; filtering out
/// reversals is the input router's job, not this type's.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Cell>,
    heading: Direction,
    grow_pending: bool,
}

impl Snake {
    /// Lays out `length` segments with the head at `head` and the rest
    /// trailing to the left, opposite the initial Right heading.
    #[must_use]
    pub fn new(head: Cell, length: usize) -> Self {
        let length = length.max(1);
        let mut body = VecDeque::with_capacity(length);
        for offset in 0..length {
            body.push_back(Cell {
                x: head.x - offset as i32,
                y: head.y,
            });
        }

        Self {
            body,
            heading: Direction::Right,
            grow_pending: false,
        }
    }

    /// Creates a snake from explicit segments (front is head).
    #[must_use]
    pub fn from_segments(segments: Vec<Cell>, heading: Direction) -> Self {
        debug_assert!(!segments.is_empty());

        Self {
            body: VecDeque::from(segments),
            heading,
            grow_pending: false,
        }
    }

    /// Moves one cell in `heading` and returns the new head for collision
    /// testing.
    ///
    /// The tail is dropped unless growth was queued, so length stays constant
    /// outside of food consumption.
    pub fn advance(&mut self, heading: Direction) -> Cell {
        self.heading = heading;
        let next = self.next_head(heading);

        self.body.push_front(next);
        if !self.grow_pending {
            let _ = self.body.pop_back();
        }
        self.grow_pending = false;

        next
    }

    /// Returns the cell the head would move to in `heading`, without moving.
    #[must_use]
    pub fn next_head(&self, heading: Direction) -> Cell {
        let head = self.head();
        match heading {
            Direction::Up => Cell {
                x: head.x,
                y: head.y - 1,
            },
            Direction::Down => Cell {
                x: head.x,
                y: head.y + 1,
            },
            Direction::Left => Cell {
                x: head.x - 1,
                y: head.y,
            },
            Direction::Right => Cell {
                x: head.x + 1,
                y: head.y,
            },
        }
    }

    /// Queues growth: the next `advance` keeps the tail.
    pub fn grow(&mut self) {
        self.grow_pending = true;
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Cell {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if any segment occupies `cell`.
    #[must_use]
    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Returns true if the head overlaps any non-head segment.
    #[must_use]
    pub fn head_overlaps_body(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|segment| *segment == head)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments. Never the case in play.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Returns the heading applied on the most recent advance.
    #[must_use]
    pub fn heading(&self) -> Direction {
        self.heading
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Cell> {
        self.body.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::grid::Cell;
    use crate::input::Direction;

    use super::Snake;

    #[test]
    fn new_snake_trails_left_of_the_head() {
        let snake = Snake::new(Cell { x: 10, y: 10 }, 3);

        let segments: Vec<Cell> = snake.segments().copied().collect();
        assert_eq!(
            segments,
            vec![
                Cell { x: 10, y: 10 },
                Cell { x: 9, y: 10 },
                Cell { x: 8, y: 10 },
            ]
        );
        assert_eq!(snake.heading(), Direction::Right);
    }

    #[test]
    fn advance_moves_one_cell_and_preserves_length() {
        let mut snake = Snake::new(Cell { x: 10, y: 10 }, 3);

        let head = snake.advance(Direction::Right);

        assert_eq!(head, Cell { x: 11, y: 10 });
        assert_eq!(snake.head(), head);
        assert_eq!(snake.len(), 3);
        assert!(!snake.occupies(Cell { x: 8, y: 10 }), "tail cell vacated");
    }

    #[test]
    fn advance_after_grow_keeps_the_tail() {
        let mut snake = Snake::new(Cell { x: 5, y: 5 }, 3);

        snake.grow();
        snake.advance(Direction::Right);

        assert_eq!(snake.len(), 4);
        assert!(snake.occupies(Cell { x: 3, y: 5 }));
    }

    #[test]
    fn grow_applies_to_exactly_one_advance() {
        let mut snake = Snake::new(Cell { x: 5, y: 5 }, 1);

        snake.grow();
        snake.advance(Direction::Right);
        snake.advance(Direction::Right);

        assert_eq!(snake.len(), 2);
    }

    #[test]
    fn advance_trusts_the_given_heading() {
        // Reversal filtering lives in the input router; handed a reversal,
        // the snake walks straight into its own neck.
        let mut snake = Snake::from_segments(
            vec![
                Cell { x: 5, y: 5 },
                Cell { x: 4, y: 5 },
                Cell { x: 3, y: 5 },
            ],
            Direction::Right,
        );

        snake.advance(Direction::Left);

        assert!(snake.head_overlaps_body());
    }

    #[test]
    fn occupies_matches_every_segment() {
        let snake = Snake::new(Cell { x: 4, y: 7 }, 3);

        assert!(snake.occupies(Cell { x: 4, y: 7 }));
        assert!(snake.occupies(Cell { x: 3, y: 7 }));
        assert!(snake.occupies(Cell { x: 2, y: 7 }));
        assert!(!snake.occupies(Cell { x: 5, y: 7 }));
    }
}
