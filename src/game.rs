use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::collision::{self, Collision};
use crate::config::{FOOD_POINTS, INITIAL_SNAKE_LENGTH};
use crate::food;
use crate::grid::{Cell, Grid};
use crate::input::{Direction, InputRouter};
use crate::snake::Snake;

/// Session lifecycle states.
///
/// `Won` is the terminal state for a board the snake has completely filled;
/// there is no cell left to place food on.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum SessionStatus {
    Idle,
    Running,
    Paused,
    GameOver,
    Won,
}

impl SessionStatus {
    /// Returns true for states a new session may be started from.
    #[must_use]
    pub fn is_startable(self) -> bool {
        matches!(self, Self::Idle | Self::GameOver | Self::Won)
    }
}

/// Owns all mutable state for one game session.
///
/// Renderers read through the accessors; input and timer code drive the
/// session only through `steer`, `start`, `toggle_pause`, `reset`, and
/// `tick`. Nothing outside this type mutates the board.
#[derive(Debug, Clone)]
pub struct GameSession {
    grid: Grid,
    snake: Snake,
    food: Option<Cell>,
    score: u32,
    high_score: u32,
    status: SessionStatus,
    router: InputRouter,
    last_collision: Option<Collision>,
    tick_count: u64,
    rng: StdRng,
}

impl GameSession {
    /// Creates an idle session with a fresh board laid out, seeding the food
    /// sequence from OS entropy. `high_score` is the persisted best loaded
    /// at startup.
    #[must_use]
    pub fn new(grid: Grid, high_score: u32) -> Self {
        Self::from_rng(grid, high_score, StdRng::from_entropy())
    }

    /// Creates a session with a deterministic food sequence for tests and
    /// reproducible runs.
    #[must_use]
    pub fn with_seed(grid: Grid, high_score: u32, seed: u64) -> Self {
        Self::from_rng(grid, high_score, StdRng::seed_from_u64(seed))
    }

    fn from_rng(grid: Grid, high_score: u32, rng: StdRng) -> Self {
        let mut session = Self {
            grid,
            snake: Snake::new(grid.center(), INITIAL_SNAKE_LENGTH),
            food: None,
            score: 0,
            high_score,
            status: SessionStatus::Idle,
            router: InputRouter::new(Direction::Right),
            last_collision: None,
            tick_count: 0,
            rng,
        };
        session.init_board();
        session
    }

    /// Lays out a fresh board: centered snake, zero score, new food.
    fn init_board(&mut self) {
        self.snake = Snake::new(self.grid.center(), INITIAL_SNAKE_LENGTH);
        self.router.reset(self.snake.heading());
        self.food = food::spawn(&mut self.rng, self.grid, &self.snake);
        self.score = 0;
        self.tick_count = 0;
        self.last_collision = None;
    }

    /// Begins a run. Valid from `Idle` and the terminal states; a no-op
    /// while a run is in progress.
    pub fn start(&mut self) {
        if !self.status.is_startable() {
            return;
        }

        self.init_board();
        self.status = SessionStatus::Running;
        info!(
            "session started on {}x{} grid, high score {}",
            self.grid.width, self.grid.height, self.high_score
        );
    }

    /// Suspends or resumes the run. A no-op outside `Running`/`Paused`.
    pub fn toggle_pause(&mut self) {
        self.status = match self.status {
            SessionStatus::Running => SessionStatus::Paused,
            SessionStatus::Paused => SessionStatus::Running,
            other => other,
        };
    }

    /// Abandons the current run and returns to `Idle` with a fresh board
    /// already laid out, so the next draw shows a clean start position.
    pub fn reset(&mut self) {
        self.status = SessionStatus::Idle;
        self.init_board();
        info!("session reset");
    }

    /// Routes a direction request. Reversals of the active heading are
    /// dropped; otherwise the request becomes the pending heading for the
    /// next tick, overwriting any earlier request this tick.
    pub fn steer(&mut self, requested: Direction) {
        if self.status == SessionStatus::Running {
            self.router.request(self.snake.heading(), requested);
        }
    }

    /// Advances the simulation by one step.
    ///
    /// Latches the pending heading, moves the snake, checks collisions, then
    /// resolves food. A no-op outside `Running`.
    pub fn tick(&mut self) {
        if self.status != SessionStatus::Running {
            return;
        }

        self.tick_count += 1;
        let heading = self.router.pending();

        // Growth is folded into the advance, so length rises in the same
        // tick the food is eaten. A food cell is never on the body, so an
        // eating step cannot also be a collision step.
        let eats = self.food == Some(self.snake.next_head(heading));
        if eats {
            self.snake.grow();
        }

        let head = self.snake.advance(heading);

        if let Some(hit) = collision::check(head, self.grid, &self.snake) {
            self.last_collision = Some(hit);
            self.status = SessionStatus::GameOver;
            info!(
                "game over after {} ticks: {:?}, score {}",
                self.tick_count, hit, self.score
            );
            return;
        }

        if eats {
            self.score += FOOD_POINTS;
            self.high_score = self.high_score.max(self.score);

            match food::spawn(&mut self.rng, self.grid, &self.snake) {
                Some(cell) => self.food = Some(cell),
                None => {
                    // Nowhere left to put food: the snake owns the board.
                    self.food = None;
                    self.status = SessionStatus::Won;
                    info!("board cleared, score {}", self.score);
                }
            }
        }
    }

    #[must_use]
    pub fn grid(&self) -> Grid {
        self.grid
    }

    #[must_use]
    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    #[must_use]
    pub fn food(&self) -> Option<Cell> {
        self.food
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    #[must_use]
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// Returns what ended the last run, if it ended in a collision.
    #[must_use]
    pub fn last_collision(&self) -> Option<Collision> {
        self.last_collision
    }

    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Replaces the snake mid-session. Deterministic-scenario hook used by
    /// tests and replays; regular play never calls this.
    pub fn set_snake(&mut self, snake: Snake) {
        self.router.reset(snake.heading());
        self.snake = snake;
    }

    /// Pins the food cell. Deterministic-scenario hook, as `set_snake`.
    pub fn set_food(&mut self, cell: Cell) {
        self.food = Some(cell);
    }
}
