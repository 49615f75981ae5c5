use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::{
    GridSize, INITIAL_TICK_INTERVAL_MS, MIN_TICK_INTERVAL_MS, TICK_INTERVAL_DECREMENT_MS,
};
use crate::food::Food;
use crate::input::{direction_change_is_valid, Direction, GameInput};
use crate::snake::{Position, Snake};

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Running,
    Paused,
    GameOver,
    Exited,
}

/// Complete mutable game state for one session.
///
/// One instance exclusively owns the snake, food, direction, score, interval,
/// and RNG for the lifetime of a session; [`GameState::restart`] recreates
/// them wholesale.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub food: Food,
    pub direction: Option<Direction>,
    pub score: u32,
    pub tick_interval_ms: u64,
    pub status: GameStatus,
    bounds: GridSize,
    rng: StdRng,
}

impl GameState {
    #[must_use]
    pub fn new(bounds: GridSize) -> Self {
        Self::new_with_seed(bounds, rand::random())
    }

    /// Creates a deterministic state for tests and reproducible sessions.
    #[must_use]
    pub fn new_with_seed(bounds: GridSize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let (x, y) = bounds.start_cell();
        let snake = Snake::new(Position { x, y });
        let food = Food::spawn(&mut rng, bounds);

        Self {
            snake,
            food,
            direction: None,
            score: 0,
            tick_interval_ms: INITIAL_TICK_INTERVAL_MS,
            status: GameStatus::Running,
            bounds,
            rng,
        }
    }

    /// Advances the simulation by one gameplay tick.
    ///
    /// A no-op while paused, after game over, and after exit. Before the
    /// first direction input the snake does not move and the tick leaves all
    /// state unchanged.
    pub fn tick(&mut self) {
        if self.status != GameStatus::Running {
            return;
        }
        let Some(direction) = self.direction else {
            return;
        };

        let new_head = self.snake.head().offset(direction);

        // Eating applies before the collision check: a tick can score and
        // still end the game when the food sits on the body.
        let eats = new_head == self.food.position;
        if eats {
            self.score += 1;
            self.tick_interval_ms = self
                .tick_interval_ms
                .saturating_sub(TICK_INTERVAL_DECREMENT_MS)
                .max(MIN_TICK_INTERVAL_MS);
            self.food = Food::spawn(&mut self.rng, self.bounds);
        }

        // Walls, then the body as it stands before the tail drop: moving into
        // the cell the tail is vacating this tick still counts as a loss.
        if !new_head.is_within_bounds(self.bounds) || self.snake.occupies(new_head) {
            self.status = GameStatus::GameOver;
            return;
        }

        if !eats {
            let _ = self.snake.pop_tail();
        }
        self.snake.push_head(new_head);
    }

    /// Requests a direction change for the next tick.
    ///
    /// Ignored unless running, and ignored when the request reverses the
    /// current direction.
    pub fn handle_direction_input(&mut self, requested: Direction) {
        if self.status != GameStatus::Running {
            return;
        }

        if let Some(current) = self.direction {
            if !direction_change_is_valid(current, requested) {
                return;
            }
        }

        self.direction = Some(requested);
    }

    /// Resets the session: single start cell, unset direction, score 0,
    /// initial interval, fresh food. Allowed from any state.
    pub fn restart(&mut self) {
        let (x, y) = self.bounds.start_cell();
        self.snake = Snake::new(Position { x, y });
        self.food = Food::spawn(&mut self.rng, self.bounds);
        self.direction = None;
        self.score = 0;
        self.tick_interval_ms = INITIAL_TICK_INTERVAL_MS;
        self.status = GameStatus::Running;
    }

    /// Flips Running ⇄ Paused; no effect after game over or exit.
    pub fn toggle_pause(&mut self) {
        self.status = match self.status {
            GameStatus::Running => GameStatus::Paused,
            GameStatus::Paused => GameStatus::Running,
            other => other,
        };
    }

    /// Ends the session; only restart leaves this state.
    pub fn exit(&mut self) {
        self.status = GameStatus::Exited;
    }

    /// Applies one external input event.
    pub fn apply_input(&mut self, input: GameInput) {
        match input {
            GameInput::Direction(direction) => self.handle_direction_input(direction),
            GameInput::Pause => self.toggle_pause(),
            GameInput::Restart => self.restart(),
            GameInput::Exit => self.exit(),
            GameInput::Quit => {}
        }
    }

    /// Current scheduling period for the ticker.
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.bounds
    }

    /// Adopts new grid bounds after a viewport resize.
    ///
    /// Cell coordinates are unchanged; shrinking the grid can therefore put
    /// the snake outside the walls, which the next tick treats as a wall
    /// collision; the walls simply close in.
    pub fn set_bounds(&mut self, bounds: GridSize) {
        self.bounds = bounds;
    }
}
