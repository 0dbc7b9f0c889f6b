use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::clock::GameClock;
use crate::collision::{is_self_collision, is_wall_collision};
use crate::config::{GridSize, INITIAL_SNAKE_LEN};
use crate::direction::{Direction, DirectionQueue};
use crate::food::spawn_food;
use crate::score::{BestScoreStore, ScoreError};
use crate::snake::{Cell, Snake};

/// Starting direction after every reset.
pub const INITIAL_DIRECTION: Direction = Direction::Right;

/// Simulation phase; steps execute only while `Running`.
///
/// `Paused` and `GameOver` are stable, and `GameOver` is terminal until an
/// explicit restart.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Phase {
    Ready,
    Running,
    Paused,
    GameOver,
}

/// Outcome of a single simulation step.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum StepOutcome {
    Moved,
    Ate,
    Collided,
}

/// Complete mutable simulation state for one session.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub food: Cell,
    pub score: u32,
    pub phase: Phase,
    pub tick_count: u64,
    bounds: GridSize,
}

impl GameState {
    /// Creates the post-reset state: a three-cell snake facing right in the
    /// middle of the board and freshly placed food.
    #[must_use]
    pub fn new<R: Rng + ?Sized>(bounds: GridSize, rng: &mut R) -> Self {
        let head = Cell {
            x: i32::from(bounds.cols / 2),
            y: i32::from(bounds.rows / 2),
        };
        let snake = Snake::spawn(head, INITIAL_DIRECTION, INITIAL_SNAKE_LEN);
        let food = spawn_food(rng, bounds, &snake);

        Self {
            snake,
            food,
            score: 0,
            phase: Phase::Ready,
            tick_count: 0,
            bounds,
        }
    }

    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.bounds
    }

    /// Executes one simulation step in `direction`.
    ///
    /// Collision checks run before the body changes, against the full
    /// pre-move body, so the body is untouched on a collided step. Eating
    /// keeps the tail in place for this step and the body grows by exactly
    /// one cell; otherwise the tail moves up and length is unchanged.
    pub fn step<R: Rng + ?Sized>(&mut self, direction: Direction, rng: &mut R) -> StepOutcome {
        self.tick_count += 1;

        let new_head = self.snake.head().step(direction);
        if is_wall_collision(new_head, self.bounds) || is_self_collision(new_head, &self.snake) {
            self.phase = Phase::GameOver;
            return StepOutcome::Collided;
        }

        self.snake.push_head(new_head);

        if new_head == self.food {
            self.score += 1;
            self.food = spawn_food(rng, self.bounds, &self.snake);
            StepOutcome::Ate
        } else {
            self.snake.drop_tail();
            StepOutcome::Moved
        }
    }
}

/// Owns the simulation and orchestrates phase transitions around it.
///
/// All mutation happens inside [`frame`](Self::frame) and the explicit
/// transition methods; collaborators only observe state through the
/// read-only accessors. The best-score collaborator is consulted once at
/// construction and from the scoring step of a tick.
#[derive(Debug)]
pub struct Game<S> {
    state: GameState,
    queue: DirectionQueue,
    clock: GameClock,
    rng: StdRng,
    step_interval: Duration,
    best: u32,
    store: S,
    store_error: Option<ScoreError>,
}

impl<S: BestScoreStore> Game<S> {
    /// Creates a game with a seeded RNG for reproducible food placement.
    #[must_use]
    pub fn new_with_seed(bounds: GridSize, step_interval: Duration, store: S, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let state = GameState::new(bounds, &mut rng);
        let (best, store_error) = match store.best() {
            Ok(best) => (best, None),
            Err(error) => (0, Some(error)),
        };

        Self {
            state,
            queue: DirectionQueue::new(INITIAL_DIRECTION),
            clock: GameClock::new(),
            rng,
            step_interval,
            best,
            store,
            store_error,
        }
    }

    /// Feeds one frame timestamp and runs every simulation step it covers.
    ///
    /// Does nothing unless the game is running, so paused wall time never
    /// reaches the clock. When a step ends the game, the remaining steps
    /// drained for this frame are discarded, not executed.
    pub fn frame(&mut self, now: Instant) {
        if self.state.phase != Phase::Running {
            return;
        }

        self.clock.advance(now);
        let steps = self.clock.drain_steps(self.step_interval);
        for _ in 0..steps {
            self.tick();
            if self.state.phase != Phase::Running {
                break;
            }
        }
    }

    fn tick(&mut self) {
        let direction = self.queue.consume();
        if self.state.step(direction, &mut self.rng) == StepOutcome::Ate
            && self.state.score > self.best
        {
            self.best = self.state.score;
            if let Err(error) = self.store.set_best(self.best) {
                self.store_error = Some(error);
            }
        }
    }

    /// Ready → Running.
    pub fn start(&mut self) {
        if self.state.phase == Phase::Ready {
            self.state.phase = Phase::Running;
            self.clock.reset();
        }
    }

    /// Running → Paused. Steps stop immediately.
    pub fn pause(&mut self) {
        if self.state.phase == Phase::Running {
            self.state.phase = Phase::Paused;
        }
    }

    /// Paused → Running. The clock baseline restarts so the paused interval
    /// is never replayed as catch-up steps.
    pub fn resume(&mut self) {
        if self.state.phase == Phase::Paused {
            self.state.phase = Phase::Running;
            self.clock.reset();
        }
    }

    /// Paused or GameOver → Ready with a fully reinitialized session.
    ///
    /// The best score, its store, and the RNG stream survive the reset.
    pub fn restart(&mut self) {
        if matches!(self.state.phase, Phase::Paused | Phase::GameOver) {
            self.state = GameState::new(self.state.bounds, &mut self.rng);
            self.queue = DirectionQueue::new(INITIAL_DIRECTION);
            self.clock.reset();
        }
    }

    /// Buffers a direction intent for the next step.
    pub fn set_direction(&mut self, direction: Direction) {
        self.queue.set_direction(direction);
    }

    /// Replaces the step interval; takes effect from the next drained step.
    pub fn set_step_interval(&mut self, step_interval: Duration) {
        self.step_interval = step_interval;
    }

    /// Read-only snapshot of the simulation state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direction applied on the most recent step.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.queue.committed()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    #[must_use]
    pub fn best(&self) -> u32 {
        self.best
    }

    /// Takes the most recent persistence failure, if any.
    pub fn take_store_error(&mut self) -> Option<ScoreError> {
        self.store_error.take()
    }
}
