//! The game session: exclusive owner of all simulation state.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::board::{self, Food, PowerUp};
use super::effects::EffectTimers;
use super::grid::Cell;
use super::snake::{DirectionQueue, Snake};
use crate::config::GameConfig;

/// Session lifecycle phase.
///
/// `NotStarted -> Running <-> Paused -> GameOver`; `GameOver` is terminal
/// until an explicit restart resets to `Running`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    NotStarted,
    Running,
    Paused,
    GameOver,
}

/// Complete game state.
///
/// The session exclusively owns the snake, direction queue, board
/// entities and effect deadlines; renderers and persistence read it
/// through a shared borrow after each tick and never mutate it.
#[derive(Debug, Clone)]
pub struct GameState {
    pub(crate) config: GameConfig,
    pub(crate) rng: Pcg32,
    pub(crate) snake: Snake,
    pub(crate) queue: DirectionQueue,
    pub(crate) food: Food,
    pub(crate) obstacles: Vec<Cell>,
    pub(crate) power_up: Option<PowerUp>,
    pub(crate) effects: EffectTimers,
    pub(crate) phase: GamePhase,
    pub(crate) score: u32,
    pub(crate) level: u32,
    pub(crate) tick_ms: u64,
    /// Simulated clock: the sum of the intervals of all processed ticks.
    /// Effect deadlines are instants on this clock.
    pub(crate) clock_ms: u64,
    pub(crate) high_score: u32,
}

impl GameState {
    /// Build a fresh session. `high_score` is whatever the store loaded;
    /// the session only ever raises it.
    pub fn new(config: GameConfig, seed: u64, high_score: u32) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let snake = Snake::new(Cell::new(config.cols / 2, config.rows / 2));
        let obstacles =
            board::spawn_obstacles(&mut rng, &config, &snake, config.initial_obstacles);
        let food = board::spawn_food(&mut rng, &config, &snake, &obstacles);
        let tick_ms = config.base_tick_ms;
        Self {
            config,
            rng,
            snake,
            queue: DirectionQueue::default(),
            food,
            obstacles,
            power_up: None,
            effects: EffectTimers::default(),
            phase: GamePhase::NotStarted,
            score: 0,
            level: 1,
            tick_ms,
            clock_ms: 0,
            high_score,
        }
    }

    /// Begin ticking. No-op once the session has left `NotStarted`.
    pub fn start(&mut self) {
        if self.phase == GamePhase::NotStarted {
            self.phase = GamePhase::Running;
        }
    }

    /// Rebuild the board from scratch, equivalent to fresh construction:
    /// new snake, new food, initial obstacles, score 0, level 1, base
    /// interval, running. The RNG stream and clock keep advancing.
    pub(crate) fn reset(&mut self) {
        self.snake = Snake::new(Cell::new(self.config.cols / 2, self.config.rows / 2));
        self.queue.clear();
        self.obstacles = board::spawn_obstacles(
            &mut self.rng,
            &self.config,
            &self.snake,
            self.config.initial_obstacles,
        );
        self.food = board::spawn_food(&mut self.rng, &self.config, &self.snake, &self.obstacles);
        self.power_up = None;
        self.effects.clear();
        self.score = 0;
        self.level = 1;
        self.tick_ms = self.config.base_tick_ms;
        self.phase = GamePhase::Running;
    }

    // Read-only snapshot surface.

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// The interval the driver must wait before the next tick.
    pub fn tick_ms(&self) -> u64 {
        self.tick_ms
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Food {
        self.food
    }

    pub fn obstacles(&self) -> &[Cell] {
        &self.obstacles
    }

    pub fn power_up(&self) -> Option<PowerUp> {
        self.power_up
    }
}
