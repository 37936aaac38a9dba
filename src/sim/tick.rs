//! The per-tick state machine and the command surface.
//!
//! One tick runs end-to-end in a fixed order: effect expiry, movement,
//! wall/obstacle/self collision, consumption, progression, spawning.
//! The driver re-reads the returned interval after every call because
//! level-ups and power-ups change it.

use rand::Rng;

use super::board::{self, PowerUpKind};
use super::state::{GamePhase, GameState};
use crate::sim::Direction;

/// Discrete commands delivered by the input translator. No raw key
/// codes cross this boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Steer(Direction),
    TogglePause,
    ToggleWrap,
    Restart,
}

impl GameState {
    /// Apply an input command. Ill-timed or illegal commands are dropped
    /// silently; nothing here blocks or fails.
    pub fn apply(&mut self, cmd: Command) {
        match (self.phase, cmd) {
            (GamePhase::Running | GamePhase::Paused, Command::Steer(dir)) => {
                let heading = self.snake.heading();
                self.queue.push(dir, heading);
            }
            (GamePhase::Running, Command::TogglePause) => self.phase = GamePhase::Paused,
            (GamePhase::Paused, Command::TogglePause) => self.phase = GamePhase::Running,
            (GamePhase::Running | GamePhase::Paused, Command::ToggleWrap) => {
                self.snake.toggle_wrap();
            }
            (
                GamePhase::Running | GamePhase::Paused | GamePhase::GameOver,
                Command::Restart,
            ) => self.reset(),
            _ => {}
        }
    }

    /// Advance the simulation one step and return the interval the
    /// driver must wait before the next call. A no-op outside `Running`.
    pub fn tick(&mut self) -> u64 {
        if self.phase != GamePhase::Running {
            return self.tick_ms;
        }

        // Simulated time advances by the interval that elapsed before
        // this tick; due deadlines are drained here, never by callbacks.
        self.clock_ms += self.tick_ms;
        let expired = self.effects.drain_expired(self.clock_ms);
        if expired.power_up && self.power_up.take().is_some() {
            log::info!("power-up expired unclaimed");
        }
        if let Some(restore) = expired.restore_tick_ms {
            self.tick_ms = restore.min(self.config.base_tick_ms);
            log::info!("speed boost over, interval back to {}ms", self.tick_ms);
        }

        self.snake.advance(&mut self.queue);

        if self.snake.wrap() {
            self.snake.wrap_head(self.config.cols, self.config.rows);
        } else if self.snake.out_of_bounds(self.config.cols, self.config.rows) {
            return self.game_over();
        }

        let head = self.snake.head();
        if self.obstacles.contains(&head) {
            return self.game_over();
        }
        if self.snake.self_collision() {
            return self.game_over();
        }

        if head == self.food.pos {
            let (growth, points) = if self.food.special { (3, 5) } else { (1, 1) };
            self.snake.grow(growth);
            self.score += points;
            self.maybe_level_up();
            self.food =
                board::spawn_food(&mut self.rng, &self.config, &self.snake, &self.obstacles);
        }

        if let Some(power_up) = self.power_up {
            if head == power_up.pos {
                self.power_up = None;
                self.effects.cancel_power_up_despawn();
                self.apply_power_up(power_up.kind);
            }
        }

        self.maybe_spawn_power_up();

        self.tick_ms
    }

    fn game_over(&mut self) -> u64 {
        self.phase = GamePhase::GameOver;
        self.power_up = None;
        self.effects.clear();
        if self.score > self.high_score {
            self.high_score = self.score;
        }
        log::info!("game over: score {} (high {})", self.score, self.high_score);
        self.tick_ms
    }

    /// Level is a pure function of score; on an increase the session
    /// speeds up and the obstacle set is rebuilt one larger.
    fn maybe_level_up(&mut self) {
        let per_level = self.config.level_up_score.max(1);
        let new_level = 1 + self.score / per_level;
        if new_level <= self.level {
            return;
        }
        self.level = new_level;
        self.tick_ms = self
            .config
            .base_tick_ms
            .saturating_sub(u64::from(new_level - 1) * self.config.speedup_step_ms)
            .max(self.config.min_tick_ms);
        let count = (self.obstacles.len() + 1).min(self.config.max_obstacles);
        self.obstacles = board::spawn_obstacles(&mut self.rng, &self.config, &self.snake, count);
        log::info!(
            "level {}: interval {}ms, {} obstacles",
            self.level,
            self.tick_ms,
            count
        );
    }

    fn apply_power_up(&mut self, kind: PowerUpKind) {
        match kind {
            PowerUpKind::SpeedBoost => {
                self.effects.schedule_speed_restore(
                    self.clock_ms,
                    self.config.speed_boost_duration_ms,
                    self.tick_ms,
                );
                self.tick_ms = self
                    .tick_ms
                    .saturating_sub(self.config.speed_boost_ms)
                    .max(self.config.min_tick_ms);
                log::info!("speed boost: interval {}ms", self.tick_ms);
            }
            PowerUpKind::Shrink => self.snake.shrink(self.config.shrink_amount),
            PowerUpKind::ClearObstacles => {
                // The bonus is the count before the set is emptied.
                let bonus = self.obstacles.len() as u32;
                self.obstacles.clear();
                self.score += bonus;
                log::info!("obstacles cleared, +{bonus} score");
            }
        }
    }

    fn maybe_spawn_power_up(&mut self) {
        if self.power_up.is_some() {
            return;
        }
        if !self.rng.random_bool(self.config.power_up_spawn_chance) {
            return;
        }
        let spawned = board::spawn_power_up(
            &mut self.rng,
            &self.config,
            &self.snake,
            &self.obstacles,
            self.food.pos,
        );
        if let Some(power_up) = spawned {
            self.effects
                .schedule_power_up_despawn(self.clock_ms, self.config.power_up_duration_ms);
            self.power_up = Some(power_up);
        }
    }
}
