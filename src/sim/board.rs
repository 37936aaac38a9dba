//! Board entities and random placement.
//!
//! All placement is rejection sampling on the session's seeded RNG:
//! draw a uniform cell, retry until it passes the exclusion predicates
//! for the entity being placed.

use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::grid::Cell;
use super::snake::Snake;
use crate::config::GameConfig;

/// Retry budget for power-up placement. On a crowded board the spawn is
/// abandoned for this tick instead of sampling forever.
const PLACEMENT_ATTEMPTS: u32 = 50;

/// The single active food item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Food {
    pub pos: Cell,
    /// Special food grants extra growth and score.
    pub special: bool,
}

/// Power-up variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerUpKind {
    SpeedBoost,
    Shrink,
    ClearObstacles,
}

impl PowerUpKind {
    fn random(rng: &mut Pcg32) -> Self {
        match rng.random_range(0..3) {
            0 => PowerUpKind::SpeedBoost,
            1 => PowerUpKind::Shrink,
            _ => PowerUpKind::ClearObstacles,
        }
    }
}

/// At most one power-up is on the board at a time. Its expiry deadline
/// lives in the effect scheduler, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PowerUp {
    pub pos: Cell,
    pub kind: PowerUpKind,
}

fn random_cell(rng: &mut Pcg32, config: &GameConfig) -> Cell {
    Cell::new(
        rng.random_range(0..config.cols),
        rng.random_range(0..config.rows),
    )
}

/// Sample a food cell off the snake and the obstacle set.
pub fn spawn_food(
    rng: &mut Pcg32,
    config: &GameConfig,
    snake: &Snake,
    obstacles: &[Cell],
) -> Food {
    let pos = loop {
        let c = random_cell(rng, config);
        if !snake.occupies(c) && !obstacles.contains(&c) {
            break c;
        }
    };
    Food {
        pos,
        special: rng.random_bool(config.special_food_chance),
    }
}

/// Rebuild the obstacle set from scratch with `n` cells, avoiding the
/// snake and duplicates within the new set. The previous set does not
/// constrain placement because it is fully discarded.
pub fn spawn_obstacles(
    rng: &mut Pcg32,
    config: &GameConfig,
    snake: &Snake,
    n: usize,
) -> Vec<Cell> {
    let mut set = Vec::with_capacity(n);
    while set.len() < n {
        let c = random_cell(rng, config);
        if !snake.occupies(c) && !set.contains(&c) {
            set.push(c);
        }
    }
    set
}

/// Try to place a power-up off the snake, the obstacles and the food.
/// Returns `None` when the retry budget runs out; the caller simply
/// skips the spawn for this tick.
pub fn spawn_power_up(
    rng: &mut Pcg32,
    config: &GameConfig,
    snake: &Snake,
    obstacles: &[Cell],
    food: Cell,
) -> Option<PowerUp> {
    for _ in 0..PLACEMENT_ATTEMPTS {
        let c = random_cell(rng, config);
        if snake.occupies(c) || obstacles.contains(&c) || c == food {
            continue;
        }
        return Some(PowerUp {
            pos: c,
            kind: PowerUpKind::random(rng),
        });
    }
    log::debug!("power-up placement budget exhausted, skipping spawn");
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn tiny_config(cols: i32, rows: i32) -> GameConfig {
        GameConfig {
            cols,
            rows,
            special_food_chance: 0.0,
            ..GameConfig::default()
        }
    }

    #[test]
    fn food_avoids_snake_and_obstacles() {
        // 4x1 board: snake covers three cells, one obstacle-free cell left.
        let config = tiny_config(4, 1);
        let mut rng = Pcg32::seed_from_u64(7);
        let snake = Snake::new(Cell::new(2, 0));
        let food = spawn_food(&mut rng, &config, &snake, &[]);
        assert_eq!(food.pos, Cell::new(3, 0));
    }

    #[test]
    fn obstacles_avoid_snake_and_each_other() {
        let config = tiny_config(6, 6);
        let mut rng = Pcg32::seed_from_u64(42);
        let snake = Snake::new(Cell::new(3, 3));

        let set = spawn_obstacles(&mut rng, &config, &snake, 10);
        assert_eq!(set.len(), 10);
        for (i, &c) in set.iter().enumerate() {
            assert!(!snake.occupies(c));
            assert!(!set[i + 1..].contains(&c));
        }
    }

    #[test]
    fn power_up_gives_up_on_a_full_board() {
        // 3x1 board fully covered by the snake: no legal cell exists.
        let config = tiny_config(3, 1);
        let mut rng = Pcg32::seed_from_u64(1);
        let snake = Snake::new(Cell::new(2, 0));
        let spawned = spawn_power_up(&mut rng, &config, &snake, &[], Cell::new(0, 0));
        assert!(spawned.is_none());
    }

    #[test]
    fn power_up_excludes_the_food_cell() {
        // 4x1 board: snake covers three cells, food covers the last one.
        let config = tiny_config(4, 1);
        let mut rng = Pcg32::seed_from_u64(5);
        let snake = Snake::new(Cell::new(2, 0));
        let spawned = spawn_power_up(&mut rng, &config, &snake, &[], Cell::new(3, 0));
        assert!(spawned.is_none());
    }
}
