//! Game configuration
//!
//! A single immutable value handed to the session at construction, so
//! tests can run with custom grid sizes and timings. An optional JSON
//! file on disk overrides the defaults without a rebuild.

use std::io;
use std::path::{Path, PathBuf};
use std::{env, fs};

use serde::{Deserialize, Serialize};

/// All tunable game parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Grid width in cells
    pub cols: i32,
    /// Grid height in cells
    pub rows: i32,
    /// Starting tick interval (ms)
    pub base_tick_ms: u64,
    /// Interval floor, i.e. maximum speed (ms)
    pub min_tick_ms: u64,
    /// Interval decrease per level (ms)
    pub speedup_step_ms: u64,
    /// Score required per level
    pub level_up_score: u32,
    /// Obstacles spawned at start/restart
    pub initial_obstacles: usize,
    /// Obstacle-count cap
    pub max_obstacles: usize,
    /// Per-tick power-up spawn probability
    pub power_up_spawn_chance: f64,
    /// Lifetime of an unclaimed power-up (ms)
    pub power_up_duration_ms: u64,
    /// Interval reduction while speed-boosted (ms)
    pub speed_boost_ms: u64,
    /// Speed boost lifetime (ms)
    pub speed_boost_duration_ms: u64,
    /// Tail cells removed by a shrink power-up
    pub shrink_amount: usize,
    /// Probability that a spawned food is special
    pub special_food_chance: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            cols: 28,
            rows: 24,
            base_tick_ms: 100,
            min_tick_ms: 20,
            speedup_step_ms: 5,
            level_up_score: 5,
            initial_obstacles: 6,
            max_obstacles: 30,
            power_up_spawn_chance: 0.05,
            power_up_duration_ms: 5000,
            speed_boost_ms: 40,
            speed_boost_duration_ms: 8000,
            shrink_amount: 3,
            special_food_chance: 0.12,
        }
    }
}

impl GameConfig {
    /// Default override file under the user's home directory.
    pub fn default_path() -> PathBuf {
        home_dir().join(".advanced_snake.json")
    }

    /// Load a config from a JSON file.
    pub fn load(path: &Path) -> io::Result<Self> {
        let text = fs::read_to_string(path)?;
        serde_json::from_str(&text).map_err(io::Error::other)
    }

    /// Load a config, falling back to defaults on a missing or broken
    /// file. Never fails.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => {
                log::info!("loaded config from {}", path.display());
                config
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => Self::default(),
            Err(err) => {
                log::warn!("ignoring config {}: {err}", path.display());
                Self::default()
            }
        }
    }
}

/// The user's home directory, or the working directory when unset.
pub(crate) fn home_dir() -> PathBuf {
    env::var_os("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
}
