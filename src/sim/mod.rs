//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure and
//! deterministic:
//! - Exactly one tick at a time, driven externally
//! - Seeded RNG only
//! - Timed effects as deadlines against the simulated clock, never
//!   background timers
//! - No rendering or I/O dependencies

pub mod board;
pub mod effects;
pub mod grid;
pub mod snake;
pub mod state;
pub mod tick;

pub use board::{Food, PowerUp, PowerUpKind};
pub use grid::{Cell, Direction};
pub use snake::{DirectionQueue, Snake};
pub use state::{GamePhase, GameState};
pub use tick::Command;
