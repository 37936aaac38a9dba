//! Advanced Snake - an arcade grid game
//!
//! Core modules:
//! - `sim`: deterministic simulation (snake geometry, board entities, the
//!   per-tick state machine)
//! - `config`: immutable game configuration passed into the session
//! - `highscores`: file-backed high-score store
//!
//! The simulation is pure and deterministic: seeded RNG, timed effects as
//! deadlines against a simulated clock, no I/O. The terminal frontend in
//! `main.rs` owns all input, timing and drawing.

pub mod config;
pub mod highscores;
pub mod sim;

pub use config::GameConfig;
pub use highscores::HighScoreStore;
pub use sim::{Cell, Command, Direction, GamePhase, GameState};
