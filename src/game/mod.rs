//! Core game rules for snake
//!
//! Everything in this module is free of timers, terminal I/O, and
//! rendering, so the rules can be exercised headlessly in tests.

pub mod config;
pub mod direction;
pub mod engine;
pub mod speed;
pub mod state;

// Re-export commonly used types
pub use config::{GameConfig, SafeZone};
pub use direction::Direction;
pub use engine::{GameEngine, TickOutcome};
pub use speed::Speed;
pub use state::{Board, Collision, GameState, Point, Snake};
