//! Arcade snake on a full-viewport terminal surface.
//!
//! This library provides:
//! - Core game rules, free of any I/O (game module)
//! - The tick scheduler that drives the loop (clock module)
//! - TUI rendering (render module)
//! - Keyboard mapping (input module)
//! - Session statistics shown in the header (metrics module)

pub mod app;
pub mod clock;
pub mod game;
pub mod input;
pub mod metrics;
pub mod render;
