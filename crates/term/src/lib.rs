//! Terminal rendering module.
//!
//! A small, game-oriented rendering layer for terminal play of the 3D well.
//! The well is drawn as a row of horizontal layer slices (floor leftmost), so
//! the whole volume is visible at once.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep the view pure: [`GameView`] formats state into text rows that unit
//!   tests assert on directly
//! - Confine terminal I/O (raw mode, alternate screen) to [`TerminalRenderer`]

pub mod game_view;
pub mod renderer;

pub use cubewell_core as core;
pub use cubewell_types as types;

pub use game_view::GameView;
pub use renderer::TerminalRenderer;
