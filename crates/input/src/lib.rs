//! Terminal input module (host-facing).
//!
//! Maps `crossterm` key events into [`cubewell_types::GameAction`] values for
//! the host to latch. The contract with the core is one action per tick,
//! last key wins; this module is stateless and leaves the latching to
//! `GameLogic::queue_input`.

pub mod map;

pub use cubewell_types as types;

pub use map::{handle_key_event, should_quit, should_restart};
