//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation
//! logic for a falling-block game played in a three-dimensional well. It has
//! **zero dependencies** on UI, persistence, or I/O, making it:
//!
//! - **Deterministic**: the same seed produces identical games
//! - **Testable**: every rule is exercised without a terminal
//! - **Portable**: can run in any host (terminal, headless, benchmarks)
//!
//! # Module Structure
//!
//! - [`block`]: immutable cubical piece with translate/rotate transforms
//! - [`board`]: the width x depth x height well, collision and layer clearing
//! - [`factory`]: random piece generation from a fixed shape catalog
//! - [`game`]: tick state machine tying input, gravity, scoring together
//! - [`rng`]: seeded LCG random source owned by the factory
//!
//! # Game Rules
//!
//! - Pieces are cubes of side 1-3 whose occupied cells all share one color
//! - A piece moves one cell per input along x or y, rotates 90 degrees about
//!   any axis, or hard-drops; illegal transforms are discarded silently
//! - Gravity pulls the piece one layer down every fixed number of ticks
//! - When a piece rests on the floor or on committed elements it locks, and
//!   every full horizontal layer is removed for points — several at once if
//!   the piece completes several
//! - A piece locking with a cell above the well's ceiling ends the game
//!
//! # Example
//!
//! ```
//! use cubewell_core::GameLogic;
//! use cubewell_core::types::GameAction;
//!
//! let mut game = GameLogic::new(12345);
//!
//! // Latch one action, then advance one fixed time-step.
//! game.queue_input(GameAction::MoveLeft);
//! game.tick();
//!
//! assert!(!game.is_over());
//! ```

pub mod block;
pub mod board;
pub mod factory;
pub mod game;
pub mod rng;

pub use cubewell_types as types;

// Re-export commonly used types for convenience
pub use block::Block;
pub use board::Board;
pub use factory::PieceFactory;
pub use game::GameLogic;
pub use rng::SimpleRng;
