//! Cubewell (workspace facade crate).
//!
//! This package keeps a stable `cubewell::{core,input,term,types}` public API
//! while the implementation lives in dedicated crates under `crates/`. The
//! high-score persistence collaborator lives here, next to the binary that
//! uses it, because the simulation core performs no I/O.

pub mod highscore;

pub use cubewell_core as core;
pub use cubewell_input as input;
pub use cubewell_term as term;
pub use cubewell_types as types;
