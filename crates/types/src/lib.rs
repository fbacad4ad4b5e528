//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, persistence).
//!
//! # Well Dimensions
//!
//! The default well is a 5x5 footprint, 10 layers tall:
//!
//! - **Width**: 5 columns along the x axis (indexed 0-4)
//! - **Depth**: 5 columns along the y axis (indexed 0-4)
//! - **Height**: 10 layers along the z axis (indexed 0-9, 0 is the floor)
//! - **Spawn anchor**: (width/3, depth/3, height) — one above the visible well,
//!   so a fresh piece falls into frame
//!
//! # Timing
//!
//! The simulation advances in fixed ticks; gravity moves the active block down
//! one layer every `GRAVITY_INTERVAL_TICKS` ticks. The host loop decides how
//! much wall-clock time one tick takes (`TICK_MS`).

/// Well width in cells (x axis)
pub const BOARD_WIDTH: usize = 5;

/// Well depth in cells (y axis)
pub const BOARD_DEPTH: usize = 5;

/// Well height in layers (z axis)
pub const BOARD_HEIGHT: usize = 10;

/// Number of ticks between automatic one-layer drops of the active block
pub const GRAVITY_INTERVAL_TICKS: u32 = 120;

/// Points awarded per cleared layer
pub const POINTS_PER_LEVEL: u32 = 10;

/// Wall-clock duration of one simulation tick in the terminal host (~60 FPS)
pub const TICK_MS: u64 = 16;

/// Element colors
///
/// A small closed palette; every element of a block carries the block's single
/// color, chosen at spawn time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Green,
    Blue,
    Yellow,
}

impl Color {
    /// All colors, in palette order. Used for uniform random selection.
    pub const ALL: [Color; 4] = [Color::Red, Color::Green, Color::Blue, Color::Yellow];

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Yellow => "yellow",
        }
    }
}

/// A single atomic colored unit
///
/// Both blocks and the board are made of elements. An element has no identity
/// beyond its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Element {
    color: Color,
}

impl Element {
    pub fn new(color: Color) -> Self {
        Self { color }
    }

    pub fn color(&self) -> Color {
        self.color
    }
}

/// A cell of a block or of the well
///
/// - `None`: empty cell
/// - `Some(Element)`: cell filled with a colored element
pub type Cell = Option<Element>;

/// Discrete game actions applied to the active block
///
/// The host latches at most one action per tick (last key wins); "no pending
/// action" is represented by the absent `Option`, and the tick's input step is
/// a single exhaustive match that does nothing on `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move one cell along -x
    MoveLeft,
    /// Move one cell along +x
    MoveRight,
    /// Move one cell along +y
    MoveUp,
    /// Move one cell along -y
    MoveDown,
    /// Drop to the lowest legal position and lock on this tick
    Drop,
    /// Rotate 90 degrees about the x axis
    RotateX,
    /// Rotate 90 degrees about the y axis
    RotateY,
    /// Rotate 90 degrees about the z axis
    RotateZ,
}

/// Fixed configuration of one game
///
/// The constants above are the defaults; hosts and tests may supply their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub width: usize,
    pub depth: usize,
    pub height: usize,
    /// Ticks between automatic gravity drops
    pub gravity_interval: u32,
    /// Points per cleared layer
    pub points_per_level: u32,
}

impl GameConfig {
    /// Anchor position for freshly spawned blocks.
    ///
    /// Intentionally at z = height: above the visible well, so every piece
    /// falls into frame. A blocked spawn is caught by the next tick's
    /// contact/overflow checks rather than failing immediately.
    pub fn spawn_anchor(&self) -> (i32, i32, i32) {
        (
            (self.width / 3) as i32,
            (self.depth / 3) as i32,
            self.height as i32,
        )
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            depth: BOARD_DEPTH,
            height: BOARD_HEIGHT,
            gravity_interval: GRAVITY_INTERVAL_TICKS,
            points_per_level: POINTS_PER_LEVEL,
        }
    }
}
