//! Game module - the tick-driven orchestrator
//!
//! Owns the board and the active block, applies the latched input, drives
//! gravity on a fixed cadence, keeps score and detects game over. The whole
//! simulation is synchronous: one `tick()` call advances exactly one fixed
//! time-step and nothing in here blocks, suspends, or spawns work.

use crate::block::Block;
use crate::board::Board;
use crate::factory::PieceFactory;
use crate::types::{GameAction, GameConfig};

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameLogic {
    config: GameConfig,
    board: Board,
    block: Block,
    factory: PieceFactory,
    score: u32,
    over: bool,
    /// Ticks until the next automatic gravity step; 0 means "this tick"
    gravity_countdown: u32,
    /// The single action latched for the next tick (last key wins)
    pending: Option<GameAction>,
}

impl GameLogic {
    /// Create a game with default configuration and the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self::with_config(GameConfig::default(), seed)
    }

    /// Create a game with an explicit configuration
    pub fn with_config(config: GameConfig, seed: u32) -> Self {
        let board = Board::from_config(&config);
        let mut factory = PieceFactory::new(seed);
        let (x, y, z) = config.spawn_anchor();
        let block = factory.spawn_at(x, y, z);

        Self {
            config,
            board,
            block,
            factory,
            score: 0,
            over: false,
            gravity_countdown: 0,
            pending: None,
        }
    }

    /// Reset board, score and active block for a fresh game.
    ///
    /// The factory keeps its random state, so restarting does not replay the
    /// previous piece sequence.
    pub fn new_game(&mut self) {
        self.board = Board::from_config(&self.config);
        self.score = 0;
        self.over = false;
        self.gravity_countdown = 0;
        self.pending = None;
        self.block = self.spawn_block();
    }

    /// Latch an action for the next tick.
    ///
    /// Only one action is honored per tick; if several arrive between ticks,
    /// the last one wins. The latch is consumed (reset to none) by `tick()`.
    pub fn queue_input(&mut self, action: GameAction) {
        self.pending = Some(action);
    }

    /// Advance the simulation by one fixed time-step
    pub fn tick(&mut self) {
        if self.over {
            return;
        }

        self.apply_pending_input();

        if self.gravity_countdown == 0 {
            if self.board.is_in_contact(&self.block) {
                if self.board.add_block(&self.block) {
                    // Overflow: the well is full. Score is untouched this tick.
                    self.over = true;
                    return;
                }
                let reduced = self.board.reduce_levels() as u32;
                self.score += self.config.points_per_level * reduced;
                self.block = self.spawn_block();
            } else {
                // No contact proves the layer below every cell is clear, so
                // the drop always succeeds.
                self.block = self.block.translated(0, 0, -1);
            }
            self.gravity_countdown = self.config.gravity_interval;
        } else {
            self.gravity_countdown -= 1;
        }
    }

    /// Consume the latched action and apply it to the active block.
    ///
    /// Moves and rotations are all-or-nothing: either the whole transformed
    /// block is legal, or the original block is kept. A wall bump is a no-op,
    /// not an error.
    fn apply_pending_input(&mut self) {
        match self.pending.take() {
            Some(GameAction::MoveLeft) => self.try_place(self.block.translated(-1, 0, 0)),
            Some(GameAction::MoveRight) => self.try_place(self.block.translated(1, 0, 0)),
            Some(GameAction::MoveUp) => self.try_place(self.block.translated(0, 1, 0)),
            Some(GameAction::MoveDown) => self.try_place(self.block.translated(0, -1, 0)),
            Some(GameAction::RotateX) => self.try_place(self.block.rotated_x()),
            Some(GameAction::RotateY) => self.try_place(self.block.rotated_y()),
            Some(GameAction::RotateZ) => self.try_place(self.block.rotated_z()),
            Some(GameAction::Drop) => self.hard_drop(),
            None => {}
        }
    }

    /// Replace the active block with `candidate` if it is legal; otherwise
    /// discard the candidate silently
    fn try_place(&mut self, candidate: Block) {
        if self.board.can_place(&candidate) {
            self.block = candidate;
        }
    }

    /// Slide the active block down to the last legal position and force the
    /// contact check to fire on this same tick
    fn hard_drop(&mut self) {
        loop {
            let dropped = self.block.translated(0, 0, -1);
            if self.board.can_place(&dropped) {
                self.block = dropped;
            } else {
                break;
            }
        }
        self.gravity_countdown = 0;
    }

    fn spawn_block(&mut self) -> Block {
        let (x, y, z) = self.config.spawn_anchor();
        self.factory.spawn_at(x, y, z)
    }

    /// Current score; monotonically non-decreasing
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Whether the game has reached the terminal Over state
    pub fn is_over(&self) -> bool {
        self.over
    }

    /// Read-only view of the well, for the rendering collaborator
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Read-only view of the active falling block
    pub fn block(&self) -> &Block {
        &self.block
    }

    /// The configuration this game was created with
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Replace the active block (tests set up exact scenarios with this)
    #[cfg(test)]
    pub(crate) fn set_block(&mut self, block: Block) {
        self.block = block;
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}
