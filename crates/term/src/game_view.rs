//! GameView: maps core game state into rows of terminal text.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! The well is rendered as one bordered slice per layer, floor (z = 0)
//! leftmost. Inside a slice, columns run along x and rows along y with +y at
//! the top, so the "up"/"down" movement keys match what the player sees.
//! Committed elements draw as uppercase color letters, the falling block as
//! lowercase ones.

use crate::core::{Block, Board, GameLogic};
use crate::types::{Color, Element};

/// Glyph for an empty cell
const EMPTY: char = '.';

/// A lightweight text renderer for the 3D well.
#[derive(Debug, Default)]
pub struct GameView;

impl GameView {
    pub fn new() -> Self {
        Self
    }

    /// Render the current game state into text rows.
    ///
    /// `best` is the stored high score, if the host has one to show.
    pub fn render(&self, game: &GameLogic, best: Option<u32>) -> Vec<String> {
        self.render_parts(game.board(), game.block(), game.score(), game.is_over(), best)
    }

    /// Render from the individual pieces of state the core exposes read-only.
    pub fn render_parts(
        &self,
        board: &Board,
        block: &Block,
        score: u32,
        over: bool,
        best: Option<u32>,
    ) -> Vec<String> {
        let width = board.width();
        let depth = board.depth();
        let height = board.height();

        let mut rows = Vec::with_capacity(depth + 8);

        match best {
            Some(best) => rows.push(format!("cubewell    score {score:>6}    best {best:>6}")),
            None => rows.push(format!("cubewell    score {score:>6}")),
        }
        rows.push(String::new());

        // Slice labels: z0 is the floor of the well.
        let mut labels = String::new();
        for z in 0..height {
            labels.push_str(&format!("{:<label_w$}", format!("z{z}"), label_w = width + 3));
        }
        rows.push(labels.trim_end().to_string());

        let border = {
            let mut row = String::new();
            for _ in 0..height {
                row.push('+');
                row.push_str(&"-".repeat(width));
                row.push('+');
                row.push(' ');
            }
            row.trim_end().to_string()
        };

        rows.push(border.clone());
        for row_y in (0..depth).rev() {
            let mut row = String::new();
            for z in 0..height {
                row.push('|');
                for x in 0..width {
                    row.push(cell_glyph(board, block, x as i32, row_y as i32, z as i32));
                }
                row.push('|');
                row.push(' ');
            }
            rows.push(row.trim_end().to_string());
        }
        rows.push(border);

        rows.push(String::new());
        rows.push("arrows/wasd move   x/y/z rotate   space drop   r new game   q quit".to_string());

        if over {
            rows.push("GAME OVER - press r for a new game".to_string());
        }

        rows
    }
}

/// Glyph for the well cell at (x, y, z), active block overlaid on top
fn cell_glyph(board: &Board, block: &Block, x: i32, y: i32, z: i32) -> char {
    if let Some(element) = active_element_at(block, x, y, z) {
        return color_char(element.color()).to_ascii_lowercase();
    }
    match board.element_at(x, y, z) {
        Some(element) => color_char(element.color()),
        None => EMPTY,
    }
}

/// Element of the falling block covering world (x, y, z), if any
fn active_element_at(block: &Block, x: i32, y: i32, z: i32) -> Option<Element> {
    let i = x - block.x();
    let j = y - block.y();
    let k = z - block.z();
    let size = block.size() as i32;
    if i < 0 || i >= size || j < 0 || j >= size || k < 0 || k >= size {
        return None;
    }
    block.element_at(i as usize, j as usize, k as usize)
}

fn color_char(color: Color) -> char {
    match color {
        Color::Red => 'R',
        Color::Green => 'G',
        Color::Blue => 'B',
        Color::Yellow => 'Y',
    }
}
