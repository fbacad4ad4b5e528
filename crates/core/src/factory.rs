//! Factory module - random piece generation
//!
//! Holds a fixed catalog of cubical boolean shape templates and stamps out
//! single-colored blocks from it. The random source is owned by the factory
//! (never process-global state), so a seed fully determines the piece
//! sequence and tests can replay games deterministically.

use crate::block::Block;
use crate::rng::SimpleRng;
use crate::types::{Color, Element};

/// A cubical boolean shape pattern, `size^3` flags in block cell order
struct ShapeTemplate {
    size: usize,
    cells: &'static [u8],
}

impl ShapeTemplate {
    fn assert_cubical(&self) {
        assert_eq!(
            self.cells.len(),
            self.size * self.size * self.size,
            "shape template must be cubical"
        );
    }
}

/// The eight piece shapes. Cell order matches `Block`: (i * size + j) * size + k.
#[rustfmt::skip]
const CATALOG: [ShapeTemplate; 8] = [
    // unit cube
    ShapeTemplate { size: 1, cells: &[1] },
    // T shape
    ShapeTemplate { size: 3, cells: &[
        0, 0, 0,  0, 0, 0,  0, 0, 0,
        0, 1, 0,  1, 1, 1,  0, 0, 0,
        0, 0, 0,  0, 0, 0,  0, 0, 0,
    ]},
    // Z shape
    ShapeTemplate { size: 3, cells: &[
        0, 0, 0,  0, 0, 0,  0, 0, 0,
        0, 1, 0,  1, 1, 0,  1, 0, 0,
        0, 0, 0,  0, 0, 0,  0, 0, 0,
    ]},
    // I shape
    ShapeTemplate { size: 3, cells: &[
        0, 0, 0,  0, 1, 0,  0, 0, 0,
        0, 0, 0,  0, 1, 0,  0, 0, 0,
        0, 0, 0,  0, 1, 0,  0, 0, 0,
    ]},
    // L shape
    ShapeTemplate { size: 3, cells: &[
        0, 0, 0,  0, 0, 0,  0, 0, 0,
        0, 1, 0,  0, 1, 0,  0, 1, 1,
        0, 0, 0,  0, 0, 0,  0, 0, 0,
    ]},
    // S-ish run
    ShapeTemplate { size: 3, cells: &[
        0, 0, 0,  0, 0, 0,  0, 0, 0,
        1, 1, 0,  0, 1, 0,  0, 1, 1,
        0, 0, 0,  0, 0, 0,  0, 0, 0,
    ]},
    // 2x2x2 corner
    ShapeTemplate { size: 2, cells: &[
        0, 1,  1, 1,
        0, 0,  0, 1,
    ]},
    // fancy shape
    ShapeTemplate { size: 3, cells: &[
        0, 1, 0,  0, 0, 0,  0, 0, 0,
        0, 1, 0,  0, 1, 0,  0, 0, 0,
        0, 0, 0,  1, 1, 0,  0, 0, 0,
    ]},
];

/// Produces randomly shaped, randomly colored blocks
#[derive(Debug, Clone)]
pub struct PieceFactory {
    rng: SimpleRng,
}

impl PieceFactory {
    /// Create a factory with its own seeded random source.
    ///
    /// Validates the whole catalog up front; a malformed template is a static
    /// authoring defect and panics here rather than surfacing mid-game.
    pub fn new(seed: u32) -> Self {
        for template in &CATALOG {
            template.assert_cubical();
        }
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    /// Build a block with random shape and color at the given anchor.
    ///
    /// Shape and color are drawn uniformly; every occupied cell carries the
    /// same color.
    pub fn spawn_at(&mut self, x: i32, y: i32, z: i32) -> Block {
        let template = self.rng.pick(&CATALOG);
        let color = *self.rng.pick(&Color::ALL);

        let cells = template
            .cells
            .iter()
            .map(|&flag| (flag != 0).then_some(Element::new(color)))
            .collect();

        Block::from_cells(template.size, cells, x, y, z)
    }
}
