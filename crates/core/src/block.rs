//! Block module - the falling piece
//!
//! A block is a cube of side `size` whose cells are optional elements, plus an
//! integer anchor locating the cube's local origin in board coordinates. Blocks
//! are immutable: every transform (translate, rotate) returns a new instance,
//! and the predecessor is simply discarded. Uses a flat array in (i, j, k)
//! order for cache locality.

use crate::types::{Cell, Element};

/// An immutable cubical piece
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    size: usize,
    x: i32,
    y: i32,
    z: i32,
    /// Flat array of cells, `size^3` entries in (i * size + j) * size + k order
    cells: Vec<Cell>,
}

impl Block {
    /// Create a block from a flat cell array and an anchor position.
    ///
    /// Panics unless `cells.len() == size^3`; a non-cubical shape is an
    /// authoring defect, not a runtime condition.
    pub fn from_cells(size: usize, cells: Vec<Cell>, x: i32, y: i32, z: i32) -> Self {
        assert_eq!(
            cells.len(),
            size * size * size,
            "block shape must be cubical: expected {}^3 cells, got {}",
            size,
            cells.len()
        );
        Self {
            size,
            x,
            y,
            z,
            cells,
        }
    }

    /// Calculate flat index from local (i, j, k) coordinates
    #[inline(always)]
    fn index(&self, i: usize, j: usize, k: usize) -> usize {
        (i * self.size + j) * self.size + k
    }

    /// Side length of the cube encapsulating all elements
    pub fn size(&self) -> usize {
        self.size
    }

    /// Anchor x ("width" coordinate)
    pub fn x(&self) -> i32 {
        self.x
    }

    /// Anchor y ("depth" coordinate)
    pub fn y(&self) -> i32 {
        self.y
    }

    /// Anchor z ("height" coordinate)
    pub fn z(&self) -> i32 {
        self.z
    }

    /// Cell at local (i, j, k); indices are pre-validated by callers against [0, size)
    pub fn element_at(&self, i: usize, j: usize, k: usize) -> Cell {
        self.cells[self.index(i, j, k)]
    }

    /// Iterate the occupied local cells as (i, j, k, element)
    pub fn occupied(&self) -> impl Iterator<Item = (usize, usize, usize, Element)> + '_ {
        let size = self.size;
        self.cells.iter().enumerate().filter_map(move |(idx, cell)| {
            cell.map(|element| {
                let k = idx % size;
                let j = (idx / size) % size;
                let i = idx / (size * size);
                (i, j, k, element)
            })
        })
    }

    /// Number of occupied cells; invariant under every transform
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Copy of this block with the anchor shifted by (dx, dy, dz).
    ///
    /// No legality check here: legality is the board's responsibility.
    pub fn translated(&self, dx: i32, dy: i32, dz: i32) -> Block {
        Block {
            size: self.size,
            x: self.x + dx,
            y: self.y + dy,
            z: self.z + dz,
            cells: self.cells.clone(),
        }
    }

    /// Copy of this block rotated 90 degrees about the x axis.
    ///
    /// Rotation is about the cube's local frame; the anchor is unchanged.
    pub fn rotated_x(&self) -> Block {
        self.permuted(|n, i, j, k| (i, n - 1 - k, j))
    }

    /// Copy of this block rotated 90 degrees about the y axis
    pub fn rotated_y(&self) -> Block {
        self.permuted(|n, i, j, k| (k, j, n - 1 - i))
    }

    /// Copy of this block rotated 90 degrees about the z axis
    pub fn rotated_z(&self) -> Block {
        self.permuted(|n, i, j, k| (n - 1 - j, i, k))
    }

    /// Build a new block whose cell (i, j, k) is sourced from `source(n, i, j, k)`
    fn permuted(
        &self,
        source: impl Fn(usize, usize, usize, usize) -> (usize, usize, usize),
    ) -> Block {
        let n = self.size;
        let mut cells = vec![None; self.cells.len()];
        for i in 0..n {
            for j in 0..n {
                for k in 0..n {
                    let (si, sj, sk) = source(n, i, j, k);
                    cells[self.index(i, j, k)] = self.element_at(si, sj, sk);
                }
            }
        }
        Block {
            size: n,
            x: self.x,
            y: self.y,
            z: self.z,
            cells,
        }
    }
}
