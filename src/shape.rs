//! Shape resolution: decoded mask + random engine into a concrete cell grid.
//!
//! Four phases, always in this order:
//!   1. placement — allocate the (mirrored) grid, primed with `Border`, and
//!      overlay the mask into the top-left quadrant;
//!   2. stochastic resolution — settle `MaybeBody` / `MaybeBorder` cells;
//!   3. mirroring — x first, then y;
//!   4. edge synthesis — empty cells touching a body become border.
//!
//! The draw order of phase 2 is part of the seed contract: row-major over the
//! full grid, one draw per undecided cell, nothing else consults the engine.

use crate::mask::{Mask, MaskCell};
use crate::rng::SpriteRng;

/// One settled cell of a sprite shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeCell {
    Empty,
    Body,
    Border,
}

/// A resolved shape grid. Mutable through the resolution phases, then
/// treated as read-only by the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeGrid {
    width: usize,
    height: usize,
    cells: Vec<ShapeCell>,
}

impl ShapeGrid {
    /// Run all four phases and return the final grid.
    pub fn resolve(mask: &Mask, mirror_x: bool, mirror_y: bool, rng: &mut SpriteRng) -> Self {
        let mut grid = Self::sample(mask, mirror_x, mirror_y, rng);
        if mirror_x {
            grid.mirror_x();
        }
        if mirror_y {
            grid.mirror_y();
        }
        grid.synthesize_edges();
        grid
    }

    /// Phases 1 and 2: placement plus stochastic resolution.
    ///
    /// Cells outside the mask quadrant stay `Border` — the priming fill is
    /// what the mirror phases later copy over, and any region a disabled
    /// mirror leaves untouched stays border.
    pub fn sample(mask: &Mask, mirror_x: bool, mirror_y: bool, rng: &mut SpriteRng) -> Self {
        let width = mask.width() * if mirror_x { 2 } else { 1 };
        let height = mask.height() * if mirror_y { 2 } else { 1 };
        let mut cells = Vec::with_capacity(width * height);

        for y in 0..height {
            for x in 0..width {
                let cell = if x < mask.width() && y < mask.height() {
                    match mask.cell(x, y) {
                        MaskCell::Empty => ShapeCell::Empty,
                        // Round-half-up coin flip: body iff the draw lands in [0.5, 1).
                        MaskCell::MaybeBody => {
                            if rng.next_f64() >= 0.5 {
                                ShapeCell::Body
                            } else {
                                ShapeCell::Empty
                            }
                        }
                        MaskCell::MaybeBorder => {
                            if rng.next_f64() > 0.5 {
                                ShapeCell::Body
                            } else {
                                ShapeCell::Border
                            }
                        }
                        MaskCell::AlwaysBorder => ShapeCell::Border,
                    }
                } else {
                    ShapeCell::Border
                };
                cells.push(cell);
            }
        }

        Self {
            width,
            height,
            cells,
        }
    }

    /// Phase 3a: copy the left half into the right half, reversed.
    pub fn mirror_x(&mut self) {
        for y in 0..self.height {
            for x in 0..self.width / 2 {
                self.cells[y * self.width + (self.width - 1 - x)] = self.cells[y * self.width + x];
            }
        }
    }

    /// Phase 3b: copy the top half into the bottom half, reversed.
    pub fn mirror_y(&mut self) {
        for y in 0..self.height / 2 {
            for x in 0..self.width {
                self.cells[(self.height - 1 - y) * self.width + x] = self.cells[y * self.width + x];
            }
        }
    }

    /// Phase 4: every empty cell orthogonally adjacent to a body cell
    /// becomes a border cell.
    ///
    /// Single in-place row-major sweep over the live grid. Only `Empty`
    /// cells are ever rewritten; body cells are fixed points of this phase.
    pub fn synthesize_edges(&mut self) {
        for y in 0..self.height {
            for x in 0..self.width {
                if self.cells[y * self.width + x] != ShapeCell::Body {
                    continue;
                }
                if y > 0 {
                    self.upgrade_if_empty(x, y - 1);
                }
                if y + 1 < self.height {
                    self.upgrade_if_empty(x, y + 1);
                }
                if x > 0 {
                    self.upgrade_if_empty(x - 1, y);
                }
                if x + 1 < self.width {
                    self.upgrade_if_empty(x + 1, y);
                }
            }
        }
    }

    fn upgrade_if_empty(&mut self, x: usize, y: usize) {
        let index = y * self.width + x;
        if self.cells[index] == ShapeCell::Empty {
            self.cells[index] = ShapeCell::Border;
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cell(&self, x: usize, y: usize) -> ShapeCell {
        self.cells[y * self.width + x]
    }

    #[cfg(test)]
    fn from_cells(width: usize, height: usize, cells: Vec<ShapeCell>) -> Self {
        assert_eq!(cells.len(), width * height);
        Self {
            width,
            height,
            cells,
        }
    }
}
