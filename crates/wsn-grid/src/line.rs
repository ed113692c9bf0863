//! Integer line rasterization.
//!
//! [`LineCells`] walks every cell of the Bresenham line from `from` to `to`,
//! yielding both endpoints.  The sequence is the one produced by the classic
//! error-accumulator formulation (`err = dx - |dy|`, step x when
//! `2·err >= -|dy|`, step y when `2·err <= dx`), so diagonal moves advance
//! both axes in a single step.

use wsn_core::Cell;

/// Iterator over the cells of a rasterized straight line, endpoints included.
#[derive(Clone, Debug)]
pub struct LineCells {
    cur:  Cell,
    to:   Cell,
    dx:   i32,
    dy:   i32,
    sx:   i32,
    sy:   i32,
    err:  i32,
    done: bool,
}

impl LineCells {
    pub fn new(from: Cell, to: Cell) -> Self {
        let dx = (to.x - from.x).abs();
        let dy = -(to.y - from.y).abs();
        Self {
            cur: from,
            to,
            dx,
            dy,
            sx: if from.x < to.x { 1 } else { -1 },
            sy: if from.y < to.y { 1 } else { -1 },
            err: dx + dy,
            done: false,
        }
    }
}

impl Iterator for LineCells {
    type Item = Cell;

    fn next(&mut self) -> Option<Cell> {
        if self.done {
            return None;
        }
        let out = self.cur;
        if self.cur == self.to {
            self.done = true;
            return Some(out);
        }
        let e2 = 2 * self.err;
        if e2 >= self.dy {
            self.err += self.dy;
            self.cur.x += self.sx;
        }
        if e2 <= self.dx {
            self.err += self.dx;
            self.cur.y += self.sy;
        }
        Some(out)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        // Remaining cells = Chebyshev distance to the end, plus the current one.
        let n = self.cur.chebyshev(self.to) as usize + 1;
        (n, Some(n))
    }
}

impl std::iter::FusedIterator for LineCells {}
