//! Lazy enumeration of every co-optimal alignment in a filled table.
//!
//! The traceback walks from the optimal cell back toward the boundary of the
//! table. At each interior cell it follows *every* move whose score
//! difference matches the recurrence, so ties in the table fan out into
//! separate alignments. Branches are kept on an explicit stack instead of the
//! call stack, and each branch owns its own partial alignment.

use crate::{table::LocalFill, Alignment, DpTable, Variant};

/// A move from a cell to one of its predecessors in the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Up and left, aligning `x[i]` against `y[j]`.
    Diagonal,
    /// Up, aligning `x[i]` against a gap.
    Up,
    /// Left, aligning a gap against `y[j]`.
    Left,
}

/// A partially traced alignment waiting on the stack.
#[derive(Clone, Debug)]
struct Branch {
    /// The row of the cell to continue from.
    i: usize,
    /// The column of the cell to continue from.
    j: usize,
    /// The aligned `x`, back to front.
    x_rev: Vec<u8>,
    /// The aligned `y`, back to front.
    y_rev: Vec<u8>,
}

impl Branch {
    /// Takes one step toward the boundary, appending the column for the move.
    fn step(mut self, direction: Direction, [x, y]: [&[u8]; 2], gap: u8) -> Self {
        let cell = (self.i, self.j);
        match direction {
            Direction::Diagonal => {
                self.i = prev(self.i, cell);
                self.j = prev(self.j, cell);
                self.x_rev.push(x[self.i]);
                self.y_rev.push(y[self.j]);
            }
            Direction::Up => {
                self.i = prev(self.i, cell);
                self.x_rev.push(x[self.i]);
                self.y_rev.push(gap);
            }
            Direction::Left => {
                self.j = prev(self.j, cell);
                self.x_rev.push(gap);
                self.y_rev.push(y[self.j]);
            }
        }
        self
    }

    /// Reverses the partial alignment into its final orientation.
    fn finish(mut self) -> Alignment {
        self.x_rev.reverse();
        self.y_rev.reverse();
        Alignment::new(self.x_rev, self.y_rev)
    }
}

/// The index before `index`, failing fast if a move would leave the table.
fn prev(index: usize, cell: (usize, usize)) -> usize {
    index
        .checked_sub(1)
        .unwrap_or_else(|| unreachable!("The traceback stepped past the boundary of the table from {cell:?}"))
}

/// An iterator over every co-optimal alignment in a `DpTable`.
///
/// Alignments are produced depth-first, preferring the diagonal move, then
/// up, then left. The order is deterministic for a given table. Call
/// `Alignments::new` again to restart the enumeration.
///
/// The number of co-optimal alignments can grow exponentially with the
/// sequence lengths, so callers who do not need all of them should stop
/// early, e.g. with `Iterator::take`.
#[derive(Clone, Debug)]
pub struct Alignments<'a> {
    /// The filled table.
    table: &'a DpTable,
    /// The gap character.
    gap: u8,
    /// Branches that are yet to reach the boundary.
    stack: Vec<Branch>,
    /// The number of alignments produced so far.
    produced: usize,
}

impl<'a> Alignments<'a> {
    /// Starts the traceback from the optimal cell of `table`.
    #[must_use]
    pub fn new(table: &'a DpTable, gap: u8) -> Self {
        let (i, j) = table.optimal_cell();
        Self::from_cell(table, gap, (i, j))
    }

    /// Starts the traceback from an arbitrary cell of `table`.
    ///
    /// # Panics
    ///
    /// If the cell is outside the table.
    #[must_use]
    pub fn from_cell(table: &'a DpTable, gap: u8, (i, j): (usize, usize)) -> Self {
        assert!(
            i < table.rows() && j < table.cols(),
            "Cell ({i}, {j}) is outside the {}x{} table",
            table.rows(),
            table.cols()
        );

        let capacity = i + j;
        let root = Branch {
            i,
            j,
            x_rev: Vec::with_capacity(capacity),
            y_rev: Vec::with_capacity(capacity),
        };

        Self {
            table,
            gap,
            stack: vec![root],
            produced: 0,
        }
    }

    /// Whether the traceback ends at the cell.
    fn is_terminal(&self, i: usize, j: usize) -> bool {
        match self.table.variant() {
            Variant::Global => i == 0 && j == 0,
            Variant::Local(LocalFill::Unclamped) => i == 0 || j == 0,
            Variant::Local(LocalFill::Clamped) => i == 0 || j == 0 || self.table.get(i, j) == 0,
        }
    }

    /// The moves from a non-terminal cell that are consistent with how its
    /// score was derived, in the order in which they are explored.
    fn directions(&self, i: usize, j: usize) -> Vec<Direction> {
        // On the boundary of the global table, the cumulative gap scores
        // leave only one way back to the origin.
        if i == 0 {
            return vec![Direction::Left];
        }
        if j == 0 {
            return vec![Direction::Up];
        }

        let model = self.table.model();
        let (xc, yc) = (self.table.x()[i - 1], self.table.y()[j - 1]);

        let a = self.table.get(i, j);
        let up = self.table.get(i - 1, j);
        let left = self.table.get(i, j - 1);
        let diagonal = self.table.get(i - 1, j - 1);

        let (gap, substitution) = (i64::from(model.gap), i64::from(model.score(xc, yc)));

        let mut directions = Vec::with_capacity(3);
        if a - diagonal == substitution {
            directions.push(Direction::Diagonal);
        }
        if a - up == gap {
            directions.push(Direction::Up);
        }
        if a - left == gap {
            directions.push(Direction::Left);
        }

        if directions.is_empty() {
            unreachable!("Cell ({i}, {j}) with score {a} has no predecessor consistent with the recurrence");
        }

        directions
    }
}

impl Iterator for Alignments<'_> {
    type Item = Alignment;

    fn next(&mut self) -> Option<Self::Item> {
        let sequences = [self.table.x(), self.table.y()];

        while let Some(branch) = self.stack.pop() {
            if self.is_terminal(branch.i, branch.j) {
                self.produced += 1;
                ftlog::trace!(
                    "Alignment #{} reached the boundary at ({}, {}) with {} branches pending",
                    self.produced,
                    branch.i,
                    branch.j,
                    self.stack.len()
                );
                return Some(branch.finish());
            }

            let directions = self.directions(branch.i, branch.j);

            // Push in reverse so that the first direction is explored first.
            // Only the extra branches need their own copy of the partial
            // alignment.
            for &direction in directions[1..].iter().rev() {
                self.stack.push(branch.clone().step(direction, sequences, self.gap));
            }
            self.stack.push(branch.step(directions[0], sequences, self.gap));
        }

        None
    }
}
