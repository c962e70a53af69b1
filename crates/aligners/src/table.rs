//! The dynamic programming table shared by the global and local aligners.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::ScoreModel;

/// How the local (Smith-Waterman) table is filled and where its traceback
/// stops.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LocalFill {
    /// Fill with the same recurrence as the global table and stop the
    /// traceback only at row or column 0.
    #[default]
    Unclamped,
    /// Floor every cell at zero while filling and stop the traceback at any
    /// zero-valued cell. This is the textbook Smith-Waterman algorithm.
    Clamped,
}

/// Which alignment a table is built for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Variant {
    /// End-to-end alignment of both sequences (Needleman-Wunsch).
    Global,
    /// Alignment of the best-scoring pair of substrings (Smith-Waterman).
    Local(LocalFill),
}

impl Variant {
    /// The local variant with the default fill.
    pub const LOCAL: Self = Self::Local(LocalFill::Unclamped);

    /// A short lowercase name for logs and reports.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Global => "global",
            Self::Local(LocalFill::Unclamped) => "local",
            Self::Local(LocalFill::Clamped) => "local-clamped",
        }
    }
}

/// A filled dynamic programming table for two sequences.
///
/// The cell at row `i` and column `j` holds the best score for aligning the
/// first `i` symbols of `x` against the first `j` symbols of `y`. Row 0 and
/// column 0 are boundary cells for the empty prefixes.
///
/// The table keeps copies of both sequences so that it can be traced back and
/// rendered on its own. It is never mutated after it is filled.
///
/// Cells are `i64`. A cell's magnitude is at most `i + j` times the largest
/// weight of the model, so any `i32` weights fit for any table that fits in
/// memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DpTable {
    /// The sequence along the rows.
    x: Vec<u8>,
    /// The sequence along the columns.
    y: Vec<u8>,
    /// The scores, one inner vector per row.
    cells: Vec<Vec<i64>>,
    /// The variant the table was built for.
    variant: Variant,
    /// The scoring model used to fill the table.
    model: ScoreModel,
}

impl DpTable {
    /// Builds and fills the table for aligning `x` against `y`.
    ///
    /// # Arguments
    ///
    /// * `x` - The sequence along the rows.
    /// * `y` - The sequence along the columns.
    /// * `variant` - Whether to build a global or a local table.
    /// * `model` - The scoring model.
    pub fn new<S: AsRef<[u8]>>(x: &S, y: &S, variant: Variant, model: &ScoreModel) -> Self {
        let (x, y) = (x.as_ref(), y.as_ref());
        ftlog::debug!(
            "Building a {} table of {}x{} cells with {model:?}",
            variant.name(),
            x.len() + 1,
            y.len() + 1
        );

        let mut table = Self::build(x, y, variant, model);
        table.fill();
        table
    }

    /// Allocates the table and initializes the boundary cells.
    ///
    /// The global table has cumulative gap scores along row 0 and column 0.
    /// The local table is all zeros.
    fn build(x: &[u8], y: &[u8], variant: Variant, model: &ScoreModel) -> Self {
        let mut cells = vec![vec![0; y.len() + 1]; x.len() + 1];

        if variant == Variant::Global {
            let gap = i64::from(model.gap);

            // Initialize the first column to the cost of gapping the prefixes of `x`.
            for i in 1..cells.len() {
                cells[i][0] = cells[i - 1][0] + gap;
            }

            // Initialize the first row to the cost of gapping the prefixes of `y`.
            for j in 1..cells[0].len() {
                cells[0][j] = cells[0][j - 1] + gap;
            }
        }

        Self {
            x: x.to_vec(),
            y: y.to_vec(),
            cells,
            variant,
            model: *model,
        }
    }

    /// Fills the interior cells in row-major order.
    ///
    /// On iteration `(i, j)` we fill in the cell at `(i + 1, j + 1)`, whose
    /// neighbors above, to the left and on the diagonal are already filled.
    fn fill(&mut self) {
        let clamp = self.variant == Variant::Local(LocalFill::Clamped);
        let gap = i64::from(self.model.gap);

        for (i, &xc) in self.x.iter().enumerate() {
            for (j, &yc) in self.y.iter().enumerate() {
                let diagonal = self.cells[i][j] + i64::from(self.model.score(xc, yc));
                let up = self.cells[i][j + 1] + gap;
                let left = self.cells[i + 1][j] + gap;

                let best = diagonal.max(up).max(left);
                self.cells[i + 1][j + 1] = if clamp { best.max(0) } else { best };
            }
        }
    }

    /// The sequence along the rows.
    #[must_use]
    pub fn x(&self) -> &[u8] {
        &self.x
    }

    /// The sequence along the columns.
    #[must_use]
    pub fn y(&self) -> &[u8] {
        &self.y
    }

    /// The number of rows, i.e. `|x| + 1`.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    /// The number of columns, i.e. `|y| + 1`.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.y.len() + 1
    }

    /// The variant the table was built for.
    #[must_use]
    pub const fn variant(&self) -> Variant {
        self.variant
    }

    /// The scoring model used to fill the table.
    #[must_use]
    pub const fn model(&self) -> &ScoreModel {
        &self.model
    }

    /// The score in the cell at row `i` and column `j`.
    ///
    /// # Panics
    ///
    /// If the cell is outside the table.
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> i64 {
        self.cells[i][j]
    }

    /// The rows of the table.
    #[must_use]
    pub fn cells(&self) -> &[Vec<i64>] {
        &self.cells
    }

    /// The cell from which the traceback starts.
    ///
    /// For the global table this is the bottom-right corner. For the local
    /// table it is the first interior cell, in row-major order, holding the
    /// maximum score. If no interior cell exists, or the maximum is not
    /// positive, it is `(0, 0)` and the alignment is empty.
    #[must_use]
    pub fn optimal_cell(&self) -> (usize, usize) {
        match self.variant {
            Variant::Global => (self.x.len(), self.y.len()),
            Variant::Local(_) => {
                let best = self
                    .cells
                    .iter()
                    .enumerate()
                    .skip(1)
                    .flat_map(|(i, row)| row.iter().enumerate().skip(1).map(move |(j, &s)| (s, i, j)))
                    .fold(None, |best: Option<(i64, usize, usize)>, (s, i, j)| match best {
                        Some((b, _, _)) if b >= s => best,
                        _ => Some((s, i, j)),
                    });

                let cell = match best {
                    Some((s, i, j)) if s > 0 => (i, j),
                    _ => (0, 0),
                };
                ftlog::debug!("Located the optimal local cell at {cell:?}");
                cell
            }
        }
    }

    /// The optimal alignment score, i.e. the score in `optimal_cell`.
    #[must_use]
    pub fn score(&self) -> i64 {
        let (i, j) = self.optimal_cell();
        self.cells[i][j]
    }
}

impl fmt::Display for DpTable {
    /// Renders the table with the symbols of `x` down the left and the
    /// symbols of `y` across the top. Cells are right-justified.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .cells
            .iter()
            .flatten()
            .map(|s| s.to_string().len())
            .max()
            .unwrap_or(1)
            + 1;

        write!(f, "{:>width$}{:>width$}", "", ' ')?;
        for &c in &self.y {
            write!(f, "{:>width$}", char::from(c))?;
        }
        writeln!(f)?;

        for (i, row) in self.cells.iter().enumerate() {
            let label = if i == 0 { ' ' } else { char::from(self.x[i - 1]) };
            write!(f, "{label:>width$}")?;
            for s in row {
                write!(f, "{s:>width$}")?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
