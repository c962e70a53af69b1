//! Global (Needleman-Wunsch) and local (Smith-Waterman) alignment of two
//! sequences, enumerating every co-optimal alignment.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::{Alignments, DpTable, ScoreModel, GAP};

pub use crate::table::{LocalFill, Variant};

/// A pairwise alignment: two equal-length sequences with gaps inserted.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "UncheckedAlignment")]
pub struct Alignment {
    /// The aligned first sequence.
    x: Vec<u8>,
    /// The aligned second sequence.
    y: Vec<u8>,
}

/// The serialized form of an `Alignment`, before its lengths are checked.
#[derive(Deserialize)]
struct UncheckedAlignment {
    /// The aligned first sequence.
    x: Vec<u8>,
    /// The aligned second sequence.
    y: Vec<u8>,
}

impl TryFrom<UncheckedAlignment> for Alignment {
    type Error = String;

    fn try_from(UncheckedAlignment { x, y }: UncheckedAlignment) -> Result<Self, Self::Error> {
        if x.len() == y.len() {
            Ok(Self { x, y })
        } else {
            Err(format!(
                "Aligned sequences must have equal lengths, got {} and {}",
                x.len(),
                y.len()
            ))
        }
    }
}

impl Alignment {
    /// Creates an alignment from two aligned sequences.
    ///
    /// # Panics
    ///
    /// If the sequences have different lengths.
    #[must_use]
    pub fn new(x: Vec<u8>, y: Vec<u8>) -> Self {
        assert_eq!(x.len(), y.len(), "Aligned sequences must have equal lengths");
        Self { x, y }
    }

    /// The aligned first sequence.
    #[must_use]
    pub fn x(&self) -> &[u8] {
        &self.x
    }

    /// The aligned second sequence.
    #[must_use]
    pub fn y(&self) -> &[u8] {
        &self.y
    }

    /// The number of columns in the alignment.
    #[must_use]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Whether the alignment has no columns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// The aligned sequences as strings, replacing any invalid UTF-8.
    #[must_use]
    pub fn to_strings(&self) -> [String; 2] {
        [
            String::from_utf8_lossy(&self.x).into_owned(),
            String::from_utf8_lossy(&self.y).into_owned(),
        ]
    }

    /// Scores the alignment column by column.
    ///
    /// # Arguments
    ///
    /// * `model` - The scoring model.
    /// * `gap` - The gap character used in the alignment.
    #[must_use]
    pub fn score(&self, model: &ScoreModel, gap: u8) -> i64 {
        self.x
            .iter()
            .zip(self.y.iter())
            .map(|(&a, &b)| {
                if a == gap || b == gap {
                    i64::from(model.gap)
                } else {
                    i64::from(model.score(a, b))
                }
            })
            .sum()
    }

    /// The two sequences with the gaps removed.
    #[must_use]
    pub fn ungapped(&self, gap: u8) -> [Vec<u8>; 2] {
        [
            self.x.iter().copied().filter(|&c| c != gap).collect(),
            self.y.iter().copied().filter(|&c| c != gap).collect(),
        ]
    }

    /// The number of matching, mismatching and gapped columns.
    #[must_use]
    pub fn counts(&self, gap: u8) -> [usize; 3] {
        self.x
            .iter()
            .zip(self.y.iter())
            .fold([0; 3], |[matches, mismatches, gaps], (&a, &b)| {
                if a == gap || b == gap {
                    [matches, mismatches, gaps + 1]
                } else if a == b {
                    [matches + 1, mismatches, gaps]
                } else {
                    [matches, mismatches + 1, gaps]
                }
            })
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x, y] = self.to_strings();
        writeln!(f, "{x}")?;
        write!(f, "{y}")
    }
}

/// Every co-optimal alignment found for a pair of sequences.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlignmentSet {
    /// The variant used to align the sequences.
    pub variant: Variant,
    /// The optimal score.
    pub score: i64,
    /// The table cell at which every alignment ends.
    pub end: (usize, usize),
    /// The alignments, in the order the traceback produced them.
    pub alignments: Vec<Alignment>,
    /// Whether every co-optimal alignment was collected, i.e. the
    /// enumeration was not cut short by a cap on the number of alignments.
    pub complete: bool,
}

impl AlignmentSet {
    /// The number of alignments in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.alignments.len()
    }

    /// Whether the set holds no alignments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.alignments.is_empty()
    }

    /// Whether the set holds the given pair of aligned strings.
    #[must_use]
    pub fn contains_str(&self, x: &str, y: &str) -> bool {
        self.alignments
            .iter()
            .any(|a| a.x() == x.as_bytes() && a.y() == y.as_bytes())
    }

    /// The alignments as pairs of strings.
    #[must_use]
    pub fn to_strings(&self) -> Vec<[String; 2]> {
        self.alignments.iter().map(Alignment::to_strings).collect()
    }
}

/// Aligns pairs of sequences with a fixed scoring model and variant.
///
/// This works with any sequence of bytes, and also provides helpers for
/// working with strings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Aligner {
    /// Whether to align globally or locally.
    variant: Variant,
    /// The scoring model.
    model: ScoreModel,
    /// The gap character.
    gap: u8,
    /// The most alignments to collect in `align`, if capped.
    max_alignments: Option<usize>,
}

impl Aligner {
    /// Creates a new aligner with the default gap character and no cap on the
    /// number of alignments.
    #[must_use]
    pub const fn new(variant: Variant, model: ScoreModel) -> Self {
        Self {
            variant,
            model,
            gap: GAP,
            max_alignments: None,
        }
    }

    /// A Needleman-Wunsch aligner.
    #[must_use]
    pub const fn global(model: ScoreModel) -> Self {
        Self::new(Variant::Global, model)
    }

    /// A Smith-Waterman aligner with the unclamped fill.
    #[must_use]
    pub const fn local(model: ScoreModel) -> Self {
        Self::new(Variant::LOCAL, model)
    }

    /// Sets the gap character.
    #[must_use]
    pub const fn with_gap(mut self, gap: u8) -> Self {
        self.gap = gap;
        self
    }

    /// Caps the number of alignments collected by `align`.
    #[must_use]
    pub const fn with_max_alignments(mut self, max_alignments: usize) -> Self {
        self.max_alignments = Some(max_alignments);
        self
    }

    /// Sets how the local table is filled. This has no effect on a global
    /// aligner.
    #[must_use]
    pub const fn with_local_fill(mut self, fill: LocalFill) -> Self {
        if let Variant::Local(_) = self.variant {
            self.variant = Variant::Local(fill);
        }
        self
    }

    /// The variant.
    #[must_use]
    pub const fn variant(&self) -> Variant {
        self.variant
    }

    /// The scoring model.
    #[must_use]
    pub const fn model(&self) -> &ScoreModel {
        &self.model
    }

    /// The gap character.
    #[must_use]
    pub const fn gap(&self) -> u8 {
        self.gap
    }

    /// The cap on the number of alignments collected by `align`, if any.
    #[must_use]
    pub const fn max_alignments(&self) -> Option<usize> {
        self.max_alignments
    }

    /// Computes the dynamic programming table for two sequences.
    ///
    /// # Errors
    ///
    /// If either sequence contains the gap character.
    pub fn dp_table<S: AsRef<[u8]>>(&self, x: &S, y: &S) -> Result<DpTable, String> {
        for (name, s) in [("x", x.as_ref()), ("y", y.as_ref())] {
            if let Some(p) = s.iter().position(|&c| c == self.gap) {
                return Err(format!(
                    "Sequence {name} contains the gap character {:?} at position {p}",
                    char::from(self.gap)
                ));
            }
        }

        Ok(DpTable::new(x, y, self.variant, &self.model))
    }

    /// Lazily enumerates every co-optimal alignment in a table.
    ///
    /// The table must have been built for this aligner's variant and model;
    /// a table built by `dp_table` always is.
    #[must_use]
    pub fn alignments<'a>(&self, table: &'a DpTable) -> Alignments<'a> {
        Alignments::new(table, self.gap)
    }

    /// Aligns two sequences, collecting every co-optimal alignment up to the
    /// configured cap.
    ///
    /// # Errors
    ///
    /// If either sequence contains the gap character.
    pub fn align<S: AsRef<[u8]>>(&self, x: &S, y: &S) -> Result<AlignmentSet, String> {
        let table = self.dp_table(x, y)?;
        Ok(self.align_table(&table))
    }

    /// Collects the co-optimal alignments in a filled table, up to the
    /// configured cap.
    #[must_use]
    pub fn align_table(&self, table: &DpTable) -> AlignmentSet {
        let end = table.optimal_cell();
        let score = table.get(end.0, end.1);

        let mut iter = Alignments::from_cell(table, self.gap, end);
        let (alignments, complete) = match self.max_alignments {
            Some(max) => {
                let alignments = iter.by_ref().take(max).collect::<Vec<_>>();
                (alignments, iter.next().is_none())
            }
            None => (iter.collect(), true),
        };

        ftlog::debug!(
            "Found {} {} alignments with score {score} ending at {end:?}{}",
            alignments.len(),
            table.variant().name(),
            if complete { "" } else { " before reaching the cap" }
        );

        AlignmentSet {
            variant: table.variant(),
            score,
            end,
            alignments,
            complete,
        }
    }

    /// Aligns two strings.
    ///
    /// # Errors
    ///
    /// If either string contains the gap character.
    pub fn align_str<S: AsRef<str>>(&self, x: &S, y: &S) -> Result<AlignmentSet, String> {
        self.align(&x.as_ref().as_bytes(), &y.as_ref().as_bytes())
    }
}

/// Finds every optimal global (Needleman-Wunsch) alignment of two strings.
///
/// # Errors
///
/// If either string contains the gap character `-`.
pub fn align_global(x: &str, y: &str, gap: i32, match_: i32, mismatch: i32) -> Result<AlignmentSet, String> {
    Aligner::global(ScoreModel::new(gap, match_, mismatch)).align_str(&x, &y)
}

/// Finds every optimal local (Smith-Waterman) alignment of two strings, using
/// the unclamped fill.
///
/// # Errors
///
/// If either string contains the gap character `-`.
pub fn align_local(x: &str, y: &str, gap: i32, match_: i32, mismatch: i32) -> Result<AlignmentSet, String> {
    Aligner::local(ScoreModel::new(gap, match_, mismatch)).align_str(&x, &y)
}
