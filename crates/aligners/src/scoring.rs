//! The flat match/mismatch/gap scoring model.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Integer weights for aligning two symbols or a symbol against a gap.
///
/// Higher is better: aligners maximize the total score. The usual choice is
/// `gap < 0`, `match > 0` and `mismatch < 0`, but any integers are accepted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoreModel {
    /// The score for aligning a symbol against a gap.
    pub gap: i32,
    /// The score for aligning two equal symbols.
    #[serde(rename = "match")]
    pub match_: i32,
    /// The score for aligning two different symbols.
    pub mismatch: i32,
}

impl Default for ScoreModel {
    fn default() -> Self {
        Self::reference()
    }
}

impl ScoreModel {
    /// Creates a new scoring model.
    #[must_use]
    pub const fn new(gap: i32, match_: i32, mismatch: i32) -> Self {
        Self { gap, match_, mismatch }
    }

    /// The preset with a gap score of `-6`, a match score of `5` and a
    /// mismatch score of `-2`.
    #[must_use]
    pub const fn reference() -> Self {
        Self::new(-6, 5, -2)
    }

    /// The score for aligning `a` against `b`.
    #[must_use]
    pub const fn score(&self, a: u8, b: u8) -> i32 {
        if a == b {
            self.match_
        } else {
            self.mismatch
        }
    }
}

impl FromStr for ScoreModel {
    type Err = String;

    /// Parses a `"gap,match,mismatch"` triple, e.g. `"-6,5,-2"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values = s
            .split(',')
            .map(|v| {
                v.trim()
                    .parse::<i32>()
                    .map_err(|e| format!("Invalid score {v:?} in {s:?}: {e}"))
            })
            .collect::<Result<Vec<_>, _>>()?;

        match values.as_slice() {
            &[gap, match_, mismatch] => Ok(Self::new(gap, match_, mismatch)),
            _ => Err(format!(
                "Expected three comma-separated scores (gap,match,mismatch) but got {} in {s:?}",
                values.len()
            )),
        }
    }
}
