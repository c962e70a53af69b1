//! Brute-force references for the alignment tests.

#![allow(dead_code)]

use aligners::{Alignment, ScoreModel, GAP};

/// Every alignment of `x` against `y`, in no particular order.
pub fn all_alignments(x: &[u8], y: &[u8]) -> Vec<Alignment> {
    let mut alignments = Vec::new();
    let (mut ax, mut ay) = (Vec::new(), Vec::new());
    extend(x, y, &mut ax, &mut ay, &mut alignments);
    alignments
}

/// Extends the partial alignment `(ax, ay)` with every way of aligning the
/// remaining suffixes `x` and `y`.
fn extend(x: &[u8], y: &[u8], ax: &mut Vec<u8>, ay: &mut Vec<u8>, out: &mut Vec<Alignment>) {
    if x.is_empty() && y.is_empty() {
        out.push(Alignment::new(ax.clone(), ay.clone()));
        return;
    }

    if let (Some((&xc, x_rest)), Some((&yc, y_rest))) = (x.split_first(), y.split_first()) {
        ax.push(xc);
        ay.push(yc);
        extend(x_rest, y_rest, ax, ay, out);
        ax.pop();
        ay.pop();
    }

    if let Some((&xc, x_rest)) = x.split_first() {
        ax.push(xc);
        ay.push(GAP);
        extend(x_rest, y, ax, ay, out);
        ax.pop();
        ay.pop();
    }

    if let Some((&yc, y_rest)) = y.split_first() {
        ax.push(GAP);
        ay.push(yc);
        extend(x, y_rest, ax, ay, out);
        ax.pop();
        ay.pop();
    }
}

/// The best global score over every alignment of `x` against `y`.
pub fn best_global_score(x: &[u8], y: &[u8], model: &ScoreModel) -> i64 {
    all_alignments(x, y)
        .iter()
        .map(|a| a.score(model, GAP))
        .max()
        .unwrap_or_else(|| unreachable!("There is always at least one alignment"))
}

/// Every alignment of `x` against `y` with the best global score, sorted.
pub fn optimal_global_alignments(x: &[u8], y: &[u8], model: &ScoreModel) -> Vec<Alignment> {
    let best = best_global_score(x, y, model);
    let mut optimal = all_alignments(x, y)
        .into_iter()
        .filter(|a| a.score(model, GAP) == best)
        .collect::<Vec<_>>();
    optimal.sort_by(|a, b| (a.x(), a.y()).cmp(&(b.x(), b.y())));
    optimal
}

/// The best global score over every pair of substrings of `x` and `y`,
/// including the empty ones.
pub fn best_local_score(x: &[u8], y: &[u8], model: &ScoreModel) -> i64 {
    let substrings = |s: &[u8]| {
        (0..=s.len())
            .flat_map(|i| (i..=s.len()).map(move |j| (i, j)))
            .collect::<Vec<_>>()
    };

    let (x_subs, y_subs) = (substrings(x), substrings(y));
    x_subs
        .iter()
        .flat_map(|&(xi, xj)| {
            y_subs
                .iter()
                .map(move |&(yi, yj)| best_global_score(&x[xi..xj], &y[yi..yj], model))
        })
        .max()
        .unwrap_or(0)
}

/// Whether `alignment` is well formed: equal lengths, only symbols from the
/// inputs or gaps, and no column of two gaps.
pub fn is_well_formed(alignment: &Alignment, x: &[u8], y: &[u8]) -> bool {
    alignment.x().len() == alignment.y().len()
        && alignment.x().iter().all(|c| *c == GAP || x.contains(c))
        && alignment.y().iter().all(|c| *c == GAP || y.contains(c))
        && alignment.x().iter().zip(alignment.y()).all(|(&a, &b)| a != GAP || b != GAP)
}
