//! Tests for global (Needleman-Wunsch) alignment.

use aligners::{align_global, Aligner, ScoreModel, Variant};
use test_case::test_case;

#[test]
fn all_co_optimal() -> Result<(), String> {
    let result = align_global("ATTCGGCT", "AGTTGGGCCCGCGT", -6, 5, -2)?;

    assert_eq!(result.variant, Variant::Global);
    assert_eq!(result.score, -3);
    assert_eq!(result.end, (8, 14));
    assert!(result.complete);

    let expected = [
        ["A-TT----CGGC-T", "AGTTGGGCCCGCGT"],
        ["A-TT---C-GGC-T", "AGTTGGGCCCGCGT"],
        ["A-TT---CG-GC-T", "AGTTGGGCCCGCGT"],
        ["A-TT-CG---GC-T", "AGTTGGGCCCGCGT"],
        ["A-TTC-G---GC-T", "AGTTGGGCCCGCGT"],
        ["A-TTCG----GC-T", "AGTTGGGCCCGCGT"],
        ["A-TTCGG----C-T", "AGTTGGGCCCGCGT"],
        ["A-TTCGG--C---T", "AGTTGGGCCCGCGT"],
        ["A-TTCGG-C----T", "AGTTGGGCCCGCGT"],
        ["A-TTCGGC-----T", "AGTTGGGCCCGCGT"],
    ];
    assert_eq!(result.to_strings(), expected);
    assert!(result.contains_str("A-TTCGGC-----T", "AGTTGGGCCCGCGT"));

    let model = ScoreModel::reference();
    for alignment in &result.alignments {
        assert_eq!(alignment.score(&model, b'-'), result.score);
    }

    Ok(())
}

#[test]
fn peppers() -> Result<(), String> {
    let result = Aligner::global(ScoreModel::reference()).align_str(&"NAJIBPEPPERSEATS", &"NAJIBEATSPEPPERS")?;

    assert_eq!(result.score, 21);
    assert_eq!(result.len(), 8);
    assert!(result.contains_str("NAJIB-PEPPERSEATS", "NAJIBEATSPEPPE-RS"));
    assert!(result.contains_str("NAJIBPEP-PERSEATS", "NAJIBEATSPEPPER-S"));

    Ok(())
}

#[test_case("", "AC", -12, &[["--", "AC"]]; "empty_x")]
#[test_case("AC", "", -12, &[["AC", "--"]]; "empty_y")]
#[test_case("", "", 0, &[["", ""]]; "both_empty")]
#[test_case("NOTGUILTY", "NOTGUILTY", 45, &[["NOTGUILTY", "NOTGUILTY"]]; "identical")]
#[test_case("GATTACA", "GCATGCU", 7, &[["GATTACA", "GCATGCU"]]; "gattaca")]
#[test_case("ACGT", "TGCA", -8, &[["ACGT", "TGCA"]]; "all_mismatches")]
#[test_case(
    "AAAA",
    "AA",
    -2,
    &[
        ["AAAA", "--AA"],
        ["AAAA", "-A-A"],
        ["AAAA", "A--A"],
        ["AAAA", "-AA-"],
        ["AAAA", "A-A-"],
        ["AAAA", "AA--"],
    ];
    "repeats"
)]
fn reference_model(x: &str, y: &str, score: i64, expected: &[[&str; 2]]) -> Result<(), String> {
    let result = align_global(x, y, -6, 5, -2)?;

    assert_eq!(result.score, score);
    assert_eq!(result.to_strings(), expected);
    assert_eq!(result.end, (x.len(), y.len()));

    Ok(())
}

/// Weights at the ends of the `i32` range must not overflow the table.
#[test_case("AAA", "", (i32::MIN, 5, -2), 3 * i64::from(i32::MIN), &[["AAA", "---"]]; "min_gap")]
#[test_case("AAA", "", (i32::MIN / 2, 5, -2), 3 * i64::from(i32::MIN / 2), &[["AAA", "---"]]; "half_min_gap")]
#[test_case("ACGT", "ACGT", (i32::MIN, i32::MAX, i32::MIN), 4 * i64::from(i32::MAX), &[["ACGT", "ACGT"]]; "max_match")]
#[test_case(
    "AC",
    "GT",
    (-1, i32::MAX, i32::MIN),
    -4,
    &[
        ["--AC", "GT--"],
        ["-A-C", "G-T-"],
        ["A--C", "-GT-"],
        ["-AC-", "G--T"],
        ["A-C-", "-G-T"],
        ["AC--", "--GT"],
    ];
    "min_mismatch"
)]
fn extreme_weights(x: &str, y: &str, (gap, match_, mismatch): (i32, i32, i32), score: i64, expected: &[[&str; 2]]) -> Result<(), String> {
    let result = align_global(x, y, gap, match_, mismatch)?;

    assert_eq!(result.score, score);
    assert_eq!(result.to_strings(), expected);

    let model = ScoreModel::new(gap, match_, mismatch);
    for alignment in &result.alignments {
        assert_eq!(alignment.score(&model, b'-'), score);
    }

    Ok(())
}

#[test]
fn custom_gap() -> Result<(), String> {
    let aligner = Aligner::global(ScoreModel::reference()).with_gap(b'.');
    let result = aligner.align_str(&"A", &"AA")?;

    assert_eq!(result.to_strings(), [[".A", "AA"], ["A.", "AA"]]);

    Ok(())
}

#[test]
fn table_rendering() -> Result<(), String> {
    let aligner = Aligner::global(ScoreModel::reference());
    let table = aligner.dp_table(&"AC", &"AGC")?;

    let rendered = table.to_string();
    assert!(rendered.lines().all(|line| line.len() == rendered.lines().next().map_or(0, str::len)));
    assert_eq!(rendered.lines().count(), 3 + 1);

    Ok(())
}

#[test]
fn bytes() -> Result<(), String> {
    let aligner = Aligner::global(ScoreModel::new(-1, 1, -1));
    let x = vec![0_u8, 1, 2, 3];
    let y = vec![0_u8, 2, 3];

    let result = aligner.align(&x, &y)?;
    assert_eq!(result.score, 2);
    assert_eq!(result.len(), 1);
    assert_eq!(result.alignments[0].x(), &[0, 1, 2, 3]);
    assert_eq!(result.alignments[0].y(), &[0, b'-', 2, 3]);

    Ok(())
}
