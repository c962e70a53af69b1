//! The `align` subcommand.

use std::path::PathBuf;

use aligners::{Aligner, AlignmentSet, LocalFill, ScoreModel};
use serde::Serialize;

/// Which aligner to run.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariantArg {
    /// Needleman-Wunsch.
    #[clap(name = "global")]
    Global,
    /// Smith-Waterman.
    #[clap(name = "local")]
    Local,
}

/// Arguments for the `align` subcommand.
#[derive(clap::Args, Debug)]
pub struct AlignArgs {
    /// Whether to align the whole sequences or their best-scoring substrings.
    #[arg(short('v'), long, value_enum, default_value = "global")]
    variant: VariantArg,

    /// The first sequence.
    #[arg(short('x'), long, required_unless_present = "fasta")]
    x: Option<String>,

    /// The second sequence.
    #[arg(short('y'), long, required_unless_present = "fasta")]
    y: Option<String>,

    /// A FASTA file whose first two records are aligned, instead of `-x` and `-y`.
    #[arg(short('f'), long, conflicts_with_all = ["x", "y"])]
    fasta: Option<PathBuf>,

    /// The score for aligning a symbol against a gap.
    #[arg(short('g'), long, default_value_t = -6, allow_hyphen_values = true)]
    gap: i32,

    /// The score for aligning two equal symbols.
    #[arg(short('m'), long = "match", default_value_t = 5, allow_hyphen_values = true)]
    match_: i32,

    /// The score for aligning two different symbols.
    #[arg(short('s'), long, default_value_t = -2, allow_hyphen_values = true)]
    mismatch: i32,

    /// Floor local scores at zero and stop the traceback at zero cells.
    #[arg(short('c'), long)]
    clamp: bool,

    /// The most alignments to report.
    #[arg(short('n'), long)]
    max_alignments: Option<usize>,

    /// Print the dynamic programming table.
    #[arg(short('t'), long)]
    print_table: bool,

    /// Print the result as JSON.
    #[arg(short('j'), long)]
    json: bool,
}

impl AlignArgs {
    /// The two sequences to align.
    fn sequences(&self) -> Result<[Vec<u8>; 2], String> {
        match (&self.fasta, &self.x, &self.y) {
            (Some(path), _, _) => {
                let records = crate::data::fasta::read(path)?;
                ftlog::info!("Read {} records from {path:?}", records.len());
                match <[_; 2]>::try_from(records.into_iter().take(2).collect::<Vec<_>>()) {
                    Ok([(_, x), (_, y)]) => Ok([x, y]),
                    Err(records) => Err(format!(
                        "Expected at least two records in {path:?} but found {}",
                        records.len()
                    )),
                }
            }
            (None, Some(x), Some(y)) => Ok([x.as_bytes().to_vec(), y.as_bytes().to_vec()]),
            _ => Err("Provide either both of `-x` and `-y` or a FASTA file with `-f`".to_string()),
        }
    }

    /// The aligner described by the arguments.
    fn aligner(&self) -> Aligner {
        let model = ScoreModel::new(self.gap, self.match_, self.mismatch);
        let aligner = match self.variant {
            VariantArg::Global => {
                if self.clamp {
                    ftlog::warn!("`--clamp` has no effect on global alignment");
                }
                Aligner::global(model)
            }
            VariantArg::Local => {
                let fill = if self.clamp {
                    LocalFill::Clamped
                } else {
                    LocalFill::Unclamped
                };
                Aligner::local(model).with_local_fill(fill)
            }
        };

        match self.max_alignments {
            Some(max) => aligner.with_max_alignments(max),
            None => aligner,
        }
    }
}

/// The JSON report for an alignment run.
#[derive(Serialize)]
struct Report<'a> {
    /// The name of the variant.
    variant: &'a str,
    /// The scoring model.
    model: &'a ScoreModel,
    /// The optimal score.
    score: i64,
    /// The cell at which the alignments end.
    end: (usize, usize),
    /// Whether every co-optimal alignment is reported.
    complete: bool,
    /// The aligned pairs.
    alignments: Vec<[String; 2]>,
}

/// Aligns the sequences and prints the result.
pub fn run(args: &AlignArgs) -> Result<(), String> {
    let [x, y] = args.sequences()?;
    let aligner = args.aligner();
    ftlog::info!(
        "Aligning sequences of lengths {} and {} with the {} aligner",
        x.len(),
        y.len(),
        aligner.variant().name()
    );

    let table = aligner.dp_table(&x, &y)?;
    let result = aligner.align_table(&table);
    ftlog::info!("Found {} alignments with score {}", result.len(), result.score);

    if args.json {
        let report = Report {
            variant: result.variant.name(),
            model: aligner.model(),
            score: result.score,
            end: result.end,
            complete: result.complete,
            alignments: result.to_strings(),
        };
        let json = serde_json::to_string_pretty(&report).map_err(|e| e.to_string())?;
        println!("{json}");
    } else {
        if args.print_table {
            println!("{table}");
        }
        print_result(&result);
    }

    Ok(())
}

/// Prints the alignments as plain text.
fn print_result(result: &AlignmentSet) {
    println!("Score: {}", result.score);
    println!("End: {:?}", result.end);
    if result.complete {
        println!("Alignments: {}", result.len());
    } else {
        println!("Alignments: {} (stopped early; more exist)", result.len());
    }

    for alignment in &result.alignments {
        println!();
        println!("{alignment}");
    }
}
