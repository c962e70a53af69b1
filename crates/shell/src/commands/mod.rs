//! The commands under the `shell` CLI.

pub mod align;
pub mod bloom;

use clap::Subcommand;

/// The subcommands of the CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find every optimal global or local alignment of two sequences.
    Align(align::AlignArgs),
    /// Check the k-mers of a query sequence against a bloom filter built from
    /// a reference sequence.
    Bloom(bloom::BloomArgs),
}
