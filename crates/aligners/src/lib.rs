#![deny(clippy::correctness)]
#![warn(
    missing_docs,
    clippy::all,
    clippy::suspicious,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::pedantic,
    clippy::nursery,
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::cast_lossless
)]
#![doc = include_str!("../README.md")]

pub mod aligner;
pub mod scoring;
pub mod sketch;
pub mod table;
pub mod traceback;

pub use aligner::{align_global, align_local, Aligner, Alignment, AlignmentSet, LocalFill, Variant};
pub use scoring::ScoreModel;
pub use sketch::BloomFilter;
pub use table::DpTable;
pub use traceback::Alignments;

/// The gap character used unless an `Aligner` is configured otherwise.
pub const GAP: u8 = b'-';

/// The version of the crate.
pub const VERSION: &str = "0.1.0";
