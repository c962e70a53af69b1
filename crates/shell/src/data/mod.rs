//! Data formats supported in the CLI.

pub mod fasta;
