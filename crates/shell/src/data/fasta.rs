//! Reading sequences from FASTA files.

use std::path::Path;

/// Reads the records of a FASTA file as pairs of ID and sequence.
///
/// # Errors
///
/// - If the file could not be opened.
/// - If a record could not be parsed.
pub fn read<P: AsRef<Path>>(path: P) -> Result<Vec<(String, Vec<u8>)>, String> {
    let reader = bio::io::fasta::Reader::from_file(path.as_ref()).map_err(|e| e.to_string())?;

    reader
        .records()
        .map(|record| {
            let record = record.map_err(|e| format!("Failed to read a record from {:?}: {e}", path.as_ref()))?;
            Ok((record.id().to_string(), record.seq().to_vec()))
        })
        .collect()
}
