use crate::error::{MotifError, Result};
use crate::types::MotifTable;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};

/// Tallies every overlapping window of length `k` across all sequences in
/// the stream into one shared table.
///
/// Windows advance by one position; a sequence shorter than `k` contributes
/// no windows. Counts accumulate across sequences, so the same motif seen in
/// two records shares one entry.
///
/// # Arguments
/// * `reader` - Input stream, one sequence per line
/// * `k` - Motif length, must be positive
///
/// # Returns
/// * `Result<MotifTable>` - Occurrence count per motif; empty if no sequence
///   was long enough to contribute a window
///
/// # Errors
/// * Returns `MotifError::InvalidParameter` if `k` is 0
/// * Returns `MotifError::Io` on a read failure
pub fn count_motifs<R: BufRead>(reader: R, k: usize) -> Result<MotifTable> {
    if k == 0 {
        return Err(MotifError::invalid_parameter(
            "k",
            k,
            "motif length must be positive",
        ));
    }

    let mut counts: MotifTable = HashMap::new();
    for line in reader.lines() {
        let line = line?;
        for window in line.as_bytes().windows(k) {
            let motif = String::from_utf8_lossy(window).into_owned();
            *counts.entry(motif).or_insert(0) += 1;
        }
    }

    Ok(counts)
}

/// Length of the longest run of one repeated character in `motif`.
///
/// "AACGT" scores 2 for its leading "AA"; "ACGTA" scores 1. The empty
/// string scores 0.
pub fn max_run_length(motif: &str) -> usize {
    let mut max_run = 0;
    let mut run = 0;
    let mut prev = None;
    for c in motif.chars() {
        if prev == Some(c) {
            run += 1;
        } else {
            run = 1;
            prev = Some(c);
        }
        if run > max_run {
            max_run = run;
        }
    }
    max_run
}

/// Selects the winning motif from a count table.
///
/// Candidates are ranked by occurrence count, then by longest run of
/// consecutive identical bases, then by lexicographic order with the
/// smallest motif winning. The last key makes selection deterministic
/// regardless of hash iteration order.
///
/// # Returns
/// * `Option<(&String, usize)>` - The winning motif and its count, or
///   `None` if the table is empty
pub fn select_motif(counts: &MotifTable) -> Option<(&String, usize)> {
    counts
        .iter()
        .max_by(|(motif_a, count_a), (motif_b, count_b)| {
            count_a
                .cmp(count_b)
                .then_with(|| max_run_length(motif_a).cmp(&max_run_length(motif_b)))
                .then_with(|| motif_b.cmp(motif_a))
        })
        .map(|(motif, &count)| (motif, count))
}

/// Finds the most frequent motif of length `k` across all sequences in the
/// stream.
///
/// # Arguments
/// * `reader` - Input stream, one sequence per line
/// * `k` - Motif length, must be positive
///
/// # Returns
/// * `Result<Option<String>>` - The selected motif, or `None` if no
///   sequence contributed a window
pub fn most_frequent_motif<R: BufRead>(reader: R, k: usize) -> Result<Option<String>> {
    let counts = count_motifs(reader, k)?;
    Ok(select_motif(&counts).map(|(motif, _)| motif.clone()))
}

/// Finds the most frequent motif of length `k` in a sequence file.
///
/// # Arguments
/// * `filename` - Path to the file of sequences, one per line
/// * `k` - Motif length, must be positive
///
/// # Returns
/// * `Result<Option<String>>` - The selected motif, or `None` if no
///   sequence contributed a window
pub fn find_motif_in_file(filename: &str, k: usize) -> Result<Option<String>> {
    let reader = BufReader::new(File::open(filename)?);
    most_frequent_motif(reader, k)
}
