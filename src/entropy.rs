use crate::error::{MotifError, Result};
use crate::types::BASE_INDEX;
use polars::prelude::*;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};

/// Computes the Shannon entropy (in bits) of a sequence's base composition.
///
/// Only A, C, G and T are tallied, but probabilities are normalized by the
/// full sequence length, so any other characters deflate every probability
/// instead of being excluded from the denominator. Probabilities can then
/// sum to less than 1 and the result is not the entropy of a proper
/// distribution. This convention is deliberate: downstream experiment
/// results depend on the exact numbers it produces.
///
/// # Arguments
/// * `sequence` - Input sequence string
///
/// # Returns
/// * `Result<f64>` - Entropy in [0.0, 2.0] bits
///
/// # Errors
/// * Returns `MotifError::EmptySequence` if the sequence has length 0
pub fn shannon_entropy(sequence: &str) -> Result<f64> {
    if sequence.is_empty() {
        return Err(MotifError::EmptySequence);
    }

    let mut counts = [0usize; 4];
    let mut total = 0usize;
    for base in sequence.chars() {
        total += 1;
        if let Some(&slot) = BASE_INDEX.get(&base) {
            counts[slot] += 1;
        }
    }

    let total = total as f64;
    let mut entropy = 0.0;
    for &count in &counts {
        if count > 0 {
            let probability = count as f64 / total;
            entropy -= probability * probability.log2();
        }
    }

    Ok(entropy)
}

/// Copies sequences scoring at or above an entropy threshold from `reader`
/// to `writer`, one record per line, in input order.
///
/// A single forward pass holding one record at a time; retained records are
/// forwarded verbatim, including any non-alphabet characters.
///
/// # Arguments
/// * `reader` - Input stream, one sequence per line
/// * `writer` - Output stream for retained sequences
/// * `threshold` - Minimum entropy (bits) a sequence must reach to be kept
///
/// # Returns
/// * `Result<usize>` - Number of sequences retained
///
/// # Errors
/// * Returns `MotifError::Io` on a read or write failure; the pass stops at
///   the failing record with no partial output for it
/// * Returns `MotifError::EmptySequence` if the stream contains a blank
///   record
pub fn filter_sequences<R: BufRead, W: Write>(
    reader: R,
    writer: &mut W,
    threshold: f64,
) -> Result<usize> {
    let mut retained = 0;
    for line in reader.lines() {
        let line = line?;
        if shannon_entropy(&line)? >= threshold {
            writeln!(writer, "{}", line)?;
            retained += 1;
        }
    }
    Ok(retained)
}

/// Filters sequences from one file into another by entropy threshold.
///
/// # Arguments
/// * `input` - Path to the file of sequences to score, one per line
/// * `output` - Path where retained sequences are written
/// * `threshold` - Minimum entropy (bits) a sequence must reach to be kept
///
/// # Returns
/// * `Result<usize>` - Number of sequences retained
pub fn filter_file(input: &str, output: &str, threshold: f64) -> Result<usize> {
    let reader = BufReader::new(File::open(input)?);
    let mut writer = BufWriter::new(File::create(output)?);
    let retained = filter_sequences(reader, &mut writer, threshold)?;
    writer.flush()?;
    Ok(retained)
}

/// Calculates the Shannon entropy for each sequence in the input DataFrame.
///
/// # Arguments
/// * `df` - DataFrame containing a "sequence" column
///
/// # Returns
/// * `Result<DataFrame>` - A DataFrame with:
///   - Original sequences
///   - "entropy": Shannon entropy of each sequence in bits
///
/// # Errors
/// * Returns `MotifError::DataError` if the "sequence" column is missing or
///   DataFrame creation fails
/// * Returns `MotifError::EmptySequence` if any sequence is empty
pub fn entropy_profile(df: &DataFrame) -> Result<DataFrame> {
    let seq_col = df
        .column("sequence")
        .map_err(|e| MotifError::DataError(e.to_string()))?;
    let sequences = seq_col.str().unwrap();

    let entropies: Vec<f64> = sequences
        .into_iter()
        .map(|seq| shannon_entropy(seq.unwrap()))
        .collect::<Result<Vec<f64>>>()?;

    let new_df = DataFrame::new(vec![
        seq_col.clone(),
        Column::new("entropy".into(), entropies),
    ])
    .map_err(|e| MotifError::DataError(e.to_string()))?;

    Ok(new_df)
}

/// Keeps only the rows of the input DataFrame whose sequence entropy is at
/// or above the threshold, preserving row order.
///
/// # Arguments
/// * `df` - DataFrame containing a "sequence" column
/// * `threshold` - Minimum entropy (bits) a sequence must reach to be kept
///
/// # Returns
/// * `Result<DataFrame>` - The filtered DataFrame
///
/// # Errors
/// * Returns `MotifError::DataError` if the "sequence" column is missing or
///   filtering fails
/// * Returns `MotifError::EmptySequence` if any sequence is empty
pub fn filter_by_entropy(df: &DataFrame, threshold: f64) -> Result<DataFrame> {
    let sequences = df
        .column("sequence")
        .map_err(|e| MotifError::DataError(e.to_string()))?
        .str()
        .unwrap();

    let mask: Vec<bool> = sequences
        .into_iter()
        .map(|seq| Ok(shannon_entropy(seq.unwrap())? >= threshold))
        .collect::<Result<Vec<bool>>>()?;

    let mask = BooleanChunked::from_slice("entropy_mask".into(), &mask);

    df.filter(&mask)
        .map_err(|e| MotifError::DataError(e.to_string()))
}
