use crate::error::{MotifError, Result};
use polars::prelude::*;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};

/// Reads one-sequence-per-line records into a Polars DataFrame.
///
/// Blank lines are dropped here so that empty records never reach the
/// entropy scorer, which rejects them.
///
/// # Arguments
/// * `filename` - Path to the sequence file to read
///
/// # Returns
/// * `Result<DataFrame>` - A DataFrame with one column:
///   - "sequence": The sequence records in file order
///
/// # Errors
/// * Returns `MotifError::DataError` if DataFrame creation fails
/// * Returns `MotifError::Io` for file reading issues
pub fn read_sequences(filename: &str) -> Result<DataFrame> {
    let file = File::open(filename)?;
    let reader = BufReader::new(file);

    let mut sequences: Vec<String> = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if !line.is_empty() {
            sequences.push(line.to_string());
        }
    }

    let df = DataFrame::new(vec![Column::new("sequence".into(), sequences)])
        .map_err(|_| MotifError::DataError("Failed to create DataFrame".into()))?;

    Ok(df)
}

/// Writes sequences from a Polars DataFrame to a file, one per line.
///
/// # Arguments
/// * `df` - DataFrame containing a "sequence" column
/// * `filename` - Path where the sequence file should be written
///
/// # Returns
/// * `Result<()>` - Unit type if successful
///
/// # Errors
/// * Returns `MotifError::DataError` if the "sequence" column is missing
/// * Returns `MotifError::Io` for file writing issues
pub fn write_sequences(df: &DataFrame, filename: &str) -> Result<()> {
    let sequences = df
        .column("sequence")
        .map_err(|e| MotifError::DataError(e.to_string()))?
        .str()
        .unwrap();

    let mut file = File::create(filename).map_err(MotifError::Io)?;

    for idx in 0..df.height() {
        let sequence = sequences.get(idx).unwrap();
        writeln!(file, "{}", sequence).map_err(MotifError::Io)?;
    }

    Ok(())
}
