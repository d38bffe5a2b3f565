use crate::error::{MotifError, Result};
use crate::types::ALPHABET;
use rand::distributions::Distribution;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use statrs::distribution::Categorical;
use std::fs::File;
use std::io::{BufWriter, Write};

/// Per-base sampling weights for sequence generation.
///
/// Weights are given for A, C and G; T receives whatever mass the other
/// three leave unclaimed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaseProbabilities {
    pub a: f64,
    pub c: f64,
    pub g: f64,
}

impl BaseProbabilities {
    /// Validates and builds a probability profile.
    ///
    /// # Errors
    /// * Returns `MotifError::InvalidParameter` if any weight is outside
    ///   [0, 1] or the three weights sum to more than 1
    pub fn new(a: f64, c: f64, g: f64) -> Result<Self> {
        for (name, value) in [("prob_a", a), ("prob_c", c), ("prob_g", g)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(MotifError::invalid_parameter(
                    name,
                    value,
                    "probability must be in [0, 1]",
                ));
            }
        }
        if a + c + g > 1.0 {
            return Err(MotifError::invalid_parameter(
                "prob_a + prob_c + prob_g",
                a + c + g,
                "probabilities must sum to at most 1",
            ));
        }
        Ok(BaseProbabilities { a, c, g })
    }

    /// The derived weight for T.
    pub fn t(&self) -> f64 {
        (1.0 - (self.a + self.c + self.g)).max(0.0)
    }

    fn to_distribution(&self) -> Result<Categorical> {
        Categorical::new(&[self.a, self.c, self.g, self.t()])
            .map_err(|e| MotifError::DataError(e.to_string()))
    }
}

/// Writes `n` random sequences of length `m` to `writer`, one per line.
///
/// Each base is drawn independently from the categorical distribution
/// defined by `probs`.
///
/// # Arguments
/// * `rng` - Random number generator to draw from
/// * `writer` - Output stream for the generated sequences
/// * `n` - Number of sequences
/// * `m` - Length of each sequence
/// * `probs` - Per-base sampling weights
///
/// # Errors
/// * Returns `MotifError::Io` on a write failure
/// * Returns `MotifError::DataError` if the distribution cannot be built
pub fn generate_sequences<R: Rng, W: Write>(
    rng: &mut R,
    writer: &mut W,
    n: usize,
    m: usize,
    probs: &BaseProbabilities,
) -> Result<()> {
    let dist = probs.to_distribution()?;
    for _ in 0..n {
        let mut sequence = String::with_capacity(m);
        for _ in 0..m {
            let slot = dist.sample(rng) as usize;
            sequence.push(ALPHABET[slot]);
        }
        writeln!(writer, "{}", sequence)?;
    }
    Ok(())
}

/// Generates a sequence file, seeding the generator when a seed is given.
///
/// # Arguments
/// * `filename` - Path where the sequences are written
/// * `n` - Number of sequences
/// * `m` - Length of each sequence
/// * `probs` - Per-base sampling weights
/// * `seed` - Fixed RNG seed for reproducible output, or `None`
pub fn generate_file(
    filename: &str,
    n: usize,
    m: usize,
    probs: &BaseProbabilities,
    seed: Option<u64>,
) -> Result<()> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut writer = BufWriter::new(File::create(filename)?);
    generate_sequences(&mut rng, &mut writer, n, m, probs)?;
    writer.flush()?;
    Ok(())
}
