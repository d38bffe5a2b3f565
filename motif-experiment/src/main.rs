use clap::Parser;
use motif_entropy_rs::entropy;
use motif_entropy_rs::generate::{self, BaseProbabilities};
use motif_entropy_rs::motif;
use polars::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

#[derive(thiserror::Error, Debug)]
pub enum ExperimentError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Polars error: {0}")]
    Polars(#[from] PolarsError),

    #[error("Analysis error: {0}")]
    Analysis(#[from] motif_entropy_rs::error::MotifError),
}

#[derive(Parser)]
#[command(
    name = "motif-experiment",
    about = "Generates random DNA sequence databases, filters them by Shannon entropy, and reports the most frequent motif in each filtered database",
    long_about = "A tool for running motif detection experiments over synthetic DNA. \
                  For every combination of database size and base probability profile it \
                  generates a sequence database, discards low-entropy sequences, then times \
                  the search for the most frequent motif at each requested motif length.",
    version,
    after_help = "Example usage:\n    \
                  motif-experiment ./runs --results results.csv --seed 42\n    \
                  motif-experiment ./runs --threshold 1.2 --motif-lengths 4,6",
    color = clap::ColorChoice::Always
)]
#[derive(Debug)]
struct Args {
    /// Directory where generated and filtered sequence files are written
    /// Will be created if it doesn't exist
    #[arg(value_name = "WORK_DIR")]
    work_dir: String,

    /// Optional path for a CSV summary of all experiment rows
    #[arg(long)]
    results: Option<String>,

    /// Minimum Shannon entropy (bits) a sequence must reach to survive
    /// the filtering step
    #[arg(long, default_value = "1.5")]
    threshold: f64,

    /// Length of every generated sequence
    #[arg(long, default_value = "100")]
    seq_length: usize,

    /// Database sizes to sweep
    #[arg(long, value_delimiter = ',', default_values_t = [1000, 10000, 100000])]
    sizes: Vec<usize>,

    /// Motif lengths to sweep
    #[arg(long, value_delimiter = ',', default_values_t = [4, 6, 8])]
    motif_lengths: Vec<usize>,

    /// Fixed RNG seed for reproducible sequence databases
    #[arg(long)]
    seed: Option<u64>,
}

// Probability profiles swept by the experiment: uniform, A-rich, A-poor.
// Weights are for A, C, G; T takes the remainder.
const PROFILES: [[f64; 3]; 3] = [
    [0.25, 0.25, 0.25],
    [0.40, 0.20, 0.20],
    [0.10, 0.30, 0.30],
];

fn run(args: &Args) -> Result<DataFrame, ExperimentError> {
    fs::create_dir_all(&args.work_dir)?;

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut database_sizes: Vec<u64> = Vec::new();
    let mut prob_as: Vec<f64> = Vec::new();
    let mut motif_lengths: Vec<u64> = Vec::new();
    let mut retained_counts: Vec<u64> = Vec::new();
    let mut motifs: Vec<Option<String>> = Vec::new();
    let mut timings: Vec<f64> = Vec::new();

    for &n in &args.sizes {
        for profile in PROFILES {
            let probs = BaseProbabilities::new(profile[0], profile[1], profile[2])?;

            let original_file = format!("{}/sequences_{}_{}.txt", args.work_dir, n, profile[0]);
            {
                let mut writer = BufWriter::new(File::create(&original_file)?);
                generate::generate_sequences(&mut rng, &mut writer, n, args.seq_length, &probs)?;
                writer.flush()?;
            }

            let filtered_file =
                format!("{}/filtered_sequences_{}_{}.txt", args.work_dir, n, profile[0]);
            let retained = entropy::filter_file(&original_file, &filtered_file, args.threshold)?;

            for &k in &args.motif_lengths {
                let start = std::time::Instant::now();
                let found = motif::find_motif_in_file(&filtered_file, k)?;
                let elapsed = start.elapsed().as_secs_f64();

                println!(
                    "Database Size: {}, Probabilities: {}, Motif Size: {} (Filtered)",
                    n, profile[0], k
                );
                println!(
                    "Motif: {}, Time Taken: {:.6} seconds",
                    found.as_deref().unwrap_or("none"),
                    elapsed
                );

                database_sizes.push(n as u64);
                prob_as.push(profile[0]);
                motif_lengths.push(k as u64);
                retained_counts.push(retained as u64);
                motifs.push(found);
                timings.push(elapsed);
            }
        }
    }

    let df = DataFrame::new(vec![
        Column::new("database_size".into(), database_sizes),
        Column::new("prob_a".into(), prob_as),
        Column::new("motif_length".into(), motif_lengths),
        Column::new("retained".into(), retained_counts),
        Column::new("motif".into(), motifs),
        Column::new("seconds".into(), timings),
    ])?;

    Ok(df)
}

fn main() -> Result<(), ExperimentError> {
    let start_time = std::time::Instant::now();

    let args = Args::parse();

    let mut results = run(&args)?;
    println!("{:?}", results);

    if let Some(path) = &args.results {
        // Create output directory if it doesn't exist
        if let Some(parent) = Path::new(path).parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = File::create(path)?;
        CsvWriter::new(&mut file).finish(&mut results)?;
    }

    let elapsed = start_time.elapsed();
    println!(
        "Total execution time: {:.4} minutes",
        elapsed.as_secs_f64() / 60.0
    );

    Ok(())
}
