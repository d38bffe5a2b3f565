use motif_entropy_rs::{entropy, seqio};
use polars::prelude::*;

fn main() {
    let df: DataFrame = seqio::read_sequences("tests/data/sequences.txt").unwrap();
    let profile = entropy::entropy_profile(&df).unwrap();
    println!("{:?}", profile);
}
