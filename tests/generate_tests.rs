use motif_entropy_rs::error::MotifError;
use motif_entropy_rs::generate::{self, BaseProbabilities};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_generate_shape_and_alphabet() {
    let probs = BaseProbabilities::new(0.25, 0.25, 0.25).unwrap();
    let mut rng = StdRng::seed_from_u64(7);
    let mut output: Vec<u8> = Vec::new();

    generate::generate_sequences(&mut rng, &mut output, 10, 25, &probs).unwrap();

    let text = String::from_utf8(output).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 10);
    for line in lines {
        assert_eq!(line.len(), 25);
        assert!(line.chars().all(|c| "ACGT".contains(c)));
    }
}

#[test]
fn test_generate_is_reproducible_with_seed() {
    let probs = BaseProbabilities::new(0.4, 0.2, 0.2).unwrap();

    let mut first: Vec<u8> = Vec::new();
    let mut rng = StdRng::seed_from_u64(42);
    generate::generate_sequences(&mut rng, &mut first, 5, 30, &probs).unwrap();

    let mut second: Vec<u8> = Vec::new();
    let mut rng = StdRng::seed_from_u64(42);
    generate::generate_sequences(&mut rng, &mut second, 5, 30, &probs).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_degenerate_profile_emits_one_base() {
    let probs = BaseProbabilities::new(1.0, 0.0, 0.0).unwrap();
    let mut rng = StdRng::seed_from_u64(1);
    let mut output: Vec<u8> = Vec::new();

    generate::generate_sequences(&mut rng, &mut output, 3, 8, &probs).unwrap();

    let text = String::from_utf8(output).unwrap();
    for line in text.lines() {
        assert_eq!(line, "AAAAAAAA");
    }
}

#[test]
fn test_derived_t_weight() {
    let probs = BaseProbabilities::new(0.25, 0.25, 0.25).unwrap();
    assert!((probs.t() - 0.25).abs() < 1e-12);

    let skewed = BaseProbabilities::new(0.1, 0.3, 0.3).unwrap();
    assert!((skewed.t() - 0.3).abs() < 1e-12);
}

#[test]
fn test_invalid_probabilities_rejected() {
    assert!(matches!(
        BaseProbabilities::new(0.6, 0.3, 0.2),
        Err(MotifError::InvalidParameter { .. })
    ));
    assert!(matches!(
        BaseProbabilities::new(-0.1, 0.3, 0.3),
        Err(MotifError::InvalidParameter { .. })
    ));
    assert!(matches!(
        BaseProbabilities::new(0.2, 1.2, 0.1),
        Err(MotifError::InvalidParameter { .. })
    ));
}

#[test]
fn test_generate_file() {
    let path = "tests/data/generated_out.txt";
    let probs = BaseProbabilities::new(0.25, 0.25, 0.25).unwrap();

    generate::generate_file(path, 4, 12, &probs, Some(9)).unwrap();

    let text = std::fs::read_to_string(path).unwrap();
    assert_eq!(text.lines().count(), 4);

    // clean up
    std::fs::remove_file(path).unwrap();
}
