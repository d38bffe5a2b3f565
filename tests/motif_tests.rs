use motif_entropy_rs::error::MotifError;
use motif_entropy_rs::motif;
use std::io::Cursor;

#[test]
fn test_count_motifs_accumulates_across_sequences() {
    let input = Cursor::new("AAAA\nAAAA\n");
    let counts = motif::count_motifs(input, 2).unwrap();
    assert_eq!(counts.len(), 1);
    assert_eq!(counts["AA"], 6);
}

#[test]
fn test_count_motifs_short_sequences_contribute_nothing() {
    let input = Cursor::new("A\nAC\nACGT\n");
    let counts = motif::count_motifs(input, 3).unwrap();
    assert_eq!(counts.len(), 2);
    assert_eq!(counts["ACG"], 1);
    assert_eq!(counts["CGT"], 1);
}

#[test]
fn test_count_motifs_zero_length_is_error() {
    let input = Cursor::new("ACGT\n");
    let result = motif::count_motifs(input, 0);
    assert!(matches!(result, Err(MotifError::InvalidParameter { .. })));
}

#[test]
fn test_most_frequent_motif_by_count() {
    // windows: AC, CA, AC
    let input = Cursor::new("ACAC\n");
    let found = motif::most_frequent_motif(input, 2).unwrap();
    assert_eq!(found.as_deref(), Some("AC"));
}

#[test]
fn test_tie_break_prefers_longer_run() {
    // AA and AC both occur twice; AA wins on its run of two identical bases
    let input = Cursor::new("AAA\nACAC\n");
    let found = motif::most_frequent_motif(input, 2).unwrap();
    assert_eq!(found.as_deref(), Some("AA"));
}

#[test]
fn test_final_tie_break_is_lexicographic() {
    // AC, CG, GT all occur once with run length 1; the smallest wins
    let input = Cursor::new("ACGT\n");
    let found = motif::most_frequent_motif(input, 2).unwrap();
    assert_eq!(found.as_deref(), Some("AC"));
}

#[test]
fn test_no_windows_returns_none() {
    let empty = Cursor::new("");
    assert_eq!(motif::most_frequent_motif(empty, 4).unwrap(), None);

    let too_short = Cursor::new("A\n");
    assert_eq!(motif::most_frequent_motif(too_short, 4).unwrap(), None);
}

#[test]
fn test_max_run_length() {
    assert_eq!(motif::max_run_length("AACGT"), 2);
    assert_eq!(motif::max_run_length("ACGTA"), 1);
    assert_eq!(motif::max_run_length("AAAA"), 4);
    assert_eq!(motif::max_run_length("ACGGG"), 3);
    assert_eq!(motif::max_run_length(""), 0);
}

#[test]
fn test_select_motif_reports_count() {
    let input = Cursor::new("AAAA\n");
    let counts = motif::count_motifs(input, 2).unwrap();
    let (selected, count) = motif::select_motif(&counts).unwrap();
    assert_eq!(selected, "AA");
    assert_eq!(count, 3);
}

#[test]
fn test_find_motif_in_file() {
    // the all-A record alone contributes nine AA windows
    let found = motif::find_motif_in_file("tests/data/sequences.txt", 2).unwrap();
    assert_eq!(found.as_deref(), Some("AA"));

    // file does not exist
    let result = motif::find_motif_in_file("tests/data/nonexistent.txt", 2);
    assert!(result.is_err());
}
