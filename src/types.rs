use phf::phf_map;
use std::collections::HashMap;

/// The fixed DNA alphabet, in tally order
pub const ALPHABET: [char; 4] = ['A', 'C', 'G', 'T'];

/// Maps each alphabet base to its slot in a count array
pub static BASE_INDEX: phf::Map<char, usize> = phf_map! {
    'A' => 0,
    'C' => 1,
    'G' => 2,
    'T' => 3,
};

/// Occurrence counts for fixed-length motifs, accumulated across all
/// sequences of one counting pass
pub type MotifTable = HashMap<String, usize>;
