//! Shannon-entropy filtering and frequent-motif detection for synthetic DNA sequences

pub mod entropy;
pub mod error;
pub mod generate;
pub mod motif;
pub mod seqio;
pub mod types;
