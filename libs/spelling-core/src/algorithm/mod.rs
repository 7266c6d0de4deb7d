//! Spaced repetition scheduling.

pub mod leitner;

use crate::types::WordMasteryRecord;

/// Result of scheduling a word after a recorded result.
#[derive(Debug, Clone, Copy)]
pub struct SchedulingResult {
    pub new_record: WordMasteryRecord,
    /// Epoch milliseconds.
    pub next_review: i64,
}

/// Trait for spaced repetition algorithms.
pub trait SpacedRepetitionAlgorithm: Send + Sync {
    /// Algorithm identifier.
    fn name(&self) -> &'static str;

    /// Calculate the next record after one result at `now_ms`.
    fn schedule(&self, record: &WordMasteryRecord, correct: bool, now_ms: i64) -> SchedulingResult;

    /// Record for a word that has never been attempted.
    fn initial_record(&self) -> WordMasteryRecord;
}

/// Get algorithm by name.
pub fn get_algorithm(name: &str) -> Option<Box<dyn SpacedRepetitionAlgorithm>> {
    match name {
        "leitner" => Some(Box::new(leitner::Leitner::default())),
        _ => None,
    }
}
