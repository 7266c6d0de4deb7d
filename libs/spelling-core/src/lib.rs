//! Spelling assessment and adaptive review engine for Spanish practice.
//!
//! Provides:
//! - Attempt scoring with accent-aware matching (Levenshtein distance)
//! - Character-level diffs between an attempt and its target
//! - Heuristic classification of common Spanish spelling mistakes
//! - A per-word mastery ledger with Leitner spaced repetition
//! - Study streaks derived from active calendar days

pub mod algorithm;
pub mod classify;
pub mod date_utils;
pub mod diff;
pub mod error;
pub mod ledger;
pub mod matching;
pub mod session;
pub mod store;
pub mod streak;
pub mod types;

pub use algorithm::{SchedulingResult, SpacedRepetitionAlgorithm};
pub use classify::{classify_errors, explain_errors};
pub use diff::compute_char_diff;
pub use error::{Result, StoreError};
pub use ledger::MasteryLedger;
pub use matching::{compare_spelling, levenshtein_distance, strip_accents};
pub use session::{Judgment, PracticeSession};
pub use store::{BlobStore, LedgerMap, LedgerStore, MemoryStore};
pub use streak::StreakLog;
pub use types::{
    CategoryStats, CharDiffToken, ComparisonResult, DiffStatus, ErrorExplanation, ErrorTag,
    Locale, StreakStats, Verdict, WordMasteryRecord, WordStats, INTERVALS,
};
