//! Practice session: score an attempt, explain it, record it.

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::classify::explain_errors;
use crate::diff::compute_char_diff;
use crate::ledger::MasteryLedger;
use crate::matching::{compare_spelling, fold_case};
use crate::store::{LedgerStore, MemoryStore};
use crate::types::{CharDiffToken, ComparisonResult, ErrorExplanation, Locale, Verdict};

/// Everything known about one submitted attempt.
#[derive(Debug, Clone, Serialize)]
pub struct Judgment {
    pub target: String,
    pub attempt: String,
    pub comparison: ComparisonResult,
    pub verdict: Verdict,
    /// Empty for exact matches.
    pub diff: Vec<CharDiffToken>,
    /// Empty for exact matches.
    pub errors: Vec<ErrorExplanation>,
}

impl Judgment {
    pub fn is_accepted(&self) -> bool {
        self.verdict.is_accepted()
    }
}

pub struct PracticeSession<S: LedgerStore = MemoryStore> {
    ledger: MasteryLedger<S>,
    locale: Locale,
}

impl<S: LedgerStore> PracticeSession<S> {
    pub fn new(ledger: MasteryLedger<S>, locale: Locale) -> Self {
        Self { ledger, locale }
    }

    pub fn ledger(&self) -> &MasteryLedger<S> {
        &self.ledger
    }

    pub fn ledger_mut(&mut self) -> &mut MasteryLedger<S> {
        &mut self.ledger
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn submit(&mut self, target: &str, attempt: &str) -> Judgment {
        self.submit_at(target, attempt, Local::now())
    }

    /// Judge `attempt` against `target` and record the outcome at `now`.
    ///
    /// The ledger is keyed by the folded target, so `"Vaca"` and `" vaca"`
    /// share one record. Accent-only mistakes count as correct for the ledger but are still
    /// diffed and classified so the missing marks can be shown.
    pub fn submit_at(&mut self, target: &str, attempt: &str, now: DateTime<Local>) -> Judgment {
        let comparison = compare_spelling(attempt, target);
        let verdict = Verdict::from_comparison(&comparison);

        let word = fold_case(target);

        let (diff, errors) = if comparison.exact {
            (Vec::new(), Vec::new())
        } else {
            let folded_attempt = fold_case(attempt);
            (
                compute_char_diff(&folded_attempt, &word),
                explain_errors(&folded_attempt, &word, self.locale),
            )
        };

        self.ledger.record_result_at(&word, verdict.is_accepted(), now);

        Judgment {
            target: word,
            attempt: attempt.to_string(),
            comparison,
            verdict,
            diff,
            errors,
        }
    }
}
