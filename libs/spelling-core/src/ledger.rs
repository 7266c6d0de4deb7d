//! Per-word mastery ledger.
//!
//! [`MasteryLedger::record_result`] is the only mutation. It updates the
//! word's record through the scheduler, writes the whole ledger back to the
//! store in one call and marks the current study day in the streak log.
//! Store failures are logged and otherwise ignored: the ledger keeps working
//! from memory.

use chrono::{DateTime, Local};

use crate::algorithm::leitner::Leitner;
use crate::algorithm::SpacedRepetitionAlgorithm;
use crate::date_utils::study_day;
use crate::store::{LedgerMap, LedgerStore, MemoryStore};
use crate::streak::StreakLog;
use crate::types::{CategoryStats, StreakStats, WordMasteryRecord, WordStats};

pub struct MasteryLedger<S: LedgerStore = MemoryStore> {
    store: S,
    records: LedgerMap,
    streak: StreakLog,
    algorithm: Box<dyn SpacedRepetitionAlgorithm>,
    daily_reset_hour: u32,
}

impl MasteryLedger<MemoryStore> {
    /// Ledger backed only by memory.
    pub fn in_memory() -> Self {
        Self::new(MemoryStore::new())
    }
}

impl<S: LedgerStore> MasteryLedger<S> {
    /// Load the ledger and streak log from `store`.
    ///
    /// Unreadable or malformed data loads as empty.
    pub fn new(store: S) -> Self {
        let records = store.load_ledger().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "could not load ledger, starting empty");
            LedgerMap::new()
        });
        let streak = match store.load_streak() {
            Ok(keys) => StreakLog::from_keys(keys),
            Err(e) => {
                tracing::warn!(error = %e, "could not load streak log, starting empty");
                StreakLog::new()
            }
        };

        tracing::debug!(words = records.len(), days = streak.total_days(), "loaded ledger");

        Self {
            store,
            records,
            streak,
            algorithm: Box::new(Leitner::default()),
            daily_reset_hour: 0,
        }
    }

    /// Use a different scheduling algorithm.
    pub fn with_algorithm(mut self, algorithm: Box<dyn SpacedRepetitionAlgorithm>) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Hour (0-23) at which a new study day starts.
    pub fn with_daily_reset_hour(mut self, hour: u32) -> Self {
        self.daily_reset_hour = hour.min(23);
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Record one result for `word` now.
    pub fn record_result(&mut self, word: &str, correct: bool) -> WordMasteryRecord {
        self.record_result_at(word, correct, Local::now())
    }

    /// Record one result for `word` at `now`.
    pub fn record_result_at(&mut self, word: &str, correct: bool, now: DateTime<Local>) -> WordMasteryRecord {
        let current = self
            .records
            .get(word)
            .copied()
            .unwrap_or_else(|| self.algorithm.initial_record());

        let result = self.algorithm.schedule(&current, correct, now.timestamp_millis());
        let record = result.new_record;
        self.records.insert(word.to_string(), record);

        tracing::debug!(
            word,
            correct,
            srs_box = record.srs_box,
            next_review = result.next_review,
            "recorded result"
        );

        if let Err(e) = self.store.save_ledger(&self.records) {
            tracing::warn!(error = %e, "failed to persist ledger");
        }

        let today = study_day(now, self.daily_reset_hour);
        if self.streak.mark(today) {
            if let Err(e) = self.store.save_streak(&self.streak.to_keys()) {
                tracing::warn!(error = %e, "failed to persist streak log");
            }
        }

        record
    }

    /// Stored record for `word`, if it was ever attempted.
    pub fn record(&self, word: &str) -> Option<&WordMasteryRecord> {
        self.records.get(word)
    }

    /// Counts, accuracy and mastery for `word`. Unknown words are all zeros.
    pub fn word_stats(&self, word: &str) -> WordStats {
        WordStats::from_record(self.records.get(word))
    }

    /// Words due now, soonest first.
    pub fn words_for_review(&self) -> Vec<String> {
        self.words_for_review_at(Local::now())
    }

    /// Words due at `now`, soonest first. Words with no attempts are never due.
    pub fn words_for_review_at(&self, now: DateTime<Local>) -> Vec<String> {
        let now_ms = now.timestamp_millis();
        let mut due: Vec<(&String, &WordMasteryRecord)> = self
            .records
            .iter()
            .filter(|(_, r)| r.total() > 0 && r.next_review <= now_ms)
            .collect();
        due.sort_by_key(|(_, r)| r.next_review);
        due.into_iter().map(|(word, _)| word.clone()).collect()
    }

    pub fn due_count(&self) -> usize {
        self.due_count_at(Local::now())
    }

    pub fn due_count_at(&self, now: DateTime<Local>) -> usize {
        self.words_for_review_at(now).len()
    }

    /// Mastery summary over a group of words.
    pub fn category_stats<I, W>(&self, words: I) -> CategoryStats
    where
        I: IntoIterator<Item = W>,
        W: AsRef<str>,
    {
        let mut stats = CategoryStats {
            mastered: 0,
            practiced: 0,
            total: 0,
            percent: 0,
        };

        for word in words {
            let word_stats = self.word_stats(word.as_ref());
            stats.total += 1;
            if word_stats.total > 0 {
                stats.practiced += 1;
            }
            if word_stats.mastered {
                stats.mastered += 1;
            }
        }

        if stats.total > 0 {
            stats.percent = (stats.mastered as f64 / stats.total as f64 * 100.0).round() as u32;
        }
        stats
    }

    /// Number of words in the ledger that are mastered.
    pub fn mastered_count(&self) -> usize {
        self.records.values().filter(|r| r.is_mastered()).count()
    }

    /// Number of words with at least one recorded result.
    pub fn word_count(&self) -> usize {
        self.records.len()
    }

    pub fn streak_stats(&self) -> StreakStats {
        self.streak_stats_at(Local::now())
    }

    pub fn streak_stats_at(&self, now: DateTime<Local>) -> StreakStats {
        self.streak.stats(study_day(now, self.daily_reset_hour))
    }

    /// Forget every word and every study day.
    pub fn reset(&mut self) {
        self.records.clear();
        self.streak.clear();
        if let Err(e) = self.store.clear() {
            tracing::warn!(error = %e, "failed to clear stored ledger");
        }
        tracing::info!("ledger reset");
    }
}
