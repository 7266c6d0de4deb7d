//! Five-box Leitner scheduling.
//!
//! A correct answer moves a word up one box (capped at the top box), a wrong
//! answer sends it back to box 0. The review interval is looked up from the
//! box.

use super::{SchedulingResult, SpacedRepetitionAlgorithm};
use crate::types::{WordMasteryRecord, DAY_MS, INTERVALS, MAX_BOX};

#[derive(Debug, Clone)]
pub struct Leitner {
    /// Interval in days for each box. Always `INTERVALS`; `Default` is the
    /// only constructor.
    intervals: [u32; 5],
}

impl Default for Leitner {
    fn default() -> Self {
        Self { intervals: INTERVALS }
    }
}

impl Leitner {
    fn next_box(&self, current: u8, correct: bool) -> u8 {
        if correct {
            (current + 1).min(MAX_BOX)
        } else {
            0
        }
    }
}

impl SpacedRepetitionAlgorithm for Leitner {
    fn name(&self) -> &'static str {
        "leitner"
    }

    fn initial_record(&self) -> WordMasteryRecord {
        WordMasteryRecord {
            interval: self.intervals[0],
            ..Default::default()
        }
    }

    fn schedule(&self, record: &WordMasteryRecord, correct: bool, now_ms: i64) -> SchedulingResult {
        let srs_box = self.next_box(record.srs_box.min(MAX_BOX), correct);
        let interval = self.intervals[srs_box as usize];
        let next_review = now_ms + interval as i64 * DAY_MS;

        let (correct_count, wrong_count) = if correct {
            (record.correct_count + 1, record.wrong_count)
        } else {
            (record.correct_count, record.wrong_count + 1)
        };

        tracing::debug!(from = record.srs_box, to = srs_box, interval, "scheduled word");

        SchedulingResult {
            new_record: WordMasteryRecord {
                correct_count,
                wrong_count,
                last_seen: now_ms,
                srs_box,
                next_review,
                interval,
            },
            next_review,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: i64 = 1_700_000_000_000;

    #[test]
    fn correct_answers_climb_boxes() {
        let leitner = Leitner::default();
        let mut record = leitner.initial_record();

        for (step, expected_box) in [1u8, 2, 3].into_iter().enumerate() {
            let now = NOW + step as i64 * DAY_MS;
            record = leitner.schedule(&record, true, now).new_record;
            assert_eq!(record.srs_box, expected_box);
            assert_eq!(record.interval, INTERVALS[expected_box as usize]);
            assert_eq!(record.last_seen, now);
            assert_eq!(record.next_review, record.last_seen + record.interval as i64 * DAY_MS);
        }
        assert_eq!(record.correct_count, 3);
    }

    #[test]
    fn top_box_is_capped() {
        let leitner = Leitner::default();
        let record = WordMasteryRecord {
            srs_box: MAX_BOX,
            interval: 16,
            correct_count: 5,
            ..Default::default()
        };
        let result = leitner.schedule(&record, true, NOW);
        assert_eq!(result.new_record.srs_box, MAX_BOX);
        assert_eq!(result.new_record.interval, 16);
    }

    #[test]
    fn wrong_answer_resets_from_any_box() {
        let leitner = Leitner::default();
        for srs_box in 0..=MAX_BOX {
            let record = WordMasteryRecord {
                srs_box,
                interval: INTERVALS[srs_box as usize],
                ..Default::default()
            };
            let result = leitner.schedule(&record, false, NOW);
            assert_eq!(result.new_record.srs_box, 0);
            assert_eq!(result.new_record.interval, 1);
            assert_eq!(result.new_record.wrong_count, 1);
            assert_eq!(result.next_review, NOW + DAY_MS);
        }
    }

    #[test]
    fn lookup_by_name() {
        let found = crate::algorithm::get_algorithm("leitner").map(|a| a.name());
        assert_eq!(found, Some("leitner"));
        assert!(crate::algorithm::get_algorithm("sm2").is_none());
    }
}
