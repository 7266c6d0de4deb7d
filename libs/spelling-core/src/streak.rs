//! Study streaks derived from the set of active days.
//!
//! Nothing is cached: every figure is recomputed from the date set.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::date_utils::{date_key, parse_date_key};
use crate::types::StreakStats;

/// Distinct days on which at least one result was recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StreakLog {
    days: BTreeSet<NaiveDate>,
}

impl StreakLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from persisted keys. Keys that do not parse are dropped.
    pub fn from_keys<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let days = keys
            .into_iter()
            .filter_map(|k| {
                let parsed = parse_date_key(k.as_ref());
                if parsed.is_none() {
                    tracing::warn!(key = k.as_ref(), "ignoring malformed study day");
                }
                parsed
            })
            .collect();
        Self { days }
    }

    /// Keys in ascending order, ready to persist.
    pub fn to_keys(&self) -> Vec<String> {
        self.days.iter().copied().map(date_key).collect()
    }

    /// Mark a day as active. Returns `false` if it already was.
    pub fn mark(&mut self, day: NaiveDate) -> bool {
        self.days.insert(day)
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        self.days.contains(&day)
    }

    pub fn clear(&mut self) {
        self.days.clear();
    }

    pub fn total_days(&self) -> usize {
        self.days.len()
    }

    /// Consecutive days ending at the most recent active day, provided that
    /// day is `today` or the day before. Otherwise 0.
    pub fn current_streak(&self, today: NaiveDate) -> usize {
        let Some(&last) = self.days.last() else {
            return 0;
        };
        let yesterday = today.pred_opt();
        if last != today && Some(last) != yesterday {
            return 0;
        }

        let mut streak = 0;
        let mut day = Some(last);
        while let Some(d) = day {
            if !self.days.contains(&d) {
                break;
            }
            streak += 1;
            day = d.pred_opt();
        }
        streak
    }

    /// Longest run of consecutive days anywhere in the history.
    pub fn longest_streak(&self) -> usize {
        let mut longest = 0;
        let mut run = 0;
        let mut previous: Option<NaiveDate> = None;

        for &day in &self.days {
            run = match previous.and_then(|p| p.succ_opt()) {
                Some(expected) if expected == day => run + 1,
                _ => 1,
            };
            longest = longest.max(run);
            previous = Some(day);
        }
        longest
    }

    pub fn stats(&self, today: NaiveDate) -> StreakStats {
        StreakStats {
            current_streak: self.current_streak(today),
            longest_streak: self.longest_streak(),
            total_days: self.total_days(),
        }
    }
}
