//! Core types for the spelling engine.

use serde::{Deserialize, Serialize};

/// Leitner review intervals in days, indexed by box.
pub const INTERVALS: [u32; 5] = [1, 2, 4, 8, 16];

/// Highest Leitner box.
pub const MAX_BOX: u8 = 4;

/// Milliseconds in one day.
pub const DAY_MS: i64 = 86_400_000;

/// Minimum correct answers before a word can count as mastered.
pub const MASTERY_MIN_CORRECT: u32 = 3;

/// Minimum accuracy (0.0-1.0) before a word can count as mastered.
pub const MASTERY_MIN_ACCURACY: f64 = 0.80;

/// Similarity at or above which a wrong attempt is reported as "almost".
pub const ALMOST_THRESHOLD: f64 = 0.80;

/// Language used for explanatory messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Locale {
    En,
    Es,
}

impl Default for Locale {
    fn default() -> Self {
        Self::En
    }
}

impl Locale {
    /// Get the locale code as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
        }
    }

    /// Parse from a locale code.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "en" => Some(Self::En),
            "es" => Some(Self::Es),
            _ => None,
        }
    }
}

/// Result of comparing an attempt to a target word.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    /// Case-insensitive literal match.
    pub exact: bool,
    /// Letters match once diacritics are ignored, but the literal forms differ.
    pub accent_close: bool,
    /// Similarity score between 0.0 and 1.0, rounded to two decimals.
    pub similarity: f64,
}

/// Status of a single character in a diff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiffStatus {
    /// Present in both the attempt and the target.
    Correct,
    /// Present in the target but not typed.
    Missing,
    /// Typed but not present in the target.
    Extra,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharDiffToken {
    pub character: char,
    pub status: DiffStatus,
}

/// Reason a wrong attempt is wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorTag {
    #[serde(rename = "accent")]
    Accent,
    #[serde(rename = "b-v")]
    BV,
    #[serde(rename = "h")]
    H,
    #[serde(rename = "double")]
    Double,
    #[serde(rename = "dieresis")]
    Dieresis,
    #[serde(rename = "z-s")]
    ZS,
    #[serde(rename = "c-s")]
    CS,
    #[serde(rename = "y-ll")]
    YLl,
    #[serde(rename = "tilde")]
    Tilde,
    #[serde(rename = "other")]
    Other,
}

impl ErrorTag {
    /// Get the tag identifier as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Accent => "accent",
            Self::BV => "b-v",
            Self::H => "h",
            Self::Double => "double",
            Self::Dieresis => "dieresis",
            Self::ZS => "z-s",
            Self::CS => "c-s",
            Self::YLl => "y-ll",
            Self::Tilde => "tilde",
            Self::Other => "other",
        }
    }

    /// Explanatory message for this tag.
    pub fn message(&self, locale: Locale) -> &'static str {
        match (locale, self) {
            (Locale::En, Self::Accent) => "Right letters, but check the accent marks.",
            (Locale::En, Self::BV) => "B and V sound the same in Spanish. Check which one this word uses.",
            (Locale::En, Self::H) => "The H is silent in Spanish. Check whether this word has one.",
            (Locale::En, Self::Double) => "Check the double letters (cc, rr, ll, nn).",
            (Locale::En, Self::Dieresis) => "This word needs a diaeresis: ü, as in pingüino.",
            (Locale::En, Self::ZS) => "Z and S sound alike in most of the Spanish-speaking world.",
            (Locale::En, Self::CS) => "Before e and i, C sounds like S in most of the Spanish-speaking world.",
            (Locale::En, Self::YLl) => "Y and LL sound alike for most speakers.",
            (Locale::En, Self::Tilde) => "Don't forget the ñ.",
            (Locale::En, Self::Other) => "Compare your spelling with the correct word letter by letter.",
            (Locale::Es, Self::Accent) => "Letras correctas, pero revisa las tildes.",
            (Locale::Es, Self::BV) => "La B y la V suenan igual en español. Revisa cuál lleva esta palabra.",
            (Locale::Es, Self::H) => "La H es muda en español. Revisa si esta palabra la lleva.",
            (Locale::Es, Self::Double) => "Revisa las letras dobles (cc, rr, ll, nn).",
            (Locale::Es, Self::Dieresis) => "Esta palabra lleva diéresis: ü, como en pingüino.",
            (Locale::Es, Self::ZS) => "La Z y la S suenan igual en casi todo el mundo hispanohablante.",
            (Locale::Es, Self::CS) => "Ante e e i, la C suena como S en casi todo el mundo hispanohablante.",
            (Locale::Es, Self::YLl) => "La Y y la LL suenan igual para la mayoría de hablantes.",
            (Locale::Es, Self::Tilde) => "No olvides la ñ.",
            (Locale::Es, Self::Other) => "Compara tu respuesta con la palabra correcta letra por letra.",
        }
    }
}

/// An error tag paired with its message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ErrorExplanation {
    pub tag: ErrorTag,
    pub message: &'static str,
}

/// Persistent mastery record for one word.
///
/// `next_review == last_seen + interval * DAY_MS` and
/// `interval == INTERVALS[srs_box]` hold after every recorded result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordMasteryRecord {
    pub correct_count: u32,
    pub wrong_count: u32,
    /// Epoch milliseconds of the last recorded result.
    pub last_seen: i64,
    pub srs_box: u8,
    /// Epoch milliseconds at which the word becomes due.
    pub next_review: i64,
    /// Interval in days.
    pub interval: u32,
}

impl Default for WordMasteryRecord {
    fn default() -> Self {
        Self {
            correct_count: 0,
            wrong_count: 0,
            last_seen: 0,
            srs_box: 0,
            next_review: 0,
            interval: INTERVALS[0],
        }
    }
}

impl WordMasteryRecord {
    pub fn total(&self) -> u32 {
        self.correct_count + self.wrong_count
    }

    /// Fraction of correct results, 0.0 when nothing was recorded.
    pub fn accuracy(&self) -> f64 {
        match self.total() {
            0 => 0.0,
            total => self.correct_count as f64 / total as f64,
        }
    }

    pub fn is_mastered(&self) -> bool {
        self.correct_count >= MASTERY_MIN_CORRECT && self.accuracy() >= MASTERY_MIN_ACCURACY
    }
}

/// Derived statistics for one word.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WordStats {
    pub correct: u32,
    pub wrong: u32,
    pub total: u32,
    pub accuracy: f64,
    pub mastered: bool,
}

impl WordStats {
    pub fn from_record(record: Option<&WordMasteryRecord>) -> Self {
        match record {
            Some(r) => Self {
                correct: r.correct_count,
                wrong: r.wrong_count,
                total: r.total(),
                accuracy: r.accuracy(),
                mastered: r.is_mastered(),
            },
            None => Self {
                correct: 0,
                wrong: 0,
                total: 0,
                accuracy: 0.0,
                mastered: false,
            },
        }
    }
}

/// Mastery summary over a group of words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryStats {
    pub mastered: usize,
    pub practiced: usize,
    pub total: usize,
    /// Rounded percentage of mastered words.
    pub percent: u32,
}

/// Study streak summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct StreakStats {
    pub current_streak: usize,
    pub longest_streak: usize,
    pub total_days: usize,
}

/// How a practice submission is judged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// Exact match.
    Perfect,
    /// Correct letters with wrong or missing accents. Counted as correct.
    AccentsOnly,
    /// Wrong, but similar enough to be worth saying so.
    Almost,
    Incorrect,
}

impl Verdict {
    pub fn from_comparison(result: &ComparisonResult) -> Self {
        if result.exact {
            Self::Perfect
        } else if result.accent_close {
            Self::AccentsOnly
        } else if result.similarity >= ALMOST_THRESHOLD {
            Self::Almost
        } else {
            Self::Incorrect
        }
    }

    /// Whether this verdict counts as a correct answer for the ledger.
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Perfect | Self::AccentsOnly)
    }
}
