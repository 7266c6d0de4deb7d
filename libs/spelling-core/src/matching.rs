//! Attempt scoring against a target word.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::types::ComparisonResult;

/// Similarity reported when only diacritics differ.
pub const ACCENT_CLOSE_SIMILARITY: f64 = 0.95;

/// Compare an attempt to a target word.
///
/// Both strings are trimmed, lowercased and composed. Literal equality is an
/// exact match; equality after stripping diacritics is accent-close;
/// anything else is scored by Levenshtein distance over the stripped forms.
pub fn compare_spelling(attempt: &str, target: &str) -> ComparisonResult {
    let attempt = fold_case(attempt);
    let target = fold_case(target);

    if attempt == target {
        return ComparisonResult {
            exact: true,
            accent_close: false,
            similarity: 1.0,
        };
    }

    let attempt_stripped = strip_accents(&attempt);
    let target_stripped = strip_accents(&target);

    if attempt_stripped == target_stripped {
        return ComparisonResult {
            exact: false,
            accent_close: true,
            similarity: ACCENT_CLOSE_SIMILARITY,
        };
    }

    let similarity = normalized_similarity(&attempt_stripped, &target_stripped);
    tracing::debug!(attempt = %attempt, target = %target, similarity, "scored attempt");

    ComparisonResult {
        exact: false,
        accent_close: false,
        similarity,
    }
}

/// Trim, lowercase and compose (NFC), so decomposed input compares equal
/// to its precomposed form.
pub fn fold_case(s: &str) -> String {
    s.trim().to_lowercase().nfc().collect()
}

/// Remove every combining mark (á→a, ü→u, ñ→n, ...).
pub fn strip_accents(s: &str) -> String {
    s.nfd().filter(|c| !is_combining_mark(*c)).nfc().collect()
}

/// Calculate Levenshtein distance between two strings.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let m = a_chars.len();
    let n = b_chars.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    let mut prev = (0..=n).collect::<Vec<_>>();
    let mut curr = vec![0; n + 1];

    for i in 1..=m {
        curr[0] = i;

        for j in 1..=n {
            let cost = if a_chars[i - 1] == b_chars[j - 1] {
                0
            } else {
                1
            };

            curr[j] = (prev[j] + 1) // deletion
                .min(curr[j - 1] + 1) // insertion
                .min(prev[j - 1] + cost); // substitution
        }

        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}

/// Similarity (0.0 to 1.0, two decimals) based on Levenshtein distance.
/// Two empty strings score 0.0.
pub fn normalized_similarity(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 0.0;
    }

    let distance = levenshtein_distance(a, b);
    round2(1.0 - (distance as f64 / max_len as f64))
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
