//! Character-level alignment between an attempt and its target.

use crate::types::{CharDiffToken, DiffStatus};

/// Align `attempt` against `target` using a longest-common-subsequence table.
///
/// Characters are compared literally, so an accent-only mismatch shows up as
/// a missing target character next to an extra attempt character. The
/// `Correct` and `Missing` tokens spell the target; the `Correct` and `Extra`
/// tokens spell the attempt.
pub fn compute_char_diff(attempt: &str, target: &str) -> Vec<CharDiffToken> {
    let a: Vec<char> = attempt.chars().collect();
    let t: Vec<char> = target.chars().collect();
    let (m, n) = (a.len(), t.len());

    // lcs[i][j] = LCS length of a[..i] and t[..j]
    let mut lcs = vec![vec![0usize; n + 1]; m + 1];
    for i in 1..=m {
        for j in 1..=n {
            lcs[i][j] = if a[i - 1] == t[j - 1] {
                lcs[i - 1][j - 1] + 1
            } else {
                lcs[i - 1][j].max(lcs[i][j - 1])
            };
        }
    }

    let mut tokens = Vec::with_capacity(m.max(n));
    let (mut i, mut j) = (m, n);

    while i > 0 || j > 0 {
        if i > 0 && j > 0 && a[i - 1] == t[j - 1] {
            tokens.push(token(t[j - 1], DiffStatus::Correct));
            i -= 1;
            j -= 1;
        } else if j > 0 && (i == 0 || lcs[i][j - 1] >= lcs[i - 1][j]) {
            // Ties consume the target first.
            tokens.push(token(t[j - 1], DiffStatus::Missing));
            j -= 1;
        } else {
            tokens.push(token(a[i - 1], DiffStatus::Extra));
            i -= 1;
        }
    }

    tokens.reverse();
    tokens
}

fn token(character: char, status: DiffStatus) -> CharDiffToken {
    CharDiffToken { character, status }
}

/// Rebuild the target from a diff.
pub fn target_from_diff(tokens: &[CharDiffToken]) -> String {
    tokens
        .iter()
        .filter(|t| t.status != DiffStatus::Extra)
        .map(|t| t.character)
        .collect()
}

/// Rebuild the attempt from a diff.
pub fn attempt_from_diff(tokens: &[CharDiffToken]) -> String {
    tokens
        .iter()
        .filter(|t| t.status != DiffStatus::Missing)
        .map(|t| t.character)
        .collect()
}
