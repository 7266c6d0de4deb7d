//! Heuristic classification of spelling mistakes.
//!
//! Each rule is checked independently and every rule that matches fires, so
//! one attempt can carry several tags. `Other` is added only when nothing else
//! matched, which means a genuine mismatch never yields an empty list.

use crate::matching::strip_accents;
use crate::types::{ErrorExplanation, ErrorTag, Locale};

/// Stand-in for letters that are treated as interchangeable.
const PLACEHOLDER: char = '\u{E000}';

/// Double-letter patterns, checked in order; the first hit wins.
const DOUBLE_LETTERS: [&str; 4] = ["cc", "rr", "ll", "nn"];

/// A single classification rule.
pub struct Rule {
    pub tag: ErrorTag,
    pub matches: fn(attempt: &str, target: &str) -> bool,
}

/// Ordered rule table. `Other` is not listed; it is the fallback.
pub const RULES: &[Rule] = &[
    Rule { tag: ErrorTag::Accent, matches: accent_only },
    Rule { tag: ErrorTag::BV, matches: b_v_confusion },
    Rule { tag: ErrorTag::H, matches: silent_h },
    Rule { tag: ErrorTag::Double, matches: double_letter },
    Rule { tag: ErrorTag::Dieresis, matches: missing_dieresis },
    Rule { tag: ErrorTag::ZS, matches: z_s_confusion },
    Rule { tag: ErrorTag::CS, matches: c_s_confusion },
    Rule { tag: ErrorTag::YLl, matches: y_ll_confusion },
    Rule { tag: ErrorTag::Tilde, matches: missing_tilde },
];

/// Tag why `attempt` does not spell `target`.
///
/// Both inputs are expected to be case-folded already. Equal inputs yield no
/// tags.
pub fn classify_errors(attempt: &str, target: &str) -> Vec<ErrorTag> {
    classify_with(RULES, attempt, target)
}

/// Classify using a caller-supplied rule table.
pub fn classify_with(rules: &[Rule], attempt: &str, target: &str) -> Vec<ErrorTag> {
    if attempt == target {
        return Vec::new();
    }

    let mut tags: Vec<ErrorTag> = rules
        .iter()
        .filter(|rule| (rule.matches)(attempt, target))
        .map(|rule| rule.tag)
        .collect();

    if tags.is_empty() {
        tags.push(ErrorTag::Other);
    }

    tracing::debug!(attempt, target, ?tags, "classified attempt");
    tags
}

/// Classify and attach a message to every tag.
pub fn explain_errors(attempt: &str, target: &str, locale: Locale) -> Vec<ErrorExplanation> {
    classify_errors(attempt, target)
        .into_iter()
        .map(|tag| ErrorExplanation {
            tag,
            message: tag.message(locale),
        })
        .collect()
}

fn accent_only(attempt: &str, target: &str) -> bool {
    attempt != target && strip_accents(attempt) == strip_accents(target)
}

fn b_v_confusion(attempt: &str, target: &str) -> bool {
    equal_with_merged(attempt, target, &['b', 'v'])
}

fn silent_h(attempt: &str, target: &str) -> bool {
    let without_h = |s: &str| s.chars().filter(|&c| c != 'h').collect::<String>();
    without_h(attempt) == without_h(target)
}

fn double_letter(attempt: &str, target: &str) -> bool {
    for pattern in DOUBLE_LETTERS {
        let single = &pattern[..1];
        let target_has = target.contains(pattern);
        let attempt_has = attempt.contains(pattern);

        if (target_has && attempt.contains(single) && !attempt_has) || (attempt_has && !target_has) {
            return true;
        }
    }
    false
}

fn missing_dieresis(attempt: &str, target: &str) -> bool {
    missing_mark(attempt, target, 'ü', 'u')
}

fn z_s_confusion(attempt: &str, target: &str) -> bool {
    equal_with_merged(attempt, target, &['z', 's'])
}

fn c_s_confusion(attempt: &str, target: &str) -> bool {
    equal_with_merged(attempt, target, &['c', 's'])
}

fn y_ll_confusion(attempt: &str, target: &str) -> bool {
    let merge = |s: &str| s.replace("ll", &PLACEHOLDER.to_string()).replace('y', &PLACEHOLDER.to_string());
    merge(attempt) == merge(target)
}

fn missing_tilde(attempt: &str, target: &str) -> bool {
    missing_mark(attempt, target, 'ñ', 'n')
}

/// Equality after replacing every letter in `group` with the placeholder.
fn equal_with_merged(attempt: &str, target: &str, group: &[char]) -> bool {
    let merge = |s: &str| {
        s.chars()
            .map(|c| if group.contains(&c) { PLACEHOLDER } else { c })
            .collect::<String>()
    };
    merge(attempt) == merge(target)
}

/// The target has `marked`, the attempt has none, and the attempt spells a
/// plain `plain` in the same surroundings as one of the target's `marked`.
fn missing_mark(attempt: &str, target: &str, marked: char, plain: char) -> bool {
    if !target.contains(marked) || attempt.contains(marked) || !attempt.contains(plain) {
        return false;
    }

    let chars: Vec<char> = target.chars().collect();
    chars.iter().enumerate().any(|(i, &c)| {
        if c != marked {
            return false;
        }
        let mut context = String::new();
        if i > 0 {
            context.push(chars[i - 1]);
        }
        context.push(plain);
        if let Some(&next) = chars.get(i + 1) {
            context.push(next);
        }
        attempt.contains(&context)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn equal_inputs_have_no_tags() {
        assert!(classify_errors("vaca", "vaca").is_empty());
    }

    #[test]
    fn b_v() {
        assert_eq!(classify_errors("baca", "vaca"), vec![ErrorTag::BV]);
        assert!(classify_errors("tuvo", "tubo").contains(&ErrorTag::BV));
    }

    #[test]
    fn accent() {
        assert_eq!(classify_errors("acapite", "acápite"), vec![ErrorTag::Accent]);
    }

    #[test]
    fn dieresis_also_counts_as_accent() {
        let tags = classify_errors("pinguino", "pingüino");
        assert!(tags.contains(&ErrorTag::Dieresis));
        assert!(tags.contains(&ErrorTag::Accent));
    }

    #[test]
    fn silent_h_missing_or_added() {
        assert_eq!(classify_errors("ebdomada", "hebdómada"), vec![ErrorTag::Other]);
        assert_eq!(classify_errors("ebdómada", "hebdómada"), vec![ErrorTag::H]);
        assert_eq!(classify_errors("hola", "ola"), vec![ErrorTag::H]);
    }

    #[test]
    fn double_letters() {
        assert!(classify_errors("acion", "acción").contains(&ErrorTag::Double));
        assert!(classify_errors("pero", "perro").contains(&ErrorTag::Double));
        assert!(classify_errors("carro", "caro").contains(&ErrorTag::Double));
        assert!(!classify_errors("casa", "caza").contains(&ErrorTag::Double));
    }

    #[test]
    fn sibilants() {
        let tags = classify_errors("casa", "caza");
        assert!(tags.contains(&ErrorTag::ZS));
        assert!(!tags.contains(&ErrorTag::CS));

        let tags = classify_errors("serveza", "cerveza");
        assert!(tags.contains(&ErrorTag::CS));
    }

    #[test]
    fn y_ll() {
        assert!(classify_errors("yuvia", "lluvia").contains(&ErrorTag::YLl));
        assert!(classify_errors("cabayo", "caballo").contains(&ErrorTag::YLl));
    }

    #[test]
    fn tilde() {
        let tags = classify_errors("nandu", "ñandú");
        assert!(tags.contains(&ErrorTag::Tilde));
        assert!(tags.contains(&ErrorTag::Accent));

        assert_eq!(classify_errors("ano", "año"), vec![ErrorTag::Accent, ErrorTag::Tilde]);
        // ñ present but misplaced is not a missing tilde
        assert!(!classify_errors("ñano", "año").contains(&ErrorTag::Tilde));
    }

    #[test]
    fn merged_groups_are_checked_separately() {
        // b/v and z/s at once match neither merged-group rule alone
        assert_eq!(classify_errors("bos", "voz"), vec![ErrorTag::Other]);
        // only c/s differ, and there is no double letter in play
        assert_eq!(classify_errors("sena", "cena"), vec![ErrorTag::CS]);
        // a doubled n where the target has ñ
        let tags = classify_errors("anno", "año");
        assert!(tags.contains(&ErrorTag::Double));
    }

    #[test]
    fn mismatch_never_empty() {
        for (a, t) in [("xyz", "hegemonía"), ("", "sol"), ("sol", "")] {
            assert!(!classify_errors(a, t).is_empty());
        }
        assert_eq!(classify_errors("garo", "perro"), vec![ErrorTag::Double]);
        assert_eq!(classify_errors("gato", "mesa"), vec![ErrorTag::Other]);
    }

    #[test]
    fn custom_rule_table() {
        fn always(_: &str, _: &str) -> bool {
            true
        }
        let rules = [Rule { tag: ErrorTag::H, matches: always }];
        assert_eq!(classify_with(&rules, "a", "b"), vec![ErrorTag::H]);
        assert_eq!(classify_with(&[], "a", "b"), vec![ErrorTag::Other]);
    }

    #[test]
    fn explanations_carry_localized_messages() {
        let explained = explain_errors("baca", "vaca", Locale::Es);
        assert_eq!(explained.len(), 1);
        assert_eq!(explained[0].tag, ErrorTag::BV);
        assert_eq!(explained[0].message, ErrorTag::BV.message(Locale::Es));
    }
}
