//! Command-line front end.

use std::io::Write;
use std::path::PathBuf;

use anyhow::bail;
use clap::{Parser, Subcommand};
use serde::Serialize;
use spelling_core::{
    CharDiffToken, DiffStatus, Judgment, LedgerStore, Locale, PracticeSession, Verdict, WordStats,
};

use crate::config::Config;

#[derive(Debug, Parser)]
#[command(name = "spelling-practice", about = "Spanish spelling practice and review")]
pub struct Cli {
    /// Progress database path (overrides PRACTICE_DB_PATH)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Message language: en or es (overrides PRACTICE_LOCALE)
    #[arg(long, global = true)]
    pub locale: Option<String>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Judge an attempt at a word and record the result
    Check { target: String, attempt: String },
    /// Show statistics for the given words, or overall totals
    Stats { words: Vec<String> },
    /// List words due for review
    Due,
    /// Show study streaks
    Streak,
    /// Erase all progress
    Reset {
        /// Confirm the reset
        #[arg(long)]
        yes: bool,
    },
}

impl Cli {
    /// Apply command-line overrides on top of `config`.
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(db) = &self.db {
            config.db_path = db.clone();
        }
        if let Some(raw) = &self.locale {
            match Locale::from_str(raw) {
                Some(locale) => config.locale = locale,
                None => tracing::warn!(value = %raw, "unknown locale, keeping {}", config.locale.as_str()),
            }
        }
        config
    }
}

#[derive(Serialize)]
struct WordReport<'a> {
    word: &'a str,
    #[serde(flatten)]
    stats: WordStats,
}

#[derive(Serialize)]
struct Totals {
    words: usize,
    mastered: usize,
    due: usize,
}

/// Run one command against `session`, writing to `out`.
pub fn execute<S, W>(command: &Command, session: &mut PracticeSession<S>, json: bool, out: &mut W) -> anyhow::Result<()>
where
    S: LedgerStore,
    W: Write,
{
    match command {
        Command::Check { target, attempt } => {
            let judgment = session.submit(target, attempt);
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&judgment)?)?;
            } else {
                write_judgment(out, &judgment, session.locale())?;
            }
        }
        Command::Stats { words } if words.is_empty() => {
            let ledger = session.ledger();
            let totals = Totals {
                words: ledger.word_count(),
                mastered: ledger.mastered_count(),
                due: ledger.due_count(),
            };
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&totals)?)?;
            } else {
                writeln!(out, "words: {}  mastered: {}  due: {}", totals.words, totals.mastered, totals.due)?;
            }
        }
        Command::Stats { words } => {
            let ledger = session.ledger();
            let reports: Vec<WordReport> = words
                .iter()
                .map(|w| WordReport {
                    word: w,
                    stats: ledger.word_stats(w),
                })
                .collect();
            let category = ledger.category_stats(words);
            if json {
                let body = serde_json::json!({ "words": reports, "summary": category });
                writeln!(out, "{}", serde_json::to_string_pretty(&body)?)?;
            } else {
                for r in &reports {
                    writeln!(
                        out,
                        "{}: {}/{} correct ({:.0}%){}",
                        r.word,
                        r.stats.correct,
                        r.stats.total,
                        r.stats.accuracy * 100.0,
                        if r.stats.mastered { " mastered" } else { "" }
                    )?;
                }
                writeln!(
                    out,
                    "{} of {} mastered ({}%), {} practiced",
                    category.mastered, category.total, category.percent, category.practiced
                )?;
            }
        }
        Command::Due => {
            let due = session.ledger().words_for_review();
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&due)?)?;
            } else {
                for word in &due {
                    writeln!(out, "{word}")?;
                }
            }
        }
        Command::Streak => {
            let streak = session.ledger().streak_stats();
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&streak)?)?;
            } else {
                writeln!(
                    out,
                    "current: {}  longest: {}  days: {}",
                    streak.current_streak, streak.longest_streak, streak.total_days
                )?;
            }
        }
        Command::Reset { yes } => {
            if !yes {
                bail!("refusing to erase progress without --yes");
            }
            session.ledger_mut().reset();
            writeln!(out, "progress erased")?;
        }
    }
    Ok(())
}

fn write_judgment<W: Write>(out: &mut W, judgment: &Judgment, locale: Locale) -> std::io::Result<()> {
    let headline = match (judgment.verdict, locale) {
        (Verdict::Perfect, Locale::En) => "Perfect!".to_string(),
        (Verdict::Perfect, Locale::Es) => "¡Perfecto!".to_string(),
        (Verdict::AccentsOnly, Locale::En) => "Right letters! Check the accents.".to_string(),
        (Verdict::AccentsOnly, Locale::Es) => "¡Letras correctas! Revisa los acentos.".to_string(),
        (Verdict::Almost, Locale::En) => format!("Almost! ({:.0}% match)", judgment.comparison.similarity * 100.0),
        (Verdict::Almost, Locale::Es) => format!("¡Casi! ({:.0}% de coincidencia)", judgment.comparison.similarity * 100.0),
        (Verdict::Incorrect, Locale::En) => format!("Incorrect. Correct spelling: {}", judgment.target),
        (Verdict::Incorrect, Locale::Es) => format!("Incorrecto. Se escribe: {}", judgment.target),
    };
    writeln!(out, "{headline}")?;

    if !judgment.diff.is_empty() {
        writeln!(out, "  {}", render_diff(&judgment.diff))?;
    }
    for error in &judgment.errors {
        writeln!(out, "  [{}] {}", error.tag.as_str(), error.message)?;
    }
    Ok(())
}

/// Plain-text diff: missing letters in `[ ]`, extra letters in `( )`.
pub fn render_diff(tokens: &[CharDiffToken]) -> String {
    let mut line = String::new();
    for token in tokens {
        match token.status {
            DiffStatus::Correct => line.push(token.character),
            DiffStatus::Missing => {
                line.push('[');
                line.push(token.character);
                line.push(']');
            }
            DiffStatus::Extra => {
                line.push('(');
                line.push(token.character);
                line.push(')');
            }
        }
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use spelling_core::compute_char_diff;

    #[test]
    fn render_marks_missing_and_extra() {
        assert_eq!(render_diff(&compute_char_diff("baca", "vaca")), "(b)[v]aca");
        assert_eq!(render_diff(&compute_char_diff("pero", "perro")), "pe[r]ro");
    }

    #[test]
    fn parses_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["spelling-practice", "check", "vaca", "baca", "--json"]).unwrap();
        assert!(cli.json);
        assert!(matches!(cli.command, Command::Check { .. }));
    }
}
