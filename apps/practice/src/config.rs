//! Environment configuration.

use std::path::PathBuf;

use spelling_core::Locale;

pub const DB_PATH_VAR: &str = "PRACTICE_DB_PATH";
pub const RESET_HOUR_VAR: &str = "PRACTICE_DAILY_RESET_HOUR";
pub const LOCALE_VAR: &str = "PRACTICE_LOCALE";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub db_path: PathBuf,
    /// Hour (0-23) at which a new study day starts.
    pub daily_reset_hour: u32,
    pub locale: Locale,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
            daily_reset_hour: 0,
            locale: Locale::En,
        }
    }
}

impl Config {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`. Invalid values fall back to the
    /// defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup(DB_PATH_VAR).filter(|p| !p.trim().is_empty()) {
            config.db_path = PathBuf::from(path);
        }

        if let Some(raw) = lookup(RESET_HOUR_VAR) {
            match raw.trim().parse::<u32>() {
                Ok(hour) if hour < 24 => config.daily_reset_hour = hour,
                _ => tracing::warn!(value = %raw, "invalid {}, using 0", RESET_HOUR_VAR),
            }
        }

        if let Some(raw) = lookup(LOCALE_VAR) {
            match Locale::from_str(&raw) {
                Some(locale) => config.locale = locale,
                None => tracing::warn!(value = %raw, "unknown {}, using en", LOCALE_VAR),
            }
        }

        config
    }
}

fn default_db_path() -> PathBuf {
    // Use app data directory for production, fallback to current dir
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("spelling-bee")
        .join("progress.db")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let config = config_from(&[]);
        assert_eq!(config.daily_reset_hour, 0);
        assert_eq!(config.locale, Locale::En);
        assert!(config.db_path.ends_with("spelling-bee/progress.db"));
    }

    #[test]
    fn reads_values() {
        let config = config_from(&[
            (DB_PATH_VAR, "/tmp/p.db"),
            (RESET_HOUR_VAR, "4"),
            (LOCALE_VAR, "es"),
        ]);
        assert_eq!(config.db_path, PathBuf::from("/tmp/p.db"));
        assert_eq!(config.daily_reset_hour, 4);
        assert_eq!(config.locale, Locale::Es);
    }

    #[test]
    fn invalid_values_fall_back() {
        let config = config_from(&[(RESET_HOUR_VAR, "25"), (LOCALE_VAR, "klingon")]);
        assert_eq!(config.daily_reset_hour, 0);
        assert_eq!(config.locale, Locale::En);
    }
}
