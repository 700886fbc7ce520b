//! Application configuration. Language, coverage thresholds, output.
//!
//! Sources, lowest precedence first: optional file named by
//! `MINUTES_CHECK_CONFIG`, then `MINUTES_CHECK_*` environment variables
//! (`.env` is loaded first). Command-line flags override both.

use crate::domain::{DomainError, Language};
use serde::Deserialize;

pub const DEFAULT_PASS_THRESHOLD: f64 = 0.80;
pub const DEFAULT_WARN_THRESHOLD: f64 = 0.50;
pub const DEFAULT_OVERLAP_THRESHOLD: f64 = 0.5;
pub const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Report language (`en` or `zh_TW`). Inferred from the notes when unset. Read from MINUTES_CHECK_LANG.
    #[serde(default)]
    pub lang: Option<String>,

    /// Coverage ratio at or above which a category passes. Read from MINUTES_CHECK_PASS_THRESHOLD.
    #[serde(default)]
    pub pass_threshold: Option<f64>,

    /// Coverage ratio at or above which a category only warns. Read from MINUTES_CHECK_WARN_THRESHOLD.
    #[serde(default)]
    pub warn_threshold: Option<f64>,

    /// Token overlap a decision/action sentence needs against one notes field.
    #[serde(default)]
    pub overlap_threshold: Option<f64>,

    /// CJK share of letters at which notes are treated as zh_TW.
    #[serde(default)]
    pub cjk_ratio: Option<f64>,

    /// Default tracing filter when RUST_LOG is unset.
    #[serde(default)]
    pub log_level: Option<String>,

    /// Emit the JSON report instead of text.
    #[serde(default)]
    pub json: Option<bool>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let file = std::env::var("MINUTES_CHECK_CONFIG").ok();
        Self::load_from(file.as_deref())
    }

    /// Environment plus an explicit config file, if any.
    pub fn load_from(file: Option<&str>) -> Result<Self, config::ConfigError> {
        let mut c = config::Config::builder();
        if let Some(path) = file {
            c = c.add_source(config::File::with_name(path));
        }
        c = c.add_source(config::Environment::with_prefix("MINUTES_CHECK").try_parsing(true));
        c.build()?.try_deserialize()
    }

    /// Configured language, if any. An unknown tag is a config error.
    pub fn language(&self) -> Result<Option<Language>, DomainError> {
        self.lang
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| s.parse::<Language>().map_err(DomainError::Config))
            .transpose()
    }

    pub fn pass_threshold_or_default(&self) -> f64 {
        self.pass_threshold.unwrap_or(DEFAULT_PASS_THRESHOLD)
    }

    pub fn warn_threshold_or_default(&self) -> f64 {
        self.warn_threshold.unwrap_or(DEFAULT_WARN_THRESHOLD)
    }

    pub fn overlap_threshold_or_default(&self) -> f64 {
        self.overlap_threshold.unwrap_or(DEFAULT_OVERLAP_THRESHOLD)
    }

    pub fn cjk_ratio_or_default(&self) -> f64 {
        self.cjk_ratio
            .unwrap_or(crate::domain::language::DEFAULT_CJK_RATIO)
    }

    pub fn log_level_or_default(&self) -> String {
        self.log_level
            .clone()
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string())
    }

    pub fn json_or_default(&self) -> bool {
        self.json.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.pass_threshold_or_default(), 0.80);
        assert_eq!(cfg.warn_threshold_or_default(), 0.50);
        assert_eq!(cfg.overlap_threshold_or_default(), 0.5);
        assert_eq!(cfg.cjk_ratio_or_default(), 0.3);
        assert_eq!(cfg.log_level_or_default(), "warn");
        assert!(!cfg.json_or_default());
        assert_eq!(cfg.language().unwrap(), None);
    }

    #[test]
    fn test_language_tag() {
        let cfg = AppConfig {
            lang: Some("zh-TW".into()),
            ..Default::default()
        };
        assert_eq!(cfg.language().unwrap(), Some(Language::ZhTw));

        let bad = AppConfig {
            lang: Some("fr".into()),
            ..Default::default()
        };
        assert!(matches!(bad.language(), Err(DomainError::Config(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut f = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(f, "lang = \"en\"\npass_threshold = 0.9\njson = true").unwrap();

        let path = f.path().to_string_lossy().to_string();
        let cfg = AppConfig::load_from(Some(&path)).unwrap();
        assert_eq!(cfg.language().unwrap(), Some(Language::En));
        assert_eq!(cfg.pass_threshold_or_default(), 0.9);
        assert!(cfg.json_or_default());
        assert_eq!(cfg.warn_threshold_or_default(), 0.50);
    }
}
