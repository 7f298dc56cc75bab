//! Application configuration. API credentials, lookup mode, paths.

use crate::domain::LookupMode;
use serde::Deserialize;
use std::path::PathBuf;
use tracing::warn;

/// Default Gemini REST base.
pub const DEFAULT_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default model name.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Default per-request timeout for the language service.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Language service API key. Read from WORDLENS_API_KEY (or GEMINI_API_KEY).
    #[serde(default)]
    pub api_key: Option<String>,

    /// API base URL. Read from WORDLENS_API_URL.
    #[serde(default)]
    pub api_url: Option<String>,

    /// Model name. Read from WORDLENS_MODEL.
    #[serde(default)]
    pub model: Option<String>,

    /// "grounded" or "structured". Read from WORDLENS_MODE.
    #[serde(default)]
    pub mode: Option<String>,

    /// Directory for the history store. Read from WORDLENS_DATA_DIR.
    #[serde(default)]
    pub data_dir: Option<String>,

    /// TTS binary (name on PATH or path). Read from WORDLENS_SPEECH_COMMAND.
    #[serde(default)]
    pub speech_command: Option<String>,

    /// Set to disable speech output. Read from WORDLENS_SPEECH_DISABLED.
    #[serde(default)]
    pub speech_disabled: Option<bool>,

    /// Language service timeout in seconds. Read from WORDLENS_REQUEST_TIMEOUT_SECS.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,

    /// Comma-separated word-of-the-day candidates. Read from WORDLENS_WORDS.
    #[serde(default)]
    pub words: Option<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        if let Ok(path) = std::env::var("WORDLENS_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        c = c.add_source(config::Environment::with_prefix("WORDLENS").try_parsing(true));
        c.build()?.try_deserialize()
    }

    /// Returns the API key if configured. Falls back to GEMINI_API_KEY.
    pub fn api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .or_else(|| std::env::var("GEMINI_API_KEY").ok())
            .filter(|k| !k.trim().is_empty())
    }

    pub fn api_url_or_default(&self) -> String {
        self.api_url
            .clone()
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
    }

    pub fn model_or_default(&self) -> String {
        self.model.clone().unwrap_or_else(|| DEFAULT_MODEL.to_string())
    }

    /// Returns the lookup mode. Unknown values fall back to structured with a warning.
    pub fn mode_or_default(&self) -> LookupMode {
        match self.mode.as_deref().map(str::parse::<LookupMode>) {
            Some(Ok(mode)) => mode,
            Some(Err(e)) => {
                warn!(error = %e, "invalid WORDLENS_MODE, using default");
                LookupMode::default()
            }
            None => LookupMode::default(),
        }
    }

    /// Returns the data directory. Defaults to "./data".
    pub fn data_dir_or_default(&self) -> PathBuf {
        PathBuf::from(self.data_dir.as_deref().unwrap_or("./data"))
    }

    /// Path of the JSON key-value store holding the history.
    pub fn store_path(&self) -> PathBuf {
        self.data_dir_or_default().join("store.json")
    }

    /// Returns the configured speech command, or `None` to auto-detect.
    pub fn speech_command(&self) -> Option<&str> {
        self.speech_command.as_deref().filter(|c| !c.trim().is_empty())
    }

    pub fn is_speech_enabled(&self) -> bool {
        !self.speech_disabled.unwrap_or(false)
    }

    pub fn request_timeout_secs_or_default(&self) -> u64 {
        self.request_timeout_secs
            .filter(|s| *s > 0)
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS)
    }

    /// Custom word-of-the-day candidates; empty means the curated list.
    pub fn word_list(&self) -> Vec<String> {
        self.words
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(|w| w.trim().to_string())
            .filter(|w| !w.is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.api_url_or_default(), DEFAULT_API_URL);
        assert_eq!(cfg.model_or_default(), DEFAULT_MODEL);
        assert_eq!(cfg.mode_or_default(), LookupMode::Structured);
        assert_eq!(cfg.store_path(), PathBuf::from("./data").join("store.json"));
        assert_eq!(cfg.request_timeout_secs_or_default(), 30);
        assert!(cfg.is_speech_enabled());
        assert!(cfg.speech_command().is_none());
        assert!(cfg.word_list().is_empty());
    }

    #[test]
    fn test_word_list_split() {
        let cfg = AppConfig {
            words: Some(" sonder, ,zenith,".into()),
            ..Default::default()
        };
        assert_eq!(cfg.word_list(), vec!["sonder", "zenith"]);
    }

    #[test]
    fn test_mode_parsing() {
        let cfg = AppConfig {
            mode: Some("grounded".into()),
            ..Default::default()
        };
        assert_eq!(cfg.mode_or_default(), LookupMode::Grounded);

        let cfg = AppConfig {
            mode: Some("bogus".into()),
            ..Default::default()
        };
        assert_eq!(cfg.mode_or_default(), LookupMode::Structured);
    }

    #[test]
    fn test_blank_values_are_unset() {
        let cfg = AppConfig {
            api_key: Some("  ".into()),
            speech_command: Some("".into()),
            request_timeout_secs: Some(0),
            ..Default::default()
        };
        // GEMINI_API_KEY may be set in the environment; only check the explicit blank is ignored.
        assert_ne!(cfg.api_key().as_deref(), Some("  "));
        assert!(cfg.speech_command().is_none());
        assert_eq!(cfg.request_timeout_secs_or_default(), 30);
    }

    #[test]
    fn test_explicit_key_wins() {
        let cfg = AppConfig {
            api_key: Some("abc".into()),
            ..Default::default()
        };
        assert_eq!(cfg.api_key().as_deref(), Some("abc"));
    }
}
