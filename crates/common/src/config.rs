//! Application configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Upper bound of the characters-per-line slider. Values above this
/// are clamped on load; 0 disables reflow entirely.
pub const MAX_CHARS_PER_LINE_LIMIT: u32 = 100;

/// Global application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Transcription service defaults.
    pub transcription: TranscriptionDefaults,

    /// Subtitle formatting defaults.
    pub subtitles: SubtitleDefaults,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Default transcription service parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptionDefaults {
    /// Model identifier sent to the service.
    pub model: String,

    /// Environment variable holding the API key.
    pub api_key_env: String,
}

/// Default subtitle formatting parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubtitleDefaults {
    /// Maximum characters per rendered line, in `[0, 100]`.
    /// 0 means no limit (reflow disabled).
    pub max_chars_per_line: u32,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "subsmith=debug,warn").
    pub level: String,

    /// Whether to output structured JSON logs.
    pub json: bool,

    /// Optional log file path.
    pub file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            transcription: TranscriptionDefaults::default(),
            subtitles: SubtitleDefaults::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for TranscriptionDefaults {
    fn default() -> Self {
        Self {
            model: "gemini-2.5-flash".to_string(),
            api_key_env: "GEMINI_API_KEY".to_string(),
        }
    }
}

impl Default for SubtitleDefaults {
    fn default() -> Self {
        Self {
            max_chars_per_line: 42,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            file: None,
        }
    }
}

impl AppConfig {
    /// Load config from the standard location, falling back to defaults.
    pub fn load() -> Self {
        let config_path = config_file_path();
        if config_path.exists() {
            match std::fs::read_to_string(&config_path) {
                Ok(content) => match serde_json::from_str::<AppConfig>(&content) {
                    Ok(config) => return config.clamped(),
                    Err(e) => {
                        tracing::warn!("Failed to parse config at {:?}: {}", config_path, e);
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to read config at {:?}: {}", config_path, e);
                }
            }
        }
        Self::default()
    }

    /// Save config to the standard location.
    pub fn save(&self) -> Result<(), std::io::Error> {
        let config_path = config_file_path();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(config_path, json)
    }

    /// Clamp out-of-range values to their valid domain.
    fn clamped(mut self) -> Self {
        if self.subtitles.max_chars_per_line > MAX_CHARS_PER_LINE_LIMIT {
            tracing::warn!(
                value = self.subtitles.max_chars_per_line,
                "max_chars_per_line out of range, clamping to {}",
                MAX_CHARS_PER_LINE_LIMIT
            );
            self.subtitles.max_chars_per_line = MAX_CHARS_PER_LINE_LIMIT;
        }
        self
    }
}

/// Standard config file location.
fn config_file_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("subsmith").join("config.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.subtitles.max_chars_per_line, 42);
        assert_eq!(config.transcription.model, "gemini-2.5-flash");
        assert_eq!(config.transcription.api_key_env, "GEMINI_API_KEY");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_clamp_max_chars() {
        let mut config = AppConfig::default();
        config.subtitles.max_chars_per_line = 250;
        let clamped = config.clamped();
        assert_eq!(clamped.subtitles.max_chars_per_line, 100);
    }

    #[test]
    fn test_config_round_trips_through_json() {
        let config = AppConfig::default();
        let json = serde_json::to_string_pretty(&config).unwrap();
        let parsed: AppConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(
            parsed.subtitles.max_chars_per_line,
            config.subtitles.max_chars_per_line
        );
        assert_eq!(parsed.transcription.model, config.transcription.model);
    }
}
