//! Configuration types for Deskbot.
//!
//! `AppConfig` represents the optional `config.toml` in the data directory.
//! All fields have sensible defaults; the API credential is deliberately
//! absent here and only ever read from the environment.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Top-level configuration for the Deskbot backend.
///
/// Loaded from `{data_dir}/config.toml`. All fields have defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Model used for reply generation and summaries.
    #[serde(default = "default_model")]
    pub model: String,

    /// Sampling temperature for reply generation.
    #[serde(default = "default_temperature")]
    pub temperature: f64,

    /// Maximum tokens per generated reply.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Path to the FAQ JSON file. Defaults to `{data_dir}/faqs.json`.
    #[serde(default)]
    pub faq_path: Option<PathBuf>,

    /// Path to the SQLite database. Defaults to `{data_dir}/deskbot.db`.
    #[serde(default)]
    pub database_path: Option<PathBuf>,
}

fn default_model() -> String {
    "llama-3.3-70b-versatile".to_string()
}

fn default_temperature() -> f64 {
    0.7
}

fn default_max_tokens() -> u32 {
    300
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            faq_path: None,
            database_path: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_config_default_values() {
        let config = AppConfig::default();
        assert_eq!(config.model, "llama-3.3-70b-versatile");
        assert!((config.temperature - 0.7).abs() < f64::EPSILON);
        assert_eq!(config.max_tokens, 300);
        assert!(config.faq_path.is_none());
        assert!(config.database_path.is_none());
    }

    #[test]
    fn test_app_config_deserialize_empty_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.model, "llama-3.3-70b-versatile");
        assert_eq!(config.max_tokens, 300);
    }

    #[test]
    fn test_app_config_deserialize_with_values() {
        let toml_str = r#"
model = "llama-3.1-8b-instant"
temperature = 0.2
max_tokens = 512
faq_path = "/srv/deskbot/faqs.json"
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.model, "llama-3.1-8b-instant");
        assert!((config.temperature - 0.2).abs() < f64::EPSILON);
        assert_eq!(config.max_tokens, 512);
        assert_eq!(
            config.faq_path.as_deref(),
            Some(std::path::Path::new("/srv/deskbot/faqs.json"))
        );
        assert!(config.database_path.is_none());
    }
}
