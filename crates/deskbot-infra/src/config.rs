//! Configuration resolution for Deskbot.
//!
//! The data directory defaults to `~/.deskbot` (override with
//! `DESKBOT_DATA_DIR`). `config.toml` inside it provides model settings;
//! a missing or malformed file falls back to defaults. The Groq API key is
//! read from the `GROQ_API_KEY` environment variable and never written to
//! disk.

use std::path::{Path, PathBuf};

use secrecy::SecretString;

use deskbot_types::config::AppConfig;

/// Resolve the data directory: `DESKBOT_DATA_DIR`, else `~/.deskbot`.
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("DESKBOT_DATA_DIR") {
        return PathBuf::from(dir);
    }
    dirs::home_dir()
        .map(|home| home.join(".deskbot"))
        .unwrap_or_else(|| PathBuf::from(".deskbot"))
}

/// Load configuration from `{data_dir}/config.toml`.
///
/// - Missing file: returns [`AppConfig::default()`].
/// - Unreadable or unparseable file: logs a warning and returns the default.
pub async fn load_config(data_dir: &Path) -> AppConfig {
    let config_path = data_dir.join("config.toml");

    let content = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(
                "No config.toml found at {}, using defaults",
                config_path.display()
            );
            return AppConfig::default();
        }
        Err(err) => {
            tracing::warn!(
                "Failed to read {}: {err}, using defaults",
                config_path.display()
            );
            return AppConfig::default();
        }
    };

    match toml::from_str::<AppConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            AppConfig::default()
        }
    }
}

/// Read the Groq API credential from the environment.
pub fn api_key_from_env() -> Option<SecretString> {
    std::env::var("GROQ_API_KEY")
        .ok()
        .filter(|key| !key.is_empty())
        .map(SecretString::from)
}

/// Database URL for the configured (or default) SQLite path.
pub fn database_url(data_dir: &Path, config: &AppConfig) -> String {
    let db_path = config
        .database_path
        .clone()
        .unwrap_or_else(|| data_dir.join("deskbot.db"));
    format!("sqlite://{}?mode=rwc", db_path.display())
}

/// Path to the FAQ file: config override or `{data_dir}/faqs.json`.
pub fn faq_path(data_dir: &Path, config: &AppConfig) -> PathBuf {
    config
        .faq_path
        .clone()
        .unwrap_or_else(|| data_dir.join("faqs.json"))
}
