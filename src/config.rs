use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::format::DEFAULT_ICON;
use crate::pipeline::Settings;

pub const DEFAULT_FEED_URL: &str = "https://data.swift.org/swift-evolution/proposals";
pub const DEFAULT_BASE_URL: &str = "https://github.com/apple/swift-evolution/blob/main/proposals";

#[derive(Debug, Deserialize, Default, PartialEq, Eq)]
pub struct AppConfig {
    pub feed_url: Option<String>,
    /// Read the catalog from this file instead of the network.
    pub feed_path: Option<PathBuf>,
    pub base_url: Option<String>,
    pub icon: Option<String>,
}

impl AppConfig {
    pub fn feed_url(&self) -> &str {
        self.feed_url.as_deref().unwrap_or(DEFAULT_FEED_URL)
    }

    pub fn settings(&self) -> Settings {
        Settings {
            base_url: self
                .base_url
                .clone()
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            icon: self.icon.clone().unwrap_or_else(|| DEFAULT_ICON.to_string()),
        }
    }

    /// Apply `EVOLUTION_FEED_URL` / `EVOLUTION_FEED_PATH` overrides.
    pub fn with_env(self) -> Self {
        self.with_env_from(|key| std::env::var(key).ok())
    }

    pub fn with_env_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(url) = lookup("EVOLUTION_FEED_URL") {
            self.feed_url = Some(url);
        }
        if let Some(path) = lookup("EVOLUTION_FEED_PATH") {
            self.feed_path = Some(PathBuf::from(path));
        }
        self
    }
}

/// A config that cannot be loaded falls back to defaults so a result
/// document is still produced.
pub fn resolve_config(loaded: Result<AppConfig>) -> AppConfig {
    match loaded {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(error = %format!("{err:#}"), "ignoring config file");
            AppConfig::default()
        }
    }
}

fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("evolution")
        .join("config.toml")
}

pub fn load_config() -> Result<AppConfig> {
    load_config_from(&config_path())
}

pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;
    let config: AppConfig = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.feed_url(), DEFAULT_FEED_URL);

        let settings = config.settings();
        assert_eq!(settings.base_url, DEFAULT_BASE_URL);
        assert_eq!(settings.icon, "icon.png");
    }

    #[test]
    fn file_values_override_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
feed_url = "https://mirror.example.org/proposals.json"
feed_path = "/tmp/proposals.json"
base_url = "https://mirror.example.org/proposals"
icon = "swift.png"
"#,
        )
        .unwrap();

        let config = load_config_from(&path).unwrap();
        assert_eq!(config.feed_url(), "https://mirror.example.org/proposals.json");
        assert_eq!(config.feed_path, Some(PathBuf::from("/tmp/proposals.json")));
        let settings = config.settings();
        assert_eq!(settings.base_url, "https://mirror.example.org/proposals");
        assert_eq!(settings.icon, "swift.png");
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "icon = \"custom.png\"\n").unwrap();

        let config = load_config_from(&path).unwrap();
        assert_eq!(config.feed_url(), DEFAULT_FEED_URL);
        assert_eq!(config.feed_path, None);
        assert_eq!(config.settings().icon, "custom.png");
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "feed_url = [").unwrap();

        let err = load_config_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse"));
    }

    #[test]
    fn malformed_file_resolves_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "icon = ").unwrap();

        let config = resolve_config(load_config_from(&path));
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.feed_url(), DEFAULT_FEED_URL);
    }

    #[test]
    fn valid_file_resolves_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "icon = \"swift.png\"\n").unwrap();

        let config = resolve_config(load_config_from(&path));
        assert_eq!(config.icon.as_deref(), Some("swift.png"));
    }

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let pairs: Vec<(String, String)> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| {
            pairs
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.clone())
        }
    }

    fn file_config() -> AppConfig {
        AppConfig {
            feed_url: Some("https://file.example.org/proposals.json".into()),
            feed_path: Some(PathBuf::from("/from/file.json")),
            base_url: None,
            icon: None,
        }
    }

    #[test]
    fn env_feed_url_overrides_file() {
        let config = file_config()
            .with_env_from(env(&[("EVOLUTION_FEED_URL", "https://env.example.org/feed")]));
        assert_eq!(config.feed_url(), "https://env.example.org/feed");
        assert_eq!(config.feed_path, Some(PathBuf::from("/from/file.json")));
    }

    #[test]
    fn env_feed_path_overrides_file() {
        let config =
            file_config().with_env_from(env(&[("EVOLUTION_FEED_PATH", "/from/env.json")]));
        assert_eq!(config.feed_path, Some(PathBuf::from("/from/env.json")));
        assert_eq!(config.feed_url(), "https://file.example.org/proposals.json");
    }

    #[test]
    fn no_env_keeps_file_values() {
        let config = file_config().with_env_from(env(&[]));
        assert_eq!(config, file_config());
    }
}
