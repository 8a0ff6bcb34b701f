use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

const QUALIFIER: &str = "com";
const ORG: &str = "budget";
const APP: &str = "budget";
const SETTINGS_FILE: &str = "settings.json";

fn default_auth_url() -> String {
    budget_config::DEFAULT_AUTH_URL.to_string()
}

fn default_timeout() -> u64 {
    budget_config::DEFAULT_REQUEST_TIMEOUT_SECS
}

/// Where and how to reach the hosted backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackendSettings {
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub database_url: String,
    #[serde(default = "default_auth_url")]
    pub auth_url: String,
    #[serde(default = "default_timeout")]
    pub request_timeout_secs: u64,
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            database_url: String::new(),
            auth_url: default_auth_url(),
            request_timeout_secs: default_timeout(),
        }
    }
}

impl BackendSettings {
    pub fn is_configured(&self) -> bool {
        !self.api_key.trim().is_empty() && !self.database_url.trim().is_empty()
    }

    pub fn request_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(budget_config::clamp_timeout_secs(
            self.request_timeout_secs,
        ))
    }

    /// Settings file in the platform config dir, overridden by the environment.
    pub fn load() -> Result<Self> {
        let path = settings_path()?;
        Self::load_from(&path, |key| std::env::var(key).ok())
    }

    /// Reads `path` if it exists, then applies overrides looked up via `env`.
    pub fn load_from(path: &Path, env: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut settings = if path.exists() {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read settings {}", path.display()))?;
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse settings {}", path.display()))?
        } else {
            tracing::debug!("no settings file at {}, using defaults", path.display());
            Self::default()
        };

        let overrides = [
            (budget_config::ENV_API_KEY, &mut settings.api_key),
            (budget_config::ENV_DATABASE_URL, &mut settings.database_url),
            (budget_config::ENV_AUTH_URL, &mut settings.auth_url),
        ];
        for (key, slot) in overrides {
            if let Some(value) = env(key).filter(|v| !v.trim().is_empty()) {
                *slot = value;
            }
        }

        Ok(settings)
    }
}

fn settings_path() -> Result<PathBuf> {
    let proj_dirs = ProjectDirs::from(QUALIFIER, ORG, APP)
        .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
    Ok(proj_dirs.config_dir().join(SETTINGS_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let s = BackendSettings::load_from(&dir.path().join("nope.json"), |_| None).unwrap();
        assert_eq!(s, BackendSettings::default());
        assert!(!s.is_configured());
    }

    #[test]
    fn environment_overrides_file_values() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("settings.json");
        fs::write(
            &path,
            r#"{"apiKey":"from-file","databaseUrl":"https://db.example.com","requestTimeoutSecs":5}"#,
        )
        .unwrap();

        let s = BackendSettings::load_from(&path, |key| {
            (key == budget_config::ENV_API_KEY).then(|| "from-env".to_string())
        })
        .unwrap();

        assert_eq!(s.api_key, "from-env");
        assert_eq!(s.database_url, "https://db.example.com");
        assert_eq!(s.auth_url, budget_config::DEFAULT_AUTH_URL);
        assert_eq!(s.request_timeout(), std::time::Duration::from_secs(5));
        assert!(s.is_configured());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(BackendSettings::load_from(&path, |_| None).is_err());
    }
}
