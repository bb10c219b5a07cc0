use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use classifier_engine::{Endpoint, ServiceConfig, DEFAULT_BASE_URL};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub(crate) const CONFIG_FILENAME: &str = "classifier.ron";

/// Contents of `classifier.ron`. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct AppConfig {
    pub base_url: String,
    pub endpoint: Endpoint,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
    pub log_to_file: bool,
    /// Font with Sinhala glyphs; searched for in system font folders when unset.
    pub font_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        let service = ServiceConfig::default();
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            endpoint: service.endpoint,
            connect_timeout_secs: service.connect_timeout.as_secs(),
            request_timeout_secs: service.request_timeout.as_secs(),
            log_to_file: false,
            font_path: None,
        }
    }
}

impl AppConfig {
    pub(crate) fn service_config(&self) -> ServiceConfig {
        ServiceConfig {
            base_url: self.base_url.trim().to_string(),
            endpoint: self.endpoint,
            connect_timeout: Duration::from_secs(self.connect_timeout_secs.max(1)),
            request_timeout: Duration::from_secs(self.request_timeout_secs.max(1)),
        }
    }
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to read {path:?}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: ron::error::SpannedError,
    },
}

/// Reads `classifier.ron` from `dir`. A missing file yields the defaults.
pub(crate) fn load_config(dir: &Path) -> Result<AppConfig, ConfigError> {
    let path = dir.join(CONFIG_FILENAME);
    let content = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(AppConfig::default()),
        Err(source) => return Err(ConfigError::Read { path, source }),
    };
    ron::from_str(&content).map_err(|source| ConfigError::Parse { path, source })
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let temp = TempDir::new().unwrap();
        let config = load_config(temp.path()).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.service_config(), ServiceConfig::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILENAME),
            "(base_url: \"http://10.0.0.5:5002\", endpoint: Process)",
        )
        .unwrap();

        let config = load_config(temp.path()).unwrap();
        assert_eq!(config.base_url, "http://10.0.0.5:5002");
        assert_eq!(config.endpoint, Endpoint::Process);
        assert_eq!(config.request_timeout_secs, 30);
        assert!(!config.log_to_file);
        assert_eq!(config.font_path, None);
    }

    #[test]
    fn font_path_can_be_configured() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILENAME),
            "(font_path: Some(\"/opt/fonts/NotoSansSinhala-Regular.ttf\"))",
        )
        .unwrap();

        let config = load_config(temp.path()).unwrap();
        assert_eq!(
            config.font_path,
            Some(PathBuf::from("/opt/fonts/NotoSansSinhala-Regular.ttf"))
        );
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn zero_timeouts_are_raised_to_one_second() {
        let config = AppConfig {
            connect_timeout_secs: 0,
            request_timeout_secs: 0,
            ..AppConfig::default()
        };
        let service = config.service_config();
        assert_eq!(service.connect_timeout, Duration::from_secs(1));
        assert_eq!(service.request_timeout, Duration::from_secs(1));
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILENAME), "(base_url: ").unwrap();

        let err = load_config(temp.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
