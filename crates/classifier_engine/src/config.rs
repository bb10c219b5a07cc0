use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::{ClassifyError, FailureKind};

pub const DEFAULT_BASE_URL: &str = "http://localhost:5001";

/// Which classification route the service exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Endpoint {
    /// `POST /predict` with `{"text": ...}`; replies carry a `success` flag.
    #[default]
    Predict,
    /// `POST /process` with `{"input": ...}`; HTTP status signals success.
    Process,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Predict => "predict",
            Endpoint::Process => "process",
        }
    }

    /// Whether a 2xx reply must also carry `"success": true`.
    pub(crate) fn requires_success_flag(self) -> bool {
        matches!(self, Endpoint::Predict)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub base_url: String,
    pub endpoint: Endpoint,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            endpoint: Endpoint::default(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl ServiceConfig {
    pub fn classify_url(&self) -> Result<Url, ClassifyError> {
        self.url_for(self.endpoint.path())
    }

    pub fn health_url(&self) -> Result<Url, ClassifyError> {
        self.url_for("health")
    }

    fn url_for(&self, path: &str) -> Result<Url, ClassifyError> {
        let base = self.base_url.trim().trim_end_matches('/');
        Url::parse(&format!("{base}/{path}"))
            .map_err(|err| ClassifyError::new(FailureKind::InvalidUrl, err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_are_joined_onto_base_path() {
        let config = ServiceConfig {
            base_url: "http://example.com/api/".to_string(),
            endpoint: Endpoint::Process,
            ..ServiceConfig::default()
        };
        assert_eq!(
            config.classify_url().unwrap().as_str(),
            "http://example.com/api/process"
        );
        assert_eq!(
            config.health_url().unwrap().as_str(),
            "http://example.com/api/health"
        );
    }

    #[test]
    fn default_targets_local_predict_route() {
        let config = ServiceConfig::default();
        assert_eq!(
            config.classify_url().unwrap().as_str(),
            "http://localhost:5001/predict"
        );
    }

    #[test]
    fn garbage_base_url_is_invalid() {
        let config = ServiceConfig {
            base_url: "not a url".to_string(),
            ..ServiceConfig::default()
        };
        assert_eq!(
            config.classify_url().unwrap_err().kind,
            FailureKind::InvalidUrl
        );
    }
}
