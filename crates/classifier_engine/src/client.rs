use std::time::Instant;

use client_logging::{client_debug, client_info, client_warn, TextShape};

use crate::wire::{interpret_classify, interpret_health, ClassifyRequest};
use crate::{Classification, ClassifyError, EngineError, FailureKind, HealthReport, ServiceConfig};

/// The classification service as seen by the engine.
#[async_trait::async_trait]
pub trait ClassifierApi: Send + Sync {
    async fn classify(&self, text: &str) -> Result<Classification, ClassifyError>;

    /// Never fails; an unreachable service is reported as such.
    async fn check_health(&self) -> HealthReport;
}

#[derive(Debug, Clone)]
pub struct ReqwestClassifier {
    config: ServiceConfig,
    client: reqwest::Client,
}

impl ReqwestClassifier {
    pub fn new(config: ServiceConfig) -> Result<Self, EngineError> {
        let client = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()?;
        Ok(Self { config, client })
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }
}

#[async_trait::async_trait]
impl ClassifierApi for ReqwestClassifier {
    async fn classify(&self, text: &str) -> Result<Classification, ClassifyError> {
        let url = self.config.classify_url()?;
        let started = Instant::now();
        client_debug!("POST {} {}", url, TextShape::of(text));

        let response = self
            .client
            .post(url)
            .json(&ClassifyRequest::new(self.config.endpoint, text))
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(map_reqwest_error)?;
        let result = interpret_classify(self.config.endpoint, status, &body);

        match &result {
            Ok(classification) => client_info!(
                "Classified as {:?} (confidence {:?}) in {:?}",
                classification.label,
                classification.confidence,
                started.elapsed()
            ),
            Err(err) => client_warn!(
                "Classification rejected after {:?}: {}",
                started.elapsed(),
                err
            ),
        }
        result
    }

    async fn check_health(&self) -> HealthReport {
        let url = match self.config.health_url() {
            Ok(url) => url,
            Err(err) => {
                client_warn!("Health check skipped: {}", err);
                return HealthReport::unreachable();
            }
        };

        let body = match self.client.get(url).send().await {
            Ok(response) => response.bytes().await,
            Err(err) => Err(err),
        };
        let report = match body {
            Ok(body) => interpret_health(&body),
            Err(err) => {
                client_warn!("Health check failed: {}", map_reqwest_error(err));
                HealthReport::unreachable()
            }
        };
        if !report.errors.is_empty() {
            client_warn!("Service reports errors: {:?}", report.errors);
        }
        client_info!("Health state {:?}", report.state);
        report
    }
}

fn map_reqwest_error(err: reqwest::Error) -> ClassifyError {
    if err.is_timeout() {
        return ClassifyError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_builder() {
        return ClassifyError::new(FailureKind::InvalidUrl, err.to_string());
    }
    ClassifyError::new(FailureKind::Network, err.to_string())
}
