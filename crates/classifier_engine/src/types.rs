use std::fmt;
use std::io;

use thiserror::Error;

pub type RequestId = u64;

/// A successful prediction as reported by the service.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub label: String,
    /// Clamped into `[0, 1]`; absent when the service sent none.
    pub confidence: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthState {
    Healthy,
    /// Reachable, but the model is not fully loaded.
    Degraded,
    /// Answered with any other status value (or none).
    Unhealthy { status: Option<String> },
    Unreachable,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthReport {
    pub state: HealthState,
    pub model_loaded: Option<bool>,
    pub errors: Vec<String>,
}

impl HealthReport {
    pub(crate) fn unreachable() -> Self {
        Self {
            state: HealthState::Unreachable,
            model_loaded: None,
            errors: Vec::new(),
        }
    }

    pub fn is_online(&self) -> bool {
        matches!(self.state, HealthState::Healthy | HealthState::Degraded)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    ClassificationCompleted {
        request_id: RequestId,
        result: Result<Classification, ClassifyError>,
    },
    HealthChecked(HealthReport),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifyError {
    pub kind: FailureKind,
    pub message: String,
}

impl ClassifyError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// True when no usable response came back from the service.
    pub fn is_connectivity(&self) -> bool {
        !matches!(self.kind, FailureKind::Rejected { .. })
    }
}

impl fmt::Display for ClassifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for ClassifyError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The configured base URL does not form a valid endpoint URL.
    InvalidUrl,
    /// The service answered with a non-2xx status or a failure indicator.
    Rejected { status: u16 },
    Timeout,
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::Rejected { status } => write!(f, "rejected (http status {status})"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
    #[error("failed to start async runtime: {0}")]
    Runtime(#[source] io::Error),
    #[error("failed to spawn engine thread: {0}")]
    Spawn(#[source] io::Error),
}
