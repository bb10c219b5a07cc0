//! Classifier engine: HTTP access to the classification service and effect execution.
mod client;
mod config;
mod engine;
mod types;
mod wire;

pub use client::{ClassifierApi, ReqwestClassifier};
pub use config::{Endpoint, ServiceConfig, DEFAULT_BASE_URL};
pub use engine::{ChannelEventSink, EngineHandle, EventSink};
pub use types::{
    Classification, ClassifyError, EngineError, EngineEvent, FailureKind, HealthReport,
    HealthState, RequestId,
};
