use std::sync::{mpsc, Arc};
use std::thread;

use client_logging::{client_debug, client_info};

use crate::client::{ClassifierApi, ReqwestClassifier};
use crate::{EngineError, EngineEvent, RequestId, ServiceConfig};

/// Receives engine events on the engine's runtime threads.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: EngineEvent);
}

pub struct ChannelEventSink {
    tx: mpsc::Sender<EngineEvent>,
}

impl ChannelEventSink {
    pub fn new(tx: mpsc::Sender<EngineEvent>) -> Self {
        Self { tx }
    }
}

impl EventSink for ChannelEventSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(event);
    }
}

enum EngineCommand {
    Classify { request_id: RequestId, text: String },
    CheckHealth,
}

/// Runs service calls on a background tokio runtime.
///
/// Dropping the handle shuts the engine down; requests still in flight are abandoned.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    pub fn new(config: ServiceConfig, sink: Arc<dyn EventSink>) -> Result<Self, EngineError> {
        client_info!(
            "Engine targeting {} via /{}",
            config.base_url,
            config.endpoint.path()
        );
        let api = Arc::new(ReqwestClassifier::new(config)?);
        Self::with_api(api, sink)
    }

    pub fn with_api(
        api: Arc<dyn ClassifierApi>,
        sink: Arc<dyn EventSink>,
    ) -> Result<Self, EngineError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
            .map_err(EngineError::Runtime)?;

        thread::Builder::new()
            .name("classifier-engine".to_string())
            .spawn(move || {
                while let Ok(command) = cmd_rx.recv() {
                    let api = api.clone();
                    let sink = sink.clone();
                    runtime.spawn(async move {
                        handle_command(api.as_ref(), command, sink.as_ref()).await;
                    });
                }
                client_debug!("Engine command channel closed");
            })
            .map_err(EngineError::Spawn)?;

        Ok(Self { cmd_tx })
    }

    pub fn classify(&self, request_id: RequestId, text: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::Classify {
            request_id,
            text: text.into(),
        });
    }

    pub fn check_health(&self) {
        let _ = self.cmd_tx.send(EngineCommand::CheckHealth);
    }
}

async fn handle_command(api: &dyn ClassifierApi, command: EngineCommand, sink: &dyn EventSink) {
    match command {
        EngineCommand::Classify { request_id, text } => {
            let result = api.classify(&text).await;
            sink.emit(EngineEvent::ClassificationCompleted { request_id, result });
        }
        EngineCommand::CheckHealth => {
            let report = api.check_health().await;
            sink.emit(EngineEvent::HealthChecked(report));
        }
    }
}
