use std::sync::{mpsc, Arc};

use classifier_core::{ClientError, Effect, Msg, Prediction, ServerStatus};
use classifier_engine::{
    EngineError, EngineEvent, EngineHandle, EventSink, HealthState, ServiceConfig,
};
use client_logging::{client_info, client_warn};
use eframe::egui;

/// Executes core effects on the engine and feeds completions back as messages.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(
        config: ServiceConfig,
        msg_tx: mpsc::Sender<Msg>,
        repaint: egui::Context,
    ) -> Result<Self, EngineError> {
        let sink = Arc::new(MsgSink { msg_tx, repaint });
        let engine = EngineHandle::new(config, sink)?;
        Ok(Self { engine })
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Classify { request_id, text } => {
                    client_info!("Classify request_id={} text_len={}", request_id, text.len());
                    self.engine.classify(request_id, text);
                }
                Effect::CheckHealth => self.engine.check_health(),
            }
        }
    }
}

/// Forwards engine events into the UI inbox and wakes the UI.
struct MsgSink {
    msg_tx: mpsc::Sender<Msg>,
    repaint: egui::Context,
}

impl EventSink for MsgSink {
    fn emit(&self, event: EngineEvent) {
        if self.msg_tx.send(map_event(event)).is_ok() {
            self.repaint.request_repaint();
        }
    }
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::ClassificationCompleted { request_id, result } => {
            let outcome = result
                .map(|classification| Prediction {
                    label: classification.label,
                    confidence: classification.confidence,
                })
                .map_err(|err| {
                    if err.is_connectivity() {
                        client_warn!("Request {} got no response: {}", request_id, err);
                        ClientError::Connectivity
                    } else {
                        ClientError::ServerReported(err.message)
                    }
                });
            Msg::ClassificationFinished {
                request_id,
                outcome,
            }
        }
        EngineEvent::HealthChecked(report) => Msg::HealthChecked(match report.state {
            HealthState::Healthy => ServerStatus::Online,
            HealthState::Degraded => ServerStatus::Degraded,
            HealthState::Unhealthy { .. } | HealthState::Unreachable => ServerStatus::Offline,
        }),
    }
}
