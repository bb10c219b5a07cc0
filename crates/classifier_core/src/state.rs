use client_logging::{client_debug, client_info, TextShape};

use crate::view_model::{ClientViewModel, ResultView};
use crate::{format_confidence, ClientError, SAMPLES};

pub type RequestId = u64;

/// Lifecycle of the classification form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Idle,
    Submitting,
    Success,
    Failed,
}

/// Last known health of the classification service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ServerStatus {
    #[default]
    Checking,
    Online,
    /// Reachable, but reports that the model is not fully loaded.
    Degraded,
    Offline,
}

impl ServerStatus {
    pub fn is_online(self) -> bool {
        matches!(self, ServerStatus::Online | ServerStatus::Degraded)
    }
}

/// What the service predicted for one text.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub label: String,
    /// In `[0, 1]` when present.
    pub confidence: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassificationResult {
    pub label: String,
    pub confidence: Option<f64>,
    /// The trimmed text that was classified.
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
struct InFlight {
    request_id: RequestId,
    text: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    input: String,
    status: Status,
    result: Option<ClassificationResult>,
    error: Option<ClientError>,
    server: ServerStatus,
    service_url: String,
    in_flight: Option<InFlight>,
    last_request_id: RequestId,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// State for a client talking to `service_url`; used in connectivity hints.
    pub fn with_service_url(service_url: impl Into<String>) -> Self {
        Self {
            service_url: service_url.into(),
            ..Self::default()
        }
    }

    pub fn view(&self) -> ClientViewModel {
        let loading = self.is_submitting();
        ClientViewModel {
            input: self.input.clone(),
            status: self.status,
            loading,
            can_submit: !loading && !self.input.trim().is_empty(),
            inputs_enabled: !loading,
            submit_label: if loading {
                "Classifying..."
            } else {
                "Classify Text"
            },
            result: self.result.as_ref().map(|result| ResultView {
                label: result.label.clone(),
                confidence: result.confidence.map(format_confidence),
                text: result.text.clone(),
            }),
            error: self
                .error
                .as_ref()
                .map(|error| error.user_message(&self.service_url)),
            server: self.server,
            server_online: self.server.is_online(),
            server_label: match self.server {
                ServerStatus::Checking => "Checking...",
                ServerStatus::Online | ServerStatus::Degraded => "Online",
                ServerStatus::Offline => "Offline",
            },
            samples: SAMPLES,
            dirty: self.dirty,
        }
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn result(&self) -> Option<&ClassificationResult> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&ClientError> {
        self.error.as_ref()
    }

    pub fn server_status(&self) -> ServerStatus {
        self.server
    }

    pub fn service_url(&self) -> &str {
        &self.service_url
    }

    pub fn in_flight_request(&self) -> Option<RequestId> {
        self.in_flight.as_ref().map(|flight| flight.request_id)
    }

    pub fn is_submitting(&self) -> bool {
        self.status == Status::Submitting
    }

    /// Returns whether anything changed since the last call and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn reset_for_mount(&mut self) {
        self.input.clear();
        self.status = Status::Idle;
        self.result = None;
        self.error = None;
        self.in_flight = None;
        self.server = ServerStatus::Checking;
        self.mark_dirty();
    }

    /// Stores raw input. Settled outcomes stay visible but the form returns to Idle.
    pub(crate) fn set_input(&mut self, text: String) {
        if self.input == text {
            return;
        }
        self.input = text;
        if matches!(self.status, Status::Success | Status::Failed) {
            self.status = Status::Idle;
        }
        self.mark_dirty();
    }

    pub(crate) fn load_sample(&mut self, text: &str) {
        self.input = text.to_string();
        self.status = Status::Idle;
        self.result = None;
        self.error = None;
        self.mark_dirty();
    }

    pub(crate) fn fail_validation(&mut self) {
        self.status = Status::Failed;
        self.result = None;
        self.error = Some(ClientError::Validation);
        self.mark_dirty();
    }

    /// Enters Submitting for `text` and returns the id the completion must carry.
    pub(crate) fn begin_submission(&mut self, text: String) -> RequestId {
        self.last_request_id += 1;
        let request_id = self.last_request_id;
        client_info!(
            "Submitting request_id={} {}",
            request_id,
            TextShape::of(&text)
        );
        self.status = Status::Submitting;
        self.result = None;
        self.error = None;
        self.in_flight = Some(InFlight { request_id, text });
        self.mark_dirty();
        request_id
    }

    /// Settles the in-flight submission. Completions for any other id are dropped.
    pub(crate) fn finish_submission(
        &mut self,
        request_id: RequestId,
        outcome: Result<Prediction, ClientError>,
    ) -> bool {
        let Some(flight) = self
            .in_flight
            .take_if(|flight| flight.request_id == request_id)
        else {
            client_debug!("Ignoring stale completion request_id={}", request_id);
            return false;
        };

        match outcome {
            Ok(prediction) => {
                self.status = Status::Success;
                self.error = None;
                self.result = Some(ClassificationResult {
                    label: prediction.label,
                    confidence: prediction.confidence,
                    text: flight.text,
                });
            }
            Err(error) => {
                client_info!("Submission request_id={} failed: {}", request_id, error);
                self.status = Status::Failed;
                self.result = None;
                self.error = Some(error);
            }
        }
        self.mark_dirty();
        true
    }

    pub(crate) fn set_server_status(&mut self, server: ServerStatus) {
        if self.server != server {
            self.server = server;
            self.mark_dirty();
        }
    }
}
