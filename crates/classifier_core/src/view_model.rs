use crate::{Sample, ServerStatus, Status};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultView {
    pub label: String,
    /// Already formatted, e.g. `87.3%`.
    pub confidence: Option<String>,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClientViewModel {
    pub input: String,
    pub status: Status,
    pub loading: bool,
    pub can_submit: bool,
    pub inputs_enabled: bool,
    pub submit_label: &'static str,
    pub result: Option<ResultView>,
    pub error: Option<String>,
    pub server: ServerStatus,
    pub server_online: bool,
    pub server_label: &'static str,
    pub samples: &'static [Sample],
    pub dirty: bool,
}

/// Renders a `[0, 1]` score as a percentage with one decimal.
pub fn format_confidence(confidence: f64) -> String {
    format!("{:.1}%", confidence * 100.0)
}
