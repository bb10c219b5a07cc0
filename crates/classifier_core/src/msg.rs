use crate::{ClientError, Prediction, RequestId, ServerStatus};

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// The window was opened; resets the form and probes server health.
    Mounted,
    /// User edited the text box.
    InputChanged(String),
    /// User clicked "Classify Text".
    SubmitClicked,
    /// User picked one of the built-in samples (index into [`crate::SAMPLES`]).
    SampleLoaded(usize),
    /// Engine completion for a submission.
    ClassificationFinished {
        request_id: RequestId,
        outcome: Result<Prediction, ClientError>,
    },
    /// Engine completion for a health probe.
    HealthChecked(ServerStatus),
    /// UI/render tick.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
