//! Classifier core: pure form state machine and view-model helpers.
mod effect;
mod error;
mod msg;
mod samples;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use error::{ClientError, VALIDATION_MESSAGE};
pub use msg::Msg;
pub use samples::{Sample, SAMPLES};
pub use state::{AppState, ClassificationResult, Prediction, RequestId, ServerStatus, Status};
pub use update::update;
pub use view_model::{format_confidence, ClientViewModel, ResultView};
