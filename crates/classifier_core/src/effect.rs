use crate::RequestId;

/// IO requested by [`crate::update`]; executed by the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Send `text` (already trimmed) to the classification service.
    Classify { request_id: RequestId, text: String },
    /// Probe the service health endpoint. Fire-and-forget.
    CheckHealth,
}
