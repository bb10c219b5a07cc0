use std::fmt;

/// Shown when the user submits empty or whitespace-only text.
pub const VALIDATION_MESSAGE: &str = "Please enter some text";

const CONNECTIVITY_MESSAGE: &str = "Failed to connect to server.";

/// Why a submission ended without a result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// Input was empty after trimming; no request was sent.
    Validation,
    /// The service answered but reported a failure. The message is shown verbatim.
    ServerReported(String),
    /// The request never got a usable response.
    Connectivity,
}

impl ClientError {
    /// User-facing message. `service_url` names the server in connectivity hints.
    pub fn user_message(&self, service_url: &str) -> String {
        match self {
            ClientError::Validation => VALIDATION_MESSAGE.to_string(),
            ClientError::ServerReported(message) => message.clone(),
            ClientError::Connectivity if service_url.is_empty() => format!(
                "{CONNECTIVITY_MESSAGE} Make sure the classification API is running."
            ),
            ClientError::Connectivity => format!(
                "{CONNECTIVITY_MESSAGE} Make sure the classification API is running at {service_url}"
            ),
        }
    }
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Validation => write!(f, "validation"),
            ClientError::ServerReported(message) => write!(f, "server reported: {message}"),
            ClientError::Connectivity => write!(f, "connectivity"),
        }
    }
}
