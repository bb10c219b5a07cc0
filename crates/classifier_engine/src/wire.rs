//! JSON bodies exchanged with the classification service.
//!
//! Two service flavours exist in the wild. The `/predict` flavour answers
//! `{success, category, confidence}` and the `/process` flavour answers
//! `{message, details: {class, confidence}}`. Both report failures as
//! `{error, details}`. One lenient response type covers all of them.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{Classification, ClassifyError, Endpoint, FailureKind, HealthReport, HealthState};

const FALLBACK_MESSAGE: &str = "Classification failed";

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub(crate) enum ClassifyRequest<'a> {
    Predict { text: &'a str },
    Process { input: &'a str },
}

impl<'a> ClassifyRequest<'a> {
    pub(crate) fn new(endpoint: Endpoint, text: &'a str) -> Self {
        match endpoint {
            Endpoint::Predict => ClassifyRequest::Predict { text },
            Endpoint::Process => ClassifyRequest::Process { input: text },
        }
    }
}

/// Every field is loosely typed; a value of an unexpected type is ignored
/// rather than failing the whole body.
#[derive(Debug, Deserialize)]
struct ClassifyResponse {
    success: Option<Value>,
    category: Option<Value>,
    message: Option<Value>,
    confidence: Option<Value>,
    error: Option<Value>,
    details: Option<Value>,
}

impl ClassifyResponse {
    fn success(&self) -> Option<bool> {
        self.success.as_ref().and_then(Value::as_bool)
    }

    fn label(&self) -> Option<String> {
        self.category
            .as_ref()
            .and_then(value_text)
            .or_else(|| self.message.as_ref().and_then(value_text))
            .or_else(|| self.details_field("class").and_then(value_text))
    }

    fn confidence(&self) -> Option<f64> {
        self.confidence
            .as_ref()
            .and_then(value_number)
            .or_else(|| self.details_field("confidence").and_then(value_number))
            .and_then(normalize_confidence)
    }

    fn error_message(&self) -> Option<String> {
        self.error.as_ref().and_then(value_text)
    }

    fn details_field(&self, key: &str) -> Option<&Value> {
        self.details.as_ref().and_then(|details| details.get(key))
    }
}

#[derive(Debug, Deserialize)]
struct HealthResponse {
    status: Option<Value>,
    model_loaded: Option<Value>,
    errors: Option<Value>,
}

impl HealthResponse {
    fn errors(&self) -> Vec<String> {
        match &self.errors {
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| value_text(item).unwrap_or_else(|| item.to_string()))
                .collect(),
            Some(other) => value_text(other).into_iter().collect(),
            None => Vec::new(),
        }
    }
}

/// Interprets a reply to a classification request.
///
/// The body is decoded regardless of the HTTP status so that server-side
/// error messages reach the user verbatim.
pub(crate) fn interpret_classify(
    endpoint: Endpoint,
    status: u16,
    body: &[u8],
) -> Result<Classification, ClassifyError> {
    let rejected = |message: Option<String>| {
        let message = message.unwrap_or_else(|| fallback_message(status));
        ClassifyError::new(FailureKind::Rejected { status }, message)
    };

    let response: ClassifyResponse = match serde_json::from_slice(body) {
        Ok(response) => response,
        Err(_) => return Err(rejected(None)),
    };

    let flag_ok = if endpoint.requires_success_flag() {
        response.success() == Some(true)
    } else {
        response.success() != Some(false)
    };
    if !(200..300).contains(&status) || !flag_ok {
        return Err(rejected(response.error_message()));
    }

    let label = response.label().ok_or_else(|| rejected(None))?;
    Ok(Classification {
        label,
        confidence: response.confidence(),
    })
}

/// Interprets a reply to `GET /health`. Undecodable bodies count as unreachable.
pub(crate) fn interpret_health(body: &[u8]) -> HealthReport {
    let Ok(response) = serde_json::from_slice::<HealthResponse>(body) else {
        return HealthReport::unreachable();
    };
    let status = response.status.as_ref().and_then(value_text);
    let state = match status.as_deref() {
        Some("healthy") => HealthState::Healthy,
        Some("degraded") => HealthState::Degraded,
        _ => HealthState::Unhealthy { status },
    };
    HealthReport {
        state,
        model_loaded: response.model_loaded.as_ref().and_then(Value::as_bool),
        errors: response.errors(),
    }
}

fn fallback_message(status: u16) -> String {
    if (200..300).contains(&status) {
        FALLBACK_MESSAGE.to_string()
    } else {
        format!("{FALLBACK_MESSAGE} (HTTP {status})")
    }
}

fn normalize_confidence(value: f64) -> Option<f64> {
    if value.is_nan() {
        None
    } else if value <= 0.0 {
        // Also folds -0.0, which would otherwise render as "-0.0%".
        Some(0.0)
    } else {
        Some(value.min(1.0))
    }
}

fn value_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) if !text.trim().is_empty() => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}
