use super::config::Severity;
use strum::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum DialogKind {
    Alert,
    Confirm,
    Custom,
    Form,
}

/// One dialog invocation. Lives only for the duration of a single gateway call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogRequest {
    pub id: String,
    pub kind: DialogKind,
    pub message: String,
}

impl DialogRequest {
    pub fn new(kind: DialogKind, message: &str) -> Self {
        Self {
            id: generate_request_id(),
            kind,
            message: message.to_string(),
        }
    }
}

fn generate_request_id() -> String {
    nanoid::nanoid!(8, &nanoid::alphabet::SAFE)
}

/// Alert parameters with every default filled in, as handed to a back-end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertRequest {
    pub title: String,
    pub message: String,
    pub details: String,
    pub close_text: String,
    pub severity: Severity,
}

/// Confirmation parameters with every default filled in, as handed to a back-end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmRequest {
    pub title: String,
    pub message: String,
    pub confirm_text: String,
    pub cancel_text: String,
}
