use super::request::{AlertRequest, ConfirmRequest};
use clap::ValueEnum;
use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum::{Display, EnumString};
use thiserror::Error;

pub const DEFAULT_ALERT_TITLE: &str = "Alert";
pub const DEFAULT_ALERT_CLOSE_TEXT: &str = "OK";
pub const DEFAULT_CONFIRM_TITLE: &str = "Confirm Action";
pub const DEFAULT_CONFIRM_TEXT: &str = "Confirm";
pub const DEFAULT_CANCEL_TEXT: &str = "Cancel";

/// Free-form configuration handed to `show` and `show_form`.
pub type CustomDialogConfig = Value;

#[derive(Error, Debug)]
pub enum DialogConfigError {
    #[error("Dialog config must be a mapping, got {found}")]
    NotAMapping { found: String },
    #[error("Invalid {kind} dialog config. {error}")]
    Invalid {
        kind: &'static str,
        #[source]
        error: serde_json::Error,
    },
    #[error("Unable to parse dialog config as JSON. {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    ValueEnum,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

/// Display options for an alert. Every key is optional; see [`AlertConfig::resolve`] for defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
#[builder(setter(into, strip_option), default)]
pub struct AlertConfig {
    pub title: Option<String>,
    pub details: Option<String>,
    pub close_text: Option<String>,
    pub severity: Option<Severity>,
}

impl AlertConfig {
    pub fn from_value(value: Value) -> Result<Self, DialogConfigError> {
        parse_mapping("alert", value)
    }

    pub fn from_json(input: &str) -> Result<Self, DialogConfigError> {
        Self::from_value(serde_json::from_str(input)?)
    }

    /// Fill any key that is unset here from `base`.
    pub fn or(self, base: AlertConfig) -> Self {
        Self {
            title: self.title.or(base.title),
            details: self.details.or(base.details),
            close_text: self.close_text.or(base.close_text),
            severity: self.severity.or(base.severity),
        }
    }

    pub fn resolve(self, message: &str) -> AlertRequest {
        AlertRequest {
            title: self
                .title
                .unwrap_or_else(|| DEFAULT_ALERT_TITLE.to_string()),
            message: message.to_string(),
            details: self.details.unwrap_or_default(),
            close_text: self
                .close_text
                .unwrap_or_else(|| DEFAULT_ALERT_CLOSE_TEXT.to_string()),
            severity: self.severity.unwrap_or_default(),
        }
    }
}

/// Display options for a confirmation. Every key is optional; see [`ConfirmConfig::resolve`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
#[builder(setter(into, strip_option), default)]
pub struct ConfirmConfig {
    pub title: Option<String>,
    pub confirm_text: Option<String>,
    pub cancel_text: Option<String>,
}

impl ConfirmConfig {
    pub fn from_value(value: Value) -> Result<Self, DialogConfigError> {
        parse_mapping("confirm", value)
    }

    pub fn from_json(input: &str) -> Result<Self, DialogConfigError> {
        Self::from_value(serde_json::from_str(input)?)
    }

    /// Fill any key that is unset here from `base`.
    pub fn or(self, base: ConfirmConfig) -> Self {
        Self {
            title: self.title.or(base.title),
            confirm_text: self.confirm_text.or(base.confirm_text),
            cancel_text: self.cancel_text.or(base.cancel_text),
        }
    }

    pub fn resolve(self, message: &str) -> ConfirmRequest {
        ConfirmRequest {
            title: self
                .title
                .unwrap_or_else(|| DEFAULT_CONFIRM_TITLE.to_string()),
            message: message.to_string(),
            confirm_text: self
                .confirm_text
                .unwrap_or_else(|| DEFAULT_CONFIRM_TEXT.to_string()),
            cancel_text: self
                .cancel_text
                .unwrap_or_else(|| DEFAULT_CANCEL_TEXT.to_string()),
        }
    }
}

fn parse_mapping<T>(kind: &'static str, value: Value) -> Result<T, DialogConfigError>
where
    T: for<'de> Deserialize<'de> + Default,
{
    match value {
        Value::Null => Ok(T::default()),
        Value::Object(_) => {
            serde_json::from_value(value).map_err(|error| DialogConfigError::Invalid { kind, error })
        }
        other => Err(DialogConfigError::NotAMapping {
            found: other.to_string(),
        }),
    }
}
