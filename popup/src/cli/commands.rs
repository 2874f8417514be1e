use crate::gateway::prelude::{
    AlertConfig, ConfirmConfig, CustomDialogConfig, DialogConfigError, DialogGateway, Severity,
};
use crate::report_stdout;
use anyhow::Result;
use clap::Args;
use serde_json::Value;
use std::io::Write;
use tracing::debug;

#[derive(Debug, Args)]
pub struct AlertArgs {
    /// Text shown in the alert
    pub message: String,

    /// Title of the alert [default: Alert]
    #[arg(long)]
    pub title: Option<String>,

    /// Secondary text shown under the message
    #[arg(long)]
    pub details: Option<String>,

    /// Label of the button closing the alert [default: OK]
    #[arg(long)]
    pub close_text: Option<String>,

    /// Severity of the alert [default: info]
    #[arg(long, value_enum)]
    pub severity: Option<Severity>,

    /// JSON mapping of alert options (title, details, closeText, severity). Flags take precedence.
    #[arg(long)]
    pub config_json: Option<String>,
}

impl AlertArgs {
    pub fn to_config(&self) -> Result<AlertConfig, DialogConfigError> {
        let base = match &self.config_json {
            Some(json) => AlertConfig::from_json(json)?,
            None => AlertConfig::default(),
        };

        Ok(AlertConfig {
            title: self.title.clone(),
            details: self.details.clone(),
            close_text: self.close_text.clone(),
            severity: self.severity,
        }
        .or(base))
    }
}

#[derive(Debug, Args)]
pub struct ConfirmArgs {
    /// Question to ask
    pub message: String,

    /// Title of the confirmation [default: Confirm Action]
    #[arg(long)]
    pub title: Option<String>,

    /// Label of the accepting button [default: Confirm]
    #[arg(long)]
    pub confirm_text: Option<String>,

    /// Label of the declining button [default: Cancel]
    #[arg(long)]
    pub cancel_text: Option<String>,

    /// JSON mapping of confirm options (title, confirmText, cancelText). Flags take precedence.
    #[arg(long)]
    pub config_json: Option<String>,
}

impl ConfirmArgs {
    pub fn to_config(&self) -> Result<ConfirmConfig, DialogConfigError> {
        let base = match &self.config_json {
            Some(json) => ConfirmConfig::from_json(json)?,
            None => ConfirmConfig::default(),
        };

        Ok(ConfirmConfig {
            title: self.title.clone(),
            confirm_text: self.confirm_text.clone(),
            cancel_text: self.cancel_text.clone(),
        }
        .or(base))
    }
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Free-form JSON describing the dialog
    #[arg(long)]
    pub json: Option<String>,

    /// Treat the request as a form
    #[arg(long, action)]
    pub form: bool,
}

impl ShowArgs {
    pub fn to_config(&self) -> Result<CustomDialogConfig, DialogConfigError> {
        match &self.json {
            Some(json) => Ok(serde_json::from_str(json)?),
            None => Ok(Value::Null),
        }
    }
}

pub async fn alert_root(gateway: &DialogGateway, args: &AlertArgs) -> Result<i32> {
    let config = args.to_config()?;
    gateway.alert(&args.message, config).await;
    Ok(0)
}

/// Exits `0` when the user confirms and `1` otherwise, mirroring `test`.
pub async fn confirm_root(gateway: &DialogGateway, args: &ConfirmArgs) -> Result<i32> {
    let config = args.to_config()?;
    let confirmed = gateway.confirm(&args.message, config).await;
    report_stdout!("{}", confirmed);

    Ok(if confirmed { 0 } else { 1 })
}

pub async fn show_root(gateway: &DialogGateway, args: &ShowArgs) -> Result<i32> {
    let config = args.to_config()?;
    let result = if args.form {
        gateway.show_form(config).await
    } else {
        gateway.show(config).await
    };
    debug!("Show returned {:?}", result);

    let output = result.unwrap_or(Value::Null);
    report_stdout!("{}", output);
    Ok(0)
}
