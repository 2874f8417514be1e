//! Dialog primitives offered by the host environment.
//!
//! The gateway falls back to these when no modal back-end is registered for a
//! dialog kind. They are blocking calls; the gateway runs them on a blocking
//! thread so the async caller is never stalled.
//!
//! # Choosing an Implementation
//!
//! | Use Case | NativeDialogs |
//! |----------|---------------|
//! | Interactive terminal | `TerminalDialogs` |
//! | CI/Automated | `AutoApprove` |
//! | Dry-run/Testing | `DenyAll` |
//! | Custom | Implement trait |
//!
//! # Example
//!
//! ```rust
//! use dev_popup::gateway::prelude::{AlertConfig, ConfirmConfig};
//! use dev_popup::native::{AutoApprove, DenyAll, NativeDialogs};
//!
//! let request = ConfirmConfig::default().resolve("Apply fix?");
//! assert!(AutoApprove.confirm(&request).unwrap());
//! assert!(!DenyAll.confirm(&request).unwrap());
//!
//! let alert = AlertConfig::default().resolve("Done");
//! assert!(DenyAll.alert(&alert).is_ok());
//! ```

use crate::gateway::prelude::{AlertRequest, ConfirmRequest};
use colored::Colorize;
use mockall::automock;
use thiserror::Error;
use tracing::info;

mod terminal;

pub use terminal::TerminalDialogs;

pub mod prelude {
    pub use super::{AutoApprove, DenyAll, NativeDialogError, NativeDialogs, TerminalDialogs};
}

#[derive(Error, Debug)]
pub enum NativeDialogError {
    #[error("Input device is not a TTY")]
    NotTty,
    #[error("Prompt was cancelled by the user")]
    Cancelled,
    #[error("Unable to render prompt. {0}")]
    Io(#[from] std::io::Error),
    #[error("Prompt failed. {0}")]
    Prompt(String),
    #[error("Prompt task did not complete. {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Blocking dialog primitives of the host environment.
#[automock]
pub trait NativeDialogs: Send + Sync {
    /// Show the alert and return once it has been acknowledged.
    fn alert(&self, request: &AlertRequest) -> Result<(), NativeDialogError>;

    /// Ask the question, returning `true` when the user accepts.
    fn confirm(&self, request: &ConfirmRequest) -> Result<bool, NativeDialogError>;
}

/// Accept every confirmation. Alerts are written to the user log and
/// acknowledged immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoApprove;

impl NativeDialogs for AutoApprove {
    fn alert(&self, request: &AlertRequest) -> Result<(), NativeDialogError> {
        log_alert(request);
        Ok(())
    }

    fn confirm(&self, request: &ConfirmRequest) -> Result<bool, NativeDialogError> {
        info!(target: "user", "{} {} (auto-approved)", request.title.bold(), request.message);
        Ok(true)
    }
}

/// Decline every confirmation. Alerts are written to the user log and
/// acknowledged immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct DenyAll;

impl NativeDialogs for DenyAll {
    fn alert(&self, request: &AlertRequest) -> Result<(), NativeDialogError> {
        log_alert(request);
        Ok(())
    }

    fn confirm(&self, request: &ConfirmRequest) -> Result<bool, NativeDialogError> {
        info!(target: "user", "{} {} (denied)", request.title.bold(), request.message);
        Ok(false)
    }
}

fn log_alert(request: &AlertRequest) {
    info!(target: "user", "[{}] {} {}", request.severity, request.title.bold(), request.message);
    if !request.details.is_empty() {
        info!(target: "user", "  {}", request.details.dimmed());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::prelude::{AlertConfig, ConfirmConfig};

    #[test]
    fn test_auto_approve_always_returns_true() {
        let request = ConfirmConfig::default().resolve("Test prompt?");
        assert!(AutoApprove.confirm(&request).unwrap());
    }

    #[test]
    fn test_deny_all_always_returns_false() {
        let request = ConfirmConfig::default().resolve("Test prompt?");
        assert!(!DenyAll.confirm(&request).unwrap());
    }

    #[test]
    fn test_alerts_are_acknowledged() {
        let request = AlertConfig {
            details: Some("more".to_string()),
            ..Default::default()
        }
        .resolve("Test notification");
        assert!(AutoApprove.alert(&request).is_ok());
        assert!(DenyAll.alert(&request).is_ok());
    }

    #[test]
    fn test_native_dialogs_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AutoApprove>();
        assert_send_sync::<DenyAll>();
        assert_send_sync::<TerminalDialogs>();
    }
}
