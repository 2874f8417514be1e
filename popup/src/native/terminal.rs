use super::{NativeDialogError, NativeDialogs};
use crate::gateway::prelude::{AlertRequest, ConfirmRequest, Severity};
use colored::{ColoredString, Colorize};
use inquire::InquireError;
use std::io::IsTerminal;
use tracing::warn;

/// Terminal dialogs using the `inquire` crate.
///
/// Prompts suspend any `tracing-indicatif` output while they are shown. When
/// stdin is not a TTY there is nothing to prompt with, so [`TerminalDialogs::detect`]
/// returns `None` and the prompt functions report [`NativeDialogError::NotTty`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalDialogs;

impl TerminalDialogs {
    pub fn detect() -> Option<Self> {
        if std::io::stdin().is_terminal() {
            Some(TerminalDialogs)
        } else {
            None
        }
    }
}

impl NativeDialogs for TerminalDialogs {
    fn alert(&self, request: &AlertRequest) -> Result<(), NativeDialogError> {
        let heading = format!(
            "{} {}",
            severity_label(request.severity, &request.title),
            request.message
        );
        tracing_indicatif::suspend_tracing_indicatif(|| {
            let base_prompt = inquire::Select::new(&heading, vec![request.close_text.as_str()]);
            let prompt = if request.details.is_empty() {
                base_prompt
            } else {
                base_prompt.with_help_message(&request.details)
            };

            alert_outcome(prompt.prompt().map(|_| ()))
        })
    }

    fn confirm(&self, request: &ConfirmRequest) -> Result<bool, NativeDialogError> {
        let heading = format!("{} {}", request.title.bold(), request.message);
        let help = format!("y = {}, n = {}", request.confirm_text, request.cancel_text);
        tracing_indicatif::suspend_tracing_indicatif(|| {
            let answer = inquire::Confirm::new(&heading)
                .with_default(false)
                .with_help_message(&help)
                .prompt();
            confirm_outcome(answer)
        })
    }
}

// Escape on an alert is still a dismissal.
fn alert_outcome(result: Result<(), InquireError>) -> Result<(), NativeDialogError> {
    match result {
        Ok(()) | Err(InquireError::OperationCanceled) => Ok(()),
        Err(e) => Err(e.into()),
    }
}

// Escape on a confirmation is the cancel answer.
fn confirm_outcome(result: Result<bool, InquireError>) -> Result<bool, NativeDialogError> {
    match result {
        Ok(confirmed) => Ok(confirmed),
        Err(InquireError::OperationCanceled) => Ok(false),
        Err(e) => Err(e.into()),
    }
}

fn severity_label(severity: Severity, title: &str) -> ColoredString {
    match severity {
        Severity::Info => title.bold(),
        Severity::Success => title.green().bold(),
        Severity::Warning => title.yellow().bold(),
        Severity::Error => title.red().bold(),
    }
}

impl From<InquireError> for NativeDialogError {
    fn from(error: InquireError) -> Self {
        match error {
            InquireError::NotTTY => {
                warn!(target: "user", "Prompting user, but input device is not a TTY. Skipping.");
                NativeDialogError::NotTty
            }
            InquireError::OperationCanceled | InquireError::OperationInterrupted => {
                NativeDialogError::Cancelled
            }
            InquireError::IO(e) => NativeDialogError::Io(e),
            other => NativeDialogError::Prompt(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_inquire_errors() {
        assert!(matches!(
            NativeDialogError::from(InquireError::NotTTY),
            NativeDialogError::NotTty
        ));
        assert!(matches!(
            NativeDialogError::from(InquireError::OperationInterrupted),
            NativeDialogError::Cancelled
        ));
        assert!(matches!(
            NativeDialogError::from(InquireError::InvalidConfiguration("bad".to_string())),
            NativeDialogError::Prompt(_)
        ));
    }

    #[test]
    fn escape_cancels_confirm_and_dismisses_alert() {
        assert!(!confirm_outcome(Err(InquireError::OperationCanceled)).unwrap());
        assert!(confirm_outcome(Ok(true)).unwrap());
        assert!(alert_outcome(Err(InquireError::OperationCanceled)).is_ok());
    }

    #[test]
    fn interrupt_is_still_an_error() {
        assert!(matches!(
            confirm_outcome(Err(InquireError::OperationInterrupted)),
            Err(NativeDialogError::Cancelled)
        ));
        assert!(matches!(
            alert_outcome(Err(InquireError::NotTTY)),
            Err(NativeDialogError::NotTty)
        ));
    }
}
