use super::backend::{AlertBackend, ConfirmBackend};
use super::config::{AlertConfig, ConfirmConfig, CustomDialogConfig};
use super::handler::{AlertHandler, ConfirmHandler, InjectedModalHandler, NativeFallbackHandler};
use super::request::{DialogKind, DialogRequest};
use crate::native::NativeDialogs;
use serde_json::Value;
use std::sync::{Arc, Weak};
use tokio::sync::RwLock;
use tracing::{Span, debug, info, instrument};

/// Awaitable `alert`, `confirm` and `show` dialogs.
///
/// Construct one at application start and pass it to whatever needs to ask
/// the user something. Until [`DialogGateway::register_backends`] is called,
/// every dialog goes to the native fallback given at construction.
///
/// Each call owns its own completion signal, so overlapping calls resolve
/// independently. Nothing orders or serialises simultaneously open dialogs;
/// that is up to the registered back-end.
pub struct DialogGateway {
    fallback: NativeFallbackHandler,
    alert_handler: RwLock<Arc<dyn AlertHandler>>,
    confirm_handler: RwLock<Arc<dyn ConfirmHandler>>,
}

impl DialogGateway {
    pub fn new(fallback: NativeFallbackHandler) -> Self {
        Self {
            alert_handler: RwLock::new(Arc::new(fallback.clone())),
            confirm_handler: RwLock::new(Arc::new(fallback.clone())),
            fallback,
        }
    }

    pub fn with_native_dialogs(native: Arc<dyn NativeDialogs>) -> Self {
        Self::new(NativeFallbackHandler::new(native))
    }

    /// A gateway without native dialogs: alerts are logged, confirmations declined.
    pub fn headless() -> Self {
        Self::new(NativeFallbackHandler::unavailable())
    }

    /// Select the handler for each dialog kind. A `None` back-end selects the
    /// native fallback for that kind. The gateway never upgrades these
    /// references beyond the duration of a single `show` call.
    pub async fn register_backends(
        &self,
        alert_backend: Option<Weak<dyn AlertBackend>>,
        confirm_backend: Option<Weak<dyn ConfirmBackend>>,
    ) {
        let alert_handler: Arc<dyn AlertHandler> = match alert_backend {
            Some(backend) => Arc::new(InjectedModalHandler::new(backend, self.fallback.clone())),
            None => Arc::new(self.fallback.clone()),
        };
        let confirm_handler: Arc<dyn ConfirmHandler> = match confirm_backend {
            Some(backend) => Arc::new(InjectedModalHandler::new(backend, self.fallback.clone())),
            None => Arc::new(self.fallback.clone()),
        };

        *self.alert_handler.write().await = alert_handler;
        *self.confirm_handler.write().await = confirm_handler;
        debug!("Dialog back-ends registered");
    }

    /// Forget any registered back-ends, returning every dialog kind to the native fallback.
    pub async fn clear_backends(&self) {
        self.register_backends(None, None).await;
        debug!("Dialog back-ends cleared");
    }

    #[instrument(skip_all, fields(dialog.id, dialog.kind))]
    pub async fn alert(&self, message: &str, config: AlertConfig) {
        let dialog = start_request(DialogKind::Alert, message);
        let handler = self.alert_handler.read().await.clone();
        handler.alert(config.resolve(&dialog.message)).await;
    }

    #[instrument(skip_all, fields(dialog.id, dialog.kind))]
    pub async fn confirm(&self, message: &str, config: ConfirmConfig) -> bool {
        let dialog = start_request(DialogKind::Confirm, message);
        let handler = self.confirm_handler.read().await.clone();
        let confirmed = handler.confirm(config.resolve(&dialog.message)).await;
        debug!("Confirmation resolved to {}", confirmed);
        confirmed
    }

    /// Caller-defined dialog shape. No back-end renders these yet, so the
    /// result is always `None`.
    #[instrument(skip_all, fields(dialog.id, dialog.kind))]
    pub async fn show(&self, config: CustomDialogConfig) -> Option<Value> {
        self.show_custom(DialogKind::Custom, config)
    }

    /// Same contract as [`DialogGateway::show`], for form-shaped requests.
    #[instrument(skip_all, fields(dialog.id, dialog.kind))]
    pub async fn show_form(&self, config: CustomDialogConfig) -> Option<Value> {
        self.show_custom(DialogKind::Form, config)
    }

    fn show_custom(&self, kind: DialogKind, config: CustomDialogConfig) -> Option<Value> {
        let _ = start_request(kind, "");
        info!("Show {} dialog: {}", kind, config);
        None
    }

    /// Hint that the open dialog should be dismissed. No dialog is tracked, so
    /// this is only logged.
    pub fn close(&self) {
        info!("Close dialog requested");
    }

    pub fn is_visible(&self) -> bool {
        false
    }
}

fn start_request(kind: DialogKind, message: &str) -> DialogRequest {
    let dialog = DialogRequest::new(kind, message);
    let span = Span::current();
    span.record("dialog.id", dialog.id.as_str());
    span.record("dialog.kind", tracing::field::display(dialog.kind));
    dialog
}
