use super::backend::{AlertBackend, AlertCompletion, ConfirmBackend, ConfirmCompletion};
use super::request::{AlertRequest, ConfirmRequest};
use crate::native::{NativeDialogError, NativeDialogs};
use async_trait::async_trait;
use std::sync::{Arc, Weak};
use tracing::{debug, info, warn};

#[async_trait]
pub trait AlertHandler: Send + Sync {
    async fn alert(&self, request: AlertRequest);
}

#[async_trait]
pub trait ConfirmHandler: Send + Sync {
    async fn confirm(&self, request: ConfirmRequest) -> bool;
}

/// Routes dialogs to the host's native primitives, or only logs them when the
/// host has none. Confirmations without native dialogs resolve to `false`.
#[derive(Clone, Default)]
pub struct NativeFallbackHandler {
    native: Option<Arc<dyn NativeDialogs>>,
}

impl NativeFallbackHandler {
    pub fn new(native: Arc<dyn NativeDialogs>) -> Self {
        Self {
            native: Some(native),
        }
    }

    /// A fallback with no native dialogs at all.
    pub fn unavailable() -> Self {
        Self { native: None }
    }

    pub fn is_available(&self) -> bool {
        self.native.is_some()
    }

    async fn run_native<T, F>(&self, op: F) -> Option<Result<T, NativeDialogError>>
    where
        T: Send + 'static,
        F: FnOnce(&dyn NativeDialogs) -> Result<T, NativeDialogError> + Send + 'static,
    {
        let native = self.native.clone()?;
        let result = tokio::task::spawn_blocking(move || op(native.as_ref())).await;
        Some(result.unwrap_or_else(|e| Err(e.into())))
    }
}

#[async_trait]
impl AlertHandler for NativeFallbackHandler {
    async fn alert(&self, request: AlertRequest) {
        info!("Alert: {} {:?}", request.message, request);
        let message = request.message.clone();
        match self.run_native(move |native| native.alert(&request)).await {
            None => debug!("No native dialogs available, alert '{}' was only logged", message),
            Some(Ok(())) => debug!("Native alert dismissed"),
            Some(Err(e)) => warn!("Native alert failed, treating it as dismissed. {}", e),
        }
    }
}

#[async_trait]
impl ConfirmHandler for NativeFallbackHandler {
    async fn confirm(&self, request: ConfirmRequest) -> bool {
        info!("Confirm: {} {:?}", request.message, request);
        match self.run_native(move |native| native.confirm(&request)).await {
            None => {
                debug!("No native dialogs available, declining confirmation");
                false
            }
            Some(Ok(confirmed)) => confirmed,
            Some(Err(e)) => {
                warn!("Native confirm failed, declining. {}", e);
                false
            }
        }
    }
}

/// Routes dialogs to an application supplied modal component.
///
/// Only a weak reference to the component is held. When the owner has
/// dropped it by the time a dialog is requested, the request goes to the
/// native fallback instead.
pub struct InjectedModalHandler<B: ?Sized> {
    backend: Weak<B>,
    fallback: NativeFallbackHandler,
}

impl<B: ?Sized> InjectedModalHandler<B> {
    pub fn new(backend: Weak<B>, fallback: NativeFallbackHandler) -> Self {
        Self { backend, fallback }
    }
}

#[async_trait]
impl<B> AlertHandler for InjectedModalHandler<B>
where
    B: AlertBackend + ?Sized,
{
    async fn alert(&self, request: AlertRequest) {
        let Some(backend) = self.backend.upgrade() else {
            warn!("Alert back-end is no longer available, using native fallback");
            return self.fallback.alert(request).await;
        };

        let (done, signal) = AlertCompletion::new();
        backend.show(request, done);
        drop(backend);

        if signal.await.is_err() {
            debug!("Alert back-end dropped its completion, treating the alert as dismissed");
        }
    }
}

#[async_trait]
impl<B> ConfirmHandler for InjectedModalHandler<B>
where
    B: ConfirmBackend + ?Sized,
{
    async fn confirm(&self, request: ConfirmRequest) -> bool {
        let Some(backend) = self.backend.upgrade() else {
            warn!("Confirm back-end is no longer available, using native fallback");
            return self.fallback.confirm(request).await;
        };

        let (done, signal) = ConfirmCompletion::new();
        backend.show(request, done);
        drop(backend);

        signal.await.unwrap_or_else(|_| {
            debug!("Confirm back-end dropped its completion, treating it as cancelled");
            false
        })
    }
}
