//! Capability contract for application supplied modal components.
//!
//! A back-end receives fully resolved display parameters and a completion
//! handle. The handle is consumed when completed, so it can fire at most once.
//! Dropping it without completing still resolves the pending call: an alert
//! counts as dismissed and a confirmation as cancelled.

use super::request::{AlertRequest, ConfirmRequest};
use mockall::automock;
use tokio::sync::oneshot;
use tracing::debug;

#[automock]
pub trait AlertBackend: Send + Sync {
    fn show(&self, request: AlertRequest, done: AlertCompletion);
}

#[automock]
pub trait ConfirmBackend: Send + Sync {
    fn show(&self, request: ConfirmRequest, done: ConfirmCompletion);
}

#[derive(Debug)]
pub struct AlertCompletion {
    sender: oneshot::Sender<()>,
}

impl AlertCompletion {
    pub(crate) fn new() -> (Self, oneshot::Receiver<()>) {
        let (sender, receiver) = oneshot::channel();
        (Self { sender }, receiver)
    }

    /// Signal that the alert was dismissed.
    pub fn done(self) {
        if self.sender.send(()).is_err() {
            debug!("Alert completed after its caller went away");
        }
    }
}

#[derive(Debug)]
pub struct ConfirmCompletion {
    sender: oneshot::Sender<bool>,
}

impl ConfirmCompletion {
    pub(crate) fn new() -> (Self, oneshot::Receiver<bool>) {
        let (sender, receiver) = oneshot::channel();
        (Self { sender }, receiver)
    }

    pub fn accept(self) {
        self.resolve(true)
    }

    pub fn cancel(self) {
        self.resolve(false)
    }

    pub fn resolve(self, confirmed: bool) {
        if self.sender.send(confirmed).is_err() {
            debug!("Confirmation completed after its caller went away");
        }
    }
}
