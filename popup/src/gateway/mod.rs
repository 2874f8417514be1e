mod backend;
mod config;
mod dialog_gateway;
mod handler;
mod request;

pub mod prelude {
    pub use super::backend::{
        AlertBackend, AlertCompletion, ConfirmBackend, ConfirmCompletion, MockAlertBackend,
        MockConfirmBackend,
    };
    pub use super::config::{
        AlertConfig, AlertConfigBuilder, ConfirmConfig, ConfirmConfigBuilder, CustomDialogConfig,
        DEFAULT_ALERT_CLOSE_TEXT, DEFAULT_ALERT_TITLE, DEFAULT_CANCEL_TEXT, DEFAULT_CONFIRM_TEXT,
        DEFAULT_CONFIRM_TITLE, DialogConfigError, Severity,
    };
    pub use super::dialog_gateway::DialogGateway;
    pub use super::handler::{
        AlertHandler, ConfirmHandler, InjectedModalHandler, NativeFallbackHandler,
    };
    pub use super::request::{AlertRequest, ConfirmRequest, DialogKind, DialogRequest};
}
