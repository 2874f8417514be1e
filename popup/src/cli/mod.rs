//! Command line front-end for the dialog gateway.
//!
//! Each subcommand builds a dialog config from its flags (optionally layered
//! over a JSON mapping given with `--config-json`) and awaits the gateway.

mod commands;

pub mod prelude {
    pub use super::commands::{
        AlertArgs, ConfirmArgs, ShowArgs, alert_root, confirm_root, show_root,
    };
}
