mod config_load;
mod logging;

pub const RUN_ID_ENV_VAR: &str = "POPUP_RUN_ID";

pub mod prelude {
    pub use super::RUN_ID_ENV_VAR;
    pub use super::config_load::{
        ConfigOptions, FallbackMode, FoundConfig, PopupSettings, SettingsError,
    };
    pub use super::logging::{LoggingOpts, LoggingProgress, STDOUT_WRITER, log_dir, log_file_path};
}
