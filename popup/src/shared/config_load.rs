use crate::gateway::prelude::{DialogGateway, NativeFallbackHandler};
use crate::native::{AutoApprove, DenyAll, TerminalDialogs};
use crate::shared::RUN_ID_ENV_VAR;
use clap::{ArgGroup, Parser, ValueEnum};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Unable to read settings file {path}. {error}")]
    Read {
        path: String,
        #[source]
        error: std::io::Error,
    },
    #[error("Unable to parse settings file {path}. {error}")]
    Parse {
        path: String,
        #[source]
        error: serde_yaml::Error,
    },
}

/// What dialogs fall back to when no modal back-end handles them.
#[derive(ValueEnum, Deserialize, Debug, Default, Copy, Clone, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FallbackMode {
    /// Prompt in the terminal. Behaves like `log` when stdin is not a TTY.
    #[default]
    Terminal,
    /// Accept every confirmation without asking
    Approve,
    /// Decline every confirmation without asking
    Deny,
    /// Only log dialogs; confirmations are declined
    #[serde(alias = "none")]
    #[value(alias = "none")]
    Log,
}

/// Contents of the optional YAML settings file.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct PopupSettings {
    #[serde(default)]
    pub fallback: Option<FallbackMode>,
}

#[derive(Parser, Debug, Default)]
#[clap(group = ArgGroup::new("config"))]
pub struct ConfigOptions {
    /// Path to a YAML settings file.
    #[arg(long, env = "POPUP_SETTINGS", global(true))]
    settings: Option<PathBuf>,

    /// How dialogs are answered when no modal back-end is registered. Overrides the settings file.
    #[arg(long, value_enum, env = "POPUP_FALLBACK", global(true))]
    fallback: Option<FallbackMode>,

    /// When outputting logs, the run-id is the unique value that will define where these go.
    /// In the case that the run-id is re-used, the old values will be overwritten.
    #[arg(long, global(true), env = RUN_ID_ENV_VAR)]
    run_id: Option<String>,
}

impl ConfigOptions {
    pub fn generate_run_id() -> String {
        let id = nanoid::nanoid!(4, &nanoid::alphabet::SAFE);
        let now = chrono::Local::now();
        let current_time = now.format("%Y%m%d");
        format!("{}-{}", current_time, id)
    }

    pub fn get_run_id(&self) -> String {
        self.run_id.clone().unwrap_or_else(Self::generate_run_id)
    }

    pub async fn load_config(&self, run_id: &str) -> Result<FoundConfig, SettingsError> {
        let settings = match &self.settings {
            Some(path) => read_settings(path).await?,
            None => PopupSettings::default(),
        };

        let fallback = self
            .fallback
            .or(settings.fallback)
            .unwrap_or_default();

        let found_config = FoundConfig {
            settings,
            settings_path: self.settings.clone(),
            fallback,
            run_id: run_id.to_string(),
        };

        debug!("Loaded config {:?}", found_config);

        Ok(found_config)
    }
}

async fn read_settings(path: &Path) -> Result<PopupSettings, SettingsError> {
    let display = path.display().to_string();
    let body = tokio::fs::read_to_string(path)
        .await
        .map_err(|error| SettingsError::Read {
            path: display.clone(),
            error,
        })?;

    if body.trim().is_empty() {
        return Ok(PopupSettings::default());
    }

    serde_yaml::from_str(&body).map_err(|error| SettingsError::Parse {
        path: display,
        error,
    })
}

#[derive(Debug, Clone)]
pub struct FoundConfig {
    pub settings: PopupSettings,
    pub settings_path: Option<PathBuf>,
    pub fallback: FallbackMode,
    pub run_id: String,
}

impl FoundConfig {
    pub fn native_fallback(&self) -> NativeFallbackHandler {
        match self.fallback {
            FallbackMode::Terminal => match TerminalDialogs::detect() {
                Some(terminal) => NativeFallbackHandler::new(Arc::new(terminal)),
                None => {
                    warn!("Input device is not a TTY, dialogs will only be logged");
                    NativeFallbackHandler::unavailable()
                }
            },
            FallbackMode::Approve => NativeFallbackHandler::new(Arc::new(AutoApprove)),
            FallbackMode::Deny => NativeFallbackHandler::new(Arc::new(DenyAll)),
            FallbackMode::Log => NativeFallbackHandler::unavailable(),
        }
    }

    pub fn build_gateway(&self) -> DialogGateway {
        DialogGateway::new(self.native_fallback())
    }
}
