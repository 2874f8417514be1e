use anyhow::Result;
use clap::{ArgGroup, Parser, ValueEnum};
use lazy_static::lazy_static;
use std::fs::File;
use std::io::{IsTerminal, Write};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::RwLock;

use tracing::level_filters::LevelFilter;
use tracing_indicatif::IndicatifLayer;
use tracing_indicatif::filter::{IndicatifFilter, hide_indicatif_span_fields};
use tracing_subscriber::fmt::format::DefaultFields;
use tracing_subscriber::{Registry, fmt::format::{Format, PrettyFields}, layer::SubscriberExt};
use tracing_subscriber::{filter::filter_fn, prelude::*};

#[derive(Parser, Debug)]
#[clap(group = ArgGroup::new("logging"))]
pub struct LoggingOpts {
    /// A level of verbosity, and can be used multiple times
    #[arg(short, long, action = clap::ArgAction::Count, global(true))]
    pub verbose: u8,

    #[arg(
        long,
        global(true),
        default_value = "auto",
        env = "POPUP_OUTPUT_PROGRESS"
    )]
    /// Set the progress output. Use plain to disable updating UI.
    pub progress: LoggingProgress,

    #[arg(skip = LevelFilter::INFO)]
    default_level: LevelFilter,
}

#[derive(ValueEnum, Debug, Copy, Clone)]
pub enum LoggingProgress {
    /// Determine output format based on execution context
    Auto,
    /// Standard output, no auto-updating output.
    Plain,
    /// Use auto-updating output
    Tty,
}

impl LoggingProgress {
    fn is_tty(&self) -> bool {
        match self {
            LoggingProgress::Auto => std::io::stdout().is_terminal(),
            LoggingProgress::Plain => false,
            LoggingProgress::Tty => true,
        }
    }
}

lazy_static! {
    pub static ref STDOUT_WRITER: Arc<RwLock<Box<dyn Write + Sync + Send>>> =
        Arc::new(RwLock::new(Box::new(std::io::stdout())));
}

pub fn log_dir() -> PathBuf {
    std::env::temp_dir().join("popup")
}

pub fn log_file_path(run_id: &str) -> PathBuf {
    log_dir().join(format!("popup-{}.log", run_id))
}

impl LoggingOpts {
    pub fn to_level_filter(&self) -> LevelFilter {
        match self.verbose {
            0 => self.default_level,
            1 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }

    /// Install the global subscriber. Console output only shows the `user`
    /// and `always` targets, everything goes to a log file named after the run id.
    pub async fn configure_logging(
        &self,
        run_id: &str,
    ) -> Result<(tracing_appender::non_blocking::WorkerGuard, String)> {
        std::fs::create_dir_all(log_dir())?;

        let file_path = log_file_path(run_id);
        let (non_blocking, guard) = tracing_appender::non_blocking(
            strip_ansi_escapes::Writer::new(File::create(&file_path)?),
        );

        let file_output = tracing_subscriber::fmt::layer()
            .event_format(Format::default().pretty())
            .with_ansi(false)
            .with_writer(non_blocking);

        let indicatif_layer = IndicatifLayer::new()
            .with_span_field_formatter(hide_indicatif_span_fields(DefaultFields::new()));
        let indicatif_writer = indicatif_layer.get_stdout_writer();

        *STDOUT_WRITER.write().await = Box::new(indicatif_layer.get_stdout_writer());

        let is_tty_output = self.progress.is_tty();

        let level_filter = self.to_level_filter();
        let console_output = tracing_subscriber::fmt::layer()
            .event_format(
                Format::default()
                    .with_target(false)
                    .without_time()
                    .compact(),
            )
            .with_writer(indicatif_writer)
            .fmt_fields(PrettyFields::new())
            .with_filter(filter_fn(move |metadata| match metadata.target() {
                "user" => level_filter >= *metadata.level(),
                "always" => true,
                "stdout" => false,
                _ => false,
            }));

        let progress_layer = if is_tty_output {
            Some(indicatif_layer.with_filter(IndicatifFilter::new(false)))
        } else {
            None
        };

        let subscriber = Registry::default()
            .with(console_output)
            .with(progress_layer)
            .with(file_output);

        tracing::subscriber::set_global_default(subscriber)?;

        Ok((guard, file_path.display().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Parser)]
    struct TestCli {
        #[clap(flatten)]
        logging: LoggingOpts,
    }

    #[test]
    fn verbosity_raises_level() {
        let cli = TestCli::parse_from(["popup"]);
        assert_eq!(LevelFilter::INFO, cli.logging.to_level_filter());

        let cli = TestCli::parse_from(["popup", "-v"]);
        assert_eq!(LevelFilter::DEBUG, cli.logging.to_level_filter());

        let cli = TestCli::parse_from(["popup", "-vvv"]);
        assert_eq!(LevelFilter::TRACE, cli.logging.to_level_filter());
    }

    #[test]
    fn log_file_is_named_after_run_id() {
        let path = log_file_path("20240101-abcd");
        assert_eq!(log_dir(), path.parent().unwrap());
        assert_eq!("popup-20240101-abcd.log", path.file_name().unwrap());
    }

    #[test]
    fn plain_progress_is_never_tty() {
        let cli = TestCli::parse_from(["popup", "--progress", "plain"]);
        assert!(!cli.logging.progress.is_tty());

        let cli = TestCli::parse_from(["popup", "--progress", "tty"]);
        assert!(cli.logging.progress.is_tty());
    }
}
