//! # Logger
//!
//! Installs the process-wide `tracing` subscriber: a compact console layer and,
//! when a directory is configured, a non-blocking daily-rolling file layer
//! (plain text or JSON). `RUST_LOG` is honoured unless an explicit filter
//! directive is supplied.
//!
//! ```rust,no_run
//! use ipnt_logger::{LevelFilter, Logger};
//!
//! let _logger = Logger::builder()
//!     .name("ipnt-server")
//!     .level(LevelFilter::DEBUG)
//!     .init()
//!     .expect("logger");
//! ```

mod error;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;

use ipnt_domain::config::LogConfig;
use std::fs;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

const DEFAULT_NAME: &str = "ipnt";
const MAX_LOG_FILES: usize = 14;
const LOG_FILE_SUFFIX: &str = "log";

/// Configures and installs the global subscriber.
#[derive(Debug)]
pub struct LoggerBuilder {
    name: String,
    console: bool,
    level: LevelFilter,
    filter: Option<String>,
    dir: Option<PathBuf>,
    json: bool,
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_owned(),
            console: true,
            level: LevelFilter::INFO,
            filter: None,
            dir: None,
            json: false,
        }
    }
}

impl LoggerBuilder {
    /// Prefix of the log file names.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub const fn console(mut self, enabled: bool) -> Self {
        self.console = enabled;
        self
    }

    /// Default level when neither [`Self::env_filter`] nor `RUST_LOG` says otherwise.
    #[must_use]
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    /// Explicit directive such as `ipnt_directory=debug,tower_http=info`; takes precedence over `RUST_LOG`.
    #[must_use]
    pub fn env_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// Enables the rolling file layer in `dir`.
    #[must_use]
    pub fn path(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dir = Some(dir.into());
        self
    }

    /// Writes file output as JSON lines.
    #[must_use]
    pub const fn json(mut self, enabled: bool) -> Self {
        self.json = enabled;
        self
    }

    /// Applies the `[log]` section of the server configuration.
    ///
    /// # Errors
    /// Returns [`LoggerError::InvalidConfiguration`] if `level` is not a tracing level.
    pub fn config(mut self, config: &LogConfig) -> Result<Self, LoggerError> {
        self.level = config.level.parse().map_err(|_| LoggerError::InvalidConfiguration {
            message: format!("Unknown log level '{}'", config.level).into(),
            context: None,
        })?;
        self.filter.clone_from(&config.filter);
        self.dir.clone_from(&config.dir);
        self.json = config.json;
        Ok(self)
    }

    /// Installs the subscriber.
    ///
    /// Keep the returned [`Logger`] alive for the lifetime of the process so
    /// buffered file output is flushed.
    ///
    /// # Errors
    /// * [`LoggerError::InvalidConfiguration`] for an empty name, a bad filter or no outputs.
    /// * [`LoggerError::Directory`] / [`LoggerError::Appender`] if file output cannot be set up.
    /// * [`LoggerError::Subscriber`] if a global subscriber is already installed.
    pub fn init(self) -> Result<Logger, LoggerError> {
        if self.name.trim().is_empty() {
            return Err(invalid("Logger name cannot be empty"));
        }
        if !self.console && self.dir.is_none() {
            return Err(invalid("No logging output enabled, enable the console or set a directory"));
        }

        let filter = self.env_filter_layer()?;
        let mut layers = Vec::new();

        if self.console {
            layers.push(layer().compact().with_ansi(true).boxed());
        }

        let guard = match &self.dir {
            Some(dir) => {
                fs::create_dir_all(dir)
                    .context(format!("Failed to create {}", dir.display()))?;

                let appender = RollingFileAppender::builder()
                    .rotation(Rotation::DAILY)
                    .filename_prefix(&self.name)
                    .filename_suffix(LOG_FILE_SUFFIX)
                    .max_log_files(MAX_LOG_FILES)
                    .build(dir)
                    .context(format!("Log directory {}", dir.display()))?;

                let (writer, guard) = tracing_appender::non_blocking(appender);
                let file = layer().with_writer(writer).with_ansi(false);
                layers.push(if self.json { file.json().boxed() } else { file.boxed() });
                Some(guard)
            }
            None => None,
        };

        tracing_subscriber::registry().with(filter).with(layers).try_init()?;

        Ok(Logger { guard })
    }

    fn env_filter_layer(&self) -> Result<EnvFilter, LoggerError> {
        let builder = EnvFilter::builder().with_default_directive(self.level.into());
        match &self.filter {
            None => Ok(builder.from_env_lossy()),
            Some(directive) => builder.parse(directive).map_err(|err| LoggerError::InvalidConfiguration {
                message: format!("Invalid filter '{directive}': {err}").into(),
                context: None,
            }),
        }
    }
}

fn invalid(message: &'static str) -> LoggerError {
    LoggerError::InvalidConfiguration { message: message.into(), context: None }
}

/// Handle to the installed subscriber; owns the file writer's worker guard.
#[must_use = "Dropping this handle stops the background log writer."]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::default()
    }

    /// `true` when a file layer is active.
    pub const fn writes_files(&self) -> bool {
        self.guard.is_some()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::info!("Logger shutting down, flushing log files");
        }
    }
}
