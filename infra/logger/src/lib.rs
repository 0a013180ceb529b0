//! # Logger
//!
//! Installs the global `tracing` subscriber for the Vesla apps from the `[log]` section of
//! [`SiteConfig`](vesla_domain::config::SiteConfig).
//!
//! * Console output is compact and colored.
//! * `log.directory` adds a daily rolling file per app, plain text or JSON lines, written by a
//!   non-blocking worker. The returned [`Logger`] owns that worker; keep it alive.
//! * `log.filter` is layered over `log.level`; without it `RUST_LOG` applies.
//!
//! ## Example
//!
//! ```rust
//! # use vesla_domain::config::SiteConfig;
//! # use vesla_logger::Logger;
//! let site = SiteConfig::default();
//! let _logger = Logger::builder().name("vesla-desktop").config(&site.log).init().unwrap();
//! ```

mod error;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;

use std::fs;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt};
use vesla_domain::config::{LogConfig, LogLevel};

const LOG_FILE_SUFFIX: &str = "log";

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Builder state before [`LoggerBuilder::name`] is called.
#[derive(Debug)]
pub struct Unnamed;

/// Builder state carrying the app name used as the log file prefix.
#[derive(Debug)]
pub struct Named(String);

/// Collects the app name and its [`LogConfig`] before installing the subscriber.
///
/// `init` only exists once a name is set.
#[derive(Debug)]
pub struct LoggerBuilder<N = Unnamed> {
    name: N,
    console: bool,
    settings: LogConfig,
}

impl LoggerBuilder<Unnamed> {
    pub fn name(self, name: impl Into<String>) -> LoggerBuilder<Named> {
        LoggerBuilder { name: Named(name.into()), console: self.console, settings: self.settings }
    }
}

impl LoggerBuilder<Named> {
    /// Applies a `[log]` config section, replacing every earlier setting.
    #[must_use]
    pub fn config(mut self, settings: &LogConfig) -> Self {
        self.settings = settings.clone();
        self
    }

    #[must_use]
    pub const fn level(mut self, level: LogLevel) -> Self {
        self.settings.level = level;
        self
    }

    /// Extra directives on top of the level, e.g. `vesla_server=debug,tower_http=info`.
    #[must_use]
    pub fn env_filter(mut self, filter: impl Into<String>) -> Self {
        self.settings.filter = Some(filter.into());
        self
    }

    /// Turns the terminal layer off, for file-only logging.
    #[must_use]
    pub const fn console(mut self, enabled: bool) -> Self {
        self.console = enabled;
        self
    }

    /// Installs the global subscriber.
    ///
    /// # Errors
    /// * [`LoggerError::InvalidConfiguration`]: blank name, zero `max_files`, a malformed
    ///   filter, or neither console nor file output enabled.
    /// * [`LoggerError::Io`] / [`LoggerError::Appender`]: the log directory is unusable.
    /// * [`LoggerError::Subscriber`]: a global subscriber is already installed.
    pub fn init(self) -> Result<Logger, LoggerError> {
        let Self { name: Named(name), console, settings } = self;
        let name = name.trim();
        if name.is_empty() {
            return Err(invalid("Logger name cannot be empty"));
        }

        let filter = env_filter(&settings)?;
        let mut layers: Vec<BoxedLayer> = Vec::with_capacity(2);

        if console {
            layers.push(fmt::layer().compact().with_ansi(true).boxed());
        }

        let guard = match settings.directory.as_deref() {
            Some(directory) => {
                let (layer, guard) = file_layer(directory, name, &settings)?;
                layers.push(layer);
                Some(guard)
            },
            None => None,
        };

        if layers.is_empty() {
            return Err(invalid("Console is disabled and no log directory is configured"));
        }

        tracing_subscriber::registry().with(layers).with(filter).try_init()?;
        tracing::debug!(
            app = name,
            level = ?settings.level,
            directory = ?settings.directory,
            json = settings.json,
            "Logging initialized"
        );

        Ok(Logger { guard })
    }
}

/// Keeps the file writer's worker thread alive; dropping it flushes pending lines.
#[must_use = "Dropping this handle stops file logging."]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    /// Starts from console output at the default level, with no file output.
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder { name: Unnamed, console: true, settings: LogConfig::default() }
    }

    /// Whether a log directory is being written.
    #[must_use]
    pub const fn writes_files(&self) -> bool {
        self.guard.is_some()
    }
}

/// Maps the configured level onto `tracing`'s filter.
#[must_use]
pub const fn level_filter(level: LogLevel) -> LevelFilter {
    match level {
        LogLevel::Off => LevelFilter::OFF,
        LogLevel::Error => LevelFilter::ERROR,
        LogLevel::Warn => LevelFilter::WARN,
        LogLevel::Info => LevelFilter::INFO,
        LogLevel::Debug => LevelFilter::DEBUG,
        LogLevel::Trace => LevelFilter::TRACE,
    }
}

fn env_filter(settings: &LogConfig) -> Result<EnvFilter, LoggerError> {
    let builder = EnvFilter::builder().with_default_directive(level_filter(settings.level).into());
    match settings.filter.as_deref() {
        Some(directives) => builder.parse(directives).map_err(|e| {
            LoggerError::InvalidConfiguration {
                message: format!("Invalid log filter '{directives}': {e}").into(),
                context: None,
            }
        }),
        None => Ok(builder.from_env_lossy()),
    }
}

fn file_layer(
    directory: &Path,
    name: &str,
    settings: &LogConfig,
) -> Result<(BoxedLayer, WorkerGuard), LoggerError> {
    if settings.max_files == 0 {
        return Err(invalid("log.max_files must be greater than zero"));
    }

    fs::create_dir_all(directory)
        .context(format!("Failed to create log directory: {}", directory.display()))?;

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(name)
        .filename_suffix(LOG_FILE_SUFFIX)
        .max_log_files(settings.max_files)
        .build(directory)
        .context(format!("Failed to open log files in {}", directory.display()))?;

    let (writer, guard) = tracing_appender::non_blocking(appender);
    let layer = fmt::layer().with_writer(writer).with_ansi(false);
    let layer = if settings.json { layer.json().boxed() } else { layer.boxed() };

    Ok((layer, guard))
}

fn invalid(message: &'static str) -> LoggerError {
    LoggerError::InvalidConfiguration { message: message.into(), context: None }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn config_replaces_defaults() {
        let settings = LogConfig {
            level: LogLevel::Warn,
            filter: Some("vesla=debug".to_owned()),
            directory: Some(PathBuf::from("logs")),
            json: true,
            max_files: 3,
        };

        let builder = Logger::builder().name("vesla-test").config(&settings);
        assert!(builder.console);
        assert_eq!(builder.settings, settings);

        let builder = builder.level(LogLevel::Trace).console(false);
        assert_eq!(builder.settings.level, LogLevel::Trace);
        assert!(!builder.console);
    }

    #[test]
    fn levels_map_onto_tracing_filters() {
        assert_eq!(level_filter(LogLevel::Off), LevelFilter::OFF);
        assert_eq!(level_filter(LogLevel::default()), LevelFilter::INFO);
        assert_eq!(level_filter(LogLevel::Trace), LevelFilter::TRACE);
    }

    #[test]
    fn rejects_blank_name() {
        let err = Logger::builder().name("   ").init();
        assert!(matches!(err, Err(LoggerError::InvalidConfiguration { .. })));
    }

    #[test]
    fn rejects_zero_retention_for_file_output() {
        let settings = LogConfig {
            directory: Some(PathBuf::from("unused-logs")),
            max_files: 0,
            ..LogConfig::default()
        };
        let err = Logger::builder().name("vesla-test").config(&settings).init();
        assert!(matches!(err, Err(LoggerError::InvalidConfiguration { .. })));
    }

    #[test]
    fn rejects_malformed_filter() {
        let err = Logger::builder().name("vesla-test").env_filter("vesla=loudest").init();
        assert!(matches!(err, Err(LoggerError::InvalidConfiguration { .. })));
    }

    #[test]
    fn rejects_config_without_outputs() {
        let err = Logger::builder().name("vesla-test").console(false).init();
        assert!(matches!(err, Err(LoggerError::InvalidConfiguration { .. })));
    }
}
