//! Logging setup and injectable log sinks
//!
//! The binary configures `env_logger` exactly once at startup via [`init`].
//! Library components never assume that global state: each one holds a
//! [`Diagnostics`] handle, which forwards to the global `log` facade by default
//! or to an explicitly supplied logger (see [`MemoryLogger`]).

use std::fmt;
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::{Arc, Mutex, PoisonError};

use anyhow::Context;
use log::{Level, Log, Metadata, Record};

/// Log target used for every record emitted by the library
pub const LOG_TARGET: &str = "chatter";

/// Environment variable naming a file that log output is appended to
pub const LOG_FILE_ENV: &str = "CHATTER_LOG_FILE";

/// Initialize the process-wide logger
///
/// Defaults to `info` (or `debug` when `verbose`), overridable through
/// `RUST_LOG`. When `log_file` is given, records are appended to it instead of
/// going to stderr.
pub fn init(verbose: bool, log_file: Option<&Path>) -> anyhow::Result<()> {
    let default_filter = if verbose { "debug" } else { "info" };
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter));

    if let Some(path) = log_file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open log file {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.try_init().context("Logger was already initialized")?;
    Ok(())
}

/// Handle through which library components emit log records
#[derive(Clone, Default)]
pub struct Diagnostics {
    sink: Option<Arc<dyn Log>>,
}

impl fmt::Debug for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sink = if self.sink.is_some() { "custom" } else { "global" };
        f.debug_struct("Diagnostics").field("sink", &sink).finish()
    }
}

impl Diagnostics {
    /// Forward records to the global `log` facade
    #[must_use]
    pub const fn global() -> Self {
        Self { sink: None }
    }

    /// Forward records to the given logger only
    #[must_use]
    pub fn with_logger(logger: Arc<dyn Log>) -> Self {
        Self { sink: Some(logger) }
    }

    /// Emit a record at the given level
    pub fn log(&self, level: Level, args: fmt::Arguments<'_>) {
        let record = Record::builder().level(level).target(LOG_TARGET).args(args).build();

        match &self.sink {
            Some(logger) => {
                if logger.enabled(record.metadata()) {
                    logger.log(&record);
                }
            },
            None => {
                let logger = log::logger();
                if level <= log::max_level() && logger.enabled(record.metadata()) {
                    logger.log(&record);
                }
            },
        }
    }

    /// Emit a debug record
    pub fn debug(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Debug, args);
    }

    /// Emit an info record
    pub fn info(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Info, args);
    }

    /// Emit a warning record
    pub fn warn(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Warn, args);
    }
}

/// Logger that keeps every record in memory
///
/// Useful for asserting on the warning lines that leaf operations emit instead
/// of returning errors.
#[derive(Debug, Default)]
pub struct MemoryLogger {
    records: Mutex<Vec<(Level, String)>>,
}

impl MemoryLogger {
    /// Create an empty logger
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All captured records, oldest first
    #[must_use]
    pub fn records(&self) -> Vec<(Level, String)> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Captured messages at exactly `level`
    #[must_use]
    pub fn messages_at(&self, level: Level) -> Vec<String> {
        self.records()
            .into_iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, message)| message)
            .collect()
    }
}

impl Log for MemoryLogger {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((record.level(), record.args().to_string()));
    }

    fn flush(&self) {}
}
