//! Top-level logger exports and a small global facade.
//!
//! Re-exports the core logging primitives and exposes a process-wide
//! facade for binaries that prefer a single global logger instance.
//!
//! - `Logger`: trait defining the logging surface
//! - `LogLevel`: enum of levels
//! - `NoopLogger`: default no-op implementation
//! - `StdoutLogger`: stdout-backed JSON-line logger
//!
//! ```rust,no_run
//! use flight_graph::logger;
//! logger::init_logger(logger::StdoutLogger);
//! logger::info("import started");
//! ```

pub mod core;

pub use core::{LogLevel, Logger, NoopLogger, StdoutLogger};

use std::sync::RwLock;

/// Process-wide logger used by the convenience functions below.
///
/// Callers install a logger once early in `main` (or swap one in from test
/// setup via `set_logger_for_tests`); until then every facade call is a
/// no-op. Reads take the lock only long enough to dispatch one record.
static GLOBAL_LOGGER: RwLock<Option<Box<dyn Logger>>> = RwLock::new(None);

/// Installs the global logger for the lifetime of the program.
pub fn init_logger<L: Logger>(logger: L) {
    if let Ok(mut slot) = GLOBAL_LOGGER.write() {
        *slot = Some(Box::new(logger));
    }
}

/// For tests: swap in a logger to be used by the global facade.
pub fn set_logger_for_tests<L: Logger>(logger: L) {
    init_logger(logger);
}

/// Log using the global logger if set, otherwise no-op.
pub fn log(level: LogLevel, message: &str) {
    if let Ok(slot) = GLOBAL_LOGGER.read() {
        if let Some(logger) = slot.as_ref() {
            logger.log(level, message);
        }
    }
}

pub fn debug(msg: &str) {
    log(LogLevel::Debug, msg);
}

pub fn info(msg: &str) {
    log(LogLevel::Info, msg);
}

pub fn warn(msg: &str) {
    log(LogLevel::Warn, msg);
}

pub fn error(msg: &str) {
    log(LogLevel::Error, msg);
}

#[cfg(test)]
pub mod tests;
