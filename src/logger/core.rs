//! Logging primitives for the flight-graph importer.
//!
//! A purposely small logging surface: a `LogLevel` enum, a `Logger` trait
//! that is trivial to implement in tests, a no-op default, and a stdout
//! logger that emits one JSON object per line for structured collectors.

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Short string representation suitable for log output.
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "TRACE",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }
}

/// Minimal logger interface used throughout the importer.
///
/// Implementors must be `Send + Sync + 'static` so a logger can be stored
/// in the global facade and shared between threads. Only `log` needs an
/// implementation; the level helpers delegate to it.
pub trait Logger: Send + Sync + 'static {
    /// Emit a log record at the given level.
    fn log(&self, _level: LogLevel, _message: &str) {}

    /// Flush any buffered records.
    fn flush(&self) {}

    fn trace(&self, message: &str) {
        self.log(LogLevel::Trace, message);
    }
    fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message);
    }
    fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }
    fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, message);
    }
    fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }
}

/// Logger that drops every message; the default in tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopLogger;

impl Logger for NoopLogger {
    fn log(&self, _level: LogLevel, _message: &str) {
        // intentionally do nothing
    }
}

/// Stdout logger writing one compact JSON object per record.
///
/// Example: `{"ts":"...","level":"WARN","msg":"..."}`
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutLogger;

impl Logger for StdoutLogger {
    fn log(&self, level: LogLevel, message: &str) {
        let ts = chrono::Utc::now().to_rfc3339();
        let json = serde_json::json!({
            "ts": ts,
            "level": level.as_str(),
            "msg": message,
        });
        println!("{}", json);
    }

    fn flush(&self) {
        // stdout is line-buffered; nothing to do
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loglevel_as_str() {
        assert_eq!(LogLevel::Trace.as_str(), "TRACE");
        assert_eq!(LogLevel::Debug.as_str(), "DEBUG");
        assert_eq!(LogLevel::Info.as_str(), "INFO");
        assert_eq!(LogLevel::Warn.as_str(), "WARN");
        assert_eq!(LogLevel::Error.as_str(), "ERROR");
    }

    #[test]
    fn test_loglevel_ordering_is_monotonic() {
        assert!(LogLevel::Trace < LogLevel::Debug);
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Warn);
        assert!(LogLevel::Warn < LogLevel::Error);
    }

    #[test]
    fn test_nooplogger_accepts_all_levels() {
        let logger = NoopLogger;
        logger.trace("trace");
        logger.debug("debug");
        logger.info("info");
        logger.warn("warn");
        logger.error("error");
        logger.flush();
    }

    #[derive(Default)]
    struct TestLogger {
        entries: std::sync::Mutex<Vec<(LogLevel, String)>>,
    }

    impl Logger for TestLogger {
        fn log(&self, level: LogLevel, msg: &str) {
            self.entries.lock().unwrap().push((level, msg.to_string()));
        }
    }

    #[test]
    fn test_trait_default_methods_route_to_log() {
        let logger = TestLogger::default();
        logger.info("info");
        logger.warn("warn");

        let entries = logger.entries.lock().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].0, LogLevel::Info);
        assert_eq!(entries[0].1, "info");
        assert_eq!(entries[1].0, LogLevel::Warn);
    }

    #[test]
    fn test_trait_handles_empty_message() {
        let logger = TestLogger::default();
        logger.info("");

        let entries = logger.entries.lock().unwrap();
        assert_eq!(entries[0].1, "");
    }
}
