use crate::logger::{init_logger, log, LogLevel, NoopLogger, StdoutLogger};

#[test]
fn global_facade_noop_by_default() {
    // calling log without init must not panic (no-op)
    log(LogLevel::Info, "should not panic");
}

#[test]
fn init_sets_global_logger() {
    init_logger(NoopLogger);
    log(LogLevel::Info, "using noop");
}

#[test]
fn stdout_logger_emits_json() {
    // smoke check that StdoutLogger formats without panicking
    init_logger(StdoutLogger);
    log(LogLevel::Warn, "this is a warning");
}
