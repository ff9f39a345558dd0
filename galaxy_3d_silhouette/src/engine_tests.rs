//! Unit tests for the Engine logging hub
//!
//! IMPORTANT: LOG_STATE is a global OnceLock shared across all tests.
//! Every test that swaps the logger is marked #[serial] and resets it at the end.

use crate::galaxy3d::Engine;
use crate::galaxy3d::log::{Logger, LogEntry, LogSeverity};
use std::sync::{Arc, Mutex};
use serial_test::serial;

// ============================================================================
// TEST HELPERS
// ============================================================================

/// Test logger that captures "Severity: message" lines
struct TestLogger {
    entries: Arc<Mutex<Vec<String>>>,
}

impl TestLogger {
    fn new() -> (Self, Arc<Mutex<Vec<String>>>) {
        let entries = Arc::new(Mutex::new(Vec::new()));
        (Self { entries: entries.clone() }, entries)
    }
}

impl Logger for TestLogger {
    fn log(&self, entry: &LogEntry) {
        let mut entries = self.entries.lock().unwrap();
        entries.push(format!("{:?}: {}", entry.severity, entry.message));
    }
}

// ============================================================================
// THRESHOLD TESTS
// ============================================================================

#[test]
#[serial]
fn test_default_threshold_drops_trace_and_debug() {
    let (logger, entries) = TestLogger::new();
    Engine::set_logger(logger);

    Engine::log(LogSeverity::Trace, "test", "trace".to_string());
    Engine::log(LogSeverity::Debug, "test", "debug".to_string());
    Engine::log(LogSeverity::Info, "test", "info".to_string());

    assert_eq!(*entries.lock().unwrap(), vec!["Info: info".to_string()]);

    Engine::reset_logger();
}

#[test]
#[serial]
fn test_set_min_severity_trace_passes_everything() {
    let (logger, entries) = TestLogger::new();
    Engine::set_logger(logger);
    Engine::set_min_severity(LogSeverity::Trace);

    Engine::log(LogSeverity::Trace, "test", "a".to_string());
    Engine::log(LogSeverity::Debug, "test", "b".to_string());

    assert_eq!(entries.lock().unwrap().len(), 2);
    assert!(Engine::is_enabled(LogSeverity::Trace));

    Engine::reset_logger();
    assert_eq!(Engine::min_severity(), LogSeverity::Info);
}

#[test]
#[serial]
fn test_set_min_severity_error_silences_warnings() {
    let (logger, entries) = TestLogger::new();
    Engine::set_logger(logger);
    Engine::set_min_severity(LogSeverity::Error);

    Engine::log(LogSeverity::Warn, "test", "ignored".to_string());
    Engine::log_detailed(LogSeverity::Error, "test", "kept".to_string(), "x.rs", 7);

    assert_eq!(*entries.lock().unwrap(), vec!["Error: kept".to_string()]);

    Engine::reset_logger();
}

// ============================================================================
// MACRO TESTS
// ============================================================================

#[test]
#[serial]
fn test_engine_err_macro_logs_and_builds_variant() {
    let (logger, entries) = TestLogger::new();
    Engine::set_logger(logger);

    let err = crate::engine_err!("galaxy3d::Test", InvariantViolation, "id {} missing", 9);

    assert_eq!(err, crate::galaxy3d::Error::InvariantViolation("id 9 missing".to_string()));
    assert_eq!(*entries.lock().unwrap(), vec!["Error: id 9 missing".to_string()]);

    Engine::reset_logger();
}

#[test]
#[serial]
fn test_engine_bail_macro_returns_early() {
    fn check(value: u16) -> crate::galaxy3d::Result<u16> {
        if value == 0 {
            crate::engine_bail!("galaxy3d::Test", InvalidConfig, "value must be non-zero");
        }
        Ok(value)
    }

    let (logger, _entries) = TestLogger::new();
    Engine::set_logger(logger);

    assert_eq!(check(3), Ok(3));
    assert!(matches!(check(0), Err(crate::galaxy3d::Error::InvalidConfig(_))));

    Engine::reset_logger();
}
