/// Galaxy3D Engine - global logging hub for the silhouette pass
///
/// The silhouette renderer is owned by the caller; the only process-wide
/// state is the logger and its severity threshold. Both live in a
/// thread-safe static so the logging macros can reach them from anywhere.

use std::sync::{OnceLock, RwLock};
use std::time::SystemTime;
use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};

// ===== INTERNAL STATE =====

/// Global logging state (initialized lazily with DefaultLogger)
static LOG_STATE: OnceLock<LogState> = OnceLock::new();

/// Severity threshold applied when nothing else was configured
const DEFAULT_MIN_SEVERITY: LogSeverity = LogSeverity::Info;

struct LogState {
    logger: RwLock<Box<dyn Logger>>,
    min_severity: RwLock<LogSeverity>,
}

impl LogState {
    fn new() -> Self {
        Self {
            logger: RwLock::new(Box::new(DefaultLogger)),
            min_severity: RwLock::new(DEFAULT_MIN_SEVERITY),
        }
    }
}

fn log_state() -> &'static LogState {
    LOG_STATE.get_or_init(LogState::new)
}

// ===== PUBLIC API =====

/// Engine-wide logging entry point
///
/// # Example
///
/// ```no_run
/// use galaxy_3d_silhouette::galaxy3d::{Engine, log::{Logger, LogEntry, LogSeverity}};
///
/// struct FileLogger;
/// impl Logger for FileLogger {
///     fn log(&self, entry: &LogEntry) {
///         // Write to file...
///     }
/// }
///
/// Engine::set_logger(FileLogger);
/// Engine::set_min_severity(LogSeverity::Trace);
/// ```
pub struct Engine;

impl Engine {
    /// Replace the current logger
    pub fn set_logger<L: Logger + 'static>(logger: L) {
        if let Ok(mut lock) = log_state().logger.write() {
            *lock = Box::new(logger);
        }
    }

    /// Reset logger to default (DefaultLogger) and the threshold to Info
    pub fn reset_logger() {
        let state = log_state();
        if let Ok(mut lock) = state.logger.write() {
            *lock = Box::new(DefaultLogger);
        }
        if let Ok(mut lock) = state.min_severity.write() {
            *lock = DEFAULT_MIN_SEVERITY;
        }
    }

    /// Drop every entry below `severity` before it reaches the logger
    pub fn set_min_severity(severity: LogSeverity) {
        if let Ok(mut lock) = log_state().min_severity.write() {
            *lock = severity;
        }
    }

    /// Current severity threshold
    pub fn min_severity() -> LogSeverity {
        log_state()
            .min_severity
            .read()
            .map(|s| *s)
            .unwrap_or(DEFAULT_MIN_SEVERITY)
    }

    /// Whether an entry of this severity would reach the logger
    pub fn is_enabled(severity: LogSeverity) -> bool {
        severity >= Self::min_severity()
    }

    /// Internal logging method (for simple logs without file:line)
    ///
    /// Used by macros like engine_info!, engine_warn!, etc.
    pub fn log(severity: LogSeverity, source: &str, message: String) {
        Self::dispatch(severity, source, message, None, None);
    }

    /// Internal logging method with file:line information (for ERROR logs)
    ///
    /// Used by engine_error! macro to include source location.
    pub fn log_detailed(
        severity: LogSeverity,
        source: &str,
        message: String,
        file: &'static str,
        line: u32,
    ) {
        Self::dispatch(severity, source, message, Some(file), Some(line));
    }

    fn dispatch(
        severity: LogSeverity,
        source: &str,
        message: String,
        file: Option<&'static str>,
        line: Option<u32>,
    ) {
        if !Self::is_enabled(severity) {
            return;
        }
        if let Ok(lock) = log_state().logger.read() {
            lock.log(&LogEntry {
                severity,
                timestamp: SystemTime::now(),
                source: source.to_string(),
                message,
                file,
                line,
            });
        }
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
