//! Shell logging bootstrap and safety policy.
//!
//! # Responsibility
//! - Initialize file-based rolling logs at most once per process.
//! - Leave a log trace for panics that would otherwise vanish at the FFI
//!   boundary.
//!
//! # Invariants
//! - Initialization is idempotent for an identical level + directory pair.
//! - Reconfiguration attempts are rejected, never applied.
//! - Initialization must not panic.

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::{error, info};
use once_cell::sync::OnceCell;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

const LOG_FILE_BASENAME: &str = "skiff";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 5 * 1024 * 1024;
const MAX_LOG_FILES: usize = 3;
const MAX_PANIC_SUMMARY_CHARS: usize = 200;

static LOGGING: OnceCell<LoggingState> = OnceCell::new();
static PANIC_HOOK: OnceCell<()> = OnceCell::new();

struct LoggingState {
    level: &'static str,
    log_dir: PathBuf,
    _handle: LoggerHandle,
}

/// Logging bootstrap errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoggingError {
    /// Level is not one of `trace|debug|info|warn|error`.
    UnsupportedLevel(String),
    /// Directory is empty, relative, or cannot be created.
    InvalidLogDir(String),
    /// Logging is already active with a different configuration.
    AlreadyInitialized { active: String, requested: String },
    /// Logger backend refused to start.
    Backend(String),
}

impl Display for LoggingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedLevel(value) => write!(
                f,
                "unsupported log level `{value}`; expected trace|debug|info|warn|error"
            ),
            Self::InvalidLogDir(message) => write!(f, "invalid log directory: {message}"),
            Self::AlreadyInitialized { active, requested } => write!(
                f,
                "logging already initialized ({active}); refusing to switch to ({requested})"
            ),
            Self::Backend(message) => write!(f, "logger backend failed to start: {message}"),
        }
    }
}

impl Error for LoggingError {}

/// Initializes shell logging with a level and an absolute log directory.
///
/// # Invariants
/// - Repeat calls with the same effective config are idempotent.
/// - Calls with a different level or directory fail with
///   `AlreadyInitialized` and leave the active config untouched.
/// - Never panics.
///
/// # Errors
/// - `UnsupportedLevel`, `InvalidLogDir` for bad input.
/// - `Backend` when the rolling-file logger cannot start.
pub fn init_logging(level: &str, log_dir: &str) -> Result<(), LoggingError> {
    let level = normalize_level(level)?;
    let log_dir = normalize_log_dir(log_dir)?;

    let state = LOGGING.get_or_try_init(|| start_rolling_logger(level, &log_dir))?;
    if state.level != level || state.log_dir != log_dir {
        return Err(LoggingError::AlreadyInitialized {
            active: format!("{} at {}", state.level, state.log_dir.display()),
            requested: format!("{} at {}", level, log_dir.display()),
        });
    }
    Ok(())
}

/// Returns `(level, log_dir)` when logging is active, `None` otherwise.
pub fn logging_status() -> Option<(&'static str, PathBuf)> {
    LOGGING
        .get()
        .map(|state| (state.level, state.log_dir.clone()))
}

/// Default log level for the current build mode.
///
/// - `debug` builds -> `debug`
/// - `release` builds -> `info`
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

fn start_rolling_logger(
    level: &'static str,
    log_dir: &Path,
) -> Result<LoggingState, LoggingError> {
    std::fs::create_dir_all(log_dir).map_err(|err| {
        LoggingError::InvalidLogDir(format!("cannot create `{}`: {err}", log_dir.display()))
    })?;

    let handle = Logger::try_with_str(level)
        .map_err(|err| LoggingError::Backend(err.to_string()))?
        .log_to_file(
            FileSpec::default()
                .directory(log_dir)
                .basename(LOG_FILE_BASENAME),
        )
        .rotate(
            Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(MAX_LOG_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        .format_for_files(flexi_logger::detailed_format)
        .start()
        .map_err(|err| LoggingError::Backend(err.to_string()))?;

    install_panic_hook();

    info!(
        "event=logging_ready module=shell status=ok level={level} log_dir={} version={} build_mode={} platform={}",
        log_dir.display(),
        env!("CARGO_PKG_VERSION"),
        build_mode(),
        std::env::consts::OS
    );

    Ok(LoggingState {
        level,
        log_dir: log_dir.to_path_buf(),
        _handle: handle,
    })
}

fn normalize_level(level: &str) -> Result<&'static str, LoggingError> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        other => Err(LoggingError::UnsupportedLevel(other.to_string())),
    }
}

fn normalize_log_dir(log_dir: &str) -> Result<PathBuf, LoggingError> {
    let trimmed = log_dir.trim();
    if trimmed.is_empty() {
        return Err(LoggingError::InvalidLogDir("path is empty".to_string()));
    }
    let path = Path::new(trimmed);
    if !path.is_absolute() {
        return Err(LoggingError::InvalidLogDir(format!(
            "path must be absolute, got `{trimmed}`"
        )));
    }
    Ok(path.to_path_buf())
}

fn build_mode() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}

fn install_panic_hook() {
    if PANIC_HOOK.set(()).is_err() {
        return;
    }

    let previous_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let location = panic_info
            .location()
            .map(|loc| format!("{}:{}", loc.file(), loc.line()))
            .unwrap_or_else(|| "unknown".to_string());
        error!(
            "event=panic module=shell status=error location={location} payload={}",
            panic_summary(panic_info)
        );
        previous_hook(panic_info);
    }));
}

// Panic payloads can carry user-controlled text; collapse newlines and cap
// length before the message reaches the log file.
fn panic_summary(info: &std::panic::PanicHookInfo<'_>) -> String {
    let payload = if let Some(message) = info.payload().downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = info.payload().downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    };
    clamp_line(payload.as_str(), MAX_PANIC_SUMMARY_CHARS)
}

fn clamp_line(value: &str, max_chars: usize) -> String {
    let collapsed = value.replace(['\n', '\r'], " ");
    let mut clamped: String = collapsed.chars().take(max_chars).collect();
    if collapsed.chars().count() > max_chars {
        clamped.push_str("...");
    }
    clamped
}
