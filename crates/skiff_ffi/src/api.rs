//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose the launch sequence and channel dispatch to Dart via FRB.
//! - Own the process-global shell runtime (channel host + extension
//!   registry) behind a mutex.
//! - Keep error semantics simple for early-stage UI integration.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Payloads cross the boundary as JSON text with stable meaning.
//! - `shell_launch` runs the launch sequence at most once per process;
//!   repeat calls replay the cached outcome.
//!
//! # See also
//! - docs/architecture/launch.md

use log::{debug, warn};
use skiff_core::{
    core_version as core_version_inner, default_launch_continuation, default_log_level,
    init_logging as init_logging_inner, run_launch_sequence, ChannelValue, ExtensionRegistry,
    LaunchOutcome, MethodCall, MethodChannelHost, MethodReply,
};
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};

const DEFAULT_LOG_DIR_NAME: &str = "skiff-logs";
static DEFAULT_LOG_DIR: OnceLock<PathBuf> = OnceLock::new();
static SHELL: OnceLock<Mutex<ShellRuntime>> = OnceLock::new();

/// Process-global shell state shared by all FFI calls.
struct ShellRuntime {
    host: MethodChannelHost,
    registry: ExtensionRegistry,
    outcome: Option<LaunchOutcome>,
}

impl ShellRuntime {
    fn new() -> Self {
        Self {
            host: MethodChannelHost::new(),
            registry: ExtensionRegistry::new(),
            outcome: None,
        }
    }
}

/// Launch result envelope for the app shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchResponse {
    /// Continuation signal; `true` lets normal startup proceed.
    pub proceed: bool,
    /// Number of bundled extensions registered for this process.
    pub extensions_registered: u32,
    /// Human-readable response message for diagnostics.
    pub message: String,
}

/// Dispatch result envelope for one channel call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchResponse {
    /// Reply kind: `success|not_implemented|error|invalid_arguments`.
    pub kind: String,
    /// JSON-encoded success value (present only for `success`).
    pub value_json: Option<String>,
    /// Stable machine-readable error code (present only for `error`).
    pub error_code: Option<String>,
    /// Human-readable error description.
    pub error_message: Option<String>,
    /// JSON-encoded structured error details, when a handler attached any.
    pub error_details_json: Option<String>,
}

impl DispatchResponse {
    fn success(value_json: String) -> Self {
        Self {
            kind: "success".to_string(),
            value_json: Some(value_json),
            error_code: None,
            error_message: None,
            error_details_json: None,
        }
    }

    fn not_implemented() -> Self {
        Self {
            kind: "not_implemented".to_string(),
            value_json: None,
            error_code: None,
            error_message: None,
            error_details_json: None,
        }
    }

    fn error(code: String, message: String, details_json: Option<String>) -> Self {
        Self {
            kind: "error".to_string(),
            value_json: None,
            error_code: Some(code),
            error_message: Some(message),
            error_details_json: details_json,
        }
    }

    fn invalid_arguments(message: impl Into<String>) -> Self {
        Self {
            kind: "invalid_arguments".to_string(),
            value_json: None,
            error_code: None,
            error_message: Some(message.into()),
            error_details_json: None,
        }
    }
}

/// Runs the shell launch sequence once and reports its outcome.
///
/// # FFI contract
/// - Sync call, in-process work only.
/// - Idempotent: repeat calls replay the first outcome and say so in
///   `message`.
/// - Never throws; launch failures surface as `proceed = false` with a
///   diagnostic message.
#[flutter_rust_bridge::frb(sync)]
pub fn shell_launch() -> LaunchResponse {
    let mut runtime = lock_shell();
    if let Some(outcome) = runtime.outcome {
        debug!("event=shell_launch module=ffi status=ok detail=already_launched");
        return LaunchResponse {
            proceed: outcome.proceed,
            extensions_registered: outcome.extensions_registered as u32,
            message: "Shell already launched.".to_string(),
        };
    }

    let ShellRuntime { host, registry, .. } = &mut *runtime;
    match run_launch_sequence(host, registry, default_launch_continuation) {
        Ok(outcome) => {
            runtime.outcome = Some(outcome);
            LaunchResponse {
                proceed: outcome.proceed,
                extensions_registered: outcome.extensions_registered as u32,
                message: "Launch sequence complete.".to_string(),
            }
        }
        Err(err) => {
            warn!("event=shell_launch module=ffi status=error error={err}");
            LaunchResponse {
                proceed: false,
                extensions_registered: 0,
                message: format!("shell_launch failed: {err}"),
            }
        }
    }
}

/// Reports whether the launch sequence has completed in this process.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws.
#[flutter_rust_bridge::frb(sync)]
pub fn shell_launched() -> bool {
    lock_shell().outcome.is_some()
}

/// Dispatches one method call to the named channel.
///
/// Input semantics:
/// - `args_json`: JSON-encoded argument payload; `None` or blank text
///   sends a null payload.
///
/// # FFI contract
/// - Sync call, in-process work only.
/// - Total: every call gets exactly one reply envelope. Unbound
///   channels (including all channels before `shell_launch`) reply
///   `not_implemented`.
/// - Never throws; malformed `args_json` replies `invalid_arguments`
///   without reaching any handler.
#[flutter_rust_bridge::frb(sync)]
pub fn shell_dispatch(
    channel: String,
    method: String,
    args_json: Option<String>,
) -> DispatchResponse {
    let arguments = match decode_arguments(args_json.as_deref()) {
        Ok(value) => value,
        Err(message) => {
            warn!("event=shell_dispatch module=ffi status=error error_code=invalid_arguments channel={channel} method={method}");
            return DispatchResponse::invalid_arguments(message);
        }
    };

    let runtime = lock_shell();
    let reply = runtime
        .host
        .dispatch(&channel, &MethodCall::new(method, arguments));
    to_dispatch_response(reply)
}

/// Exposes the shell core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn shell_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes shell logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
///   Blank text resolves the build-mode default.
/// - `log_dir`: absolute directory path where rolling logs are written.
///   Blank text resolves a per-process default (`SKIFF_LOG_DIR`, else a
///   `skiff-logs` directory under the system temp dir).
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Reconfiguration attempts with different level or directory return error.
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    let effective_level = if level.trim().is_empty() {
        default_log_level()
    } else {
        level.as_str()
    };
    let resolved = resolve_log_dir(log_dir.as_str());
    match init_logging_inner(effective_level, resolved.to_string_lossy().as_ref()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

fn lock_shell() -> std::sync::MutexGuard<'static, ShellRuntime> {
    SHELL
        .get_or_init(|| Mutex::new(ShellRuntime::new()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn decode_arguments(args_json: Option<&str>) -> Result<ChannelValue, String> {
    let raw = match args_json {
        Some(raw) if !raw.trim().is_empty() => raw,
        _ => return Ok(ChannelValue::Null),
    };
    serde_json::from_str::<ChannelValue>(raw)
        .map_err(|err| format!("argument payload is not valid JSON: {err}"))
}

fn to_dispatch_response(reply: MethodReply) -> DispatchResponse {
    match reply {
        MethodReply::Success(value) => match serde_json::to_string(&value) {
            Ok(json) => DispatchResponse::success(json),
            Err(err) => DispatchResponse::error(
                "reply_encode_failed".to_string(),
                format!("reply value could not be encoded: {err}"),
                None,
            ),
        },
        MethodReply::NotImplemented => DispatchResponse::not_implemented(),
        MethodReply::Error(err) => {
            let details_json = if err.details.is_null() {
                None
            } else {
                serde_json::to_string(&err.details).ok()
            };
            DispatchResponse::error(err.code, err.message, details_json)
        }
    }
}

fn resolve_log_dir(log_dir: &str) -> PathBuf {
    let trimmed = log_dir.trim();
    if !trimmed.is_empty() {
        return PathBuf::from(trimmed);
    }
    DEFAULT_LOG_DIR
        .get_or_init(|| {
            if let Ok(raw) = std::env::var("SKIFF_LOG_DIR") {
                let trimmed = raw.trim();
                if !trimmed.is_empty() {
                    return PathBuf::from(trimmed);
                }
            }
            std::env::temp_dir().join(DEFAULT_LOG_DIR_NAME)
        })
        .clone()
}

#[cfg(test)]
mod tests {
    use super::{init_logging, shell_dispatch, shell_launch, shell_launched, shell_version};
    use skiff_core::{DIAGNOSTICS_CHANNEL, PREFERENCES_CHANNEL};

    // The shell runtime is process-global, so every test launches first
    // and asserts only facts that hold in any test order.

    #[test]
    fn version_is_not_empty() {
        assert!(!shell_version().is_empty());
    }

    #[test]
    fn launch_reports_bundled_extension_count() {
        let response = shell_launch();
        assert!(response.proceed, "{}", response.message);
        assert_eq!(response.extensions_registered, 1);
    }

    #[test]
    fn repeat_launch_replays_cached_outcome() {
        shell_launch();
        let repeat = shell_launch();
        assert!(repeat.proceed);
        assert_eq!(repeat.extensions_registered, 1);
        assert!(repeat.message.contains("already"), "{}", repeat.message);
        assert!(shell_launched());
    }

    #[test]
    fn get_all_returns_empty_json_object() {
        shell_launch();
        let response = shell_dispatch(PREFERENCES_CHANNEL.to_string(), "getAll".to_string(), None);
        assert_eq!(response.kind, "success");
        assert_eq!(response.value_json.as_deref(), Some("{}"));
        assert_eq!(response.error_code, None);
    }

    #[test]
    fn get_all_ignores_argument_payload() {
        shell_launch();
        let response = shell_dispatch(
            PREFERENCES_CHANNEL.to_string(),
            "getAll".to_string(),
            Some(r#"{"flushInterval": 5}"#.to_string()),
        );
        assert_eq!(response.kind, "success");
        assert_eq!(response.value_json.as_deref(), Some("{}"));
    }

    #[test]
    fn unknown_preference_method_is_not_implemented() {
        shell_launch();
        let response = shell_dispatch(PREFERENCES_CHANNEL.to_string(), "clear".to_string(), None);
        assert_eq!(response.kind, "not_implemented");
        assert_eq!(response.value_json, None);
        assert_eq!(response.error_message, None);
    }

    #[test]
    fn diagnostics_ping_answers_pong() {
        shell_launch();
        let response = shell_dispatch(DIAGNOSTICS_CHANNEL.to_string(), "ping".to_string(), None);
        assert_eq!(response.kind, "success");
        assert_eq!(response.value_json.as_deref(), Some("\"pong\""));
    }

    #[test]
    fn malformed_args_json_is_rejected_before_dispatch() {
        shell_launch();
        let response = shell_dispatch(
            PREFERENCES_CHANNEL.to_string(),
            "getAll".to_string(),
            Some("{not json".to_string()),
        );
        assert_eq!(response.kind, "invalid_arguments");
        assert!(response.error_message.is_some());
        assert_eq!(response.value_json, None);
    }

    #[test]
    fn blank_args_json_counts_as_null_payload() {
        shell_launch();
        let response = shell_dispatch(
            PREFERENCES_CHANNEL.to_string(),
            "getAll".to_string(),
            Some("   ".to_string()),
        );
        assert_eq!(response.kind, "success");
        assert_eq!(response.value_json.as_deref(), Some("{}"));
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_resolves_blank_level_and_dir_to_defaults() {
        let first = init_logging(String::new(), String::new());
        assert_eq!(first, "");
        let repeat = init_logging(String::new(), String::new());
        assert_eq!(repeat, "");
    }
}
