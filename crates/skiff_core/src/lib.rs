//! Core platform-channel layer for the Skiff app shell.
//! This crate is the single source of truth for launch-time channel wiring.

pub mod channel;
pub mod extension;
pub mod launch;
pub mod logging;

pub use channel::call::{MethodCall, MethodError, MethodReply};
pub use channel::handler::MethodCallHandler;
pub use channel::host::{ChannelError, ChannelResult, MethodChannelHost};
pub use channel::name::{is_valid_channel_name, MAX_CHANNEL_NAME_LEN};
pub use channel::value::ChannelValue;
pub use extension::bundled::{
    register_bundled_extensions, DiagnosticsExtension, DIAGNOSTICS_CHANNEL,
    DIAGNOSTICS_EXTENSION_ID, DIAGNOSTICS_PING_METHOD, DIAGNOSTICS_VERSION_METHOD,
};
pub use extension::manifest::{ExtensionManifest, ManifestValidationError};
pub use extension::registry::{
    ExtensionAdapter, ExtensionError, ExtensionOrigin, ExtensionRegistry, RegisteredExtension,
};
pub use launch::interceptor::{
    install_preferences_interceptor, preferences_stub_reply, PreferencesLaunchStub,
    PREFERENCES_CHANNEL, PREFERENCES_GET_ALL_METHOD,
};
pub use launch::sequence::{
    default_launch_continuation, run_launch_sequence, LaunchError, LaunchOutcome,
};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn version_is_a_triplet() {
        assert_eq!(core_version().split('.').count(), 3);
    }
}
