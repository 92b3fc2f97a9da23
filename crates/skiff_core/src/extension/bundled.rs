//! Bundled extension set and its registrant.
//!
//! # Responsibility
//! - Declare the extensions compiled into the shell.
//! - Register all of them in one deterministic step during launch.
//!
//! # Invariants
//! - Bundled extensions never claim the preferences channel; the launch
//!   interceptor owns it before this step runs.

use crate::channel::call::{MethodCall, MethodReply};
use crate::channel::handler::MethodCallHandler;
use crate::channel::host::{ChannelError, MethodChannelHost};
use crate::channel::value::ChannelValue;
use crate::extension::manifest::ExtensionManifest;
use crate::extension::registry::{
    ExtensionAdapter, ExtensionError, ExtensionOrigin, ExtensionRegistry,
};
use log::info;

/// Channel claimed by the diagnostics extension.
pub const DIAGNOSTICS_CHANNEL: &str = "skiff/diagnostics";
/// Stable id of the diagnostics extension.
pub const DIAGNOSTICS_EXTENSION_ID: &str = "builtin.shell.diagnostics";
/// Liveness probe method; replies `"pong"`.
pub const DIAGNOSTICS_PING_METHOD: &str = "ping";
/// Core version probe method; replies the crate version string.
pub const DIAGNOSTICS_VERSION_METHOD: &str = "version";

struct DiagnosticsHandler;

impl MethodCallHandler for DiagnosticsHandler {
    fn on_method_call(&self, call: &MethodCall) -> MethodReply {
        match call.method.as_str() {
            DIAGNOSTICS_PING_METHOD => MethodReply::Success(ChannelValue::string("pong")),
            DIAGNOSTICS_VERSION_METHOD => {
                MethodReply::Success(ChannelValue::string(crate::core_version()))
            }
            _ => MethodReply::NotImplemented,
        }
    }
}

/// Built-in liveness/version probe extension.
///
/// Gives the embedded UI layer a channel-level health check that works
/// before any feature code is wired up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticsExtension {
    manifest: ExtensionManifest,
}

impl DiagnosticsExtension {
    pub fn new() -> Self {
        Self {
            manifest: ExtensionManifest {
                id: DIAGNOSTICS_EXTENSION_ID.to_string(),
                version: crate::core_version().to_string(),
                channels: vec![DIAGNOSTICS_CHANNEL.to_string()],
            },
        }
    }
}

impl Default for DiagnosticsExtension {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtensionAdapter for DiagnosticsExtension {
    fn manifest(&self) -> &ExtensionManifest {
        &self.manifest
    }

    fn origin(&self) -> ExtensionOrigin {
        ExtensionOrigin::Bundled
    }

    fn attach(&self, host: &mut MethodChannelHost) -> Result<(), ChannelError> {
        host.register_handler(DIAGNOSTICS_CHANNEL, DiagnosticsHandler)
    }
}

/// Registers every bundled extension against `registry` and `host`.
///
/// This is the generated-registrant step of the launch sequence. Returns
/// the number of extensions registered by this call.
///
/// # Errors
/// - Propagates the first registration failure unchanged; extensions
///   registered before the failure stay registered.
pub fn register_bundled_extensions(
    registry: &mut ExtensionRegistry,
    host: &mut MethodChannelHost,
) -> Result<usize, ExtensionError> {
    let mut registered = 0usize;

    registry.register(&DiagnosticsExtension::new(), host)?;
    registered += 1;

    info!("event=bundled_register module=extension status=ok count={registered}");
    Ok(registered)
}
