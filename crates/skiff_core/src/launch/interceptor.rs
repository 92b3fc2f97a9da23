//! Launch-time stub for the legacy preferences channel.
//!
//! # Responsibility
//! - Claim the preferences channel before any extension can, and answer its
//!   one recognized method with an empty store.
//!
//! # Invariants
//! - The stub is a total function over the method name: it cannot fail,
//!   block, or produce an application error.
//! - The argument payload is never inspected.
//! - No call is forwarded anywhere and no state is read or written.
//!
//! # See also
//! - docs/architecture/launch.md

use crate::channel::call::{MethodCall, MethodReply};
use crate::channel::handler::MethodCallHandler;
use crate::channel::host::{ChannelResult, MethodChannelHost};
use crate::channel::value::ChannelValue;
use log::info;

/// Channel the embedded UI layer's preferences plugin calls.
///
/// The value must match the counterpart calling layer exactly; it is part
/// of that layer's wire contract, not ours to rename.
pub const PREFERENCES_CHANNEL: &str = "plugins.flutter.io/shared_preferences";

/// The one intercepted request type: a full read of the stored values.
pub const PREFERENCES_GET_ALL_METHOD: &str = "getAll";

/// Pure reply function for the preferences stub.
///
/// # Contract
/// - `"getAll"` (exact, case-sensitive) replies success with an empty
///   mapping.
/// - Every other method name replies the not-implemented signal.
pub fn preferences_stub_reply(method: &str) -> MethodReply {
    if method == PREFERENCES_GET_ALL_METHOD {
        MethodReply::Success(ChannelValue::empty_map())
    } else {
        MethodReply::NotImplemented
    }
}

/// Handler adapter over [`preferences_stub_reply`].
///
/// With this installed, the preferences plugin on the UI side observes an
/// empty store at launch and treats every other operation as unsupported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PreferencesLaunchStub;

impl MethodCallHandler for PreferencesLaunchStub {
    fn on_method_call(&self, call: &MethodCall) -> MethodReply {
        // The reply depends on the method name alone; arguments are ignored.
        preferences_stub_reply(call.method.as_str())
    }
}

/// Installs the preferences stub on its channel.
///
/// Runs once per launch, before the extension-registration step.
///
/// # Errors
/// - The duplicate-handler error when the channel is already claimed, which
///   only happens if a launch sequence runs twice against one host.
pub fn install_preferences_interceptor(host: &mut MethodChannelHost) -> ChannelResult<()> {
    host.register_handler(PREFERENCES_CHANNEL, PreferencesLaunchStub)?;
    info!("event=launch_interceptor module=launch status=ok channel={PREFERENCES_CHANNEL}");
    Ok(())
}
