//! Launch sequence orchestration.
//!
//! # Responsibility
//! - Run the three launch steps in order: interceptor install, bundled
//!   extension registration, default launch continuation.
//!
//! # Invariants
//! - The interceptor is installed before the extension-registration step.
//! - The continuation runs last and only if both prior steps succeeded.
//! - The continuation's boolean is passed through unchanged.
//!
//! # See also
//! - docs/architecture/launch.md

use crate::channel::host::{ChannelError, MethodChannelHost};
use crate::extension::bundled::register_bundled_extensions;
use crate::extension::registry::{ExtensionError, ExtensionRegistry};
use crate::launch::interceptor::install_preferences_interceptor;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Result of one completed launch sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaunchOutcome {
    /// Continuation signal for the host runtime; `true` lets normal
    /// startup proceed.
    pub proceed: bool,
    /// Number of bundled extensions registered by this launch.
    pub extensions_registered: usize,
}

/// Launch sequence errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchError {
    Channel(ChannelError),
    Extension(ExtensionError),
}

impl Display for LaunchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Channel(err) => write!(f, "launch channel setup failed: {err}"),
            Self::Extension(err) => write!(f, "launch extension registration failed: {err}"),
        }
    }
}

impl Error for LaunchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Channel(err) => Some(err),
            Self::Extension(err) => Some(err),
        }
    }
}

impl From<ChannelError> for LaunchError {
    fn from(value: ChannelError) -> Self {
        Self::Channel(value)
    }
}

impl From<ExtensionError> for LaunchError {
    fn from(value: ExtensionError) -> Self {
        Self::Extension(value)
    }
}

/// Default launch continuation: let normal startup proceed.
///
/// Matches the platform's expected default when nothing vetoes startup.
pub fn default_launch_continuation() -> bool {
    true
}

/// Runs the launch sequence once against caller-owned capabilities.
///
/// Steps, in order:
/// 1. install the preferences interceptor,
/// 2. register the bundled extensions,
/// 3. delegate to `continuation` and pass its boolean through unchanged.
///
/// # Errors
/// - Step failures abort the sequence; the continuation does not run.
/// - Re-running against the same host fails in step 1 with the
///   duplicate-handler error.
pub fn run_launch_sequence<C>(
    host: &mut MethodChannelHost,
    registry: &mut ExtensionRegistry,
    continuation: C,
) -> Result<LaunchOutcome, LaunchError>
where
    C: FnOnce() -> bool,
{
    install_preferences_interceptor(host)?;
    let extensions_registered = register_bundled_extensions(registry, host)?;
    let proceed = continuation();

    info!(
        "event=launch_sequence module=launch status=ok proceed={proceed} extensions={extensions_registered} channels={}",
        host.len()
    );
    Ok(LaunchOutcome {
        proceed,
        extensions_registered,
    })
}
