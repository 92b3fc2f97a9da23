//! In-process method channel host.
//!
//! # Responsibility
//! - Keep the per-process mapping from channel name to installed handler.
//! - Route one incoming call to one handler and return its reply unchanged.
//!
//! # Invariants
//! - Exactly one handler per channel per host lifetime; registration is
//!   single-assignment and there is no unregister or replace operation.
//! - Dispatch is synchronous and total: a channel with no handler replies
//!   `NotImplemented`, mirroring the counterpart layer's behavior for
//!   unbound channels.
//! - Dispatch never forwards a call anywhere else.
//!
//! # See also
//! - docs/architecture/channels.md

use crate::channel::call::{MethodCall, MethodReply};
use crate::channel::handler::MethodCallHandler;
use crate::channel::name::is_valid_channel_name;
use log::{debug, info, warn};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ChannelResult<T> = Result<T, ChannelError>;

/// Registration errors for the channel host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChannelError {
    /// Channel name failed the naming discipline.
    InvalidChannelName(String),
    /// The channel already has its one handler for this host lifetime.
    HandlerAlreadyInstalled(String),
}

impl Display for ChannelError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidChannelName(name) => write!(f, "invalid channel name: `{name}`"),
            Self::HandlerAlreadyInstalled(name) => {
                write!(f, "channel already has a handler installed: {name}")
            }
        }
    }
}

impl Error for ChannelError {}

/// Registry and dispatcher for named method channels.
///
/// The host is the channel-registration capability handed to launch code:
/// callers own it and pass it by explicit reference, so tests can run any
/// number of independent hosts in one process.
#[derive(Default)]
pub struct MethodChannelHost {
    handlers: BTreeMap<String, Box<dyn MethodCallHandler>>,
}

impl MethodChannelHost {
    /// Creates a host with no channels bound.
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs the one handler for `channel`.
    ///
    /// # Errors
    /// - `InvalidChannelName` when the name fails validation.
    /// - `HandlerAlreadyInstalled` when the channel is already bound; the
    ///   existing handler is left untouched.
    pub fn register_handler(
        &mut self,
        channel: impl Into<String>,
        handler: impl MethodCallHandler + 'static,
    ) -> ChannelResult<()> {
        let channel = channel.into();
        if !is_valid_channel_name(channel.as_str()) {
            warn!("event=channel_register module=channel status=error error_code=invalid_name channel={channel}");
            return Err(ChannelError::InvalidChannelName(channel));
        }
        if self.handlers.contains_key(channel.as_str()) {
            warn!("event=channel_register module=channel status=error error_code=already_installed channel={channel}");
            return Err(ChannelError::HandlerAlreadyInstalled(channel));
        }

        info!("event=channel_register module=channel status=ok channel={channel}");
        self.handlers.insert(channel, Box::new(handler));
        Ok(())
    }

    /// Routes one call to the handler bound to `channel`.
    ///
    /// Total over input: an unbound channel replies `NotImplemented`. The
    /// handler's reply is returned unchanged.
    pub fn dispatch(&self, channel: &str, call: &MethodCall) -> MethodReply {
        let Some(handler) = self.handlers.get(channel) else {
            debug!(
                "event=channel_dispatch module=channel status=ok channel={channel} method={} reply=not_implemented bound=false",
                call.method
            );
            return MethodReply::NotImplemented;
        };

        let reply = handler.on_method_call(call);
        debug!(
            "event=channel_dispatch module=channel status=ok channel={channel} method={} reply={}",
            call.method,
            reply.kind()
        );
        reply
    }

    /// Returns whether `channel` has a handler installed.
    pub fn has_handler(&self, channel: &str) -> bool {
        self.handlers.contains_key(channel)
    }

    /// Returns the number of bound channels.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Returns whether no channels are bound.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Returns bound channel names in sorted order.
    pub fn channel_names(&self) -> Vec<&str> {
        self.handlers.keys().map(String::as_str).collect()
    }
}

impl std::fmt::Debug for MethodChannelHost {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MethodChannelHost")
            .field("channels", &self.channel_names())
            .finish()
    }
}
