//! Method call and reply envelopes.
//!
//! # Responsibility
//! - Define the request/reply pair exchanged over one channel call.
//! - Keep the three reply kinds of the counterpart layer distinguishable:
//!   success value, not-implemented signal, and application error.
//!
//! # Invariants
//! - Method names are matched exactly; no trimming or case folding.
//! - `NotImplemented` is a normal, handleable outcome, never an error.
//!
//! # See also
//! - docs/architecture/channels.md

use crate::channel::value::ChannelValue;

/// One incoming call on a method channel.
///
/// The argument payload is opaque: the host routes it to the handler
/// unchanged and never inspects it.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodCall {
    /// Request type identifier, matched exactly by handlers.
    pub method: String,
    /// Opaque argument payload; `ChannelValue::Null` when absent.
    pub arguments: ChannelValue,
}

impl MethodCall {
    /// Creates a call with an explicit argument payload.
    pub fn new(method: impl Into<String>, arguments: ChannelValue) -> Self {
        Self {
            method: method.into(),
            arguments,
        }
    }

    /// Creates a call without arguments (`arguments = Null`).
    pub fn without_arguments(method: impl Into<String>) -> Self {
        Self::new(method, ChannelValue::Null)
    }
}

/// Application-level error envelope carried by `MethodReply::Error`.
///
/// Matches the counterpart layer's error reply shape: a stable machine
/// code, a human-readable message, and optional structured details.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodError {
    /// Stable machine-readable error code.
    pub code: String,
    /// Human-readable description for diagnostics.
    pub message: String,
    /// Optional structured details; `Null` when absent.
    pub details: ChannelValue,
}

impl MethodError {
    /// Creates an error envelope without structured details.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: ChannelValue::Null,
        }
    }

    /// Attaches structured details to this error envelope.
    pub fn with_details(mut self, details: ChannelValue) -> Self {
        self.details = details;
        self
    }
}

/// Reply sent back for one incoming call. Exactly one per call.
#[derive(Debug, Clone, PartialEq)]
pub enum MethodReply {
    /// Normal result value.
    Success(ChannelValue),
    /// Distinguished "this request type is not handled here" signal.
    ///
    /// Callers treat this as a normal outcome; it is not an application
    /// error and must stay distinguishable from one.
    NotImplemented,
    /// Application-level failure reported by a handler.
    Error(MethodError),
}

impl MethodReply {
    /// Stable label for logging and FFI envelopes.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Success(_) => "success",
            Self::NotImplemented => "not_implemented",
            Self::Error(_) => "error",
        }
    }

    /// Returns whether this reply carries a success value.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns whether this reply is the not-implemented signal.
    pub fn is_not_implemented(&self) -> bool {
        matches!(self, Self::NotImplemented)
    }
}
