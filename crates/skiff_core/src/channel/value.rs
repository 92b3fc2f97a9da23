//! Channel payload value model.
//!
//! # Responsibility
//! - Define the self-describing value domain carried over method channels.
//! - Keep payloads opaque to the host: values are routed, never interpreted.
//!
//! # Invariants
//! - `Map` keys are strings; the JSON transport used by the FFI layer cannot
//!   carry non-string keys.
//! - The serde representation is untagged, so the JSON form matches the wire
//!   shape produced by the embedded UI layer (`{}`, `null`, `[1, 2]`, ...).
//!
//! # See also
//! - docs/architecture/channels.md

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Payload value for method-channel calls and replies.
///
/// Covers the value domain of the embedded UI layer's standard message
/// codec. `Float` makes this type `PartialEq` but not `Eq`; types embedding
/// it inherit that bound.
///
/// Variant order matters for untagged deserialization: `Int` must precede
/// `Float` so integral JSON numbers stay integral.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChannelValue {
    /// Absent value; also used when a call carries no arguments.
    Null,
    /// Boolean flag.
    Bool(bool),
    /// Signed 64-bit integer.
    Int(i64),
    /// IEEE-754 double.
    Float(f64),
    /// UTF-8 text.
    Str(String),
    /// Ordered list of values.
    List(Vec<ChannelValue>),
    /// String-keyed mapping with deterministic key order.
    Map(BTreeMap<String, ChannelValue>),
}

impl ChannelValue {
    /// Returns the zero-entry mapping.
    ///
    /// This is the reply body the launch interceptor sends for the
    /// recognized method.
    pub fn empty_map() -> Self {
        Self::Map(BTreeMap::new())
    }

    /// Convenience constructor for string payloads.
    pub fn string(value: impl Into<String>) -> Self {
        Self::Str(value.into())
    }

    /// Returns whether this value is `Null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns whether this value is a mapping with zero entries.
    pub fn is_empty_map(&self) -> bool {
        matches!(self, Self::Map(entries) if entries.is_empty())
    }
}

impl Default for ChannelValue {
    fn default() -> Self {
        Self::Null
    }
}
