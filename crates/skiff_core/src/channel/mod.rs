//! Method-channel contracts and the in-process channel host.
//!
//! # Responsibility
//! - Model the named call paths between the embedded UI layer and platform
//!   code: payload values, call/reply envelopes, handler contract, host.
//!
//! # Invariants
//! - One handler per channel per host lifetime.
//! - Every dispatched call produces exactly one reply.
//!
//! # See also
//! - docs/architecture/channels.md

pub mod call;
pub mod handler;
pub mod host;
pub mod name;
pub mod value;
