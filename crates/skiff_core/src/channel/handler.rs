//! Method call handler contract.
//!
//! # Responsibility
//! - Define the callback shape the channel host invokes per incoming call.
//!
//! # Invariants
//! - Handlers reply synchronously and promptly; the host runtime may treat
//!   a non-responsive handler as an error.
//! - Handlers are invoked through `&self` and may be called any number of
//!   times; shared state needs interior mutability and must stay `Sync`.

use crate::channel::call::{MethodCall, MethodReply};

/// Synchronous callback invoked by the channel host for one incoming call.
///
/// # Contract
/// - Must return exactly one reply per call, without blocking.
/// - Must be total over the method name: unrecognized methods reply
///   [`MethodReply::NotImplemented`] instead of panicking.
/// - `Send + Sync` because registration happens during launch while dispatch
///   may arrive later on the embedder's platform thread.
pub trait MethodCallHandler: Send + Sync {
    /// Produces the reply for one incoming call.
    fn on_method_call(&self, call: &MethodCall) -> MethodReply;
}

// Lets the pure-function form plug in directly: any
// `Fn(&MethodCall) -> MethodReply` closure is a handler.
impl<F> MethodCallHandler for F
where
    F: Fn(&MethodCall) -> MethodReply + Send + Sync,
{
    fn on_method_call(&self, call: &MethodCall) -> MethodReply {
        self(call)
    }
}
