//! Launch-time channel wiring.
//!
//! # Responsibility
//! - Provide the startup entry path: interceptor install, bundled extension
//!   registration, continuation delegation.
//!
//! # Invariants
//! - One launch sequence per host lifetime; the channel host enforces this
//!   through single-assignment registration.
//!
//! # See also
//! - docs/architecture/launch.md

pub mod interceptor;
pub mod sequence;
