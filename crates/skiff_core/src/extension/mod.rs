//! Extension registration contracts.
//!
//! This module defines declaration-time contracts for bundled extensions
//! and the in-process registry the launch sequence drives. Runtime loading
//! and sandboxing are out of scope for this baseline.

pub mod bundled;
pub mod manifest;
pub mod registry;
