//! Flutter-facing FFI crate for the Skiff shell core.
//!
//! Thin FRB surface over `skiff_core`. All exported functions live in
//! [`api`]; this crate adds no behavior of its own beyond envelope
//! mapping and process-global runtime state.

pub mod api;
