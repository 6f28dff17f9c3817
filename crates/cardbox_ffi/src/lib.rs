//! Host-facing FFI crate for the Cardbox core.
//!
//! # Responsibility
//! - Bridge `cardbox_core` use-cases to the UI host through flat sync calls.
//! - Keep the boundary panic-free and string-friendly.

pub mod api;
