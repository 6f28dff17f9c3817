//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate the two pane containers into host-facing intents.
//! - Keep UI/FFI layers decoupled from container bookkeeping.

pub mod workbench;
