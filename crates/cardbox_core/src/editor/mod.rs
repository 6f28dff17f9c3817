//! Sequence-editor pane: ordered card arrangement and drop geometry.
//!
//! # Responsibility
//! - Own the ordered working list semantics (`sequence`).
//! - Map host-reported drop coordinates to insertion indices (`layout`).
//!
//! # Invariants
//! - Sequence mutations stay inside the pane; cross-pane effects are the
//!   coordinator's job.

pub mod layout;
pub mod sequence;
