//! Domain model for the two-pane card organizer.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Keep one card shape for both the repository and sequence-editor panes.
//!
//! # Invariants
//! - Every domain object is identified by a stable `CardId`.
//! - Cross-pane transfer always travels as a `TransferPayload` value copy.

pub mod card;
pub mod transfer;
