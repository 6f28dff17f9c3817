//! Repository-pane storage abstractions.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts for the card collection.
//! - Isolate container bookkeeping from coordinator orchestration.
//!
//! # Invariants
//! - Store writes must enforce `Card::validate()` before the collection
//!   changes.
//! - Store APIs return semantic errors (`NotFound`, `DuplicateId`) instead
//!   of silently masking bad ids.

pub mod card_store;
