//! Drag-and-drop transfer contract.
//!
//! # Responsibility
//! - Model the payload captured at drag pick-up and consumed at drop.
//!
//! # Invariants
//! - `ExistingCard` carries a value snapshot, never a live reference; the
//!   source card may change or vanish between pick-up and drop without
//!   affecting the payload.

use crate::model::card::{Card, CardId};
use serde::{Deserialize, Serialize};

/// Payload produced by a drag pick-up and consumed by one drop.
///
/// Replaces the dual-role "card with optional markers" shape: the two drag
/// sources are distinct variants, so consumers match instead of probing
/// marker fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TransferPayload {
    /// Snapshot of a repository card picked up for filing into the editor.
    ExistingCard { snapshot: Card },
    /// The blank-card drag source; the editor synthesizes the card on drop.
    NewCardRequest,
}

impl TransferPayload {
    /// Returns the snapshot id for existing-card payloads.
    pub fn card_id(&self) -> Option<CardId> {
        match self {
            Self::ExistingCard { snapshot } => Some(snapshot.id),
            Self::NewCardRequest => None,
        }
    }

    /// Returns whether this payload requests a fresh blank card.
    pub fn is_new_card(&self) -> bool {
        matches!(self, Self::NewCardRequest)
    }
}
