//! Ordered working sequence of cards being arranged for export.
//!
//! # Responsibility
//! - Own the editor pane's ordered card list and its local mutations.
//! - Consume transfer payloads: synthesize blanks, guard duplicate drops.
//!
//! # Invariants
//! - At most one entry per card id; a repeated existing-card drop is a
//!   soft no-op, never a second entry.
//! - Pure permutations (`reorder`) and local edits never reach outside the
//!   sequence; repository side effects belong to the coordinator.

use crate::model::card::{Card, CardId};
use crate::model::transfer::TransferPayload;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type EditorResult<T> = Result<T, EditorError>;

/// Editor error for sequence operations.
#[derive(Debug, PartialEq, Eq)]
pub enum EditorError {
    /// A reorder index fell outside `[0, len)`.
    IndexOutOfRange { index: usize, len: usize },
    /// The referenced card is not in the sequence.
    NotFound(CardId),
}

impl Display for EditorError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IndexOutOfRange { index, len } => {
                write!(f, "sequence index {index} out of range for length {len}")
            }
            Self::NotFound(id) => write!(f, "sequence card not found: {id}"),
        }
    }
}

impl Error for EditorError {}

/// One entry in the working sequence.
///
/// Every entry is editable by definition; `ephemeral` marks blanks that were
/// born in the editor and have no repository counterpart yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceCard {
    pub card: Card,
    pub ephemeral: bool,
}

/// Outcome of consuming one drop payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// A card entered the sequence under this id.
    Inserted(CardId),
    /// The id was already present; the drop was ignored.
    DuplicateIgnored(CardId),
}

impl InsertOutcome {
    pub fn card_id(&self) -> CardId {
        match self {
            Self::Inserted(id) | Self::DuplicateIgnored(id) => *id,
        }
    }
}

/// Ordered sequence of cards being arranged for export.
#[derive(Debug, Default)]
pub struct SequenceEditor {
    entries: Vec<SequenceCard>,
}

impl SequenceEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the ordered entries for rendering.
    pub fn cards(&self) -> &[SequenceCard] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, id: CardId) -> bool {
        self.entries.iter().any(|entry| entry.card.id == id)
    }

    /// Moves the entry at `from` so it ends up at index `to`.
    ///
    /// # Contract
    /// - Both indices must be in `[0, len)`.
    /// - `from == to` is a valid no-op.
    /// - Never touches the repository pane.
    pub fn reorder(&mut self, from: usize, to: usize) -> EditorResult<()> {
        let len = self.entries.len();
        for index in [from, to] {
            if index >= len {
                return Err(EditorError::IndexOutOfRange { index, len });
            }
        }
        if from == to {
            return Ok(());
        }

        let entry = self.entries.remove(from);
        self.entries.insert(to, entry);
        Ok(())
    }

    /// Consumes one drop payload at `at_index` (clamped to `[0, len]`).
    ///
    /// A `NewCardRequest` synthesizes a blank ephemeral card filed under
    /// `blank_filebox`. An `ExistingCard` whose id is already present is
    /// ignored (duplicate-drop guard); otherwise its snapshot enters the
    /// sequence as a non-ephemeral entry.
    pub fn insert(
        &mut self,
        payload: TransferPayload,
        at_index: usize,
        blank_filebox: &str,
    ) -> InsertOutcome {
        let at_index = at_index.min(self.entries.len());

        let entry = match payload {
            TransferPayload::NewCardRequest => SequenceCard {
                card: Card::blank(blank_filebox),
                ephemeral: true,
            },
            TransferPayload::ExistingCard { snapshot } => {
                if self.contains(snapshot.id) {
                    return InsertOutcome::DuplicateIgnored(snapshot.id);
                }
                SequenceCard {
                    card: snapshot,
                    ephemeral: false,
                }
            }
        };

        let id = entry.card.id;
        self.entries.insert(at_index, entry);
        InsertOutcome::Inserted(id)
    }

    /// Removes and returns the entry with `id`, if present.
    ///
    /// The drag-out path: the coordinator decides what the removal means for
    /// the repository pane.
    pub fn remove(&mut self, id: CardId) -> Option<SequenceCard> {
        let index = self.entries.iter().position(|entry| entry.card.id == id)?;
        Some(self.entries.remove(index))
    }

    /// Rewrites the content of the sequence copy only.
    pub fn update_content(&mut self, id: CardId, content: impl Into<String>) -> EditorResult<()> {
        let entry = self.entry_mut(id)?;
        entry.card.content = content.into();
        Ok(())
    }

    /// Rewrites the tag list of the sequence copy only.
    pub fn update_tags(&mut self, id: CardId, tags: Vec<String>) -> EditorResult<()> {
        let entry = self.entry_mut(id)?;
        entry.card.tags = tags;
        Ok(())
    }

    /// Drops the entry with `id` without returning it.
    pub fn delete(&mut self, id: CardId) -> EditorResult<()> {
        self.remove(id).map(|_| ()).ok_or(EditorError::NotFound(id))
    }

    fn entry_mut(&mut self, id: CardId) -> EditorResult<&mut SequenceCard> {
        self.entries
            .iter_mut()
            .find(|entry| entry.card.id == id)
            .ok_or(EditorError::NotFound(id))
    }
}
