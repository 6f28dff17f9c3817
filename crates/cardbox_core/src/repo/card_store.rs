//! Card store contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the repository pane's card collection.
//! - Keep insertion order as the one canonical listing order.
//!
//! # Invariants
//! - Write paths must pass `Card::validate()` before the collection changes.
//! - Ids are unique; `insert` rejects a second card with a known id.
//! - `list` and `distinct_fileboxes` never mutate.

use crate::model::card::{Card, CardId, CardValidationError, FileboxFilter};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Store error for card collection operations.
#[derive(Debug)]
pub enum StoreError {
    Validation(CardValidationError),
    NotFound(CardId),
    DuplicateId(CardId),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "card not found: {id}"),
            Self::DuplicateId(id) => write!(f, "card id already present: {id}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) | Self::DuplicateId(_) => None,
        }
    }
}

impl From<CardValidationError> for StoreError {
    fn from(value: CardValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Field-merge patch for card edits.
///
/// `None` leaves the stored value untouched. Id and creation timestamp are
/// deliberately not patchable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardPatch {
    pub content: Option<String>,
    pub source: Option<String>,
    pub tags: Option<Vec<String>>,
    pub filebox: Option<String>,
}

/// Store interface for repository-pane card operations.
pub trait CardStore {
    /// Adds a caller-constructed card, keeping its id.
    fn insert(&mut self, card: Card) -> StoreResult<CardId>;
    /// Looks up one card by id.
    fn get(&self, id: CardId) -> Option<&Card>;
    /// Lists cards visible under `filter`, in insertion order.
    fn list(&self, filter: &FileboxFilter) -> Vec<Card>;
    /// Merges patch fields into an existing card.
    fn update(&mut self, id: CardId, patch: &CardPatch) -> StoreResult<()>;
    /// Removes one card. Absent ids are a hard `NotFound` error.
    fn delete(&mut self, id: CardId) -> StoreResult<()>;
    /// Toggles the usage flag mirrored by the sequence editor.
    fn set_used(&mut self, id: CardId, used: bool) -> StoreResult<()>;
    /// Returns distinct filebox labels in first-seen order.
    fn distinct_fileboxes(&self) -> Vec<String>;
    /// Returns the number of stored cards.
    fn len(&self) -> usize;
    /// Returns whether the store holds no cards.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Insertion-ordered in-memory card store.
#[derive(Debug, Default)]
pub struct MemoryCardStore {
    cards: Vec<Card>,
}

impl MemoryCardStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, id: CardId) -> Option<usize> {
        self.cards.iter().position(|card| card.id == id)
    }
}

impl CardStore for MemoryCardStore {
    fn insert(&mut self, card: Card) -> StoreResult<CardId> {
        card.validate()?;
        if self.position(card.id).is_some() {
            return Err(StoreError::DuplicateId(card.id));
        }

        let id = card.id;
        self.cards.push(card);
        Ok(id)
    }

    fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|card| card.id == id)
    }

    fn list(&self, filter: &FileboxFilter) -> Vec<Card> {
        self.cards
            .iter()
            .filter(|card| filter.matches(card))
            .cloned()
            .collect()
    }

    fn update(&mut self, id: CardId, patch: &CardPatch) -> StoreResult<()> {
        let index = self.position(id).ok_or(StoreError::NotFound(id))?;

        // Validate the merged shape before committing any field.
        let mut merged = self.cards[index].clone();
        if let Some(content) = &patch.content {
            merged.content = content.clone();
        }
        if let Some(source) = &patch.source {
            merged.source = source.clone();
        }
        if let Some(tags) = &patch.tags {
            merged.tags = tags.clone();
        }
        if let Some(filebox) = &patch.filebox {
            merged.filebox = filebox.clone();
        }
        merged.validate()?;

        self.cards[index] = merged;
        Ok(())
    }

    fn delete(&mut self, id: CardId) -> StoreResult<()> {
        let index = self.position(id).ok_or(StoreError::NotFound(id))?;
        self.cards.remove(index);
        Ok(())
    }

    fn set_used(&mut self, id: CardId, used: bool) -> StoreResult<()> {
        let index = self.position(id).ok_or(StoreError::NotFound(id))?;
        self.cards[index].is_used = used;
        Ok(())
    }

    fn distinct_fileboxes(&self) -> Vec<String> {
        let mut labels: Vec<String> = Vec::new();
        for card in &self.cards {
            if !labels.contains(&card.filebox) {
                labels.push(card.filebox.clone());
            }
        }
        labels
    }

    fn len(&self) -> usize {
        self.cards.len()
    }
}
