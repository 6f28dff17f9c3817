//! Two-pane coordinator use-case service.
//!
//! # Responsibility
//! - Own the card store, the sequence editor, and the filter selection.
//! - Run every cross-pane effect (usage-flag mirroring, drag-out
//!   reinstatement) as explicit two-step calls so the invariants stay
//!   auditable.
//!
//! # Invariants
//! - A store card with `is_used == true` always has a same-id sequence
//!   entry; every transfer operation restores this before returning.
//! - A card id lives in exactly one of: store-unused, store-used plus
//!   sequence mirror, sequence-only ephemeral.

use crate::editor::layout::{insertion_index, ItemExtent};
use crate::editor::sequence::{EditorError, InsertOutcome, SequenceCard, SequenceEditor};
use crate::model::card::{Card, CardId, FileboxFilter, ALL_FILEBOXES};
use crate::model::transfer::TransferPayload;
use crate::repo::card_store::{CardPatch, CardStore, MemoryCardStore, StoreError};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Export targets the host offers. Formats are a seam only; no body
/// semantics are defined yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Markdown,
    PlainText,
    Wxr,
}

impl ExportFormat {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Markdown => "md",
            Self::PlainText => "txt",
            Self::Wxr => "wxr",
        }
    }

    /// Parses the host-side format labels.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "md" | "markdown" => Some(Self::Markdown),
            "txt" | "text" => Some(Self::PlainText),
            "wxr" | "xml" => Some(Self::Wxr),
            _ => None,
        }
    }
}

/// Export seam error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportError {
    /// The format is known but has no writer yet.
    Unimplemented(ExportFormat),
}

impl Display for ExportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unimplemented(format) => {
                write!(f, "export format `{}` is not implemented", format.label())
            }
        }
    }
}

impl Error for ExportError {}

/// Coordinator error wrapping the per-pane error types.
#[derive(Debug)]
pub enum WorkbenchError {
    Store(StoreError),
    Editor(EditorError),
    Export(ExportError),
}

impl Display for WorkbenchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "{err}"),
            Self::Editor(err) => write!(f, "{err}"),
            Self::Export(err) => write!(f, "{err}"),
        }
    }
}

impl Error for WorkbenchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::Editor(err) => Some(err),
            Self::Export(err) => Some(err),
        }
    }
}

impl From<StoreError> for WorkbenchError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl From<EditorError> for WorkbenchError {
    fn from(value: EditorError) -> Self {
        Self::Editor(value)
    }
}

impl From<ExportError> for WorkbenchError {
    fn from(value: ExportError) -> Self {
        Self::Export(value)
    }
}

pub type WorkbenchResult<T> = Result<T, WorkbenchError>;

/// Top-level coordinator owning both panes and the filter selection.
#[derive(Debug, Default)]
pub struct Workbench {
    store: MemoryCardStore,
    editor: SequenceEditor,
    filter: FileboxFilter,
}

impl Workbench {
    /// Creates an empty workbench with the `All` filter selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a workbench pre-seeded with the stock research cards.
    pub fn seeded() -> WorkbenchResult<Self> {
        let mut workbench = Self::new();
        let seeds = [
            (
                "The impact of climate change on global agriculture",
                "https://www.nature.com/articles/s41558-021-01000-1",
                vec!["climate change", "agriculture", "global impact"],
                "Environment",
            ),
            (
                "Advancements in quantum computing and their potential applications",
                "https://www.science.org/doi/10.1126/science.abe8770",
                vec!["quantum computing", "technology", "future applications"],
                "Technology",
            ),
            (
                "The role of artificial intelligence in modern healthcare",
                "https://www.thelancet.com/journals/landig/article/PIIS2589-7500(20)30295-8/fulltext",
                vec!["artificial intelligence", "healthcare", "technology"],
                "Healthcare",
            ),
        ];
        for (content, source, tags, filebox) in seeds {
            let tags = tags.into_iter().map(str::to_string).collect();
            workbench.create_card(content, source, tags, filebox)?;
        }
        Ok(workbench)
    }

    // ---- filter -----------------------------------------------------------

    /// Switches the repository pane filter from a host label.
    pub fn set_filter(&mut self, label: &str) {
        self.filter = FileboxFilter::from_label(label);
        info!(
            "event=filter_changed module=workbench status=ok filter={}",
            self.filter.label()
        );
    }

    /// Returns the active filter selection.
    pub fn filter(&self) -> &FileboxFilter {
        &self.filter
    }

    /// Returns the filter labels for host dropdown population, sentinel
    /// first.
    pub fn fileboxes(&self) -> Vec<String> {
        let mut labels = vec![ALL_FILEBOXES.to_string()];
        labels.extend(self.store.distinct_fileboxes());
        labels
    }

    // ---- repository pane --------------------------------------------------

    /// Returns the repository pane content under the active filter.
    pub fn visible_cards(&self) -> Vec<Card> {
        self.store.list(&self.filter)
    }

    /// Looks up one repository card.
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.store.get(id)
    }

    /// Authors a new repository card with a fresh id and timestamp.
    pub fn create_card(
        &mut self,
        content: impl Into<String>,
        source: impl Into<String>,
        tags: Vec<String>,
        filebox: impl Into<String>,
    ) -> WorkbenchResult<CardId> {
        let id = self.store.insert(Card::new(content, source, tags, filebox))?;
        info!("event=card_created module=workbench status=ok card={id}");
        Ok(id)
    }

    /// Edits a repository card in place.
    pub fn update_card(&mut self, id: CardId, patch: &CardPatch) -> WorkbenchResult<()> {
        self.store.update(id, patch)?;
        info!("event=card_updated module=workbench status=ok card={id}");
        Ok(())
    }

    /// Destroys a card, clearing it from both panes.
    ///
    /// `NotFound` only when the id was in neither pane.
    pub fn delete_card(&mut self, id: CardId) -> WorkbenchResult<()> {
        let store_hit = match self.store.delete(id) {
            Ok(()) => true,
            Err(StoreError::NotFound(_)) => false,
            Err(err) => return Err(err.into()),
        };
        let editor_hit = self.editor.remove(id).is_some();

        if !store_hit && !editor_hit {
            warn!("event=card_deleted module=workbench status=not_found card={id}");
            return Err(StoreError::NotFound(id).into());
        }

        info!(
            "event=card_deleted module=workbench status=ok card={id} panes={}",
            match (store_hit, editor_hit) {
                (true, true) => "both",
                (true, false) => "store",
                _ => "editor",
            }
        );
        Ok(())
    }

    // ---- transfer ---------------------------------------------------------

    /// Captures an immutable pick-up snapshot of a repository card.
    pub fn begin_drag(&self, id: CardId) -> WorkbenchResult<TransferPayload> {
        let card = self.store.get(id).ok_or(StoreError::NotFound(id))?;
        Ok(TransferPayload::ExistingCard {
            snapshot: card.clone(),
        })
    }

    /// Returns the blank-card drag payload.
    pub fn new_card_payload(&self) -> TransferPayload {
        TransferPayload::NewCardRequest
    }

    /// Consumes a drop at a concrete sequence index.
    ///
    /// When an existing-card payload actually enters the sequence, the store
    /// copy is flagged used in the same call, keeping the mirror invariant.
    pub fn drop_payload(
        &mut self,
        payload: TransferPayload,
        at_index: usize,
    ) -> WorkbenchResult<InsertOutcome> {
        let from_store = !payload.is_new_card();
        let blank_filebox = self.filter.blank_filebox().to_string();
        let outcome = self.editor.insert(payload, at_index, &blank_filebox);

        match outcome {
            InsertOutcome::Inserted(id) if from_store => match self.store.set_used(id, true) {
                Ok(()) => {
                    info!("event=card_filed module=workbench status=ok card={id} index={at_index}");
                }
                // The source card was deleted between pick-up and drop. The
                // sequence keeps the snapshot; drag-out reinstates it later.
                Err(StoreError::NotFound(_)) => {
                    warn!("event=card_filed module=workbench status=orphan card={id}");
                }
                Err(err) => return Err(err.into()),
            },
            InsertOutcome::Inserted(id) => {
                info!("event=blank_card_filed module=workbench status=ok card={id}");
            }
            InsertOutcome::DuplicateIgnored(id) => {
                info!("event=card_filed module=workbench status=duplicate_ignored card={id}");
            }
        }
        Ok(outcome)
    }

    /// Consumes a drop at a host-reported coordinate, resolving the index
    /// from the rendered item geometry.
    pub fn drop_at(
        &mut self,
        payload: TransferPayload,
        drop_y: f64,
        extents: &[ItemExtent],
    ) -> WorkbenchResult<InsertOutcome> {
        self.drop_payload(payload, insertion_index(extents, drop_y))
    }

    /// Handles a sequence entry dragged out without a drop target.
    ///
    /// The entry leaves the sequence; the store copy is flagged unused, or
    /// the removed card is reinstated unused when the store never held it
    /// (the promoted-ephemeral path).
    pub fn drag_out(&mut self, id: CardId) -> WorkbenchResult<()> {
        let removed = self.editor.remove(id);

        match self.store.set_used(id, false) {
            Ok(()) => {
                info!("event=card_returned module=workbench status=ok card={id}");
                Ok(())
            }
            Err(StoreError::NotFound(_)) => {
                if let Some(entry) = removed {
                    let mut card = entry.card;
                    card.is_used = false;
                    self.store.insert(card)?;
                    info!("event=card_returned module=workbench status=reinstated card={id}");
                }
                Ok(())
            }
            Err(err) => Err(err.into()),
        }
    }

    // ---- sequence pane ----------------------------------------------------

    /// Returns the ordered sequence pane content.
    pub fn editor_cards(&self) -> &[SequenceCard] {
        self.editor.cards()
    }

    /// Moves a sequence entry; pure local permutation.
    pub fn reorder(&mut self, from: usize, to: usize) -> WorkbenchResult<()> {
        self.editor.reorder(from, to)?;
        Ok(())
    }

    /// Rewrites a sequence copy's content; the store copy is untouched until
    /// an explicit save action.
    pub fn update_editor_content(
        &mut self,
        id: CardId,
        content: impl Into<String>,
    ) -> WorkbenchResult<()> {
        self.editor.update_content(id, content)?;
        Ok(())
    }

    /// Rewrites a sequence copy's tags; the store copy is untouched.
    pub fn update_editor_tags(&mut self, id: CardId, tags: Vec<String>) -> WorkbenchResult<()> {
        self.editor.update_tags(id, tags)?;
        Ok(())
    }

    /// Removes a sequence entry without any store effect.
    pub fn delete_editor_card(&mut self, id: CardId) -> WorkbenchResult<()> {
        self.editor.delete(id)?;
        Ok(())
    }

    // ---- export seam ------------------------------------------------------

    /// Export seam for the host's save actions.
    ///
    /// Every format currently reports `Unimplemented`; the sequence order is
    /// the input a future writer will consume.
    pub fn export(&self, format: ExportFormat) -> WorkbenchResult<Vec<u8>> {
        info!(
            "event=export_requested module=workbench status=unimplemented format={} cards={}",
            format.label(),
            self.editor.len()
        );
        Err(ExportError::Unimplemented(format).into())
    }
}
