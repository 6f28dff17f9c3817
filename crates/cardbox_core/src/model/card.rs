//! Index-card domain model.
//!
//! # Responsibility
//! - Define the canonical card record shared by the repository and the
//!   sequence editor.
//! - Own filebox label policy (reserved sentinel, default box).
//! - Normalize free-form tag input into stable tag lists.
//!
//! # Invariants
//! - `id` is stable and never reused for another card.
//! - `timestamp` is assigned once at creation and never rewritten.
//! - `filebox` never equals the `"All"` filter sentinel.

use chrono::Local;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for every card in either pane.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type CardId = Uuid;

/// Filter sentinel meaning "show every filebox". Never a legal card filebox.
pub const ALL_FILEBOXES: &str = "All";

/// Filebox assigned to blank cards created while the filter is the sentinel.
pub const DEFAULT_FILEBOX: &str = "Uncategorized";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

/// Validation error for card construction and edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardValidationError {
    /// Card id must be a real (non-nil) uuid.
    NilId,
    /// `"All"` is reserved for the filter and cannot file a card.
    ReservedFilebox,
}

impl Display for CardValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilId => write!(f, "card id cannot be the nil uuid"),
            Self::ReservedFilebox => {
                write!(f, "filebox label `{ALL_FILEBOXES}` is reserved for filtering")
            }
        }
    }
}

impl Error for CardValidationError {}

/// Canonical record for one research index card.
///
/// The same shape is used for repository entries and for sequence-editor
/// copies; only the containers differ in which fields they honor
/// (`is_used` is repository scope, sequence copies keep it `false`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Stable global id used for pane mirroring and transfer matching.
    pub id: CardId,
    /// Free-form note body.
    pub content: String,
    /// Source URL the note was captured from.
    pub source: String,
    /// Human-readable creation time. Set once, never mutated.
    pub timestamp: String,
    /// Display-ordered tag list.
    pub tags: Vec<String>,
    /// Filebox label this card is filed under.
    pub filebox: String,
    /// Repository-scope flag: true while a same-id copy sits in the editor.
    pub is_used: bool,
}

impl Card {
    /// Creates a new card with a generated stable id and current timestamp.
    ///
    /// # Invariants
    /// - `is_used` starts as `false`.
    /// - The timestamp is fixed here for the card's whole lifetime.
    pub fn new(
        content: impl Into<String>,
        source: impl Into<String>,
        tags: Vec<String>,
        filebox: impl Into<String>,
    ) -> Self {
        Self::with_id(Uuid::new_v4(), content, source, tags, filebox)
    }

    /// Creates a card with a caller-provided stable id.
    ///
    /// Used when identity already exists externally (drag-out reinstatement,
    /// tests with pinned ids). Does not validate; containers validate on
    /// insert.
    pub fn with_id(
        id: CardId,
        content: impl Into<String>,
        source: impl Into<String>,
        tags: Vec<String>,
        filebox: impl Into<String>,
    ) -> Self {
        Self {
            id,
            content: content.into(),
            source: source.into(),
            timestamp: human_timestamp(),
            tags,
            filebox: filebox.into(),
            is_used: false,
        }
    }

    /// Creates the blank card synthesized by a new-card drop.
    pub fn blank(filebox: impl Into<String>) -> Self {
        Self::new("", "", Vec::new(), filebox)
    }

    /// Checks the invariants containers rely on before accepting a card.
    pub fn validate(&self) -> Result<(), CardValidationError> {
        if self.id.is_nil() {
            return Err(CardValidationError::NilId);
        }
        if self.filebox == ALL_FILEBOXES {
            return Err(CardValidationError::ReservedFilebox);
        }
        Ok(())
    }
}

/// Repository pane filter: everything, or one filebox by label.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FileboxFilter {
    /// Show cards from every filebox.
    #[default]
    All,
    /// Show only cards filed under this label.
    Named(String),
}

impl FileboxFilter {
    /// Parses the label strings the host hands back from its filter widget.
    ///
    /// The `"All"` sentinel maps to [`FileboxFilter::All`]; anything else is
    /// treated as a concrete filebox label.
    pub fn from_label(label: &str) -> Self {
        if label == ALL_FILEBOXES {
            Self::All
        } else {
            Self::Named(label.to_string())
        }
    }

    /// Returns whether `card` is visible under this filter.
    pub fn matches(&self, card: &Card) -> bool {
        match self {
            Self::All => true,
            Self::Named(filebox) => card.filebox == *filebox,
        }
    }

    /// Returns the label to display for this filter selection.
    pub fn label(&self) -> &str {
        match self {
            Self::All => ALL_FILEBOXES,
            Self::Named(filebox) => filebox,
        }
    }

    /// Returns the filebox a blank card created under this filter belongs to.
    ///
    /// A concrete selection files new blanks into itself; the sentinel falls
    /// back to [`DEFAULT_FILEBOX`].
    pub fn blank_filebox(&self) -> &str {
        match self {
            Self::All => DEFAULT_FILEBOX,
            Self::Named(filebox) => filebox,
        }
    }
}

/// Splits free-form comma-separated tag input into a normalized tag list.
///
/// Each entry is trimmed and inner whitespace collapsed; empty entries are
/// dropped and duplicates keep their first position.
pub fn parse_tag_list(raw: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for piece in raw.split(',') {
        let tag = WHITESPACE_RE.replace_all(piece.trim(), " ").into_owned();
        if tag.is_empty() || tags.contains(&tag) {
            continue;
        }
        tags.push(tag);
    }
    tags
}

fn human_timestamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}
