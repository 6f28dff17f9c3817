//! Core domain logic for Cardbox, a two-pane research-card organizer.
//! This crate is the single source of truth for card-lifecycle and
//! transfer invariants; rendering and drag mechanics live in the host.

pub mod editor;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use editor::layout::{insertion_index, ItemExtent};
pub use editor::sequence::{
    EditorError, EditorResult, InsertOutcome, SequenceCard, SequenceEditor,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::card::{
    parse_tag_list, Card, CardId, CardValidationError, FileboxFilter, ALL_FILEBOXES,
    DEFAULT_FILEBOX,
};
pub use model::transfer::TransferPayload;
pub use repo::card_store::{CardPatch, CardStore, MemoryCardStore, StoreError, StoreResult};
pub use service::workbench::{
    ExportError, ExportFormat, Workbench, WorkbenchError, WorkbenchResult,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
