//! FFI use-case API for host-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level functions to the UI host via FRB.
//! - Keep error semantics simple: mutating calls return an empty string on
//!   success and a human-readable message on failure.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - All state lives in one process-global workbench guarded by a mutex.

use cardbox_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, insertion_index,
    parse_tag_list, ping as ping_inner, CardId, CardPatch, ExportFormat, ItemExtent, Workbench,
};
use log::error;
use std::sync::{Mutex, OnceLock};
use uuid::Uuid;

static WORKBENCH: OnceLock<Mutex<Workbench>> = OnceLock::new();

fn with_workbench<T>(op: impl FnOnce(&mut Workbench) -> T) -> Result<T, String> {
    let mutex = WORKBENCH.get_or_init(|| Mutex::new(Workbench::new()));
    match mutex.lock() {
        Ok(mut guard) => Ok(op(&mut guard)),
        Err(_) => Err("workbench state is poisoned".to_string()),
    }
}

fn status(result: Result<Result<(), String>, String>) -> String {
    match result {
        Ok(Ok(())) => String::new(),
        Ok(Err(message)) | Err(message) => message,
    }
}

fn parse_card_id(id: &str) -> Result<CardId, String> {
    Uuid::parse_str(id.trim()).map_err(|err| format!("invalid card id `{id}`: {err}"))
}

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking; never throws.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Exposes the core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// # FFI contract
/// - Idempotent for the same `level + log_dir`; conflicting reconfiguration
///   returns an error message.
/// - Never panics; empty string on success.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(&level, &log_dir) {
        Ok(()) => String::new(),
        Err(message) => message,
    }
}

/// Loads the stock sample cards into the workbench.
#[flutter_rust_bridge::frb(sync)]
pub fn seed_sample_cards() -> String {
    status(with_workbench(|workbench| match Workbench::seeded() {
        Ok(seeded) => {
            *workbench = seeded;
            Ok(())
        }
        Err(err) => Err(err.to_string()),
    }))
}

/// Switches the repository pane filter (`"All"` or a filebox label).
#[flutter_rust_bridge::frb(sync)]
pub fn set_filebox_filter(label: String) -> String {
    status(with_workbench(|workbench| {
        workbench.set_filter(&label);
        Ok(())
    }))
}

/// Returns the filter dropdown labels, sentinel first.
#[flutter_rust_bridge::frb(sync)]
pub fn filebox_labels() -> Vec<String> {
    with_workbench(|workbench| workbench.fileboxes()).unwrap_or_default()
}

/// Returns the repository pane as a JSON card array under the active filter.
///
/// # FFI contract
/// - Never throws; serialization trouble yields `[]` and an error log.
#[flutter_rust_bridge::frb(sync)]
pub fn repository_cards() -> String {
    match with_workbench(|workbench| serde_json::to_string(&workbench.visible_cards())) {
        Ok(Ok(json)) => json,
        Ok(Err(err)) => {
            error!("event=ffi_serialize module=ffi status=error what=repository_cards err={err}");
            "[]".to_string()
        }
        Err(_) => "[]".to_string(),
    }
}

/// Returns the sequence pane as a JSON entry array (card + ephemeral flag).
#[flutter_rust_bridge::frb(sync)]
pub fn editor_cards() -> String {
    match with_workbench(|workbench| serde_json::to_string(workbench.editor_cards())) {
        Ok(Ok(json)) => json,
        Ok(Err(err)) => {
            error!("event=ffi_serialize module=ffi status=error what=editor_cards err={err}");
            "[]".to_string()
        }
        Err(_) => "[]".to_string(),
    }
}

/// Authors a new repository card.
///
/// `raw_tags` is the comma-separated text the host's tag field holds.
///
/// # FFI contract
/// - Returns the new card id on success, `error: ...` on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn create_card(content: String, source: String, raw_tags: String, filebox: String) -> String {
    let result = with_workbench(|workbench| {
        workbench
            .create_card(content, source, parse_tag_list(&raw_tags), filebox)
            .map_err(|err| err.to_string())
    });
    match result {
        Ok(Ok(id)) => id.to_string(),
        Ok(Err(message)) | Err(message) => format!("error: {message}"),
    }
}

/// Edits a repository card; `None` fields stay untouched.
#[flutter_rust_bridge::frb(sync)]
pub fn update_card(
    id: String,
    content: Option<String>,
    source: Option<String>,
    raw_tags: Option<String>,
    filebox: Option<String>,
) -> String {
    status(with_workbench(|workbench| {
        let id = parse_card_id(&id)?;
        let patch = CardPatch {
            content,
            source,
            tags: raw_tags.as_deref().map(parse_tag_list),
            filebox,
        };
        workbench.update_card(id, &patch).map_err(|err| err.to_string())
    }))
}

/// Destroys a card in both panes.
#[flutter_rust_bridge::frb(sync)]
pub fn delete_card(id: String) -> String {
    status(with_workbench(|workbench| {
        let id = parse_card_id(&id)?;
        workbench.delete_card(id).map_err(|err| err.to_string())
    }))
}

/// Files a repository card into the sequence at `index` (clamped).
///
/// Duplicate drops are a success: the guard ignores them silently.
#[flutter_rust_bridge::frb(sync)]
pub fn drop_existing_card(id: String, index: u32) -> String {
    status(with_workbench(|workbench| {
        let id = parse_card_id(&id)?;
        let payload = workbench.begin_drag(id).map_err(|err| err.to_string())?;
        workbench
            .drop_payload(payload, index as usize)
            .map(|_| ())
            .map_err(|err| err.to_string())
    }))
}

/// Drops a fresh blank card into the sequence at `index` (clamped).
#[flutter_rust_bridge::frb(sync)]
pub fn drop_new_card(index: u32) -> String {
    status(with_workbench(|workbench| {
        let payload = workbench.new_card_payload();
        workbench
            .drop_payload(payload, index as usize)
            .map(|_| ())
            .map_err(|err| err.to_string())
    }))
}

/// Resolves a drop coordinate to an insertion index from item geometry.
///
/// `tops` and `heights` are parallel arrays of the rendered sequence items,
/// in pane coordinates; extra entries in the longer array are ignored.
#[flutter_rust_bridge::frb(sync)]
pub fn insertion_index_at(drop_y: f64, tops: Vec<f64>, heights: Vec<f64>) -> u32 {
    let extents: Vec<ItemExtent> = tops
        .into_iter()
        .zip(heights)
        .map(|(top, height)| ItemExtent::new(top, height))
        .collect();
    insertion_index(&extents, drop_y) as u32
}

/// Handles a sequence card dragged out without a drop target.
#[flutter_rust_bridge::frb(sync)]
pub fn drag_card_out(id: String) -> String {
    status(with_workbench(|workbench| {
        let id = parse_card_id(&id)?;
        workbench.drag_out(id).map_err(|err| err.to_string())
    }))
}

/// Moves a sequence entry from one index to another.
#[flutter_rust_bridge::frb(sync)]
pub fn reorder_editor_cards(from: u32, to: u32) -> String {
    status(with_workbench(|workbench| {
        workbench
            .reorder(from as usize, to as usize)
            .map_err(|err| err.to_string())
    }))
}

/// Rewrites a sequence copy's content (repository copy untouched).
#[flutter_rust_bridge::frb(sync)]
pub fn update_editor_card_content(id: String, content: String) -> String {
    status(with_workbench(|workbench| {
        let id = parse_card_id(&id)?;
        workbench
            .update_editor_content(id, content)
            .map_err(|err| err.to_string())
    }))
}

/// Rewrites a sequence copy's tags from comma-separated text.
#[flutter_rust_bridge::frb(sync)]
pub fn update_editor_card_tags(id: String, raw_tags: String) -> String {
    status(with_workbench(|workbench| {
        let id = parse_card_id(&id)?;
        workbench
            .update_editor_tags(id, parse_tag_list(&raw_tags))
            .map_err(|err| err.to_string())
    }))
}

/// Removes a sequence entry without touching the repository pane.
#[flutter_rust_bridge::frb(sync)]
pub fn delete_editor_card(id: String) -> String {
    status(with_workbench(|workbench| {
        let id = parse_card_id(&id)?;
        workbench.delete_editor_card(id).map_err(|err| err.to_string())
    }))
}

/// Export seam for the host's save actions.
///
/// Accepts `md`, `txt` or `wxr`; every format currently reports an
/// unimplemented error message.
#[flutter_rust_bridge::frb(sync)]
pub fn export_editor(format: String) -> String {
    status(with_workbench(|workbench| {
        let format = ExportFormat::from_label(&format)
            .ok_or_else(|| format!("unknown export format `{format}`"))?;
        workbench
            .export(format)
            .map(|_| ())
            .map_err(|err| err.to_string())
    }))
}
