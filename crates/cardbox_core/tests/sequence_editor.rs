use cardbox_core::{
    Card, EditorError, InsertOutcome, SequenceEditor, TransferPayload, DEFAULT_FILEBOX,
};
use uuid::Uuid;

fn existing(content: &str) -> TransferPayload {
    TransferPayload::ExistingCard {
        snapshot: Card::new(content, "https://example.com", Vec::new(), "Research"),
    }
}

fn seeded_editor(count: usize) -> SequenceEditor {
    let mut editor = SequenceEditor::new();
    for i in 0..count {
        editor.insert(existing(&format!("card {i}")), i, DEFAULT_FILEBOX);
    }
    editor
}

fn contents(editor: &SequenceEditor) -> Vec<String> {
    editor
        .cards()
        .iter()
        .map(|entry| entry.card.content.clone())
        .collect()
}

#[test]
fn insert_clamps_index_to_sequence_bounds() {
    let mut editor = seeded_editor(2);

    let outcome = editor.insert(existing("tail"), 99, DEFAULT_FILEBOX);
    assert!(matches!(outcome, InsertOutcome::Inserted(_)));
    assert_eq!(contents(&editor), vec!["card 0", "card 1", "tail"]);

    editor.insert(existing("head"), 0, DEFAULT_FILEBOX);
    assert_eq!(contents(&editor)[0], "head");
}

#[test]
fn new_card_request_synthesizes_blank_ephemeral_entry() {
    let mut editor = seeded_editor(2);

    let outcome = editor.insert(TransferPayload::NewCardRequest, 1, "Technology");
    let id = match outcome {
        InsertOutcome::Inserted(id) => id,
        other => panic!("expected insertion, got {other:?}"),
    };

    let entry = &editor.cards()[1];
    assert_eq!(entry.card.id, id);
    assert!(entry.ephemeral);
    assert!(entry.card.content.is_empty());
    assert!(entry.card.source.is_empty());
    assert!(entry.card.tags.is_empty());
    assert_eq!(entry.card.filebox, "Technology");
}

#[test]
fn repeated_new_card_requests_each_create_a_fresh_card() {
    let mut editor = SequenceEditor::new();
    editor.insert(TransferPayload::NewCardRequest, 0, DEFAULT_FILEBOX);
    editor.insert(TransferPayload::NewCardRequest, 0, DEFAULT_FILEBOX);

    assert_eq!(editor.len(), 2);
    assert_ne!(editor.cards()[0].card.id, editor.cards()[1].card.id);
}

#[test]
fn duplicate_existing_drop_is_ignored() {
    let mut editor = SequenceEditor::new();
    let payload = existing("only once");
    let id = payload.card_id().unwrap();

    let first = editor.insert(payload.clone(), 0, DEFAULT_FILEBOX);
    assert_eq!(first, InsertOutcome::Inserted(id));

    let second = editor.insert(payload, 0, DEFAULT_FILEBOX);
    assert_eq!(second, InsertOutcome::DuplicateIgnored(id));
    assert_eq!(editor.len(), 1);
}

#[test]
fn reorder_then_inverse_restores_original_order() {
    for from in 0..4 {
        for to in 0..4 {
            let mut editor = seeded_editor(4);
            let original = contents(&editor);

            editor.reorder(from, to).unwrap();
            editor.reorder(to, from).unwrap();
            assert_eq!(contents(&editor), original, "from={from} to={to}");
        }
    }
}

#[test]
fn reorder_moves_entry_to_target_index() {
    let mut editor = seeded_editor(3);
    editor.reorder(0, 2).unwrap();
    assert_eq!(contents(&editor), vec!["card 1", "card 2", "card 0"]);
}

#[test]
fn reorder_rejects_out_of_range_indices() {
    let mut editor = seeded_editor(2);

    assert_eq!(
        editor.reorder(2, 0).unwrap_err(),
        EditorError::IndexOutOfRange { index: 2, len: 2 }
    );
    assert_eq!(
        editor.reorder(0, 5).unwrap_err(),
        EditorError::IndexOutOfRange { index: 5, len: 2 }
    );
    // Equal in-range indices are a valid no-op.
    let before = contents(&editor);
    editor.reorder(1, 1).unwrap();
    assert_eq!(contents(&editor), before);
}

#[test]
fn remove_returns_entry_and_tolerates_absent_ids() {
    let mut editor = seeded_editor(2);
    let id = editor.cards()[0].card.id;

    let removed = editor.remove(id).unwrap();
    assert_eq!(removed.card.id, id);
    assert_eq!(editor.len(), 1);

    assert!(editor.remove(id).is_none());
}

#[test]
fn sequence_edits_mutate_in_place() {
    let mut editor = seeded_editor(1);
    let id = editor.cards()[0].card.id;

    editor.update_content(id, "rewritten").unwrap();
    editor
        .update_tags(id, vec!["alpha".to_string(), "beta".to_string()])
        .unwrap();

    let entry = &editor.cards()[0];
    assert_eq!(entry.card.content, "rewritten");
    assert_eq!(entry.card.tags, vec!["alpha".to_string(), "beta".to_string()]);
}

#[test]
fn sequence_edits_and_delete_signal_not_found() {
    let mut editor = seeded_editor(1);
    let missing = Uuid::new_v4();

    assert_eq!(
        editor.update_content(missing, "x").unwrap_err(),
        EditorError::NotFound(missing)
    );
    assert_eq!(
        editor.update_tags(missing, Vec::new()).unwrap_err(),
        EditorError::NotFound(missing)
    );
    assert_eq!(editor.delete(missing).unwrap_err(), EditorError::NotFound(missing));

    let id = editor.cards()[0].card.id;
    editor.delete(id).unwrap();
    assert!(editor.is_empty());
}
