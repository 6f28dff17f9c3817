use cardbox_core::{
    CardPatch, ExportFormat, InsertOutcome, ItemExtent, TransferPayload, Workbench,
    WorkbenchError, ALL_FILEBOXES, DEFAULT_FILEBOX,
};
use uuid::Uuid;

fn seeded() -> Workbench {
    Workbench::seeded().expect("seed cards should be valid")
}

fn first_visible_id(workbench: &Workbench) -> Uuid {
    workbench.visible_cards()[0].id
}

#[test]
fn seeded_workbench_exposes_sample_cards_and_fileboxes() {
    let workbench = seeded();

    assert_eq!(workbench.visible_cards().len(), 3);
    assert_eq!(
        workbench.fileboxes(),
        vec![
            ALL_FILEBOXES.to_string(),
            "Environment".to_string(),
            "Technology".to_string(),
            "Healthcare".to_string()
        ]
    );
    assert!(workbench.editor_cards().is_empty());
}

#[test]
fn filter_narrows_repository_pane_and_all_restores_it() {
    let mut workbench = seeded();

    workbench.set_filter("Technology");
    let filtered = workbench.visible_cards();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].filebox, "Technology");

    workbench.set_filter(ALL_FILEBOXES);
    assert_eq!(workbench.visible_cards().len(), 3);
}

#[test]
fn dropping_a_repository_card_mirrors_it_used_into_the_sequence() {
    let mut workbench = seeded();
    let id = first_visible_id(&workbench);

    let payload = workbench.begin_drag(id).unwrap();
    let outcome = workbench.drop_payload(payload, 0).unwrap();

    assert_eq!(outcome, InsertOutcome::Inserted(id));
    assert!(workbench.card(id).unwrap().is_used);
    let mirrored: Vec<_> = workbench
        .editor_cards()
        .iter()
        .filter(|entry| entry.card.id == id)
        .collect();
    assert_eq!(mirrored.len(), 1);
    assert!(!mirrored[0].ephemeral);
}

#[test]
fn duplicate_drop_of_the_same_card_is_ignored() {
    let mut workbench = seeded();
    let id = first_visible_id(&workbench);

    let payload = workbench.begin_drag(id).unwrap();
    workbench.drop_payload(payload.clone(), 0).unwrap();
    let second = workbench.drop_payload(payload, 1).unwrap();

    assert_eq!(second, InsertOutcome::DuplicateIgnored(id));
    assert_eq!(workbench.editor_cards().len(), 1);
    assert!(workbench.card(id).unwrap().is_used);
}

#[test]
fn drag_out_returns_the_card_unused_to_the_repository() {
    let mut workbench = seeded();
    let id = first_visible_id(&workbench);

    let payload = workbench.begin_drag(id).unwrap();
    workbench.drop_payload(payload, 0).unwrap();
    workbench.drag_out(id).unwrap();

    assert!(!workbench.card(id).unwrap().is_used);
    assert!(workbench.editor_cards().is_empty());
}

#[test]
fn drop_at_resolves_index_from_item_geometry() {
    let mut workbench = seeded();
    let ids: Vec<_> = workbench.visible_cards().iter().map(|c| c.id).collect();

    for (index, id) in ids.iter().enumerate() {
        let payload = workbench.begin_drag(*id).unwrap();
        workbench.drop_payload(payload, index).unwrap();
    }

    // Two 20px items already rendered; drop lands between their midpoints.
    let extents = vec![
        ItemExtent::new(0.0, 20.0),
        ItemExtent::new(20.0, 20.0),
        ItemExtent::new(40.0, 20.0),
    ];
    workbench.drag_out(ids[2]).unwrap();
    let payload = workbench.begin_drag(ids[2]).unwrap();
    let outcome = workbench.drop_at(payload, 25.0, &extents[..2]).unwrap();

    assert_eq!(outcome, InsertOutcome::Inserted(ids[2]));
    assert_eq!(workbench.editor_cards()[1].card.id, ids[2]);
}

#[test]
fn new_card_drop_inherits_the_selected_filebox() {
    let mut workbench = seeded();
    workbench.set_filter("Technology");

    let outcome = workbench
        .drop_payload(workbench.new_card_payload(), 0)
        .unwrap();
    let id = outcome.card_id();

    let entry = &workbench.editor_cards()[0];
    assert!(entry.ephemeral);
    assert_eq!(entry.card.filebox, "Technology");
    // Ephemeral cards have no repository counterpart yet.
    assert!(workbench.card(id).is_none());
}

#[test]
fn new_card_drop_under_all_filter_is_uncategorized() {
    let mut workbench = seeded();

    workbench
        .drop_payload(workbench.new_card_payload(), 0)
        .unwrap();
    assert_eq!(workbench.editor_cards()[0].card.filebox, DEFAULT_FILEBOX);
}

#[test]
fn dragging_out_an_ephemeral_card_promotes_it_into_the_repository() {
    let mut workbench = seeded();

    let outcome = workbench
        .drop_payload(workbench.new_card_payload(), 0)
        .unwrap();
    let id = outcome.card_id();
    workbench.update_editor_content(id, "promoted body").unwrap();
    workbench.drag_out(id).unwrap();

    assert!(workbench.editor_cards().is_empty());
    let promoted = workbench.card(id).expect("card should be reinstated");
    assert_eq!(promoted.content, "promoted body");
    assert!(!promoted.is_used);
    assert_eq!(workbench.visible_cards().len(), 4);
}

#[test]
fn sequence_edits_do_not_propagate_to_the_repository_copy() {
    let mut workbench = seeded();
    let id = first_visible_id(&workbench);
    let original_content = workbench.card(id).unwrap().content.clone();

    let payload = workbench.begin_drag(id).unwrap();
    workbench.drop_payload(payload, 0).unwrap();
    workbench.update_editor_content(id, "sequence-only edit").unwrap();
    workbench
        .update_editor_tags(id, vec!["draft".to_string()])
        .unwrap();

    assert_eq!(workbench.editor_cards()[0].card.content, "sequence-only edit");
    assert_eq!(workbench.card(id).unwrap().content, original_content);
}

#[test]
fn repository_update_patches_only_the_store_copy() {
    let mut workbench = seeded();
    let id = first_visible_id(&workbench);

    workbench
        .update_card(
            id,
            &CardPatch {
                filebox: Some("Archive".to_string()),
                ..CardPatch::default()
            },
        )
        .unwrap();
    assert_eq!(workbench.card(id).unwrap().filebox, "Archive");
    assert!(workbench.fileboxes().contains(&"Archive".to_string()));
}

#[test]
fn delete_card_clears_both_panes() {
    let mut workbench = seeded();
    let id = first_visible_id(&workbench);

    let payload = workbench.begin_drag(id).unwrap();
    workbench.drop_payload(payload, 0).unwrap();
    workbench.delete_card(id).unwrap();

    assert!(workbench.card(id).is_none());
    assert!(workbench.editor_cards().is_empty());

    let err = workbench.delete_card(id).unwrap_err();
    assert!(matches!(err, WorkbenchError::Store(_)));
}

#[test]
fn delete_editor_card_leaves_the_repository_copy_alone() {
    let mut workbench = seeded();
    let id = first_visible_id(&workbench);

    let payload = workbench.begin_drag(id).unwrap();
    workbench.drop_payload(payload, 0).unwrap();
    workbench.delete_editor_card(id).unwrap();

    assert!(workbench.editor_cards().is_empty());
    // Repository delete is a separate, explicit intent.
    assert!(workbench.card(id).is_some());
}

#[test]
fn begin_drag_snapshot_is_immune_to_later_repository_edits() {
    let mut workbench = seeded();
    let id = first_visible_id(&workbench);

    let payload = workbench.begin_drag(id).unwrap();
    workbench
        .update_card(
            id,
            &CardPatch {
                content: Some("edited mid-drag".to_string()),
                ..CardPatch::default()
            },
        )
        .unwrap();
    workbench.drop_payload(payload, 0).unwrap();

    let TransferPayload::ExistingCard { .. } = workbench.begin_drag(id).unwrap() else {
        panic!("expected existing-card payload");
    };
    // The sequence holds the pick-up snapshot, not the later edit.
    assert_ne!(workbench.editor_cards()[0].card.content, "edited mid-drag");
}

#[test]
fn drop_of_a_card_deleted_mid_drag_keeps_the_sequence_entry() {
    let mut workbench = seeded();
    let id = first_visible_id(&workbench);

    let payload = workbench.begin_drag(id).unwrap();
    workbench.delete_card(id).unwrap();
    let outcome = workbench.drop_payload(payload, 0).unwrap();

    assert_eq!(outcome, InsertOutcome::Inserted(id));
    assert!(workbench.card(id).is_none());

    // Drag-out reinstates the orphaned snapshot as an unused entry.
    workbench.drag_out(id).unwrap();
    assert!(!workbench.card(id).unwrap().is_used);
}

#[test]
fn export_formats_are_an_unimplemented_seam() {
    let workbench = seeded();

    for format in [ExportFormat::Markdown, ExportFormat::PlainText, ExportFormat::Wxr] {
        let err = workbench.export(format).unwrap_err();
        assert!(matches!(err, WorkbenchError::Export(_)));
        assert!(err.to_string().contains("not implemented"));
    }

    assert_eq!(ExportFormat::from_label("XML"), Some(ExportFormat::Wxr));
    assert_eq!(ExportFormat::from_label("docx"), None);
}
