//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `cardbox_core` linkage.
//! - Run one seeded drag-drop round trip with deterministic output.

use cardbox_core::Workbench;

fn main() {
    println!("cardbox_core ping={}", cardbox_core::ping());
    println!("cardbox_core version={}", cardbox_core::core_version());

    let mut workbench = match Workbench::seeded() {
        Ok(workbench) => workbench,
        Err(err) => {
            eprintln!("seed failed: {err}");
            std::process::exit(1);
        }
    };

    let first = workbench.visible_cards()[0].id;
    let filed = workbench
        .begin_drag(first)
        .and_then(|payload| workbench.drop_payload(payload, 0));
    match filed {
        Ok(_) => println!(
            "cardbox_core panes repository={} editor={}",
            workbench.visible_cards().len(),
            workbench.editor_cards().len()
        ),
        Err(err) => {
            eprintln!("drop failed: {err}");
            std::process::exit(1);
        }
    }
}
