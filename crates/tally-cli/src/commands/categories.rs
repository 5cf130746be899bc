//! Category management command implementations

use anyhow::Result;
use tally_core::{RecordKind, Store};

pub fn cmd_categories_list(store: &Store) -> Result<()> {
    let categories = store.list_categories()?;

    println!();
    println!("🏷️  Categories");
    println!("   ─────────────────────────────────────────────");
    for kind in [RecordKind::Expense, RecordKind::Income] {
        let names = categories.for_kind(kind);
        println!("   {} ({}):", kind.label(), names.len());
        for name in names {
            println!("     - {}", name);
        }
        println!();
    }

    Ok(())
}

pub fn cmd_categories_add(store: &Store, kind: RecordKind, name: &str) -> Result<()> {
    store.add_category(kind, name)?;
    println!("✅ Added {} category '{}'", kind, name);
    Ok(())
}

pub fn cmd_categories_remove(store: &Store, kind: RecordKind, name: &str) -> Result<()> {
    store.remove_category(kind, name)?;
    println!("✅ Removed {} category '{}'", kind, name);
    Ok(())
}
