//! Dataset command implementations (export, import, clear)

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tally_core::{Budget, Categories, Record, Store};

/// Import payload. Sections are independently optional so a partial
/// export (say, budget only) overlays just that section.
#[derive(Deserialize)]
struct PartialBook {
    expenses: Option<Vec<Record>>,
    income: Option<Vec<Record>>,
    budget: Option<Budget>,
    categories: Option<Categories>,
}

pub fn cmd_data_export(store: &Store, output: Option<&Path>) -> Result<()> {
    let book = store.load()?;
    let json = serde_json::to_string_pretty(&book)?;

    match output {
        Some(path) => {
            fs::write(path, &json)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!(
                "✅ Exported {} expense and {} income records to {}",
                book.expenses.len(),
                book.income.len(),
                path.display()
            );
        }
        None => println!("{}", json),
    }

    Ok(())
}

pub fn cmd_data_import(store: &Store, file: &Path) -> Result<()> {
    let json =
        fs::read_to_string(file).with_context(|| format!("Failed to read {}", file.display()))?;
    let partial: PartialBook =
        serde_json::from_str(&json).context("Invalid import file (expected a JSON dataset)")?;

    let mut book = store.load()?;
    if let Some(expenses) = partial.expenses {
        book.expenses = expenses;
    }
    if let Some(income) = partial.income {
        book.income = income;
    }
    if let Some(budget) = partial.budget {
        book.budget = budget;
    }
    if let Some(categories) = partial.categories {
        book.categories = categories;
    }
    store.write(&book)?;

    println!(
        "✅ Imported dataset: {} expense records, {} income records",
        book.expenses.len(),
        book.income.len()
    );

    Ok(())
}

pub fn cmd_data_clear(store: &Store, yes: bool) -> Result<()> {
    if !yes {
        print!("⚠️  This will delete all records and restore default categories.\n");
        print!("\nAre you sure? [y/N] ");
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Cancelled.");
            return Ok(());
        }
    }

    store.reset()?;
    println!("✅ Data cleared. Categories reset to defaults.");

    Ok(())
}
