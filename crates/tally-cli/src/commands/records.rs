//! Record command implementations for the expense and income ledgers

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use tally_core::{reports, NewRecord, RecordKind, Store};

use super::truncate;

pub fn cmd_records_add(
    store: &Store,
    kind: RecordKind,
    amount: f64,
    category: &str,
    description: Option<&str>,
    date: Option<&str>,
) -> Result<()> {
    let date = match date {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .context("Invalid --date format (use YYYY-MM-DD)")?
            .to_string(),
        None => Local::now().date_naive().to_string(),
    };

    let record = store.add_record(
        kind,
        NewRecord {
            amount,
            category: category.to_string(),
            description: description.map(|s| s.to_string()),
            date,
        },
    )?;

    println!(
        "✅ Added {} #{}: ${:.2} ({}) on {}",
        kind, record.id, record.amount, record.category, record.date
    );

    Ok(())
}

pub fn cmd_records_list(
    store: &Store,
    kind: RecordKind,
    search: Option<&str>,
    category: Option<&str>,
    from: Option<&str>,
    to: Option<&str>,
    limit: usize,
) -> Result<()> {
    if from.is_some() != to.is_some() {
        anyhow::bail!("--from and --to must be used together");
    }

    let mut records = store.list_records(kind)?;

    if let (Some(from), Some(to)) = (from, to) {
        let range = reports::parse_range(from, to)?;
        records = reports::filter_period(&records, Some(range));
    }

    if let Some(needle) = search {
        let needle = needle.to_lowercase();
        records.retain(|r| {
            r.category.to_lowercase().contains(&needle)
                || r.description
                    .as_deref()
                    .is_some_and(|d| d.to_lowercase().contains(&needle))
        });
    }

    if let Some(category) = category {
        records.retain(|r| r.category == category);
    }

    if records.is_empty() {
        println!("No records found. Add one with:");
        match kind {
            RecordKind::Expense => println!("  tally expenses add 12.50 groceries"),
            RecordKind::Income => println!("  tally income add 2500 salary"),
        }
        return Ok(());
    }

    // Newest first; ISO dates sort lexicographically
    records.sort_by(|a, b| b.date.cmp(&a.date));
    records.truncate(limit);

    let total: f64 = records.iter().map(|r| r.amount).sum();

    println!();
    println!("📝 {} ({} shown)", kind.label(), records.len());
    println!("   ─────────────────────────────────────────────────────────────");

    for record in &records {
        println!(
            "   [{}] {} │ {:>10.2} │ {:<14} │ {}",
            record.id,
            record.date,
            record.amount,
            truncate(&record.category, 14),
            truncate(record.description.as_deref().unwrap_or(""), 30)
        );
    }

    println!("   ─────────────────────────────────────────────────────────────");
    println!("   Total: ${:.2}", total);

    Ok(())
}

pub fn cmd_records_delete(store: &Store, kind: RecordKind, id: i64) -> Result<()> {
    store.delete_record(kind, id)?;
    println!("✅ Deleted {} record {}", kind, id);
    Ok(())
}
