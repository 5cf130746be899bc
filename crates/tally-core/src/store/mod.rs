//! JSON-file-backed record store
//!
//! The whole dataset lives in one pretty-printed JSON document that is
//! read and rewritten per operation. Writes go through a sibling temp
//! file and a rename, so a crash mid-write leaves the old document
//! intact. This module is organized by domain:
//! - `records` - Expense and income entry operations
//! - `budget` - Monthly budget setting
//! - `categories` - Category name list management

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::models::BudgetBook;

mod budget;
mod categories;
mod records;

/// Category names seeded into a fresh data file
const DEFAULT_EXPENSE_CATEGORIES: &[&str] = &[
    "rent",
    "groceries",
    "transport",
    "utilities",
    "internet",
    "dining",
    "entertainment",
    "health",
    "clothing",
    "subscriptions",
    "gifts",
    "household",
];

const DEFAULT_INCOME_CATEGORIES: &[&str] = &["salary", "bonus", "tax refund", "gifts", "other"];

/// Handle on the JSON data file
#[derive(Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    /// Open a store at `path`, seeding a fresh data file with the default
    /// dataset (empty ledgers, zero budget, seeded categories) when none
    /// exists yet.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let store = Self { path: path.into() };
        if !store.path.exists() {
            store.write(&seeded_book())?;
        }
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the full dataset. A missing file loads as the empty default;
    /// an unreadable or corrupt file is an error so the next write cannot
    /// silently clobber existing data.
    pub fn load(&self) -> Result<BudgetBook> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(BudgetBook::default())
            }
            Err(err) => return Err(err.into()),
        };
        Ok(serde_json::from_str(&contents)?)
    }

    /// Replace the dataset on disk via temp file + rename
    pub fn write(&self, book: &BudgetBook) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(book)?;
        let tmp = self.path.with_extension("json.tmp");
        {
            let mut file = fs::File::create(&tmp)?;
            file.write_all(json.as_bytes())?;
            file.flush()?;
        }
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    /// Restore the seeded default dataset, discarding all records
    pub fn reset(&self) -> Result<()> {
        self.write(&seeded_book())
    }
}

fn seeded_book() -> BudgetBook {
    let mut book = BudgetBook::default();
    book.categories.expense = DEFAULT_EXPENSE_CATEGORIES
        .iter()
        .map(|name| name.to_string())
        .collect();
    book.categories.income = DEFAULT_INCOME_CATEGORIES
        .iter()
        .map(|name| name.to_string())
        .collect();
    book
}
