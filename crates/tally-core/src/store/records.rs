//! Expense and income entry operations

use chrono::Utc;

use super::Store;
use crate::error::{Error, Result};
use crate::models::{NewRecord, Record, RecordKind};

impl Store {
    /// List all records in one ledger, in insertion order
    pub fn list_records(&self, kind: RecordKind) -> Result<Vec<Record>> {
        Ok(self.load()?.records(kind).to_vec())
    }

    /// Append a record, assigning the next id (unique across both
    /// ledgers) and a creation timestamp
    pub fn add_record(&self, kind: RecordKind, new: NewRecord) -> Result<Record> {
        if !new.amount.is_finite() || new.amount < 0.0 {
            return Err(Error::InvalidData(
                "Amount must be a non-negative number".to_string(),
            ));
        }

        let mut book = self.load()?;
        let next_id = book
            .expenses
            .iter()
            .chain(book.income.iter())
            .map(|record| record.id)
            .max()
            .unwrap_or(0)
            + 1;

        let record = Record {
            id: next_id,
            amount: new.amount,
            category: new.category,
            description: new.description,
            date: new.date,
            created_at: Utc::now(),
        };

        book.records_mut(kind).push(record.clone());
        self.write(&book)?;
        Ok(record)
    }

    /// Remove a record entirely
    pub fn delete_record(&self, kind: RecordKind, id: i64) -> Result<()> {
        let mut book = self.load()?;
        let records = book.records_mut(kind);
        let before = records.len();
        records.retain(|record| record.id != id);

        if records.len() == before {
            return Err(Error::NotFound(format!("Record {} not found", id)));
        }

        self.write(&book)
    }
}
