//! Category name list management
//!
//! Category lists are display and autocomplete vocabulary only; record
//! entry does not check membership.

use super::Store;
use crate::error::{Error, Result};
use crate::models::{Categories, RecordKind};

impl Store {
    pub fn list_categories(&self) -> Result<Categories> {
        Ok(self.load()?.categories)
    }

    /// Append a category name, preserving insertion order
    pub fn add_category(&self, kind: RecordKind, name: &str) -> Result<Categories> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::InvalidData(
                "Category name cannot be empty".to_string(),
            ));
        }

        let mut book = self.load()?;
        let names = book.categories.for_kind_mut(kind);
        if names.iter().any(|existing| existing == name) {
            return Err(Error::InvalidData("Category already exists".to_string()));
        }

        names.push(name.to_string());
        self.write(&book)?;
        Ok(book.categories)
    }

    pub fn remove_category(&self, kind: RecordKind, name: &str) -> Result<()> {
        let mut book = self.load()?;
        let names = book.categories.for_kind_mut(kind);
        let before = names.len();
        names.retain(|existing| existing != name);

        if names.len() == before {
            return Err(Error::NotFound(format!("Category '{}' not found", name)));
        }

        self.write(&book)
    }
}
