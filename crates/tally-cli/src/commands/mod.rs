//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `budget` - Budget commands (show, set)
//! - `categories` - Category management commands (list, add, remove)
//! - `data` - Dataset commands (export, import, clear)
//! - `records` - Record commands for both ledgers (add, list, delete)
//! - `reports` - Report commands (summary, trend, top)
//! - `serve` - Web server command

use std::path::Path;

use anyhow::{Context, Result};
use tally_core::Store;

pub mod budget;
pub mod categories;
pub mod data;
pub mod records;
pub mod reports;
pub mod serve;

// Re-export command functions for main.rs
pub use budget::*;
pub use categories::*;
pub use data::*;
pub use records::*;
pub use reports::*;
pub use serve::*;

pub fn open_store(path: &Path) -> Result<Store> {
    Store::open(path).with_context(|| format!("Failed to open data file: {}", path.display()))
}

/// Truncate a string to a maximum number of characters, adding "..." if truncated.
/// Counts chars rather than bytes so multi-byte category names render intact.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
