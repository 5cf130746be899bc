//! Tally Core Library
//!
//! Shared functionality for the Tally household budget tracker:
//! - Domain models for records, categories, and budgets
//! - JSON-file-backed store with atomic writes
//! - Aggregation engine for period filters, monthly series,
//!   category rankings, and summary statistics

pub mod error;
pub mod models;
pub mod reports;
pub mod store;

pub use error::{Error, Result};
pub use models::{
    Budget, BudgetBook, Categories, CategoryShare, MonthlySeries, NewRecord, PeriodSummary,
    Record, RecordKind, ReportPeriod,
};
pub use store::Store;
