//! Domain models for Tally

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ========== Record Models ==========

/// A single financial record (one expense or income entry)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    /// Store-assigned id, unique across both ledgers
    pub id: i64,
    /// Non-negative amount in the household currency
    pub amount: f64,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// ISO-8601 calendar date (YYYY-MM-DD)
    pub date: String,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

/// Which ledger a record or category belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Expense,
    Income,
}

impl RecordKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Expense => "expense",
            Self::Income => "income",
        }
    }

    /// Capitalized plural for headings and tables
    pub fn label(&self) -> &'static str {
        match self {
            Self::Expense => "Expenses",
            Self::Income => "Income",
        }
    }
}

impl std::str::FromStr for RecordKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "expense" | "expenses" => Ok(Self::Expense),
            "income" => Ok(Self::Income),
            _ => Err(format!("Unknown record kind: {} (valid: expense, income)", s)),
        }
    }
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Fields supplied by the caller when creating a record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewRecord {
    pub amount: f64,
    pub category: String,
    #[serde(default)]
    pub description: Option<String>,
    /// ISO-8601 calendar date (YYYY-MM-DD)
    pub date: String,
}

/// Per-kind category name lists, insertion-ordered
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Categories {
    #[serde(default)]
    pub expense: Vec<String>,
    #[serde(default)]
    pub income: Vec<String>,
}

impl Categories {
    pub fn for_kind(&self, kind: RecordKind) -> &[String] {
        match kind {
            RecordKind::Expense => &self.expense,
            RecordKind::Income => &self.income,
        }
    }

    pub fn for_kind_mut(&mut self, kind: RecordKind) -> &mut Vec<String> {
        match kind {
            RecordKind::Expense => &mut self.expense,
            RecordKind::Income => &mut self.income,
        }
    }
}

/// Global monthly budget setting
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Budget {
    #[serde(default)]
    pub monthly_budget: f64,
}

/// The full persisted dataset
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BudgetBook {
    #[serde(default)]
    pub expenses: Vec<Record>,
    #[serde(default)]
    pub income: Vec<Record>,
    #[serde(default)]
    pub budget: Budget,
    #[serde(default)]
    pub categories: Categories,
}

impl BudgetBook {
    pub fn records(&self, kind: RecordKind) -> &[Record] {
        match kind {
            RecordKind::Expense => &self.expenses,
            RecordKind::Income => &self.income,
        }
    }

    pub(crate) fn records_mut(&mut self, kind: RecordKind) -> &mut Vec<Record> {
        match kind {
            RecordKind::Expense => &mut self.expenses,
            RecordKind::Income => &mut self.income,
        }
    }
}

// ========== Report Models ==========

/// Report period info
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportPeriod {
    pub from: String,
    pub to: String,
}

/// Month-bucketed totals as index-aligned parallel sequences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlySeries {
    /// Human month labels, oldest first ("Jan 24")
    pub labels: Vec<String>,
    pub expenses: Vec<f64>,
    pub income: Vec<f64>,
}

/// One category's share of a period total
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryShare {
    pub category: String,
    pub total: f64,
    /// Share of the whole period total, before any top-N truncation
    pub percentage: f64,
}

/// Headline figures for a period
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodSummary {
    pub total_expenses: f64,
    pub total_income: f64,
    /// May be negative when expenses exceed income
    pub net_savings: f64,
    /// Unclamped; values above 100 signal an exceeded budget
    pub budget_utilization_percent: f64,
    pub savings_rate_percent: f64,
    /// May be negative when the budget is exceeded
    pub remaining_budget: f64,
}
