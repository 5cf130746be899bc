//! Monthly budget setting

use super::Store;
use crate::error::{Error, Result};
use crate::models::Budget;

impl Store {
    pub fn get_budget(&self) -> Result<Budget> {
        Ok(self.load()?.budget)
    }

    pub fn set_budget(&self, monthly_budget: f64) -> Result<Budget> {
        if !monthly_budget.is_finite() || monthly_budget < 0.0 {
            return Err(Error::InvalidData(
                "Budget must be a non-negative number".to_string(),
            ));
        }

        let mut book = self.load()?;
        book.budget.monthly_budget = monthly_budget;
        self.write(&book)?;
        Ok(book.budget)
    }
}
