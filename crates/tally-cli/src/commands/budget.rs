//! Budget command implementations

use anyhow::Result;
use tally_core::{reports, Store};

pub fn cmd_budget_show(store: &Store) -> Result<()> {
    let book = store.load()?;
    let expenses = reports::filter_period(&book.expenses, None);
    let income = reports::filter_period(&book.income, None);
    let summary = reports::summarize(&expenses, &income, book.budget.monthly_budget);

    println!();
    println!("💰 Monthly Budget");
    println!("   ─────────────────────────────────────────────");
    println!("   Budget:    ${:.2}", book.budget.monthly_budget);
    println!("   Spent:     ${:.2} this month", summary.total_expenses);
    println!("   Remaining: ${:.2}", summary.remaining_budget);
    if book.budget.monthly_budget > 0.0 {
        println!("   Used:      {:.1}%", summary.budget_utilization_percent);
    } else {
        println!();
        println!("   No budget set. Set one with:");
        println!("     tally budget set 1500");
    }

    Ok(())
}

pub fn cmd_budget_set(store: &Store, amount: f64) -> Result<()> {
    let budget = store.set_budget(amount)?;
    println!("✅ Monthly budget set to ${:.2}", budget.monthly_budget);
    Ok(())
}
