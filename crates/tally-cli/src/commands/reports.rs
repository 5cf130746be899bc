//! Report command implementations

use anyhow::Result;
use tally_core::{reports, RecordKind, Store};

use super::truncate;

fn require_pair(from: Option<&str>, to: Option<&str>) -> Result<()> {
    if from.is_some() != to.is_some() {
        anyhow::bail!("--from and --to must be used together");
    }
    Ok(())
}

pub fn cmd_report_summary(
    store: &Store,
    period: &str,
    from: Option<&str>,
    to: Option<&str>,
) -> Result<()> {
    require_pair(from, to)?;
    let (from, to) = reports::resolve_period(period, from, to)?;
    let book = store.load()?;
    let expenses = reports::filter_period(&book.expenses, Some((from, to)));
    let income = reports::filter_period(&book.income, Some((from, to)));
    let summary = reports::summarize(&expenses, &income, book.budget.monthly_budget);

    println!();
    println!("📊 Summary");
    println!("   Period: {} to {}", from, to);
    println!("   ─────────────────────────────────────────────");
    println!("   Income:   ${:.2}", summary.total_income);
    println!("   Expenses: ${:.2}", summary.total_expenses);
    println!("   Net:      ${:.2}", summary.net_savings);

    if book.budget.monthly_budget > 0.0 {
        let filled = (summary.budget_utilization_percent.min(100.0) / 10.0).round() as usize;
        let bar = format!("{}{}", "█".repeat(filled), "░".repeat(10 - filled));
        println!();
        println!(
            "   Budget:   {} {:.1}% of ${:.2}",
            bar, summary.budget_utilization_percent, book.budget.monthly_budget
        );
        println!("   Remaining: ${:.2}", summary.remaining_budget);
    }

    if summary.total_income > 0.0 {
        println!("   Savings rate: {:.1}%", summary.savings_rate_percent);
    }

    Ok(())
}

pub fn cmd_report_trend(
    store: &Store,
    months: u32,
    from: Option<&str>,
    to: Option<&str>,
) -> Result<()> {
    require_pair(from, to)?;
    let book = store.load()?;
    let series = if let (Some(from), Some(to)) = (from, to) {
        let (from, to) = reports::parse_range(from, to)?;
        reports::monthly_series_range(&book.expenses, &book.income, from, to)
    } else {
        reports::monthly_series(&book.expenses, &book.income, months.clamp(1, 120))
    };

    println!();
    println!("📈 Monthly Trend");
    println!("   ─────────────────────────────────────────────────");
    println!(
        "   {:<8} │ {:>10} │ {:>10} │ {:>10}",
        "Month", "Income", "Expenses", "Net"
    );
    println!("   ─────────┼────────────┼────────────┼───────────");

    let mut total_income = 0.0;
    let mut total_expenses = 0.0;
    for (i, label) in series.labels.iter().enumerate() {
        let income = series.income[i];
        let expenses = series.expenses[i];
        total_income += income;
        total_expenses += expenses;
        println!(
            "   {:<8} │ {:>10.2} │ {:>10.2} │ {:>10.2}",
            label,
            income,
            expenses,
            income - expenses
        );
    }

    println!("   ─────────┼────────────┼────────────┼───────────");
    println!(
        "   {:<8} │ {:>10.2} │ {:>10.2} │ {:>10.2}",
        "Total",
        total_income,
        total_expenses,
        total_income - total_expenses
    );

    Ok(())
}

pub fn cmd_report_top(
    store: &Store,
    kind: RecordKind,
    period: &str,
    from: Option<&str>,
    to: Option<&str>,
    limit: usize,
) -> Result<()> {
    require_pair(from, to)?;
    let (from, to) = reports::resolve_period(period, from, to)?;
    let book = store.load()?;
    let records = reports::filter_period(book.records(kind), Some((from, to)));
    let total: f64 = records.iter().map(|r| r.amount).sum();
    let ranked = reports::rank_categories(&records, limit);

    println!();
    println!("🏆 Top Categories ({})", kind.label());
    println!("   Period: {} to {}", from, to);
    println!("   ─────────────────────────────────────────────");

    if ranked.is_empty() {
        println!("   No records in this period.");
        return Ok(());
    }

    for (i, share) in ranked.iter().enumerate() {
        println!(
            "   {:>2}. {:<16} │ {:>10.2} │ {:>5.1}%",
            i + 1,
            truncate(&share.category, 16),
            share.total,
            share.percentage
        );
    }

    println!("   ─────────────────────────────────────────────");
    println!("   Total: ${:.2}", total);

    Ok(())
}
