//! Aggregation engine
//!
//! Pure functions over record snapshots: period resolution and filtering,
//! month-bucketed time series, category rankings, and summary statistics.
//! No I/O and no shared state; callers pass in the records to aggregate.

use std::collections::HashMap;

use chrono::{Datelike, Duration, NaiveDate, Utc};

use crate::error::{Error, Result};
use crate::models::{CategoryShare, MonthlySeries, PeriodSummary, Record};

/// Resolve a period selection to an inclusive (from, to) date range.
///
/// Custom dates take precedence when both are given; otherwise `period`
/// names a preset relative to today.
pub fn resolve_period(
    period: &str,
    custom_from: Option<&str>,
    custom_to: Option<&str>,
) -> Result<(NaiveDate, NaiveDate)> {
    // If custom dates provided, use those
    if let (Some(from), Some(to)) = (custom_from, custom_to) {
        return parse_range(from, to);
    }

    let today = Utc::now().date_naive();

    match period.to_lowercase().as_str() {
        "this-month" => Ok(current_month(today)),
        "last-month" => {
            let first = first_of_month(today);
            Ok((shift_month(today, -1), first.pred_opt().unwrap()))
        }
        "this-year" => {
            let from = NaiveDate::from_ymd_opt(today.year(), 1, 1).unwrap();
            Ok((from, today))
        }
        "last-year" => {
            let from = NaiveDate::from_ymd_opt(today.year() - 1, 1, 1).unwrap();
            let to = NaiveDate::from_ymd_opt(today.year() - 1, 12, 31).unwrap();
            Ok((from, to))
        }
        "last-30-days" => Ok((today - Duration::days(30), today)),
        "last-90-days" => Ok((today - Duration::days(90), today)),
        "last-12-months" => Ok(trailing_months(12)),
        "all" => {
            let from = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
            Ok((from, today))
        }
        _ => Err(Error::InvalidData(format!(
            "Unknown period: {}. Available: this-month, last-month, this-year, last-year, last-30-days, last-90-days, last-12-months, all",
            period
        ))),
    }
}

/// Parse an explicit `YYYY-MM-DD` pair into an inclusive date range.
/// An inverted pair (`from` after `to`) is rejected.
pub fn parse_range(from: &str, to: &str) -> Result<(NaiveDate, NaiveDate)> {
    let from = parse_date(from, "from")?;
    let to = parse_date(to, "to")?;
    if from > to {
        return Err(Error::InvalidData(
            "from date must not be after to date".to_string(),
        ));
    }
    Ok((from, to))
}

/// The inclusive window covered by a trailing monthly series ending today:
/// the first day of the month `months - 1` months back, through today.
pub fn trailing_months(months: u32) -> (NaiveDate, NaiveDate) {
    let today = Utc::now().date_naive();
    let months = months.max(1);
    (shift_month(today, -(months as i32 - 1)), today)
}

/// Select the records whose date falls inside `range`, inclusive on both
/// ends. An absent range means the current calendar month. Records with
/// unparseable dates never match. Input order is preserved.
pub fn filter_period(records: &[Record], range: Option<(NaiveDate, NaiveDate)>) -> Vec<Record> {
    let (from, to) = range.unwrap_or_else(|| current_month(Utc::now().date_naive()));

    records
        .iter()
        .filter(|record| {
            record_date(record)
                .map(|date| date >= from && date <= to)
                .unwrap_or(false)
        })
        .cloned()
        .collect()
}

/// Month-bucketed totals for the trailing `months` calendar months ending
/// with the current month, oldest first. Always yields exactly `months`
/// buckets (minimum 1); empty months report zero.
pub fn monthly_series(expenses: &[Record], income: &[Record], months: u32) -> MonthlySeries {
    let months = months.max(1);
    let (start, _) = trailing_months(months);
    series_from(expenses, income, start, months)
}

/// Month-bucketed totals from `from`'s month through `to`'s month,
/// inclusive. A range inside a single month yields one bucket.
pub fn monthly_series_range(
    expenses: &[Record],
    income: &[Record],
    from: NaiveDate,
    to: NaiveDate,
) -> MonthlySeries {
    let span = (to.year() - from.year()) * 12 + to.month() as i32 - from.month() as i32 + 1;
    series_from(expenses, income, first_of_month(from), span.max(1) as u32)
}

/// Group records by category, sum amounts, and rank by total descending,
/// truncated to `limit`. Equal totals keep first-occurrence order (the
/// sort is stable over insertion-ordered groups). Percentages are shares
/// of the whole period total, computed before truncation; a zero period
/// total makes every percentage zero.
pub fn rank_categories(records: &[Record], limit: usize) -> Vec<CategoryShare> {
    let mut order: Vec<&str> = Vec::new();
    let mut totals: HashMap<&str, f64> = HashMap::new();

    for record in records {
        if !totals.contains_key(record.category.as_str()) {
            order.push(record.category.as_str());
        }
        *totals.entry(record.category.as_str()).or_insert(0.0) += record.amount;
    }

    let period_total: f64 = totals.values().sum();

    let mut ranked: Vec<CategoryShare> = order
        .into_iter()
        .map(|category| {
            let total = totals[category];
            let percentage = if period_total > 0.0 {
                (total / period_total) * 100.0
            } else {
                0.0
            };
            CategoryShare {
                category: category.to_string(),
                total,
                percentage,
            }
        })
        .collect();

    ranked.sort_by(|a, b| b.total.total_cmp(&a.total));
    ranked.truncate(limit);
    ranked
}

/// Headline figures for a period. Division-by-zero cases (no budget, no
/// income) report zero; the budget utilization is not clamped, so values
/// above 100 signal an exceeded budget.
pub fn summarize(expenses: &[Record], income: &[Record], monthly_budget: f64) -> PeriodSummary {
    let total_expenses: f64 = expenses.iter().map(|r| r.amount).sum();
    let total_income: f64 = income.iter().map(|r| r.amount).sum();
    let net_savings = total_income - total_expenses;

    let budget_utilization_percent = if monthly_budget > 0.0 {
        (total_expenses / monthly_budget) * 100.0
    } else {
        0.0
    };
    let savings_rate_percent = if total_income > 0.0 {
        (net_savings / total_income) * 100.0
    } else {
        0.0
    };

    PeriodSummary {
        total_expenses,
        total_income,
        net_savings,
        budget_utilization_percent,
        savings_rate_percent,
        remaining_budget: monthly_budget - total_expenses,
    }
}

fn parse_date(s: &str, which: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| Error::InvalidData(format!("Invalid {} date format (use YYYY-MM-DD)", which)))
}

/// The record's calendar date; any time-of-day suffix is ignored
fn record_date(record: &Record) -> Option<NaiveDate> {
    let date = record.date.get(..10).unwrap_or(&record.date);
    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
}

fn current_month(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    (first_of_month(today), last_of_month(today))
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap()
}

fn last_of_month(date: NaiveDate) -> NaiveDate {
    shift_month(date, 1).pred_opt().unwrap()
}

/// First day of the month `offset` months away from `date`'s month
fn shift_month(date: NaiveDate, offset: i32) -> NaiveDate {
    let total = date.year() * 12 + date.month() as i32 - 1 + offset;
    NaiveDate::from_ymd_opt(total.div_euclid(12), (total.rem_euclid(12) + 1) as u32, 1).unwrap()
}

fn month_total(records: &[Record], month: NaiveDate) -> f64 {
    records
        .iter()
        .filter(|record| {
            record_date(record)
                .map(|date| date.year() == month.year() && date.month() == month.month())
                .unwrap_or(false)
        })
        .map(|record| record.amount)
        .sum()
}

fn series_from(
    expenses: &[Record],
    income: &[Record],
    start: NaiveDate,
    months: u32,
) -> MonthlySeries {
    let mut labels = Vec::with_capacity(months as usize);
    let mut expense_totals = Vec::with_capacity(months as usize);
    let mut income_totals = Vec::with_capacity(months as usize);

    for i in 0..months {
        let bucket = shift_month(start, i as i32);
        labels.push(bucket.format("%b %y").to_string());
        expense_totals.push(month_total(expenses, bucket));
        income_totals.push(month_total(income, bucket));
    }

    MonthlySeries {
        labels,
        expenses: expense_totals,
        income: income_totals,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i64, amount: f64, category: &str, date: &str) -> Record {
        Record {
            id,
            amount,
            category: category.to_string(),
            description: None,
            date: date.to_string(),
            created_at: Utc::now(),
        }
    }

    fn round1(value: f64) -> f64 {
        (value * 10.0).round() / 10.0
    }

    // ========== Period Filter Tests ==========

    #[test]
    fn test_filter_includes_both_range_boundaries() {
        let records = vec![
            record(1, 10.0, "food", "2024-01-09"),
            record(2, 20.0, "food", "2024-01-10"),
            record(3, 30.0, "food", "2024-01-20"),
            record(4, 40.0, "food", "2024-01-21"),
        ];
        let from = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        let to = NaiveDate::from_ymd_opt(2024, 1, 20).unwrap();

        let filtered = filter_period(&records, Some((from, to)));
        let ids: Vec<i64> = filtered.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn test_filter_defaults_to_current_month() {
        let today = Utc::now().date_naive();
        let first = first_of_month(today);
        let last = last_of_month(today);
        let previous = first.pred_opt().unwrap();

        let records = vec![
            record(1, 10.0, "food", &first.format("%Y-%m-%d").to_string()),
            record(2, 20.0, "food", &last.format("%Y-%m-%d").to_string()),
            record(3, 30.0, "food", &previous.format("%Y-%m-%d").to_string()),
        ];

        let filtered = filter_period(&records, None);
        let ids: Vec<i64> = filtered.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_filter_excludes_unparseable_dates() {
        let records = vec![
            record(1, 10.0, "food", "not-a-date"),
            record(2, 20.0, "food", "2024-13-40"),
            record(3, 30.0, "food", "2024-01-15"),
        ];
        let from = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let to = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();

        let filtered = filter_period(&records, Some((from, to)));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 3);
    }

    #[test]
    fn test_filter_ignores_time_suffix() {
        let records = vec![record(1, 10.0, "food", "2024-01-15T10:30:00")];
        let from = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let to = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();

        let filtered = filter_period(&records, Some((from, to)));
        assert_eq!(filtered.len(), 1);
    }

    #[test]
    fn test_filter_empty_input_yields_empty_output() {
        let filtered = filter_period(&[], None);
        assert!(filtered.is_empty());
    }

    // ========== Period Resolution Tests ==========

    #[test]
    fn test_resolve_custom_dates_win_over_preset() {
        let (from, to) =
            resolve_period("this-month", Some("2024-01-10"), Some("2024-02-20")).unwrap();
        assert_eq!(from, NaiveDate::from_ymd_opt(2024, 1, 10).unwrap());
        assert_eq!(to, NaiveDate::from_ymd_opt(2024, 2, 20).unwrap());
    }

    #[test]
    fn test_resolve_rejects_malformed_custom_date() {
        let result = resolve_period("this-month", Some("01/10/2024"), Some("2024-02-20"));
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Invalid from date format"));
    }

    #[test]
    fn test_resolve_rejects_unknown_preset() {
        let result = resolve_period("fortnight", None, None);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Unknown period"));
    }

    #[test]
    fn test_parse_range_rejects_inverted_pair() {
        let result = parse_range("2024-02-01", "2024-01-01");
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("must not be after"));
    }

    #[test]
    fn test_resolve_this_month_covers_whole_month() {
        let today = Utc::now().date_naive();
        let (from, to) = resolve_period("this-month", None, None).unwrap();
        assert_eq!(from, first_of_month(today));
        assert_eq!(to, last_of_month(today));
    }

    #[test]
    fn test_resolve_last_month_ends_day_before_this_month() {
        let today = Utc::now().date_naive();
        let (from, to) = resolve_period("last-month", None, None).unwrap();
        assert_eq!(from.day(), 1);
        assert_eq!(to, first_of_month(today).pred_opt().unwrap());
        assert_eq!(from, first_of_month(to));
    }

    #[test]
    fn test_trailing_months_starts_on_first_of_oldest_month() {
        let today = Utc::now().date_naive();
        let (from, to) = trailing_months(6);
        assert_eq!(from, shift_month(today, -5));
        assert_eq!(from.day(), 1);
        assert_eq!(to, today);
    }

    // ========== Monthly Series Tests ==========

    #[test]
    fn test_series_always_yields_requested_bucket_count() {
        let series = monthly_series(&[], &[], 6);
        assert_eq!(series.labels.len(), 6);
        assert_eq!(series.expenses.len(), 6);
        assert_eq!(series.income.len(), 6);
        assert!(series.expenses.iter().all(|&total| total == 0.0));
    }

    #[test]
    fn test_series_single_month_is_current_month() {
        let today = Utc::now().date_naive();
        let series = monthly_series(&[], &[], 1);
        assert_eq!(series.labels, vec![today.format("%b %y").to_string()]);
    }

    #[test]
    fn test_series_totals_land_in_their_months() {
        let today = Utc::now().date_naive();
        let this_month = today.format("%Y-%m-%d").to_string();
        let last_month = shift_month(today, -1).format("%Y-%m-%d").to_string();

        let expenses = vec![
            record(1, 100.0, "rent", &this_month),
            record(2, 25.0, "food", &this_month),
            record(3, 40.0, "food", &last_month),
        ];
        let income = vec![record(4, 500.0, "salary", &this_month)];

        let series = monthly_series(&expenses, &income, 3);
        assert_eq!(series.expenses, vec![0.0, 40.0, 125.0]);
        assert_eq!(series.income, vec![0.0, 0.0, 500.0]);
    }

    #[test]
    fn test_series_range_spans_months_inclusive() {
        let from = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let to = NaiveDate::from_ymd_opt(2024, 3, 2).unwrap();
        let expenses = vec![
            record(1, 100.0, "rent", "2024-01-20"),
            record(2, 50.0, "food", "2024-03-01"),
        ];

        let series = monthly_series_range(&expenses, &[], from, to);
        assert_eq!(series.labels, vec!["Jan 24", "Feb 24", "Mar 24"]);
        assert_eq!(series.expenses, vec![100.0, 0.0, 50.0]);
    }

    #[test]
    fn test_series_range_same_month_yields_one_bucket() {
        let from = NaiveDate::from_ymd_opt(2024, 5, 3).unwrap();
        let to = NaiveDate::from_ymd_opt(2024, 5, 28).unwrap();

        let series = monthly_series_range(&[], &[], from, to);
        assert_eq!(series.labels, vec!["May 24"]);
    }

    #[test]
    fn test_series_range_crosses_year_boundary() {
        let from = NaiveDate::from_ymd_opt(2023, 11, 10).unwrap();
        let to = NaiveDate::from_ymd_opt(2024, 2, 5).unwrap();

        let series = monthly_series_range(&[], &[], from, to);
        assert_eq!(series.labels, vec!["Nov 23", "Dec 23", "Jan 24", "Feb 24"]);
    }

    // ========== Category Ranking Tests ==========

    #[test]
    fn test_ranking_orders_by_total_with_whole_period_percentages() {
        let records = vec![
            record(1, 100.0, "food", "2024-01-05"),
            record(2, 50.0, "food", "2024-01-20"),
            record(3, 200.0, "rent", "2024-01-01"),
        ];

        let ranked = rank_categories(&records, 2);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].category, "rent");
        assert_eq!(ranked[0].total, 200.0);
        assert_eq!(round1(ranked[0].percentage), 57.1);
        assert_eq!(ranked[1].category, "food");
        assert_eq!(ranked[1].total, 150.0);
        assert_eq!(round1(ranked[1].percentage), 42.9);
    }

    #[test]
    fn test_ranking_percentages_sum_to_100_over_all_groups() {
        let records = vec![
            record(1, 10.0, "a", "2024-01-01"),
            record(2, 30.0, "b", "2024-01-01"),
            record(3, 60.0, "c", "2024-01-01"),
        ];

        let ranked = rank_categories(&records, 10);
        let sum: f64 = ranked.iter().map(|share| share.percentage).sum();
        assert!((sum - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_ranking_truncation_keeps_whole_period_percentages() {
        let records = vec![
            record(1, 100.0, "food", "2024-01-05"),
            record(2, 50.0, "food", "2024-01-20"),
            record(3, 200.0, "rent", "2024-01-01"),
        ];

        // The top entry keeps its share of the full total, not of the top-1
        let ranked = rank_categories(&records, 1);
        assert_eq!(ranked.len(), 1);
        assert_eq!(round1(ranked[0].percentage), 57.1);
    }

    #[test]
    fn test_ranking_ties_keep_first_occurrence_order() {
        let records = vec![
            record(1, 50.0, "transport", "2024-01-01"),
            record(2, 50.0, "dining", "2024-01-02"),
        ];

        let ranked = rank_categories(&records, 10);
        assert_eq!(ranked[0].category, "transport");
        assert_eq!(ranked[1].category, "dining");
    }

    #[test]
    fn test_ranking_zero_total_reports_zero_percentages() {
        let records = vec![
            record(1, 0.0, "food", "2024-01-01"),
            record(2, 0.0, "rent", "2024-01-02"),
        ];

        let ranked = rank_categories(&records, 10);
        assert_eq!(ranked.len(), 2);
        assert!(ranked.iter().all(|share| share.percentage == 0.0));
    }

    #[test]
    fn test_ranking_empty_input_yields_empty_output() {
        assert!(rank_categories(&[], 10).is_empty());
    }

    // ========== Summary Tests ==========

    #[test]
    fn test_summary_computes_headline_figures() {
        let expenses = vec![
            record(1, 100.0, "rent", "2024-01-01"),
            record(2, 50.0, "food", "2024-01-02"),
        ];
        let income = vec![record(3, 500.0, "salary", "2024-01-01")];

        let summary = summarize(&expenses, &income, 1000.0);
        assert_eq!(summary.total_expenses, 150.0);
        assert_eq!(summary.total_income, 500.0);
        assert_eq!(summary.net_savings, 350.0);
        assert_eq!(summary.budget_utilization_percent, 15.0);
        assert_eq!(summary.savings_rate_percent, 70.0);
        assert_eq!(summary.remaining_budget, 850.0);
    }

    #[test]
    fn test_summary_zero_budget_reports_zero_utilization() {
        let expenses = vec![record(1, 150.0, "rent", "2024-01-01")];

        let summary = summarize(&expenses, &[], 0.0);
        assert_eq!(summary.budget_utilization_percent, 0.0);
        assert_eq!(summary.remaining_budget, -150.0);
    }

    #[test]
    fn test_summary_zero_income_reports_zero_savings_rate() {
        let expenses = vec![record(1, 80.0, "food", "2024-01-01")];

        let summary = summarize(&expenses, &[], 100.0);
        assert_eq!(summary.savings_rate_percent, 0.0);
        assert_eq!(summary.net_savings, -80.0);
    }

    #[test]
    fn test_summary_over_budget_utilization_is_unclamped() {
        let expenses = vec![record(1, 1500.0, "rent", "2024-01-01")];

        let summary = summarize(&expenses, &[], 1000.0);
        assert_eq!(summary.budget_utilization_percent, 150.0);
        assert_eq!(summary.remaining_budget, -500.0);
    }

    #[test]
    fn test_summary_net_savings_can_be_negative() {
        let expenses = vec![record(1, 300.0, "rent", "2024-01-01")];
        let income = vec![record(2, 200.0, "salary", "2024-01-01")];

        let summary = summarize(&expenses, &income, 0.0);
        assert_eq!(summary.net_savings, -100.0);
        assert_eq!(summary.savings_rate_percent, -50.0);
    }
}
