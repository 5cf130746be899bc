//! Report handlers
//!
//! Thin wrappers over the aggregation engine: resolve the requested
//! period, load a snapshot, aggregate, and serialize.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::core_error;
use crate::{AppError, AppState};
use tally_core::models::{CategoryShare, MonthlySeries, PeriodSummary, RecordKind, ReportPeriod};
use tally_core::reports;

/// Query parameters for period-scoped reports
#[derive(Debug, Deserialize)]
pub struct PeriodQuery {
    /// Period preset (this-month, last-month, etc)
    pub period: Option<String>,
    /// Custom start date (YYYY-MM-DD)
    pub from: Option<String>,
    /// Custom end date (YYYY-MM-DD)
    pub to: Option<String>,
}

#[derive(Serialize)]
pub struct SummaryResponse {
    pub period: ReportPeriod,
    pub summary: PeriodSummary,
}

/// GET /api/reports/summary - Headline figures for a period
pub async fn report_summary(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PeriodQuery>,
) -> Result<Json<SummaryResponse>, AppError> {
    let period = params.period.as_deref().unwrap_or("this-month");
    let (from, to) = reports::resolve_period(period, params.from.as_deref(), params.to.as_deref())
        .map_err(core_error)?;

    let book = state.store.load().map_err(core_error)?;
    let expenses = reports::filter_period(&book.expenses, Some((from, to)));
    let income = reports::filter_period(&book.income, Some((from, to)));
    let summary = reports::summarize(&expenses, &income, book.budget.monthly_budget);

    Ok(Json(SummaryResponse {
        period: period_info(from, to),
        summary,
    }))
}

#[derive(Debug, Deserialize)]
pub struct TrendQuery {
    /// Trailing month count (default 6)
    pub months: Option<u32>,
    /// Custom start date (YYYY-MM-DD)
    pub from: Option<String>,
    /// Custom end date (YYYY-MM-DD)
    pub to: Option<String>,
}

#[derive(Serialize)]
pub struct TrendResponse {
    pub period: ReportPeriod,
    pub series: MonthlySeries,
}

/// GET /api/reports/trend - Month-bucketed expense and income totals
pub async fn report_trend(
    State(state): State<Arc<AppState>>,
    Query(params): Query<TrendQuery>,
) -> Result<Json<TrendResponse>, AppError> {
    let book = state.store.load().map_err(core_error)?;

    let (series, from, to) =
        if let (Some(from), Some(to)) = (params.from.as_deref(), params.to.as_deref()) {
            let (from, to) = reports::parse_range(from, to).map_err(core_error)?;
            let series = reports::monthly_series_range(&book.expenses, &book.income, from, to);
            (series, from, to)
        } else {
            let months = params.months.unwrap_or(6).clamp(1, 120); // Cap at 10 years
            let (from, to) = reports::trailing_months(months);
            let series = reports::monthly_series(&book.expenses, &book.income, months);
            (series, from, to)
        };

    Ok(Json(TrendResponse {
        period: period_info(from, to),
        series,
    }))
}

#[derive(Debug, Deserialize)]
pub struct TopCategoriesQuery {
    /// Period preset (this-month, last-month, etc)
    pub period: Option<String>,
    /// Custom start date (YYYY-MM-DD)
    pub from: Option<String>,
    /// Custom end date (YYYY-MM-DD)
    pub to: Option<String>,
    /// Ledger kind: "expense" (default) or "income"
    pub kind: Option<String>,
    /// Number of categories to return
    pub limit: Option<usize>,
}

#[derive(Serialize)]
pub struct TopCategoriesResponse {
    pub period: ReportPeriod,
    pub kind: RecordKind,
    pub total: f64,
    pub categories: Vec<CategoryShare>,
}

/// GET /api/reports/top-categories - Ranked category totals for a period
pub async fn report_top_categories(
    State(state): State<Arc<AppState>>,
    Query(params): Query<TopCategoriesQuery>,
) -> Result<Json<TopCategoriesResponse>, AppError> {
    let period = params.period.as_deref().unwrap_or("this-month");
    let (from, to) = reports::resolve_period(period, params.from.as_deref(), params.to.as_deref())
        .map_err(core_error)?;
    let kind = params
        .kind
        .as_deref()
        .unwrap_or("expense")
        .parse::<RecordKind>()
        .map_err(|e| AppError::bad_request(&e))?;
    let limit = params.limit.unwrap_or(10).min(100); // Cap at 100

    let book = state.store.load().map_err(core_error)?;
    let records = reports::filter_period(book.records(kind), Some((from, to)));
    let total: f64 = records.iter().map(|record| record.amount).sum();
    let categories = reports::rank_categories(&records, limit);

    Ok(Json(TopCategoriesResponse {
        period: period_info(from, to),
        kind,
        total,
        categories,
    }))
}

fn period_info(from: NaiveDate, to: NaiveDate) -> ReportPeriod {
    ReportPeriod {
        from: from.format("%Y-%m-%d").to_string(),
        to: to.format("%Y-%m-%d").to_string(),
    }
}
