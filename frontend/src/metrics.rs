//! Derived figures for the dashboard widgets.
//!
//! Every function here is total: missing numbers read as zero and unknown
//! categories fall back to a default, so a malformed payload degrades the
//! charts instead of breaking the page.

use crate::categories::{palette_at, TrendCategory};
use crate::models::{
    CategoryBreakdownEntry, IncomeVsExpensesPoint, MonthlySummary, MonthlyTrendPoint,
};
use crate::sample;
use serde_json::Value;
use std::cmp::Ordering;

const NEEDS_KEYS: [&str; 8] = [
    "housing",
    "food",
    "transportation",
    "utilities",
    "insurance",
    "medical",
    "personal",
    "education",
];
const WANTS_KEYS: [&str; 4] = ["dining", "recreation", "shopping", "miscellaneous"];

const FALLBACK_COLOR: &str = "#6b7280";

/// Fills in color, accent and recommended figures the backend left out.
pub fn normalize_breakdown(entries: &[CategoryBreakdownEntry]) -> Vec<CategoryBreakdownEntry> {
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let (color, accent) = palette_at(index);
            CategoryBreakdownEntry {
                color: Some(entry.color.clone().unwrap_or_else(|| color.to_string())),
                accent_class: Some(
                    entry
                        .accent_class
                        .clone()
                        .unwrap_or_else(|| accent.to_string()),
                ),
                recommended: Some(entry.recommended.unwrap_or(0.0)),
                recommended_amount: Some(entry.recommended_amount.unwrap_or(0.0)),
                ..entry.clone()
            }
        })
        .collect()
}

/// Reads values above 1 as already-percent and anything else as a fraction.
pub fn display_percent(raw: f64) -> f64 {
    if raw > 1.0 {
        raw
    } else {
        raw * 100.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BudgetRow {
    pub category: String,
    pub amount: f64,
    pub color: String,
    pub actual_percent: f64,
    pub recommended_percent: f64,
    pub recommended_amount: f64,
    pub bar_percent: f64,
    /// Position of the recommended marker; `None` when no target is set.
    pub marker_percent: Option<f64>,
    pub over_budget: bool,
}

pub fn is_over_budget(actual_percent: f64, recommended_percent: f64) -> bool {
    recommended_percent > 0.0 && actual_percent > recommended_percent
}

pub fn budget_row(entry: &CategoryBreakdownEntry) -> BudgetRow {
    let actual_percent = display_percent(entry.percent);
    let recommended_percent = display_percent(entry.recommended.unwrap_or(0.0));
    BudgetRow {
        category: entry.category.clone(),
        amount: entry.amount,
        color: entry
            .color
            .clone()
            .unwrap_or_else(|| FALLBACK_COLOR.to_string()),
        actual_percent,
        recommended_percent,
        recommended_amount: entry.recommended_amount.unwrap_or(0.0),
        bar_percent: actual_percent.min(100.0),
        marker_percent: (recommended_percent > 0.0).then(|| recommended_percent.min(100.0)),
        over_budget: is_over_budget(actual_percent, recommended_percent),
    }
}

/// Prefers the summary's own figure and only sums the breakdown without one.
pub fn total_expenses(summary: Option<&MonthlySummary>, breakdown: &[CategoryBreakdownEntry]) -> f64 {
    match summary {
        Some(summary) => summary.total_spending,
        None => breakdown.iter().map(|entry| entry.amount).sum(),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NeedsWantsPoint {
    pub month: String,
    pub needs: f64,
    pub wants: f64,
}

pub fn needs_wants(point: &MonthlyTrendPoint) -> NeedsWantsPoint {
    NeedsWantsPoint {
        month: point.month.clone(),
        needs: NEEDS_KEYS.iter().map(|key| point.amount(key)).sum(),
        wants: WANTS_KEYS.iter().map(|key| point.amount(key)).sum(),
    }
}

pub fn needs_wants_series(trend: &[MonthlyTrendPoint]) -> Vec<NeedsWantsPoint> {
    trend.iter().map(needs_wants).collect()
}

/// Sums needs and wants over every month.
pub fn needs_wants_totals(series: &[NeedsWantsPoint]) -> (f64, f64) {
    series
        .iter()
        .fold((0.0, 0.0), |(needs, wants), point| (needs + point.needs, wants + point.wants))
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IncomeStats {
    pub average_net: f64,
    pub savings_rate: f64,
}

pub fn income_stats(points: &[IncomeVsExpensesPoint]) -> IncomeStats {
    if points.is_empty() {
        return IncomeStats {
            average_net: 0.0,
            savings_rate: 0.0,
        };
    }
    let count = points.len() as f64;
    let average_net = points.iter().map(|p| p.income - p.expenses).sum::<f64>() / count;
    let average_income = points.iter().map(|p| p.income).sum::<f64>() / count;
    let savings_rate = if average_income == 0.0 {
        0.0
    } else {
        average_net / average_income * 100.0
    };
    IncomeStats {
        average_net,
        savings_rate,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub name: String,
    pub amount: f64,
    pub weight: f64,
    pub color: String,
    pub is_empty: bool,
}

/// Builds pie slices, largest first. Categories with nothing spent get a
/// weight of one so an empty month still draws an even ring.
pub fn pie_slices(breakdown: &[CategoryBreakdownEntry]) -> Vec<PieSlice> {
    let placeholder;
    let source = if breakdown.is_empty() {
        placeholder = sample::placeholder_breakdown();
        placeholder.as_slice()
    } else {
        breakdown
    };

    let mut slices: Vec<PieSlice> = source
        .iter()
        .enumerate()
        .map(|(index, entry)| PieSlice {
            name: entry.category.clone(),
            amount: entry.amount,
            weight: if entry.amount > 0.0 { entry.amount } else { 1.0 },
            color: entry
                .color
                .clone()
                .unwrap_or_else(|| palette_at(index).0.to_string()),
            is_empty: entry.amount <= 0.0,
        })
        .collect();
    slices.sort_by(|a, b| b.weight.partial_cmp(&a.weight).unwrap_or(Ordering::Equal));
    slices
}

pub fn total_weight(slices: &[PieSlice]) -> f64 {
    let total: f64 = slices.iter().map(|slice| slice.weight).sum();
    if total == 0.0 {
        1.0
    } else {
        total
    }
}

pub fn slice_share(slice: &PieSlice, total: f64) -> f64 {
    slice.weight / total * 100.0
}

/// Trend points with every canonical category present, falling back to the
/// sample months when the backend sent none.
pub fn normalize_trend(trend: Option<&[MonthlyTrendPoint]>) -> Vec<MonthlyTrendPoint> {
    let source = match trend {
        Some(points) if !points.is_empty() => points.to_vec(),
        _ => sample::trend(),
    };
    source
        .into_iter()
        .map(|mut point| {
            for category in TrendCategory::all() {
                point
                    .categories
                    .entry(category.key().to_string())
                    .or_insert_with(|| Value::from(0.0));
            }
            point
        })
        .collect()
}
