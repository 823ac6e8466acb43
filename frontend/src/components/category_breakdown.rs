use yew::prelude::*;

use crate::format::{format_currency, format_percent};
use crate::metrics::{budget_row, BudgetRow};
use crate::models::CategoryBreakdownEntry;

#[derive(Properties, PartialEq)]
pub struct CategoryBreakdownProps {
    pub breakdown: Vec<CategoryBreakdownEntry>,
    pub total_expenses: f64,
}

/// Actual share per category against its recommended share.
#[function_component(CategoryBreakdown)]
pub fn category_breakdown(props: &CategoryBreakdownProps) -> Html {
    let rows: Vec<BudgetRow> = props.breakdown.iter().map(budget_row).collect();

    html! {
        <div class="bg-card rounded-lg p-6 border border-border">
            <div class="flex items-center justify-between mb-6">
                <h3 class="text-lg font-bold text-foreground">{"Category Breakdown"}</h3>
                <div class="text-right">
                    <p class="text-xs text-muted-foreground">{"Total Expenses"}</p>
                    <p class="text-xl text-foreground">{ format_currency(props.total_expenses) }</p>
                </div>
            </div>

            if rows.is_empty() {
                <p class="text-sm text-muted-foreground">{"No category data for this month yet."}</p>
            } else {
                <div class="space-y-5">
                    { for rows.iter().map(budget_row_view) }
                </div>
            }
        </div>
    }
}

fn budget_row_view(row: &BudgetRow) -> Html {
    let status = if row.over_budget {
        html! { <span class="text-red-600 dark:text-red-400" title="Over recommended">{"↑"}</span> }
    } else {
        html! { <span class="text-green-600 dark:text-green-400" title="Within recommended">{"✓"}</span> }
    };

    html! {
        <div key={row.category.clone()}>
            <div class="flex items-center justify-between mb-1">
                <span class="flex items-center gap-2 text-sm text-foreground">
                    <span class="inline-block w-3 h-3 rounded-full" style={format!("background: {}", row.color)}></span>
                    { row.category.clone() }
                    { status }
                </span>
                <span class="text-sm text-foreground">{ format_currency(row.amount) }</span>
            </div>
            <div class="relative h-2 bg-muted rounded-full">
                <div
                    class="h-2 rounded-full"
                    style={format!("width: {:.1}%; background: {}", row.bar_percent, row.color)}
                ></div>
                if let Some(marker) = row.marker_percent {
                    <div
                        class="absolute top-[-3px] w-0.5 h-3.5 bg-foreground"
                        style={format!("left: {:.1}%", marker)}
                    ></div>
                }
            </div>
            <div class="flex items-center justify-between mt-1 text-xs text-muted-foreground">
                <span>{ format!("{} of spending", format_percent(row.actual_percent)) }</span>
                if row.recommended_percent > 0.0 {
                    <span>
                        { format!(
                            "Recommended {} ({})",
                            format_percent(row.recommended_percent),
                            format_currency(row.recommended_amount)
                        ) }
                    </span>
                }
            </div>
        </div>
    }
}
