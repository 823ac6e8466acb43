use yew::prelude::*;

use super::icons::{icon_calendar, icon_dollar, icon_trending_down};
use crate::format::{format_currency, format_percent};
use crate::models::MonthlySummary;

#[derive(Properties, PartialEq)]
pub struct MonthlyOverviewProps {
    #[prop_or_default]
    pub summary: Option<MonthlySummary>,
    #[prop_or_default]
    pub is_loading: bool,
}

#[function_component(MonthlyOverview)]
pub fn monthly_overview(props: &MonthlyOverviewProps) -> Html {
    let data = props.summary.clone().unwrap_or_default();
    let increase = data.difference_amount >= 0.0;
    let difference_class = if increase {
        "text-red-500 dark:text-red-400"
    } else {
        "text-green-500 dark:text-green-400"
    };
    let daily_class = if data.daily_average_change <= 0.0 {
        "text-green-500 dark:text-green-400"
    } else {
        "text-red-500 dark:text-red-400"
    };

    html! {
        <div class="grid gap-6 md:grid-cols-2">
            <div class="bg-card rounded-lg p-6 border border-border md:row-span-2">
                <div class="flex items-center justify-between pb-3">
                    <div>
                        <h3 class="text-lg font-bold text-foreground">{"Total Spending"}</h3>
                        if props.is_loading {
                            <p class="text-xs text-muted-foreground">{"Syncing latest data…"}</p>
                        }
                    </div>
                    <div class="bg-red-50 dark:bg-red-900/20 p-2 rounded-lg">{ icon_dollar() }</div>
                </div>
                <div class="text-6xl text-foreground mb-8">{ format_currency(data.total_spending) }</div>
                <div class="space-y-2">
                    <div class="flex items-center justify-between">
                        <span class="text-muted-foreground">{"Last Month"}</span>
                        <span class="text-foreground">{ format_currency(data.last_month_total) }</span>
                    </div>
                    <div class="flex items-center justify-between">
                        <span class="text-muted-foreground">{"Difference"}</span>
                        <span class={difference_class}>
                            { format!(
                                "{}{} ({})",
                                if increase { "+" } else { "-" },
                                format_currency(data.difference_amount.abs()),
                                format_percent(data.difference_percent)
                            ) }
                        </span>
                    </div>
                </div>
            </div>

            <div class="bg-card rounded-lg p-6 border border-border">
                <div class="flex items-center justify-between pb-2">
                    <h3 class="text-sm font-semibold text-foreground">{"Daily Average"}</h3>
                    <div class="bg-red-50 dark:bg-red-900/20 p-2 rounded-lg">{ icon_calendar() }</div>
                </div>
                <div class="text-3xl text-foreground">{ format_currency(data.daily_average) }</div>
                <p class={classes!("text-xs", "mt-1", daily_class)}>
                    { format!("{} vs last month", format_percent(data.daily_average_change)) }
                </p>
            </div>

            <div class="bg-card rounded-lg p-6 border border-border">
                <div class="flex items-center justify-between pb-2">
                    <h3 class="text-sm font-semibold text-foreground">{"Top Category"}</h3>
                    <div class="bg-red-50 dark:bg-red-900/20 p-2 rounded-lg">{ icon_trending_down() }</div>
                </div>
                <div class="text-3xl text-foreground">{ data.top_category.name.clone() }</div>
                <p class="text-xs text-muted-foreground mt-1">
                    { format!(
                        "{} · {} of spending",
                        format_currency(data.top_category.amount),
                        format_percent(data.top_category.percent)
                    ) }
                </p>
            </div>
        </div>
    }
}
