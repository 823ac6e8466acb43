use yew::prelude::*;

use crate::format::{format_currency, format_percent};
use crate::metrics::income_stats;
use crate::models::IncomeVsExpensesPoint;

#[derive(Properties, PartialEq)]
pub struct IncomeVsExpensesChartProps {
    pub points: Vec<IncomeVsExpensesPoint>,
    #[prop_or_default]
    pub is_loading: bool,
}

fn caption(is_loading: bool, points: &[IncomeVsExpensesPoint]) -> &'static str {
    if is_loading && !points.is_empty() {
        "Updating with backend…"
    } else {
        "Last 7 months"
    }
}

#[function_component(IncomeVsExpensesChart)]
pub fn income_vs_expenses_chart(props: &IncomeVsExpensesChartProps) -> Html {
    let stats = income_stats(&props.points);
    let peak = props
        .points
        .iter()
        .map(|point| point.income.max(point.expenses))
        .fold(0.0_f64, f64::max)
        .max(1.0);
    let net_class = if stats.average_net >= 0.0 {
        "text-green-600 dark:text-green-400"
    } else {
        "text-red-600 dark:text-red-400"
    };

    html! {
        <div class="bg-card rounded-lg p-6 border border-border">
            <div class="mb-4">
                <h3 class="text-lg font-bold text-foreground">{"Income vs Expenses"}</h3>
                <p class="text-xs text-muted-foreground">{ caption(props.is_loading, &props.points) }</p>
            </div>

            <div class="flex items-end gap-4 h-48">
                { for props.points.iter().map(|point| html! {
                    <div class="flex-1 flex flex-col items-center h-full justify-end">
                        <div class="flex items-end gap-1 w-full h-full">
                            <div
                                class="flex-1 bg-green-500 rounded-t"
                                style={format!("height: {:.1}%", point.income / peak * 100.0)}
                                title={format!("Income {}", format_currency(point.income))}
                            ></div>
                            <div
                                class="flex-1 bg-red-500 rounded-t"
                                style={format!("height: {:.1}%", point.expenses / peak * 100.0)}
                                title={format!("Expenses {}", format_currency(point.expenses))}
                            ></div>
                        </div>
                        <span class="text-xs text-muted-foreground mt-1">{ point.month.clone() }</span>
                    </div>
                }) }
            </div>

            <div class="grid grid-cols-2 gap-4 mt-6">
                <div>
                    <p class="text-xs text-muted-foreground">{"Average Monthly Net"}</p>
                    <p class={classes!("text-xl", net_class)}>{ format_currency(stats.average_net) }</p>
                </div>
                <div>
                    <p class="text-xs text-muted-foreground">{"Savings Rate"}</p>
                    <p class="text-xl text-foreground">{ format_percent(stats.savings_rate) }</p>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caption_switches_while_a_load_is_running() {
        let points = crate::sample::income_vs_expenses();
        assert_eq!(caption(false, &points), "Last 7 months");
        assert_eq!(caption(true, &points), "Updating with backend…");
        assert_eq!(caption(true, &[]), "Last 7 months");
    }
}
