use yew::prelude::*;

use crate::format::{format_currency, format_percent};
use crate::metrics::{needs_wants_series, needs_wants_totals};
use crate::models::MonthlyTrendPoint;

const NEEDS_COLOR: &str = "#dc2626";
const WANTS_COLOR: &str = "#f59e0b";

#[derive(Properties, PartialEq)]
pub struct NeedsWantsChartProps {
    pub trend: Vec<MonthlyTrendPoint>,
}

#[function_component(NeedsWantsChart)]
pub fn needs_wants_chart(props: &NeedsWantsChartProps) -> Html {
    let series = needs_wants_series(&props.trend);
    let (needs_total, wants_total) = needs_wants_totals(&series);
    let grand_total = needs_total + wants_total;
    let share = |part: f64| if grand_total > 0.0 { part / grand_total * 100.0 } else { 0.0 };
    let peak = series
        .iter()
        .map(|point| point.needs + point.wants)
        .fold(0.0_f64, f64::max)
        .max(1.0);

    html! {
        <div class="bg-card rounded-lg p-6 border border-border">
            <h3 class="text-lg font-bold text-foreground mb-1">{"Needs vs Wants"}</h3>
            <p class="text-sm text-muted-foreground mb-4">{"Essential versus discretionary spending by month"}</p>

            <div class="flex items-end gap-3 h-48">
                { for series.iter().map(|point| {
                    let needs_height = point.needs / peak * 100.0;
                    let wants_height = point.wants / peak * 100.0;
                    html! {
                        <div class="flex-1 flex flex-col items-center h-full justify-end" title={format!(
                            "{}: needs {}, wants {}",
                            point.month,
                            format_currency(point.needs),
                            format_currency(point.wants)
                        )}>
                            <div class="w-full rounded-t" style={format!("height: {:.1}%; background: {}", wants_height, WANTS_COLOR)}></div>
                            <div class="w-full" style={format!("height: {:.1}%; background: {}", needs_height, NEEDS_COLOR)}></div>
                            <span class="text-xs text-muted-foreground mt-1">{ point.month.clone() }</span>
                        </div>
                    }
                }) }
            </div>

            <div class="grid grid-cols-2 gap-4 mt-6">
                <div class="p-3 rounded-lg bg-red-50 dark:bg-red-900/20">
                    <p class="text-xs text-muted-foreground">{"Needs"}</p>
                    <p class="text-xl text-foreground">{ format_currency(needs_total) }</p>
                    <p class="text-xs text-muted-foreground">{ format!("{} of total", format_percent(share(needs_total))) }</p>
                </div>
                <div class="p-3 rounded-lg bg-amber-50 dark:bg-amber-900/20">
                    <p class="text-xs text-muted-foreground">{"Wants"}</p>
                    <p class="text-xl text-foreground">{ format_currency(wants_total) }</p>
                    <p class="text-xs text-muted-foreground">{ format!("{} of total", format_percent(share(wants_total))) }</p>
                </div>
            </div>
        </div>
    }
}
