use web_sys::Event;
use yew::prelude::*;

use crate::categories::TrendCategory;
use crate::format::format_currency;
use crate::models::MonthlyTrendPoint;
use crate::view_state::Overlay;

const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 240.0;
const PAD: f64 = 32.0;

#[derive(Properties, PartialEq)]
pub struct SpendingTrendChartProps {
    pub trend: Vec<MonthlyTrendPoint>,
    #[prop_or_default]
    pub is_loading: bool,
}

/// Stacked category columns with an optional total line.
#[function_component(SpendingTrendChart)]
pub fn spending_trend_chart(props: &SpendingTrendChartProps) -> Html {
    let overlay = use_state(Overlay::default);

    let on_overlay_change = {
        let overlay = overlay.clone();
        Callback::from(move |e: Event| {
            let input: web_sys::HtmlSelectElement = e.target_unchecked_into();
            overlay.set(Overlay::from_key(&input.value()));
        })
    };

    let stacked = overlay.stacked_categories();
    let peak = props
        .trend
        .iter()
        .map(|point| {
            let stack: f64 = stacked.iter().map(|c| point.amount(c.key())).sum();
            stack.max(point.total)
        })
        .fold(0.0_f64, f64::max)
        .max(1.0);

    let count = props.trend.len().max(1) as f64;
    let slot = (WIDTH - 2.0 * PAD) / count;
    let bar_width = slot * 0.6;
    let y_of = |value: f64| HEIGHT - PAD - value / peak * (HEIGHT - 2.0 * PAD);
    let x_center = |index: usize| PAD + slot * (index as f64 + 0.5);

    let total_points = props
        .trend
        .iter()
        .enumerate()
        .map(|(i, point)| format!("{:.1},{:.1}", x_center(i), y_of(point.total)))
        .collect::<Vec<_>>()
        .join(" ");

    let columns = props.trend.iter().enumerate().map(|(i, point)| {
        let mut base = 0.0;
        let segments = stacked
            .iter()
            .map(|category| {
                let value = point.amount(category.key());
                let top = y_of(base + value);
                let height = y_of(base) - top;
                base += value;
                html! {
                    <rect
                        x={format!("{:.1}", x_center(i) - bar_width / 2.0)}
                        y={format!("{:.1}", top)}
                        width={format!("{:.1}", bar_width)}
                        height={format!("{:.1}", height.max(0.0))}
                        fill={category.color()}
                    >
                        <title>{ format!("{} {}: {}", point.month, category.label(), format_currency(value)) }</title>
                    </rect>
                }
            })
            .collect::<Html>();
        html! {
            <g>
                { segments }
                <text x={format!("{:.1}", x_center(i))} y={format!("{:.1}", HEIGHT - PAD / 3.0)} text-anchor="middle" class="fill-current text-xs text-muted-foreground">
                    { point.month.clone() }
                </text>
            </g>
        }
    });

    html! {
        <div class="bg-card rounded-lg p-6 border border-border">
            <div class="flex items-center justify-between mb-4">
                <div>
                    <h3 class="text-lg font-bold text-foreground">{"Spending Trend"}</h3>
                    if props.is_loading {
                        <p class="text-xs text-muted-foreground">{"Syncing latest data…"}</p>
                    } else {
                        <p class="text-xs text-muted-foreground">{"Monthly spending by category"}</p>
                    }
                </div>
                <select
                    onchange={on_overlay_change}
                    class="px-3 py-1 bg-input border border-input rounded-lg text-sm text-foreground focus:outline-none focus:ring-2 focus:ring-primary"
                >
                    { for Overlay::options().into_iter().map(|option| html! {
                        <option value={option.key()} selected={option == *overlay}>{ option.label() }</option>
                    }) }
                </select>
            </div>

            <svg viewBox={format!("0 0 {} {}", WIDTH, HEIGHT)} class="w-full h-64">
                <line
                    x1={PAD.to_string()} y1={(HEIGHT - PAD).to_string()}
                    x2={(WIDTH - PAD).to_string()} y2={(HEIGHT - PAD).to_string()}
                    stroke="currentColor" stroke-opacity="0.2"
                />
                { for columns }
                if overlay.shows_total() {
                    <polyline points={total_points} fill="none" stroke="#111827" stroke-width="2" class="dark:stroke-white" />
                }
            </svg>

            <div class="flex flex-wrap gap-3 mt-3">
                { for stacked.iter().map(|category| legend_item(*category)) }
                if overlay.shows_total() {
                    <span class="flex items-center gap-1 text-xs text-muted-foreground">
                        <span class="inline-block w-3 h-0.5 bg-foreground"></span>
                        {"Total"}
                    </span>
                }
            </div>
        </div>
    }
}

fn legend_item(category: TrendCategory) -> Html {
    html! {
        <span class="flex items-center gap-1 text-xs text-muted-foreground">
            <span class="inline-block w-3 h-3 rounded-sm" style={format!("background: {}", category.color())}></span>
            { category.label() }
        </span>
    }
}
