use std::f64::consts::PI;

use yew::prelude::*;

use crate::format::{format_currency, format_percent};
use crate::metrics::{pie_slices, slice_share, total_weight};
use crate::models::CategoryBreakdownEntry;
use crate::view_state::Highlight;

const CENTER: f64 = 100.0;
const OUTER: f64 = 90.0;
const INNER: f64 = 55.0;

#[derive(Properties, PartialEq)]
pub struct CategoryPieChartProps {
    pub breakdown: Vec<CategoryBreakdownEntry>,
    #[prop_or_default]
    pub is_loading: bool,
}

fn caption(is_loading: bool, breakdown: &[CategoryBreakdownEntry]) -> &'static str {
    if is_loading && !breakdown.is_empty() {
        "Live data from backend"
    } else {
        "October 2025"
    }
}

fn point_at(radius: f64, angle: f64) -> (f64, f64) {
    (CENTER + radius * angle.cos(), CENTER + radius * angle.sin())
}

/// SVG path for a donut segment between two angles (radians, clockwise from 12 o'clock).
fn arc_path(start: f64, end: f64) -> String {
    // A full circle collapses to a zero-length arc; stop just short of it.
    let end = if end - start >= 2.0 * PI { end - 1e-4 } else { end };
    let (start, end) = (start - PI / 2.0, end - PI / 2.0);
    let large = if end - start > PI { 1 } else { 0 };
    let (ox1, oy1) = point_at(OUTER, start);
    let (ox2, oy2) = point_at(OUTER, end);
    let (ix1, iy1) = point_at(INNER, end);
    let (ix2, iy2) = point_at(INNER, start);
    format!(
        "M{:.2} {:.2} A{} {} 0 {} 1 {:.2} {:.2} L{:.2} {:.2} A{} {} 0 {} 0 {:.2} {:.2} Z",
        ox1, oy1, OUTER, OUTER, large, ox2, oy2, ix1, iy1, INNER, INNER, large, ix2, iy2
    )
}

#[function_component(CategoryPieChart)]
pub fn category_pie_chart(props: &CategoryPieChartProps) -> Html {
    let highlight = use_state(Highlight::default);
    let slices = pie_slices(&props.breakdown);
    let total = total_weight(&slices);

    let focus = |index: usize| {
        let highlight = highlight.clone();
        Callback::from(move |_: MouseEvent| highlight.set(Highlight::focus(index)))
    };
    let on_leave = {
        let highlight = highlight.clone();
        Callback::from(move |_: MouseEvent| highlight.set(Highlight::clear()))
    };

    let mut angle = 0.0;
    let segments = slices
        .iter()
        .enumerate()
        .map(|(i, slice)| {
            let sweep = slice.weight / total * 2.0 * PI;
            let path = arc_path(angle, angle + sweep);
            angle += sweep;
            html! {
                <path
                    d={path}
                    fill={slice.color.clone()}
                    fill-opacity={highlight.opacity(i).to_string()}
                    onmouseenter={focus(i)}
                    onmouseleave={on_leave.clone()}
                    class="cursor-pointer transition-opacity"
                />
            }
        })
        .collect::<Html>();

    let center_label = match highlight.active().and_then(|i| slices.get(i)) {
        Some(slice) => html! {
            <>
                <text x="100" y="96" text-anchor="middle" class="fill-current text-sm">{ slice.name.clone() }</text>
                <text x="100" y="114" text-anchor="middle" class="fill-current text-xs">
                    { format!("{} · {}", format_currency(slice.amount), format_percent(slice_share(slice, total))) }
                </text>
            </>
        },
        None => html! {
            <text x="100" y="104" text-anchor="middle" class="fill-current text-sm">{"Spending"}</text>
        },
    };

    html! {
        <div class="bg-card rounded-lg p-6 border border-border">
            <div class="mb-4">
                <h3 class="text-lg font-bold text-foreground">{"Spending by Category"}</h3>
                <p class="text-xs text-muted-foreground">{ caption(props.is_loading, &props.breakdown) }</p>
            </div>
            <div class="flex flex-col md:flex-row items-center gap-6">
                <svg viewBox="0 0 200 200" class="w-56 h-56 text-foreground">
                    { segments }
                    { center_label }
                </svg>
                <ul class="space-y-2 flex-1">
                    { for slices.iter().enumerate().map(|(i, slice)| html! {
                        <li
                            class={classes!("flex", "items-center", "justify-between", "text-sm", "cursor-pointer", highlight.is_active(i).then_some("font-semibold"))}
                            style={format!("opacity: {}", highlight.opacity(i))}
                            onmouseenter={focus(i)}
                            onmouseleave={on_leave.clone()}
                        >
                            <span class="flex items-center gap-2 text-foreground">
                                <span class="inline-block w-3 h-3 rounded-full" style={format!("background: {}", slice.color)}></span>
                                { slice.name.clone() }
                            </span>
                            <span class="text-muted-foreground">
                                if slice.is_empty {
                                    {"No data"}
                                } else {
                                    { format_currency(slice.amount) }
                                }
                            </span>
                        </li>
                    }) }
                </ul>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arc_path_starts_at_twelve_oclock() {
        let path = arc_path(0.0, PI / 2.0);
        assert!(path.starts_with("M100.00 10.00"));
    }

    #[test]
    fn sweeps_past_half_use_the_large_arc_flag() {
        assert!(arc_path(0.0, PI * 1.5).contains(" 0 1 1 "));
        assert!(arc_path(0.0, PI / 2.0).contains(" 0 0 1 "));
    }

    #[test]
    fn caption_mentions_the_backend_only_while_refreshing_real_rows() {
        let rows = crate::sample::category_breakdown();
        assert_eq!(caption(true, &rows), "Live data from backend");
        assert_eq!(caption(false, &rows), "October 2025");
        assert_eq!(caption(true, &[]), "October 2025");
    }
}
