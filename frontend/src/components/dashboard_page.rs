use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::category_breakdown::CategoryBreakdown;
use super::category_pie::CategoryPieChart;
use super::chat_bot::ChatBot;
use super::icons::{icon_alert, icon_bell, icon_log_out, icon_moon, icon_sun};
use super::income_vs_expenses::IncomeVsExpensesChart;
use super::monthly_overview::MonthlyOverview;
use super::needs_wants::NeedsWantsChart;
use super::notice::{Notice, NoticeBanner};
use super::spending_chart::SpendingTrendChart;
use super::transaction_list::TransactionList;
use super::upload_button::UploadButton;
use crate::api::ApiClient;
use crate::dashboard::{Dashboard, LoadEvent};
use crate::format::format_currency;
use crate::models::DailyAnalyticsEntry;

impl Reducible for Dashboard {
    type Action = LoadEvent;

    fn reduce(self: Rc<Self>, action: LoadEvent) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

#[derive(Clone, Copy, PartialEq)]
enum Tab {
    Transactions,
    Breakdown,
}

#[derive(Properties, PartialEq)]
pub struct DashboardPageProps {
    pub dark_mode: bool,
    pub on_toggle_dark_mode: Callback<()>,
    pub on_logout: Callback<()>,
}

#[function_component(DashboardPage)]
pub fn dashboard_page(props: &DashboardPageProps) -> Html {
    let client = use_context::<ApiClient>().unwrap_or_default();
    let dashboard = use_reducer(Dashboard::default);
    let ticket = dashboard.load_ticket();
    let notice = use_state(|| None::<Notice>);
    let tab = use_state(|| Tab::Transactions);

    {
        let dashboard = dashboard.clone();
        use_effect_with_deps(
            move |ticket: &u64| {
                if *ticket > 0 {
                    spawn_local(async move {
                        let result = client.load_dashboard().await;
                        dashboard.dispatch(LoadEvent::Finished(result));
                    });
                }
                || ()
            },
            ticket,
        );
    }

    let load = {
        let dashboard = dashboard.clone();
        Callback::from(move |_: ()| dashboard.dispatch(LoadEvent::Requested))
    };

    {
        let load = load.clone();
        use_effect_with_deps(
            move |_| {
                load.emit(());
                || ()
            },
            (),
        );
    }

    let on_retry = {
        let load = load.clone();
        Callback::from(move |_: MouseEvent| load.emit(()))
    };
    let on_notice = {
        let notice = notice.clone();
        Callback::from(move |next: Notice| notice.set(Some(next)))
    };
    let on_dismiss = {
        let notice = notice.clone();
        Callback::from(move |_: ()| notice.set(None))
    };
    let on_toggle_dark_mode = {
        let toggle = props.on_toggle_dark_mode.clone();
        Callback::from(move |_: MouseEvent| toggle.emit(()))
    };
    let on_logout = {
        let logout = props.on_logout.clone();
        Callback::from(move |_: MouseEvent| logout.emit(()))
    };
    let select_tab = |next: Tab| {
        let tab = tab.clone();
        Callback::from(move |_: MouseEvent| tab.set(next))
    };
    let tab_class = |this: Tab| {
        if *tab == this {
            "px-4 py-2 text-sm font-semibold border-b-2 border-red-600 text-foreground"
        } else {
            "px-4 py-2 text-sm text-muted-foreground hover:text-foreground"
        }
    };

    let is_loading = dashboard.is_loading();

    html! {
        <div class="min-h-screen bg-background">
            <header class="bg-card border-b border-border">
                <div class="max-w-7xl mx-auto px-6 py-4 flex items-center justify-between">
                    <div>
                        <h1 class="text-xl font-bold text-foreground">{"Expense Tracker"}</h1>
                        <p class="text-xs text-muted-foreground">{"Monthly spending at a glance"}</p>
                    </div>
                    <div class="flex items-center gap-3">
                        <UploadButton on_notice={on_notice} on_uploaded={load.clone()} />
                        <button onclick={on_toggle_dark_mode} class="p-2 rounded-lg border border-border" title="Toggle theme">
                            { if props.dark_mode { icon_sun() } else { icon_moon() } }
                        </button>
                        <span class="p-2">{ icon_bell() }</span>
                        <button
                            onclick={on_logout}
                            class="flex items-center px-3 py-2 text-sm rounded-lg border border-border text-foreground hover:bg-muted"
                        >
                            { icon_log_out() }
                            {"Logout"}
                        </button>
                    </div>
                </div>
            </header>

            <main class="max-w-7xl mx-auto px-6 py-6 space-y-6">
                if let Some(current) = &*notice {
                    <NoticeBanner notice={current.clone()} on_dismiss={on_dismiss} />
                }

                if let Some(message) = dashboard.error() {
                    <div class="flex items-center justify-between gap-3 px-4 py-3 rounded-lg border border-red-200 bg-red-50 text-red-700 dark:bg-red-900/20 dark:border-red-800 dark:text-red-300">
                        <span class="flex items-center gap-2 text-sm">
                            { icon_alert() }
                            { format!("Failed to load dashboard data: {}", message) }
                        </span>
                        <button
                            onclick={on_retry}
                            disabled={is_loading}
                            class="px-3 py-1 text-sm font-semibold rounded-lg bg-red-600 text-white disabled:opacity-40"
                        >
                            {"Retry"}
                        </button>
                    </div>
                }

                if dashboard.using_sample_data() {
                    <div class="px-4 py-2 rounded-lg bg-amber-50 text-amber-800 text-sm dark:bg-amber-900/20 dark:text-amber-300">
                        {"You are currently viewing sample data. Upload a CSV or wait for the live data to load."}
                    </div>
                }

                <MonthlyOverview summary={dashboard.summary()} is_loading={is_loading} />

                { daily_strip(&dashboard.daily_snapshot()) }

                <div class="grid gap-6 lg:grid-cols-2">
                    <SpendingTrendChart trend={dashboard.trend()} is_loading={is_loading} />
                    <CategoryPieChart breakdown={dashboard.category_breakdown()} is_loading={is_loading} />
                </div>

                <div class="grid gap-6 lg:grid-cols-2">
                    <IncomeVsExpensesChart points={dashboard.income_vs_expenses()} is_loading={is_loading} />
                    if let Some(trend) = dashboard.live_trend() {
                        <NeedsWantsChart trend={trend} />
                    }
                </div>

                <div class="grid gap-6 lg:grid-cols-3">
                    <div class="lg:col-span-2">
                        <div class="flex gap-2 border-b border-border mb-4">
                            <button class={tab_class(Tab::Transactions)} onclick={select_tab(Tab::Transactions)}>
                                {"Transactions"}
                            </button>
                            <button class={tab_class(Tab::Breakdown)} onclick={select_tab(Tab::Breakdown)}>
                                {"Category Breakdown"}
                            </button>
                        </div>
                        if *tab == Tab::Transactions {
                            <TransactionList
                                transactions={dashboard.transactions()}
                                is_loading={is_loading}
                                is_sample={!dashboard.has_live_transactions()}
                            />
                        } else {
                            <CategoryBreakdown
                                breakdown={dashboard.category_breakdown()}
                                total_expenses={dashboard.total_expenses()}
                            />
                        }
                    </div>
                    <ChatBot />
                </div>
            </main>
        </div>
    }
}

fn daily_strip(days: &[DailyAnalyticsEntry]) -> Html {
    if days.is_empty() {
        return html! {};
    }
    html! {
        <div class="bg-card rounded-lg p-4 border border-border">
            <h3 class="text-sm font-semibold text-foreground mb-3">{"Last 7 Days"}</h3>
            <div class="grid grid-cols-7 gap-2">
                { for days.iter().map(|day| html! {
                    <div class="text-center">
                        <p class="text-xs text-muted-foreground">{ day.date.clone() }</p>
                        <p class="text-sm text-foreground">{ format_currency(day.total) }</p>
                        if let Some(count) = day.transactions {
                            <p class="text-xs text-muted-foreground">{ format!("{} txns", count) }</p>
                        }
                    </div>
                }) }
            </div>
        </div>
    }
}
