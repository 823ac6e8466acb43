use yew::prelude::*;

use super::icons::{category_icon, icon_chevron_left, icon_chevron_right};
use crate::categories::style_for_transaction;
use crate::format::format_currency;
use crate::models::Transaction;
use crate::view_state::Pagination;

#[derive(Properties, PartialEq)]
pub struct TransactionListProps {
    pub transactions: Vec<Transaction>,
    #[prop_or_default]
    pub is_loading: bool,
    /// Marks the rows as placeholder data rather than imported transactions.
    #[prop_or_default]
    pub is_sample: bool,
}

#[function_component(TransactionList)]
pub fn transaction_list(props: &TransactionListProps) -> Html {
    let pages = use_state(|| Pagination::new(props.transactions.len()));

    {
        let pages = pages.clone();
        use_effect_with_deps(
            move |transactions: &Vec<Transaction>| {
                pages.set(pages.reset(transactions.len()));
                || ()
            },
            props.transactions.clone(),
        );
    }

    let on_prev = {
        let pages = pages.clone();
        Callback::from(move |_: MouseEvent| pages.set(pages.prev()))
    };
    let on_next = {
        let pages = pages.clone();
        Callback::from(move |_: MouseEvent| pages.set(pages.next()))
    };

    let visible = pages.slice(&props.transactions);

    html! {
        <div class="bg-card rounded-lg border border-border">
            <div class="flex items-center justify-between p-6 pb-3">
                <div class="flex items-center gap-2">
                    <h3 class="text-lg font-bold text-foreground">{"Recent Transactions"}</h3>
                    if props.is_sample {
                        <span class="px-2 py-0.5 text-xs rounded-full bg-muted text-muted-foreground">{"Sample"}</span>
                    }
                </div>
                if props.is_loading {
                    <span class="text-xs text-muted-foreground">{"Refreshing transactions…"}</span>
                }
            </div>

            if pages.is_empty() {
                <p class="px-6 py-8 text-sm text-center text-muted-foreground">{"No transactions yet. Upload a CSV to get started."}</p>
            } else {
                <ul class="divide-y divide-border">
                    { for visible.iter().map(transaction_row) }
                </ul>
            }

            <div class="flex items-center justify-between p-4 border-t border-border">
                <span class="text-sm text-muted-foreground">{ pages.caption() }</span>
                <div class="flex items-center gap-2">
                    <button
                        onclick={on_prev}
                        disabled={!pages.has_prev()}
                        class="p-2 rounded-lg border border-border text-foreground disabled:opacity-40"
                    >
                        { icon_chevron_left() }
                    </button>
                    <span class="text-sm text-foreground">
                        { format!("Page {} of {}", pages.page(), pages.page_count()) }
                    </span>
                    <button
                        onclick={on_next}
                        disabled={!pages.has_next()}
                        class="p-2 rounded-lg border border-border text-foreground disabled:opacity-40"
                    >
                        { icon_chevron_right() }
                    </button>
                </div>
            </div>
        </div>
    }
}

fn transaction_row(tx: &Transaction) -> Html {
    let style = style_for_transaction(tx.amount, tx.category_label());
    let amount_class = if tx.is_payment() {
        "text-green-600 dark:text-green-400"
    } else {
        "text-foreground"
    };

    html! {
        <li class="flex items-center justify-between px-6 py-3">
            <div class="flex items-center gap-3">
                <div class={classes!("p-2", "rounded-lg", style.color)}>
                    { category_icon(style.icon) }
                </div>
                <div>
                    <p class="text-sm font-medium text-foreground">{ tx.display_name().to_string() }</p>
                    <p class="text-xs text-muted-foreground">{ row_caption(tx) }</p>
                </div>
            </div>
            <span class={classes!("text-sm", "font-semibold", amount_class)}>
                { format_currency(tx.amount) }
            </span>
        </li>
    }
}

/// The stated category, not the badge bucket, followed by the date.
fn row_caption(tx: &Transaction) -> String {
    format!("{} · {}", tx.category_label(), tx.date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> Transaction {
        serde_json::from_str(raw).unwrap()
    }

    #[test]
    fn caption_shows_the_stated_category() {
        let refund = parse(r#"{"id": 1, "category": "Housing", "amount": 250, "date": "2025-10-02"}"#);
        assert_eq!(style_for_transaction(refund.amount, refund.category_label()).label, "Payment");
        assert_eq!(row_caption(&refund), "Housing · 2025-10-02");

        let concert = parse(r#"{"id": 2, "category": "Recreation and Entertainment", "amount": -80, "date": "2025-10-03"}"#);
        assert_eq!(row_caption(&concert), "Recreation and Entertainment · 2025-10-03");

        let odd = parse(r#"{"id": 3, "category": "Crypto Mining", "amount": -5, "date": "2025-10-04"}"#);
        assert_eq!(row_caption(&odd), "Crypto Mining · 2025-10-04");
    }

    #[test]
    fn missing_category_reads_miscellaneous() {
        let bare = parse(r#"{"id": 4, "amount": -5, "date": "2025-10-05"}"#);
        assert_eq!(row_caption(&bare), "Miscellaneous · 2025-10-05");
    }
}
