use yew::prelude::*;

use super::icons::icon_alert;

/// Transient message shown at the top of the dashboard.
#[derive(Clone, Debug, PartialEq)]
pub enum Notice {
    Success(String),
    Error(String),
}

#[derive(Properties, PartialEq)]
pub struct NoticeBannerProps {
    pub notice: Notice,
    pub on_dismiss: Callback<()>,
}

#[function_component(NoticeBanner)]
pub fn notice_banner(props: &NoticeBannerProps) -> Html {
    let (class, message) = match &props.notice {
        Notice::Success(message) => (
            "bg-green-50 border-green-200 text-green-700 dark:bg-green-900/20 dark:border-green-800 dark:text-green-300",
            message,
        ),
        Notice::Error(message) => (
            "bg-red-50 border-red-200 text-red-700 dark:bg-red-900/20 dark:border-red-800 dark:text-red-300",
            message,
        ),
    };
    let on_dismiss = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(()))
    };

    html! {
        <div class={classes!("flex", "items-center", "justify-between", "gap-3", "px-4", "py-3", "rounded-lg", "border", "text-sm", class)}>
            <span class="flex items-center gap-2">
                { icon_alert() }
                { message.clone() }
            </span>
            <button onclick={on_dismiss} class="text-xs font-semibold hover:underline">{"Dismiss"}</button>
        </div>
    }
}
