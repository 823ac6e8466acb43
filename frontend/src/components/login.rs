use web_sys::InputEvent;
use yew::prelude::*;

use super::icons::icon_lock;

#[derive(Properties, PartialEq)]
pub struct LoginScreenProps {
    /// Receives `(username, password)`; the parent decides whether to accept.
    pub on_submit: Callback<(String, String)>,
    #[prop_or_default]
    pub error: Option<String>,
}

#[function_component(LoginScreen)]
pub fn login_screen(props: &LoginScreenProps) -> Html {
    let username = use_state(|| "".to_string());
    let password = use_state(|| "".to_string());

    let on_submit = {
        let username = username.clone();
        let password = password.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(((*username).clone(), (*password).clone()));
        })
    };

    html! {
        <div class="min-h-screen flex items-center justify-center p-4 bg-background">
            <div class="w-full max-w-md">
                <div class="text-center mb-8">
                    <div class="inline-flex items-center justify-center w-16 h-16 bg-red-600 rounded-full mb-4">
                        { icon_lock() }
                    </div>
                    <h1 class="text-foreground mb-2">{"Welcome Back"}</h1>
                    <p class="text-muted-foreground">{"Sign in to access your account"}</p>
                </div>

                <div class="bg-card border border-border rounded-2xl shadow-lg p-8">
                    <form class="space-y-4" onsubmit={on_submit}>
                        <div class="space-y-1">
                            <label class="text-sm font-medium text-foreground">{"Username"}</label>
                            <input
                                id="username"
                                type="text"
                                placeholder="Enter your username"
                                class="w-full px-4 py-2 bg-input border border-input rounded-lg text-foreground focus:outline-none focus:ring-2 focus:ring-primary"
                                value={(*username).clone()}
                                oninput={{
                                    let username = username.clone();
                                    Callback::from(move |e: InputEvent| {
                                        let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                        username.set(input.value());
                                    })
                                }}
                            />
                        </div>
                        <div class="space-y-1">
                            <label class="text-sm font-medium text-foreground">{"Password"}</label>
                            <input
                                id="password"
                                type="password"
                                placeholder="Enter your password"
                                class="w-full px-4 py-2 bg-input border border-input rounded-lg text-foreground focus:outline-none focus:ring-2 focus:ring-primary"
                                value={(*password).clone()}
                                oninput={{
                                    let password = password.clone();
                                    Callback::from(move |e: InputEvent| {
                                        let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                        password.set(input.value());
                                    })
                                }}
                            />
                        </div>

                        if let Some(msg) = &props.error {
                            <div class="text-sm text-red-500">{ msg.clone() }</div>
                        }

                        <button
                            type="submit"
                            class="w-full bg-red-600 hover:bg-red-700 text-white py-2 rounded-lg font-semibold transition-colors"
                        >
                            {"Sign In"}
                        </button>
                    </form>
                </div>

                <p class="text-xs text-muted-foreground text-center mt-8">
                    {"Demo: Use any username and password to sign in"}
                </p>
            </div>
        </div>
    }
}
