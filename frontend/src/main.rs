mod api;
mod categories;
mod chat;
mod components;
mod config;
mod dashboard;
mod error;
mod format;
mod metrics;
mod models;
mod sample;
mod session;
mod upload;
mod view_state;

use log::warn;
use yew::prelude::*;

use api::ApiClient;
use components::{DashboardPage, LoginScreen};
use session::{apply_theme, LocalStorage, SessionState};

#[function_component(App)]
fn app() -> Html {
    let session = use_state(|| SessionState::load(&LocalStorage));
    let login_error = use_state(|| None::<String>);
    let client = use_state(ApiClient::default);

    {
        use_effect_with_deps(
            move |dark_mode: &bool| {
                apply_theme(*dark_mode);
                || ()
            },
            session.dark_mode,
        );
    }

    let on_login = {
        let session = session.clone();
        let login_error = login_error.clone();
        Callback::from(move |(username, password): (String, String)| {
            match session.login(&LocalStorage, &username, &password) {
                Ok(next) => {
                    login_error.set(None);
                    session.set(next);
                }
                Err(err) => {
                    warn!("sign-in rejected: {}", err);
                    login_error.set(Some(err.to_string()));
                }
            }
        })
    };

    let on_logout = {
        let session = session.clone();
        Callback::from(move |_: ()| session.set(session.logout(&LocalStorage)))
    };

    let on_toggle_dark_mode = {
        let session = session.clone();
        Callback::from(move |_: ()| session.set(session.toggle_dark_mode()))
    };

    if !session.logged_in {
        return html! { <LoginScreen on_submit={on_login} error={(*login_error).clone()} /> };
    }

    html! {
        <ContextProvider<ApiClient> context={(*client).clone()}>
            <DashboardPage
                dark_mode={session.dark_mode}
                on_toggle_dark_mode={on_toggle_dark_mode}
                on_logout={on_logout}
            />
        </ContextProvider<ApiClient>>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::new(config::log_level()));
    yew::Renderer::<App>::new().render();
}
