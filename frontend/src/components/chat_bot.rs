use wasm_bindgen_futures::spawn_local;
use web_sys::InputEvent;
use yew::prelude::*;

use super::icons::{icon_bot, icon_send, icon_user};
use crate::api::ApiClient;
use crate::chat::Conversation;
use crate::models::ChatRole;

#[function_component(ChatBot)]
pub fn chat_bot() -> Html {
    let client = use_context::<ApiClient>().unwrap_or_default();
    let conversation = use_state(Conversation::default);
    let input = use_state(|| "".to_string());

    let send = {
        let conversation = conversation.clone();
        let input = input.clone();
        Callback::from(move |_: ()| {
            let mut next = (*conversation).clone();
            let request = match next.send(&input) {
                Some(request) => request,
                None => return,
            };
            input.set(String::new());
            conversation.set(next.clone());

            let conversation = conversation.clone();
            let client = client.clone();
            spawn_local(async move {
                let reply = client.send_chat(&request).await;
                next.receive(reply);
                conversation.set(next);
            });
        })
    };

    let on_click = {
        let send = send.clone();
        Callback::from(move |_: MouseEvent| send.emit(()))
    };
    let on_keydown = {
        let send = send.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" && !e.shift_key() {
                e.prevent_default();
                send.emit(());
            }
        })
    };
    let on_input = {
        let input = input.clone();
        Callback::from(move |e: InputEvent| {
            let field: web_sys::HtmlInputElement = e.target_unchecked_into();
            input.set(field.value());
        })
    };

    html! {
        <div class="bg-card rounded-lg border border-border flex flex-col h-[480px]">
            <div class="flex items-center gap-2 p-4 border-b border-border">
                <div class="p-2 bg-red-600 text-white rounded-full">{ icon_bot() }</div>
                <div>
                    <h3 class="text-sm font-bold text-foreground">{"Finance Assistant"}</h3>
                    <p class="text-xs text-muted-foreground">{"Ask about your spending"}</p>
                </div>
            </div>

            <div class="flex-1 overflow-y-auto p-4 space-y-3">
                if conversation.messages.is_empty() {
                    <p class="text-sm text-muted-foreground text-center mt-8">
                        {"Hi! Ask me anything about your budget or recent transactions."}
                    </p>
                }
                { for conversation.messages.iter().map(|message| {
                    let from_user = message.role == ChatRole::User;
                    html! {
                        <div class={classes!("flex", "gap-2", from_user.then_some("flex-row-reverse"))}>
                            <div class={classes!("p-1.5", "rounded-full", "h-fit", if from_user { "bg-red-600" } else { "bg-gray-500" })}>
                                if from_user { { icon_user() } } else { { icon_bot() } }
                            </div>
                            <div class={classes!(
                                "max-w-[75%]", "px-3", "py-2", "rounded-lg", "text-sm", "whitespace-pre-wrap",
                                if from_user { "bg-red-600 text-white" } else { "bg-muted text-foreground" }
                            )}>
                                { message.content.clone() }
                            </div>
                        </div>
                    }
                }) }
                if conversation.pending {
                    <div class="flex gap-1 px-3 py-2">
                        <span class="w-2 h-2 bg-muted-foreground rounded-full animate-bounce"></span>
                        <span class="w-2 h-2 bg-muted-foreground rounded-full animate-bounce"></span>
                        <span class="w-2 h-2 bg-muted-foreground rounded-full animate-bounce"></span>
                    </div>
                }
            </div>

            <div class="flex items-center gap-2 p-4 border-t border-border">
                <input
                    type="text"
                    placeholder="Type a message..."
                    class="flex-1 px-4 py-2 bg-input border border-input rounded-lg text-foreground focus:outline-none focus:ring-2 focus:ring-primary"
                    value={(*input).clone()}
                    oninput={on_input}
                    onkeydown={on_keydown}
                />
                <button
                    onclick={on_click}
                    disabled={conversation.pending || input.trim().is_empty()}
                    class="p-2 bg-red-600 hover:bg-red-700 text-white rounded-lg disabled:opacity-40"
                >
                    { icon_send() }
                </button>
            </div>
        </div>
    }
}
