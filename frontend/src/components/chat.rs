use shared::{ChatMessage, ChatSender};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlTextAreaElement, KeyboardEvent};
use yew::prelude::*;

use crate::api;
use crate::components::utils::{now_time, render_markdown};

const GREETING: &str =
    "Hello! I'm your AI assistant for breast cancer detection. How can I help you today?";
/// Shown when the backend answers 2xx but without a `reply` field.
const SOFT_FAILURE_REPLY: &str = "Sorry, I couldn't process that.";
const TRANSPORT_FAILURE_REPLY: &str =
    "Oops! There was an error contacting the AI. Please try again.";

#[function_component(ChatPanel)]
pub fn chat_panel() -> Html {
    let messages =
        use_state(|| vec![ChatMessage::new(ChatSender::Ai, GREETING, now_time())]);
    let draft = use_state(String::new);
    let busy = use_state(|| false);
    let bottom = use_node_ref();

    {
        let bottom = bottom.clone();
        use_effect_with((*messages).clone(), move |_| {
            if let Some(element) = bottom.cast::<web_sys::Element>() {
                element.scroll_into_view();
            }
        });
    }

    let send = {
        let messages = messages.clone();
        let draft = draft.clone();
        let busy = busy.clone();
        Callback::from(move |_: ()| {
            let text = draft.trim().to_string();
            if text.is_empty() || *busy {
                return;
            }
            let mut thread = (*messages).clone();
            thread.push(ChatMessage::new(ChatSender::User, text.clone(), now_time()));
            messages.set(thread.clone());
            draft.set(String::new());
            busy.set(true);

            let messages = messages.clone();
            let busy = busy.clone();
            spawn_local(async move {
                let reply = match api::chat(&text).await {
                    Ok(reply) => reply
                        .reply
                        .unwrap_or_else(|| SOFT_FAILURE_REPLY.to_string()),
                    Err(err) => {
                        log::error!("chat request failed: {err}");
                        TRANSPORT_FAILURE_REPLY.to_string()
                    }
                };
                thread.push(ChatMessage::new(ChatSender::Ai, reply, now_time()));
                messages.set(thread);
                busy.set(false);
            });
        })
    };

    let on_input = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            draft.set(area.value());
        })
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

    let on_click_send = {
        let send = send.clone();
        Callback::from(move |_: MouseEvent| send.emit(()))
    };

    let send_disabled = draft.trim().is_empty() || *busy;

    html! {
        <div class="chat-panel">
            <div class="chat-header">
                <h3>{"AI Assistant"}</h3>
                <p class="chat-subtitle">{"Medical Analysis Expert"}</p>
            </div>

            <div class="chat-messages">
                { for messages.iter().map(render_message) }
                { if *busy {
                    html! {
                        <div class="chat-bubble ai typing">
                            <span>{"AI is typing..."}</span>
                        </div>
                    }
                } else {
                    html! {}
                }}
                <div ref={bottom}></div>
            </div>

            <div class="chat-input">
                <textarea
                    placeholder="Type your message..."
                    value={(*draft).clone()}
                    oninput={on_input}
                    onkeydown={on_keydown}
                    rows="1"
                />
                <button disabled={send_disabled} onclick={on_click_send}>
                    {"Send"}
                </button>
            </div>
            <p class="chat-disclaimer">
                {"This AI assistant provides general information and should not replace \
                  professional medical advice."}
            </p>
        </div>
    }
}

fn render_message(message: &ChatMessage) -> Html {
    let bubble_class = match message.sender {
        ChatSender::User => "chat-bubble user",
        ChatSender::Ai => "chat-bubble ai",
    };
    html! {
        <div class={bubble_class} key={message.id.to_string()}>
            <div class="chat-text">{ render_markdown(&message.text) }</div>
            <div class="chat-time">{ &message.timestamp }</div>
        </div>
    }
}
