//! Floating SphereBot chat widget, bottom-right.
//!
//! SYSTEM CONTEXT
//! ==============
//! The launcher toggles a panel over a [`ChatState`]. The first open schedules
//! the scripted greeting; questions (typed or suggested) are appended before
//! their request goes out, and each reply or error text is appended when that
//! request resolves. Assistant text is rendered as Markdown with raw HTML
//! stripped.

use leptos::prelude::*;
use pulldown_cmark::{Event, Options, Parser, html};

use super::assist::{Assist, spawn_assist};
use crate::config::SiteConfig;
use crate::net::assist::Persona;
use crate::state::chat::{ChatState, SUGGESTED_QUESTIONS, Sender};
use crate::util::browser;

#[cfg(test)]
#[path = "chat_widget_test.rs"]
mod chat_widget_test;

#[component]
pub fn ChatWidget() -> impl IntoView {
    let assist = StoredValue::new(expect_context::<Assist>());
    let timing = expect_context::<SiteConfig>().timing;
    let chat = RwSignal::new(ChatState::default());
    let input = RwSignal::new(String::new());
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        chat.track();

        #[cfg(feature = "csr")]
        {
            if let Some(el) = messages_ref.get() {
                el.set_scroll_top(el.scroll_height());
            }
        }
    });

    let on_toggle = move |_| {
        if chat.try_update(ChatState::toggle).unwrap_or(false) {
            log::debug!("chat: first open, greeting scheduled");
            browser::after(timing.greeting, move || {
                chat.update(|c| {
                    c.greet();
                });
            });
        }
    };

    let ask = move |text: String| {
        let Some(question) = chat.try_update(|c| c.ask(&text)).flatten() else {
            return;
        };
        spawn_assist(assist.get_value(), Persona::Chat, question, move |reply| {
            chat.update(|c| c.receive(reply.into_text()));
        });
    };

    let do_send = move || {
        if !chat.with_untracked(ChatState::can_ask) {
            return;
        }
        ask(input.get_untracked());
        input.set(String::new());
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        do_send();
    };

    let is_open = move || chat.with(ChatState::is_open);
    let busy = move || !chat.with(ChatState::can_ask);
    let can_send = move || !busy() && !input.with(|text| text.trim().is_empty());

    view! {
        <button
            class="floating floating--right chat-launcher"
            class:chat-launcher--open=is_open
            title="Need Help? Talk to SphereBot"
            aria-label="Need Help? Talk to SphereBot"
            on:click=on_toggle
        >
            "🤖"
        </button>

        <Show when=is_open>
            <div class="chat-panel" role="dialog" aria-label="SphereBot chat">
                <header class="chat-panel__header">
                    <span class="chat-panel__title">"SphereBot"</span>
                    <button
                        class="chat-panel__close"
                        aria-label="Close chat"
                        on:click=move |_| chat.update(ChatState::close)
                    >
                        "×"
                    </button>
                </header>

                <div class="chat-panel__messages" node_ref=messages_ref>
                    {move || {
                        chat.with(|c| {
                            c.messages()
                                .iter()
                                .map(|msg| {
                                    let is_assistant = msg.sender == Sender::Assistant;
                                    let body = if is_assistant {
                                        let rendered = render_markdown_html(&msg.text);
                                        view! { <div class="chat-panel__markdown" inner_html=rendered></div> }
                                            .into_any()
                                    } else {
                                        view! { <span>{msg.text.clone()}</span> }.into_any()
                                    };
                                    view! {
                                        <div
                                            class="chat-panel__message"
                                            class:chat-panel__message--assistant=is_assistant
                                            class:chat-panel__message--user={!is_assistant}
                                        >
                                            {body}
                                        </div>
                                    }
                                })
                                .collect_view()
                        })
                    }}
                    {move || {
                        chat.with(ChatState::is_typing)
                            .then(|| view! { <div class="chat-panel__typing">"SphereBot is typing…"</div> })
                    }}
                </div>

                <div class="chat-panel__suggestions">
                    {SUGGESTED_QUESTIONS
                        .iter()
                        .map(|question| {
                            view! {
                                <button
                                    class="chat-panel__suggestion"
                                    disabled=busy
                                    on:click=move |_| ask((*question).to_owned())
                                >
                                    {*question}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <form class="chat-panel__input-row" on:submit=on_submit>
                    <input
                        class="chat-panel__input"
                        type="text"
                        placeholder="Ask SphereBot..."
                        prop:value=move || input.get()
                        on:input=move |ev| input.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary chat-panel__send" type="submit" disabled=move || !can_send()>
                        "Send"
                    </button>
                </form>
            </div>
        </Show>
    }
}

/// Render model output as HTML, dropping any raw HTML it contains.
fn render_markdown_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(markdown, options).filter_map(|event| match event {
        Event::Html(_) | Event::InlineHtml(_) => None,
        other => Some(other),
    });

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}
