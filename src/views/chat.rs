use crate::assistant::ChatSession;
use crate::types::{Message, Role};
use dioxus::events::Key;
use dioxus::prelude::*;
use time::{OffsetDateTime, UtcOffset, format_description::FormatItem, macros::format_description};

const MESSAGE_TIME_FORMAT: &[FormatItem<'static>] =
    format_description!("[hour repr:12 padding:zero]:[minute padding:zero] [period case:upper]");

const QUICK_PROMPTS: &[&str] = &[
    "I'm feeling stressed",
    "Help me relax",
    "I can't sleep",
    "I need motivation",
];

fn format_message_timestamp(timestamp: OffsetDateTime) -> Option<String> {
    let mut datetime = timestamp;
    if let Ok(offset) = UtcOffset::current_local_offset() {
        datetime = datetime.to_offset(offset);
    }
    datetime.format(MESSAGE_TIME_FORMAT).ok()
}

#[component]
pub fn ChatView() -> Element {
    let mut session = use_signal(ChatSession::new);
    let mut input = use_signal(String::new);

    let mut send_message = move |text: String| {
        let pending = session.with_mut(|s| s.begin_submit(&text));
        let Some(pending) = pending else { return };
        input.set(String::new());
        let delay = session.with(|s| s.delay());
        spawn(async move {
            tokio::time::sleep(delay).await;
            session.with_mut(|s| s.apply_reply(pending));
        });
    };

    let transcript = session.with(|s| s.transcript().to_vec());
    let awaiting = session.with(|s| s.is_awaiting_response());

    rsx! {
        div { class: "page",
            section { class: "hero",
                h1 { class: "hero-title", "AI Mental Health Assistant" }
                p { class: "hero-subtitle",
                    "Your 24/7 companion for stress relief and mental health support. Demo mode."
                }
            }

            section { class: "page-body chat-layout",
                div { class: "chat-panel",
                    div { class: "chat-list",
                        for message in transcript.iter() {
                            MessageBubble { message: message.clone() }
                        }
                        if awaiting {
                            div { class: "message-row assistant",
                                div { class: "bubble assistant typing",
                                    span { class: "typing-dot" }
                                    span { class: "typing-dot" }
                                    span { class: "typing-dot" }
                                }
                            }
                        }
                    }

                    div { class: "composer",
                        input {
                            r#type: "text",
                            placeholder: "Type your message...",
                            value: "{input}",
                            oninput: move |ev| input.set(ev.value()),
                            onkeydown: move |ev| {
                                if ev.key() == Key::Enter && !ev.modifiers().shift() {
                                    ev.prevent_default();
                                    let text = input();
                                    send_message(text);
                                }
                            },
                        }
                        button {
                            class: "btn btn-primary",
                            r#type: "button",
                            disabled: awaiting || input().trim().is_empty(),
                            onclick: move |_| {
                                let text = input();
                                send_message(text);
                            },
                            "Send"
                        }
                    }
                }

                div { class: "chat-sidebar",
                    h3 { class: "sidebar-title", "Quick Prompts" }
                    for prompt in QUICK_PROMPTS.iter() {
                        button {
                            class: "btn btn-ghost prompt-btn",
                            onclick: move |_| input.set(prompt.to_string()),
                            "{prompt}"
                        }
                    }
                    div { class: "notice",
                        "This assistant is in demo mode and provides general support. "
                        "If you're in crisis, call your local emergency services."
                    }
                }
            }
        }
    }
}

#[component]
fn MessageBubble(message: Message) -> Element {
    let role_class = match message.role {
        Role::User => "user",
        Role::Assistant => "assistant",
    };
    rsx! {
        div { class: "message-row {role_class}",
            div { class: "bubble {role_class}",
                p { class: "bubble-text", "{message.content}" }
                if let Some(ts) = format_message_timestamp(message.created_at) {
                    span { class: "message-timestamp", "{ts}" }
                }
            }
        }
    }
}
