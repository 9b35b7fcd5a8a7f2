use crate::content::{CmsClient, Feature, fetch_leading};
use crate::ui::AppTab;
use dioxus::prelude::*;

const HIGHLIGHT_COUNT: usize = 3;

#[component]
pub fn HomeView(active_tab: Signal<AppTab>) -> Element {
    let mut active_tab = active_tab;
    let mut highlights = use_signal(Vec::<Feature>::new);

    use_effect(move || {
        spawn(async move {
            let client = match CmsClient::from_env() {
                Ok(client) => client,
                Err(err) => {
                    tracing::warn!(error = %err, "skipping feature highlights");
                    return;
                }
            };
            match fetch_leading::<Feature>(&client, HIGHLIGHT_COUNT).await {
                Ok(items) => highlights.set(items),
                Err(err) => tracing::error!(error = %err, "failed to load feature highlights"),
            }
        });
    });

    let highlight_snapshot = highlights();

    rsx! {
        div { class: "page",
            section { class: "hero hero-home",
                h1 { class: "hero-title", "Know your body. Guard your mind." }
                p { class: "hero-subtitle",
                    "VitalSense tracks your heart rate, temperature, and activity around the clock, "
                    "detects stress before it builds, and connects you to support when you need it."
                }
                div { class: "hero-actions",
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| active_tab.set(AppTab::Features),
                        "Explore Features"
                    }
                    button {
                        class: "btn btn-ghost",
                        onclick: move |_| active_tab.set(AppTab::Chat),
                        "Talk to the Assistant"
                    }
                }
            }

            if !highlight_snapshot.is_empty() {
                section { class: "page-body",
                    h2 { class: "section-title", "Highlights" }
                    div { class: "card-grid card-grid-wide",
                        for feature in highlight_snapshot.iter() {
                            div { class: "card",
                                div { class: "card-body",
                                    if let Some(name) = feature.name.as_ref() {
                                        h3 { class: "card-title", "{name}" }
                                    }
                                    if let Some(short) = feature.short_description.as_ref() {
                                        p { class: "card-text", "{short}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            section { class: "pillars",
                div { class: "pillar",
                    h3 { class: "pillar-title", "Monitoring" }
                    p { class: "pillar-text", "Real-time tracking of heart rate, temperature, and activity levels" }
                }
                div { class: "pillar",
                    h3 { class: "pillar-title", "Analysis" }
                    p { class: "pillar-text", "AI-powered detection of stress, anxiety, and wellness states" }
                }
                div { class: "pillar",
                    h3 { class: "pillar-title", "Support" }
                    p { class: "pillar-text", "Emergency assistance and AI chatbot for stress relief" }
                }
                div { class: "pillar",
                    h3 { class: "pillar-title", "Reports" }
                    p { class: "pillar-text", "Comprehensive health data reports and insights" }
                }
            }
        }
    }
}
