use crate::content::{CmsClient, Feature, PagedLoader};
use dioxus::prelude::*;
use std::sync::Arc;

const PAGE_SIZE: usize = 6;

#[component]
pub fn FeaturesView() -> Element {
    let mut loader = use_signal(|| {
        CmsClient::from_env()
            .map(|client| PagedLoader::<Feature>::new(Arc::new(client), PAGE_SIZE))
            .ok()
    });

    let load = move |reset: bool| {
        spawn(async move {
            let work = loader.with_mut(|slot| {
                slot.as_mut().and_then(|l| {
                    let ticket = if reset {
                        Some(l.begin_reset())
                    } else {
                        l.begin_load_more()
                    };
                    ticket.map(|ticket| (ticket, l.source()))
                })
            });
            let Some((ticket, source)) = work else { return };
            match source.fetch_page(ticket.window()).await {
                Ok(page) => loader.with_mut(|slot| {
                    if let Some(l) = slot.as_mut() {
                        l.complete(ticket, page);
                    }
                }),
                Err(err) => {
                    tracing::error!(error = %err, "failed to load features");
                    loader.with_mut(|slot| {
                        if let Some(l) = slot.as_mut() {
                            l.fail(ticket);
                        }
                    });
                }
            }
        });
    };

    use_effect(move || {
        load(true);
    });

    let (configured, features, is_loading, has_next) = {
        let guard = loader.read();
        match guard.as_ref() {
            Some(l) => (true, l.items().to_vec(), l.is_loading(), l.has_next()),
            None => (false, Vec::new(), false, false),
        }
    };

    rsx! {
        div { class: "page",
            section { class: "hero",
                h1 { class: "hero-title", "Features that empower you" }
                p { class: "hero-subtitle",
                    "Explore the tools that keep you informed, supported, and in control of your health."
                }
            }

            section { class: "page-body",
                if !configured {
                    div { class: "notice", "Content source is not configured. Set VITALSENSE_CMS_ENDPOINT to browse features." }
                } else if is_loading && features.is_empty() {
                    div { class: "loading-state", span { class: "spinner" } }
                } else if features.is_empty() {
                    div { class: "empty-state", "No features available at the moment" }
                } else {
                    div { class: "card-grid",
                        for feature in features.iter() {
                            FeatureCard { feature: feature.clone() }
                        }
                    }
                    if has_next {
                        div { class: "load-more-row",
                            button {
                                class: "btn btn-primary",
                                disabled: is_loading,
                                onclick: move |_| load(false),
                                if is_loading { "Loading..." } else { "Load More Features" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn FeatureCard(feature: Feature) -> Element {
    rsx! {
        div { class: "card",
            if let Some(image) = feature.image.as_ref() {
                img { class: "card-image", src: "{image}", alt: feature.name.clone().unwrap_or_default() }
            }
            div { class: "card-body",
                if let Some(name) = feature.name.as_ref() {
                    h3 { class: "card-title", "{name}" }
                }
                if let Some(short) = feature.short_description.as_ref() {
                    p { class: "card-lead", "{short}" }
                }
                if let Some(description) = feature.description.as_ref() {
                    p { class: "card-text", "{description}" }
                }
                if let Some(benefit) = feature.benefit.as_ref() {
                    div { class: "card-benefit",
                        span { class: "card-benefit-label", "Benefit" }
                        p { class: "card-benefit-text", "{benefit}" }
                    }
                }
                if let Some(url) = feature.learn_more_url.as_ref() {
                    a { class: "card-link", href: "{url}", "Learn More →" }
                }
            }
        }
    }
}
