use crate::content::{Article, CmsClient, PagedLoader};
use crate::markdown::markdown_to_html;
use dioxus::prelude::*;
use std::sync::Arc;

const PAGE_SIZE: usize = 9;

#[component]
pub fn ResourcesView() -> Element {
    let mut loader = use_signal(|| {
        CmsClient::from_env()
            .map(|client| PagedLoader::<Article>::new(Arc::new(client), PAGE_SIZE))
            .ok()
    });
    let mut selected = use_signal(|| Option::<Article>::None);

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
                    tracing::error!(error = %err, "failed to load health resources");
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

    let (configured, articles, is_loading, has_next) = {
        let guard = loader.read();
        match guard.as_ref() {
            Some(l) => (true, l.items().to_vec(), l.is_loading(), l.has_next()),
            None => (false, Vec::new(), false, false),
        }
    };

    if let Some(article) = selected() {
        return rsx! {
            ArticleReader { article, on_back: move |_| selected.set(None) }
        };
    }

    rsx! {
        div { class: "page",
            section { class: "hero",
                h1 { class: "hero-title", "Health resources" }
                p { class: "hero-subtitle",
                    "Expert insights, wellness tips, and educational content for your health journey."
                }
            }

            section { class: "page-body",
                if !configured {
                    div { class: "notice", "Content source is not configured. Set VITALSENSE_CMS_ENDPOINT to browse resources." }
                } else if is_loading && articles.is_empty() {
                    div { class: "loading-state", span { class: "spinner" } }
                } else if articles.is_empty() {
                    div { class: "empty-state", "No resources available at the moment" }
                } else {
                    div { class: "card-grid",
                        for article in articles.iter() {
                            ArticleCard {
                                article: article.clone(),
                                on_read: {
                                    let article = article.clone();
                                    move |_| selected.set(Some(article.clone()))
                                },
                            }
                        }
                    }
                    if has_next {
                        div { class: "load-more-row",
                            button {
                                class: "btn btn-primary",
                                disabled: is_loading,
                                onclick: move |_| load(false),
                                if is_loading { "Loading..." } else { "Load More Articles" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ArticleCard(article: Article, on_read: EventHandler<MouseEvent>) -> Element {
    rsx! {
        div { class: "card",
            if let Some(cover) = article.cover_image.as_ref() {
                img { class: "card-image", src: "{cover}", alt: article.title.clone().unwrap_or_default() }
            }
            div { class: "card-body",
                if let Some(category) = article.category.as_ref() {
                    span { class: "card-badge", "{category}" }
                }
                if let Some(title) = article.title.as_ref() {
                    h3 { class: "card-title", "{title}" }
                }
                if let Some(summary) = article.summary.as_ref() {
                    p { class: "card-text", "{summary}" }
                }
                if article.content.is_some() {
                    button { class: "card-link", onclick: move |ev| on_read.call(ev), "Read Article →" }
                }
            }
        }
    }
}

#[component]
fn ArticleReader(article: Article, on_back: EventHandler<MouseEvent>) -> Element {
    let body_html = article
        .content
        .as_deref()
        .map(markdown_to_html)
        .unwrap_or_default();

    rsx! {
        div { class: "page",
            section { class: "page-body",
                button { class: "btn btn-ghost", onclick: move |ev| on_back.call(ev), "← Back to resources" }
                article { class: "article-reader",
                    if let Some(category) = article.category.as_ref() {
                        span { class: "card-badge", "{category}" }
                    }
                    if let Some(title) = article.title.as_ref() {
                        h1 { class: "article-title", "{title}" }
                    }
                    if let Some(summary) = article.summary.as_ref() {
                        p { class: "article-summary", "{summary}" }
                    }
                    div { class: "md", dangerous_inner_html: "{body_html}" }
                }
            }
        }
    }
}
