use crate::theme::theme_definition;
use crate::types::ThemeMode;
use crate::views::{ChatView, FeaturesView, HomeView, ResourcesView};
use dioxus::prelude::*;

const APP_CSS: Asset = asset!("/assets/vitalsense.css");

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppTab {
    Home,
    Features,
    Resources,
    Chat,
}

#[component]
pub fn App() -> Element {
    let active_tab = use_signal(|| AppTab::Home);
    let theme = use_signal(|| ThemeMode::Light);

    rsx! {
        ThemeStyles { theme }
        AppHeader { active_tab, theme }
        TabPanels { active_tab }
    }
}

#[component]
fn ThemeStyles(theme: Signal<ThemeMode>) -> Element {
    let definition = theme_definition(theme());
    rsx! {
        document::Link { rel: "stylesheet", href: APP_CSS }
        style { dangerous_inner_html: "{definition.css}" }
    }
}

#[component]
fn AppHeader(active_tab: Signal<AppTab>, theme: Signal<ThemeMode>) -> Element {
    let mut theme = theme;
    let definition = theme_definition(theme());
    let toggle_label = match theme() {
        ThemeMode::Light => "Dark",
        ThemeMode::Dark => "Light",
    };
    rsx! {
        div { class: "header",
            div { class: "header-content",
                span { class: "{definition.wordmark_class}", "VitalSense" }
                TabNavigation { active_tab }
                button {
                    class: "btn btn-ghost theme-toggle",
                    onclick: move |_| {
                        let next = match theme() {
                            ThemeMode::Light => ThemeMode::Dark,
                            ThemeMode::Dark => ThemeMode::Light,
                        };
                        theme.set(next);
                    },
                    "{toggle_label}"
                }
            }
        }
    }
}

#[component]
fn TabPanels(active_tab: Signal<AppTab>) -> Element {
    rsx! {
        div { class: "tab-panels",
            TabPanel {
                active_tab,
                tab: AppTab::Home,
                children: rsx!( HomeView { active_tab } ),
            }
            TabPanel {
                active_tab,
                tab: AppTab::Features,
                children: rsx!( FeaturesView {} ),
            }
            TabPanel {
                active_tab,
                tab: AppTab::Resources,
                children: rsx!( ResourcesView {} ),
            }
            TabPanel {
                active_tab,
                tab: AppTab::Chat,
                children: rsx!( ChatView {} ),
            }
        }
    }
}

#[component]
fn TabPanel(active_tab: Signal<AppTab>, tab: AppTab, children: Element) -> Element {
    let is_active = active_tab() == tab;
    let class_suffix = if is_active { "active" } else { "" };
    rsx! {
        div {
            class: format_args!("tab-panel {}", class_suffix),
            aria_hidden: (!is_active).to_string(),
            {children}
        }
    }
}

#[component]
fn TabNavigation(active_tab: Signal<AppTab>) -> Element {
    rsx! {
        div { class: "tabs",
            TabButton { active_tab, tab: AppTab::Home, label: "Home" }
            TabButton { active_tab, tab: AppTab::Features, label: "Features" }
            TabButton { active_tab, tab: AppTab::Resources, label: "Resources" }
            TabButton { active_tab, tab: AppTab::Chat, label: "Chat" }
        }
    }
}

#[component]
fn TabButton(active_tab: Signal<AppTab>, tab: AppTab, label: &'static str) -> Element {
    let mut active_tab = active_tab;
    let class = if active_tab() == tab {
        "tab active"
    } else {
        "tab"
    };
    rsx! {
        h1 {
            class: class,
            onclick: move |_| active_tab.set(tab),
            "{label}"
        }
    }
}
