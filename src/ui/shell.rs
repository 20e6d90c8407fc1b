use dioxus::prelude::*;

use crate::app::Route;
use crate::ui::theme::{self, Accent};
use crate::util::version::{version_label, APP_NAME};

#[component]
pub fn Shell(children: Element) -> Element {
    let current_route = use_route::<Route>();
    let nav = use_navigator();

    rsx! {
        div { class: "app",
            header { class: "app-header",
                h1 { class: "app-title", "{APP_NAME}" }
                nav { class: "app-nav",
                    NavButton {
                        active: matches!(current_route, Route::Landing {}),
                        accent: Accent::Neutral,
                        onclick: move |_| { nav.push(Route::Landing {}); },
                        label: "Home",
                    }
                    NavButton {
                        active: matches!(current_route, Route::Seo {}),
                        accent: Accent::Seo,
                        onclick: move |_| { nav.push(Route::Seo {}); },
                        label: "SEO Forecast",
                    }
                    NavButton {
                        active: matches!(current_route, Route::Abm {}),
                        accent: Accent::Abm,
                        onclick: move |_| { nav.push(Route::Abm {}); },
                        label: "ABM Forecast",
                    }
                    NavButton {
                        active: matches!(current_route, Route::Settings {}),
                        accent: Accent::Neutral,
                        onclick: move |_| { nav.push(Route::Settings {}); },
                        label: "Settings",
                    }
                }
            }
            main { class: "app-main", {children} }
            footer { class: "app-footer", "{version_label()}" }
        }
    }
}

#[component]
fn NavButton(active: bool, accent: Accent, onclick: EventHandler<()>, label: &'static str) -> Element {
    rsx! {
        button {
            class: "{theme::nav_link(accent, active)}",
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}
