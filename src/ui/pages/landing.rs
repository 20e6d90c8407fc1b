use dioxus::prelude::*;

use crate::{
    app::Route,
    ui::theme::{self, Accent},
};

#[component]
pub fn LandingPage() -> Element {
    let nav = use_navigator();

    rsx! {
        div { class: "landing",
            div { class: "landing-intro",
                h1 { "Campaign Forecaster" }
                p { "Pick a calculator to project what a campaign returns over time." }
            }
            button {
                class: "{theme::card_link(Accent::Seo)}",
                onclick: move |_| { nav.push(Route::Seo {}); },
                h2 { "SEO ROI Forecast" }
                p { "Monthly revenue, costs and cumulative profit from organic traffic growth." }
            }
            button {
                class: "{theme::card_link(Accent::Abm)}",
                onclick: move |_| { nav.push(Route::Abm {}); },
                h2 { "ABM Campaign Forecast" }
                p { "Funnel from target accounts to closed deals, with a downloadable PDF report." }
            }
        }
    }
}
