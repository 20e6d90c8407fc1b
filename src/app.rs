use dioxus::{prelude::*, signals::Signal};

use crate::{
    domain::AppState,
    ui::{
        components::toast::{Toast, ToastMessage},
        pages::{AbmPage, LandingPage, SeoPage, SettingsPage},
        shell::Shell,
    },
    util::{
        assets,
        persistence::{load_persisted_state, save_persisted_state},
    },
};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    Landing {},
    #[route("/seo")]
    Seo {},
    #[route("/abm")]
    Abm {},
    #[route("/settings")]
    Settings {},
}

#[component]
pub fn App() -> Element {
    let state = use_signal(AppState::default);
    use_hook({
        let mut state = state;
        move || {
            if let Some(saved) = load_persisted_state() {
                tracing::debug!(currency = ?saved.currency, "loaded preferences");
                state.with_mut(|st| st.apply_persisted(saved));
            }
        }
    });
    use_context_provider(|| state);

    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts);

    rsx! {
        document::Link { rel: "icon", href: assets::favicon_data_uri() }
        document::Style { "{assets::main_css()}" }
        Router::<Route> {}
        Toast {}
    }
}

pub fn persist_user_state(state: &Signal<AppState>) {
    let snapshot = state.with(|st| st.to_persisted());
    if let Err(err) = save_persisted_state(&snapshot) {
        tracing::warn!("failed to persist preferences: {err}");
    }
}

#[component]
pub fn Landing() -> Element {
    rsx! { Shell { LandingPage {} } }
}

#[component]
pub fn Seo() -> Element {
    rsx! { Shell { SeoPage {} } }
}

#[component]
pub fn Abm() -> Element {
    rsx! { Shell { AbmPage {} } }
}

#[component]
pub fn Settings() -> Element {
    rsx! { Shell { SettingsPage {} } }
}
