use std::path::PathBuf;

use dioxus::prelude::*;

use crate::{
    app::persist_user_state,
    domain::{AppState, Currency, PersistedState},
    report::{resolve_export_dir, REPORT_FILENAME},
    ui::{
        components::{
            fields::CurrencyField,
            toast::{push_toast, ToastKind, ToastMessage},
        },
        theme::{self, Accent},
    },
    util::logging::{validate_filter, DEFAULT_FILTER},
};

#[component]
pub fn SettingsPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let PersistedState {
        currency: saved_currency,
        export_dir,
        log_filter,
    } = state.peek().to_persisted();
    let mut currency = use_signal(move || saved_currency);
    let mut export_dir_input = use_signal(move || {
        export_dir
            .map(|dir| dir.display().to_string())
            .unwrap_or_default()
    });
    let mut log_filter_input = use_signal(move || log_filter.unwrap_or_default());

    let export_target = resolve_export_dir(state.read().export_dir.as_deref()).join(REPORT_FILENAME);

    let on_apply = {
        let mut state = state;
        move |_| match parse_preferences(currency(), &export_dir_input(), &log_filter_input()) {
            Ok(prefs) => {
                let filter_changed = state.peek().log_filter != prefs.log_filter;
                state.with_mut(|st| st.apply_persisted(prefs));
                persist_user_state(&state);
                let note = if filter_changed {
                    "Saved preferences. The log filter applies after a restart."
                } else {
                    "Saved preferences."
                };
                push_toast(toasts, ToastKind::Success, note);
            }
            Err(message) => push_toast(toasts, ToastKind::Error, message),
        }
    };

    let on_reset = {
        let mut state = state;
        move |_| {
            let defaults = PersistedState::default();
            currency.set(defaults.currency);
            export_dir_input.set(String::new());
            log_filter_input.set(String::new());
            state.with_mut(|st| st.apply_persisted(defaults));
            persist_user_state(&state);
            push_toast(toasts, ToastKind::Info, "Restored default preferences.");
        }
    };

    rsx! {
        div { class: "calculator",
            h1 { "Settings" }
            section { class: "panel",
                h2 { class: "panel-title", "Preferences" }
                div { class: "panel-grid",
                    CurrencyField {
                        value: currency(),
                        onchange: move |picked| currency.set(picked),
                    }
                    div { class: "field",
                        label { class: "field-label", "Report folder" }
                        input {
                            r#type: "text",
                            placeholder: "Downloads folder",
                            value: "{export_dir_input}",
                            oninput: move |evt: FormEvent| export_dir_input.set(evt.value()),
                        }
                        span { class: "field-value", "Reports are saved as {export_target.display()}" }
                    }
                    div { class: "field",
                        label { class: "field-label", "Log filter" }
                        input {
                            r#type: "text",
                            placeholder: DEFAULT_FILTER,
                            value: "{log_filter_input}",
                            oninput: move |evt: FormEvent| log_filter_input.set(evt.value()),
                        }
                        span { class: "field-value", "RUST_LOG overrides this when set." }
                    }
                }
                div { class: "actions",
                    button { class: "{theme::btn_primary(Accent::Abm)}", onclick: on_apply, "Apply" }
                    button { class: "{theme::btn_primary(Accent::Seo)}", onclick: on_reset, "Reset Defaults" }
                }
            }
        }
    }
}

/// Turns the settings form into preferences. Blank fields fall back to the
/// built-in behaviour.
fn parse_preferences(
    currency: Currency,
    export_dir: &str,
    log_filter: &str,
) -> Result<PersistedState, String> {
    let export_dir = Some(export_dir.trim())
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from);
    let log_filter = match log_filter.trim() {
        "" => None,
        filter => {
            validate_filter(filter).map_err(|err| format!("Invalid log filter: {err}"))?;
            Some(filter.to_string())
        }
    };
    Ok(PersistedState {
        currency,
        export_dir,
        log_filter,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_fields_mean_defaults() {
        let prefs = parse_preferences(Currency::Gbp, "  ", "").unwrap();
        assert_eq!(
            prefs,
            PersistedState {
                currency: Currency::Gbp,
                export_dir: None,
                log_filter: None,
            }
        );
    }

    #[test]
    fn values_are_trimmed_and_validated() {
        let prefs = parse_preferences(Currency::Usd, " /tmp/reports ", " campaign_forecaster=debug ")
            .unwrap();
        assert_eq!(prefs.export_dir, Some(PathBuf::from("/tmp/reports")));
        assert_eq!(prefs.log_filter.as_deref(), Some("campaign_forecaster=debug"));

        let err = parse_preferences(Currency::Usd, "", "campaign_forecaster=loud").unwrap_err();
        assert!(err.starts_with("Invalid log filter"));
    }
}
