use dioxus::prelude::*;

use crate::{
    chart::ChartSpec,
    domain::{abm_monthly_series, abm_summary, compute_abm_forecast, AbmParams, AppState, ParamField},
    report::{build_abm_report, export_abm_report, resolve_export_dir, today, ExportError},
    ui::{
        components::{
            chart_view::{sync_chart, use_chart_surface, ChartView},
            fields::{CurrencyField, NumberField, SliderField, TimeframeField},
            summary_panel::SummaryPanel,
            toast::{push_toast, ToastKind, ToastMessage},
        },
        theme::{self, Accent},
    },
};

#[component]
pub fn AbmPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let mut params = use_signal(AbmParams::default);
    let mut currency = use_signal(move || state.peek().calculator_currency());
    let surface = use_chart_surface("abm-chart");

    let forecast = use_memo(move || compute_abm_forecast(&params.read()));
    let chart_spec = use_memo(move || {
        let forecast = forecast.read();
        ChartSpec::abm(&abm_monthly_series(
            params.read().timeframe,
            forecast.total_revenue,
            forecast.total_cost,
        ))
    });

    let metrics = abm_summary(&forecast.read(), currency());
    let chart_svg = sync_chart(&surface, &chart_spec.read());
    let current = params();

    // The report embeds whatever the surface shows at click time.
    let on_export = {
        let surface = surface.clone();
        move |_| {
            let Some(snapshot) = surface.borrow().snapshot() else {
                push_toast(toasts, ToastKind::Error, ExportError::NoChart.to_string());
                return;
            };
            let report = build_abm_report(
                &params.read(),
                &forecast.read(),
                currency(),
                today(),
                snapshot,
            );
            let dir = resolve_export_dir(state.read().export_dir.as_deref());
            match export_abm_report(&report, &dir) {
                Ok(path) => push_toast(
                    toasts,
                    ToastKind::Success,
                    format!("Saved report to {}", path.display()),
                ),
                Err(err) => {
                    tracing::error!(dir = %dir.display(), "report export failed: {err}");
                    push_toast(toasts, ToastKind::Error, format!("Could not export report: {err}"));
                }
            }
        }
    };

    rsx! {
        div { class: "calculator",
            h1 { "ABM Campaign Forecasting Tool" }
            div { class: "calculator-grid",
                div {
                    section { class: "panel",
                        h2 { class: "panel-title", "Target Audience & Reach" }
                        div { class: "panel-grid",
                            SliderField {
                                field: ParamField::TargetAccounts,
                                value: current.target_accounts,
                                onchange: move |v| params.with_mut(|p| p.target_accounts = v),
                            }
                            SliderField {
                                field: ParamField::ContactsPerAccount,
                                value: current.contacts_per_account,
                                onchange: move |v| params.with_mut(|p| p.contacts_per_account = v),
                            }
                        }
                    }
                    section { class: "panel",
                        h2 { class: "panel-title", "Outreach & Engagement" }
                        div { class: "panel-grid",
                            SliderField {
                                field: ParamField::OutreachCadence,
                                value: current.outreach_cadence,
                                onchange: move |v| params.with_mut(|p| p.outreach_cadence = v),
                            }
                            TimeframeField {
                                value: current.timeframe,
                                onchange: move |t| params.with_mut(|p| p.timeframe = t),
                            }
                            SliderField {
                                field: ParamField::ContactRate,
                                value: current.contact_rate_pct,
                                unit: "%",
                                onchange: move |v| params.with_mut(|p| p.contact_rate_pct = v),
                            }
                            SliderField {
                                field: ParamField::ResponseRate,
                                value: current.response_rate_pct,
                                unit: "%",
                                onchange: move |v| params.with_mut(|p| p.response_rate_pct = v),
                            }
                            SliderField {
                                field: ParamField::MeetingRate,
                                value: current.meeting_rate_pct,
                                unit: "%",
                                onchange: move |v| params.with_mut(|p| p.meeting_rate_pct = v),
                            }
                            SliderField {
                                field: ParamField::OpportunityRate,
                                value: current.opportunity_rate_pct,
                                unit: "%",
                                onchange: move |v| params.with_mut(|p| p.opportunity_rate_pct = v),
                            }
                            SliderField {
                                field: ParamField::CloseRate,
                                value: current.close_rate_pct,
                                unit: "%",
                                onchange: move |v| params.with_mut(|p| p.close_rate_pct = v),
                            }
                        }
                    }
                    section { class: "panel",
                        h2 { class: "panel-title", "Time, Cost & Deal Value" }
                        div { class: "panel-grid",
                            NumberField {
                                field: ParamField::CostPerContact,
                                value: current.cost_per_contact,
                                onchange: move |v| params.with_mut(|p| p.cost_per_contact = v),
                            }
                            NumberField {
                                field: ParamField::CostPerOutreach,
                                value: current.cost_per_outreach,
                                onchange: move |v| params.with_mut(|p| p.cost_per_outreach = v),
                            }
                            NumberField {
                                field: ParamField::AverageDealSize,
                                value: current.average_deal_size,
                                onchange: move |v| params.with_mut(|p| p.average_deal_size = v),
                            }
                            CurrencyField {
                                value: currency(),
                                onchange: move |picked| currency.set(picked),
                            }
                        }
                    }
                }
                div {
                    SummaryPanel { title: "Projected Results", metrics, accent: Accent::Abm }
                    div { class: "actions",
                        button {
                            class: "{theme::btn_primary(Accent::Abm)}",
                            onclick: on_export,
                            "Download PDF"
                        }
                    }
                    p { class: "disclaimer",
                        "Projections are estimates based on the inputs above and do not guarantee results."
                    }
                }
            }
            ChartView { id: "abm-chart", svg: chart_svg }
        }
    }
}
