use dioxus::prelude::*;

use crate::{
    chart::ChartSpec,
    domain::{compute_seo_forecast, seo_summary, AppState, ParamField, SeoParams},
    ui::{
        components::{
            chart_view::{sync_chart, use_chart_surface, ChartView},
            fields::{CurrencyField, NumberField, SliderField},
            summary_panel::SummaryPanel,
        },
        theme::Accent,
    },
};

#[component]
pub fn SeoPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let mut params = use_signal(SeoParams::default);
    let mut currency = use_signal(move || state.peek().calculator_currency());
    let surface = use_chart_surface("seo-chart");

    let forecast = use_memo(move || compute_seo_forecast(&params.read()));
    let chart_spec = use_memo(move || ChartSpec::seo(&forecast.read()));

    let metrics = seo_summary(&forecast.read(), currency());
    let chart_svg = sync_chart(&surface, &chart_spec.read());
    let current = params();

    rsx! {
        div { class: "calculator",
            h1 { "SEO ROI Forecasting" }
            div { class: "calculator-grid",
                section { class: "panel",
                    h2 { class: "panel-title", "Campaign Inputs" }
                    div { class: "panel-grid",
                        NumberField {
                            field: ParamField::MonthlyTrafficIncrease,
                            value: current.monthly_traffic_increase,
                            onchange: move |v| params.with_mut(|p| p.monthly_traffic_increase = v),
                        }
                        SliderField {
                            field: ParamField::ConversionRate,
                            value: current.conversion_rate_pct,
                            unit: "%",
                            onchange: move |v| params.with_mut(|p| p.conversion_rate_pct = v),
                        }
                        NumberField {
                            field: ParamField::AverageOrderValue,
                            value: current.average_order_value,
                            onchange: move |v| params.with_mut(|p| p.average_order_value = v),
                        }
                        NumberField {
                            field: ParamField::SeoCampaignCost,
                            value: current.seo_campaign_cost,
                            onchange: move |v| params.with_mut(|p| p.seo_campaign_cost = v),
                        }
                        NumberField {
                            field: ParamField::OtherCosts,
                            value: current.other_costs,
                            onchange: move |v| params.with_mut(|p| p.other_costs = v),
                        }
                        SliderField {
                            field: ParamField::ForecastMonths,
                            value: f64::from(current.forecast_months),
                            unit: " months",
                            onchange: move |v: f64| params.with_mut(|p| p.forecast_months = v as u32),
                        }
                        CurrencyField {
                            value: currency(),
                            onchange: move |picked| currency.set(picked),
                        }
                    }
                }
                SummaryPanel { title: "Forecast Summary", metrics, accent: Accent::Seo }
                p { class: "disclaimer",
                    "Estimates only. Actual results depend on market conditions, competition and execution."
                }
            }
            ChartView { id: "seo-chart", svg: chart_svg }
        }
    }
}
