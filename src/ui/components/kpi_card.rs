use dioxus::prelude::*;

use crate::domain::SummaryMetric;
use crate::ui::theme;

#[component]
pub fn KpiCard(metric: SummaryMetric) -> Element {
    rsx! {
        div {
            class: "metric",
            p { class: "metric-label", "{metric.label}" }
            p { class: "{theme::metric_value(metric.tone)}", "{metric.value}" }
        }
    }
}
