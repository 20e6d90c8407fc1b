use dioxus::prelude::*;

use super::kpi_card::KpiCard;
use crate::domain::SummaryMetric;
use crate::ui::theme::{self, Accent};

/// Headline figures of a forecast, one card per metric.
#[component]
pub fn SummaryPanel(title: &'static str, metrics: Vec<SummaryMetric>, accent: Accent) -> Element {
    rsx! {
        section {
            class: "{theme::summary(accent)}",
            h2 { class: "summary-title", "{title}" }
            div { class: "summary-grid",
                for metric in metrics {
                    KpiCard { key: "{metric.label}", metric }
                }
            }
        }
    }
}
