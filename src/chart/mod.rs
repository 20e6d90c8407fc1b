//! Chart model shared by both calculators, its SVG renderer and the surface
//! that owns the live chart.

pub mod surface;
pub mod svg;

pub use surface::{ChartSnapshot, ChartSurface};
pub use svg::{draw_chart, ChartDrawing, ChartLabel, TextAnchor, LABEL_FONT_SIZE};

use crate::domain::{AbmMonthlySeries, SeoForecast};

pub const ABM_CHART_SIZE: (u32, u32) = (900, 300);
pub const SEO_CHART_SIZE: (u32, u32) = (900, 400);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeriesKind {
    Bar,
    Line,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChartSeries {
    pub name: &'static str,
    pub kind: SeriesKind,
    pub values: Vec<f64>,
    pub stroke: &'static str,
    /// Bar colour, or the area under a line when set.
    pub fill: Option<&'static str>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChartSpec {
    pub title: &'static str,
    pub labels: Vec<String>,
    pub series: Vec<ChartSeries>,
    pub width: u32,
    pub height: u32,
}

impl ChartSpec {
    pub fn abm(series: &AbmMonthlySeries) -> Self {
        let (width, height) = ABM_CHART_SIZE;
        Self {
            title: "Projected Financial Timeline",
            labels: series.labels.clone(),
            series: vec![
                ChartSeries {
                    name: "Cumulative Revenue",
                    kind: SeriesKind::Bar,
                    values: series.cumulative_revenue.clone(),
                    stroke: "rgb(255, 193, 7)",
                    fill: Some("rgba(255, 193, 7, 0.5)"),
                },
                ChartSeries {
                    name: "Monthly Cost",
                    kind: SeriesKind::Line,
                    values: series.monthly_cost.clone(),
                    stroke: "rgb(108, 117, 125)",
                    fill: Some("rgba(108, 117, 125, 0.2)"),
                },
                ChartSeries {
                    name: "Cumulative Profit",
                    kind: SeriesKind::Line,
                    values: series.cumulative_profit.clone(),
                    stroke: "rgb(75, 192, 192)",
                    fill: None,
                },
            ],
            width,
            height,
        }
    }

    pub fn seo(forecast: &SeoForecast) -> Self {
        let (width, height) = SEO_CHART_SIZE;
        let column = |pick: fn(&crate::domain::SeoMonth) -> f64| {
            forecast.months.iter().map(pick).collect::<Vec<_>>()
        };
        Self {
            title: "Projected Financial Timeline",
            labels: forecast.months.iter().map(|m| m.label.clone()).collect(),
            series: vec![
                ChartSeries {
                    name: "Projected Monthly Revenue",
                    kind: SeriesKind::Bar,
                    values: column(|m| m.monthly_revenue),
                    stroke: "#8884d8",
                    fill: Some("#8884d8"),
                },
                ChartSeries {
                    name: "Cumulative Costs",
                    kind: SeriesKind::Line,
                    values: column(|m| m.cumulative_costs),
                    stroke: "#82ca9d",
                    fill: None,
                },
                ChartSeries {
                    name: "Projected Profit",
                    kind: SeriesKind::Line,
                    values: column(|m| m.cumulative_profit),
                    stroke: "#ffc658",
                    fill: None,
                },
            ],
            width,
            height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        abm_monthly_series, compute_abm_forecast, compute_seo_forecast, AbmParams, SeoParams,
        Timeframe,
    };

    #[test]
    fn abm_chart_has_three_series_per_month() {
        let params = AbmParams {
            timeframe: Timeframe::SixMonths,
            ..AbmParams::default()
        };
        let forecast = compute_abm_forecast(&params);
        let spec = ChartSpec::abm(&abm_monthly_series(
            params.timeframe,
            forecast.total_revenue,
            forecast.total_cost,
        ));
        assert_eq!(spec.labels.len(), 6);
        let kinds: Vec<SeriesKind> = spec.series.iter().map(|s| s.kind).collect();
        assert_eq!(kinds, vec![SeriesKind::Bar, SeriesKind::Line, SeriesKind::Line]);
        assert!(spec.series.iter().all(|s| s.values.len() == 6));
        assert_eq!(spec.series[0].values[5], forecast.total_revenue);
    }

    #[test]
    fn seo_chart_reuses_engine_series() {
        let forecast = compute_seo_forecast(&SeoParams::default());
        let spec = ChartSpec::seo(&forecast);
        assert_eq!(spec.labels.first().map(String::as_str), Some("Month 1"));
        assert_eq!(spec.series[0].values[3], forecast.months[3].monthly_revenue);
        assert_eq!(spec.series[1].values[11], forecast.total_costs);
        assert_eq!(spec.series[2].values[11], forecast.total_profit);
    }
}
