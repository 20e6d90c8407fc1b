//! Formatting of the aggregate metrics shown in the summary panels.

use super::{abm::AbmForecast, currency::Currency, seo::SeoForecast};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MetricTone {
    Neutral,
    Positive,
    Negative,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SummaryMetric {
    pub label: &'static str,
    pub value: String,
    pub tone: MetricTone,
}

impl SummaryMetric {
    fn neutral(label: &'static str, value: String) -> Self {
        Self {
            label,
            value,
            tone: MetricTone::Neutral,
        }
    }

    fn signed(label: &'static str, value: String, raw: f64) -> Self {
        let tone = if raw >= 0.0 {
            MetricTone::Positive
        } else {
            MetricTone::Negative
        };
        Self { label, value, tone }
    }
}

fn non_finite(value: f64) -> Option<&'static str> {
    if value.is_nan() {
        Some("NaN")
    } else if value == f64::INFINITY {
        Some("Infinity")
    } else if value == f64::NEG_INFINITY {
        Some("-Infinity")
    } else {
        None
    }
}

/// Rounds half away from zero before formatting so `0.125` shows as `0.13`.
fn round_to(value: f64, decimals: usize) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    let rounded = (value * factor).round() / factor;
    // keep "-0.00" out of the panel
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

pub fn format_fixed(value: f64, decimals: usize) -> String {
    if let Some(text) = non_finite(value) {
        return text.to_string();
    }
    format!("{:.*}", decimals, round_to(value, decimals))
}

pub fn format_grouped(value: f64, decimals: usize) -> String {
    let fixed = format_fixed(value, decimals);
    if !value.is_finite() {
        return fixed;
    }

    let (sign, unsigned) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac)) => (int_part, Some(frac)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (idx, ch) in int_part.chars().enumerate() {
        if idx > 0 && (int_part.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}

pub fn format_money(currency: Currency, value: f64) -> String {
    format!("{} {}", currency.symbol(), format_grouped(value, 2))
}

/// Money without thousands separators, as the ABM panel and report print it.
pub fn format_money_plain(currency: Currency, value: f64) -> String {
    format!("{} {}", currency.symbol(), format_fixed(value, 2))
}

pub fn format_percent(value: f64) -> String {
    format!("{}%", format_fixed(value, 2))
}

pub fn format_count(value: f64) -> String {
    format_fixed(value, 0)
}

pub fn abm_summary(forecast: &AbmForecast, currency: Currency) -> Vec<SummaryMetric> {
    vec![
        SummaryMetric::neutral(
            "Revenue",
            format_money_plain(currency, forecast.total_revenue),
        ),
        SummaryMetric::neutral("Costs", format_money_plain(currency, forecast.total_cost)),
        SummaryMetric::signed(
            "Profit",
            format_money_plain(currency, forecast.profit),
            forecast.profit,
        ),
        SummaryMetric::neutral("Deals Closed", format_count(forecast.deals_closed)),
        SummaryMetric::signed("ROI", format_percent(forecast.roi), forecast.roi),
    ]
}

pub fn seo_summary(forecast: &SeoForecast, currency: Currency) -> Vec<SummaryMetric> {
    vec![
        SummaryMetric::neutral("Revenue", format_money(currency, forecast.total_revenue)),
        SummaryMetric::neutral("Costs", format_money(currency, forecast.total_costs)),
        SummaryMetric::signed(
            "Profit",
            format_money(currency, forecast.total_profit),
            forecast.total_profit,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{compute_abm_forecast, compute_seo_forecast, AbmParams, SeoParams};

    #[test]
    fn fixed_rounds_half_away_from_zero() {
        assert_eq!(format_fixed(114.285714, 2), "114.29");
        assert_eq!(format_fixed(0.45, 0), "0");
        assert_eq!(format_fixed(2.5, 0), "3");
        assert_eq!(format_fixed(-0.001, 2), "0.00");
    }

    #[test]
    fn non_finite_values_render_visibly() {
        assert_eq!(format_fixed(f64::NAN, 2), "NaN");
        assert_eq!(format_grouped(f64::INFINITY, 2), "Infinity");
        assert_eq!(format_money(Currency::Eur, f64::NAN), "€ NaN");
    }

    #[test]
    fn grouping_inserts_thousands_separators() {
        assert_eq!(format_grouped(1234567.891, 2), "1,234,567.89");
        assert_eq!(format_grouped(-1200.0, 2), "-1,200.00");
        assert_eq!(format_grouped(999.0, 0), "999");
        assert_eq!(format_grouped(1000.0, 0), "1,000");
    }

    #[test]
    fn abm_panel_for_default_campaign() {
        let forecast = compute_abm_forecast(&AbmParams::default());
        let metrics = abm_summary(&forecast, Currency::Usd);
        let values: Vec<&str> = metrics.iter().map(|m| m.value.as_str()).collect();
        assert_eq!(
            values,
            vec!["$ 450.00", "$ 1050.00", "$ -600.00", "0", "-57.14%"]
        );
        assert_eq!(metrics[2].tone, MetricTone::Negative);
        assert_eq!(metrics[4].tone, MetricTone::Negative);
    }

    #[test]
    fn abm_panel_matches_report_money_format() {
        let forecast = compute_abm_forecast(&AbmParams {
            average_deal_size: 500_000.0,
            ..AbmParams::default()
        });
        let metrics = abm_summary(&forecast, Currency::Usd);
        assert_eq!(metrics[0].value, "$ 45000.00");
        assert_eq!(metrics[2].value, "$ 43950.00");
        assert_eq!(metrics[2].tone, MetricTone::Positive);
        assert_eq!(format_money_plain(Currency::Eur, 1234.5), "€ 1234.50");
    }

    #[test]
    fn currency_is_a_label_only() {
        let forecast = compute_seo_forecast(&SeoParams {
            forecast_months: 1,
            ..SeoParams::default()
        });
        let usd = seo_summary(&forecast, Currency::Usd);
        let krw = seo_summary(&forecast, Currency::Krw);
        assert_eq!(usd[0].value, "$ 1,320.00");
        assert_eq!(krw[0].value, "KR₩ 1,320.00");
        assert_eq!(krw[2].value, "KR₩ 220.00");
    }

    #[test]
    fn losses_are_flagged_negative() {
        let forecast = compute_seo_forecast(&SeoParams {
            monthly_traffic_increase: 0.0,
            ..SeoParams::default()
        });
        let metrics = seo_summary(&forecast, Currency::Gbp);
        assert_eq!(metrics[2].tone, MetricTone::Negative);
        assert_eq!(metrics[2].value, "£ -13,200.00");
    }
}
