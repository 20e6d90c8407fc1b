//! SEO forecast: traffic compounds additively month over month.

use super::params::SeoParams;

#[derive(Clone, Debug, PartialEq)]
pub struct SeoMonth {
    /// 1-based month index.
    pub month: u32,
    pub label: String,
    pub monthly_revenue: f64,
    pub cumulative_costs: f64,
    pub cumulative_profit: f64,
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct SeoForecast {
    pub months: Vec<SeoMonth>,
    pub total_revenue: f64,
    pub total_costs: f64,
    pub total_profit: f64,
}

pub fn compute_seo_forecast(params: &SeoParams) -> SeoForecast {
    let mut months = Vec::with_capacity(params.forecast_months as usize);
    let mut cumulative_traffic = 0.0;
    let mut total_revenue = 0.0;
    let mut total_costs = 0.0;
    let mut cumulative_profit = 0.0;

    let monthly_cost = params.seo_campaign_cost + params.other_costs;

    for month in 1..=params.forecast_months {
        cumulative_traffic += params.monthly_traffic_increase;
        let monthly_revenue =
            cumulative_traffic * (params.conversion_rate_pct / 100.0) * params.average_order_value;

        total_revenue += monthly_revenue;
        total_costs += monthly_cost;
        cumulative_profit = total_revenue - total_costs;

        months.push(SeoMonth {
            month,
            label: format!("Month {month}"),
            monthly_revenue,
            cumulative_costs: total_costs,
            cumulative_profit,
        });
    }

    SeoForecast {
        months,
        total_revenue,
        total_costs,
        total_profit: cumulative_profit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn single_month_scenario() {
        let params = SeoParams {
            forecast_months: 1,
            ..SeoParams::default()
        };
        let forecast = compute_seo_forecast(&params);
        assert_eq!(forecast.months.len(), 1);
        let first = &forecast.months[0];
        assert_eq!(first.label, "Month 1");
        assert!((first.monthly_revenue - 1320.0).abs() < 1e-9);
        assert_eq!(forecast.total_costs, 1100.0);
        assert!((forecast.total_profit - 220.0).abs() < 1e-9);
    }

    #[test]
    fn traffic_accumulates_each_month() {
        let params = SeoParams {
            monthly_traffic_increase: 100.0,
            conversion_rate_pct: 10.0,
            average_order_value: 1.0,
            seo_campaign_cost: 5.0,
            other_costs: 5.0,
            forecast_months: 3,
        };
        let forecast = compute_seo_forecast(&params);
        let revenue: Vec<f64> = forecast.months.iter().map(|m| m.monthly_revenue).collect();
        assert_eq!(revenue, vec![10.0, 20.0, 30.0]);
        let costs: Vec<f64> = forecast.months.iter().map(|m| m.cumulative_costs).collect();
        assert_eq!(costs, vec![10.0, 20.0, 30.0]);
        let profit: Vec<f64> = forecast.months.iter().map(|m| m.cumulative_profit).collect();
        assert_eq!(profit, vec![0.0, 10.0, 30.0]);
        assert_eq!(forecast.total_revenue, 60.0);
        assert_eq!(forecast.total_profit, 30.0);
    }

    #[test]
    fn zero_months_is_empty() {
        let forecast = compute_seo_forecast(&SeoParams {
            forecast_months: 0,
            ..SeoParams::default()
        });
        assert!(forecast.months.is_empty());
        assert_eq!(forecast, SeoForecast::default());
    }

    #[test]
    fn months_are_ordered() {
        let forecast = compute_seo_forecast(&SeoParams::default());
        let indices: Vec<u32> = forecast.months.iter().map(|m| m.month).collect();
        assert_eq!(indices, (1..=12).collect::<Vec<_>>());
    }

    proptest! {
        #[test]
        fn series_length_and_cost_total(
            months in 1u32..=36,
            traffic in 0.0f64..100_000.0,
            rate in 1.0f64..20.0,
            aov in 0.0f64..1_000.0,
            campaign in 0u32..10_000,
            other in 0u32..10_000,
        ) {
            let params = SeoParams {
                monthly_traffic_increase: traffic,
                conversion_rate_pct: rate,
                average_order_value: aov,
                seo_campaign_cost: campaign as f64,
                other_costs: other as f64,
                forecast_months: months,
            };
            let forecast = compute_seo_forecast(&params);
            prop_assert_eq!(forecast.months.len(), months as usize);
            let expected = months as f64 * (campaign as f64 + other as f64);
            prop_assert_eq!(forecast.total_costs, expected);
            prop_assert_eq!(compute_seo_forecast(&params), forecast);
        }
    }
}
