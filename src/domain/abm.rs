//! Account-based marketing forecast: funnel conversion and even monthly spread.

use super::params::{AbmParams, Timeframe};

#[derive(Clone, Debug, PartialEq)]
pub struct AbmForecast {
    pub total_contacts: f64,
    pub total_outreach_messages: f64,
    pub total_revenue: f64,
    pub total_cost: f64,
    pub profit: f64,
    pub deals_closed: f64,
    /// Percentage; 0 when the campaign costs nothing.
    pub roi: f64,
}

pub fn compute_abm_forecast(params: &AbmParams) -> AbmForecast {
    let total_contacts = params.target_accounts * params.contacts_per_account;
    let total_outreach_messages = total_contacts * params.outreach_cadence;
    let total_cost = total_contacts * params.cost_per_contact
        + total_outreach_messages * params.cost_per_outreach;

    let deals_closed = total_contacts
        * params.outreach_cadence
        * (params.contact_rate_pct / 100.0)
        * (params.response_rate_pct / 100.0)
        * (params.meeting_rate_pct / 100.0)
        * (params.opportunity_rate_pct / 100.0)
        * (params.close_rate_pct / 100.0);

    let total_revenue = deals_closed * params.average_deal_size;
    let profit = total_revenue - total_cost;
    let roi = if total_cost == 0.0 {
        0.0
    } else {
        (profit / total_cost) * 100.0
    };

    AbmForecast {
        total_contacts,
        total_outreach_messages,
        total_revenue,
        total_cost,
        profit,
        deals_closed,
        roi,
    }
}

/// Per-month chart data derived from the campaign totals.
#[derive(Clone, Debug, PartialEq)]
pub struct AbmMonthlySeries {
    pub labels: Vec<String>,
    pub cumulative_revenue: Vec<f64>,
    pub monthly_cost: Vec<f64>,
    pub cumulative_profit: Vec<f64>,
}

/// Spreads the totals evenly over the timeframe. This is a linear amortization,
/// not a month-by-month simulation of the funnel.
pub fn abm_monthly_series(
    timeframe: Timeframe,
    total_revenue: f64,
    total_cost: f64,
) -> AbmMonthlySeries {
    let months = timeframe.months() as usize;
    let monthly_revenue = total_revenue / months as f64;
    let monthly_cost = total_cost / months as f64;

    let labels = (1..=months).map(|m| format!("Month {m}")).collect();

    let mut cumulative_revenue = Vec::with_capacity(months);
    let mut running = 0.0;
    for _ in 0..months {
        running += monthly_revenue;
        cumulative_revenue.push(running);
    }

    let cumulative_profit = cumulative_revenue
        .iter()
        .enumerate()
        .map(|(idx, revenue)| revenue - monthly_cost * (idx + 1) as f64)
        .collect();

    AbmMonthlySeries {
        labels,
        cumulative_revenue,
        monthly_cost: vec![monthly_cost; months],
        cumulative_profit,
    }
}
