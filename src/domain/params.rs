use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// Campaign length the ABM chart is spread over.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Timeframe {
    OneMonth,
    ThreeMonths,
    SixMonths,
    #[default]
    TwelveMonths,
}

impl Timeframe {
    pub const ALL: [Timeframe; 4] = [
        Timeframe::OneMonth,
        Timeframe::ThreeMonths,
        Timeframe::SixMonths,
        Timeframe::TwelveMonths,
    ];

    pub fn months(&self) -> u32 {
        match self {
            Timeframe::OneMonth => 1,
            Timeframe::ThreeMonths => 3,
            Timeframe::SixMonths => 6,
            Timeframe::TwelveMonths => 12,
        }
    }

    pub fn from_months(months: u32) -> Option<Timeframe> {
        Self::ALL.into_iter().find(|t| t.months() == months)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Timeframe::OneMonth => "1 Month",
            Timeframe::ThreeMonths => "3 Months",
            Timeframe::SixMonths => "6 Months",
            Timeframe::TwelveMonths => "12 Months",
        }
    }
}

/// Inputs of the account-based marketing calculator. Rates are percentages.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AbmParams {
    pub target_accounts: f64,
    pub contacts_per_account: f64,
    pub outreach_cadence: f64,
    pub timeframe: Timeframe,
    pub contact_rate_pct: f64,
    pub response_rate_pct: f64,
    pub meeting_rate_pct: f64,
    pub opportunity_rate_pct: f64,
    pub close_rate_pct: f64,
    pub cost_per_contact: f64,
    pub cost_per_outreach: f64,
    pub average_deal_size: f64,
}

impl Default for AbmParams {
    fn default() -> Self {
        Self {
            target_accounts: 100.0,
            contacts_per_account: 3.0,
            outreach_cadence: 5.0,
            timeframe: Timeframe::TwelveMonths,
            contact_rate_pct: 20.0,
            response_rate_pct: 5.0,
            meeting_rate_pct: 20.0,
            opportunity_rate_pct: 30.0,
            close_rate_pct: 10.0,
            cost_per_contact: 1.0,
            cost_per_outreach: 0.5,
            average_deal_size: 5000.0,
        }
    }
}

/// Inputs of the SEO calculator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SeoParams {
    pub monthly_traffic_increase: f64,
    pub conversion_rate_pct: f64,
    pub average_order_value: f64,
    pub seo_campaign_cost: f64,
    pub other_costs: f64,
    pub forecast_months: u32,
}

impl Default for SeoParams {
    fn default() -> Self {
        Self {
            monthly_traffic_increase: 1100.0,
            conversion_rate_pct: 2.0,
            average_order_value: 60.0,
            seo_campaign_cost: 1100.0,
            other_costs: 0.0,
            forecast_months: 12,
        }
    }
}

/// Every editable field across both calculators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParamField {
    TargetAccounts,
    ContactsPerAccount,
    OutreachCadence,
    Timeframe,
    ContactRate,
    ResponseRate,
    MeetingRate,
    OpportunityRate,
    CloseRate,
    CostPerContact,
    CostPerOutreach,
    AverageDealSize,
    MonthlyTrafficIncrease,
    ConversionRate,
    AverageOrderValue,
    SeoCampaignCost,
    OtherCosts,
    ForecastMonths,
}

impl ParamField {
    pub fn label(&self) -> &'static str {
        match self {
            Self::TargetAccounts => "Target Account List Size",
            Self::ContactsPerAccount => "Number of Contacts per Account",
            Self::OutreachCadence => "Outreach Cadence",
            Self::Timeframe => "Timeframe (Months)",
            Self::ContactRate => "Initial Contact Rate (%)",
            Self::ResponseRate => "Response Rate (%)",
            Self::MeetingRate => "Meeting Booked Rate (%)",
            Self::OpportunityRate => "Opportunity Creation Rate (%)",
            Self::CloseRate => "Close Rate (%)",
            Self::CostPerContact => "Cost per Contact",
            Self::CostPerOutreach => "Cost per Outreach",
            Self::AverageDealSize => "Average Deal Size",
            Self::MonthlyTrafficIncrease => "Estimated Monthly Traffic Growth",
            Self::ConversionRate => "Expected Conversion Rate (%)",
            Self::AverageOrderValue => "Projected Revenue Per Customer",
            Self::SeoCampaignCost => "Planned Monthly SEO Investment",
            Self::OtherCosts => "Additional Monthly Expenses (Optional)",
            Self::ForecastMonths => "Planning Timeline (Months)",
        }
    }

    pub fn help(&self) -> &'static str {
        match self {
            Self::TargetAccounts => {
                "The total number of accounts you are specifically targeting with this ABM campaign."
            }
            Self::ContactsPerAccount => {
                "The average number of individual contacts you plan to engage within each target account."
            }
            Self::OutreachCadence => {
                "The number of outreach touches each contact receives over the campaign."
            }
            Self::Timeframe => "The duration of the campaign the results are spread over.",
            Self::ContactRate => "The percentage of outreach that reaches a contact.",
            Self::ResponseRate => "The percentage of reached contacts that respond.",
            Self::MeetingRate => "The percentage of responses that turn into a booked meeting.",
            Self::OpportunityRate => "The percentage of meetings that become a sales opportunity.",
            Self::CloseRate => "The percentage of opportunities that close as won deals.",
            Self::CostPerContact => "The cost of sourcing and enriching one contact.",
            Self::CostPerOutreach => "The cost of sending one outreach message.",
            Self::AverageDealSize => "The average revenue of one closed deal.",
            Self::MonthlyTrafficIncrease => {
                "Enter the estimated increase in monthly website traffic."
            }
            Self::ConversionRate => {
                "Set the expected percentage of website visitors who will convert into customers."
            }
            Self::AverageOrderValue => "Enter the average revenue generated per customer.",
            Self::SeoCampaignCost => "Enter the planned monthly investment for SEO activities.",
            Self::OtherCosts => "Enter any additional monthly expenses related to the campaign.",
            Self::ForecastMonths => "Set the planning timeline in months.",
        }
    }

    /// Slider bounds; `None` for free-form number fields.
    pub fn slider_range(&self) -> Option<RangeInclusive<u32>> {
        match self {
            Self::TargetAccounts => Some(0..=500),
            Self::ContactsPerAccount | Self::OutreachCadence => Some(0..=10),
            Self::ContactRate
            | Self::ResponseRate
            | Self::MeetingRate
            | Self::OpportunityRate
            | Self::CloseRate => Some(0..=100),
            Self::ConversionRate => Some(1..=20),
            Self::ForecastMonths => Some(1..=36),
            _ => None,
        }
    }
}

/// Parses number-field text. Malformed input becomes `NaN` and flows into the
/// forecast unchanged; negative values are kept as typed.
pub fn parse_number(text: &str) -> f64 {
    text.trim().parse::<f64>().unwrap_or(f64::NAN)
}

/// Parses slider text, which the control always produces as an integer.
pub fn parse_slider(text: &str) -> Option<u32> {
    text.trim().parse::<f64>().ok().map(|v| v.max(0.0).round() as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeframe_accepts_only_known_lengths() {
        assert_eq!(Timeframe::from_months(1), Some(Timeframe::OneMonth));
        assert_eq!(Timeframe::from_months(12), Some(Timeframe::TwelveMonths));
        assert_eq!(Timeframe::from_months(0), None);
        assert_eq!(Timeframe::from_months(24), None);
        assert_eq!(Timeframe::default().months(), 12);
    }

    #[test]
    fn number_fields_propagate_nan_and_keep_negatives() {
        assert_eq!(parse_number(" 42.5 "), 42.5);
        assert_eq!(parse_number("-3"), -3.0);
        assert!(parse_number("").is_nan());
        assert!(parse_number("12abc").is_nan());
    }

    #[test]
    fn slider_values_are_integers() {
        assert_eq!(parse_slider("250"), Some(250));
        assert_eq!(parse_slider("7.0"), Some(7));
        assert_eq!(parse_slider("x"), None);
    }

    #[test]
    fn only_sliders_have_ranges() {
        assert_eq!(ParamField::TargetAccounts.slider_range(), Some(0..=500));
        assert_eq!(ParamField::ForecastMonths.slider_range(), Some(1..=36));
        assert_eq!(ParamField::CostPerContact.slider_range(), None);
        assert_eq!(ParamField::MonthlyTrafficIncrease.slider_range(), None);
    }

    #[test]
    fn defaults_match_calculator_mount_values() {
        let abm = AbmParams::default();
        assert_eq!(abm.target_accounts, 100.0);
        assert_eq!(abm.cost_per_outreach, 0.5);
        let seo = SeoParams::default();
        assert_eq!(seo.forecast_months, 12);
        assert_eq!(seo.conversion_rate_pct, 2.0);
    }
}
