//! Forecast calculations and the state they are driven by.

pub mod abm;
pub mod app_state;
pub mod currency;
pub mod params;
pub mod seo;
pub mod summary;

#[allow(unused_imports)]
pub use abm::{abm_monthly_series, compute_abm_forecast, AbmForecast, AbmMonthlySeries};
#[allow(unused_imports)]
pub use app_state::{AppState, PersistedState};
#[allow(unused_imports)]
pub use currency::Currency;
#[allow(unused_imports)]
pub use params::{parse_number, parse_slider, AbmParams, ParamField, SeoParams, Timeframe};
#[allow(unused_imports)]
pub use seo::{compute_seo_forecast, SeoForecast, SeoMonth};
#[allow(unused_imports)]
pub use summary::{
    abm_summary, format_count, format_fixed, format_grouped, format_money, format_money_plain,
    format_percent, seo_summary, MetricTone, SummaryMetric,
};
