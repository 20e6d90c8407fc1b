//! ABM campaign report: document assembly and PDF export.

pub mod pdf;

#[allow(unused_imports)]
pub use pdf::{export_abm_report, render_pdf, resolve_export_dir, ExportError, REPORT_FILENAME};

use std::sync::OnceLock;

use time::{macros::format_description, Date, OffsetDateTime, UtcOffset};

use crate::{
    chart::ChartSnapshot,
    domain::{format_fixed, format_money_plain, AbmForecast, AbmParams, Currency},
};

pub const REPORT_TITLE: &str = "ABM Campaign Forecasting Tool";

#[derive(Clone, Debug, PartialEq)]
pub struct ReportSection {
    pub heading: &'static str,
    pub lines: Vec<String>,
}

/// A two-page report: text sections on the first page, chart on the second.
#[derive(Clone, Debug, PartialEq)]
pub struct ReportDocument {
    pub title: &'static str,
    pub date_line: String,
    pub sections: Vec<ReportSection>,
    pub chart: ChartSnapshot,
}

/// Input values print as typed: `0.5`, `100`, never padded to two places.
fn as_typed(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else if value.is_infinite() {
        if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else {
        value.to_string()
    }
}

static LOCAL_OFFSET: OnceLock<UtcOffset> = OnceLock::new();

/// Records the local UTC offset. The lookup is refused once other threads are
/// running, so this has to happen before launch.
pub fn capture_local_offset() {
    let offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);
    let _ = LOCAL_OFFSET.set(offset);
}

/// The calendar date stamped on reports.
pub fn today() -> Date {
    let offset = LOCAL_OFFSET.get().copied().unwrap_or(UtcOffset::UTC);
    OffsetDateTime::now_utc().to_offset(offset).date()
}

pub fn format_report_date(date: Date) -> String {
    let format = format_description!("[month padding:none]/[day padding:none]/[year]");
    date.format(&format).unwrap_or_else(|_| date.to_string())
}

pub fn build_abm_report(
    params: &AbmParams,
    forecast: &AbmForecast,
    currency: Currency,
    date: Date,
    chart: ChartSnapshot,
) -> ReportDocument {
    let pct = |v: f64| format!("{}%", as_typed(v));
    let priced = |v: f64| format!("{} {}", currency.symbol(), as_typed(v));
    let sections = vec![
        ReportSection {
            heading: "Target Audience & Reach",
            lines: vec![
                format!("Target Accounts: {}", as_typed(params.target_accounts)),
                format!("Contacts per Account: {}", as_typed(params.contacts_per_account)),
            ],
        },
        ReportSection {
            heading: "Outreach & Engagement",
            lines: vec![
                format!("Outreach Cadence: {}", as_typed(params.outreach_cadence)),
                format!("Timeframe: {}", params.timeframe.months()),
                format!("Contact Rate: {}", pct(params.contact_rate_pct)),
                format!("Response Rate: {}", pct(params.response_rate_pct)),
                format!("Meeting Rate: {}", pct(params.meeting_rate_pct)),
                format!("Opportunity Rate: {}", pct(params.opportunity_rate_pct)),
                format!("Close Rate: {}", pct(params.close_rate_pct)),
            ],
        },
        ReportSection {
            heading: "Time & Cost",
            lines: vec![
                format!("Cost per Contact: {}", priced(params.cost_per_contact)),
                format!("Cost per Outreach: {}", priced(params.cost_per_outreach)),
            ],
        },
        ReportSection {
            heading: "Deal Value",
            lines: vec![format!("Average Deal Size: {}", priced(params.average_deal_size))],
        },
        ReportSection {
            heading: "Projected Profit and Loss Summary",
            lines: vec![
                format!("Total Revenue: {}", format_money_plain(currency, forecast.total_revenue)),
                format!("Total Cost: {}", format_money_plain(currency, forecast.total_cost)),
                format!("Profit: {}", format_money_plain(currency, forecast.profit)),
                format!("Deals Closed: {}", format_fixed(forecast.deals_closed, 0)),
                format!("ROI: {}%", format_fixed(forecast.roi, 2)),
            ],
        },
    ];

    ReportDocument {
        title: REPORT_TITLE,
        date_line: format!("Date: {}", format_report_date(date)),
        sections,
        chart,
    }
}
