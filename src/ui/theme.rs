//! Class helpers so both calculators share one look with their own accent.

use crate::domain::MetricTone;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Accent {
    #[default]
    Neutral,
    Seo,
    Abm,
}

impl Accent {
    fn class(&self) -> &'static str {
        match self {
            Accent::Neutral => "",
            Accent::Seo => "accent-seo",
            Accent::Abm => "accent-abm",
        }
    }
}

pub fn nav_link(accent: Accent, active: bool) -> String {
    if active {
        format!("nav-link active {}", accent.class())
    } else {
        "nav-link".to_string()
    }
}

pub fn card_link(accent: Accent) -> String {
    format!("card-link {}", accent.class())
}

pub fn summary(accent: Accent) -> String {
    format!("summary {}", accent.class())
}

pub fn btn_primary(accent: Accent) -> String {
    format!("btn {}", accent.class())
}

pub fn metric_value(tone: MetricTone) -> &'static str {
    match tone {
        MetricTone::Neutral => "metric-value",
        MetricTone::Positive => "metric-value tone-positive",
        MetricTone::Negative => "metric-value tone-negative",
    }
}
