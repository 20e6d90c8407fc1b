use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::currency::Currency;

/// Application-wide state shared through context. Calculator inputs are not
/// stored here; each calculator page owns its own parameters.
#[derive(Clone, Debug, Default)]
pub struct AppState {
    /// Default currency, edited only on the settings page.
    pub currency: Currency,
    pub export_dir: Option<PathBuf>,
    pub log_filter: Option<String>,
}

impl AppState {
    /// Currency a calculator starts with. Picks made on the calculator stay
    /// local to that page.
    pub fn calculator_currency(&self) -> Currency {
        self.currency
    }

    pub fn apply_persisted(&mut self, persisted: PersistedState) {
        self.currency = persisted.currency;
        self.export_dir = persisted.export_dir;
        self.log_filter = persisted.log_filter;
    }

    pub fn to_persisted(&self) -> PersistedState {
        PersistedState {
            currency: self.currency,
            export_dir: self.export_dir.clone(),
            log_filter: self.log_filter.clone(),
        }
    }
}

/// On-disk preferences. Every field has a default so older or hand-edited
/// files still load.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PersistedState {
    #[serde(default)]
    pub currency: Currency,
    #[serde(default)]
    pub export_dir: Option<PathBuf>,
    #[serde(default)]
    pub log_filter: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let parsed: PersistedState = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, PersistedState::default());

        let parsed: PersistedState = serde_json::from_str(r#"{"currency":"Eur"}"#).unwrap();
        assert_eq!(parsed.currency, Currency::Eur);
        assert_eq!(parsed.export_dir, None);
    }

    #[test]
    fn calculator_starts_from_saved_default() {
        let mut state = AppState::default();
        assert_eq!(state.calculator_currency(), Currency::default());

        state.apply_persisted(PersistedState {
            currency: Currency::Jpy,
            ..PersistedState::default()
        });
        let before = state.to_persisted();
        let mut picked = state.calculator_currency();
        assert_eq!(picked, Currency::Jpy);
        picked = Currency::Eur;
        assert_ne!(state.calculator_currency(), picked);
        assert_eq!(state.to_persisted(), before);
    }

    #[test]
    fn state_round_trips_through_persisted_form() {
        let mut state = AppState::default();
        state.apply_persisted(PersistedState {
            currency: Currency::Chf,
            export_dir: Some(PathBuf::from("/tmp/reports")),
            log_filter: Some("debug".to_string()),
        });
        let persisted = state.to_persisted();
        assert_eq!(persisted.currency, Currency::Chf);
        assert_eq!(persisted.export_dir, Some(PathBuf::from("/tmp/reports")));
        assert_eq!(persisted.log_filter.as_deref(), Some("debug"));
    }
}
