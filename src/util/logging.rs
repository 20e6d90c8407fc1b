use tracing_subscriber::EnvFilter;

pub const DEFAULT_FILTER: &str = "campaign_forecaster=info";

/// `RUST_LOG` wins over the saved preference, which wins over the default.
pub fn resolve_filter(env: Option<&str>, preference: Option<&str>) -> String {
    env.or(preference)
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .unwrap_or(DEFAULT_FILTER)
        .to_string()
}

/// Checks directives before they are saved as a preference.
pub fn validate_filter(directives: &str) -> Result<(), String> {
    EnvFilter::try_new(directives)
        .map(|_| ())
        .map_err(|err| err.to_string())
}

pub fn init(preference: Option<&str>) {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let directives = resolve_filter(env.as_deref(), preference);
    let filter = EnvFilter::try_new(&directives).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    if tracing_subscriber::fmt().with_env_filter(filter).try_init().is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_precedence() {
        assert_eq!(resolve_filter(None, None), DEFAULT_FILTER);
        assert_eq!(resolve_filter(None, Some("debug")), "debug");
        assert_eq!(resolve_filter(Some("trace"), Some("debug")), "trace");
        assert_eq!(resolve_filter(Some("  "), None), DEFAULT_FILTER);
    }

    #[test]
    fn rejects_malformed_directives() {
        assert!(validate_filter("campaign_forecaster=debug").is_ok());
        assert!(validate_filter("campaign_forecaster=loud").is_err());
    }
}
