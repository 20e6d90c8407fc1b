use serde::{Deserialize, Serialize};

/// Currency label prefixed to monetary values.
///
/// Selecting a currency only changes the symbol; amounts are never converted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    #[default]
    Usd,
    Eur,
    Gbp,
    Jpy,
    Inr,
    Cad,
    Aud,
    Chf,
    Cny,
    Krw,
}

impl Currency {
    pub const ALL: [Currency; 10] = [
        Currency::Usd,
        Currency::Eur,
        Currency::Gbp,
        Currency::Jpy,
        Currency::Inr,
        Currency::Cad,
        Currency::Aud,
        Currency::Chf,
        Currency::Cny,
        Currency::Krw,
    ];

    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Eur => "€",
            Currency::Gbp => "£",
            Currency::Jpy => "¥",
            Currency::Inr => "₹",
            Currency::Cad => "C$",
            Currency::Aud => "A$",
            Currency::Chf => "CHF",
            Currency::Cny => "CN¥",
            Currency::Krw => "KR₩",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Currency::Usd => "USD - US Dollar",
            Currency::Eur => "EUR - Euro",
            Currency::Gbp => "GBP - British Pound",
            Currency::Jpy => "JPY - Japanese Yen",
            Currency::Inr => "INR - Indian Rupee",
            Currency::Cad => "CAD - Canadian Dollar",
            Currency::Aud => "AUD - Australian Dollar",
            Currency::Chf => "CHF - Swiss Franc",
            Currency::Cny => "CNY - Chinese Yuan",
            Currency::Krw => "KRW - South Korean Won",
        }
    }

    /// Looks a currency up by its symbol, as stored in a `<select>` value.
    pub fn from_symbol(symbol: &str) -> Option<Currency> {
        Self::ALL.into_iter().find(|c| c.symbol() == symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_are_unique_and_resolvable() {
        for currency in Currency::ALL {
            assert_eq!(Currency::from_symbol(currency.symbol()), Some(currency));
        }
        assert_eq!(Currency::from_symbol("XYZ"), None);
    }

    #[test]
    fn default_is_us_dollar() {
        assert_eq!(Currency::default().symbol(), "$");
        assert_eq!(Currency::default().label(), "USD - US Dollar");
    }
}
