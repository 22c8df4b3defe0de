//! Market and currency identifiers

use std::fmt;

/// Canonical form of a market (`BTC-LTC`) or currency (`LTC`) identifier.
///
/// The exchange expects upper case; lowercase input is accepted and normalised.
pub fn canonical(id: &str) -> String {
    id.to_ascii_uppercase()
}

/// Filter for history and open-order queries
///
/// The reserved token `"all"` removes the filter entirely instead of being
/// sent to the exchange.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MarketSelector {
    /// Every market or currency
    All,
    /// A single market or currency, stored in canonical case
    Only(String),
}

impl MarketSelector {
    /// Reserved token that selects everything
    pub const ALL: &'static str = "all";

    /// Create a selector for a single market or currency
    pub fn only(id: &str) -> Self {
        Self::Only(canonical(id))
    }

    /// Value of the filter parameter, or `None` when nothing is filtered
    pub fn as_filter(&self) -> Option<&str> {
        match self {
            Self::All => None,
            Self::Only(id) => Some(id),
        }
    }
}

impl From<&str> for MarketSelector {
    fn from(s: &str) -> Self {
        if s == Self::ALL {
            Self::All
        } else {
            Self::only(s)
        }
    }
}

impl From<String> for MarketSelector {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl fmt::Display for MarketSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(Self::ALL),
            Self::Only(id) => f.write_str(id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_has_no_filter() {
        let selector = MarketSelector::from("all");
        assert_eq!(selector, MarketSelector::All);
        assert_eq!(selector.as_filter(), None);
        assert_eq!(selector.to_string(), "all");
    }

    #[test]
    fn test_specific_market_is_uppercased() {
        let selector = MarketSelector::from("btc-ltc");
        assert_eq!(selector.as_filter(), Some("BTC-LTC"));
    }

    #[test]
    fn test_only_the_exact_token_is_reserved() {
        // "ALL" is a literal value, not the reserved token
        assert_eq!(MarketSelector::from("ALL").as_filter(), Some("ALL"));
    }

    #[test]
    fn test_canonical() {
        assert_eq!(canonical("usdt-btc"), "USDT-BTC");
        assert_eq!(canonical("LTC"), "LTC");
    }
}
