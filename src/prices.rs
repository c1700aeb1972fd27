use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Hardcoded symbol -> per-share price mapping. Not editable at runtime.
#[derive(Clone, Debug)]
pub struct PriceTable {
    entries: Vec<(&'static str, Decimal)>,
}

impl PriceTable {
    pub fn new() -> Self {
        Self {
            entries: vec![
                ("AAPL", dec!(180.0)),
                ("TSLA", dec!(250.0)),
                ("GOOG", dec!(2750.0)),
                ("MSFT", dec!(330.0)),
                ("AMZN", dec!(130.0)),
            ],
        }
    }

    /// Case-sensitive lookup; callers uppercase user input first.
    pub fn get(&self, ticker: &str) -> Option<Decimal> {
        self.entries
            .iter()
            .find(|(symbol, _)| *symbol == ticker)
            .map(|(_, price)| *price)
    }

    pub fn iter(&self) -> impl Iterator<Item = &(&'static str, Decimal)> {
        self.entries.iter()
    }
}

impl Default for PriceTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listed_symbols_resolve() {
        let prices = PriceTable::new();
        assert_eq!(prices.get("AAPL"), Some(dec!(180.0)));
        assert_eq!(prices.get("AMZN"), Some(dec!(130.0)));
    }

    #[test]
    fn unknown_symbol_is_none() {
        let prices = PriceTable::new();
        assert_eq!(prices.get("ZZZZ"), None);
        // lookup is case-sensitive, input is uppercased before it gets here
        assert_eq!(prices.get("aapl"), None);
    }

    #[test]
    fn listing_order_is_stable() {
        let prices = PriceTable::new();
        let first = prices.iter().next().map(|(symbol, _)| *symbol);
        assert_eq!(first, Some("AAPL"));
        assert_eq!(prices.iter().count(), 5);
    }
}
