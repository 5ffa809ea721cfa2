//! Point-in-time bundle of quotes across all exchanges.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::exchange::ExchangeId;
use super::symbol::Symbol;

/// One exchange's reported spot price, or `None` if it was unavailable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ExchangeQuote {
    pub exchange: ExchangeId,
    pub price: Option<f64>,
}

/// Immutable snapshot of quotes for one symbol.
///
/// The quote map always holds exactly the keys in [`ExchangeId::ALL`];
/// an exchange that did not report is present with a `None` price.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceSnapshot {
    symbol: Symbol,
    quotes: BTreeMap<ExchangeId, Option<f64>>,
    captured_at: DateTime<Utc>,
}

impl PriceSnapshot {
    /// Assemble a snapshot from whatever quotes were collected.
    ///
    /// Exchanges missing from `quotes` are filled in as absent. Non-finite
    /// prices are stored as absent too, so every known price is finite.
    pub fn new(
        symbol: Symbol,
        quotes: impl IntoIterator<Item = ExchangeQuote>,
        captured_at: DateTime<Utc>,
    ) -> Self {
        let mut map: BTreeMap<ExchangeId, Option<f64>> =
            ExchangeId::ALL.into_iter().map(|id| (id, None)).collect();
        for quote in quotes {
            map.insert(quote.exchange, quote.price.filter(|p| p.is_finite()));
        }
        Self {
            symbol,
            quotes: map,
            captured_at,
        }
    }

    pub fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    pub fn captured_at(&self) -> DateTime<Utc> {
        self.captured_at
    }

    /// Price for one exchange, if it reported one.
    #[must_use]
    pub fn price(&self, exchange: ExchangeId) -> Option<f64> {
        self.quotes.get(&exchange).copied().flatten()
    }

    /// All quotes in canonical exchange order.
    pub fn quotes(&self) -> impl Iterator<Item = ExchangeQuote> + '_ {
        self.quotes.iter().map(|(&exchange, &price)| ExchangeQuote { exchange, price })
    }

    /// Number of exchanges with a known price.
    #[must_use]
    pub fn known_count(&self) -> usize {
        self.quotes.values().filter(|p| p.is_some()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quote(exchange: ExchangeId, price: Option<f64>) -> ExchangeQuote {
        ExchangeQuote { exchange, price }
    }

    #[test]
    fn always_contains_every_exchange() {
        let snapshot = PriceSnapshot::new(
            Symbol::default(),
            [quote(ExchangeId::Kraken, Some(50_000.0))],
            Utc::now(),
        );

        let exchanges: Vec<_> = snapshot.quotes().map(|q| q.exchange).collect();
        assert_eq!(exchanges, ExchangeId::ALL.to_vec());
        assert_eq!(snapshot.known_count(), 1);
        assert_eq!(snapshot.price(ExchangeId::Kraken), Some(50_000.0));
        assert_eq!(snapshot.price(ExchangeId::Binance), None);
    }

    #[test]
    fn non_finite_prices_are_stored_as_absent() {
        let snapshot = PriceSnapshot::new(
            Symbol::default(),
            [
                quote(ExchangeId::Binance, Some(f64::NAN)),
                quote(ExchangeId::Coinbase, Some(f64::INFINITY)),
            ],
            Utc::now(),
        );

        assert_eq!(snapshot.known_count(), 0);
    }

    #[test]
    fn serializes_quotes_keyed_by_exchange_name() {
        let snapshot = PriceSnapshot::new(
            Symbol::new("eth").unwrap(),
            [quote(ExchangeId::Bitstamp, Some(3_000.5))],
            Utc::now(),
        );

        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["symbol"], "ETH");
        assert_eq!(json["quotes"]["bitstamp"], 3_000.5);
        assert!(json["quotes"]["kucoin"].is_null());
    }
}
