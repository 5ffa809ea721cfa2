//! Fee-adjusted arbitrage P/L and the all-pairs sweep.
//!
//! Everything here is pure: the same snapshot and fee schedule always
//! produce the same opportunities, in the same order.

use std::cmp::Ordering;

use serde::Serialize;

use super::exchange::ExchangeId;
use super::fee::FeeSpec;
use super::snapshot::PriceSnapshot;

/// Outcome of buying on one venue and selling on another.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ArbitrageResult {
    pub gross_profit: f64,
    pub total_fees: f64,
    /// Always exactly `gross_profit - total_fees`.
    pub net_profit: f64,
}

/// Directional opportunity: buy on `from_exchange`, sell on `to_exchange`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ArbitrageOpportunity {
    pub from_exchange: ExchangeId,
    pub to_exchange: ExchangeId,
    pub net_profit: f64,
}

impl ArbitrageOpportunity {
    /// Label in the `buy→sell` form used by charts.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}→{}", self.from_exchange, self.to_exchange)
    }
}

/// Fee-adjusted profit for a single buy/sell pair.
///
/// Prices are assumed present and finite; inputs are not range-checked,
/// so negative quantities or fees propagate arithmetically.
#[must_use]
pub fn compute_arbitrage(
    buy_price: f64,
    sell_price: f64,
    quantity: f64,
    fees: &FeeSpec,
) -> ArbitrageResult {
    let total_fees = fees.buy_fee(buy_price, quantity)
        + fees.sell_fee(sell_price, quantity)
        + fees.transfer_fee_flat;
    let gross_profit = (sell_price - buy_price) * quantity;

    ArbitrageResult {
        gross_profit,
        total_fees,
        net_profit: gross_profit - total_fees,
    }
}

/// Net profit for every ordered pair of exchanges with known prices.
///
/// Output follows the canonical exchange order with the buy venue in the
/// outer loop. Pairs missing either price are skipped, so a snapshot with
/// `k` known prices yields `k * (k - 1)` opportunities.
#[must_use]
pub fn compute_all_opportunities(
    snapshot: &PriceSnapshot,
    quantity: f64,
    fees: &FeeSpec,
) -> Vec<ArbitrageOpportunity> {
    let mut opportunities = Vec::new();

    for from in ExchangeId::ALL {
        let Some(buy_price) = snapshot.price(from) else {
            continue;
        };
        for to in ExchangeId::ALL {
            if from == to {
                continue;
            }
            let Some(sell_price) = snapshot.price(to) else {
                continue;
            };
            let result = compute_arbitrage(buy_price, sell_price, quantity, fees);
            opportunities.push(ArbitrageOpportunity {
                from_exchange: from,
                to_exchange: to,
                net_profit: result.net_profit,
            });
        }
    }

    opportunities
}

/// Sort opportunities by net profit, best first. Ties keep sweep order.
pub fn rank_by_net_profit(opportunities: &mut [ArbitrageOpportunity]) {
    opportunities.sort_by(|a, b| {
        b.net_profit
            .partial_cmp(&a.net_profit)
            .unwrap_or(Ordering::Equal)
    });
}

/// The opportunity with the highest net profit, if any.
#[must_use]
pub fn best_opportunity(opportunities: &[ArbitrageOpportunity]) -> Option<ArbitrageOpportunity> {
    opportunities.iter().copied().reduce(|best, candidate| {
        if candidate.net_profit > best.net_profit {
            candidate
        } else {
            best
        }
    })
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::domain::{ExchangeQuote, Symbol};

    const EPS: f64 = 1e-9;

    fn snapshot(prices: &[(ExchangeId, f64)]) -> PriceSnapshot {
        PriceSnapshot::new(
            Symbol::default(),
            prices.iter().map(|&(exchange, price)| ExchangeQuote {
                exchange,
                price: Some(price),
            }),
            Utc::now(),
        )
    }

    fn sample_fees() -> FeeSpec {
        FeeSpec::new(0.1, 0.1, 10.0)
    }

    #[test]
    fn buy_low_sell_high_with_fees() {
        let result = compute_arbitrage(50_000.0, 50_500.0, 1.0, &sample_fees());

        assert!((result.gross_profit - 500.0).abs() < EPS);
        assert!((result.total_fees - 110.5).abs() < EPS);
        assert!((result.net_profit - 389.5).abs() < EPS);
    }

    #[test]
    fn net_is_exactly_gross_minus_fees() {
        let cases = [
            (101.3, 99.7, 3.25, FeeSpec::new(0.25, 0.4, 1.5)),
            (0.000_123, 0.000_125, 1_000_000.0, FeeSpec::new(0.1, 0.1, 0.0)),
            (2_000.0, 2_100.0, -2.0, FeeSpec::new(-0.05, 0.2, 3.0)),
        ];

        for (buy, sell, quantity, fees) in cases {
            let result = compute_arbitrage(buy, sell, quantity, &fees);
            assert_eq!(result.net_profit, result.gross_profit - result.total_fees);
            assert_eq!(result.gross_profit, (sell - buy) * quantity);
        }
    }

    #[test]
    fn zero_fee_spec_leaves_gross_untouched() {
        let result = compute_arbitrage(100.0, 110.0, 2.0, &FeeSpec::default());
        assert_eq!(result.total_fees, 0.0);
        assert_eq!(result.net_profit, 20.0);
    }

    #[test]
    fn sweep_emits_k_times_k_minus_one_pairs() {
        let all = [
            (ExchangeId::Binance, 50_000.0),
            (ExchangeId::Coinbase, 50_500.0),
            (ExchangeId::Kraken, 49_900.0),
            (ExchangeId::Bitstamp, 50_100.0),
            (ExchangeId::Kucoin, 50_050.0),
        ];

        for k in 0..=all.len() {
            let opportunities =
                compute_all_opportunities(&snapshot(&all[..k]), 1.0, &sample_fees());
            let expected = if k < 2 { 0 } else { k * (k - 1) };
            assert_eq!(opportunities.len(), expected, "k = {k}");
        }
    }

    #[test]
    fn sweep_skips_identity_and_missing_legs() {
        let snap = snapshot(&[
            (ExchangeId::Binance, 50_000.0),
            (ExchangeId::Bitstamp, 50_200.0),
        ]);

        let opportunities = compute_all_opportunities(&snap, 1.0, &FeeSpec::default());

        assert_eq!(opportunities.len(), 2);
        assert!(opportunities.iter().all(|o| o.from_exchange != o.to_exchange));
        assert_eq!(opportunities[0].label(), "binance→bitstamp");
        assert_eq!(opportunities[1].label(), "bitstamp→binance");
    }

    #[test]
    fn sweep_with_single_known_price_is_empty() {
        let snap = snapshot(&[(ExchangeId::Binance, 50_000.0)]);
        assert!(compute_all_opportunities(&snap, 1.0, &sample_fees()).is_empty());
    }

    #[test]
    fn sweep_follows_canonical_order() {
        let snap = snapshot(&[
            (ExchangeId::Kucoin, 10.0),
            (ExchangeId::Binance, 11.0),
            (ExchangeId::Kraken, 12.0),
        ]);

        let labels: Vec<String> = compute_all_opportunities(&snap, 1.0, &FeeSpec::default())
            .iter()
            .map(ArbitrageOpportunity::label)
            .collect();

        assert_eq!(
            labels,
            [
                "binance→kraken",
                "binance→kucoin",
                "kraken→binance",
                "kraken→kucoin",
                "kucoin→binance",
                "kucoin→kraken",
            ]
        );
    }

    #[test]
    fn sweep_is_idempotent() {
        let snap = snapshot(&[
            (ExchangeId::Binance, 50_000.0),
            (ExchangeId::Coinbase, 50_500.0),
            (ExchangeId::Kraken, 49_900.0),
        ]);

        let first = compute_all_opportunities(&snap, 0.5, &sample_fees());
        let second = compute_all_opportunities(&snap, 0.5, &sample_fees());
        assert_eq!(first, second);
    }

    #[test]
    fn reverse_direction_is_computed_independently() {
        let snap = snapshot(&[
            (ExchangeId::Binance, 50_000.0),
            (ExchangeId::Coinbase, 50_500.0),
        ]);
        let fees = sample_fees();

        let opportunities = compute_all_opportunities(&snap, 1.0, &fees);
        let forward = opportunities[0];
        let reverse = opportunities[1];

        assert_eq!(forward.from_exchange, ExchangeId::Binance);
        assert_eq!(reverse.from_exchange, ExchangeId::Coinbase);
        assert_eq!(
            reverse.net_profit,
            compute_arbitrage(50_500.0, 50_000.0, 1.0, &fees).net_profit
        );
        assert!((forward.net_profit - 389.5).abs() < EPS);
        assert!((reverse.net_profit + 610.5).abs() < EPS);
        assert_ne!(reverse.net_profit, -forward.net_profit);
    }

    #[test]
    fn ranking_sorts_best_first() {
        let snap = snapshot(&[
            (ExchangeId::Binance, 100.0),
            (ExchangeId::Coinbase, 103.0),
            (ExchangeId::Kraken, 101.0),
        ]);
        let mut opportunities = compute_all_opportunities(&snap, 1.0, &FeeSpec::default());

        rank_by_net_profit(&mut opportunities);

        assert_eq!(opportunities[0].label(), "binance→coinbase");
        assert_eq!(opportunities.last().unwrap().label(), "coinbase→binance");
        assert_eq!(
            best_opportunity(&opportunities).map(|o| o.label()),
            Some("binance→coinbase".to_string())
        );
    }

    #[test]
    fn best_of_empty_is_none() {
        assert!(best_opportunity(&[]).is_none());
    }
}
