//! Entry, stop and target levels for a trade action.

use crate::services::indicators::round_to;
use crate::types::{IndicatorSet, SupportResistance, TradeAction};

/// Fraction of price used as volatility when ATR is unavailable.
const FALLBACK_ATR_FRACTION: f64 = 0.02;
/// Minimum stop distance below (buy) or above (sell) the reference level.
const STOP_MARGIN: f64 = 0.02;

#[derive(Debug, Clone, PartialEq)]
pub struct OrderLevels {
    pub entry: f64,
    pub stop_loss: f64,
    pub take_profit: Vec<f64>,
    pub risk_reward: f64,
    pub timeframe: String,
}

impl OrderLevels {
    /// Levels for `action` derived from the technical snapshot.
    ///
    /// Without a snapshot the price is taken as 0, so every level is 0.
    pub fn plan(action: TradeAction, technical: Option<&IndicatorSet>) -> Self {
        let empty = SupportResistance::default();
        let (price, atr, levels) = match technical {
            Some(set) => (set.current_price, set.atr, &set.support_resistance),
            None => (0.0, 0.0, &empty),
        };
        let atr = if atr > 0.0 { atr } else { price * FALLBACK_ATR_FRACTION };

        let timeframe = if action.is_strong() { "2-5 days" } else { "5-10 days" };

        let (entry, stop_loss, take_profit, timeframe) = if action.is_buy() {
            let entry = price * 0.995;
            let stop = match levels.support.first() {
                Some(support) => (support * (1.0 - STOP_MARGIN)).min(price - 2.0 * atr),
                None => (price * (1.0 - STOP_MARGIN)).min(price - 2.0 * atr),
            };
            let first = match levels.resistance.first() {
                Some(resistance) => resistance.min(price + 1.5 * atr),
                None => price + 1.5 * atr,
            };
            (entry, stop, vec![first, price + 3.0 * atr, price + 5.0 * atr], timeframe)
        } else if action.is_sell() {
            let entry = price * 1.005;
            let stop = match levels.resistance.last() {
                Some(resistance) => (resistance * (1.0 + STOP_MARGIN)).max(price + 2.0 * atr),
                None => (price * (1.0 + STOP_MARGIN)).max(price + 2.0 * atr),
            };
            let first = match levels.support.last() {
                Some(support) => support.max(price - 1.5 * atr),
                None => price - 1.5 * atr,
            };
            (entry, stop, vec![first, price - 3.0 * atr, price - 5.0 * atr], timeframe)
        } else {
            (price, price * 0.95, vec![price * 1.05], "Wait for better setup")
        };

        let risk_reward = if entry != stop_loss {
            round_to((take_profit[0] - entry) / (entry - stop_loss), 2)
        } else {
            0.0
        };

        Self {
            entry: round_to(entry, 2),
            stop_loss: round_to(stop_loss, 2),
            take_profit: take_profit.into_iter().map(|tp| round_to(tp, 2)).collect(),
            risk_reward,
            timeframe: timeframe.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::indicators::test_support::choppy;
    use crate::services::indicators::IndicatorEngine;

    fn snapshot() -> IndicatorSet {
        let mut set = IndicatorEngine::default().compute(&choppy(60));
        set.current_price = 100.0;
        set.atr = 2.0;
        set.support_resistance = SupportResistance {
            support: vec![97.0, 95.0, 90.0],
            resistance: vec![102.0, 105.0, 110.0],
            pivot: 100.0,
        };
        set
    }

    #[test]
    fn test_buy_levels() {
        let set = snapshot();
        let levels = OrderLevels::plan(TradeAction::Buy, Some(&set));
        assert_eq!(levels.entry, 99.5);
        // min(97 * 0.98, 100 - 4)
        assert_eq!(levels.stop_loss, 95.06);
        assert_eq!(levels.take_profit, vec![102.0, 106.0, 110.0]);
        assert_eq!(levels.timeframe, "5-10 days");
        assert_eq!(levels.risk_reward, round_to(2.5 / 4.44, 2));
    }

    #[test]
    fn test_sell_levels() {
        let set = snapshot();
        let levels = OrderLevels::plan(TradeAction::StrongSell, Some(&set));
        assert_eq!(levels.entry, 100.5);
        // max(110 * 1.02, 104)
        assert_eq!(levels.stop_loss, 112.2);
        assert_eq!(levels.take_profit, vec![97.0, 94.0, 90.0]);
        assert_eq!(levels.timeframe, "2-5 days");
    }

    #[test]
    fn test_hold_levels() {
        let set = snapshot();
        let levels = OrderLevels::plan(TradeAction::Hold, Some(&set));
        assert_eq!(levels.entry, 100.0);
        assert_eq!(levels.stop_loss, 95.0);
        assert_eq!(levels.take_profit, vec![105.0]);
        assert_eq!(levels.timeframe, "Wait for better setup");
        assert_eq!(levels.risk_reward, 1.0);
    }

    #[test]
    fn test_atr_fallback_and_missing_levels() {
        let mut set = snapshot();
        set.atr = 0.0;
        set.support_resistance = SupportResistance::default();
        let levels = OrderLevels::plan(TradeAction::WeakBuy, Some(&set));
        // ATR falls back to 2% of price
        assert_eq!(levels.stop_loss, 96.0);
        assert_eq!(levels.take_profit, vec![103.0, 106.0, 110.0]);
    }

    #[test]
    fn test_small_atr_without_levels_keeps_stop_outside_entry() {
        let mut set = snapshot();
        set.atr = 0.1;
        set.support_resistance = SupportResistance::default();

        let buy = OrderLevels::plan(TradeAction::WeakBuy, Some(&set));
        assert_eq!(buy.entry, 99.5);
        assert_eq!(buy.stop_loss, 98.0);
        assert!(buy.entry < buy.take_profit[0]);
        assert!(buy.risk_reward > 0.0);

        let sell = OrderLevels::plan(TradeAction::Sell, Some(&set));
        assert_eq!(sell.entry, 100.5);
        assert_eq!(sell.stop_loss, 102.0);
        assert!(sell.take_profit[0] < sell.entry);
    }

    #[test]
    fn test_no_technical_gives_zero_levels() {
        let levels = OrderLevels::plan(TradeAction::Buy, None);
        assert_eq!(levels.entry, 0.0);
        assert_eq!(levels.stop_loss, 0.0);
        assert_eq!(levels.take_profit, vec![0.0, 0.0, 0.0]);
        assert_eq!(levels.risk_reward, 0.0);
    }
}
