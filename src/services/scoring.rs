//! Rule-based technical scoring.
//!
//! Each rule contributes points and a weight. The weights of the RSI, MACD
//! and volume rules always count toward the denominator; the moving-average
//! rule only counts when both SMA20 and SMA50 exist.

use crate::config::ScoringConfig;
use crate::types::{
    ComponentKind, ComponentSignal, IndicatorSet, MacdValues, SignalStrength, SmaSet,
    TechnicalAction, VolumeSignal,
};

/// Indicator values the scorer reads.
#[derive(Debug, Clone, Copy)]
pub struct ScoringInputs<'a> {
    pub price: f64,
    pub rsi: f64,
    pub macd: &'a MacdValues,
    pub sma: &'a SmaSet,
    pub volume_signal: VolumeSignal,
}

impl<'a> From<&'a IndicatorSet> for ScoringInputs<'a> {
    fn from(set: &'a IndicatorSet) -> Self {
        Self {
            price: set.current_price,
            rsi: set.rsi,
            macd: &set.macd,
            sma: &set.sma,
            volume_signal: set.volume_analysis.signal,
        }
    }
}

/// Turns an indicator snapshot into a -100..=100 technical score.
#[derive(Debug, Clone, Default)]
pub struct IndicatorSignalScorer {
    config: ScoringConfig,
}

impl IndicatorSignalScorer {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn score(&self, inputs: &ScoringInputs<'_>) -> SignalStrength {
        let cfg = &self.config;
        let mut points = 0.0;
        let mut total_weight = 0.0;
        let mut signals = Vec::new();

        // RSI
        let rsi = inputs.rsi;
        if rsi > cfg.rsi_overbought {
            points -= 15.0;
            signals.push("RSI overbought".to_string());
        } else if rsi < cfg.rsi_oversold {
            points += 15.0;
            signals.push("RSI oversold".to_string());
        } else if rsi > 50.0 && rsi < 60.0 {
            points += 5.0;
            signals.push("RSI bullish".to_string());
        } else if rsi > 40.0 && rsi < 50.0 {
            points -= 5.0;
            signals.push("RSI bearish".to_string());
        }
        total_weight += cfg.rsi_weight;

        // MACD
        let macd = inputs.macd;
        if macd.histogram > 0.0 {
            points += 15.0;
            if macd.macd > macd.signal {
                points += 10.0;
                signals.push("MACD bullish crossover".to_string());
            }
        } else {
            points -= 15.0;
            if macd.macd < macd.signal {
                points -= 10.0;
                signals.push("MACD bearish crossover".to_string());
            }
        }
        total_weight += cfg.macd_weight;

        // Moving averages
        if let (Some(sma_20), Some(sma_50)) = (inputs.sma.sma_20, inputs.sma.sma_50) {
            let price = inputs.price;
            if price > sma_20 && sma_20 > sma_50 {
                points += 20.0;
                signals.push("Price above moving averages".to_string());
            } else if price < sma_20 && sma_20 < sma_50 {
                points -= 20.0;
                signals.push("Price below moving averages".to_string());
            }
            total_weight += cfg.sma_weight;
        }

        // Volume
        match inputs.volume_signal {
            VolumeSignal::BullishStrong => {
                points += 15.0;
                signals.push("Strong volume confirmation".to_string());
            }
            VolumeSignal::BearishStrong => {
                points -= 15.0;
                signals.push("Strong selling volume".to_string());
            }
            _ => {}
        }
        total_weight += cfg.volume_weight;

        let strength = if total_weight > 0.0 {
            (points / total_weight * 100.0).clamp(-100.0, 100.0)
        } else {
            0.0
        };

        SignalStrength {
            strength,
            action: self.action(strength),
            signals,
            confidence: (strength.abs() * cfg.confidence_multiplier).min(100.0),
        }
    }

    fn action(&self, strength: f64) -> TechnicalAction {
        let strong = self.config.strong_threshold;
        let act = self.config.action_threshold;
        if strength > strong {
            TechnicalAction::StrongBuy
        } else if strength > act {
            TechnicalAction::Buy
        } else if strength < -strong {
            TechnicalAction::StrongSell
        } else if strength < -act {
            TechnicalAction::Sell
        } else {
            TechnicalAction::Hold
        }
    }

    /// Technical component for the composite generator.
    pub fn component(set: &IndicatorSet) -> ComponentSignal {
        ComponentSignal::new(
            ComponentKind::Technical,
            set.signal_strength.strength,
            set.signal_strength.signals.clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn macd(macd: f64, signal: f64) -> MacdValues {
        MacdValues {
            macd,
            signal,
            histogram: macd - signal,
        }
    }

    fn score(price: f64, rsi: f64, m: MacdValues, sma: SmaSet, vol: VolumeSignal) -> SignalStrength {
        IndicatorSignalScorer::default().score(&ScoringInputs {
            price,
            rsi,
            macd: &m,
            sma: &sma,
            volume_signal: vol,
        })
    }

    fn full_sma(sma_20: f64, sma_50: f64) -> SmaSet {
        SmaSet {
            sma_20: Some(sma_20),
            sma_50: Some(sma_50),
            sma_200: None,
        }
    }

    #[test]
    fn test_all_bullish_rules() {
        let s = score(110.0, 25.0, macd(2.0, 1.0), full_sma(105.0, 100.0), VolumeSignal::BullishStrong);
        // 15 + 25 + 20 + 15 = 75 over 80
        assert!((s.strength - 93.75).abs() < 1e-9);
        assert_eq!(s.action, TechnicalAction::StrongBuy);
        assert_eq!(s.confidence, 100.0);
        assert_eq!(
            s.signals,
            vec![
                "RSI oversold",
                "MACD bullish crossover",
                "Price above moving averages",
                "Strong volume confirmation"
            ]
        );
    }

    #[test]
    fn test_all_bearish_rules() {
        let s = score(90.0, 75.0, macd(-2.0, -1.0), full_sma(95.0, 100.0), VolumeSignal::BearishStrong);
        assert!((s.strength + 93.75).abs() < 1e-9);
        assert_eq!(s.action, TechnicalAction::StrongSell);
    }

    #[test]
    fn test_sma_weight_skipped_without_both_averages() {
        // -15 from flat MACD over 20 + 25 + 15
        let s = score(100.0, 65.0, MacdValues::default(), SmaSet::default(), VolumeSignal::Neutral);
        assert!((s.strength - (-15.0 / 60.0 * 100.0)).abs() < 1e-9);
        assert_eq!(s.action, TechnicalAction::Sell);
        assert!(s.signals.is_empty());
    }

    #[test]
    fn test_rsi_band_boundaries_are_strict() {
        let neutral = |rsi| score(100.0, rsi, macd(1.0, 0.0), SmaSet::default(), VolumeSignal::Neutral);
        assert!(!neutral(50.0).signals.iter().any(|s| s.starts_with("RSI")));
        assert!(!neutral(60.0).signals.iter().any(|s| s.starts_with("RSI")));
        assert!(!neutral(70.0).signals.iter().any(|s| s.starts_with("RSI")));
        assert!(neutral(55.0).signals.contains(&"RSI bullish".to_string()));
        assert!(neutral(45.0).signals.contains(&"RSI bearish".to_string()));
    }

    #[test]
    fn test_action_thresholds() {
        let scorer = IndicatorSignalScorer::default();
        assert_eq!(scorer.action(30.0), TechnicalAction::Buy);
        assert_eq!(scorer.action(30.1), TechnicalAction::StrongBuy);
        assert_eq!(scorer.action(10.0), TechnicalAction::Hold);
        assert_eq!(scorer.action(-10.0), TechnicalAction::Hold);
        assert_eq!(scorer.action(-10.5), TechnicalAction::Sell);
        assert_eq!(scorer.action(-31.0), TechnicalAction::StrongSell);
    }
}
