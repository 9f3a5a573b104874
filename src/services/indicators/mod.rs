//! Technical indicator implementations.
//!
//! Every indicator is a pure function of a [`PriceSeries`] evaluated at its
//! latest bar. Short histories never fail: each indicator falls back to a
//! documented neutral value instead.

pub mod atr;
pub mod bollinger;
pub mod ema;
pub mod levels;
pub mod macd;
pub mod rsi;
pub mod sma;
pub mod stochastic;
pub mod trend;
pub mod volatility;
pub mod volume;

pub use atr::Atr;
pub use bollinger::BollingerBands;
pub use ema::Ema;
pub use levels::SupportResistanceLevels;
pub use macd::Macd;
pub use rsi::Rsi;
pub use sma::Sma;
pub use stochastic::Stochastic;
pub use trend::TrendClassifier;
pub use volatility::HistoricalVolatility;
pub use volume::VolumeAnalyzer;

use tracing::debug;

use crate::config::ScoringConfig;
use crate::services::scoring::{IndicatorSignalScorer, ScoringInputs};
use crate::types::{EmaSet, IndicatorSet, PriceSeries, SmaSet};

/// Trait for implementing technical indicators.
pub trait Indicator: Send + Sync {
    type Output;

    /// Unique identifier for this indicator.
    fn id(&self) -> &str;

    /// Minimum number of bars for a non-fallback result.
    fn min_periods(&self) -> usize;

    /// Evaluate at the latest bar, returning the fallback on short history.
    fn calculate(&self, series: &PriceSeries) -> Self::Output;
}

/// Computes the full indicator battery for a series.
pub struct IndicatorEngine {
    sma_20: Sma,
    sma_50: Sma,
    sma_200: Sma,
    ema_12: Ema,
    ema_26: Ema,
    rsi: Rsi,
    macd: Macd,
    bollinger: BollingerBands,
    stochastic: Stochastic,
    atr: Atr,
    volume: VolumeAnalyzer,
    levels: SupportResistanceLevels,
    trend: TrendClassifier,
    volatility: HistoricalVolatility,
    scorer: IndicatorSignalScorer,
}

impl Default for IndicatorEngine {
    fn default() -> Self {
        Self::new(ScoringConfig::default())
    }
}

impl IndicatorEngine {
    pub fn new(scoring: ScoringConfig) -> Self {
        Self {
            sma_20: Sma::new(20),
            sma_50: Sma::new(50),
            sma_200: Sma::new(200),
            ema_12: Ema::new(12),
            ema_26: Ema::new(26),
            rsi: Rsi::default(),
            macd: Macd::default(),
            bollinger: BollingerBands::default(),
            stochastic: Stochastic::default(),
            atr: Atr::default(),
            volume: VolumeAnalyzer::default(),
            levels: SupportResistanceLevels::default(),
            trend: TrendClassifier::default(),
            volatility: HistoricalVolatility::default(),
            scorer: IndicatorSignalScorer::new(scoring),
        }
    }

    /// Evaluate every indicator at the latest bar of `series`.
    pub fn compute(&self, series: &PriceSeries) -> IndicatorSet {
        debug!("Computing indicators over {} bars", series.len());

        let latest = series.last();
        let current_price = latest.close;
        let (price_change, price_change_percent) = price_change(series);

        let sma = SmaSet {
            sma_20: self.sma_20.calculate(series),
            sma_50: self.sma_50.calculate(series),
            sma_200: self.sma_200.calculate(series),
        };
        let ema = EmaSet {
            ema_12: self.ema_12.calculate(series),
            ema_26: self.ema_26.calculate(series),
        };
        let rsi = self.rsi.calculate(series);
        let macd = self.macd.calculate(series);
        let volume_analysis = self.volume.calculate(series);
        let trend = self.trend.classify(series, &sma);

        let signal_strength = self.scorer.score(&ScoringInputs {
            price: current_price,
            rsi,
            macd: &macd,
            sma: &sma,
            volume_signal: volume_analysis.signal,
        });

        IndicatorSet {
            current_price,
            price_change,
            price_change_percent,
            volume: latest.volume,
            sma,
            ema,
            rsi,
            macd,
            bollinger_bands: self.bollinger.calculate(series),
            stochastic: self.stochastic.calculate(series),
            atr: self.atr.calculate(series),
            volume_analysis,
            support_resistance: self.levels.calculate(series),
            trend,
            volatility: self.volatility.calculate(series),
            signal_strength,
        }
    }
}

/// Absolute and percentage change of the latest close versus the previous one.
fn price_change(series: &PriceSeries) -> (f64, f64) {
    let bars = series.bars();
    if bars.len() < 2 {
        return (0.0, 0.0);
    }
    let latest = bars[bars.len() - 1].close;
    let previous = bars[bars.len() - 2].close;
    let change = latest - previous;
    let percent = if previous != 0.0 {
        change / previous * 100.0
    } else {
        0.0
    };
    (change, percent)
}

/// Arithmetic mean; 0 for an empty slice.
pub(crate) fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation (n - 1 denominator); 0 below two values.
pub(crate) fn sample_std_dev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let avg = mean(values);
    let variance =
        values.iter().map(|v| (v - avg).powi(2)).sum::<f64>() / (values.len() - 1) as f64;
    variance.sqrt()
}

/// Round to `places` decimal places.
pub(crate) fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;

    #[test]
    fn test_mean_and_std_dev() {
        assert_eq!(mean(&[]), 0.0);
        assert_eq!(mean(&[1.0, 2.0, 3.0]), 2.0);
        assert_eq!(sample_std_dev(&[5.0]), 0.0);
        assert!((sample_std_dev(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]) - 2.138_089_935).abs() < 1e-6);
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(1.23456, 2), 1.23);
        assert_eq!(round_to(-1.235, 1), -1.2);
    }

    #[test]
    fn test_engine_price_change() {
        let set = IndicatorEngine::default().compute(&uptrend(30));
        assert!((set.price_change - 1.5).abs() < 1e-9);
        let previous = 100.0 + 28.0 * 1.5;
        assert!((set.price_change_percent - 1.5 / previous * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_engine_single_bar_uses_fallbacks() {
        let set = IndicatorEngine::default().compute(&series_from_closes(&[50.0]));
        assert_eq!(set.current_price, 50.0);
        assert_eq!(set.price_change, 0.0);
        assert_eq!(set.rsi, 50.0);
        assert_eq!(set.sma.sma_20, None);
        assert_eq!(set.ema.ema_12, None);
        assert_eq!(set.atr, 0.0);
        assert_eq!(set.volatility, 0.0);
        assert_eq!(set.stochastic.k, 50.0);
        assert_eq!(set.macd.histogram, 0.0);
    }

    #[test]
    fn test_engine_outputs_are_finite() {
        for series in [uptrend(250), downtrend(60), flat(40, 10.0), choppy(80)] {
            let set = IndicatorEngine::default().compute(&series);
            let values = [
                set.rsi,
                set.macd.macd,
                set.macd.signal,
                set.macd.histogram,
                set.bollinger_bands.percent_b,
                set.bollinger_bands.width,
                set.stochastic.k,
                set.stochastic.d,
                set.atr,
                set.volume_analysis.ratio,
                set.volatility,
                set.signal_strength.strength,
                set.signal_strength.confidence,
            ];
            assert!(values.iter().all(|v| v.is_finite()), "{:?}", values);
        }
    }

    #[test]
    fn test_engine_is_deterministic() {
        let engine = IndicatorEngine::default();
        let series = choppy(120);
        assert_eq!(engine.compute(&series), engine.compute(&series));
    }
}
