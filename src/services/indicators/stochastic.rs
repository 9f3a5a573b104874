//! Stochastic Oscillator indicator.

use super::{mean, Indicator};
use crate::types::{PriceBar, PriceSeries, StochasticValues};

/// Stochastic Oscillator.
///
/// Compares closing price to price range over a period:
/// %K = (Current Close - Lowest Low) / (Highest High - Lowest Low) * 100
/// %D = SMA(3) of %K
///
/// Signals:
/// - Below 20: Oversold (bullish)
/// - Above 80: Overbought (bearish)
pub struct Stochastic {
    k_period: usize,
    d_period: usize,
}

impl Default for Stochastic {
    fn default() -> Self {
        Self {
            k_period: 14,
            d_period: 3,
        }
    }
}

impl Stochastic {
    /// %K of the last bar of `window`. A zero range reads as mid-scale.
    fn percent_k(window: &[PriceBar]) -> f64 {
        let lowest_low = window.iter().map(|b| b.low).fold(f64::INFINITY, f64::min);
        let highest_high = window
            .iter()
            .map(|b| b.high)
            .fold(f64::NEG_INFINITY, f64::max);
        let close = window[window.len() - 1].close;

        let range = highest_high - lowest_low;
        if range > 0.0 {
            ((close - lowest_low) / range * 100.0).clamp(0.0, 100.0)
        } else {
            50.0
        }
    }
}

impl Indicator for Stochastic {
    type Output = StochasticValues;

    fn id(&self) -> &str {
        "stochastic"
    }

    fn min_periods(&self) -> usize {
        self.k_period
    }

    fn calculate(&self, series: &PriceSeries) -> StochasticValues {
        if self.k_period == 0 || series.len() < self.k_period {
            return StochasticValues::default();
        }

        let bars = series.bars();
        let first_end = self.k_period - 1;
        let start = first_end.max(bars.len().saturating_sub(self.d_period));

        // %K for the bars feeding %D; fewer than d_period when history is short.
        let k_values: Vec<f64> = (start..bars.len())
            .map(|i| Self::percent_k(&bars[(i + 1 - self.k_period)..=i]))
            .collect();

        let k = k_values.last().copied().unwrap_or(50.0);
        let d = if k_values.is_empty() { 50.0 } else { mean(&k_values) };

        StochasticValues { k, d }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::indicators::test_support::*;

    #[test]
    fn test_stochastic_insufficient_data() {
        let values = Stochastic::default().calculate(&uptrend(13));
        assert_eq!(values, StochasticValues::default());
    }

    #[test]
    fn test_stochastic_uptrend_high_k() {
        let values = Stochastic::default().calculate(&uptrend(30));
        assert!(values.k > 50.0, "got {}", values.k);
        assert!(values.d > 50.0, "got {}", values.d);
    }

    #[test]
    fn test_stochastic_downtrend_low_k() {
        let values = Stochastic::default().calculate(&downtrend(30));
        assert!(values.k < 50.0, "got {}", values.k);
    }

    #[test]
    fn test_stochastic_flat_is_mid_scale() {
        let values = Stochastic::default().calculate(&flat(20, 10.0));
        assert_eq!(values.k, 50.0);
        assert_eq!(values.d, 50.0);
    }

    #[test]
    fn test_stochastic_exact_window_single_k() {
        let series = uptrend(14);
        let values = Stochastic::default().calculate(&series);
        assert_eq!(values.k, values.d);
    }

    #[test]
    fn test_stochastic_value_range() {
        let values = Stochastic::default().calculate(&choppy(60));
        assert!((0.0..=100.0).contains(&values.k));
        assert!((0.0..=100.0).contains(&values.d));
    }
}
