//! MACD (Moving Average Convergence Divergence) indicator.

use super::{Ema, Indicator};
use crate::types::{MacdValues, PriceSeries};

/// MACD indicator.
///
/// Shows the relationship between two EMAs:
/// - MACD Line = EMA(12) - EMA(26)
/// - Signal Line = EMA(9) of MACD Line
/// - Histogram = MACD Line - Signal Line
///
/// All three are zero when the series is shorter than the slow period.
pub struct Macd {
    fast_period: usize,
    slow_period: usize,
    signal_period: usize,
}

impl Default for Macd {
    fn default() -> Self {
        Self {
            fast_period: 12,
            slow_period: 26,
            signal_period: 9,
        }
    }
}

impl Indicator for Macd {
    type Output = MacdValues;

    fn id(&self) -> &str {
        "macd"
    }

    fn min_periods(&self) -> usize {
        self.slow_period
    }

    fn calculate(&self, series: &PriceSeries) -> MacdValues {
        if series.len() < self.min_periods() {
            return MacdValues::default();
        }

        let closes = series.closes();
        let fast = Ema::series(&closes, self.fast_period);
        let slow = Ema::series(&closes, self.slow_period);

        let macd_line: Vec<f64> = fast.iter().zip(slow.iter()).map(|(f, s)| f - s).collect();
        let signal_line = Ema::series(&macd_line, self.signal_period);

        match (macd_line.last(), signal_line.last()) {
            (Some(&macd), Some(&signal)) => MacdValues {
                macd,
                signal,
                histogram: macd - signal,
            },
            _ => MacdValues::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::indicators::test_support::*;

    #[test]
    fn test_macd_insufficient_data() {
        let values = Macd::default().calculate(&uptrend(25));
        assert_eq!(values, MacdValues::default());
    }

    #[test]
    fn test_macd_histogram_identity() {
        let values = Macd::default().calculate(&choppy(80));
        assert!((values.histogram - (values.macd - values.signal)).abs() < 1e-12);
    }

    #[test]
    fn test_macd_uptrend_positive() {
        let values = Macd::default().calculate(&uptrend(60));
        assert!(values.macd > 0.0);
        assert!(values.histogram > 0.0);
    }

    #[test]
    fn test_macd_downtrend_negative() {
        let values = Macd::default().calculate(&downtrend(60));
        assert!(values.macd < 0.0);
        assert!(values.histogram < 0.0);
    }

    #[test]
    fn test_macd_flat_is_zero() {
        let values = Macd::default().calculate(&flat(40, 25.0));
        assert!(values.macd.abs() < 1e-12);
        assert!(values.histogram.abs() < 1e-12);
    }
}
