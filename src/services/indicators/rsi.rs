//! Relative Strength Index (RSI) indicator.

use super::{mean, Indicator};
use crate::types::PriceSeries;

/// RSI (Relative Strength Index) indicator.
///
/// Measures momentum by comparing the magnitude of recent gains to recent losses.
/// Values range from 0-100:
/// - Below 30: Oversold (potential buy signal)
/// - Above 70: Overbought (potential sell signal)
///
/// Gains and losses are simple averages over the trailing `period` deltas.
pub struct Rsi {
    period: usize,
}

/// Returned when the series is too short.
pub const NEUTRAL_RSI: f64 = 50.0;

impl Default for Rsi {
    fn default() -> Self {
        Self { period: 14 }
    }
}

impl Rsi {
    pub fn new(period: usize) -> Self {
        Self { period }
    }

    /// RSI over the trailing deltas of `closes`.
    fn calculate_rsi(closes: &[f64], period: usize) -> f64 {
        let deltas: Vec<f64> = closes.windows(2).map(|w| w[1] - w[0]).collect();
        let start = deltas.len().saturating_sub(period);
        let recent = &deltas[start..];

        let gains: Vec<f64> = recent.iter().map(|d| d.max(0.0)).collect();
        let losses: Vec<f64> = recent.iter().map(|d| (-d).max(0.0)).collect();

        let avg_gain = mean(&gains);
        let avg_loss = mean(&losses);

        if avg_loss == 0.0 {
            return 100.0;
        }

        let rs = avg_gain / avg_loss;
        (100.0 - (100.0 / (1.0 + rs))).clamp(0.0, 100.0)
    }
}

impl Indicator for Rsi {
    type Output = f64;

    fn id(&self) -> &str {
        "rsi"
    }

    fn min_periods(&self) -> usize {
        self.period
    }

    fn calculate(&self, series: &PriceSeries) -> f64 {
        if self.period == 0 || series.len() < self.period {
            return NEUTRAL_RSI;
        }
        Self::calculate_rsi(&series.closes(), self.period)
    }
}
