//! Exponential Moving Average (EMA) indicator.

use super::Indicator;
use crate::types::PriceSeries;

/// EMA (Exponential Moving Average) indicator.
///
/// Smoothing factor `2 / (period + 1)`, seeded with the first close and
/// carried across the whole series so the latest value reflects full-history
/// decay. Reported as `None` when the series is shorter than the period.
pub struct Ema {
    period: usize,
}

impl Ema {
    pub fn new(period: usize) -> Self {
        Self { period }
    }

    /// EMA at every position of `values`, seeded by `values[0]`.
    pub fn series(values: &[f64], period: usize) -> Vec<f64> {
        let multiplier = 2.0 / (period as f64 + 1.0);
        let mut out = Vec::with_capacity(values.len());
        let mut iter = values.iter();
        let Some(&first) = iter.next() else {
            return out;
        };
        let mut ema = first;
        out.push(ema);
        for value in iter {
            ema = (value - ema) * multiplier + ema;
            out.push(ema);
        }
        out
    }
}

impl Indicator for Ema {
    type Output = Option<f64>;

    fn id(&self) -> &str {
        match self.period {
            12 => "ema12",
            26 => "ema26",
            _ => "ema",
        }
    }

    fn min_periods(&self) -> usize {
        self.period
    }

    fn calculate(&self, series: &PriceSeries) -> Option<f64> {
        if self.period == 0 || series.len() < self.period {
            return None;
        }
        Self::series(&series.closes(), self.period).last().copied()
    }
}
