//! Simple Moving Average (SMA) indicator.

use super::{mean, Indicator};
use crate::types::PriceSeries;

/// SMA (Simple Moving Average) indicator.
///
/// Arithmetic mean of the last `period` closes. Undefined (`None`) when the
/// series is shorter than the period.
pub struct Sma {
    period: usize,
}

impl Sma {
    pub fn new(period: usize) -> Self {
        Self { period }
    }

    /// Rolling SMA aligned with `values`; `None` until the window fills.
    pub fn rolling(values: &[f64], period: usize) -> Vec<Option<f64>> {
        if period == 0 {
            return vec![None; values.len()];
        }
        let mut out = Vec::with_capacity(values.len());
        let mut sum = 0.0;
        for (i, value) in values.iter().enumerate() {
            sum += value;
            if i >= period {
                sum -= values[i - period];
            }
            if i + 1 >= period {
                out.push(Some(sum / period as f64));
            } else {
                out.push(None);
            }
        }
        out
    }
}

impl Indicator for Sma {
    type Output = Option<f64>;

    fn id(&self) -> &str {
        match self.period {
            20 => "sma20",
            50 => "sma50",
            200 => "sma200",
            _ => "sma",
        }
    }

    fn min_periods(&self) -> usize {
        self.period
    }

    fn calculate(&self, series: &PriceSeries) -> Option<f64> {
        if self.period == 0 || series.len() < self.period {
            return None;
        }
        let closes: Vec<f64> = series.tail(self.period).iter().map(|b| b.close).collect();
        Some(mean(&closes))
    }
}
