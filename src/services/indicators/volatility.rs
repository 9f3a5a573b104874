//! Historical volatility.

use super::{sample_std_dev, Indicator};
use crate::types::PriceSeries;

const TRADING_DAYS: f64 = 252.0;

/// Standard deviation of the trailing daily percentage returns, annualized
/// by the square root of 252 and reported as a percentage.
pub struct HistoricalVolatility {
    period: usize,
}

impl Default for HistoricalVolatility {
    fn default() -> Self {
        Self { period: 20 }
    }
}

impl Indicator for HistoricalVolatility {
    type Output = f64;

    fn id(&self) -> &str {
        "volatility"
    }

    fn min_periods(&self) -> usize {
        self.period
    }

    fn calculate(&self, series: &PriceSeries) -> f64 {
        if self.period == 0 || series.len() < self.period {
            return 0.0;
        }

        let returns: Vec<f64> = series
            .bars()
            .windows(2)
            .filter(|w| w[0].close != 0.0)
            .map(|w| (w[1].close - w[0].close) / w[0].close)
            .collect();
        let start = returns.len().saturating_sub(self.period);

        sample_std_dev(&returns[start..]) * TRADING_DAYS.sqrt() * 100.0
    }
}
