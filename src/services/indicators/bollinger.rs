//! Bollinger Bands indicator.

use super::{mean, sample_std_dev, Indicator};
use crate::types::{BollingerValues, PriceSeries};

/// Bollinger Bands indicator.
///
/// Consists of:
/// - Middle band: SMA(20)
/// - Upper band: SMA + 2 * StdDev
/// - Lower band: SMA - 2 * StdDev
///
/// The deviation is the sample standard deviation of the window. %B is
/// pinned to 0.5 when the bands collapse (flat prices).
pub struct BollingerBands {
    period: usize,
    std_dev_multiplier: f64,
}

impl Default for BollingerBands {
    fn default() -> Self {
        Self {
            period: 20,
            std_dev_multiplier: 2.0,
        }
    }
}

impl Indicator for BollingerBands {
    type Output = BollingerValues;

    fn id(&self) -> &str {
        "bollinger"
    }

    fn min_periods(&self) -> usize {
        self.period
    }

    fn calculate(&self, series: &PriceSeries) -> BollingerValues {
        if self.period == 0 || series.len() < self.period {
            return BollingerValues::default();
        }

        let closes: Vec<f64> = series.tail(self.period).iter().map(|b| b.close).collect();
        let middle = mean(&closes);
        let band = self.std_dev_multiplier * sample_std_dev(&closes);

        let upper = middle + band;
        let lower = middle - band;
        let width = upper - lower;

        // %B = (Price - Lower) / (Upper - Lower)
        let current_price = series.last().close;
        let percent_b = if width > 0.0 {
            (current_price - lower) / width
        } else {
            0.5
        };

        BollingerValues {
            upper,
            middle,
            lower,
            width,
            percent_b,
        }
    }
}
