//! Average True Range (ATR) indicator.

use super::{mean, Indicator};
use crate::types::{PriceBar, PriceSeries};

/// ATR (Average True Range) indicator.
///
/// Measures market volatility by calculating the average of true ranges:
/// TR = max(High-Low, |High-PrevClose|, |Low-PrevClose|)
///
/// Simple mean of the trailing `period` true ranges; the first bar of the
/// series has no previous close and contributes its high-low range.
pub struct Atr {
    period: usize,
}

impl Default for Atr {
    fn default() -> Self {
        Self { period: 14 }
    }
}

impl Atr {
    /// Calculate True Range.
    fn true_range(current: &PriceBar, previous: Option<&PriceBar>) -> f64 {
        let hl = current.high - current.low;
        match previous {
            Some(prev) => {
                let hc = (current.high - prev.close).abs();
                let lc = (current.low - prev.close).abs();
                hl.max(hc).max(lc)
            }
            None => hl,
        }
    }
}

impl Indicator for Atr {
    type Output = f64;

    fn id(&self) -> &str {
        "atr"
    }

    fn min_periods(&self) -> usize {
        self.period
    }

    fn calculate(&self, series: &PriceSeries) -> f64 {
        if self.period == 0 || series.len() < self.period {
            return 0.0;
        }

        let bars = series.bars();
        let start = bars.len() - self.period;
        let true_ranges: Vec<f64> = (start..bars.len())
            .map(|i| Self::true_range(&bars[i], i.checked_sub(1).map(|p| &bars[p])))
            .collect();

        mean(&true_ranges)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::indicators::test_support::*;

    #[test]
    fn test_atr_insufficient_data() {
        assert_eq!(Atr::default().calculate(&uptrend(13)), 0.0);
    }

    #[test]
    fn test_atr_uptrend_value() {
        // Each bar spans close +/- 1 and gaps 1.5 above the previous close:
        // TR = max(2.0, |c+1 - (c-1.5)|, |c-1 - (c-1.5)|) = 2.5
        let atr = Atr::default().calculate(&uptrend(30));
        assert!((atr - 2.5).abs() < 1e-9, "got {}", atr);
    }

    #[test]
    fn test_atr_first_bar_uses_range() {
        // Exactly 14 bars: the first true range has no previous close.
        let atr = Atr::default().calculate(&uptrend(14));
        let expected = (2.0 + 13.0 * 2.5) / 14.0;
        assert!((atr - expected).abs() < 1e-9, "got {}", atr);
    }

    #[test]
    fn test_atr_flat_is_zero() {
        assert_eq!(Atr::default().calculate(&flat(20, 5.0)), 0.0);
    }
}
