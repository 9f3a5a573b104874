//! Support and resistance levels.

use super::{round_to, Indicator};
use crate::types::{PriceBar, PriceSeries, SupportResistance};

/// Classic floor-trader pivot levels derived from one bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PivotLevels {
    pub pivot: f64,
    pub r1: f64,
    pub r2: f64,
    pub s1: f64,
    pub s2: f64,
}

impl PivotLevels {
    pub fn from_bar(bar: &PriceBar) -> Self {
        let pivot = (bar.high + bar.low + bar.close) / 3.0;
        let range = bar.high - bar.low;
        Self {
            pivot,
            r1: 2.0 * pivot - bar.low,
            r2: pivot + range,
            s1: 2.0 * pivot - bar.high,
            s2: pivot - range,
        }
    }
}

/// Local swing extrema over a trailing window merged with pivot levels.
///
/// Resistance keeps the levels at or above the latest close nearest first
/// (ascending), support the levels at or below it nearest first
/// (descending). Levels are rounded to cents before de-duplication.
pub struct SupportResistanceLevels {
    lookback: usize,
    max_levels: usize,
}

impl Default for SupportResistanceLevels {
    fn default() -> Self {
        Self {
            lookback: 20,
            max_levels: 3,
        }
    }
}

impl SupportResistanceLevels {
    /// Swing highs and lows: a bar strictly beyond both neighbours.
    fn swing_points(window: &[PriceBar]) -> (Vec<f64>, Vec<f64>) {
        let mut highs = Vec::new();
        let mut lows = Vec::new();
        for w in window.windows(3) {
            let (prev, bar, next) = (&w[0], &w[1], &w[2]);
            if bar.high > prev.high && bar.high > next.high {
                highs.push(bar.high);
            }
            if bar.low < prev.low && bar.low < next.low {
                lows.push(bar.low);
            }
        }
        (highs, lows)
    }

    fn nearest(mut levels: Vec<f64>, descending: bool, limit: usize) -> Vec<f64> {
        levels = levels.into_iter().map(|l| round_to(l, 2)).collect();
        levels.sort_by(|a, b| if descending { b.total_cmp(a) } else { a.total_cmp(b) });
        levels.dedup();
        levels.truncate(limit);
        levels
    }
}

impl Indicator for SupportResistanceLevels {
    type Output = SupportResistance;

    fn id(&self) -> &str {
        "support_resistance"
    }

    fn min_periods(&self) -> usize {
        self.lookback
    }

    fn calculate(&self, series: &PriceSeries) -> SupportResistance {
        let latest = series.last();
        let pivots = PivotLevels::from_bar(latest);

        if series.len() < self.lookback {
            return SupportResistance {
                support: Vec::new(),
                resistance: Vec::new(),
                pivot: round_to(pivots.pivot, 2),
            };
        }

        let price = latest.close;
        let (mut highs, mut lows) = Self::swing_points(series.tail(self.lookback));
        highs.extend([pivots.r1, pivots.r2]);
        lows.extend([pivots.s1, pivots.s2]);

        let resistance: Vec<f64> = highs.into_iter().filter(|l| *l >= price).collect();
        let support: Vec<f64> = lows.into_iter().filter(|l| *l <= price).collect();

        SupportResistance {
            support: Self::nearest(support, true, self.max_levels),
            resistance: Self::nearest(resistance, false, self.max_levels),
            pivot: round_to(pivots.pivot, 2),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::indicators::test_support::*;
    use chrono::NaiveDate;

    #[test]
    fn test_pivot_levels() {
        let bar = PriceBar::new(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), 100.0, 110.0, 90.0, 105.0, 1.0);
        let p = PivotLevels::from_bar(&bar);
        assert!((p.pivot - 305.0 / 3.0).abs() < 1e-9);
        assert!((p.r1 - (2.0 * p.pivot - 90.0)).abs() < 1e-9);
        assert!((p.r2 - (p.pivot + 20.0)).abs() < 1e-9);
        assert!((p.s1 - (2.0 * p.pivot - 110.0)).abs() < 1e-9);
        assert!((p.s2 - (p.pivot - 20.0)).abs() < 1e-9);
    }

    #[test]
    fn test_levels_short_series_has_pivot_only() {
        let levels = SupportResistanceLevels::default().calculate(&uptrend(10));
        assert!(levels.support.is_empty());
        assert!(levels.resistance.is_empty());
        assert!(levels.pivot > 0.0);
    }

    #[test]
    fn test_levels_sides_and_ordering() {
        let series = choppy(60);
        let price = series.last().close;
        let levels = SupportResistanceLevels::default().calculate(&series);

        assert!(!levels.support.is_empty() && levels.support.len() <= 3);
        assert!(!levels.resistance.is_empty() && levels.resistance.len() <= 3);
        assert!(levels.support.windows(2).all(|w| w[0] > w[1]));
        assert!(levels.resistance.windows(2).all(|w| w[0] < w[1]));
        assert!(levels.support.iter().all(|s| *s <= price + 0.005));
        assert!(levels.resistance.iter().all(|r| *r >= price - 0.005));
    }

    #[test]
    fn test_levels_flat_series_dedup() {
        let levels = SupportResistanceLevels::default().calculate(&flat(25, 50.0));
        assert_eq!(levels.resistance, vec![50.0]);
        assert_eq!(levels.support, vec![50.0]);
        assert_eq!(levels.pivot, 50.0);
    }

    #[test]
    fn test_swing_points() {
        let series = series_from_closes(&[10.0, 12.0, 11.0, 9.0, 10.0]);
        let (highs, lows) = SupportResistanceLevels::swing_points(series.bars());
        assert_eq!(highs, vec![13.0]);
        assert_eq!(lows, vec![8.0]);
    }
}
