//! Volume participation analysis.

use super::{mean, Indicator};
use crate::types::{PriceSeries, VolumeAnalysis, VolumeSignal, VolumeTrend};

/// Relates the latest volume to its recent average and to the direction of
/// the latest price move.
///
/// Ratio above `strong_ratio` on a move is a strong signal, below
/// `weak_ratio` a weak one. Averages shrink to the available bars on short
/// history, and a zero average reads as a neutral ratio of 1.0.
pub struct VolumeAnalyzer {
    short_period: usize,
    long_period: usize,
    trend_period: usize,
    strong_ratio: f64,
    weak_ratio: f64,
}

impl Default for VolumeAnalyzer {
    fn default() -> Self {
        Self {
            short_period: 20,
            long_period: 50,
            trend_period: 5,
            strong_ratio: 1.2,
            weak_ratio: 0.8,
        }
    }
}

impl VolumeAnalyzer {
    fn average(series: &PriceSeries, period: usize) -> f64 {
        let volumes: Vec<f64> = series.tail(period).iter().map(|b| b.volume).collect();
        mean(&volumes)
    }

    fn classify(&self, price_change: f64, ratio: f64) -> VolumeSignal {
        if price_change > 0.0 && ratio > self.strong_ratio {
            VolumeSignal::BullishStrong
        } else if price_change > 0.0 && ratio < self.weak_ratio {
            VolumeSignal::BullishWeak
        } else if price_change < 0.0 && ratio > self.strong_ratio {
            VolumeSignal::BearishStrong
        } else if price_change < 0.0 && ratio < self.weak_ratio {
            VolumeSignal::BearishWeak
        } else {
            VolumeSignal::Neutral
        }
    }
}

impl Indicator for VolumeAnalyzer {
    type Output = VolumeAnalysis;

    fn id(&self) -> &str {
        "volume"
    }

    fn min_periods(&self) -> usize {
        self.short_period
    }

    fn calculate(&self, series: &PriceSeries) -> VolumeAnalysis {
        let bars = series.bars();
        let current = series.last().volume;
        let avg_20 = Self::average(series, self.short_period);
        let avg_50 = if bars.len() >= self.long_period {
            Self::average(series, self.long_period)
        } else {
            avg_20
        };

        let ratio = if avg_20 > 0.0 { current / avg_20 } else { 1.0 };

        let trend = if current > Self::average(series, self.trend_period) {
            VolumeTrend::Increasing
        } else {
            VolumeTrend::Decreasing
        };

        let price_change = if bars.len() >= 2 {
            bars[bars.len() - 1].close - bars[bars.len() - 2].close
        } else {
            0.0
        };
        let signal = self.classify(price_change, ratio);

        VolumeAnalysis {
            current,
            avg_20,
            avg_50,
            ratio,
            trend,
            signal,
            interpretation: signal.interpretation().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::indicators::test_support::*;
    use crate::types::PriceBar;
    use chrono::{Duration, NaiveDate};

    fn with_last_volume(closes: &[f64], base: f64, last: f64) -> PriceSeries {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let bars = closes
            .iter()
            .enumerate()
            .map(|(i, &c)| {
                let volume = if i == closes.len() - 1 { last } else { base };
                PriceBar::new(start + Duration::days(i as i64), c, c + 1.0, c - 1.0, c, volume)
            })
            .collect();
        PriceSeries::new(bars).unwrap()
    }

    #[test]
    fn test_volume_bullish_strong() {
        let closes: Vec<f64> = (0..25).map(|i| 50.0 + i as f64).collect();
        let analysis = VolumeAnalyzer::default().calculate(&with_last_volume(&closes, 1000.0, 3000.0));
        assert_eq!(analysis.signal, VolumeSignal::BullishStrong);
        assert_eq!(analysis.trend, VolumeTrend::Increasing);
        assert!(analysis.ratio > 1.2);
        assert_eq!(analysis.interpretation, "Price up on high volume - Strong bullish signal");
    }

    #[test]
    fn test_volume_bearish_weak() {
        let closes: Vec<f64> = (0..25).map(|i| 80.0 - i as f64).collect();
        let analysis = VolumeAnalyzer::default().calculate(&with_last_volume(&closes, 1000.0, 100.0));
        assert_eq!(analysis.signal, VolumeSignal::BearishWeak);
        assert_eq!(analysis.trend, VolumeTrend::Decreasing);
    }

    #[test]
    fn test_volume_neutral_on_average_volume() {
        let analysis = VolumeAnalyzer::default().calculate(&uptrend(30));
        assert_eq!(analysis.ratio, 1.0);
        assert_eq!(analysis.signal, VolumeSignal::Neutral);
        assert_eq!(analysis.avg_50, analysis.avg_20);
    }

    #[test]
    fn test_volume_zero_average_ratio() {
        let closes = [10.0, 11.0, 12.0];
        let analysis = VolumeAnalyzer::default().calculate(&with_last_volume(&closes, 0.0, 0.0));
        assert_eq!(analysis.ratio, 1.0);
        assert_eq!(analysis.signal, VolumeSignal::Neutral);
    }

    #[test]
    fn test_volume_single_bar_is_neutral() {
        let analysis = VolumeAnalyzer::default().calculate(&series_from_closes(&[10.0]));
        assert_eq!(analysis.signal, VolumeSignal::Neutral);
    }
}
