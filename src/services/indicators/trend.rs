//! Trend classification.

use crate::types::{PriceSeries, SmaSet, Trend};

/// Votes price position against the SMA tiers together with recent price
/// action and higher-highs/higher-lows structure.
///
/// Score: +1 per SMA the price is above, +1 when the close rose across the
/// window, +2 when both the window high and low rose.
/// Classes: >= 4 strong uptrend, >= 2 uptrend, >= 1 neutral, else downtrend.
pub struct TrendClassifier {
    window: usize,
}

impl Default for TrendClassifier {
    fn default() -> Self {
        Self { window: 10 }
    }
}

impl TrendClassifier {
    pub fn score(&self, series: &PriceSeries, sma: &SmaSet) -> u32 {
        let price = series.last().close;
        let mut score = [sma.sma_20, sma.sma_50, sma.sma_200]
            .iter()
            .flatten()
            .filter(|avg| price > **avg)
            .count() as u32;

        let recent = series.tail(self.window);
        if let (Some(first), Some(last)) = (recent.first(), recent.last()) {
            if last.close > first.close {
                score += 1;
            }
            if last.high > first.high && last.low > first.low {
                score += 2;
            }
        }
        score
    }

    pub fn classify(&self, series: &PriceSeries, sma: &SmaSet) -> Trend {
        match self.score(series, sma) {
            s if s >= 4 => Trend::StrongUptrend,
            s if s >= 2 => Trend::Uptrend,
            s if s >= 1 => Trend::Neutral,
            _ => Trend::Downtrend,
        }
    }
}
