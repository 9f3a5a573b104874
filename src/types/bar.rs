use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::SeriesError;

/// Daily OHLCV bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceBar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl PriceBar {
    pub fn new(date: NaiveDate, open: f64, high: f64, low: f64, close: f64, volume: f64) -> Self {
        Self {
            date,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    fn is_finite(&self) -> bool {
        self.open.is_finite()
            && self.high.is_finite()
            && self.low.is_finite()
            && self.close.is_finite()
            && self.volume.is_finite()
    }

    /// High must bound open/close/low from above and low must bound them from below.
    fn has_valid_range(&self) -> bool {
        self.high >= self.open.max(self.close).max(self.low)
            && self.low <= self.open.min(self.close).min(self.high)
    }
}

/// Validated, date-ordered price history for one instrument.
///
/// Construction is the only place the core rejects input: bars must be
/// strictly increasing by date with finite prices, a consistent high/low
/// range and non-negative volume. Once built the series is read-only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceSeries {
    bars: Vec<PriceBar>,
}

impl PriceSeries {
    pub fn new(bars: Vec<PriceBar>) -> Result<Self, SeriesError> {
        if bars.is_empty() {
            return Err(SeriesError::Empty);
        }

        for (index, bar) in bars.iter().enumerate() {
            if !bar.is_finite() {
                return Err(SeriesError::NonFinite { date: bar.date });
            }
            if bar.volume < 0.0 {
                return Err(SeriesError::NegativeVolume { date: bar.date });
            }
            if !bar.has_valid_range() {
                return Err(SeriesError::InvalidRange { date: bar.date });
            }
            if index > 0 {
                let previous = &bars[index - 1];
                if bar.date == previous.date {
                    return Err(SeriesError::DuplicateDate { date: bar.date });
                }
                if bar.date < previous.date {
                    return Err(SeriesError::Unordered { index });
                }
            }
        }

        Ok(Self { bars })
    }

    pub fn bars(&self) -> &[PriceBar] {
        &self.bars
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    /// Always false for a constructed series; kept for slice-like ergonomics.
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Closing prices in date order.
    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }

    /// The last `n` bars, or all bars when the series is shorter.
    pub fn tail(&self, n: usize) -> &[PriceBar] {
        &self.bars[self.bars.len().saturating_sub(n)..]
    }

    /// Latest bar. A constructed series is never empty.
    pub fn last(&self) -> &PriceBar {
        &self.bars[self.bars.len() - 1]
    }
}
