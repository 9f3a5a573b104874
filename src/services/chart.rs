//! Chart payloads for the latest bars of a series.

use crate::services::indicators::Sma;
use crate::types::{ChartData, PriceSeries};

/// Column arrays for the last `limit` bars.
///
/// SMA overlays are computed over the full history and then truncated, so
/// the first visible points are already filled when enough history exists.
/// An overlay is omitted entirely when the series is shorter than its period.
pub fn chart_data(series: &PriceSeries, limit: usize) -> ChartData {
    let bars = series.tail(limit);
    let skip = series.len() - bars.len();
    let closes = series.closes();

    let overlay = |period: usize| {
        (series.len() >= period).then(|| Sma::rolling(&closes, period).split_off(skip))
    };

    ChartData {
        dates: bars.iter().map(|b| b.date.format("%Y-%m-%d").to_string()).collect(),
        prices: bars.iter().map(|b| b.close).collect(),
        volumes: bars.iter().map(|b| b.volume).collect(),
        high: bars.iter().map(|b| b.high).collect(),
        low: bars.iter().map(|b| b.low).collect(),
        open: bars.iter().map(|b| b.open).collect(),
        sma_20: overlay(20),
        sma_50: overlay(50),
    }
}
