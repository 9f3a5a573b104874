//! Alpha Vantage time series documents.

use chrono::NaiveDate;
use serde_json::{Map, Value};
use tracing::warn;

use crate::error::{AppError, Result};
use crate::services::numeric::parse_numeric_or;
use crate::types::{PriceBar, PriceSeries};

/// Find the `"Time Series (...)"` object of a time series document.
fn time_series(doc: &Value) -> Option<&Map<String, Value>> {
    doc.as_object()?
        .iter()
        .find(|(key, _)| key.to_lowercase().contains("time series"))
        .and_then(|(_, series)| series.as_object())
}

/// First present field among `keys`.
fn first_of<'a>(point: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().find_map(|k| point.get(*k))
}

/// Convert one dated data point into a bar. Unparseable dates are skipped.
fn parse_point(date: &str, point: &Value) -> Option<PriceBar> {
    let date = match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(d) => d,
        Err(e) => {
            warn!("Skipping time series entry with date {:?}: {}", date, e);
            return None;
        }
    };

    Some(PriceBar::new(
        date,
        parse_numeric_or(first_of(point, &["1. open", "open"]), 0.0, "open"),
        parse_numeric_or(first_of(point, &["2. high", "high"]), 0.0, "high"),
        parse_numeric_or(first_of(point, &["3. low", "low"]), 0.0, "low"),
        parse_numeric_or(first_of(point, &["4. close", "close"]), 0.0, "close"),
        parse_numeric_or(
            first_of(point, &["6. volume", "5. volume", "volume"]),
            0.0,
            "volume",
        ),
    ))
}

/// Parse a daily or weekly time series document into a validated series.
///
/// Returns `Ok(None)` when the document has no time series or no usable bars.
pub fn parse_time_series(doc: &Value) -> Result<Option<PriceSeries>> {
    let Some(series) = time_series(doc) else {
        return Ok(None);
    };

    let mut bars: Vec<PriceBar> = series
        .iter()
        .filter_map(|(date, point)| parse_point(date, point))
        .collect();
    if bars.is_empty() {
        return Ok(None);
    }
    bars.sort_by_key(|b| b.date);

    PriceSeries::new(bars).map(Some).map_err(AppError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_daily_adjusted() {
        let doc = json!({
            "Meta Data": {"2. Symbol": "IBM"},
            "Time Series (Daily)": {
                "2024-01-03": {"1. open": "101", "2. high": "103", "3. low": "100",
                               "4. close": "102", "5. adjusted close": "101.5", "6. volume": "5000"},
                "2024-01-02": {"1. open": "100", "2. high": "102", "3. low": "99",
                               "4. close": "101", "5. adjusted close": "100.5", "6. volume": "4000"}
            }
        });
        let series = parse_time_series(&doc).unwrap().unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series.bars()[0].date, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
        assert_eq!(series.last().close, 102.0);
        assert_eq!(series.last().volume, 5000.0);
    }

    #[test]
    fn test_parse_weekly_volume_key() {
        let doc = json!({
            "Weekly Time Series": {
                "2024-01-05": {"1. open": "10", "2. high": "12", "3. low": "9",
                               "4. close": "11", "5. volume": "777"}
            }
        });
        let series = parse_time_series(&doc).unwrap().unwrap();
        assert_eq!(series.last().volume, 777.0);
    }

    #[test]
    fn test_missing_time_series() {
        assert!(parse_time_series(&json!({"Note": "rate limited"})).unwrap().is_none());
        assert!(parse_time_series(&json!({"Time Series (Daily)": {}})).unwrap().is_none());
    }

    #[test]
    fn test_invalid_bar_is_an_error() {
        let doc = json!({
            "Time Series (Daily)": {
                "2024-01-02": {"1. open": "10", "2. high": "8", "3. low": "9", "4. close": "9.5", "6. volume": "1"}
            }
        });
        assert!(matches!(parse_time_series(&doc), Err(AppError::InvalidSeries(_))));
    }
}
