//! Fixture data directories for loader and API tests.

#![allow(dead_code)]

use std::fs;
use std::path::Path;

use chrono::{Duration, NaiveDate};
use serde_json::{json, Map, Value};
use tempfile::TempDir;

/// Alpha Vantage daily document with `count` bars of a gentle uptrend.
pub fn daily_series(count: usize) -> Value {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let mut series = Map::new();
    for i in 0..count {
        let close = 150.0 + i as f64 * 0.5 + if i % 2 == 0 { 0.8 } else { -0.8 };
        let date = (start + Duration::days(i as i64)).format("%Y-%m-%d").to_string();
        series.insert(
            date,
            json!({
                "1. open": format!("{:.2}", close - 0.3),
                "2. high": format!("{:.2}", close + 1.0),
                "3. low": format!("{:.2}", close - 1.0),
                "4. close": format!("{:.2}", close),
                "5. adjusted close": format!("{:.2}", close),
                "6. volume": format!("{}", 100_000 + i * 1_000),
            }),
        );
    }
    json!({
        "Meta Data": {"1. Information": "Daily Prices", "2. Symbol": "IBM"},
        "Time Series (Daily)": series,
    })
}

fn write(path: &Path, value: &Value) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, serde_json::to_string_pretty(value).unwrap()).unwrap();
}

/// A data root containing a fully populated `IBM` directory.
pub fn populated_data_dir() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    let ibm = dir.path().join("IBM");

    write(&ibm.join("TechnicalAnalysis/ibm_daily_adjusted.json"), &daily_series(120));
    write(
        &ibm.join("FundamentalData/company_overview.json"),
        &json!({
            "Symbol": "IBM",
            "PERatio": "18.0",
            "PEGRatio": "1.4",
            "PriceToBookRatio": "7.1",
            "ProfitMargin": "0.12",
            "OperatingMarginTTM": "0.15",
            "ReturnOnEquityTTM": "0.28",
            "DividendYield": "0.045"
        }),
    );
    write(
        &ibm.join("FundamentalData/income_statement.json"),
        &json!({"annualReports": [
            {"totalRevenue": "62000000000", "netIncome": "7500000000"},
            {"totalRevenue": "60500000000", "netIncome": "1600000000"}
        ]}),
    );
    write(
        &ibm.join("FundamentalData/balance_sheet.json"),
        &json!({"annualReports": [{
            "totalLiabilities": "112000000000",
            "totalShareholderEquity": "22000000000",
            "totalCurrentAssets": "32000000000",
            "totalCurrentLiabilities": "34000000000",
            "inventory": "1100000000"
        }]}),
    );
    write(
        &ibm.join("SentimentData/financial_news.json"),
        &json!({"articles": [
            {"title": "a", "sentiment": {"polarity": 0.4}},
            {"title": "b", "sentiment": {"polarity": 0.1}}
        ]}),
    );
    write(
        &ibm.join("SentimentData/earnings_transcript_2024Q1.json"),
        &json!({"sentiment_analysis": {"overall_sentiment": "positive"}}),
    );
    write(
        &ibm.join("AlternativeData/insider_transactions.json"),
        &json!({"data": [
            {"transaction_type": "A - Acquisition", "securities_transacted": "2000", "security_price": "180"},
            {"transaction_type": "D - Sale", "securities_transacted": "500", "security_price": "180"}
        ]}),
    );
    dir
}

/// Secondary symbol with only weekly prices.
pub fn add_weekly_symbol(root: &Path, symbol: &str, count: usize) {
    let mut doc = daily_series(count);
    let series = doc["Time Series (Daily)"].take();
    let weekly = json!({ "Weekly Adjusted Time Series": series });
    write(
        &root
            .join(symbol)
            .join(format!("TechnicalAnalysis/{}_weekly.json", symbol.to_lowercase())),
        &weekly,
    );
}
