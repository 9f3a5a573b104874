//! File-based market data loader.
//!
//! Each symbol owns a directory under the data root:
//!
//! ```text
//! <data_dir>/<SYMBOL>/TechnicalAnalysis/   daily / weekly time series
//! <data_dir>/<SYMBOL>/FundamentalData/     company_overview, income_statement, balance_sheet
//! <data_dir>/<SYMBOL>/SentimentData/       financial_news, earnings_transcript_*, sentiment_scores
//! <data_dir>/<SYMBOL>/AlternativeData/     insider_transactions
//! ```
//!
//! When several files match, the lexicographically last name wins.

pub mod alphavantage;
pub mod insider;

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use dashmap::DashMap;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::config::FundamentalBenchmarks;
use crate::error::{AppError, Result};
use crate::services::analysis::{
    FundamentalAnalyzer, FundamentalDocuments, FundamentalReport, SentimentAnalyzer,
    SentimentDocuments, SentimentReport,
};
use crate::types::{InsiderSummary, PriceSeries};

const TECHNICAL_DIR: &str = "TechnicalAnalysis";
const FUNDAMENTAL_DIR: &str = "FundamentalData";
const SENTIMENT_DIR: &str = "SentimentData";
const ALTERNATIVE_DIR: &str = "AlternativeData";

/// Loads and caches per-symbol data files.
pub struct DataLoader {
    data_dir: PathBuf,
    fundamental_analyzer: FundamentalAnalyzer,
    sentiment_analyzer: SentimentAnalyzer,
    prices: DashMap<String, Arc<PriceSeries>>,
    fundamentals: DashMap<String, Arc<FundamentalDocuments>>,
    sentiment: DashMap<String, Arc<SentimentDocuments>>,
    insider: DashMap<String, InsiderSummary>,
}

impl DataLoader {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self::with_benchmarks(data_dir, FundamentalBenchmarks::default())
    }

    pub fn with_benchmarks(data_dir: impl Into<PathBuf>, benchmarks: FundamentalBenchmarks) -> Self {
        Self {
            data_dir: data_dir.into(),
            fundamental_analyzer: FundamentalAnalyzer::new(benchmarks),
            sentiment_analyzer: SentimentAnalyzer,
            prices: DashMap::new(),
            fundamentals: DashMap::new(),
            sentiment: DashMap::new(),
            insider: DashMap::new(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Sorted symbols whose directory holds a daily or weekly price file.
    pub fn available_symbols(&self) -> Vec<String> {
        let entries = match fs::read_dir(&self.data_dir) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("Cannot read data directory {}: {}", self.data_dir.display(), e);
                return Vec::new();
            }
        };

        let mut symbols: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().is_dir())
            .filter_map(|entry| entry.file_name().to_str().map(str::to_uppercase))
            .filter(|symbol| self.price_file(symbol).is_some())
            .collect();
        symbols.sort();
        symbols.dedup();
        symbols
    }

    /// Daily prices, falling back to weekly. `Ok(None)` when neither exists.
    pub fn load_price_series(&self, symbol: &str) -> Result<Option<Arc<PriceSeries>>> {
        let symbol = normalize_symbol(symbol)?;
        if let Some(cached) = self.prices.get(&symbol) {
            return Ok(Some(cached.clone()));
        }

        let Some(path) = self.price_file(&symbol) else {
            debug!("No price file for {}", symbol);
            return Ok(None);
        };
        let doc = read_json(&path)?;
        let Some(series) = alphavantage::parse_time_series(&doc)? else {
            warn!("{} has no time series data", path.display());
            return Ok(None);
        };

        info!("Loaded {} bars for {} from {}", series.len(), symbol, path.display());
        let series = Arc::new(series);
        self.prices.insert(symbol, series.clone());
        Ok(Some(series))
    }

    pub fn load_fundamental_documents(&self, symbol: &str) -> Result<Option<Arc<FundamentalDocuments>>> {
        let symbol = normalize_symbol(symbol)?;
        if let Some(cached) = self.fundamentals.get(&symbol) {
            return Ok(Some(cached.clone()));
        }

        let dir = self.symbol_dir(&symbol).join(FUNDAMENTAL_DIR);
        let docs = FundamentalDocuments {
            overview: read_optional(latest_file(&dir, |n| n.starts_with("company_overview")))?,
            income: read_optional(latest_file(&dir, |n| n.starts_with("income_statement")))?,
            balance: read_optional(latest_file(&dir, |n| n.starts_with("balance_sheet")))?,
        };
        if docs.is_empty() {
            return Ok(None);
        }

        let docs = Arc::new(docs);
        self.fundamentals.insert(symbol, docs.clone());
        Ok(Some(docs))
    }

    /// Fundamental report for `symbol`. `Ok(None)` without any fundamental file.
    pub fn load_fundamentals(&self, symbol: &str) -> Result<Option<FundamentalReport>> {
        Ok(self
            .load_fundamental_documents(symbol)?
            .map(|docs| self.fundamental_analyzer.analyze(&docs)))
    }

    pub fn load_sentiment_documents(&self, symbol: &str) -> Result<Option<Arc<SentimentDocuments>>> {
        let symbol = normalize_symbol(symbol)?;
        if let Some(cached) = self.sentiment.get(&symbol) {
            return Ok(Some(cached.clone()));
        }

        let dir = self.symbol_dir(&symbol).join(SENTIMENT_DIR);
        let transcripts = matching_files(&dir, |n| n.starts_with("earnings_transcript_"))
            .iter()
            .map(|path| read_json(path))
            .collect::<Result<Vec<Value>>>()?;
        let docs = SentimentDocuments {
            news: read_optional(latest_file(&dir, |n| n.starts_with("financial_news")))?,
            transcripts,
            scores: read_optional(latest_file(&dir, |n| n.starts_with("sentiment_scores")))?,
            symbol: symbol.clone(),
        };
        if docs.is_empty() {
            return Ok(None);
        }

        let docs = Arc::new(docs);
        self.sentiment.insert(symbol, docs.clone());
        Ok(Some(docs))
    }

    /// Sentiment report for `symbol`. `Ok(None)` without any sentiment file.
    pub fn load_sentiment(&self, symbol: &str) -> Result<Option<SentimentReport>> {
        Ok(self
            .load_sentiment_documents(symbol)?
            .map(|docs| self.sentiment_analyzer.analyze(&docs)))
    }

    /// Insider summary. `Ok(None)` without a transaction file or `data` array.
    pub fn load_insider(&self, symbol: &str) -> Result<Option<InsiderSummary>> {
        let symbol = normalize_symbol(symbol)?;
        if let Some(cached) = self.insider.get(&symbol) {
            return Ok(Some(*cached));
        }

        let dir = self.symbol_dir(&symbol).join(ALTERNATIVE_DIR);
        let Some(doc) = read_optional(latest_file(&dir, |n| n.starts_with("insider_transactions")))? else {
            return Ok(None);
        };
        let Some(summary) = insider::summarize(&doc) else {
            return Ok(None);
        };

        self.insider.insert(symbol, summary);
        Ok(Some(summary))
    }

    pub fn clear_cache(&self) {
        self.prices.clear();
        self.fundamentals.clear();
        self.sentiment.clear();
        self.insider.clear();
        debug!("Data loader cache cleared");
    }

    fn symbol_dir(&self, symbol: &str) -> PathBuf {
        self.data_dir.join(symbol)
    }

    fn price_file(&self, symbol: &str) -> Option<PathBuf> {
        let dir = self.symbol_dir(symbol).join(TECHNICAL_DIR);
        latest_file(&dir, |n| n.contains("daily"))
            .or_else(|| latest_file(&dir, |n| n.contains("weekly")))
    }
}

/// Upper-case a symbol, rejecting anything that is not a plain ticker.
pub fn normalize_symbol(symbol: &str) -> Result<String> {
    let symbol = symbol.trim();
    let valid = !symbol.is_empty()
        && symbol.len() <= 16
        && symbol
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
        && !symbol.starts_with('.');
    if !valid {
        return Err(AppError::BadRequest(format!("Invalid symbol: {}", symbol)));
    }
    Ok(symbol.to_uppercase())
}

/// JSON files in `dir` whose lower-cased name satisfies `matches`, sorted by name.
fn matching_files(dir: &Path, matches: impl Fn(&str) -> bool) -> Vec<PathBuf> {
    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };
    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .filter(|path| {
            path.file_name()
                .and_then(|n| n.to_str())
                .map(str::to_lowercase)
                .is_some_and(|name| name.ends_with(".json") && matches(&name))
        })
        .collect();
    files.sort();
    files
}

fn latest_file(dir: &Path, matches: impl Fn(&str) -> bool) -> Option<PathBuf> {
    matching_files(dir, matches).pop()
}

fn read_json(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| {
        warn!("Failed to parse {}: {}", path.display(), e);
        AppError::from(e)
    })
}

fn read_optional(path: Option<PathBuf>) -> Result<Option<Value>> {
    path.map(|p| read_json(&p)).transpose()
}
