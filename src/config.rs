use std::env;
use std::path::PathBuf;

use crate::types::ComponentKind;

/// Fusion weight per analysis domain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DomainWeights {
    pub technical: f64,
    pub fundamental: f64,
    pub sentiment: f64,
    pub insider: f64,
}

impl Default for DomainWeights {
    fn default() -> Self {
        Self {
            technical: 0.40,
            fundamental: 0.30,
            sentiment: 0.20,
            insider: 0.10,
        }
    }
}

impl DomainWeights {
    pub fn weight(&self, kind: ComponentKind) -> f64 {
        match kind {
            ComponentKind::Technical => self.technical,
            ComponentKind::Fundamental => self.fundamental,
            ComponentKind::Sentiment => self.sentiment,
            ComponentKind::Insider => self.insider,
        }
    }
}

/// Thresholds and rule weights of the technical scorer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringConfig {
    pub rsi_overbought: f64,
    pub rsi_oversold: f64,
    pub rsi_weight: f64,
    pub macd_weight: f64,
    pub sma_weight: f64,
    pub volume_weight: f64,
    pub strong_threshold: f64,
    pub action_threshold: f64,
    pub confidence_multiplier: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            rsi_overbought: 70.0,
            rsi_oversold: 30.0,
            rsi_weight: 20.0,
            macd_weight: 25.0,
            sma_weight: 20.0,
            volume_weight: 15.0,
            strong_threshold: 30.0,
            action_threshold: 10.0,
            confidence_multiplier: 1.5,
        }
    }
}

/// Industry reference values for fundamental scoring (technology sector).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FundamentalBenchmarks {
    pub pe_ratio: f64,
    pub profit_margin: f64,
    pub roe: f64,
    pub debt_to_equity: f64,
    pub current_ratio: f64,
    pub revenue_growth: f64,
}

impl Default for FundamentalBenchmarks {
    fn default() -> Self {
        Self {
            pe_ratio: 25.0,
            profit_margin: 15.0,
            roe: 15.0,
            debt_to_equity: 1.0,
            current_ratio: 1.5,
            revenue_growth: 10.0,
        }
    }
}

/// All tunable tables of the analysis pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AnalysisConfig {
    pub weights: DomainWeights,
    pub scoring: ScoringConfig,
    pub benchmarks: FundamentalBenchmarks,
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
    /// Root directory holding one sub-directory per symbol.
    pub data_dir: PathBuf,
    /// Symbol advertised by `/api/symbols` as the default.
    pub default_symbol: String,
    /// Number of bars included in chart payloads.
    pub chart_limit: usize,
    pub analysis: AnalysisConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            data_dir: PathBuf::from("data"),
            default_symbol: "IBM".to_string(),
            chart_limit: 100,
            analysis: AnalysisConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            host: env::var("HOST").unwrap_or(defaults.host),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            data_dir: env::var("DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
            default_symbol: env::var("DEFAULT_SYMBOL")
                .map(|s| s.to_uppercase())
                .unwrap_or(defaults.default_symbol),
            chart_limit: env::var("CHART_LIMIT")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|v: &usize| *v > 0)
                .unwrap_or(defaults.chart_limit),
            analysis: AnalysisConfig::default(),
        }
    }

    /// Socket address string for binding.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
