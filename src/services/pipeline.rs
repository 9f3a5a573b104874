//! Single entry point from raw inputs to a composite signal.

use serde::Serialize;
use tracing::debug;

use crate::config::AnalysisConfig;
use crate::services::chart::chart_data;
use crate::services::components::{
    ComponentScorer, FundamentalScorer, InsiderScorer, SentimentScorer,
};
use crate::services::composite::CompositeSignalGenerator;
use crate::services::indicators::IndicatorEngine;
use crate::services::scoring::IndicatorSignalScorer;
use crate::types::{
    ChartData, CompositeSignal, FundamentalMetrics, IndicatorSet, InsiderSummary, PriceSeries,
    SentimentSummary,
};

/// Default number of bars in chart payloads.
pub const DEFAULT_CHART_LIMIT: usize = 100;

/// Indicator snapshot together with its chart payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TechnicalReport {
    pub indicators: IndicatorSet,
    pub chart_data: ChartData,
}

pub struct SignalPipeline {
    engine: IndicatorEngine,
    generator: CompositeSignalGenerator,
    fundamental: FundamentalScorer,
    sentiment: SentimentScorer,
    insider: InsiderScorer,
    chart_limit: usize,
}

impl Default for SignalPipeline {
    fn default() -> Self {
        Self::new(AnalysisConfig::default())
    }
}

impl SignalPipeline {
    pub fn new(config: AnalysisConfig) -> Self {
        Self {
            engine: IndicatorEngine::new(config.scoring),
            generator: CompositeSignalGenerator::new(config.weights),
            fundamental: FundamentalScorer,
            sentiment: SentimentScorer,
            insider: InsiderScorer,
            chart_limit: DEFAULT_CHART_LIMIT,
        }
    }

    pub fn with_chart_limit(mut self, limit: usize) -> Self {
        self.chart_limit = limit.max(1);
        self
    }

    pub fn indicators(&self, series: &PriceSeries) -> IndicatorSet {
        self.engine.compute(series)
    }

    pub fn technical_report(&self, series: &PriceSeries) -> TechnicalReport {
        TechnicalReport {
            indicators: self.indicators(series),
            chart_data: chart_data(series, self.chart_limit),
        }
    }

    /// Score every present input and fuse the components.
    pub fn analyze(
        &self,
        series: &PriceSeries,
        fundamentals: Option<&FundamentalMetrics>,
        sentiment: Option<&SentimentSummary>,
        insider: Option<&InsiderSummary>,
    ) -> CompositeSignal {
        let indicators = self.indicators(series);

        let mut components = vec![IndicatorSignalScorer::component(&indicators)];
        if let Some(f) = fundamentals {
            components.push(self.fundamental.score(f));
        }
        if let Some(s) = sentiment {
            components.push(self.sentiment.score(s));
        }
        if let Some(i) = insider {
            components.push(self.insider.score(i));
        }
        debug!("Fusing {} components over {} bars", components.len(), series.len());

        self.generator.generate(Some(&indicators), components)
    }
}
