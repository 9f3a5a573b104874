pub mod analysis;
pub mod chart;
pub mod components;
pub mod composite;
pub mod indicators;
pub mod loader;
pub mod numeric;
pub mod pipeline;
pub mod scoring;

pub use analysis::{FundamentalAnalyzer, SentimentAnalyzer};
pub use composite::CompositeSignalGenerator;
pub use indicators::{Indicator, IndicatorEngine};
pub use loader::DataLoader;
pub use numeric::parse_numeric_or;
pub use pipeline::{SignalPipeline, TechnicalReport};
pub use scoring::IndicatorSignalScorer;
