//! Analyzers that reduce raw vendor documents to scored summaries.

pub mod fundamental;
pub mod sentiment;

pub use fundamental::{FundamentalAnalyzer, FundamentalDocuments, FundamentalReport};
pub use sentiment::{SentimentAnalyzer, SentimentDocuments, SentimentReport};
